use mediatools_core::AccordionState;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct FaqEntry {
    pub question: AttrValue,
    pub answer: AttrValue,
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub entries: Vec<FaqEntry>,
}

/// FAQ accordion with at most one entry expanded. Clicking the open
/// entry collapses it again.
#[function_component(Faq)]
pub fn faq(p: &Props) -> Html {
    let state = use_state(AccordionState::new);

    html! {
        <div class="faq">
            { for p.entries.iter().enumerate().map(|(index, entry)| {
                let open = state.is_open(index);
                let toggle = {
                    let state = state.clone();
                    Callback::from(move |_: MouseEvent| {
                        state.set(state.toggled(index));
                    })
                };
                let class = if open {
                    classes!("faq-item", "active")
                } else {
                    classes!("faq-item")
                };
                html! {
                    <div class={class}>
                        <button
                            class="faq-question"
                            onclick={toggle}
                            aria-expanded={open.to_string()}
                        >
                            { entry.question.clone() }
                        </button>
                        <div class="faq-answer" hidden={!open}>
                            { entry.answer.clone() }
                        </div>
                    </div>
                }
            }) }
        </div>
    }
}
