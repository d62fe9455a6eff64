use mediatools_core::Theme;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::theme::THEME_ICON_ID;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub current_theme: Theme,
    pub on_toggle_theme: Callback<()>,
    pub on_search: Callback<String>,
    pub query: AttrValue,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let on_input = {
        let cb = p.on_search.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            {
                cb.emit(input.value().to_lowercase());
            }
        })
    };
    let toggle = {
        let cb = p.on_toggle_theme.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <header role="banner">
            <a href="#main" class="sr-only">{ "Skip to content" }</a>
            <div class="header-content">
                <a class="brand" href="index.html">{ "MediaTools" }</a>
                <div class="header-right">
                    <label for="header-search" class="sr-only">{ "Search tools" }</label>
                    <input
                        id="header-search"
                        type="search"
                        placeholder="Search tools..."
                        value={p.query.clone()}
                        oninput={on_input}
                        aria-label="Search tools"
                    />
                    <button
                        id="theme-toggle"
                        onclick={toggle}
                        aria-label="Toggle color theme"
                    >
                        <i id={THEME_ICON_ID} class={p.current_theme.icon_class()}></i>
                    </button>
                </div>
            </div>
        </header>
    }
}
