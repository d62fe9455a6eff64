use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Percentage in [0, 100].
    pub percent: u8,
    /// Whether a run is in flight; idle bars are dimmed by CSS.
    #[prop_or_default]
    pub active: bool,
}

#[function_component(ProgressBar)]
pub fn progress_bar(p: &Props) -> Html {
    let percent = p.percent.min(100);
    let class = if p.active {
        classes!("progress-bar", "active")
    } else {
        classes!("progress-bar")
    };
    html! {
        <div
            class={class}
            role="progressbar"
            aria-valuenow={percent.to_string()}
            aria-valuemin="0"
            aria-valuemax="100"
        >
            <div class="progress-fill" style={format!("width: {percent}%")}>
                { format!("{percent}%") }
            </div>
        </div>
    }
}
