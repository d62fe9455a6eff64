use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer>{ "MediaTools — free in-browser file utilities" }</footer>
    }
}
