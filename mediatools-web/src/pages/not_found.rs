use yew::prelude::*;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{ "Page not found" }</h1>
            <p>{ "The tool you are looking for does not exist." }</p>
            <a href="index.html">{ "Back to all tools" }</a>
        </div>
    }
}
