use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::pages::convert::Convert;
use crate::pages::home::Home;
use crate::pages::not_found::NotFound;
use crate::router::Route;

fn switch(route: Route, query: AttrValue) -> Html {
    match route {
        Route::Home => html! { <Home query={query} /> },
        Route::Convert => html! { <Convert /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let theme = use_state(|| {
        #[cfg(target_arch = "wasm32")]
        {
            crate::theme::persisted_theme()
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            mediatools_core::Theme::default()
        }
    });
    let query = use_state(AttrValue::default);

    // The static site chrome arrives as fetched fragments; load them once
    // the shell is mounted.
    use_effect_with((), |_| {
        crate::fragments::load_layout_fragments();
        || {}
    });

    let on_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |()| {
            theme.set(crate::theme::toggle_theme());
        })
    };
    let on_search = {
        let query = query.clone();
        Callback::from(move |term: String| query.set(term.into()))
    };

    let render = {
        let query = (*query).clone();
        Callback::from(move |route: Route| switch(route, query.clone()))
    };

    html! {
        <BrowserRouter>
            <div id="header-placeholder"></div>
            <Header
                current_theme={*theme}
                on_toggle_theme={on_toggle_theme}
                on_search={on_search}
                query={(*query).clone()}
            />
            <main id="main" role="main">
                <Switch<Route> render={render} />
            </main>
            <Footer />
            <div id="footer-placeholder"></div>
        </BrowserRouter>
    }
}
