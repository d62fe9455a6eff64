//! Header/footer fragment loading.
//!
//! The site chrome is served as static HTML snippets fetched at page load
//! and injected verbatim into placeholder nodes. A failed fetch is logged
//! and leaves the placeholder empty; the page stays usable.

pub const HEADER_URL: &str = "header.html";
pub const FOOTER_URL: &str = "footer.html";
pub const HEADER_PLACEHOLDER_ID: &str = "header-placeholder";
pub const FOOTER_PLACEHOLDER_ID: &str = "footer-placeholder";

/// Kick off both fragment loads. Fire-and-forget: no timeout, no retry.
#[cfg(target_arch = "wasm32")]
pub fn load_layout_fragments() {
    load_fragment(HEADER_URL, HEADER_PLACEHOLDER_ID, true);
    load_fragment(FOOTER_URL, FOOTER_PLACEHOLDER_ID, false);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_layout_fragments() {}

#[cfg(target_arch = "wasm32")]
fn load_fragment(url: &'static str, placeholder_id: &'static str, is_header: bool) {
    use crate::dom;

    wasm_bindgen_futures::spawn_local(async move {
        match dom::fetch_text(url).await {
            Ok(markup) => {
                if let Some(node) = dom::document().get_element_by_id(placeholder_id) {
                    node.set_inner_html(&markup);
                }
                if is_header {
                    // Injected markup may carry the theme icon; re-apply
                    // the saved preference so it starts in the right state.
                    crate::theme::apply_theme(crate::theme::persisted_theme());
                }
            }
            Err(err) => {
                let message =
                    format!("Error loading {url}: {}", dom::js_error_message(&err));
                log::error!("{message}");
                dom::console_error(&message);
            }
        }
    });
}
