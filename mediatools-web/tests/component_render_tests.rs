use futures::executor::block_on;
use mediatools_core::Theme;
use mediatools_web::components::faq::{Faq, FaqEntry};
use mediatools_web::components::footer::Footer;
use mediatools_web::components::header::Header;
use mediatools_web::components::progress_bar::ProgressBar;
use mediatools_web::components::tool_grid::{ToolGrid, ToolSection};
use mediatools_web::components::upload_zone::UploadZone;
use mediatools_web::pages::home::catalog;
use yew::{Callback, LocalServerRenderer};

#[test]
fn header_renders_search_and_theme_toggle() {
    let props = mediatools_web::components::header::Props {
        current_theme: Theme::Light,
        on_toggle_theme: Callback::noop(),
        on_search: Callback::noop(),
        query: "".into(),
    };
    let html = block_on(LocalServerRenderer::<Header>::with_props(props).render());
    assert!(html.contains("header-search"));
    assert!(html.contains("theme-toggle"));
    assert!(html.contains("bi bi-moon-fill"), "light mode offers the moon icon: {html}");
}

#[test]
fn header_dark_mode_offers_sun_icon() {
    let props = mediatools_web::components::header::Props {
        current_theme: Theme::Dark,
        on_toggle_theme: Callback::noop(),
        on_search: Callback::noop(),
        query: "".into(),
    };
    let html = block_on(LocalServerRenderer::<Header>::with_props(props).render());
    assert!(html.contains("bi bi-sun-fill"));
}

#[test]
fn footer_renders_copy() {
    let html = block_on(LocalServerRenderer::<Footer>::new().render());
    assert!(html.contains("<footer>"));
}

#[test]
fn progress_bar_reports_percent_and_active_state() {
    let props = mediatools_web::components::progress_bar::Props {
        percent: 40,
        active: true,
    };
    let html = block_on(LocalServerRenderer::<ProgressBar>::with_props(props).render());
    assert!(html.contains("width: 40%"));
    assert!(html.contains("40%"));
    assert!(html.contains("active"));

    let idle = mediatools_web::components::progress_bar::Props {
        percent: 0,
        active: false,
    };
    let html = block_on(LocalServerRenderer::<ProgressBar>::with_props(idle).render());
    assert!(html.contains("width: 0%"));
    assert!(!html.contains("active"));
}

#[test]
fn faq_starts_with_every_answer_collapsed() {
    let props = mediatools_web::components::faq::Props {
        entries: vec![
            FaqEntry {
                question: "Q1".into(),
                answer: "A1".into(),
            },
            FaqEntry {
                question: "Q2".into(),
                answer: "A2".into(),
            },
        ],
    };
    let html = block_on(LocalServerRenderer::<Faq>::with_props(props).render());
    assert!(html.contains("Q1"));
    assert!(html.contains("Q2"));
    assert!(!html.contains("aria-expanded=\"true\""));
}

#[test]
fn upload_zone_renders_zone_input_and_idle_preview() {
    let props = mediatools_web::components::upload_zone::Props {
        prompt: None,
        accept: Some("image/*".into()),
        on_accepted: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<UploadZone>::with_props(props).render());
    assert!(html.contains("upload-area"));
    assert!(html.contains("type=\"file\""));
    assert!(html.contains("upload-preview"));
    assert!(!html.contains("upload-preview active"));
    assert!(!html.contains("dragover"));
}

fn grid_props(query: &str) -> mediatools_web::components::tool_grid::Props {
    mediatools_web::components::tool_grid::Props {
        sections: catalog(),
        query: query.to_string().into(),
    }
}

#[test]
fn tool_grid_empty_query_shows_all_sections() {
    let html = block_on(LocalServerRenderer::<ToolGrid>::with_props(grid_props("")).render());
    assert!(html.contains("Image Tools"));
    assert!(html.contains("Video Tools"));
    assert!(html.contains("Audio Tools"));
}

#[test]
fn tool_grid_query_hides_non_matching_sections() {
    let html = block_on(LocalServerRenderer::<ToolGrid>::with_props(grid_props("audio")).render());
    assert!(html.contains("Audio Converter"));
    assert!(!html.contains("Image Resizer"));
    assert!(!html.contains("Image Tools"));
}

#[test]
fn tool_grid_unmatched_query_hides_everything() {
    let html =
        block_on(LocalServerRenderer::<ToolGrid>::with_props(grid_props("zzz-nothing")).render());
    assert!(!html.contains("tools-section"));
}

#[test]
fn tool_grid_accepts_custom_sections() {
    let props = mediatools_web::components::tool_grid::Props {
        sections: vec![ToolSection {
            heading: "Misc".into(),
            cards: vec![],
        }],
        query: "".into(),
    };
    let html = block_on(LocalServerRenderer::<ToolGrid>::with_props(props).render());
    // A section with no cards has no visible card, so it is hidden.
    assert!(!html.contains("Misc"));
}
