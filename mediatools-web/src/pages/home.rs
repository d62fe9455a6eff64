use yew::prelude::*;

use crate::components::faq::{Faq, FaqEntry};
use crate::components::tool_grid::{ToolCard, ToolGrid, ToolSection};

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Lowercased query from the header search box.
    #[prop_or_default]
    pub query: AttrValue,
}

fn card(title: &'static str, description: &'static str, href: &'static str) -> ToolCard {
    ToolCard {
        title: title.into(),
        description: description.into(),
        href: href.into(),
    }
}

/// Static tool catalog shown on the index page.
#[must_use]
pub fn catalog() -> Vec<ToolSection> {
    vec![
        ToolSection {
            heading: "Image Tools".into(),
            cards: vec![
                card(
                    "Image Converter",
                    "Convert between JPG, PNG, WebP, and more",
                    "convert.html",
                ),
                card(
                    "Image Resizer",
                    "Resize pictures without leaving the browser",
                    "convert.html",
                ),
            ],
        },
        ToolSection {
            heading: "Video Tools".into(),
            cards: vec![
                card(
                    "Video Converter",
                    "Turn MOV, AVI, or MKV clips into MP4",
                    "convert.html",
                ),
                card(
                    "Video Trimmer",
                    "Cut a clip down to the part you need",
                    "convert.html",
                ),
            ],
        },
        ToolSection {
            heading: "Audio Tools".into(),
            cards: vec![
                card(
                    "Audio Converter",
                    "Convert WAV, FLAC, and OGG to MP3",
                    "convert.html",
                ),
                card(
                    "Audio Cutter",
                    "Trim a track or make a ringtone",
                    "convert.html",
                ),
            ],
        },
    ]
}

fn faq_entries() -> Vec<FaqEntry> {
    vec![
        FaqEntry {
            question: "Are my files uploaded anywhere?".into(),
            answer: "No. Everything runs in your browser; files never leave your device.".into(),
        },
        FaqEntry {
            question: "What is the maximum file size?".into(),
            answer: "Files up to 100 MB are accepted.".into(),
        },
        FaqEntry {
            question: "Which formats are supported?".into(),
            answer: "Common image, video, and audio formats, plus vector and document \
                     formats such as SVG and PDF."
                .into(),
        },
    ]
}

#[function_component(Home)]
pub fn home(p: &Props) -> Html {
    html! {
        <>
            <ToolGrid sections={catalog()} query={p.query.clone()} />
            <section class="faq-section">
                <h2>{ "Frequently Asked Questions" }</h2>
                <Faq entries={faq_entries()} />
            </section>
        </>
    }
}
