use mediatools_core::{CardInfo, visible_sections};
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct ToolCard {
    pub title: AttrValue,
    pub description: AttrValue,
    pub href: AttrValue,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToolSection {
    pub heading: AttrValue,
    pub cards: Vec<ToolCard>,
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub sections: Vec<ToolSection>,
    /// Lowercased search query; empty shows everything.
    #[prop_or_default]
    pub query: AttrValue,
}

/// The index-page card grid. Visibility is recomputed from scratch on
/// every render; a section whose cards are all filtered out disappears
/// with them.
#[function_component(ToolGrid)]
pub fn tool_grid(p: &Props) -> Html {
    let infos: Vec<Vec<CardInfo>> = p
        .sections
        .iter()
        .map(|section| {
            section
                .cards
                .iter()
                .map(|card| CardInfo {
                    title: card.title.to_string(),
                    description: card.description.to_string(),
                })
                .collect()
        })
        .collect();
    let visibility = visible_sections(&infos, &p.query);

    html! {
        <div class="tools-grid">
            { for p.sections.iter().zip(visibility.iter()).filter(|(_, vis)| vis.visible).map(|(section, vis)| html! {
                <section class="tools-section">
                    <h2>{ section.heading.clone() }</h2>
                    <div class="section-cards">
                        { for section.cards.iter().zip(vis.cards.iter()).filter(|(_, shown)| **shown).map(|(card, _)| html! {
                            <a class="tool-card" href={card.href.clone()}>
                                <h3>{ card.title.clone() }</h3>
                                <p>{ card.description.clone() }</p>
                            </a>
                        }) }
                    </div>
                </section>
            }) }
        </div>
    }
}
