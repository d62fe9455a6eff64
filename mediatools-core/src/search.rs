//! Client-side filtering of the tool card grid.
//!
//! Matching is stateless and recomputed in full on every keystroke; the
//! grid is small enough that an index would buy nothing.

/// Title and description of one tool card, as rendered on the index page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardInfo {
    pub title: String,
    pub description: String,
}

/// Per-section outcome of a filter pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionVisibility {
    /// Visibility of each card in the section, in order.
    pub cards: Vec<bool>,
    /// A section with zero visible cards is hidden entirely.
    pub visible: bool,
}

/// Case-insensitive substring match of `query` against title OR description.
/// The empty query matches every card.
#[must_use]
pub fn card_matches(query: &str, title: &str, description: &str) -> bool {
    let needle = query.to_lowercase();
    title.to_lowercase().contains(&needle) || description.to_lowercase().contains(&needle)
}

/// Compute visibility for every section and card under `query`.
#[must_use]
pub fn visible_sections(sections: &[Vec<CardInfo>], query: &str) -> Vec<SectionVisibility> {
    sections
        .iter()
        .map(|cards| {
            let card_vis: Vec<bool> = cards
                .iter()
                .map(|card| card_matches(query, &card.title, &card.description))
                .collect();
            let any = card_vis.iter().any(|v| *v);
            SectionVisibility {
                cards: card_vis,
                visible: any,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(title: &str, description: &str) -> CardInfo {
        CardInfo {
            title: title.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn empty_query_keeps_everything_visible() {
        let sections = vec![
            vec![card("Image Resizer", "Resize images online")],
            vec![card("Video Trimmer", "Trim videos fast")],
        ];
        let vis = visible_sections(&sections, "");
        assert!(vis.iter().all(|s| s.visible));
        assert!(vis.iter().flat_map(|s| s.cards.iter()).all(|c| *c));
    }

    #[test]
    fn matches_title_or_description_case_insensitively() {
        assert!(card_matches("RESIZE", "Image Resizer", "shrink pictures"));
        assert!(card_matches("shrink", "Image Resizer", "Shrink pictures"));
        assert!(!card_matches("audio", "Image Resizer", "shrink pictures"));
    }

    #[test]
    fn section_hides_when_no_card_matches() {
        let sections = vec![
            vec![card("Image Resizer", "resize"), card("Image Cropper", "crop")],
            vec![card("Audio Cutter", "cut audio")],
        ];
        let vis = visible_sections(&sections, "image");
        assert_eq!(vis[0].cards, vec![true, true]);
        assert!(vis[0].visible);
        assert_eq!(vis[1].cards, vec![false]);
        assert!(!vis[1].visible);
    }

    #[test]
    fn no_match_hides_every_section() {
        let sections = vec![
            vec![card("Image Resizer", "resize")],
            vec![card("Audio Cutter", "cut audio")],
        ];
        let vis = visible_sections(&sections, "zzz-no-such-tool");
        assert!(vis.iter().all(|s| !s.visible));
    }
}
