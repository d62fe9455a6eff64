#![forbid(unsafe_code)]
//! Platform-agnostic logic for the mediatools site: upload validation,
//! card search, FAQ accordion state, theme preference, and the simulated
//! processing ticker. Everything here is DOM-free and host-testable; the
//! `mediatools-web` crate wires these into the browser.

pub mod faq;
pub mod progress;
pub mod search;
pub mod theme;
pub mod upload;

pub use faq::AccordionState;
pub use progress::{ProgressTicker, Tick};
pub use search::{CardInfo, SectionVisibility, card_matches, visible_sections};
pub use theme::Theme;
pub use upload::{MAX_UPLOAD_BYTES, MediaKind, UploadError, validate_selection};
