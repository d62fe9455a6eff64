pub mod faq;
pub mod footer;
pub mod header;
pub mod progress_bar;
pub mod tool_grid;
pub mod upload_zone;
