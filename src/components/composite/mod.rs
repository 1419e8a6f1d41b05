//! Composite Components
//!
//! The crate's widgets, composed from primitives and leaf display blocks.

pub mod content_answers;
pub mod file_info;
pub mod logo;
pub mod preview_header;
pub mod search_form;

pub use content_answers::ContentAnswers;
pub use file_info::FileInfo;
pub use logo::Logo;
pub use preview_header::PreviewHeader;
pub use search_form::SearchForm;
