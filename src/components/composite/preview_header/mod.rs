//! PreviewHeader Component
//!
//! A content-preview header showing either a logo or a file-info block, an
//! optional content-answers panel, and an optional print control.

pub mod descriptor;
pub mod preview_header;

pub use descriptor::{
    AnswersBinding, Brand, ContentAnswersConfig, HeaderLayout, PreviewHeaderProps,
};
pub use preview_header::PreviewHeader;
