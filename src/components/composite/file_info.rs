//! FileInfo Component

use gpui::{
    InteractiveElement, IntoElement, ParentElement, Styled, Window, div, prelude::*, px,
};

use crate::domain::PreviewFile;
use crate::helpers::truncate;
use crate::theme::colors::DocColors;

/// A compact file-name/extension block for the preview header
#[derive(IntoElement)]
pub struct FileInfo {
    file: PreviewFile,
}

impl FileInfo {
    /// Create a file-info block for the given file
    pub fn new(file: PreviewFile) -> Self {
        Self { file }
    }

    /// The bound file
    pub fn file(&self) -> &PreviewFile {
        &self.file
    }
}

impl RenderOnce for FileInfo {
    fn render(self, _window: &mut Window, _cx: &mut gpui::App) -> impl IntoElement {
        let name = truncate(self.file.name.as_deref().unwrap_or_default(), 48);
        let extension = self
            .file
            .extension
            .as_deref()
            .map(str::to_uppercase)
            .unwrap_or_default();

        div()
            .id("file-info")
            .flex()
            .flex_col()
            .gap(px(2.0))
            .child(
                div()
                    .text_sm()
                    .text_color(DocColors::text_primary())
                    .child(name),
            )
            .child(
                div()
                    .text_size(px(11.0))
                    .text_color(DocColors::text_muted())
                    .child(extension),
            )
    }
}
