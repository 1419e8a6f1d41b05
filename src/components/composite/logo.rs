//! Logo Component

use gpui::{
    InteractiveElement, IntoElement, ParentElement, SharedString, Styled, Window, div, img,
    prelude::*, px,
};

/// A branding logo bound to an image URL
#[derive(IntoElement)]
pub struct Logo {
    url: SharedString,
}

impl Logo {
    /// Create a logo for the given URL
    pub fn new(url: impl Into<SharedString>) -> Self {
        Self { url: url.into() }
    }

    /// The bound URL
    pub fn url(&self) -> &SharedString {
        &self.url
    }
}

impl RenderOnce for Logo {
    fn render(self, _window: &mut Window, _cx: &mut gpui::App) -> impl IntoElement {
        div()
            .id("logo")
            .flex()
            .items_center()
            .child(img(self.url.clone()).h(px(32.0)))
    }
}
