//! Loadable - Loading Decorator
//!
//! Wraps a sub-tree and substitutes a loading indicator for it while a
//! loading flag is set; otherwise the wrapped content renders unchanged.

use gpui::{
    AnyElement, App, IntoElement, ParentElement, Rgba, Styled, Window, div, prelude::*, px,
};

use crate::theme::colors::DocColors;

/// Styling configuration for the loading indicator
#[derive(Debug, Clone, Copy)]
pub struct LoadingIndicatorStyle {
    /// Indicator diameter in pixels
    pub size: f32,
    /// Indicator ring color
    pub color: Rgba,
}

impl Default for LoadingIndicatorStyle {
    fn default() -> Self {
        Self {
            size: 16.0,
            color: DocColors::loading_indicator(),
        }
    }
}

/// A decorator that swaps its content for a loading indicator
#[derive(IntoElement)]
pub struct Loadable {
    is_loading: bool,
    indicator: LoadingIndicatorStyle,
    content: AnyElement,
}

impl Loadable {
    /// Wrap content in the decorator
    pub fn new(content: impl IntoElement) -> Self {
        Self {
            is_loading: false,
            indicator: LoadingIndicatorStyle::default(),
            content: content.into_any_element(),
        }
    }

    /// Set the loading flag
    pub fn loading(mut self, is_loading: bool) -> Self {
        self.is_loading = is_loading;
        self
    }

    /// Set the indicator styling
    pub fn indicator(mut self, style: LoadingIndicatorStyle) -> Self {
        self.indicator = style;
        self
    }
}

impl RenderOnce for Loadable {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        if self.is_loading {
            div()
                .flex()
                .items_center()
                .justify_center()
                .px_2()
                .child(
                    div()
                        .size(px(self.indicator.size))
                        .rounded_full()
                        .border_2()
                        .border_color(self.indicator.color),
                )
                .into_any_element()
        } else {
            self.content
        }
    }
}
