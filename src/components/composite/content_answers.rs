//! ContentAnswers Component
//!
//! The entry chip for the content-answers feature, shown in the preview
//! header when the feature is enabled for a file with a usable identifier.

use gpui::{
    InteractiveElement, IntoElement, ParentElement, StatefulInteractiveElement, Styled, Window,
    div, prelude::*, px,
};
use gpui_component::Icon;

use crate::assets::GlyphName;
use crate::components::composite::preview_header::descriptor::AnswersBinding;
use crate::i18n::Translator;
use crate::theme::colors::DocColors;

/// The content-answers panel trigger
#[derive(IntoElement)]
pub struct ContentAnswers {
    binding: AnswersBinding,
    translator: Translator,
}

impl ContentAnswers {
    /// Create the panel trigger from its binding
    pub fn new(binding: AnswersBinding, translator: Translator) -> Self {
        Self {
            binding,
            translator,
        }
    }

    /// The bound file inputs
    pub fn binding(&self) -> &AnswersBinding {
        &self.binding
    }
}

impl RenderOnce for ContentAnswers {
    fn render(self, _window: &mut Window, _cx: &mut gpui::App) -> impl IntoElement {
        div()
            .id("content-answers")
            .flex()
            .items_center()
            .gap_1()
            .px_2()
            .py_1()
            .rounded_md()
            .text_color(DocColors::accent())
            .cursor_pointer()
            .hover(|s| s.bg(DocColors::action_hover_bg()))
            .child(Icon::from(GlyphName::Answers))
            .child(
                div()
                    .text_size(px(13.0))
                    .child(self.translator.msg("content_answers.title")),
            )
    }
}
