//! Workspace - Demo Shell
//!
//! Wires a preview header over a search form so the components can be
//! exercised live: typing updates the query caption, submitting records the
//! query, and the locale switcher re-renders every localized string.

use gpui::{
    Context, Entity, InteractiveElement, IntoElement, ParentElement, Render,
    StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};

use crate::components::composite::preview_header::{ContentAnswersConfig, PreviewHeader};
use crate::components::composite::search_form::{SearchForm, SearchFormConfig};
use crate::domain::{FileVersion, PreviewFile};
use crate::i18n::Translator;
use crate::theme::colors::DocColors;

/// Demo workspace containing the two widgets
pub struct Workspace {
    translator: Translator,
    search_form: Entity<SearchForm>,
    last_query: String,
    submitted: Option<String>,
}

impl Workspace {
    pub fn new(translator: Translator, cx: &mut Context<Self>) -> Self {
        let mut config = SearchFormConfig {
            action: "/search".to_string(),
            use_clear_button: true,
            ..Default::default()
        };
        config
            .query_params
            .insert("scope".to_string(), "workspace".to_string());

        let form_translator = translator.clone();
        let search_form =
            cx.new(|cx| SearchForm::new("workspace-search", config, form_translator, cx));

        let weak = cx.weak_entity();
        search_form.update(cx, |form, _| {
            let on_change = weak.clone();
            form.on_change(move |value, cx| {
                let value = value.to_string();
                on_change
                    .update(cx, |this, cx| {
                        this.last_query = value;
                        cx.notify();
                    })
                    .ok();
            });

            let on_submit = weak;
            form.on_submit(move |value, _event, _window, cx| {
                tracing::info!(query = %value, "search submitted");
                let value = value.to_string();
                on_submit
                    .update(cx, |this, cx| {
                        this.submitted = Some(value);
                        cx.notify();
                    })
                    .ok();
            });
        });

        Self {
            translator,
            search_form,
            last_query: String::new(),
            submitted: None,
        }
    }

    fn sample_file() -> PreviewFile {
        PreviewFile {
            id: Some("123".to_string()),
            name: Some("quarterly-report.doc".to_string()),
            extension: Some("doc".to_string()),
            file_version: Some(FileVersion {
                id: Some("1".to_string()),
            }),
        }
    }

    fn toggle_locale(&mut self, cx: &mut Context<Self>) {
        let locale = self.translator.locale().toggled();
        self.translator = self.translator.for_locale(locale);
        let translator = self.translator.clone();
        self.search_form
            .update(cx, |form, cx| form.set_translator(translator, cx));
        cx.notify();
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let t = self.translator.clone();

        let caption = match self.submitted {
            Some(ref query) => format!("{} {}", t.msg("workspace.submitted"), query),
            None if self.last_query.is_empty() => t.msg("workspace.hint").to_string(),
            None => self.last_query.clone(),
        };

        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(DocColors::background())
            .child(
                PreviewHeader::new(t.clone())
                    .file(Self::sample_file())
                    .content_answers(ContentAnswersConfig { show: true })
                    .can_print(true)
                    .on_print(|_event, _window, _cx| {
                        tracing::info!("print requested");
                    }),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .justify_between()
                    .px_4()
                    .py_3()
                    .child(div().w(px(420.0)).child(self.search_form.clone()))
                    .child(
                        div()
                            .id("locale-switcher")
                            .px_3()
                            .py_1()
                            .rounded_md()
                            .text_sm()
                            .text_color(DocColors::text_secondary())
                            .cursor_pointer()
                            .hover(|s| s.bg(DocColors::action_hover_bg()))
                            .on_click(cx.listener(|this, _event, _window, cx| {
                                this.toggle_locale(cx);
                            }))
                            .child(t.locale().display_name()),
                    ),
            )
            .child(
                div()
                    .px_4()
                    .text_sm()
                    .text_color(DocColors::text_muted())
                    .child(caption),
            )
    }
}
