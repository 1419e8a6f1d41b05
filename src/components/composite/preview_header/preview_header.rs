//! PreviewHeader Component
//!
//! Maps the resolved [`HeaderLayout`] descriptor to concrete elements: a
//! brand block (logo or file info), an optional content-answers panel, and
//! an optional print control.

use gpui::{
    AnyElement, App, ClickEvent, ElementId, IntoElement, ParentElement, Styled, Window, div,
    prelude::*, px,
};

use crate::assets::GlyphName;
use crate::components::composite::content_answers::ContentAnswers;
use crate::components::composite::file_info::FileInfo;
use crate::components::composite::logo::Logo;
use crate::components::composite::preview_header::descriptor::{
    Brand, ContentAnswersConfig, HeaderLayout, PreviewHeaderProps,
};
use crate::components::primitives::icon_button::IconButton;
use crate::domain::PreviewFile;
use crate::i18n::Translator;
use crate::theme::colors::DocColors;

type PrintHandler = Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>;

/// The content-preview header
#[derive(IntoElement)]
pub struct PreviewHeader {
    id: ElementId,
    props: PreviewHeaderProps,
    translator: Translator,
    on_print: Option<PrintHandler>,
}

impl PreviewHeader {
    /// Create a new header
    pub fn new(translator: Translator) -> Self {
        Self {
            id: "preview-header".into(),
            props: PreviewHeaderProps::default(),
            translator,
            on_print: None,
        }
    }

    /// Set the element id
    pub fn id(mut self, id: impl Into<ElementId>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the file being previewed
    pub fn file(mut self, file: PreviewFile) -> Self {
        self.props.file = Some(file);
        self
    }

    /// Set the branding logo URL (takes precedence over file info)
    pub fn logo_url(mut self, url: impl Into<String>) -> Self {
        self.props.logo_url = Some(url.into());
        self
    }

    /// Configure the content-answers panel
    pub fn content_answers(mut self, config: ContentAnswersConfig) -> Self {
        self.props.content_answers = config;
        self
    }

    /// Offer the print control
    pub fn can_print(mut self, can_print: bool) -> Self {
        self.props.can_print = can_print;
        self
    }

    /// Set the print handler
    pub fn on_print(mut self, handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static) -> Self {
        self.on_print = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for PreviewHeader {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let layout = HeaderLayout::resolve(&self.props);

        let brand: AnyElement = match layout.brand {
            Brand::Logo { url } => Logo::new(url).into_any_element(),
            Brand::FileInfo => {
                FileInfo::new(self.props.file.clone().unwrap_or_default()).into_any_element()
            }
        };

        let mut controls = div().flex().items_center().gap_2();
        if let Some(binding) = layout.answers {
            controls = controls.child(ContentAnswers::new(binding, self.translator.clone()));
        }
        if layout.show_print {
            let mut print = IconButton::new(
                "print-button",
                GlyphName::Print,
                self.translator.msg("preview_header.print"),
            );
            if let Some(handler) = self.on_print {
                print = print.on_click(handler);
            }
            controls = controls.child(print);
        }

        div()
            .id(self.id)
            .w_full()
            .h(px(56.0))
            .flex()
            .items_center()
            .justify_between()
            .px_4()
            .bg(DocColors::header_bg())
            .border_b_1()
            .border_color(DocColors::border())
            .child(brand)
            .child(controls)
    }
}
