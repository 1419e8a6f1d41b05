//! i18n - Internationalization Module
//!
//! Message lookup is passed into components as an explicit [`Translator`]
//! capability instead of components reading the catalog through globals.
//! The default lookup is backed by the rust-i18n catalog under `locales/`.

use std::rc::Rc;

use gpui::SharedString;
use rust_i18n::t;

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// English (US)
    #[default]
    EnUs,
    /// Chinese (Simplified)
    ZhCn,
}

impl Locale {
    /// Catalog locale tag
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::EnUs => "en",
            Locale::ZhCn => "zh-CN",
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::EnUs => "English",
            Locale::ZhCn => "中文",
        }
    }

    /// Toggle between English and Chinese
    pub fn toggled(self) -> Self {
        match self {
            Locale::EnUs => Locale::ZhCn,
            Locale::ZhCn => Locale::EnUs,
        }
    }

    /// Detect the user's locale from the OS environment
    pub fn detect() -> Self {
        let tag = locale_config::Locale::user_default().to_string();
        if tag.starts_with("zh") {
            Locale::ZhCn
        } else {
            Locale::EnUs
        }
    }
}

type LookupFn = dyn Fn(Locale, &str) -> String;

/// An injected message-lookup capability
///
/// Components receive a `Translator` in their props and never consult the
/// catalog directly. A custom lookup function can be supplied for embedding
/// applications that bring their own catalog (tests do this too).
#[derive(Clone)]
pub struct Translator {
    locale: Locale,
    lookup: Rc<LookupFn>,
}

impl Translator {
    /// A translator backed by the built-in catalog
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            lookup: Rc::new(|locale, key| t!(key, locale = locale.as_str()).into_owned()),
        }
    }

    /// A translator with a caller-supplied lookup function
    pub fn with_lookup(locale: Locale, lookup: impl Fn(Locale, &str) -> String + 'static) -> Self {
        Self {
            locale,
            lookup: Rc::new(lookup),
        }
    }

    /// Current locale
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Same lookup, different locale
    pub fn for_locale(&self, locale: Locale) -> Self {
        Self {
            locale,
            lookup: Rc::clone(&self.lookup),
        }
    }

    /// Resolve a message id to a localized string
    pub fn msg(&self, key: &str) -> SharedString {
        (self.lookup)(self.locale, key).into()
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

impl std::fmt::Debug for Translator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Translator")
            .field("locale", &self.locale)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_lookup() {
        let t = Translator::new(Locale::EnUs);
        assert_eq!(t.msg("search_form.clear_button_title").as_ref(), "Clear");
        assert_eq!(t.msg("search_form.search_button_title").as_ref(), "Search");
        assert_eq!(t.msg("search_form.search_label").as_ref(), "Search query");
        assert_eq!(t.msg("preview_header.print").as_ref(), "Print");
    }

    #[test]
    fn test_locale_switch() {
        let t = Translator::new(Locale::EnUs).for_locale(Locale::ZhCn);
        assert_eq!(t.locale(), Locale::ZhCn);
        assert_eq!(t.msg("search_form.clear_button_title").as_ref(), "清除");
    }

    #[test]
    fn test_injected_lookup() {
        let t = Translator::with_lookup(Locale::EnUs, |_, key| format!("[{key}]"));
        assert_eq!(
            t.msg("search_form.search_label").as_ref(),
            "[search_form.search_label]"
        );
    }

    #[test]
    fn test_locale_toggled() {
        assert_eq!(Locale::EnUs.toggled(), Locale::ZhCn);
        assert_eq!(Locale::ZhCn.toggled(), Locale::EnUs);
    }
}
