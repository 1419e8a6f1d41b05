//! PreviewHeader Descriptor
//!
//! Pure function from header props to a view descriptor. The render layer
//! maps the descriptor to concrete elements, so the composition predicates
//! stay unit-testable without a window.

use crate::domain::PreviewFile;

/// Configuration for the content-answers panel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContentAnswersConfig {
    /// Whether the panel is enabled for this preview
    pub show: bool,
}

/// Props for the preview header
#[derive(Debug, Clone, Default)]
pub struct PreviewHeaderProps {
    /// The file being previewed
    pub file: Option<PreviewFile>,
    /// Branding logo URL; takes precedence over the file-info block
    pub logo_url: Option<String>,
    /// Content-answers panel configuration
    pub content_answers: ContentAnswersConfig,
    /// Whether the print control is offered
    pub can_print: bool,
}

/// Which brand block the header shows. Exactly one of the two renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Brand {
    /// A logo bound to its URL
    Logo {
        /// Logo image URL
        url: String,
    },
    /// The file-info block
    FileInfo,
}

/// Inputs handed to the content-answers panel
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswersBinding {
    /// File extension, e.g. "doc"
    pub file_extension: Option<String>,
    /// File identifier
    pub file_id: Option<String>,
    /// Identifier of the file's current version
    pub version_id: Option<String>,
}

/// Resolved view descriptor for the header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderLayout {
    /// Brand block variant
    pub brand: Brand,
    /// Content-answers binding, present iff the panel renders
    pub answers: Option<AnswersBinding>,
    /// Whether the print control renders
    pub show_print: bool,
}

impl HeaderLayout {
    /// Resolve the descriptor from props
    pub fn resolve(props: &PreviewHeaderProps) -> Self {
        let brand = match props.logo_url.as_deref() {
            Some(url) => Brand::Logo {
                url: url.to_string(),
            },
            None => Brand::FileInfo,
        };

        // The answers panel needs a usable file id in addition to its flag
        let answers = match props.file {
            Some(ref file) if file.has_id() && props.content_answers.show => {
                Some(AnswersBinding {
                    file_extension: file.extension.clone(),
                    file_id: file.id.clone(),
                    version_id: file.version_id().map(str::to_string),
                })
            }
            _ => None,
        };

        Self {
            brand,
            answers,
            show_print: props.can_print,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FileVersion;

    fn file_with_id(id: &str) -> PreviewFile {
        PreviewFile {
            id: Some(id.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_logo_takes_precedence_over_file_info() {
        let layout = HeaderLayout::resolve(&PreviewHeaderProps {
            logo_url: Some("box".to_string()),
            file: Some(file_with_id("123")),
            ..Default::default()
        });
        assert_eq!(
            layout.brand,
            Brand::Logo {
                url: "box".to_string()
            }
        );
    }

    #[test]
    fn test_file_info_by_default() {
        let layout = HeaderLayout::resolve(&PreviewHeaderProps::default());
        assert_eq!(layout.brand, Brand::FileInfo);
    }

    #[test]
    fn test_answers_visibility_table() {
        for (file, show, expected) in [
            (Some(file_with_id("123")), true, true),
            (Some(file_with_id("123")), false, false),
            (Some(PreviewFile::default()), true, false),
            (Some(PreviewFile::default()), false, false),
            (None, true, false),
        ] {
            let layout = HeaderLayout::resolve(&PreviewHeaderProps {
                file: file.clone(),
                content_answers: ContentAnswersConfig { show },
                ..Default::default()
            });
            assert_eq!(
                layout.answers.is_some(),
                expected,
                "for file {file:?}, show {show}"
            );
        }
    }

    #[test]
    fn test_answers_binding_fields() {
        let layout = HeaderLayout::resolve(&PreviewHeaderProps {
            file: Some(PreviewFile {
                id: Some("123".to_string()),
                extension: Some("doc".to_string()),
                file_version: Some(FileVersion {
                    id: Some("1".to_string()),
                }),
                ..Default::default()
            }),
            content_answers: ContentAnswersConfig { show: true },
            ..Default::default()
        });

        let binding = layout.answers.expect("answers panel should render");
        assert_eq!(binding.file_extension.as_deref(), Some("doc"));
        assert_eq!(binding.file_id.as_deref(), Some("123"));
        assert_eq!(binding.version_id.as_deref(), Some("1"));
    }

    #[test]
    fn test_print_control_follows_flag() {
        for can_print in [true, false] {
            let layout = HeaderLayout::resolve(&PreviewHeaderProps {
                can_print,
                ..Default::default()
            });
            assert_eq!(layout.show_print, can_print);
        }
    }
}
