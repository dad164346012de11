//! Service and Reading System attributes

use serde::{Deserialize, Serialize};

/// A multi-purpose label, containing text and optionally audio
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "label")]
pub struct Label {
    #[serde(
        rename = "@xml:lang",
        alias = "@lang",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub lang: Option<String>,

    #[serde(rename = "@dir", default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<String>,

    #[serde(default)]
    pub text: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<Audio>,
}

impl Label {
    /// Text-only label
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }
}

/// Audio rendition of a label
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "audio")]
pub struct Audio {
    #[serde(rename = "@uri")]
    pub uri: String,

    #[serde(rename = "@rangeBegin", default, skip_serializing_if = "Option::is_none")]
    pub range_begin: Option<i64>,

    #[serde(rename = "@rangeEnd", default, skip_serializing_if = "Option::is_none")]
    pub range_end: Option<i64>,

    #[serde(rename = "@size", default, skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
}

/// Properties of the Service
///
/// Constant for the duration of a session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "serviceAttributes", rename_all = "camelCase")]
pub struct ServiceAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_provider: Option<ServiceProvider>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<Service>,

    #[serde(default)]
    pub supported_content_selection_methods: SupportedContentSelectionMethods,

    #[serde(default)]
    pub supports_server_side_back: bool,

    #[serde(default)]
    pub supports_search: bool,

    #[serde(default)]
    pub supported_uplink_audio_codecs: SupportedUplinkAudioCodecs,

    #[serde(default)]
    pub supports_audio_labels: bool,

    #[serde(default)]
    pub supported_optional_operations: SupportedOptionalOperations,
}

impl ServiceAttributes {
    /// Whether the service advertises the optional operation `operation`
    /// (see [`optional_operation`](crate::models::optional_operation))
    pub fn supports_operation(&self, operation: &str) -> bool {
        self.supported_optional_operations
            .operations
            .iter()
            .any(|op| op == operation)
    }
}

/// Identity of the Service Provider
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "serviceProvider")]
pub struct ServiceProvider {
    #[serde(rename = "@id")]
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<Label>,
}

/// Identity of the Service
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "service")]
pub struct Service {
    #[serde(rename = "@id")]
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<Label>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportedContentSelectionMethods {
    #[serde(rename = "method", default)]
    pub methods: Vec<String>,
}

/// Audio codecs accepted in `userResponses` in addition to RIFF WAVE
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportedUplinkAudioCodecs {
    #[serde(rename = "codec", default)]
    pub codecs: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportedOptionalOperations {
    #[serde(rename = "operation", default)]
    pub operations: Vec<String>,
}

/// Reading System properties, valid until the end of the session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "readingSystemAttributes", rename_all = "camelCase")]
pub struct ReadingSystemAttributes {
    pub manufacturer: String,

    pub model: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,

    pub version: String,

    #[serde(default)]
    pub config: Config,
}

/// Reading System configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "config", rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub supports_multiple_selections: bool,

    #[serde(rename = "preferredUILanguage", default)]
    pub preferred_ui_language: String,

    /// Maximum bandwidth in bits per second
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bandwidth: Option<i32>,

    #[serde(default)]
    pub supported_content_formats: SupportedContentFormats,

    #[serde(default)]
    pub supported_content_protection_formats: SupportedContentProtectionFormats,

    #[serde(default)]
    pub supported_mime_types: SupportedMimeTypes,

    #[serde(default)]
    pub supported_input_types: SupportedInputTypes,

    #[serde(default)]
    pub requires_audio_labels: bool,
}

/// Content formats the Reading System supports (e.g. `ANSI/NISO Z39.86-2005`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportedContentFormats {
    #[serde(rename = "contentFormat", default)]
    pub content_formats: Vec<String>,
}

/// Content protection (DRM) standards the Reading System supports
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportedContentProtectionFormats {
    #[serde(rename = "protectionFormat", default)]
    pub protection_formats: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportedMimeTypes {
    #[serde(rename = "mimeType", default)]
    pub mime_types: Vec<MimeType>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MimeType {
    #[serde(rename = "@type")]
    pub mime_type: String,
}

impl MimeType {
    pub fn new(mime_type: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportedInputTypes {
    #[serde(rename = "input", default)]
    pub inputs: Vec<Input>,
}

/// Input type, one of [`input_type`](crate::models::input_type)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Input {
    #[serde(rename = "@type")]
    pub input_type: String,
}

impl Input {
    pub fn new(input_type: impl Into<String>) -> Self {
        Self {
            input_type: input_type.into(),
        }
    }
}
