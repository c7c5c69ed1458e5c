//! Error types for the CMIS binding layer.

use crate::schema::{SchemaNamespace, SchemaVersion};
use crate::vocab::core::ServiceException;
use crate::vocab::draft;
use crate::wire::WireEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// CMIS binding errors.
#[derive(Error, Debug)]
pub enum BindingError {
    #[error("invalid value '{value}' for {enumeration}")]
    InvalidEnumValue {
        /// Schema type name of the vocabulary, e.g. `enumACLPropagation`
        enumeration: &'static str,
        /// The rejected token, verbatim
        value: String,
    },

    #[error("{element} is missing required field {field}")]
    MissingField {
        element: &'static str,
        field: &'static str,
    },

    #[error("unknown vocabulary {name} in schema {schema}")]
    UnknownVocabulary { schema: SchemaVersion, name: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BindingError {
    /// Decode failure for vocabulary `T`.
    pub fn invalid_enum_value<T: WireEnum>(value: &str) -> Self {
        Self::InvalidEnumValue {
            enumeration: T::TYPE_NAME,
            value: value.to_string(),
        }
    }

    /// The CMIS service exception a server reports for this error.
    pub fn service_exception(&self) -> ServiceException {
        match self {
            Self::InvalidEnumValue { .. } | Self::MissingField { .. } => {
                ServiceException::InvalidArgument
            }
            Self::UnknownVocabulary { .. } => ServiceException::NotSupported,
            Self::Config(_) | Self::Io(_) => ServiceException::Runtime,
        }
    }

    /// Same as [`service_exception`](Self::service_exception), in the draft vocabulary.
    pub fn draft_service_exception(&self) -> draft::ServiceException {
        match self {
            Self::InvalidEnumValue { .. } | Self::MissingField { .. } => {
                draft::ServiceException::InvalidArgument
            }
            Self::UnknownVocabulary { .. } => draft::ServiceException::NotSupported,
            Self::Config(_) | Self::Io(_) => draft::ServiceException::Runtime,
        }
    }

    /// Render a `cmisFault` element for the detail of a SOAP fault, in the
    /// messaging namespace of `schema`.
    pub fn cmis_fault_detail(&self, schema: SchemaVersion) -> String {
        let kind = match schema {
            SchemaVersion::V200908 => self.service_exception().encode(),
            SchemaVersion::V200901 => self.draft_service_exception().encode(),
        };
        render_cmis_fault(schema.messaging(), kind, 0, &self.to_string())
    }
}

/// A vocabulary usable as the `type` of a `cmisFault`.
pub trait FaultKind: WireEnum {}

impl FaultKind for ServiceException {}
impl FaultKind for draft::ServiceException {}

/// Render a `cmisFault` element in the messaging namespace that declares `K`.
pub fn cmis_fault_detail<K: FaultKind>(kind: K, code: i64, message: &str) -> String {
    render_cmis_fault(K::NAMESPACE, kind.encode(), code, message)
}

fn render_cmis_fault(namespace: SchemaNamespace, kind: &str, code: i64, message: &str) -> String {
    format!(
        r#"<cmism:cmisFault xmlns:cmism="{}">
  <cmism:type>{}</cmism:type>
  <cmism:code>{}</cmism:code>
  <cmism:message>{}</cmism:message>
</cmism:cmisFault>"#,
        namespace.uri,
        kind,
        code,
        xml_escape(message)
    )
}

/// Violation codes reported by the message scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViolationCode {
    /// Invalid XML syntax or encoding
    InvalidXml,
    /// DOCTYPE declaration present
    DoctypeDetected,
    /// Message exceeds the configured size limit
    BodyTooLarge,
    /// Token outside the bound vocabulary
    InvalidEnumValue,
    /// Binding names a vocabulary the registry does not know
    UnknownVocabulary,
    /// Message mixes 200901 and 200908 namespaces
    MixedSchemaVersions,
}

impl ViolationCode {
    /// Get the string code for this violation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidXml => "INVALID_XML",
            Self::DoctypeDetected => "DOCTYPE_DETECTED",
            Self::BodyTooLarge => "BODY_TOO_LARGE",
            Self::InvalidEnumValue => "INVALID_ENUM_VALUE",
            Self::UnknownVocabulary => "UNKNOWN_VOCABULARY",
            Self::MixedSchemaVersions => "MIXED_SCHEMA_VERSIONS",
        }
    }
}

/// A finding produced while scanning a CMIS message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Violation {
    /// Violation code
    pub code: ViolationCode,
    /// Human-readable message
    pub message: String,
    /// Element path (if available)
    pub location: Option<String>,
}

impl Violation {
    /// Create a new violation.
    pub fn new(code: ViolationCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            location: None,
        }
    }

    /// Create a violation with location.
    pub fn with_location(
        code: ViolationCode,
        message: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            location: Some(location.into()),
        }
    }

    /// Convert a binding error found at `location`.
    pub fn from_binding_error(error: &BindingError, location: impl Into<String>) -> Self {
        let code = match error {
            BindingError::UnknownVocabulary { .. } => ViolationCode::UnknownVocabulary,
            _ => ViolationCode::InvalidEnumValue,
        };
        Self::with_location(code, error.to_string(), location)
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.location {
            Some(location) => write!(f, "[{}] {} at {}", self.code.as_str(), self.message, location),
            None => write!(f, "[{}] {}", self.code.as_str(), self.message),
        }
    }
}

fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
