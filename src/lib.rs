//! Typed wire vocabularies for the CMIS SOAP binding
//!
//! Provides the schema enumerations of CMIS 1.0 (`200908`) and the `200901`
//! draft as closed Rust enums with strict, case-sensitive decoding, plus the
//! single-payload response envelopes and a message scanner that checks
//! captured CMIS traffic against the vocabularies.
//!
//! # Features
//!
//! - One declarative macro per vocabulary, one shared lookup mechanism
//! - `Display`, `FromStr` and serde impls that round-trip the exact wire literal
//! - Fail-fast decoding: unknown tokens are errors, never defaults
//! - Runtime registry addressed by schema version and type name
//! - Namespace-aware XML scanner with configurable field bindings
//!
//! # Example
//!
//! ```
//! use cmis_ws_binding::vocab::core::AclPropagation;
//! use cmis_ws_binding::WireEnum;
//!
//! let propagation = AclPropagation::decode("propagate").unwrap();
//! assert_eq!(propagation, AclPropagation::Propagate);
//! assert_eq!(propagation.encode(), "propagate");
//! assert!(AclPropagation::decode("bogus").is_err());
//! ```

pub mod config;
pub mod envelope;
pub mod error;
pub mod registry;
pub mod scanner;
pub mod schema;
pub mod vocab;
pub mod wire;

pub use config::ScannerConfig;
pub use envelope::{ApplyAclResponse, GetObjectResponse, ResponseEnvelope};
pub use error::{BindingError, Violation, ViolationCode};
pub use registry::{Vocabulary, VocabularyRegistry};
pub use scanner::{MessageScanner, ScanReport};
pub use schema::{NamespaceRole, SchemaNamespace, SchemaVersion};
pub use wire::WireEnum;

#[doc(hidden)]
pub mod __private {
    pub use once_cell::sync::Lazy;
    pub use serde;
}
