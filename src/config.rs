//! Configuration for the message scanner.

use crate::error::BindingError;
use crate::registry::VocabularyRegistry;
use crate::schema::{NamespaceRole, SchemaVersion};
use serde::{Deserialize, Serialize};

/// Main scanner configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScannerConfig {
    /// Config version
    pub version: String,

    /// General settings
    pub settings: SettingsConfig,

    /// Element to vocabulary bindings
    pub bindings: Vec<FieldBinding>,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            version: "1".to_string(),
            settings: SettingsConfig::default(),
            bindings: default_bindings(),
        }
    }
}

impl ScannerConfig {
    /// Parse a YAML document. Sections that are absent keep their defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self, BindingError> {
        serde_yaml::from_str(yaml).map_err(|e| BindingError::Config(e.to_string()))
    }

    /// Check that every binding names a vocabulary known to `registry`.
    pub fn validate(&self, registry: &VocabularyRegistry) -> Result<(), BindingError> {
        for binding in &self.bindings {
            registry.get(binding.schema, &binding.vocabulary)?;
        }
        Ok(())
    }
}

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsConfig {
    /// Maximum message size to process (bytes)
    pub max_body_size: usize,

    /// Stop at the first invalid value instead of reporting all of them
    pub fail_fast: bool,

    /// Reject messages carrying a DOCTYPE declaration
    pub block_doctype: bool,
}

impl Default for SettingsConfig {
    fn default() -> Self {
        Self {
            max_body_size: 1_048_576, // 1MB
            fail_fast: false,
            block_doctype: true,
        }
    }
}

/// Binds an element, by local name and schema generation, to a vocabulary.
///
/// `parent` and `role` narrow the binding for element names that mean
/// different things in different places, such as `type`. When several
/// bindings match an element, the most specific one applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldBinding {
    /// Element local name, e.g. `includeRelationships`
    pub element: String,
    /// Schema generation of the element's namespace
    pub schema: SchemaVersion,
    /// Vocabulary type name, e.g. `enumIncludeRelationships`
    pub vocabulary: String,
    /// Local name of the enclosing element; any parent if unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    /// Core or messaging namespace; either if unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<NamespaceRole>,
}

impl FieldBinding {
    pub fn new(element: &str, schema: SchemaVersion, vocabulary: &str) -> Self {
        Self {
            element: element.to_string(),
            schema,
            vocabulary: vocabulary.to_string(),
            parent: None,
            role: None,
        }
    }

    /// Only match inside an element with this local name.
    pub fn within(mut self, parent: &str) -> Self {
        self.parent = Some(parent.to_string());
        self
    }

    /// Only match elements in the core or messaging namespace.
    pub fn in_role(mut self, role: NamespaceRole) -> Self {
        self.role = Some(role);
        self
    }

    /// Whether the binding applies to an element in `role` whose enclosing
    /// element is `parent`.
    pub fn matches(&self, role: NamespaceRole, parent: Option<&str>) -> bool {
        self.role.map_or(true, |r| r == role)
            && self
                .parent
                .as_deref()
                .map_or(true, |p| parent == Some(p))
    }

    /// Ranks matching bindings; a parent outweighs a role.
    pub fn specificity(&self) -> u8 {
        2 * u8::from(self.parent.is_some()) + u8::from(self.role.is_some())
    }
}

const BINDINGS_200908: &[(&str, &str)] = &[
    ("includeRelationships", "enumIncludeRelationships"),
    ("versioningState", "enumVersioningState"),
    ("unfileObjects", "enumUnfileObject"),
    ("relationshipDirection", "enumRelationshipDirection"),
    ("ACLPropagation", "enumACLPropagation"),
    ("propagation", "enumACLPropagation"),
    ("baseId", "enumBaseObjectTypeIds"),
    ("propertyType", "enumPropertyType"),
    ("cardinality", "enumCardinality"),
    ("updatability", "enumUpdatability"),
    ("contentStreamAllowed", "enumContentStreamAllowed"),
    ("precision", "enumDecimalPrecision"),
    ("resolution", "enumDateTimeResolution"),
    ("capabilityQuery", "enumCapabilityQuery"),
    ("capabilityJoin", "enumCapabilityJoin"),
    ("capabilityChanges", "enumCapabilityChanges"),
    ("capabilityACL", "enumCapabilityACL"),
    ("capabilityRenditions", "enumCapabilityRendition"),
    ("capabilityContentStreamUpdatability", "enumCapabilityContentStreamUpdates"),
    ("supportedPermissions", "enumSupportedPermissions"),
    ("changeType", "enumTypeOfChanges"),
];

const BINDINGS_200901: &[(&str, &str)] = &[
    ("includeRelationships", "enumIncludeRelationships"),
    ("versioningState", "enumVersioningState"),
    ("unfileNonfolderObjects", "enumUnfileNonfolderObjects"),
    ("direction", "enumRelationshipDirection"),
    ("returnVersion", "enumReturnVersion"),
    ("propertyType", "enumPropertyType"),
    ("cardinality", "enumCardinality"),
    ("updatability", "enumUpdatability"),
    ("contentStreamAllowed", "enumContentStreamAllowed"),
    ("capabilityJoin", "enumCapabilityJoin"),
];

/// Messaging fields whose meaning depends on the enclosing element:
/// (schema, parent, element, vocabulary).
const SCOPED_BINDINGS: &[(SchemaVersion, &str, &str, &str)] = &[
    (SchemaVersion::V200908, "cmisFault", "type", "enumServiceException"),
    (SchemaVersion::V200901, "cmisFault", "type", "enumServiceException"),
    (SchemaVersion::V200901, "getChildren", "type", "enumTypesOfFileableObjects"),
    (SchemaVersion::V200901, "getDescendants", "type", "enumTypesOfFileableObjects"),
];

/// Bindings for the well-known request and response fields of both generations.
pub fn default_bindings() -> Vec<FieldBinding> {
    let v1 = BINDINGS_200908
        .iter()
        .map(|(element, vocabulary)| FieldBinding::new(element, SchemaVersion::V200908, vocabulary));
    let draft = BINDINGS_200901
        .iter()
        .map(|(element, vocabulary)| FieldBinding::new(element, SchemaVersion::V200901, vocabulary));
    let scoped = SCOPED_BINDINGS.iter().map(|(schema, parent, element, vocabulary)| {
        FieldBinding::new(element, *schema, vocabulary)
            .within(parent)
            .in_role(NamespaceRole::Messaging)
    });
    v1.chain(draft).chain(scoped).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ScannerConfig::default();
        assert!(!config.settings.fail_fast);
        assert!(config.settings.block_doctype);
        assert_eq!(config.settings.max_body_size, 1_048_576);
        assert_eq!(
            config.bindings.len(),
            BINDINGS_200908.len() + BINDINGS_200901.len() + SCOPED_BINDINGS.len()
        );
    }

    #[test]
    fn test_binding_scope() {
        let binding = FieldBinding::new("type", SchemaVersion::V200901, "enumTypesOfFileableObjects")
            .within("getChildren")
            .in_role(NamespaceRole::Messaging);
        assert!(binding.matches(NamespaceRole::Messaging, Some("getChildren")));
        assert!(!binding.matches(NamespaceRole::Messaging, Some("cmisFault")));
        assert!(!binding.matches(NamespaceRole::Core, Some("getChildren")));
        assert!(!binding.matches(NamespaceRole::Messaging, None));
        assert_eq!(binding.specificity(), 3);

        let open = FieldBinding::new("direction", SchemaVersion::V200901, "enumRelationshipDirection");
        assert!(open.matches(NamespaceRole::Core, None));
        assert_eq!(open.specificity(), 0);
    }

    #[test]
    fn test_scoped_binding_from_yaml() {
        let yaml = r#"
bindings:
  - element: type
    schema: "200901"
    vocabulary: enumServiceException
    parent: cmisFault
    role: messaging
"#;
        let config = ScannerConfig::from_yaml(yaml).unwrap();
        assert_eq!(
            config.bindings,
            vec![FieldBinding::new("type", SchemaVersion::V200901, "enumServiceException")
                .within("cmisFault")
                .in_role(NamespaceRole::Messaging)]
        );
        config.validate(VocabularyRegistry::cmis()).unwrap();
    }

    #[test]
    fn test_default_bindings_resolve() {
        ScannerConfig::default()
            .validate(VocabularyRegistry::cmis())
            .unwrap();
    }

    #[test]
    fn test_config_serialization() {
        let config = ScannerConfig::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed = ScannerConfig::from_yaml(&yaml).unwrap();
        assert_eq!(parsed.bindings, config.bindings);
        assert_eq!(parsed.settings.max_body_size, config.settings.max_body_size);
    }

    #[test]
    fn test_config_from_yaml() {
        let yaml = r#"
version: "1"
settings:
  fail_fast: true
  max_body_size: 4096
bindings:
  - element: ACLPropagation
    schema: "200908"
    vocabulary: enumACLPropagation
  - element: direction
    schema: "200901"
    vocabulary: enumRelationshipDirection
"#;
        let config = ScannerConfig::from_yaml(yaml).unwrap();
        assert!(config.settings.fail_fast);
        assert!(config.settings.block_doctype);
        assert_eq!(config.settings.max_body_size, 4096);
        assert_eq!(config.bindings.len(), 2);
        assert_eq!(config.bindings[1].schema, SchemaVersion::V200901);
        config.validate(VocabularyRegistry::cmis()).unwrap();
    }

    #[test]
    fn test_unknown_vocabulary_rejected() {
        let yaml = r#"
bindings:
  - element: unfileObjects
    schema: "200901"
    vocabulary: enumUnfileObject
"#;
        let config = ScannerConfig::from_yaml(yaml).unwrap();
        assert!(matches!(
            config.validate(VocabularyRegistry::cmis()),
            Err(BindingError::UnknownVocabulary { .. })
        ));
    }

    #[test]
    fn test_bad_schema_version() {
        let yaml = r#"
bindings:
  - element: x
    schema: "2010"
    vocabulary: enumX
"#;
        assert!(matches!(
            ScannerConfig::from_yaml(yaml),
            Err(BindingError::Config(_))
        ));
    }
}
