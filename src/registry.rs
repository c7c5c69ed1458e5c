//! Runtime view over all vocabularies.
//!
//! Typed code uses the vocabulary enums directly. The registry serves callers
//! that only learn which vocabulary applies at runtime, such as the message
//! scanner, where a binding names a vocabulary by schema version and type name.

use crate::error::BindingError;
use crate::schema::{SchemaNamespace, SchemaVersion};
use crate::vocab;
use crate::wire::{duplicate_wire_values, WireEnum};
use glob::Pattern;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

/// Type-erased handle to one vocabulary.
#[derive(Clone, Copy)]
pub struct Vocabulary {
    type_name: &'static str,
    namespace: SchemaNamespace,
    values: fn() -> Vec<&'static str>,
    canonical: fn(&str) -> Result<&'static str, BindingError>,
    duplicates: fn() -> Vec<&'static str>,
}

impl Vocabulary {
    pub fn of<T: WireEnum>() -> Self {
        Self {
            type_name: T::TYPE_NAME,
            namespace: T::NAMESPACE,
            values: wire_values::<T>,
            canonical: canonical::<T>,
            duplicates: duplicate_wire_values::<T>,
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn namespace(&self) -> SchemaNamespace {
        self.namespace
    }

    pub fn schema(&self) -> SchemaVersion {
        self.namespace.version
    }

    /// Wire literals in declaration order.
    pub fn wire_values(&self) -> Vec<&'static str> {
        (self.values)()
    }

    /// Decode `token` and return the declared literal it matched.
    pub fn canonical(&self, token: &str) -> Result<&'static str, BindingError> {
        (self.canonical)(token)
    }

    pub fn validate(&self, token: &str) -> Result<(), BindingError> {
        self.canonical(token).map(|_| ())
    }

    pub fn duplicate_wire_values(&self) -> Vec<&'static str> {
        (self.duplicates)()
    }
}

impl fmt::Debug for Vocabulary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vocabulary")
            .field("type_name", &self.type_name)
            .field("namespace", &self.namespace.uri)
            .finish()
    }
}

fn wire_values<T: WireEnum>() -> Vec<&'static str> {
    T::VARIANTS.iter().map(WireEnum::as_wire_str).collect()
}

fn canonical<T: WireEnum>(token: &str) -> Result<&'static str, BindingError> {
    T::decode(token).map(|variant| variant.as_wire_str())
}

static CMIS: Lazy<VocabularyRegistry> = Lazy::new(|| VocabularyRegistry::new(vocab::all()));

/// Vocabularies addressed by schema version and type name.
#[derive(Debug, Clone)]
pub struct VocabularyRegistry {
    vocabularies: Vec<Vocabulary>,
    index: HashMap<SchemaVersion, HashMap<&'static str, usize>>,
}

impl VocabularyRegistry {
    /// Build a registry. A later entry with the same version and type name
    /// is ignored.
    pub fn new(vocabularies: Vec<Vocabulary>) -> Self {
        let mut index: HashMap<SchemaVersion, HashMap<&'static str, usize>> = HashMap::new();
        for (position, vocabulary) in vocabularies.iter().enumerate() {
            index
                .entry(vocabulary.schema())
                .or_default()
                .entry(vocabulary.type_name())
                .or_insert(position);
        }
        Self {
            vocabularies,
            index,
        }
    }

    /// Every CMIS vocabulary of both schema generations.
    pub fn cmis() -> &'static VocabularyRegistry {
        &CMIS
    }

    pub fn find(&self, schema: SchemaVersion, type_name: &str) -> Option<&Vocabulary> {
        self.index
            .get(&schema)
            .and_then(|by_name| by_name.get(type_name))
            .map(|&position| &self.vocabularies[position])
    }

    pub fn get(&self, schema: SchemaVersion, type_name: &str) -> Result<&Vocabulary, BindingError> {
        self.find(schema, type_name)
            .ok_or_else(|| BindingError::UnknownVocabulary {
                schema,
                name: type_name.to_string(),
            })
    }

    /// Decode `token` against the named vocabulary.
    pub fn decode(
        &self,
        schema: SchemaVersion,
        type_name: &str,
        token: &str,
    ) -> Result<&'static str, BindingError> {
        self.get(schema, type_name)?.canonical(token)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vocabulary> {
        self.vocabularies.iter()
    }

    pub fn for_version(&self, schema: SchemaVersion) -> impl Iterator<Item = &Vocabulary> {
        self.iter().filter(move |v| v.schema() == schema)
    }

    /// Vocabularies whose type name matches a glob pattern, e.g. `enumCapability*`.
    pub fn matching(&self, pattern: &str) -> Result<Vec<&Vocabulary>, BindingError> {
        let pattern = Pattern::new(pattern)
            .map_err(|e| BindingError::Config(format!("invalid pattern '{}': {}", pattern, e)))?;
        Ok(self
            .iter()
            .filter(|v| pattern.matches(v.type_name()))
            .collect())
    }

    /// Vocabularies whose wire literals are not unique, with the offending literals.
    pub fn duplicate_wire_values(&self) -> Vec<(&Vocabulary, Vec<&'static str>)> {
        self.iter()
            .map(|v| (v, v.duplicate_wire_values()))
            .filter(|(_, duplicates)| !duplicates.is_empty())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.vocabularies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vocabularies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::core::AclPropagation;

    #[test]
    fn test_cmis_registry_contents() {
        let registry = VocabularyRegistry::cmis();
        assert_eq!(registry.len(), 45);
        assert_eq!(registry.for_version(SchemaVersion::V200908).count(), 30);
        assert_eq!(registry.for_version(SchemaVersion::V200901).count(), 15);
    }

    #[test]
    fn test_all_vocabularies_injective() {
        let duplicates = VocabularyRegistry::cmis().duplicate_wire_values();
        assert!(duplicates.is_empty(), "duplicate wire values: {:?}", duplicates);
    }

    #[test]
    fn test_type_names_unique_per_version() {
        let registry = VocabularyRegistry::cmis();
        for version in SchemaVersion::ALL {
            let mut names: Vec<_> = registry.for_version(version).map(|v| v.type_name()).collect();
            let total = names.len();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), total, "duplicate type name in {}", version);
        }
    }

    #[test]
    fn test_decode_by_name() {
        let registry = VocabularyRegistry::cmis();
        assert_eq!(
            registry
                .decode(SchemaVersion::V200908, "enumACLPropagation", "objectonly")
                .unwrap(),
            "objectonly"
        );
        assert!(matches!(
            registry.decode(SchemaVersion::V200908, "enumACLPropagation", "bogus"),
            Err(BindingError::InvalidEnumValue { enumeration: "enumACLPropagation", .. })
        ));
        assert!(matches!(
            registry.decode(SchemaVersion::V200901, "enumUnfileObject", "unfile"),
            Err(BindingError::UnknownVocabulary { .. })
        ));
        assert_eq!(
            registry
                .decode(SchemaVersion::V200901, "enumUnfileNonfolderObjects", "unfile")
                .unwrap(),
            "unfile"
        );
    }

    #[test]
    fn test_same_name_resolved_by_version() {
        let registry = VocabularyRegistry::cmis();
        let v1 = registry.get(SchemaVersion::V200908, "enumCapabilityJoin").unwrap();
        let draft = registry.get(SchemaVersion::V200901, "enumCapabilityJoin").unwrap();
        assert!(v1.validate("none").is_ok());
        assert!(draft.validate("none").is_err());
        assert!(draft.validate("nojoin").is_ok());
    }

    #[test]
    fn test_matching() {
        let registry = VocabularyRegistry::cmis();
        let capabilities = registry.matching("enumCapability*").unwrap();
        // six in 200908, one in 200901
        assert_eq!(capabilities.len(), 7);
        assert!(capabilities.iter().all(|v| v.type_name().starts_with("enumCapability")));
        assert!(registry.matching("enum[").is_err());
    }

    #[test]
    fn test_wire_values_order() {
        let vocabulary = Vocabulary::of::<AclPropagation>();
        assert_eq!(
            vocabulary.wire_values(),
            vec!["repositorydetermined", "objectonly", "propagate"]
        );
        assert_eq!(vocabulary.namespace().uri, "http://docs.oasis-open.org/ns/cmis/core/200908/");
    }

    #[test]
    fn test_first_registration_wins() {
        let registry = VocabularyRegistry::new(vec![
            Vocabulary::of::<AclPropagation>(),
            Vocabulary::of::<AclPropagation>(),
        ]);
        assert_eq!(registry.len(), 2);
        assert!(registry.find(SchemaVersion::V200908, "enumACLPropagation").is_some());
    }
}
