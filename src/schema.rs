//! CMIS schema generations and their namespace URIs.
//!
//! The URIs are wire contract constants and must match the schemas byte for
//! byte. Note the trailing slash on the 200908 URIs and its absence on 200901.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// CMIS core namespace, CMIS 1.0.
pub const CORE_200908_NS: &str = "http://docs.oasis-open.org/ns/cmis/core/200908/";
/// CMIS messaging namespace, CMIS 1.0.
pub const MESSAGING_200908_NS: &str = "http://docs.oasis-open.org/ns/cmis/messaging/200908/";
/// CMIS core namespace, 0.6x draft.
pub const CORE_200901_NS: &str = "http://docs.oasis-open.org/ns/cmis/core/200901";
/// CMIS messaging namespace, 0.6x draft.
pub const MESSAGING_200901_NS: &str = "http://docs.oasis-open.org/ns/cmis/messaging/200901";

/// Schema generation a vocabulary or message belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SchemaVersion {
    /// Pre-standard draft schemas
    #[serde(rename = "200901")]
    V200901,
    /// CMIS 1.0
    #[serde(rename = "200908")]
    V200908,
}

impl SchemaVersion {
    /// All known generations, oldest first.
    pub const ALL: [SchemaVersion; 2] = [SchemaVersion::V200901, SchemaVersion::V200908];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::V200901 => "200901",
            Self::V200908 => "200908",
        }
    }

    pub fn messaging(&self) -> SchemaNamespace {
        match self {
            Self::V200901 => MESSAGING_200901,
            Self::V200908 => MESSAGING_200908,
        }
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchemaVersion {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "200901" => Ok(Self::V200901),
            "200908" => Ok(Self::V200908),
            other => Err(format!(
                "unknown CMIS schema version '{}', expected 200901 or 200908",
                other
            )),
        }
    }
}

/// Which of the two schema documents a namespace belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamespaceRole {
    Core,
    Messaging,
}

/// A CMIS target namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SchemaNamespace {
    pub version: SchemaVersion,
    pub role: NamespaceRole,
    pub uri: &'static str,
}

pub const CORE_200908: SchemaNamespace = SchemaNamespace {
    version: SchemaVersion::V200908,
    role: NamespaceRole::Core,
    uri: CORE_200908_NS,
};

pub const MESSAGING_200908: SchemaNamespace = SchemaNamespace {
    version: SchemaVersion::V200908,
    role: NamespaceRole::Messaging,
    uri: MESSAGING_200908_NS,
};

pub const CORE_200901: SchemaNamespace = SchemaNamespace {
    version: SchemaVersion::V200901,
    role: NamespaceRole::Core,
    uri: CORE_200901_NS,
};

pub const MESSAGING_200901: SchemaNamespace = SchemaNamespace {
    version: SchemaVersion::V200901,
    role: NamespaceRole::Messaging,
    uri: MESSAGING_200901_NS,
};

const KNOWN: [SchemaNamespace; 4] = [CORE_200908, MESSAGING_200908, CORE_200901, MESSAGING_200901];

impl SchemaNamespace {
    /// Resolve a namespace URI. Matching is exact; a 200908 URI without its
    /// trailing slash is not a CMIS namespace.
    pub fn from_uri(uri: &str) -> Option<SchemaNamespace> {
        KNOWN.iter().copied().find(|ns| ns.uri == uri)
    }
}

impl fmt::Display for SchemaNamespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.uri)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_uri() {
        let ns = SchemaNamespace::from_uri("http://docs.oasis-open.org/ns/cmis/core/200908/").unwrap();
        assert_eq!(ns.version, SchemaVersion::V200908);
        assert_eq!(ns.role, NamespaceRole::Core);

        let ns = SchemaNamespace::from_uri(MESSAGING_200901_NS).unwrap();
        assert_eq!(ns.version, SchemaVersion::V200901);
        assert_eq!(ns.role, NamespaceRole::Messaging);
    }

    #[test]
    fn test_from_uri_is_exact() {
        assert!(SchemaNamespace::from_uri("http://docs.oasis-open.org/ns/cmis/core/200908").is_none());
        assert!(SchemaNamespace::from_uri("http://docs.oasis-open.org/ns/cmis/core/200901/").is_none());
        assert!(SchemaNamespace::from_uri("http://schemas.xmlsoap.org/soap/envelope/").is_none());
    }

    #[test]
    fn test_version_parse() {
        assert_eq!("200908".parse::<SchemaVersion>().unwrap(), SchemaVersion::V200908);
        assert!("2009".parse::<SchemaVersion>().is_err());
        assert_eq!(SchemaVersion::V200901.messaging(), MESSAGING_200901);
    }

    #[test]
    fn test_version_yaml() {
        let version: SchemaVersion = serde_yaml::from_str("\"200901\"").unwrap();
        assert_eq!(version, SchemaVersion::V200901);
    }
}
