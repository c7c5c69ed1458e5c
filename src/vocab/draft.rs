//! Draft vocabularies (`core/200901`, `messaging/200901`).
//!
//! Several of these have CMIS 1.0 siblings in [`super::core`] with the same
//! or similar literals. They are separate types; the namespace of the
//! enclosing message decides which one applies.

use crate::registry::Vocabulary;
use crate::schema::{CORE_200901, MESSAGING_200901};
use crate::wire_enum;

wire_enum! {
    pub enum Cardinality in CORE_200901 as "enumCardinality" {
        Single => "single",
        Multi => "multi",
    }
}

wire_enum! {
    pub enum ContentStreamAllowed in CORE_200901 as "enumContentStreamAllowed" {
        NotAllowed => "notallowed",
        Allowed => "allowed",
        Required => "required",
    }
}

wire_enum! {
    /// Predecessor of the 1.0 `enumUnfileObject`.
    pub enum UnfileNonfolderObjects in CORE_200901 as "enumUnfileNonfolderObjects" {
        Unfile => "unfile",
        DeleteSingleFiled => "deletesinglefiled",
        Delete => "delete",
    }
}

wire_enum! {
    #[derive(Default)]
    pub enum IncludeRelationships in CORE_200901 as "enumIncludeRelationships" {
        #[default]
        None => "none",
        Source => "source",
        Target => "target",
        Both => "both",
    }
}

wire_enum! {
    /// Which version of a document `getProperties` returns.
    #[derive(Default)]
    pub enum ReturnVersion in CORE_200901 as "enumReturnVersion" {
        #[default]
        This => "this",
        Latest => "latest",
        LatestMajor => "latestmajor",
    }
}

wire_enum! {
    pub enum TypesOfFileableObjects in CORE_200901 as "enumTypesOfFileableObjects" {
        Documents => "documents",
        Folders => "folders",
        Policies => "policies",
        Any => "any",
    }
}

wire_enum! {
    pub enum RelationshipDirection in CORE_200901 as "enumRelationshipDirection" {
        Source => "source",
        Target => "target",
        Both => "both",
    }
}

wire_enum! {
    #[derive(Default)]
    pub enum VersioningState in CORE_200901 as "enumVersioningState" {
        CheckedOut => "checkedout",
        Minor => "minor",
        #[default]
        Major => "major",
    }
}

wire_enum! {
    pub enum BasicPermissions in CORE_200901 as "enumBasicPermissions" {
        Read => "cmis:read",
        Write => "cmis:write",
        Delete => "cmis:delete",
        All => "cmis:all",
    }
}

wire_enum! {
    pub enum ObjectType in CORE_200901 as "enumObjectType" {
        Document => "document",
        Folder => "folder",
        Relationship => "relationship",
        Policy => "policy",
    }
}

wire_enum! {
    pub enum Updatability in CORE_200901 as "enumUpdatability" {
        ReadOnly => "readonly",
        ReadWrite => "readwrite",
        WhenCheckedOut => "whencheckedout",
        OnCreate => "oncreate",
    }
}

wire_enum! {
    pub enum PropertyType in CORE_200901 as "enumPropertyType" {
        Boolean => "boolean",
        Id => "id",
        Integer => "integer",
        DateTime => "datetime",
        Decimal => "decimal",
        Html => "html",
        String => "string",
        Uri => "uri",
        Xml => "xml",
    }
}

wire_enum! {
    pub enum CapabilityJoin in CORE_200901 as "enumCapabilityJoin" {
        NoJoin => "nojoin",
        InnerOnly => "inneronly",
        InnerAndOuter => "innerandouter",
    }
}

wire_enum! {
    pub enum AclPropagation in CORE_200901 as "enumACLPropagation" {
        RepositoryDetermined => "repositorydetermined",
        ObjectOnly => "objectonly",
        Propagate => "propagate",
    }
}

wire_enum! {
    /// Kind of a draft `cmisFault`.
    pub enum ServiceException in MESSAGING_200901 as "enumServiceException" {
        Constraint => "constraint",
        ContentAlreadyExists => "contentAlreadyExists",
        FilterNotValid => "filterNotValid",
        FolderNotValid => "folderNotValid",
        InvalidArgument => "invalidArgument",
        NotInFolder => "notInFolder",
        ObjectNotFound => "objectNotFound",
        Offset => "offset",
        NotSupported => "notSupported",
        PermissionDenied => "permissionDenied",
        Runtime => "runtime",
        Storage => "storage",
        StreamNotSupported => "streamNotSupported",
        Type => "type",
        UpdateConflict => "updateConflict",
        Versioning => "versioning",
    }
}

pub(crate) fn vocabularies() -> Vec<Vocabulary> {
    vec![
        Vocabulary::of::<Cardinality>(),
        Vocabulary::of::<ContentStreamAllowed>(),
        Vocabulary::of::<UnfileNonfolderObjects>(),
        Vocabulary::of::<IncludeRelationships>(),
        Vocabulary::of::<ReturnVersion>(),
        Vocabulary::of::<TypesOfFileableObjects>(),
        Vocabulary::of::<RelationshipDirection>(),
        Vocabulary::of::<VersioningState>(),
        Vocabulary::of::<BasicPermissions>(),
        Vocabulary::of::<ObjectType>(),
        Vocabulary::of::<Updatability>(),
        Vocabulary::of::<PropertyType>(),
        Vocabulary::of::<CapabilityJoin>(),
        Vocabulary::of::<AclPropagation>(),
        Vocabulary::of::<ServiceException>(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SchemaVersion;
    use crate::vocab::core;
    use crate::wire::WireEnum;

    #[test]
    fn test_siblings_stay_distinct() {
        assert_eq!(UnfileNonfolderObjects::TYPE_NAME, "enumUnfileNonfolderObjects");
        assert_eq!(core::UnfileObject::TYPE_NAME, "enumUnfileObject");
        assert_eq!(Cardinality::schema(), SchemaVersion::V200901);
        assert_eq!(core::Cardinality::schema(), SchemaVersion::V200908);
    }

    #[test]
    fn test_draft_only_literals() {
        assert_eq!(CapabilityJoin::decode("nojoin").unwrap(), CapabilityJoin::NoJoin);
        assert!(core::CapabilityJoin::decode("nojoin").is_err());
        assert!(CapabilityJoin::decode("none").is_err());

        assert_eq!(RelationshipDirection::decode("both").unwrap(), RelationshipDirection::Both);
        assert!(core::RelationshipDirection::decode("both").is_err());

        assert_eq!(BasicPermissions::decode("cmis:delete").unwrap(), BasicPermissions::Delete);
        assert!(core::BasicPermissions::decode("cmis:delete").is_err());
    }

    #[test]
    fn test_defaults() {
        assert_eq!(ReturnVersion::default(), ReturnVersion::This);
        assert_eq!(VersioningState::default(), VersioningState::Major);
        assert!(VersioningState::decode("none").is_err());
    }

    #[test]
    fn test_object_type_lowercase() {
        assert_eq!(ObjectType::decode("document").unwrap(), ObjectType::Document);
        assert!(ObjectType::decode("cmis:document").is_err());
        assert_eq!(vocabularies().len(), 15);
    }

    #[test]
    fn test_service_exception_generations() {
        assert_eq!(ServiceException::NAMESPACE, crate::schema::MESSAGING_200901);
        assert_eq!(ServiceException::decode("notInFolder").unwrap(), ServiceException::NotInFolder);
        assert!(core::ServiceException::decode("notInFolder").is_err());
        assert!(ServiceException::decode("nameConstraintViolation").is_err());
        assert_eq!(
            core::ServiceException::decode("nameConstraintViolation").unwrap(),
            core::ServiceException::NameConstraintViolation
        );
    }
}
