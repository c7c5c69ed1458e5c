//! CMIS 1.0 vocabularies (`core/200908/` and `messaging/200908/`).

use crate::registry::Vocabulary;
use crate::schema::{CORE_200908, MESSAGING_200908};
use crate::wire_enum;

wire_enum! {
    /// Precision of decimal properties, in bits.
    pub enum DecimalPrecision in CORE_200908 as "enumDecimalPrecision" {
        Bits32 => "32",
        Bits64 => "64",
    }
}

wire_enum! {
    pub enum ContentStreamAllowed in CORE_200908 as "enumContentStreamAllowed" {
        NotAllowed => "notallowed",
        Allowed => "allowed",
        Required => "required",
    }
}

wire_enum! {
    pub enum Cardinality in CORE_200908 as "enumCardinality" {
        Single => "single",
        Multi => "multi",
    }
}

wire_enum! {
    pub enum Updatability in CORE_200908 as "enumUpdatability" {
        ReadOnly => "readonly",
        ReadWrite => "readwrite",
        WhenCheckedOut => "whencheckedout",
        OnCreate => "oncreate",
    }
}

wire_enum! {
    pub enum DateTimeResolution in CORE_200908 as "enumDateTimeResolution" {
        Year => "year",
        Date => "date",
        Time => "time",
    }
}

wire_enum! {
    pub enum PropertyType in CORE_200908 as "enumPropertyType" {
        Boolean => "boolean",
        Id => "id",
        Integer => "integer",
        DateTime => "datetime",
        Decimal => "decimal",
        Html => "html",
        String => "string",
        Uri => "uri",
    }
}

wire_enum! {
    pub enum BaseObjectTypeIds in CORE_200908 as "enumBaseObjectTypeIds" {
        Document => "cmis:document",
        Folder => "cmis:folder",
        Relationship => "cmis:relationship",
        Policy => "cmis:policy",
    }
}

wire_enum! {
    pub enum CapabilityQuery in CORE_200908 as "enumCapabilityQuery" {
        None => "none",
        MetadataOnly => "metadataonly",
        FulltextOnly => "fulltextonly",
        BothSeparate => "bothseparate",
        BothCombined => "bothcombined",
    }
}

wire_enum! {
    pub enum CapabilityJoin in CORE_200908 as "enumCapabilityJoin" {
        None => "none",
        InnerOnly => "inneronly",
        InnerAndOuter => "innerandouter",
    }
}

wire_enum! {
    pub enum CapabilityContentStreamUpdates in CORE_200908 as "enumCapabilityContentStreamUpdates" {
        Anytime => "anytime",
        PwcOnly => "pwconly",
        None => "none",
    }
}

wire_enum! {
    /// Versioning state of a newly created document. Defaults to `major`.
    #[derive(Default)]
    pub enum VersioningState in CORE_200908 as "enumVersioningState" {
        None => "none",
        CheckedOut => "checkedout",
        Minor => "minor",
        #[default]
        Major => "major",
    }
}

wire_enum! {
    /// What `deleteTree` does with non-folder objects.
    pub enum UnfileObject in CORE_200908 as "enumUnfileObject" {
        Unfile => "unfile",
        DeleteSingleFiled => "deletesinglefiled",
        Delete => "delete",
    }
}

wire_enum! {
    pub enum RelationshipDirection in CORE_200908 as "enumRelationshipDirection" {
        Source => "source",
        Target => "target",
        Either => "either",
    }
}

wire_enum! {
    #[derive(Default)]
    pub enum IncludeRelationships in CORE_200908 as "enumIncludeRelationships" {
        #[default]
        None => "none",
        Source => "source",
        Target => "target",
        Both => "both",
    }
}

wire_enum! {
    /// Property ids common to every base type.
    pub enum PropertiesBase in CORE_200908 as "enumPropertiesBase" {
        Name => "cmis:name",
        ObjectId => "cmis:objectId",
        ObjectTypeId => "cmis:objectTypeId",
        BaseTypeId => "cmis:baseTypeId",
        CreatedBy => "cmis:createdBy",
        CreationDate => "cmis:creationDate",
        LastModifiedBy => "cmis:lastModifiedBy",
        LastModificationDate => "cmis:lastModificationDate",
        ChangeToken => "cmis:changeToken",
    }
}

wire_enum! {
    pub enum PropertiesDocument in CORE_200908 as "enumPropertiesDocument" {
        IsImmutable => "cmis:isImmutable",
        IsLatestVersion => "cmis:isLatestVersion",
        IsMajorVersion => "cmis:isMajorVersion",
        IsLatestMajorVersion => "cmis:isLatestMajorVersion",
        VersionLabel => "cmis:versionLabel",
        VersionSeriesId => "cmis:versionSeriesId",
        IsVersionSeriesCheckedOut => "cmis:isVersionSeriesCheckedOut",
        VersionSeriesCheckedOutBy => "cmis:versionSeriesCheckedOutBy",
        VersionSeriesCheckedOutId => "cmis:versionSeriesCheckedOutId",
        CheckinComment => "cmis:checkinComment",
        ContentStreamLength => "cmis:contentStreamLength",
        ContentStreamMimeType => "cmis:contentStreamMimeType",
        ContentStreamFileName => "cmis:contentStreamFileName",
        ContentStreamId => "cmis:contentStreamId",
    }
}

wire_enum! {
    pub enum PropertiesFolder in CORE_200908 as "enumPropertiesFolder" {
        ParentId => "cmis:parentId",
        AllowedChildObjectTypeIds => "cmis:allowedChildObjectTypeIds",
        Path => "cmis:path",
    }
}

wire_enum! {
    pub enum PropertiesRelationship in CORE_200908 as "enumPropertiesRelationship" {
        SourceId => "cmis:sourceId",
        TargetId => "cmis:targetId",
    }
}

wire_enum! {
    pub enum PropertiesPolicy in CORE_200908 as "enumPropertiesPolicy" {
        PolicyText => "cmis:policyText",
    }
}

wire_enum! {
    pub enum CapabilityAcl in CORE_200908 as "enumCapabilityACL" {
        None => "none",
        Discover => "discover",
        Manage => "manage",
    }
}

wire_enum! {
    /// How an applied ACL propagates to dependent objects.
    pub enum AclPropagation in CORE_200908 as "enumACLPropagation" {
        RepositoryDetermined => "repositorydetermined",
        ObjectOnly => "objectonly",
        Propagate => "propagate",
    }
}

wire_enum! {
    pub enum CapabilityChanges in CORE_200908 as "enumCapabilityChanges" {
        None => "none",
        ObjectIdsOnly => "objectidsonly",
        Properties => "properties",
        All => "all",
    }
}

wire_enum! {
    pub enum CapabilityRendition in CORE_200908 as "enumCapabilityRendition" {
        None => "none",
        Read => "read",
    }
}

wire_enum! {
    pub enum SupportedPermissions in CORE_200908 as "enumSupportedPermissions" {
        Basic => "basic",
        Repository => "repository",
        Both => "both",
    }
}

wire_enum! {
    pub enum BasicPermissions in CORE_200908 as "enumBasicPermissions" {
        Read => "cmis:read",
        Write => "cmis:write",
        All => "cmis:all",
    }
}

wire_enum! {
    /// Keys of the `allowableActions` element.
    pub enum AllowableActionsKey in CORE_200908 as "enumAllowableActionsKey" {
        CanDeleteObject => "canDeleteObject",
        CanUpdateProperties => "canUpdateProperties",
        CanGetFolderTree => "canGetFolderTree",
        CanGetProperties => "canGetProperties",
        CanGetObjectRelationships => "canGetObjectRelationships",
        CanGetObjectParents => "canGetObjectParents",
        CanGetFolderParent => "canGetFolderParent",
        CanGetDescendants => "canGetDescendants",
        CanMoveObject => "canMoveObject",
        CanDeleteContentStream => "canDeleteContentStream",
        CanCheckOut => "canCheckOut",
        CanCancelCheckOut => "canCancelCheckOut",
        CanCheckIn => "canCheckIn",
        CanSetContentStream => "canSetContentStream",
        CanGetAllVersions => "canGetAllVersions",
        CanAddObjectToFolder => "canAddObjectToFolder",
        CanRemoveObjectFromFolder => "canRemoveObjectFromFolder",
        CanGetContentStream => "canGetContentStream",
        CanApplyPolicy => "canApplyPolicy",
        CanGetAppliedPolicies => "canGetAppliedPolicies",
        CanRemovePolicy => "canRemovePolicy",
        CanGetChildren => "canGetChildren",
        CanCreateDocument => "canCreateDocument",
        CanCreateFolder => "canCreateFolder",
        CanCreateRelationship => "canCreateRelationship",
        CanDeleteTree => "canDeleteTree",
        CanGetRenditions => "canGetRenditions",
        CanGetAcl => "canGetACL",
        CanApplyAcl => "canApplyACL",
    }
}

wire_enum! {
    pub enum Users in CORE_200908 as "enumUsers" {
        User => "cmis:user",
    }
}

wire_enum! {
    pub enum RenditionKind in CORE_200908 as "enumRenditionKind" {
        Thumbnail => "cmis:thumbnail",
    }
}

wire_enum! {
    /// Fault kinds carried in `cmisFault/type`.
    pub enum ServiceException in MESSAGING_200908 as "enumServiceException" {
        Constraint => "constraint",
        NameConstraintViolation => "nameConstraintViolation",
        ContentAlreadyExists => "contentAlreadyExists",
        FilterNotValid => "filterNotValid",
        InvalidArgument => "invalidArgument",
        NotSupported => "notSupported",
        ObjectNotFound => "objectNotFound",
        PermissionDenied => "permissionDenied",
        Runtime => "runtime",
        Storage => "storage",
        StreamNotSupported => "streamNotSupported",
        UpdateConflict => "updateConflict",
        Versioning => "versioning",
    }
}

wire_enum! {
    pub enum TypeOfChanges in CORE_200908 as "enumTypeOfChanges" {
        Created => "created",
        Updated => "updated",
        Deleted => "deleted",
        Security => "security",
    }
}

pub(crate) fn vocabularies() -> Vec<Vocabulary> {
    vec![
        Vocabulary::of::<DecimalPrecision>(),
        Vocabulary::of::<ContentStreamAllowed>(),
        Vocabulary::of::<Cardinality>(),
        Vocabulary::of::<Updatability>(),
        Vocabulary::of::<DateTimeResolution>(),
        Vocabulary::of::<PropertyType>(),
        Vocabulary::of::<BaseObjectTypeIds>(),
        Vocabulary::of::<CapabilityQuery>(),
        Vocabulary::of::<CapabilityJoin>(),
        Vocabulary::of::<CapabilityContentStreamUpdates>(),
        Vocabulary::of::<VersioningState>(),
        Vocabulary::of::<UnfileObject>(),
        Vocabulary::of::<RelationshipDirection>(),
        Vocabulary::of::<IncludeRelationships>(),
        Vocabulary::of::<PropertiesBase>(),
        Vocabulary::of::<PropertiesDocument>(),
        Vocabulary::of::<PropertiesFolder>(),
        Vocabulary::of::<PropertiesRelationship>(),
        Vocabulary::of::<PropertiesPolicy>(),
        Vocabulary::of::<CapabilityAcl>(),
        Vocabulary::of::<AclPropagation>(),
        Vocabulary::of::<CapabilityChanges>(),
        Vocabulary::of::<CapabilityRendition>(),
        Vocabulary::of::<SupportedPermissions>(),
        Vocabulary::of::<BasicPermissions>(),
        Vocabulary::of::<AllowableActionsKey>(),
        Vocabulary::of::<Users>(),
        Vocabulary::of::<RenditionKind>(),
        Vocabulary::of::<ServiceException>(),
        Vocabulary::of::<TypeOfChanges>(),
    ]
}
