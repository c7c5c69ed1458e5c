//! Single-payload response envelopes.
//!
//! The payload types (ACL, CMIS object) belong to the caller's object model
//! and are taken as type parameters.

use crate::error::BindingError;
use crate::schema::{SchemaNamespace, MESSAGING_200908};
use serde::{Deserialize, Serialize};

/// A response element that wraps exactly one required payload field.
pub trait ResponseEnvelope {
    type Payload;

    /// Element name of the response in the messaging schema.
    const ELEMENT: &'static str;
    /// Element name of the payload field.
    const FIELD: &'static str;
    const NAMESPACE: SchemaNamespace = MESSAGING_200908;

    fn payload(&self) -> Option<&Self::Payload>;

    fn set_payload(&mut self, payload: Self::Payload);

    fn take_payload(&mut self) -> Option<Self::Payload>;

    /// The payload, or `MissingField` when it was never set.
    fn validate(&self) -> Result<&Self::Payload, BindingError> {
        self.payload().ok_or(BindingError::MissingField {
            element: Self::ELEMENT,
            field: Self::FIELD,
        })
    }
}

/// Response of `applyACL`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "applyACLResponse")]
pub struct ApplyAclResponse<A> {
    #[serde(rename = "ACL", default = "Option::default", skip_serializing_if = "Option::is_none")]
    acl: Option<A>,
}

impl<A> ApplyAclResponse<A> {
    pub fn new(acl: A) -> Self {
        Self { acl: Some(acl) }
    }

    pub fn empty() -> Self {
        Self { acl: None }
    }

    pub fn acl(&self) -> Option<&A> {
        self.acl.as_ref()
    }

    pub fn set_acl(&mut self, acl: A) {
        self.acl = Some(acl);
    }

    pub fn into_acl(self) -> Option<A> {
        self.acl
    }
}

impl<A> Default for ApplyAclResponse<A> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<A> ResponseEnvelope for ApplyAclResponse<A> {
    type Payload = A;

    const ELEMENT: &'static str = "applyACLResponse";
    const FIELD: &'static str = "ACL";

    fn payload(&self) -> Option<&A> {
        self.acl()
    }

    fn set_payload(&mut self, payload: A) {
        self.set_acl(payload);
    }

    fn take_payload(&mut self) -> Option<A> {
        self.acl.take()
    }
}

/// Response of `getObject`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "getObjectResponse")]
pub struct GetObjectResponse<O> {
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    object: Option<O>,
}

impl<O> GetObjectResponse<O> {
    pub fn new(object: O) -> Self {
        Self {
            object: Some(object),
        }
    }

    pub fn empty() -> Self {
        Self { object: None }
    }

    pub fn object(&self) -> Option<&O> {
        self.object.as_ref()
    }

    pub fn set_object(&mut self, object: O) {
        self.object = Some(object);
    }

    pub fn into_object(self) -> Option<O> {
        self.object
    }
}

impl<O> Default for GetObjectResponse<O> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<O> ResponseEnvelope for GetObjectResponse<O> {
    type Payload = O;

    const ELEMENT: &'static str = "getObjectResponse";
    const FIELD: &'static str = "object";

    fn payload(&self) -> Option<&O> {
        self.object()
    }

    fn set_payload(&mut self, payload: O) {
        self.set_object(payload);
    }

    fn take_payload(&mut self) -> Option<O> {
        self.object.take()
    }
}
