//! Vocabulary checks over raw CMIS messages.
//!
//! Walks the XML with quick-xml's namespace-aware reader. Elements in one of
//! the CMIS namespaces select the schema generation; elements with a binding
//! have their text content decoded against the bound vocabulary. Everything
//! outside the CMIS namespaces (SOAP envelope, WS-Security, extensions) is
//! walked but not interpreted.

use crate::config::{FieldBinding, ScannerConfig};
use crate::error::{BindingError, Violation, ViolationCode};
use crate::registry::{Vocabulary, VocabularyRegistry};
use crate::schema::{SchemaNamespace, SchemaVersion};
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::ResolveResult;
use quick_xml::NsReader;
use std::cmp::Reverse;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Result of scanning one message.
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    /// Findings, in document order
    pub violations: Vec<Violation>,
    /// First CMIS schema generation seen
    pub schema: Option<SchemaVersion>,
    /// Number of bound fields decoded
    pub fields_checked: u32,
    /// Total element count
    pub element_count: u32,
}

impl ScanReport {
    /// Check if any violations were found.
    pub fn has_violations(&self) -> bool {
        !self.violations.is_empty()
    }

    /// Add a violation.
    pub fn add_violation(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    fn has_code(&self, code: ViolationCode) -> bool {
        self.violations.iter().any(|v| v.code == code)
    }
}

/// Text collected for a bound element.
struct Capture {
    depth: usize,
    vocabulary: Vocabulary,
    text: String,
}

/// Bindings sharing one element name, with their resolved vocabularies.
type Candidates = Vec<(FieldBinding, Vocabulary)>;

/// Checks CMIS messages against configured field bindings.
pub struct MessageScanner {
    config: ScannerConfig,
    bindings: HashMap<SchemaVersion, HashMap<String, Candidates>>,
}

impl MessageScanner {
    /// Create a scanner resolving bindings against the CMIS registry.
    pub fn new(config: ScannerConfig) -> Result<Self, BindingError> {
        Self::with_registry(config, VocabularyRegistry::cmis())
    }

    /// Create a scanner resolving bindings against `registry`. Fails if a
    /// binding names a vocabulary the registry does not have.
    pub fn with_registry(
        config: ScannerConfig,
        registry: &VocabularyRegistry,
    ) -> Result<Self, BindingError> {
        let mut bindings: HashMap<SchemaVersion, HashMap<String, Candidates>> = HashMap::new();
        for binding in &config.bindings {
            let vocabulary = *registry.get(binding.schema, &binding.vocabulary)?;
            bindings
                .entry(binding.schema)
                .or_default()
                .entry(binding.element.clone())
                .or_default()
                .push((binding.clone(), vocabulary));
        }

        Ok(Self { config, bindings })
    }

    pub fn config(&self) -> &ScannerConfig {
        &self.config
    }

    /// Scan raw message bytes.
    ///
    /// Returns `Err` when the message cannot be read at all (size, encoding,
    /// malformed XML, DOCTYPE). Invalid field values are reported in the
    /// `ScanReport`.
    pub fn scan(&self, data: &[u8]) -> Result<ScanReport, Violation> {
        let settings = &self.config.settings;

        if data.len() > settings.max_body_size {
            return Err(Violation::new(
                ViolationCode::BodyTooLarge,
                format!(
                    "message size {} exceeds maximum {}",
                    data.len(),
                    settings.max_body_size
                ),
            ));
        }

        let xml = std::str::from_utf8(data).map_err(|e| {
            Violation::new(ViolationCode::InvalidXml, format!("Invalid UTF-8: {}", e))
        })?;

        let mut reader = NsReader::from_str(xml);
        let mut report = ScanReport::default();
        let mut path: Vec<String> = Vec::new();
        let mut capture: Option<Capture> = None;

        loop {
            match reader.read_resolved_event() {
                Ok((ns, Event::Start(e))) => {
                    report.element_count += 1;
                    // a bound element with child elements is not a simple value
                    capture = None;
                    path.push(local_name(&e));
                    if let Some(vocabulary) = self.binding_for(&ns, &path, &mut report) {
                        capture = Some(Capture {
                            depth: path.len(),
                            vocabulary,
                            text: String::new(),
                        });
                    }
                }

                Ok((ns, Event::Empty(e))) => {
                    // <versioningState/> carries the empty token
                    report.element_count += 1;
                    capture = None;
                    path.push(local_name(&e));
                    if let Some(vocabulary) = self.binding_for(&ns, &path, &mut report) {
                        check_token(&vocabulary, "", &path, &mut report);
                    }
                    path.pop();
                }

                Ok((_, Event::Text(e))) => {
                    if let Some(c) = capture.as_mut().filter(|c| c.depth == path.len()) {
                        let text = e.unescape().map_err(|e| {
                            Violation::with_location(
                                ViolationCode::InvalidXml,
                                format!("XML parse error: {}", e),
                                location(&path),
                            )
                        })?;
                        c.text.push_str(&text);
                    }
                }

                Ok((_, Event::CData(e))) => {
                    if let Some(c) = capture.as_mut().filter(|c| c.depth == path.len()) {
                        let text = std::str::from_utf8(&e).map_err(|e| {
                            Violation::new(ViolationCode::InvalidXml, format!("Invalid UTF-8: {}", e))
                        })?;
                        c.text.push_str(text);
                    }
                }

                Ok((_, Event::End(_))) => {
                    if capture.as_ref().is_some_and(|c| c.depth == path.len()) {
                        if let Some(c) = capture.take() {
                            check_token(&c.vocabulary, &c.text, &path, &mut report);
                        }
                    }
                    path.pop();
                }

                Ok((_, Event::DocType(_))) => {
                    if settings.block_doctype {
                        return Err(Violation::new(
                            ViolationCode::DoctypeDetected,
                            "DOCTYPE declarations are not allowed",
                        ));
                    }
                }

                Ok((_, Event::Eof)) => break,

                Err(e) => {
                    return Err(Violation::with_location(
                        ViolationCode::InvalidXml,
                        format!("XML parse error: {}", e),
                        location(&path),
                    ));
                }

                _ => {}
            }

            if settings.fail_fast && report.has_code(ViolationCode::InvalidEnumValue) {
                break;
            }
        }

        debug!(
            schema = ?report.schema,
            elements = report.element_count,
            fields_checked = report.fields_checked,
            violations = report.violations.len(),
            "Scanned CMIS message"
        );

        Ok(report)
    }

    /// Vocabulary bound to the element at the top of `path`, if any. Also
    /// records the schema generation of CMIS elements.
    ///
    /// Among the bindings for the element's name, the most specific one that
    /// matches its namespace role and enclosing element wins; ties go to the
    /// first declared.
    fn binding_for(
        &self,
        ns: &ResolveResult,
        path: &[String],
        report: &mut ScanReport,
    ) -> Option<Vocabulary> {
        let namespace = match ns {
            ResolveResult::Bound(ns) => std::str::from_utf8(ns.as_ref())
                .ok()
                .and_then(SchemaNamespace::from_uri)?,
            _ => return None,
        };

        match report.schema {
            None => report.schema = Some(namespace.version),
            Some(first) if first != namespace.version => {
                if !report.has_code(ViolationCode::MixedSchemaVersions) {
                    let violation = Violation::with_location(
                        ViolationCode::MixedSchemaVersions,
                        format!(
                            "element in {} namespace inside a {} message",
                            namespace.version, first
                        ),
                        location(path),
                    );
                    warn!(violation = %violation, "Mixed CMIS schema versions");
                    report.add_violation(violation);
                }
            }
            Some(_) => {}
        }

        let element = path.last()?;
        let parent = path.len().checked_sub(2).map(|i| path[i].as_str());
        self.bindings
            .get(&namespace.version)
            .and_then(|by_element| by_element.get(element))?
            .iter()
            .filter(|(binding, _)| binding.matches(namespace.role, parent))
            .min_by_key(|(binding, _)| Reverse(binding.specificity()))
            .map(|(_, vocabulary)| *vocabulary)
    }
}

fn check_token(vocabulary: &Vocabulary, token: &str, path: &[String], report: &mut ScanReport) {
    report.fields_checked += 1;
    if let Err(e) = vocabulary.validate(token) {
        let violation = Violation::from_binding_error(&e, location(path));
        warn!(
            vocabulary = vocabulary.type_name(),
            schema = %vocabulary.schema(),
            location = violation.location.as_deref().unwrap_or(""),
            "Invalid enumeration value"
        );
        report.add_violation(violation);
    }
}

fn local_name(e: &BytesStart) -> String {
    String::from_utf8_lossy(e.local_name().as_ref()).into_owned()
}

fn location(path: &[String]) -> String {
    format!("/{}", path.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::NamespaceRole;

    const APPLY_ACL: &str = r#"<?xml version="1.0"?>
<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/">
  <soap:Body>
    <cmism:applyACL xmlns:cmism="http://docs.oasis-open.org/ns/cmis/messaging/200908/">
      <cmism:repositoryId>repo</cmism:repositoryId>
      <cmism:objectId>workspace://SpacesStore/1</cmism:objectId>
      <cmism:ACLPropagation>propagate</cmism:ACLPropagation>
    </cmism:applyACL>
  </soap:Body>
</soap:Envelope>"#;

    fn scanner() -> MessageScanner {
        MessageScanner::new(ScannerConfig::default()).unwrap()
    }

    #[test]
    fn test_valid_message() {
        let report = scanner().scan(APPLY_ACL.as_bytes()).unwrap();
        assert!(!report.has_violations(), "{:?}", report.violations);
        assert_eq!(report.schema, Some(SchemaVersion::V200908));
        assert_eq!(report.fields_checked, 1);
        assert_eq!(report.element_count, 6);
    }

    #[test]
    fn test_invalid_value_location() {
        let xml = APPLY_ACL.replace(">propagate<", ">Propagate<");
        let report = scanner().scan(xml.as_bytes()).unwrap();
        assert_eq!(report.violations.len(), 1);
        let violation = &report.violations[0];
        assert_eq!(violation.code, ViolationCode::InvalidEnumValue);
        assert_eq!(
            violation.location.as_deref(),
            Some("/Envelope/Body/applyACL/ACLPropagation")
        );
        assert!(violation.message.contains("'Propagate'"));
        assert!(violation.message.contains("enumACLPropagation"));
    }

    #[test]
    fn test_whitespace_is_not_trimmed() {
        let xml = APPLY_ACL.replace(">propagate<", "> propagate <");
        let report = scanner().scan(xml.as_bytes()).unwrap();
        assert!(report.has_violations());
    }

    #[test]
    fn test_empty_element() {
        let xml = APPLY_ACL.replace(
            "<cmism:ACLPropagation>propagate</cmism:ACLPropagation>",
            "<cmism:ACLPropagation/>",
        );
        let report = scanner().scan(xml.as_bytes()).unwrap();
        assert_eq!(report.fields_checked, 1);
        assert_eq!(report.violations[0].code, ViolationCode::InvalidEnumValue);
    }

    #[test]
    fn test_escaped_and_cdata_text() {
        let xml = APPLY_ACL.replace(">propagate<", "><![CDATA[objectonly]]><");
        let report = scanner().scan(xml.as_bytes()).unwrap();
        assert!(!report.has_violations(), "{:?}", report.violations);

        let xml = r#"<t:cmisFault xmlns:t="http://docs.oasis-open.org/ns/cmis/messaging/200908/"><t:type>&#x69;nvalidArgument</t:type></t:cmisFault>"#;
        let report = scanner().scan(xml.as_bytes()).unwrap();
        assert!(!report.has_violations(), "{:?}", report.violations);
    }

    #[test]
    fn test_non_cmis_namespace_ignored() {
        let xml = r#"<root xmlns:x="urn:other"><x:ACLPropagation>whatever</x:ACLPropagation></root>"#;
        let report = scanner().scan(xml.as_bytes()).unwrap();
        assert!(!report.has_violations());
        assert_eq!(report.fields_checked, 0);
        assert_eq!(report.schema, None);
    }

    #[test]
    fn test_default_namespace_resolved() {
        let xml = r#"<deleteTree xmlns="http://docs.oasis-open.org/ns/cmis/messaging/200901"><unfileNonfolderObjects>deletesinglefiled</unfileNonfolderObjects></deleteTree>"#;
        let report = scanner().scan(xml.as_bytes()).unwrap();
        assert!(!report.has_violations(), "{:?}", report.violations);
        assert_eq!(report.schema, Some(SchemaVersion::V200901));
        assert_eq!(report.fields_checked, 1);
    }

    #[test]
    fn test_version_selects_vocabulary() {
        // "both" is a draft relationship direction but not a 1.0 one
        let draft = r#"<m:getRelationships xmlns:m="http://docs.oasis-open.org/ns/cmis/messaging/200901"><m:direction>both</m:direction></m:getRelationships>"#;
        assert!(!scanner().scan(draft.as_bytes()).unwrap().has_violations());

        let v1 = r#"<m:getObjectRelationships xmlns:m="http://docs.oasis-open.org/ns/cmis/messaging/200908/"><m:relationshipDirection>both</m:relationshipDirection></m:getObjectRelationships>"#;
        assert!(scanner().scan(v1.as_bytes()).unwrap().has_violations());
    }

    #[test]
    fn test_mixed_versions() {
        let xml = r#"<a:x xmlns:a="http://docs.oasis-open.org/ns/cmis/messaging/200908/" xmlns:b="http://docs.oasis-open.org/ns/cmis/messaging/200901"><b:y/><b:z/></a:x>"#;
        let report = scanner().scan(xml.as_bytes()).unwrap();
        assert_eq!(report.violations.len(), 1);
        assert_eq!(report.violations[0].code, ViolationCode::MixedSchemaVersions);
        assert_eq!(report.schema, Some(SchemaVersion::V200908));
    }

    #[test]
    fn test_fail_fast() {
        let xml = r#"<m:q xmlns:m="http://docs.oasis-open.org/ns/cmis/messaging/200908/"><m:includeRelationships>x</m:includeRelationships><m:versioningState>y</m:versioningState></m:q>"#;
        let report = scanner().scan(xml.as_bytes()).unwrap();
        assert_eq!(report.violations.len(), 2);

        let mut config = ScannerConfig::default();
        config.settings.fail_fast = true;
        let report = MessageScanner::new(config).unwrap().scan(xml.as_bytes()).unwrap();
        assert_eq!(report.violations.len(), 1);
    }

    #[test]
    fn test_fail_fast_continues_past_mixed_versions() {
        let xml = r#"<a:x xmlns:a="http://docs.oasis-open.org/ns/cmis/messaging/200908/" xmlns:b="http://docs.oasis-open.org/ns/cmis/messaging/200901"><b:y/><a:versioningState>bogus</a:versioningState><a:includeRelationships>bogus</a:includeRelationships></a:x>"#;
        let mut config = ScannerConfig::default();
        config.settings.fail_fast = true;
        let report = MessageScanner::new(config).unwrap().scan(xml.as_bytes()).unwrap();
        assert_eq!(report.violations.len(), 2);
        assert_eq!(report.violations[0].code, ViolationCode::MixedSchemaVersions);
        assert_eq!(report.violations[1].code, ViolationCode::InvalidEnumValue);
        assert_eq!(report.fields_checked, 1);
    }

    #[test]
    fn test_draft_fault_type() {
        let xml = r#"<m:cmisFault xmlns:m="http://docs.oasis-open.org/ns/cmis/messaging/200901"><m:type>invalidArgument</m:type><m:code>0</m:code><m:message>bad</m:message></m:cmisFault>"#;
        let report = scanner().scan(xml.as_bytes()).unwrap();
        assert!(!report.has_violations(), "{:?}", report.violations);
        assert_eq!(report.fields_checked, 1);

        let xml = xml.replace(">invalidArgument<", ">documents<");
        let report = scanner().scan(xml.as_bytes()).unwrap();
        assert_eq!(report.violations.len(), 1);
        assert!(report.violations[0].message.contains("enumServiceException"));
    }

    #[test]
    fn test_type_scoped_by_parent() {
        let xml = r#"<m:getChildren xmlns:m="http://docs.oasis-open.org/ns/cmis/messaging/200901"><m:folderId>f</m:folderId><m:type>folders</m:type></m:getChildren>"#;
        let report = scanner().scan(xml.as_bytes()).unwrap();
        assert!(!report.has_violations(), "{:?}", report.violations);
        assert_eq!(report.fields_checked, 1);

        let xml = xml.replace(">folders<", ">invalidArgument<");
        let report = scanner().scan(xml.as_bytes()).unwrap();
        assert_eq!(report.violations.len(), 1);
        assert!(report.violations[0]
            .message
            .contains("enumTypesOfFileableObjects"));

        // a `type` anywhere else is not a bound field
        let xml = r#"<m:getTypeDefinition xmlns:m="http://docs.oasis-open.org/ns/cmis/messaging/200901"><m:type>anything</m:type></m:getTypeDefinition>"#;
        let report = scanner().scan(xml.as_bytes()).unwrap();
        assert!(!report.has_violations());
        assert_eq!(report.fields_checked, 0);
    }

    #[test]
    fn test_most_specific_binding_wins() {
        let config = ScannerConfig {
            bindings: vec![
                FieldBinding::new("direction", SchemaVersion::V200901, "enumRelationshipDirection"),
                FieldBinding::new("direction", SchemaVersion::V200901, "enumReturnVersion")
                    .within("special"),
                FieldBinding::new("direction", SchemaVersion::V200901, "enumCapabilityJoin")
                    .in_role(NamespaceRole::Core),
            ],
            ..Default::default()
        };
        let scanner = MessageScanner::new(config).unwrap();

        let xml = r#"<m:special xmlns:m="http://docs.oasis-open.org/ns/cmis/messaging/200901"><m:direction>latest</m:direction></m:special>"#;
        assert!(!scanner.scan(xml.as_bytes()).unwrap().has_violations());

        let xml = r#"<m:other xmlns:m="http://docs.oasis-open.org/ns/cmis/messaging/200901"><m:direction>both</m:direction></m:other>"#;
        assert!(!scanner.scan(xml.as_bytes()).unwrap().has_violations());

        let xml = r#"<c:other xmlns:c="http://docs.oasis-open.org/ns/cmis/core/200901"><c:direction>nojoin</c:direction></c:other>"#;
        assert!(!scanner.scan(xml.as_bytes()).unwrap().has_violations());
    }

    #[test]
    fn test_doctype_rejected() {
        let xml = r#"<?xml version="1.0"?>
<!DOCTYPE foo [<!ENTITY xxe SYSTEM "file:///etc/passwd">]>
<m:q xmlns:m="http://docs.oasis-open.org/ns/cmis/messaging/200908/"/>"#;
        let err = scanner().scan(xml.as_bytes()).unwrap_err();
        assert_eq!(err.code, ViolationCode::DoctypeDetected);
    }

    #[test]
    fn test_malformed_and_oversized() {
        let err = scanner().scan(b"<a><b></a>").unwrap_err();
        assert_eq!(err.code, ViolationCode::InvalidXml);

        let err = scanner().scan(&[0x3c, 0xff, 0xfe]).unwrap_err();
        assert_eq!(err.code, ViolationCode::InvalidXml);

        let mut config = ScannerConfig::default();
        config.settings.max_body_size = 16;
        let err = MessageScanner::new(config)
            .unwrap()
            .scan(APPLY_ACL.as_bytes())
            .unwrap_err();
        assert_eq!(err.code, ViolationCode::BodyTooLarge);
    }

    #[test]
    fn test_bound_element_with_children_skipped() {
        let xml = r#"<m:q xmlns:m="http://docs.oasis-open.org/ns/cmis/messaging/200908/">
  <m:versioningState>
    <m:nested>major</m:nested>
  </m:versioningState>
</m:q>"#;
        let report = scanner().scan(xml.as_bytes()).unwrap();
        assert!(!report.has_violations(), "{:?}", report.violations);
        assert_eq!(report.fields_checked, 0);
    }

    #[test]
    fn test_unknown_binding_rejected_at_construction() {
        let config = ScannerConfig {
            bindings: vec![FieldBinding::new("x", SchemaVersion::V200908, "enumNope")],
            ..Default::default()
        };
        assert!(matches!(
            MessageScanner::new(config),
            Err(BindingError::UnknownVocabulary { .. })
        ));
    }
}
