#![deny(missing_docs)]

//! # Output
//!
//! Serialization of a document and the seal step that ends a build session.
//!
//! A [`Document`] can be serialized at any point while it is being built.
//! [`Document::seal`] consumes the builder and returns a [`SealedDocument`], an
//! immutable snapshot that is cheap to clone and safe to share across threads.

use crate::error::{AppError, AppResult};
use crate::oas::models::{Document, OPENAPI_VERSION};
use std::ops::Deref;
use std::sync::Arc;
use tracing::debug;

impl Document {
    /// Compact JSON encoding.
    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Indented JSON encoding.
    pub fn to_json_pretty(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// YAML encoding.
    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Parses a JSON document produced by [`Document::to_json`].
    ///
    /// The parsed document uses the default builder policy. Documents declaring
    /// another OpenAPI version, or holding an empty path key, are rejected.
    pub fn from_json(json: &str) -> AppResult<Self> {
        let doc: Document = serde_json::from_str(json)?;
        if doc.openapi != OPENAPI_VERSION {
            return Err(AppError::UnsupportedVersion(doc.openapi));
        }
        if doc.paths.keys().any(|path| path.is_empty()) {
            return Err(AppError::MissingRequiredField("path".into()));
        }
        Ok(doc)
    }

    /// Ends the build session.
    pub fn seal(self) -> SealedDocument {
        debug!(
            title = %self.info.title,
            paths = self.paths.len(),
            "sealed document"
        );
        SealedDocument(Arc::new(self))
    }
}

/// A finished, read-only document.
#[derive(Debug, Clone, PartialEq)]
pub struct SealedDocument(Arc<Document>);

impl SealedDocument {
    /// Returns an owned, editable copy of the document.
    pub fn to_document(&self) -> Document {
        Document::clone(&self.0)
    }
}

impl Deref for SealedDocument {
    type Target = Document;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<Document> for SealedDocument {
    fn as_ref(&self) -> &Document {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oas::bodies::BodyObject;
    use crate::oas::types::MimeType;
    use std::thread;

    fn built() -> Document {
        let mut doc = Document::new("Pets", "1.0", "Pet store");
        let route = doc.add_route("/pets", "get", "pets", "list", "").unwrap();
        doc.add_response(&route, BodyObject::new(MimeType::JSON, "200", "ok", false, "x"))
            .unwrap();
        doc
    }

    #[test]
    fn test_serialize_mid_construction() {
        let mut doc = Document::new("Pets", "1.0", "");
        let empty: serde_json::Value = serde_json::from_str(&doc.to_json().unwrap()).unwrap();
        assert_eq!(empty["paths"], serde_json::json!({}));

        doc.add_route("/pets", "get", "", "", "").unwrap();
        let value: serde_json::Value = serde_json::from_str(&doc.to_json().unwrap()).unwrap();
        assert_eq!(value["paths"]["/pets"]["get"]["operationId"], "get_/pets");
        assert_eq!(value["paths"]["/pets"]["get"]["responses"], serde_json::json!({}));
    }

    #[test]
    fn test_json_round_trip() {
        let doc = built();
        let parsed = Document::from_json(&doc.to_json_pretty().unwrap()).unwrap();
        assert_eq!(parsed, doc);
    }

    #[test]
    fn test_from_json_rejects_other_versions() {
        let json = r#"{"openapi":"2.0","info":{"title":"T","version":"1"},"paths":{}}"#;
        match Document::from_json(json) {
            Err(AppError::UnsupportedVersion(v)) => assert_eq!(v, "2.0"),
            other => panic!("expected UnsupportedVersion, got {:?}", other),
        }
    }

    #[test]
    fn test_from_json_rejects_empty_path() {
        let json = r#"{"openapi":"3.0.3","info":{"title":"T","version":"1"},"paths":{"":{"get":{}}}}"#;
        assert!(matches!(
            Document::from_json(json),
            Err(AppError::MissingRequiredField(_))
        ));
    }

    #[test]
    fn test_yaml_output() {
        let doc = built();
        let yaml = doc.to_yaml().unwrap();
        assert!(yaml.contains("/pets:"));
        let parsed: Document = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, doc);
    }

    #[test]
    fn test_sealed_document_is_shareable() {
        let sealed = built().seal();
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let shared = sealed.clone();
                thread::spawn(move || shared.to_json().unwrap())
            })
            .collect();

        let expected = sealed.to_json().unwrap();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    }

    #[test]
    fn test_to_document_reopens_a_copy() {
        let sealed = built().seal();
        let mut reopened = sealed.to_document();
        reopened.add_route("/owners", "get", "", "", "").unwrap();
        assert_eq!(sealed.paths().len(), 1);
        assert_eq!(reopened.paths().len(), 2);
    }
}
