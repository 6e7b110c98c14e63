#![deny(missing_docs)]

//! # Document Model
//!
//! Plain-data OpenAPI 3.0.3 tree: info, tags, paths and external docs.
//! Field names serialize to their OpenAPI spelling. Maps keep insertion order
//! so repeated builds produce byte-identical output.

use crate::config::BuilderConfig;
use crate::error::AppResult;
use crate::oas::types::{Format, HttpMethod, MimeType, ParamLocation, SchemaType};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use url::Url;

/// The OpenAPI version emitted by every document.
pub const OPENAPI_VERSION: &str = "3.0.3";

/// Path string to the operations registered on it.
pub type Paths = IndexMap<String, PathItem>;

/// Operations keyed by HTTP method.
pub type PathItem = IndexMap<HttpMethod, Operation>;

/// Status code (or `default`) to response.
pub type Responses = IndexMap<String, Response>;

/// Media type to content entry.
pub type Content = IndexMap<MimeType, MediaType>;

/// The root of an OpenAPI document under construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub(crate) openapi: String,
    pub(crate) info: Info,
    #[serde(default)]
    pub(crate) tags: Vec<Tag>,
    #[serde(default)]
    pub(crate) paths: Paths,
    #[serde(
        rename = "externalDocs",
        default,
        skip_serializing_if = "ExternalDocs::is_empty"
    )]
    pub(crate) external_docs: ExternalDocs,
    #[serde(skip)]
    pub(crate) config: BuilderConfig,
}

/// Document-level metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Info {
    /// The title of the API.
    pub title: String,
    /// The version of the API (not the OpenAPI version).
    pub version: String,
    /// A description of the API.
    #[serde(default)]
    pub description: String,
}

/// A grouping label with its description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Tag name referenced by operations.
    pub name: String,
    /// Tag description.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

impl Tag {
    /// Creates a tag.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Link to documentation hosted elsewhere.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalDocs {
    /// Target URL. Empty until set.
    #[serde(default)]
    pub url: String,
    /// Optional description.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

impl ExternalDocs {
    /// True while no URL has been set.
    pub fn is_empty(&self) -> bool {
        self.url.is_empty()
    }
}

/// One HTTP method on one path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    /// Derived identifier, `method + "_" + path`.
    #[serde(default)]
    pub operation_id: String,
    /// Short summary.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub summary: String,
    /// Long description.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Grouping tags.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Parameters in registration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
    /// Request body, once one has been added.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_body: Option<RequestBody>,
    /// Responses keyed by status.
    #[serde(default)]
    pub responses: Responses,
}

/// A stored operation parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter name.
    pub name: String,
    /// Parameter description.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Location of the parameter.
    #[serde(rename = "in")]
    pub location: ParamLocation,
    /// Whether the parameter is mandatory.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
    /// Schema inferred from the registered example.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<Schema>,
    /// The registered example.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<serde_json::Value>,
}

/// A request body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestBody {
    /// Description of the body.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Content keyed by media type.
    #[serde(default)]
    pub content: Content,
    /// Whether the body is mandatory.
    #[serde(default)]
    pub required: bool,
}

/// A single response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// Description of the response.
    #[serde(default)]
    pub description: String,
    /// Content keyed by media type.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub content: Content,
}

/// A content entry wrapping a schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaType {
    /// Shape of the content.
    pub schema: Schema,
    /// Example payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<serde_json::Value>,
}

/// A structural description of a data shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    /// Schema title.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    /// Schema description.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Primitive type.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<SchemaType>,
    /// Format modifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<Format>,
    /// Item schema for arrays.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,
    /// Property schemas for objects.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub properties: IndexMap<String, Schema>,
    /// Whether `null` is accepted in addition to the type.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub nullable: bool,
}

impl Schema {
    /// A schema of the given type without format.
    pub fn of(schema_type: SchemaType) -> Self {
        Self {
            schema_type: Some(schema_type),
            ..Self::default()
        }
    }

    /// A schema of the given type and format.
    pub fn formatted(schema_type: SchemaType, format: Format) -> Self {
        Self {
            schema_type: Some(schema_type),
            format: Some(format),
            ..Self::default()
        }
    }

    /// An array schema over `items`.
    pub fn array(items: Schema) -> Self {
        Self {
            schema_type: Some(SchemaType::Array),
            items: Some(Box::new(items)),
            ..Self::default()
        }
    }

    /// An object schema with the given properties.
    pub fn object(properties: IndexMap<String, Schema>) -> Self {
        Self {
            schema_type: Some(SchemaType::Object),
            properties,
            ..Self::default()
        }
    }
}

impl Document {
    /// Creates an empty document with the default builder policy.
    pub fn new(
        title: impl Into<String>,
        version: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self::with_config(title, version, description, BuilderConfig::default())
    }

    /// Creates an empty document with an explicit builder policy.
    pub fn with_config(
        title: impl Into<String>,
        version: impl Into<String>,
        description: impl Into<String>,
        config: BuilderConfig,
    ) -> Self {
        Self {
            openapi: OPENAPI_VERSION.to_string(),
            info: Info {
                title: title.into(),
                version: version.into(),
                description: description.into(),
            },
            tags: Vec::new(),
            paths: Paths::new(),
            external_docs: ExternalDocs::default(),
            config,
        }
    }

    /// The OpenAPI version of the document, always [`OPENAPI_VERSION`].
    pub fn openapi_version(&self) -> &str {
        &self.openapi
    }

    /// Document metadata.
    pub fn info(&self) -> &Info {
        &self.info
    }

    /// Document-level tags in insertion order.
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// All registered paths.
    pub fn paths(&self) -> &Paths {
        &self.paths
    }

    /// External documentation block.
    pub fn external_docs(&self) -> &ExternalDocs {
        &self.external_docs
    }

    /// The builder policy in effect.
    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Sets the external documentation link. The URL must be absolute.
    pub fn set_external_docs(
        &mut self,
        url: &str,
        description: impl Into<String>,
    ) -> AppResult<()> {
        let parsed = Url::parse(url)?;
        self.external_docs = ExternalDocs {
            url: parsed.to_string(),
            description: description.into(),
        };
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[test]
    fn test_new_fixes_openapi_version() {
        let doc = Document::new("T", "1.0", "d");
        assert_eq!(doc.openapi_version(), "3.0.3");
        assert_eq!(doc.info().version, "1.0");
        assert!(doc.tags().is_empty());
        assert!(doc.paths().is_empty());
        assert!(doc.external_docs().is_empty());
    }

    #[test]
    fn test_new_accepts_empty_strings() {
        let doc = Document::new("", "", "");
        assert_eq!(doc.openapi_version(), OPENAPI_VERSION);
        assert_eq!(doc.info(), &Info::default());
    }

    #[test]
    fn test_empty_external_docs_are_omitted() {
        let doc = Document::new("T", "1.0", "d");
        let value = serde_json::to_value(&doc).unwrap();
        assert!(value.get("externalDocs").is_none());
        assert_eq!(value["openapi"], "3.0.3");
        assert_eq!(value["info"]["title"], "T");
    }

    #[test]
    fn test_set_external_docs() {
        let mut doc = Document::new("T", "1.0", "d");
        doc.set_external_docs("https://example.com/docs", "More")
            .unwrap();
        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(value["externalDocs"]["url"], "https://example.com/docs");
        assert_eq!(value["externalDocs"]["description"], "More");

        let err = doc.set_external_docs("not a url", "").unwrap_err();
        assert!(matches!(err, AppError::InvalidUrl(_)));
        assert_eq!(doc.external_docs().url, "https://example.com/docs");
    }

    #[test]
    fn test_schema_serializes_openapi_names() {
        let schema = Schema::array(Schema::formatted(SchemaType::Integer, Format::Int64));
        let value = serde_json::to_value(&schema).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "type": "array",
                "items": { "type": "integer", "format": "int64" }
            })
        );
    }
}
