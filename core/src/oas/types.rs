#![deny(missing_docs)]

//! # Schema and Route Vocabulary
//!
//! Closed enumerations used throughout the document model. Every variant has a
//! canonical string rendering which is also its serialized form.

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Primitive schema types of OpenAPI 3.0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    /// A whole number.
    Integer,
    /// A floating point number.
    Number,
    /// A character string.
    String,
    /// `true` or `false`.
    Boolean,
    /// A keyed collection of named properties.
    Object,
    /// An ordered sequence of items.
    Array,
}

impl SchemaType {
    /// Returns the canonical OpenAPI spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaType::Integer => "integer",
            SchemaType::Number => "number",
            SchemaType::String => "string",
            SchemaType::Boolean => "boolean",
            SchemaType::Object => "object",
            SchemaType::Array => "array",
        }
    }
}

impl fmt::Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Format modifiers refining a primitive [`SchemaType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Format {
    /// Signed 32-bit integer.
    #[serde(rename = "int32")]
    Int32,
    /// Signed 64-bit integer.
    #[serde(rename = "int64")]
    Int64,
    /// Single precision float.
    #[serde(rename = "float")]
    Float,
    /// Double precision float.
    #[serde(rename = "double")]
    Double,
    /// Base64 encoded characters.
    #[serde(rename = "byte")]
    Byte,
    /// Any sequence of octets.
    #[serde(rename = "binary")]
    Binary,
    /// RFC 3339 `full-date`.
    #[serde(rename = "date")]
    Date,
    /// RFC 3339 `date-time`.
    #[serde(rename = "date-time")]
    DateTime,
    /// A hint to UIs to obscure input.
    #[serde(rename = "password")]
    Password,
}

impl Format {
    /// Returns the canonical OpenAPI spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Int32 => "int32",
            Format::Int64 => "int64",
            Format::Float => "float",
            Format::Double => "double",
            Format::Byte => "byte",
            Format::Binary => "binary",
            Format::Date => "date",
            Format::DateTime => "date-time",
            Format::Password => "password",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// HTTP methods that may carry an operation on a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HttpMethod {
    /// `GET`
    Get,
    /// `PUT`
    Put,
    /// `POST`
    Post,
    /// `DELETE`
    Delete,
    /// `OPTIONS`
    Options,
    /// `HEAD`
    Head,
    /// `PATCH`
    Patch,
    /// `TRACE`
    Trace,
}

impl HttpMethod {
    /// All methods in OpenAPI path item order.
    pub const ALL: [HttpMethod; 8] = [
        HttpMethod::Get,
        HttpMethod::Put,
        HttpMethod::Post,
        HttpMethod::Delete,
        HttpMethod::Options,
        HttpMethod::Head,
        HttpMethod::Patch,
        HttpMethod::Trace,
    ];

    /// Returns the lowercase method name used as the path item key.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Put => "put",
            HttpMethod::Post => "post",
            HttpMethod::Delete => "delete",
            HttpMethod::Options => "options",
            HttpMethod::Head => "head",
            HttpMethod::Patch => "patch",
            HttpMethod::Trace => "trace",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HttpMethod::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AppError::UnknownMethod(s.to_string()))
    }
}

/// Where a parameter is carried in the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamLocation {
    /// URL query string.
    Query,
    /// Request header.
    Header,
    /// Templated path segment.
    Path,
    /// Cookie value.
    Cookie,
}

impl ParamLocation {
    /// Returns the OpenAPI `in` value.
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamLocation::Query => "query",
            ParamLocation::Header => "header",
            ParamLocation::Path => "path",
            ParamLocation::Cookie => "cookie",
        }
    }
}

impl fmt::Display for ParamLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParamLocation {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "query" => Ok(ParamLocation::Query),
            "header" => Ok(ParamLocation::Header),
            "path" => Ok(ParamLocation::Path),
            "cookie" => Ok(ParamLocation::Cookie),
            _ => Err(AppError::InvalidLocation(s.to_string())),
        }
    }
}

/// A media type string keying request and response content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MimeType(String);

impl MimeType {
    /// `application/json`
    pub const JSON: &'static str = "application/json";
    /// `application/xml`
    pub const XML: &'static str = "application/xml";
    /// `text/plain`
    pub const TEXT: &'static str = "text/plain";
    /// `application/octet-stream`
    pub const OCTET_STREAM: &'static str = "application/octet-stream";
    /// `text/html`
    pub const HTML: &'static str = "text/html";
    /// `application/x-www-form-urlencoded`
    pub const FORM_URLENCODED: &'static str = "application/x-www-form-urlencoded";
    /// `application/javascript`
    pub const JAVASCRIPT: &'static str = "application/javascript";
    /// `multipart/form-data`
    pub const MULTIPART_FORM: &'static str = "multipart/form-data";

    /// Creates a media type from any string.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Shorthand for `application/json`.
    pub fn json() -> Self {
        Self::new(Self::JSON)
    }

    /// Returns the raw media type string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the media type string is empty.
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for MimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MimeType {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for MimeType {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_type_rendering_matches_serde() {
        let cases = vec![
            (SchemaType::Integer, "integer"),
            (SchemaType::Number, "number"),
            (SchemaType::String, "string"),
            (SchemaType::Boolean, "boolean"),
            (SchemaType::Object, "object"),
            (SchemaType::Array, "array"),
        ];

        for (ty, expected) in cases {
            assert_eq!(ty.to_string(), expected);
            assert_eq!(serde_json::to_value(ty).unwrap(), expected);
        }
    }

    #[test]
    fn test_format_rendering() {
        assert_eq!(Format::DateTime.to_string(), "date-time");
        assert_eq!(
            serde_json::to_value(Format::DateTime).unwrap(),
            "date-time"
        );
        assert_eq!(serde_json::to_value(Format::Int64).unwrap(), "int64");
    }

    #[test]
    fn test_method_parse_is_case_insensitive() {
        assert_eq!("GET".parse::<HttpMethod>().unwrap(), HttpMethod::Get);
        assert_eq!("patch".parse::<HttpMethod>().unwrap(), HttpMethod::Patch);
        assert!(matches!(
            "fetch".parse::<HttpMethod>(),
            Err(AppError::UnknownMethod(m)) if m == "fetch"
        ));
    }

    #[test]
    fn test_location_parse() {
        assert_eq!(
            "Header".parse::<ParamLocation>().unwrap(),
            ParamLocation::Header
        );
        assert!(matches!(
            "body".parse::<ParamLocation>(),
            Err(AppError::InvalidLocation(_))
        ));
    }

    #[test]
    fn test_mime_constants() {
        assert_eq!(MimeType::json().as_str(), "application/json");
        assert!(MimeType::new(" ").is_empty());
    }
}
