//! # Error Handling
//!
//! Provides the unified `AppError` enum returned by every builder operation.

use crate::oas::registry::UniqueRoute;
use derive_more::{Display, From};

/// The Global Error Enum.
///
/// We use `derive_more` for boilerplate.
/// Only the encoder errors convert implicitly; every domain variant is built explicitly.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// A required input (path, method, parameter name, location, MIME type, status) was empty.
    #[from(ignore)]
    #[display("Missing required field: {_0}")]
    MissingRequiredField(String),

    /// The addressed (path, method) pair was never registered.
    #[from(ignore)]
    #[display("Route not found: {_0}")]
    ReferenceNotFound(UniqueRoute),

    /// The inference engine could not classify an example value.
    #[from(ignore)]
    #[display("Unsupported type: {_0}")]
    UnsupportedType(String),

    /// The method string is not one of the OpenAPI operation methods.
    #[from(ignore)]
    #[display("Unknown HTTP method '{_0}'")]
    UnknownMethod(String),

    /// The parameter location is not one of query, header, path or cookie.
    #[from(ignore)]
    #[display("Invalid parameter location '{_0}'")]
    InvalidLocation(String),

    /// The response status is neither `default`, a status code nor a status range.
    #[from(ignore)]
    #[display("Invalid response status '{_0}'")]
    InvalidStatus(String),

    /// A parameter with the same name already exists and the policy rejects duplicates.
    #[from(ignore)]
    #[display("Duplicate parameter '{name}' on {route}")]
    DuplicateParameter {
        /// The route carrying the existing parameter.
        route: UniqueRoute,
        /// The duplicated parameter name.
        name: String,
    },

    /// An external documentation URL failed to parse.
    #[display("Invalid URL: {_0}")]
    InvalidUrl(url::ParseError),

    /// JSON encoding or decoding failed.
    #[display("JSON Error: {_0}")]
    Json(serde_json::Error),

    /// YAML encoding or decoding failed.
    #[display("YAML Error: {_0}")]
    Yaml(serde_yaml::Error),

    /// A parsed document declares an OpenAPI version other than the one built here.
    #[from(ignore)]
    #[display("Unsupported OpenAPI version '{_0}'")]
    UnsupportedVersion(String),

    /// Builder configuration could not be loaded.
    #[from(ignore)]
    #[display("Config Error: {_0}")]
    Config(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oas::types::HttpMethod;

    #[test]
    fn test_json_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let app_err: AppError = json_err.into();
        assert!(matches!(app_err, AppError::Json(_)));
    }

    #[test]
    fn test_reference_not_found_display() {
        let route = UniqueRoute::new("/pets", HttpMethod::Get);
        let app_err = AppError::ReferenceNotFound(route);
        assert_eq!(format!("{}", app_err), "Route not found: get /pets");
    }

    #[test]
    fn test_duplicate_parameter_display() {
        let app_err = AppError::DuplicateParameter {
            route: UniqueRoute::new("/pets/{id}", HttpMethod::Delete),
            name: "id".into(),
        };
        assert_eq!(
            app_err.to_string(),
            "Duplicate parameter 'id' on delete /pets/{id}"
        );
    }

    #[test]
    fn test_unsupported_version_display() {
        let app_err = AppError::UnsupportedVersion("2.0".into());
        assert_eq!(app_err.to_string(), "Unsupported OpenAPI version '2.0'");
    }
}
