#![deny(missing_docs)]

//! # Parameter Builder
//!
//! Attaches parameters to registered operations.

use crate::config::ParamPolicy;
use crate::error::{AppError, AppResult};
use crate::oas::inference::{infer_schema, Example};
use crate::oas::models::{Document, Parameter};
use crate::oas::registry::UniqueRoute;
use crate::oas::types::ParamLocation;
use tracing::{debug, warn};

/// Caller-facing description of a parameter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteParam {
    /// Unique name on the operation.
    pub name: String,
    /// A brief description of the parameter.
    pub description: String,
    /// Whether the parameter is mandatory. Always true for path parameters.
    pub required: bool,
    /// One of `query`, `header`, `path` or `cookie`.
    pub location: String,
    /// Example value; when given, the parameter schema is inferred from it.
    pub example: Option<Example>,
}

impl RouteParam {
    /// Creates a parameter with a name and location.
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            ..Self::default()
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Marks the parameter as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets the example value.
    pub fn with_example(mut self, example: impl Into<Example>) -> Self {
        self.example = Some(example.into());
        self
    }

    fn into_parameter(self, emit_example: bool) -> AppResult<Parameter> {
        let location: ParamLocation = self.location.parse()?;
        let schema = self.example.as_ref().map(infer_schema).transpose()?;
        let example = if emit_example {
            self.example.as_ref().map(Example::to_json)
        } else {
            None
        };
        Ok(Parameter {
            name: self.name,
            description: self.description,
            location,
            required: self.required || location == ParamLocation::Path,
            schema,
            example,
        })
    }
}

impl Document {
    /// Adds a parameter to the operation at `route`.
    ///
    /// The input is fully validated before the operation is touched. A name
    /// already present on the operation is handled by the configured
    /// [`ParamPolicy`].
    pub fn add_param(&mut self, route: &UniqueRoute, param: RouteParam) -> AppResult<()> {
        if param.name.is_empty() || param.location.is_empty() {
            return Err(AppError::MissingRequiredField(
                "param name and location are required to add param".into(),
            ));
        }
        let policy = self.config.param_policy;
        let parameter = param.into_parameter(self.config.emit_examples)?;
        let op = self.operation_mut(route)?;

        let existing = op.parameters.iter().position(|p| p.name == parameter.name);
        match (existing, policy) {
            (Some(_), ParamPolicy::Reject) => {
                return Err(AppError::DuplicateParameter {
                    route: route.clone(),
                    name: parameter.name,
                });
            }
            (Some(idx), ParamPolicy::Replace) => {
                warn!(route = %route, name = %parameter.name, "replacing parameter");
                op.parameters[idx] = parameter;
            }
            _ => {
                debug!(route = %route, name = %parameter.name, "added parameter");
                op.parameters.push(parameter);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BuilderConfig;
    use crate::oas::types::{Format, HttpMethod, SchemaType};

    fn doc_with_route(config: BuilderConfig) -> (Document, UniqueRoute) {
        let mut doc = Document::with_config("T", "1.0", "d", config);
        let route = doc.add_route("/pets/{id}", "get", "pets", "", "").unwrap();
        (doc, route)
    }

    #[test]
    fn test_add_param_copies_fields() {
        let (mut doc, route) = doc_with_route(BuilderConfig::default());
        doc.add_param(
            &route,
            RouteParam::new("limit", "query").with_description("page size"),
        )
        .unwrap();

        let params = &doc.operation(&route).unwrap().parameters;
        assert_eq!(params.len(), 1);
        assert_eq!(params[0].name, "limit");
        assert_eq!(params[0].description, "page size");
        assert_eq!(params[0].location, ParamLocation::Query);
        assert!(!params[0].required);
        assert!(params[0].schema.is_none());
    }

    #[test]
    fn test_path_params_are_required() {
        let (mut doc, route) = doc_with_route(BuilderConfig::default());
        doc.add_param(&route, RouteParam::new("id", "path").with_example(42i64))
            .unwrap();

        let param = &doc.operation(&route).unwrap().parameters[0];
        assert!(param.required);
        let schema = param.schema.as_ref().unwrap();
        assert_eq!(schema.schema_type, Some(SchemaType::Integer));
        assert_eq!(schema.format, Some(Format::Int64));
        assert!(param.example.is_none());
    }

    #[test]
    fn test_missing_fields() {
        let (mut doc, route) = doc_with_route(BuilderConfig::default());
        assert!(matches!(
            doc.add_param(&route, RouteParam::new("", "query")),
            Err(AppError::MissingRequiredField(_))
        ));
        assert!(matches!(
            doc.add_param(&route, RouteParam::new("id", "")),
            Err(AppError::MissingRequiredField(_))
        ));
        assert!(matches!(
            doc.add_param(&route, RouteParam::new("id", "body")),
            Err(AppError::InvalidLocation(_))
        ));
        assert!(doc.operation(&route).unwrap().parameters.is_empty());
    }

    #[test]
    fn test_unregistered_route_is_not_mutated() {
        let (mut doc, _) = doc_with_route(BuilderConfig::default());
        let before = doc.clone();

        let wrong_method = UniqueRoute::new("/pets/{id}", HttpMethod::Delete);
        let wrong_path = UniqueRoute::new("/owners", HttpMethod::Get);
        for route in [wrong_method, wrong_path] {
            assert!(matches!(
                doc.add_param(&route, RouteParam::new("id", "path")),
                Err(AppError::ReferenceNotFound(_))
            ));
        }
        assert_eq!(doc, before);
    }

    #[test]
    fn test_duplicate_replaces_by_default() {
        let (mut doc, route) = doc_with_route(BuilderConfig::default());
        doc.add_param(&route, RouteParam::new("q", "query")).unwrap();
        doc.add_param(&route, RouteParam::new("x", "header")).unwrap();
        doc.add_param(&route, RouteParam::new("q", "query").with_description("second"))
            .unwrap();

        let params = &doc.operation(&route).unwrap().parameters;
        assert_eq!(params.len(), 2);
        assert_eq!(params[0].name, "q");
        assert_eq!(params[0].description, "second");
    }

    #[test]
    fn test_duplicate_rejected_when_configured() {
        let (mut doc, route) = doc_with_route(BuilderConfig {
            param_policy: ParamPolicy::Reject,
            ..BuilderConfig::default()
        });
        doc.add_param(&route, RouteParam::new("q", "query")).unwrap();
        let err = doc
            .add_param(&route, RouteParam::new("q", "query"))
            .unwrap_err();
        assert!(matches!(err, AppError::DuplicateParameter { name, .. } if name == "q"));
        assert_eq!(doc.operation(&route).unwrap().parameters.len(), 1);
    }

    #[test]
    fn test_duplicate_appended_when_configured() {
        let (mut doc, route) = doc_with_route(BuilderConfig {
            param_policy: ParamPolicy::Append,
            ..BuilderConfig::default()
        });
        doc.add_param(&route, RouteParam::new("q", "query")).unwrap();
        doc.add_param(&route, RouteParam::new("q", "query")).unwrap();
        assert_eq!(doc.operation(&route).unwrap().parameters.len(), 2);
    }

    #[test]
    fn test_examples_emitted_when_configured() {
        let (mut doc, route) = doc_with_route(BuilderConfig {
            emit_examples: true,
            ..BuilderConfig::default()
        });
        doc.add_param(&route, RouteParam::new("q", "query").with_example("cats"))
            .unwrap();
        let param = &doc.operation(&route).unwrap().parameters[0];
        assert_eq!(param.example, Some(serde_json::json!("cats")));
    }

    #[test]
    fn test_null_example_is_unsupported() {
        let (mut doc, route) = doc_with_route(BuilderConfig::default());
        let param = RouteParam::new("q", "query").with_example(Example::Null);
        assert!(matches!(
            doc.add_param(&route, param),
            Err(AppError::UnsupportedType(_))
        ));
    }
}
