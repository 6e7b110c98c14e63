#![deny(missing_docs)]

//! # OAS Builder
//!
//! Builds an OpenAPI 3.0.3 document incrementally from route registrations.
//!
//! ```
//! use oas_builder::{BodyObject, Document, MimeType, RouteParam};
//!
//! let mut doc = Document::new("Pet Store", "1.0.0", "Pets and their owners");
//! let route = doc.add_route("/pets/{id}", "get", "pets", "Fetch a pet", "Get pet")?;
//! doc.add_param(&route, RouteParam::new("id", "path").with_example(7i64))?;
//! doc.add_response(
//!     &route,
//!     BodyObject::new(MimeType::JSON, "200", "The pet", false, serde_json::json!({ "id": 7 })),
//! )?;
//! let json = doc.seal().to_json()?;
//! assert!(json.contains("\"operationId\":\"get_/pets/{id}\""));
//! # Ok::<(), oas_builder::AppError>(())
//! ```

/// Shared error types.
pub mod error;

/// Builder policies.
pub mod config;

/// OpenAPI document model and builders.
pub mod oas;

pub use config::{BuilderConfig, ParamPolicy, TagPolicy, DEFAULT_TAG};
pub use error::{AppError, AppResult};
pub use oas::{
    infer_schema, infer_schema_with_hint, BodyObject, Document, Example, ExternalDocs, Format,
    HttpMethod, Info, MediaType, MimeType, Operation, ParamLocation, Parameter, RequestBody,
    Response, RouteParam, RouteSummary, Schema, SchemaType, SealedDocument, Tag, UniqueRoute,
    DEFAULT_STATUS, OPENAPI_VERSION,
};
