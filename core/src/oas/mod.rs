#![deny(missing_docs)]

//! # OpenAPI Document Module
//!
//! - **types**: Closed vocabularies (schema types, formats, methods, locations).
//! - **models**: The document tree.
//! - **inference**: Example value to schema mapping.
//! - **registry**: Route registration and lookup.
//! - **params**: Parameter builder.
//! - **bodies**: Request and response body builders.
//! - **output**: Serialization and sealing.

pub mod bodies;
pub mod inference;
pub mod models;
pub mod output;
pub mod params;
pub mod registry;
pub mod types;

pub use bodies::{BodyObject, DEFAULT_STATUS};
pub use inference::{infer_schema, infer_schema_with_hint, Example};
pub use models::{
    Document, ExternalDocs, Info, MediaType, Operation, Parameter, RequestBody, Response, Schema,
    Tag, OPENAPI_VERSION,
};
pub use output::SealedDocument;
pub use params::RouteParam;
pub use registry::{RouteSummary, UniqueRoute};
pub use types::{Format, HttpMethod, MimeType, ParamLocation, SchemaType};
