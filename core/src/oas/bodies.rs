#![deny(missing_docs)]

//! # Request / Response Builders
//!
//! Attach example-derived content to registered operations.
//!
//! Both builders upsert: responses merge by status and then by media type, the
//! request body merges by media type. Nothing already registered is dropped
//! except the exact entry being replaced.

use crate::error::{AppError, AppResult};
use crate::oas::inference::{infer_schema_with_hint, Example};
use crate::oas::models::{Document, MediaType, RequestBody, Schema};
use crate::oas::registry::UniqueRoute;
use crate::oas::types::{MimeType, SchemaType};
use regex::Regex;
use std::sync::OnceLock;
use tracing::{debug, warn};

/// Status key covering every response not declared explicitly.
pub const DEFAULT_STATUS: &str = "default";

/// Data for mapping a request or response body onto a route.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyObject {
    /// Media type of the content.
    pub mime_type: MimeType,
    /// HTTP status code (`"200"`, `"4XX"`) or `"default"`. Ignored for request bodies.
    pub status: String,
    /// Whether the body is a list of `body`.
    pub array: bool,
    /// Example payload used to infer the schema.
    pub body: Example,
    /// Description of the body.
    pub description: String,
    /// Title of the outermost schema.
    pub title: String,
    /// Item type for empty array examples.
    pub item_hint: Option<SchemaType>,
}

impl BodyObject {
    /// Creates a body description.
    pub fn new(
        mime_type: impl Into<MimeType>,
        status: impl Into<String>,
        description: impl Into<String>,
        array: bool,
        body: impl Into<Example>,
    ) -> Self {
        Self {
            mime_type: mime_type.into(),
            status: status.into(),
            array,
            body: body.into(),
            description: description.into(),
            title: String::new(),
            item_hint: None,
        }
    }

    /// Sets the schema title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the item type used when the example is an empty array.
    pub fn with_item_hint(mut self, hint: SchemaType) -> Self {
        self.item_hint = Some(hint);
        self
    }

    fn media(&self, emit_example: bool) -> AppResult<MediaType> {
        if self.mime_type.is_empty() {
            return Err(AppError::MissingRequiredField("mime type".into()));
        }
        let mut schema = infer_schema_with_hint(&self.body, self.item_hint)?;
        if self.array && schema.schema_type != Some(SchemaType::Array) {
            schema = Schema::array(schema);
        }
        schema.title = self.title.clone();
        schema.description = self.description.clone();

        let example = if emit_example {
            Some(self.body.to_json())
        } else {
            None
        };
        Ok(MediaType { schema, example })
    }
}

fn status_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(default|[1-5][0-9]{2}|[1-5][xX]{2})$").expect("Invalid regex")
    })
}

fn validate_status(status: &str) -> AppResult<()> {
    if status.is_empty() {
        return Err(AppError::MissingRequiredField("response status".into()));
    }
    if !status_pattern().is_match(status) {
        return Err(AppError::InvalidStatus(status.to_string()));
    }
    Ok(())
}

impl Document {
    /// Upserts a response on the operation at `route`.
    ///
    /// The entry for `body.status` is created if absent; within it the media entry
    /// for `body.mime_type` is inserted or replaced. Other statuses and media types
    /// are left as they are.
    pub fn add_response(&mut self, route: &UniqueRoute, body: BodyObject) -> AppResult<()> {
        validate_status(&body.status)?;
        let media = body.media(self.config.emit_examples)?;
        let op = self.operation_mut(route)?;

        let response = op
            .responses
            .entry(body.status.clone())
            .or_default();
        if !body.description.is_empty() || response.description.is_empty() {
            response.description = body.description;
        }
        if response.content.insert(body.mime_type.clone(), media).is_some() {
            warn!(
                route = %route,
                status = %body.status,
                mime = %body.mime_type,
                "replaced response content"
            );
        } else {
            debug!(
                route = %route,
                status = %body.status,
                mime = %body.mime_type,
                "added response content"
            );
        }
        Ok(())
    }

    /// Upserts request body content on the operation at `route`.
    ///
    /// Same contract as [`Document::add_response`] without the status level:
    /// content merges by media type across calls.
    pub fn add_request_body(&mut self, route: &UniqueRoute, body: BodyObject) -> AppResult<()> {
        let media = body.media(self.config.emit_examples)?;
        let op = self.operation_mut(route)?;

        let request = op.request_body.get_or_insert_with(|| RequestBody {
            required: true,
            ..RequestBody::default()
        });
        if !body.description.is_empty() {
            request.description = body.description;
        }
        if request.content.insert(body.mime_type.clone(), media).is_some() {
            warn!(route = %route, mime = %body.mime_type, "replaced request content");
        } else {
            debug!(route = %route, mime = %body.mime_type, "added request content");
        }
        Ok(())
    }
}
