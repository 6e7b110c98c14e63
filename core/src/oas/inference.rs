#![deny(missing_docs)]

//! # Schema Inference
//!
//! Maps example values to schema fragments.
//!
//! The value kind is a closed enum (`Example`), so the mapping below is exhaustive:
//!
//! | kind      | type      | format   |
//! |-----------|-----------|----------|
//! | `String`  | `string`  |          |
//! | `Binary`  | `string`  | `byte`   |
//! | `Bool`    | `boolean` |          |
//! | `Int32`   | `integer` | `int32`  |
//! | `Int64`   | `integer` | `int64`  |
//! | `UInt64`  | `integer` | `int64`  |
//! | `Float`   | `number`  | `float`  |
//! | `Double`  | `number`  | `double` |
//! | `Array`   | `array`   | items from the first non-null element |
//! | `Object`  | `object`  | one property per field       |
//! | `Null`    | unsupported at the top level              |
//!
//! A `null` property or array element yields a `nullable` schema instead.

use crate::error::{AppError, AppResult};
use crate::oas::models::Schema;
use crate::oas::types::{Format, SchemaType};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Map, Number, Value};
use tracing::trace;

/// An example value whose kind drives schema inference.
#[derive(Debug, Clone, PartialEq)]
pub enum Example {
    /// Absence of a value.
    Null,
    /// A boolean.
    Bool(bool),
    /// A 32-bit integer.
    Int32(i32),
    /// A 64-bit integer.
    Int64(i64),
    /// An unsigned integer beyond the signed 64-bit range.
    UInt64(u64),
    /// A single precision float.
    Float(f32),
    /// A double precision float.
    Double(f64),
    /// A character string.
    String(String),
    /// Raw octets, rendered as base64.
    Binary(Vec<u8>),
    /// An ordered sequence.
    Array(Vec<Example>),
    /// Named fields in declaration order.
    Object(IndexMap<String, Example>),
}

impl Example {
    /// Converts any serializable value through its JSON form.
    ///
    /// Integer widths are recovered from magnitude, so a `u8` field becomes `int32`
    /// and an `i64` holding a small value does too.
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> AppResult<Self> {
        Ok(Example::from(serde_json::to_value(value)?))
    }

    /// A short name for the value kind, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Example::Null => "null",
            Example::Bool(_) => "bool",
            Example::Int32(_) => "int32",
            Example::Int64(_) => "int64",
            Example::UInt64(_) => "uint64",
            Example::Float(_) => "float",
            Example::Double(_) => "double",
            Example::String(_) => "string",
            Example::Binary(_) => "binary",
            Example::Array(_) => "array",
            Example::Object(_) => "object",
        }
    }

    /// Renders the example as JSON. Binary data becomes a base64 string and
    /// non-finite floats become `null`.
    pub fn to_json(&self) -> Value {
        match self {
            Example::Null => Value::Null,
            Example::Bool(b) => Value::Bool(*b),
            Example::Int32(i) => Value::from(*i),
            Example::Int64(i) => Value::from(*i),
            Example::UInt64(u) => Value::from(*u),
            // Through the shortest decimal form so 1.1f32 stays 1.1.
            Example::Float(f) => f
                .to_string()
                .parse::<f64>()
                .ok()
                .and_then(Number::from_f64)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            Example::Double(f) => Number::from_f64(*f)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            Example::String(s) => Value::String(s.clone()),
            Example::Binary(bytes) => Value::String(BASE64.encode(bytes)),
            Example::Array(items) => Value::Array(items.iter().map(Example::to_json).collect()),
            Example::Object(fields) => Value::Object(
                fields
                    .iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect::<Map<String, Value>>(),
            ),
        }
    }
}

impl From<Value> for Example {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Example::Null,
            Value::Bool(b) => Example::Bool(b),
            Value::Number(n) => number_example(&n),
            Value::String(s) => Example::String(s),
            Value::Array(items) => Example::Array(items.into_iter().map(Example::from).collect()),
            Value::Object(fields) => Example::Object(
                fields
                    .into_iter()
                    .map(|(k, v)| (k, Example::from(v)))
                    .collect(),
            ),
        }
    }
}

fn number_example(n: &Number) -> Example {
    if let Some(i) = n.as_i64() {
        return match i32::try_from(i) {
            Ok(small) => Example::Int32(small),
            Err(_) => Example::Int64(i),
        };
    }
    if let Some(u) = n.as_u64() {
        return Example::UInt64(u);
    }
    Example::Double(n.as_f64().unwrap_or_default())
}

macro_rules! example_from {
    ($variant:ident: $($ty:ty),+) => {
        $(
            impl From<$ty> for Example {
                fn from(v: $ty) -> Self {
                    Example::$variant(v.into())
                }
            }
        )+
    };
}

example_from!(Int32: i8, i16, i32, u8, u16);
example_from!(Int64: i64, u32);
example_from!(UInt64: u64);
example_from!(Double: f64);
example_from!(Float: f32);
example_from!(Bool: bool);
example_from!(String: String, &str, char);

impl<T: Into<Example>> From<Vec<T>> for Example {
    fn from(items: Vec<T>) -> Self {
        Example::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Example>> From<Option<T>> for Example {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Example::Null)
    }
}

impl<T: Into<Example>> From<IndexMap<String, T>> for Example {
    fn from(fields: IndexMap<String, T>) -> Self {
        Example::Object(fields.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

/// Infers the schema of `example`.
pub fn infer_schema(example: &Example) -> AppResult<Schema> {
    infer_schema_with_hint(example, None)
}

/// Infers the schema of `example`, typing the items of empty arrays with `item_hint`.
///
/// The hint only applies where no non-null element is available to inspect.
pub fn infer_schema_with_hint(
    example: &Example,
    item_hint: Option<SchemaType>,
) -> AppResult<Schema> {
    trace!(kind = example.kind_name(), "inferring schema");
    let schema = match example {
        Example::Null => {
            return Err(AppError::UnsupportedType(
                "null example carries no type".into(),
            ))
        }
        Example::Bool(_) => Schema::of(SchemaType::Boolean),
        Example::Int32(_) => Schema::formatted(SchemaType::Integer, Format::Int32),
        Example::Int64(_) | Example::UInt64(_) => {
            Schema::formatted(SchemaType::Integer, Format::Int64)
        }
        Example::Float(_) => Schema::formatted(SchemaType::Number, Format::Float),
        Example::Double(_) => Schema::formatted(SchemaType::Number, Format::Double),
        Example::String(_) => Schema::of(SchemaType::String),
        Example::Binary(_) => Schema::formatted(SchemaType::String, Format::Byte),
        Example::Array(items) => {
            let representative = items.iter().find(|item| **item != Example::Null);
            let mut item_schema = match (representative, item_hint) {
                (Some(first), _) => infer_schema_with_hint(first, item_hint)?,
                (None, Some(hint)) => hint_schema(hint),
                (None, None) if !items.is_empty() => Schema::default(),
                (None, None) => {
                    return Err(AppError::UnsupportedType(
                        "empty array example without an item type hint".into(),
                    ))
                }
            };
            if items.contains(&Example::Null) {
                item_schema.nullable = true;
            }
            Schema::array(item_schema)
        }
        Example::Object(fields) => {
            let mut properties = IndexMap::with_capacity(fields.len());
            for (name, value) in fields {
                if *value == Example::Null {
                    properties.insert(name.clone(), nullable_schema());
                    continue;
                }
                let property = infer_schema_with_hint(value, item_hint).map_err(|e| match e {
                    AppError::UnsupportedType(msg) => {
                        AppError::UnsupportedType(format!("property '{}': {}", name, msg))
                    }
                    other => other,
                })?;
                properties.insert(name.clone(), property);
            }
            Schema::object(properties)
        }
    };
    Ok(schema)
}

/// Schema for a `null` property: no type, `nullable` set.
fn nullable_schema() -> Schema {
    Schema {
        nullable: true,
        ..Schema::default()
    }
}

/// Schema for a bare type hint, with the widest format for numeric kinds.
fn hint_schema(hint: SchemaType) -> Schema {
    match hint {
        SchemaType::Integer => Schema::formatted(SchemaType::Integer, Format::Int64),
        SchemaType::Number => Schema::formatted(SchemaType::Number, Format::Double),
        other => Schema::of(other),
    }
}
