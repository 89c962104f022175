//! Validation schema descriptors
//!
//! A [`Schema`] describes the shape of structured model output or of function
//! call parameters. It is a subset of the OpenAPI 3.0 schema object.

use std::collections::BTreeMap;

open_enum! {
    /// Data type of a schema node
    pub enum SchemaType {
        /// Not specified, should not be used
        Unspecified => "TYPE_UNSPECIFIED",
        /// String type
        String => "STRING",
        /// Number type
        Number => "NUMBER",
        /// Integer type
        Integer => "INTEGER",
        /// Boolean type
        Boolean => "BOOLEAN",
        /// Array type
        Array => "ARRAY",
        /// Object type
        Object => "OBJECT",
        /// Null type
        Null => "NULL",
    }
}

/// Validation schema descriptor
///
/// Length, item-count and property-count bounds are 64-bit integers and travel
/// as quoted strings; `maximum`/`minimum` are plain JSON numbers. Every bound
/// is optional: `None` is omitted on the wire, never sent as zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    /// The value must validate against any one of these subschemas
    pub any_of: Vec<Schema>,
    /// Default value of the data
    pub default: Option<serde_json::Value>,
    /// Description of the data
    pub description: String,
    /// Possible values for primitive types with enum format
    pub enum_values: Vec<String>,
    /// Example of the object
    pub example: Option<serde_json::Value>,
    /// Format of the data, e.g. `int32`, `date-time`
    pub format: String,
    /// Schema of the elements when `schema_type` is `ARRAY`
    pub items: Option<Box<Schema>>,
    /// Maximum number of elements for `ARRAY`
    pub max_items: Option<i64>,
    /// Maximum length for `STRING`
    pub max_length: Option<i64>,
    /// Maximum number of properties for `OBJECT`
    pub max_properties: Option<i64>,
    /// Maximum value for `INTEGER` and `NUMBER`
    pub maximum: Option<f64>,
    /// Minimum number of elements for `ARRAY`
    pub min_items: Option<i64>,
    /// Minimum length for `STRING`
    pub min_length: Option<i64>,
    /// Minimum number of properties for `OBJECT`
    pub min_properties: Option<i64>,
    /// Minimum value for `INTEGER` and `NUMBER`
    pub minimum: Option<f64>,
    /// Whether the value may be null
    pub nullable: Option<bool>,
    /// Pattern a `STRING` value must match
    pub pattern: String,
    /// Properties of an `OBJECT`
    pub properties: BTreeMap<String, Schema>,
    /// Order in which properties should be generated
    pub property_ordering: Vec<String>,
    /// Required properties of an `OBJECT`
    pub required: Vec<String>,
    /// Title of the schema
    pub title: String,
    /// Data type
    pub schema_type: Option<SchemaType>,
}

impl Schema {
    /// Schema for a single value of the given type
    pub fn of_type(schema_type: SchemaType) -> Self {
        Schema {
            schema_type: Some(schema_type),
            ..Default::default()
        }
    }

    /// Array schema whose elements follow `items`
    pub fn array_of(items: Schema) -> Self {
        Schema {
            schema_type: Some(SchemaType::Array),
            items: Some(Box::new(items)),
            ..Default::default()
        }
    }

    /// Add a property to an object schema
    pub fn with_property(mut self, name: impl Into<String>, schema: Schema) -> Self {
        self.properties.insert(name.into(), schema);
        self
    }
}
