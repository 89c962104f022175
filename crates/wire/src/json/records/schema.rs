use crate::json::{DecodeError, EncodeError, ObjectDecoder, ObjectEncoder, WireRecord};
use genai_core::{Schema, SchemaType};

impl WireRecord for Schema {
    const NAME: &'static str = "Schema";
    const KEY_ORDER: &'static [&'static str] = &[
        "anyOf",
        "default",
        "description",
        "enum",
        "example",
        "format",
        "items",
        "maxItems",
        "maxLength",
        "maxProperties",
        "maximum",
        "minItems",
        "minLength",
        "minProperties",
        "minimum",
        "nullable",
        "pattern",
        "properties",
        "propertyOrdering",
        "required",
        "title",
        "type",
    ];

    fn write_fields(&self, out: &mut ObjectEncoder) -> Result<(), EncodeError> {
        out.record_list("anyOf", &self.any_of)?;
        out.json_value("default", self.default.as_ref())?;
        out.string("description", &self.description)?;
        out.string_list("enum", &self.enum_values)?;
        out.json_value("example", self.example.as_ref())?;
        out.string("format", &self.format)?;
        out.record("items", self.items.as_deref())?;
        out.opt_big_int("maxItems", self.max_items)?;
        out.opt_big_int("maxLength", self.max_length)?;
        out.opt_big_int("maxProperties", self.max_properties)?;
        out.float("maximum", self.maximum)?;
        out.opt_big_int("minItems", self.min_items)?;
        out.opt_big_int("minLength", self.min_length)?;
        out.opt_big_int("minProperties", self.min_properties)?;
        out.float("minimum", self.minimum)?;
        out.bool("nullable", self.nullable)?;
        out.string("pattern", &self.pattern)?;
        out.record_map("properties", &self.properties)?;
        out.string_list("propertyOrdering", &self.property_ordering)?;
        out.string_list("required", &self.required)?;
        out.string("title", &self.title)?;
        out.enum_value("type", self.schema_type.as_ref().map(SchemaType::as_str))?;
        Ok(())
    }

    fn read_fields(obj: &ObjectDecoder<'_>) -> Result<Self, DecodeError> {
        Ok(Schema {
            any_of: obj.record_list("anyOf")?,
            default: obj.json_value("default")?,
            description: obj.string("description")?,
            enum_values: obj.string_list("enum")?,
            example: obj.json_value("example")?,
            format: obj.string("format")?,
            items: obj.record::<Schema>("items")?.map(Box::new),
            max_items: obj.opt_big_int("maxItems")?,
            max_length: obj.opt_big_int("maxLength")?,
            max_properties: obj.opt_big_int("maxProperties")?,
            maximum: obj.opt_float("maximum")?,
            min_items: obj.opt_big_int("minItems")?,
            min_length: obj.opt_big_int("minLength")?,
            min_properties: obj.opt_big_int("minProperties")?,
            minimum: obj.opt_float("minimum")?,
            nullable: obj.opt_bool("nullable")?,
            pattern: obj.string("pattern")?,
            properties: obj.record_map("properties")?,
            property_ordering: obj.string_list("propertyOrdering")?,
            required: obj.string_list("required")?,
            title: obj.string("title")?,
            schema_type: obj.enum_value("type")?,
        })
    }
}
