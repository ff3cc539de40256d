use super::Compiler;
use crate::EnumEncoding;

use quarry_core::query::{QueryGroup, Type, Value};

impl Compiler<'_> {
    /// Replaces enum values with their name or discriminant.
    ///
    /// Text columns bind the name and numeric columns the discriminant. When
    /// the column is unknown or of another type, the configured encoding
    /// applies.
    pub(super) fn encode_enums(&self, group: &mut QueryGroup) {
        let db_fields = self.db_fields;
        let fallback = self.options.enum_encoding;

        group.for_each_field_mut(&mut |field| {
            let encoding = db_fields
                .and_then(|db_fields| db_fields.get(&field.field.name))
                .and_then(|db_field| column_encoding(db_field.ty))
                .unwrap_or(fallback);

            encode(&mut field.parameter.value, encoding);
        });
    }
}

fn column_encoding(ty: Type) -> Option<EnumEncoding> {
    if ty.is_string() {
        Some(EnumEncoding::String)
    } else if ty.is_numeric() {
        Some(EnumEncoding::Number)
    } else {
        None
    }
}

fn encode(value: &mut Value, encoding: EnumEncoding) {
    match value {
        Value::Enum(variant) => {
            *value = match encoding {
                EnumEncoding::String => Value::String(variant.name.clone()),
                EnumEncoding::Number => Value::I64(variant.discriminant),
            };
        }
        Value::List(items) => {
            for item in items {
                encode(item, encoding);
            }
        }
        _ => {}
    }
}
