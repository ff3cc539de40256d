use quarry_core::query::Type;

/// The type a column is cast to when compared with a value of type `ty`.
pub(super) fn cast_type(ty: Type) -> Option<&'static str> {
    Some(match ty {
        Type::Bool => "BOOLEAN",
        Type::I16 => "SMALLINT",
        Type::I32 => "INTEGER",
        Type::I64 => "BIGINT",
        Type::F32 => "REAL",
        Type::F64 => "DOUBLE PRECISION",
        Type::Decimal => "NUMERIC",
        Type::String => "TEXT",
        Type::Bytes => "BYTEA",
        Type::Uuid => "UUID",
        Type::Date => "DATE",
        Type::Time => "TIME",
        Type::DateTime => "TIMESTAMP",
        Type::Enum | Type::Unknown => return None,
    })
}
