//! Maps catalog type names to host types.

use quarry_core::{query::Type, Dialect};

pub(super) fn resolve(dialect: Dialect, native_type: &str) -> Type {
    let name = base_name(native_type);

    match dialect {
        Dialect::SqlServer => sql_server(&name),
        Dialect::PostgreSql => postgresql(&name),
        Dialect::MySql => mysql(&name),
        Dialect::Sqlite => sqlite(&name),
    }
}

/// Lower-cased type name without its arguments: `VARCHAR(50)` is `varchar`.
fn base_name(native_type: &str) -> String {
    let name = match native_type.find('(') {
        Some(index) => &native_type[..index],
        None => native_type,
    };

    name.trim().to_lowercase()
}

/// The arguments of a declared type: `DECIMAL(10, 2)` is `(Some(10), Some(2))`.
pub(super) fn type_arguments(native_type: &str) -> (Option<u32>, Option<u32>) {
    let Some(args) = native_type
        .split_once('(')
        .and_then(|(_, rest)| rest.split_once(')'))
        .map(|(args, _)| args)
    else {
        return (None, None);
    };

    let mut args = args.split(',').map(|arg| arg.trim().parse::<u32>().ok());

    (args.next().flatten(), args.next().flatten())
}

fn sql_server(name: &str) -> Type {
    match name {
        "bit" => Type::Bool,
        "tinyint" | "smallint" => Type::I16,
        "int" => Type::I32,
        "bigint" => Type::I64,
        "real" => Type::F32,
        "float" => Type::F64,
        "decimal" | "numeric" | "money" | "smallmoney" => Type::Decimal,
        "char" | "varchar" | "nchar" | "nvarchar" | "text" | "ntext" | "xml" | "sysname" => {
            Type::String
        }
        "binary" | "varbinary" | "image" | "timestamp" | "rowversion" => Type::Bytes,
        "uniqueidentifier" => Type::Uuid,
        "date" => Type::Date,
        "time" => Type::Time,
        "datetime" | "datetime2" | "smalldatetime" | "datetimeoffset" => Type::DateTime,
        _ => Type::Unknown,
    }
}

fn postgresql(name: &str) -> Type {
    match name {
        "boolean" | "bool" => Type::Bool,
        "smallint" | "int2" => Type::I16,
        "integer" | "int" | "int4" => Type::I32,
        "bigint" | "int8" => Type::I64,
        "real" | "float4" => Type::F32,
        "double precision" | "float8" => Type::F64,
        "numeric" | "decimal" | "money" => Type::Decimal,
        "character varying" | "varchar" | "character" | "char" | "bpchar" | "text" | "name"
        | "citext" | "json" | "jsonb" => Type::String,
        "bytea" => Type::Bytes,
        "uuid" => Type::Uuid,
        "date" => Type::Date,
        name if name.starts_with("timestamp") => Type::DateTime,
        name if name.starts_with("time") => Type::Time,
        _ => Type::Unknown,
    }
}

fn mysql(name: &str) -> Type {
    match name {
        "bit" | "bool" | "boolean" => Type::Bool,
        "tinyint" | "smallint" | "year" => Type::I16,
        "mediumint" | "int" | "integer" => Type::I32,
        "bigint" => Type::I64,
        "float" => Type::F32,
        "double" | "real" => Type::F64,
        "decimal" | "numeric" => Type::Decimal,
        "char" | "varchar" | "tinytext" | "text" | "mediumtext" | "longtext" | "json" | "enum"
        | "set" => Type::String,
        "binary" | "varbinary" | "tinyblob" | "blob" | "mediumblob" | "longblob" => Type::Bytes,
        "date" => Type::Date,
        "time" => Type::Time,
        "datetime" | "timestamp" => Type::DateTime,
        _ => Type::Unknown,
    }
}

/// SQLite accepts any declared type; the rules follow its column affinity.
fn sqlite(name: &str) -> Type {
    if name.contains("bool") {
        Type::Bool
    } else if name.contains("int") {
        Type::I64
    } else if ["char", "clob", "text"].iter().any(|s| name.contains(s)) {
        Type::String
    } else if name.contains("blob") {
        Type::Bytes
    } else if ["real", "floa", "doub"].iter().any(|s| name.contains(s)) {
        Type::F64
    } else if name.contains("datetime") || name.contains("timestamp") {
        Type::DateTime
    } else if name.contains("date") {
        Type::Date
    } else if name.contains("time") {
        Type::Time
    } else if name.contains("uuid") || name.contains("guid") {
        Type::Uuid
    } else if name.contains("numeric") || name.contains("decimal") {
        Type::Decimal
    } else {
        Type::Unknown
    }
}
