//! Catalog queries.
//!
//! Every query selects the same ten columns in the same order, so one decoder
//! serves all dialects: name, primary, identity, nullable, native type, size,
//! precision, scale, has default, computed. Each query takes `@Schema` and
//! `@TableName`.

use super::native_type;

use quarry_core::{driver::Row, err, schema::DbField, Dialect, Result};

const SQL_SERVER: &str = "\
SELECT C.[name] AS [ColumnName], \
CONVERT(BIT, COALESCE(PK.[is_primary], 0)) AS [IsPrimary], \
CONVERT(BIT, IIF(IDC.[column_id] IS NULL, 0, 1)) AS [IsIdentity], \
C.[is_nullable] AS [IsNullable], \
T.[name] AS [DataType], \
CONVERT(INT, C.[max_length]) AS [Size], \
CONVERT(INT, C.[precision]) AS [Precision], \
CONVERT(INT, C.[scale]) AS [Scale], \
CONVERT(BIT, IIF(C.[default_object_id] = 0, 0, 1)) AS [HasDefaultValue], \
C.[is_computed] AS [IsComputed] \
FROM [sys].[columns] C \
INNER JOIN [sys].[types] T ON T.[user_type_id] = C.[user_type_id] \
INNER JOIN [sys].[tables] TBL ON TBL.[object_id] = C.[object_id] \
INNER JOIN [sys].[schemas] S ON S.[schema_id] = TBL.[schema_id] \
LEFT JOIN [sys].[identity_columns] IDC ON IDC.[object_id] = C.[object_id] AND IDC.[column_id] = C.[column_id] \
LEFT JOIN (\
SELECT IC.[object_id], IC.[column_id], 1 AS [is_primary] \
FROM [sys].[index_columns] IC \
INNER JOIN [sys].[indexes] I ON I.[object_id] = IC.[object_id] AND I.[index_id] = IC.[index_id] \
WHERE I.[is_primary_key] = 1\
) PK ON PK.[object_id] = C.[object_id] AND PK.[column_id] = C.[column_id] \
WHERE S.[name] = @Schema AND TBL.[name] = @TableName \
ORDER BY C.[column_id];";

const POSTGRESQL: &str = "\
SELECT CAST(C.column_name AS TEXT) AS \"ColumnName\", \
(KCU.column_name IS NOT NULL) AS \"IsPrimary\", \
(C.is_identity = 'YES' OR COALESCE(C.column_default, '') LIKE 'nextval(%') AS \"IsIdentity\", \
(C.is_nullable = 'YES') AS \"IsNullable\", \
CAST(C.data_type AS TEXT) AS \"DataType\", \
CAST(C.character_maximum_length AS INTEGER) AS \"Size\", \
CAST(C.numeric_precision AS INTEGER) AS \"Precision\", \
CAST(C.numeric_scale AS INTEGER) AS \"Scale\", \
(C.column_default IS NOT NULL) AS \"HasDefaultValue\", \
(C.is_generated = 'ALWAYS') AS \"IsComputed\" \
FROM information_schema.columns C \
LEFT JOIN information_schema.table_constraints TC \
ON TC.table_schema = C.table_schema AND TC.table_name = C.table_name AND TC.constraint_type = 'PRIMARY KEY' \
LEFT JOIN information_schema.key_column_usage KCU \
ON KCU.constraint_name = TC.constraint_name AND KCU.table_schema = C.table_schema \
AND KCU.table_name = C.table_name AND KCU.column_name = C.column_name \
WHERE C.table_schema = CAST(@Schema AS TEXT) AND C.table_name = CAST(@TableName AS TEXT) \
ORDER BY C.ordinal_position;";

const MYSQL: &str = "\
SELECT COLUMN_NAME AS `ColumnName`, \
CASE WHEN COLUMN_KEY = 'PRI' THEN 1 ELSE 0 END AS `IsPrimary`, \
CASE WHEN EXTRA LIKE '%auto_increment%' THEN 1 ELSE 0 END AS `IsIdentity`, \
CASE WHEN IS_NULLABLE = 'YES' THEN 1 ELSE 0 END AS `IsNullable`, \
DATA_TYPE AS `DataType`, \
CHARACTER_MAXIMUM_LENGTH AS `Size`, \
NUMERIC_PRECISION AS `Precision`, \
NUMERIC_SCALE AS `Scale`, \
CASE WHEN COLUMN_DEFAULT IS NOT NULL THEN 1 ELSE 0 END AS `HasDefaultValue`, \
CASE WHEN GENERATION_EXPRESSION <> '' THEN 1 ELSE 0 END AS `IsComputed` \
FROM INFORMATION_SCHEMA.COLUMNS \
WHERE TABLE_SCHEMA = COALESCE(@Schema, DATABASE()) AND TABLE_NAME = @TableName \
ORDER BY ORDINAL_POSITION;";

// `pragma_table_xinfo` is `PRAGMA table_info` plus generated columns, which
// it reports through `hidden` (2 and 3). Hidden columns of virtual tables (1)
// are skipped.
const SQLITE: &str = "\
SELECT [name] AS [ColumnName], \
[pk] > 0 AS [IsPrimary], \
0 AS [IsIdentity], \
[notnull] = 0 AS [IsNullable], \
[type] AS [DataType], \
NULL AS [Size], \
NULL AS [Precision], \
NULL AS [Scale], \
[dflt_value] IS NOT NULL AS [HasDefaultValue], \
[hidden] IN (2, 3) AS [IsComputed] \
FROM pragma_table_xinfo(@TableName, @Schema) \
WHERE [hidden] <> 1 \
ORDER BY [cid]";

pub(super) fn sql(dialect: Dialect) -> &'static str {
    match dialect {
        Dialect::SqlServer => SQL_SERVER,
        Dialect::PostgreSql => POSTGRESQL,
        Dialect::MySql => MYSQL,
        Dialect::Sqlite => SQLITE,
    }
}

/// The schema searched when the table name is not qualified. MySQL uses the
/// connection's current database.
pub(super) fn default_schema(dialect: Dialect) -> Option<&'static str> {
    match dialect {
        Dialect::SqlServer => Some("dbo"),
        Dialect::PostgreSql => Some("public"),
        Dialect::MySql => None,
        Dialect::Sqlite => Some("main"),
    }
}

pub(super) fn decode(dialect: Dialect, row: &Row) -> Result<DbField> {
    let name = row
        .get_str(0)?
        .ok_or_else(|| err!("catalog returned a column without a name"))?;
    let native_type = row.get_str(4)?.unwrap_or_default();

    let mut field = DbField::new(name, native_type::resolve(dialect, native_type), dialect);
    field.is_primary = row.get_bool(1)?;
    field.is_identity = row.get_bool(2)?;
    field.is_nullable = row.get_bool(3)?;
    field.native_type = native_type.to_string();
    field.size = row.get_i64(5)?.and_then(|size| u32::try_from(size).ok());
    field.precision = row.get_i64(6)?.and_then(|precision| u8::try_from(precision).ok());
    field.scale = row.get_i64(7)?.and_then(|scale| u8::try_from(scale).ok());
    field.has_default_value = row.get_bool(8)?;
    field.is_computed = row.get_bool(9)?;

    Ok(field)
}

/// Dialect-specific fix-ups once every row is decoded.
pub(super) fn finish(dialect: Dialect, fields: &mut [DbField]) {
    if dialect != Dialect::Sqlite {
        return;
    }

    // SQLite reports sizes only as part of the declared type
    for field in fields.iter_mut() {
        let (size, scale) = native_type::type_arguments(&field.native_type);

        if field.ty.is_numeric() {
            field.precision = size.and_then(|size| u8::try_from(size).ok());
            field.scale = scale.and_then(|scale| u8::try_from(scale).ok());
        } else {
            field.size = size;
        }
    }

    // A lone `INTEGER PRIMARY KEY` aliases the rowid
    let mut primaries = fields.iter_mut().filter(|field| field.is_primary);

    if let (Some(primary), None) = (primaries.next(), primaries.next()) {
        if primary.native_type.eq_ignore_ascii_case("INTEGER") {
            primary.is_identity = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quarry_core::query::{Type, Value};

    fn row(values: Vec<Value>) -> Row {
        Row::from_vec(values)
    }

    #[test]
    fn decode_accepts_integer_flags() {
        let field = decode(
            Dialect::MySql,
            &row(vec![
                Value::from("Id"),
                Value::I64(1),
                Value::I64(1),
                Value::I64(0),
                Value::from("bigint"),
                Value::Null,
                Value::I64(19),
                Value::I64(0),
                Value::I64(0),
                Value::I64(0),
            ]),
        )
        .unwrap();

        assert_eq!(field.name, "Id");
        assert!(field.is_primary);
        assert!(field.is_identity);
        assert!(!field.is_nullable);
        assert_eq!(field.ty, Type::I64);
        assert_eq!(field.size, None);
        assert_eq!(field.precision, Some(19));
        assert_eq!(field.provider, Dialect::MySql);
    }

    #[test]
    fn decode_treats_negative_size_as_unbounded() {
        let field = decode(
            Dialect::SqlServer,
            &row(vec![
                Value::from("Notes"),
                Value::Bool(false),
                Value::Bool(false),
                Value::Bool(true),
                Value::from("nvarchar"),
                Value::I32(-1),
                Value::I32(0),
                Value::I32(0),
                Value::Bool(false),
                Value::Bool(false),
            ]),
        )
        .unwrap();

        assert_eq!(field.ty, Type::String);
        assert_eq!(field.size, None);
        assert!(field.is_nullable);
    }

    #[test]
    fn sqlite_integer_primary_key_is_identity() {
        let mut fields = vec![
            DbField {
                is_primary: true,
                native_type: "INTEGER".to_string(),
                ..DbField::new("Id", Type::I64, Dialect::Sqlite)
            },
            DbField {
                native_type: "VARCHAR(50)".to_string(),
                ..DbField::new("Name", Type::String, Dialect::Sqlite)
            },
        ];

        finish(Dialect::Sqlite, &mut fields);

        assert!(fields[0].is_identity);
        assert_eq!(fields[1].size, Some(50));
    }

    #[test]
    fn sqlite_composite_key_has_no_identity() {
        let mut fields = ["A", "B"]
            .map(|name| DbField {
                is_primary: true,
                native_type: "INTEGER".to_string(),
                ..DbField::new(name, Type::I64, Dialect::Sqlite)
            })
            .to_vec();

        finish(Dialect::Sqlite, &mut fields);

        assert!(fields.iter().all(|field| !field.is_identity));
    }
}
