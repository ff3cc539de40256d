//! Resolved table and entity metadata.

mod db_field;
pub use db_field::DbField;

mod db_field_collection;
pub use db_field_collection::DbFieldCollection;

mod entity;
pub use entity::{Entity, EntityMeta, Property};

mod table_name;
pub use table_name::{split_table_name, TableName};
