use super::{columns, Serializer};

use crate::stmt::{self, Field, QueryGroup, Statement};

use quarry_core::{schema::DbFieldCollection, Error, Result};

use std::collections::HashSet;

impl Serializer {
    /// Rejects statements the dialect cannot express or that are malformed.
    pub(super) fn check(&self, stmt: &Statement) -> Result<()> {
        if stmt.table().trim().is_empty() {
            return Err(Error::invalid_configuration("the table name must not be empty"));
        }

        if stmt.hints().is_some() && !self.capability.table_hints {
            return Err(Error::unsupported_operation(format!(
                "table hints are not supported by {}",
                self.dialect
            )));
        }

        if let Some(filter) = stmt.filter() {
            self.check_filter(filter)?;
        }

        match stmt {
            Statement::Aggregate(stmt) => {
                if stmt.field.unquoted_name().is_empty() {
                    return Err(Error::invalid_configuration(
                        "the aggregated field must not be empty",
                    ));
                }
            }
            Statement::BatchQuery(stmt) => {
                check_projection(&stmt.fields)?;
                check_order(&stmt.order_by)?;
                check_page_size(stmt.rows_per_batch)?;
                stmt.to_skip_query()?.row_range()?;
            }
            Statement::SkipQuery(stmt) => {
                check_projection(&stmt.fields)?;
                check_order(&stmt.order_by)?;
                check_page_size(stmt.take)?;
                stmt.row_range()?;
            }
            Statement::Query(stmt) => check_projection(&stmt.fields)?,
            Statement::Insert(stmt) => {
                self.check_insert(&stmt.fields, stmt.db_fields.as_deref())?;
            }
            Statement::InsertAll(stmt) => {
                self.check_insert(&stmt.fields, stmt.db_fields.as_deref())?;
                self.check_batch(stmt.batch_size)?;
                check_batch_placeholders(&stmt.fields, stmt.batch_size)?;
            }
            Statement::Update(stmt) => {
                check_projection(&stmt.fields)?;
                check_assignments(&stmt.fields, &[], stmt.db_fields.as_deref())?;
            }
            Statement::UpdateAll(stmt) => {
                let db_fields = stmt.db_fields.as_deref();
                let qualifiers = columns::qualifiers(&stmt.qualifiers, db_fields);

                check_projection(&stmt.fields)?;
                check_qualifiers(&qualifiers, "update")?;
                check_assignments(&stmt.fields, &qualifiers, db_fields)?;
                self.check_batch(stmt.batch_size)?;
                self.check_repeated_statements(stmt.batch_size, "UpdateAll")?;
                check_batch_placeholders(stmt.fields.iter().chain(&qualifiers), stmt.batch_size)?;
            }
            Statement::DeleteAll(stmt) => self.check_delete_all(stmt)?,
            Statement::Merge(stmt) => {
                let db_fields = stmt.db_fields.as_deref();

                self.check_merge(&stmt.fields, &stmt.qualifiers, db_fields)?;
            }
            Statement::MergeAll(stmt) => {
                let db_fields = stmt.db_fields.as_deref();

                self.check_merge(&stmt.fields, &stmt.qualifiers, db_fields)?;
                self.check_batch(stmt.batch_size)?;
                check_batch_placeholders(stmt.fields.iter().chain(&stmt.qualifiers), stmt.batch_size)?;
            }
            Statement::Count(_) | Statement::Delete(_) | Statement::Exists(_) | Statement::Truncate(_) => {}
        }

        Ok(())
    }

    pub(super) fn check_filter(&self, filter: &QueryGroup) -> Result<()> {
        if self.capability.directional_parameters {
            return Ok(());
        }

        match filter.fields().into_iter().find(|field| field.direction.is_some()) {
            Some(field) => Err(Error::unsupported_operation(format!(
                "directional parameters are not supported by {}; field `{}`",
                self.dialect,
                field.name()
            ))),
            None => Ok(()),
        }
    }

    fn check_insert(&self, fields: &[Field], db_fields: Option<&DbFieldCollection>) -> Result<()> {
        check_projection(fields)?;

        if columns::insertable(fields, db_fields).is_empty() {
            return Err(Error::invalid_configuration(
                "the insert has no column left once identity and computed columns are removed",
            ));
        }

        for primary in columns::required_primaries(db_fields) {
            if !columns::contains_column(fields, &primary.name) {
                return Err(Error::invalid_configuration(format!(
                    "the primary column `{}` has no default value and must be inserted",
                    primary.name
                )));
            }
        }

        Ok(())
    }

    fn check_merge(
        &self,
        fields: &[Field],
        qualifiers: &[Field],
        db_fields: Option<&DbFieldCollection>,
    ) -> Result<()> {
        check_projection(fields)?;

        let qualifiers = columns::qualifiers(qualifiers, db_fields);
        check_qualifiers(&qualifiers, "merge")?;

        for qualifier in &qualifiers {
            if !columns::contains_column(fields, &qualifier.name) {
                return Err(Error::invalid_configuration(format!(
                    "the qualifier `{}` is not part of the merged fields",
                    qualifier.name
                )));
            }
        }

        Ok(())
    }

    fn check_delete_all(&self, stmt: &stmt::DeleteAll) -> Result<()> {
        let key_fields = columns::qualifiers(&stmt.key_fields, stmt.db_fields.as_deref());
        check_qualifiers(&key_fields, "delete")?;

        if stmt.keys.is_empty() {
            return Err(Error::invalid_configuration("no keys to delete"));
        }

        if let Some(key) = stmt.keys.iter().find(|key| key.len() != key_fields.len()) {
            return Err(Error::invalid_configuration(format!(
                "a key has {} values but {} key columns were given",
                key.len(),
                key_fields.len()
            )));
        }

        Ok(())
    }

    fn check_batch(&self, batch_size: usize) -> Result<()> {
        if batch_size == 0 {
            return Err(Error::invalid_configuration("the batch size must be at least 1"));
        }

        let max = self.capability.max_batch_statements;
        if batch_size > max {
            return Err(Error::unsupported_operation(format!(
                "a batch of {batch_size} exceeds the {max} statements {} accepts",
                self.dialect
            )));
        }

        Ok(())
    }

    fn check_repeated_statements(&self, batch_size: usize, operation: &str) -> Result<()> {
        if batch_size > 1 && !self.capability.multiple_statements {
            return Err(Error::unsupported_operation(format!(
                "{operation} with a batch of {batch_size} needs multiple statements, which {} does not run",
                self.dialect
            )));
        }

        Ok(())
    }
}

/// Statements after the first suffix their placeholders with `_<index>`. A
/// suffixed placeholder must not be another column's own placeholder.
fn check_batch_placeholders<'a>(
    fields: impl IntoIterator<Item = &'a Field>,
    batch_size: usize,
) -> Result<()> {
    let names: HashSet<String> = fields
        .into_iter()
        .map(|field| field.parameter_name().to_lowercase())
        .collect();

    for name in &names {
        let Some((base, index)) = name.rsplit_once('_') else {
            continue;
        };

        let suffix = index
            .parse::<usize>()
            .is_ok_and(|i| i > 0 && i < batch_size && i.to_string() == index);

        if suffix && names.contains(base) {
            return Err(Error::invalid_configuration(format!(
                "the placeholder `{name}` is also the batched placeholder of `{base}`"
            )));
        }
    }

    Ok(())
}

fn check_projection(fields: &[Field]) -> Result<()> {
    if fields.is_empty() || fields.iter().any(|field| field.unquoted_name().is_empty()) {
        return Err(Error::invalid_configuration(
            "the list of fields must not be empty",
        ));
    }

    Ok(())
}

fn check_order(order_by: &[stmt::OrderField]) -> Result<()> {
    if order_by.is_empty() {
        return Err(Error::invalid_configuration("paging requires an order"));
    }

    Ok(())
}

fn check_page_size(rows: usize) -> Result<()> {
    if rows == 0 {
        return Err(Error::invalid_configuration("a page must hold at least one row"));
    }

    Ok(())
}

fn check_qualifiers(qualifiers: &[Field], operation: &str) -> Result<()> {
    if qualifiers.is_empty() {
        return Err(Error::invalid_configuration(format!(
            "the {operation} needs qualifier fields or a primary key"
        )));
    }

    Ok(())
}

fn check_assignments(
    fields: &[Field],
    qualifiers: &[Field],
    db_fields: Option<&DbFieldCollection>,
) -> Result<()> {
    if columns::updatable(fields, qualifiers, db_fields).is_empty() {
        return Err(Error::invalid_configuration(
            "the update has no column to assign once key columns are removed",
        ));
    }

    Ok(())
}
