//! Compiles predicate expressions into the query IR.
//!
//! The compiler walks an [`Expr`] written against one entity and produces a
//! [`QueryGroup`]. Field references are resolved to the entity's mapped
//! columns, constants are evaluated up front, and the configured null
//! semantics decide which guards a comparison carries. The result has unique
//! parameter names and enum values already encoded for their columns.

mod binary_op;
mod call;
mod enums;
mod eval;

use crate::{
    expr::{Expr, ExprUnaryOp, UnaryOp},
    NullSemantics, Options,
};

use quarry_core::{
    query::{Conjunction, Operation, QueryField, QueryGroup, Value},
    schema::{DbFieldCollection, EntityMeta, Property},
    Error, Result,
};

/// Compiles predicates written against one entity.
#[derive(Debug)]
pub struct Compiler<'a> {
    entity: &'a EntityMeta,

    options: &'a Options,

    /// Resolved columns of the entity's table. When present, they decide
    /// enum encoding and column nullability.
    db_fields: Option<&'a DbFieldCollection>,

    /// Closure parameters in scope, innermost last.
    scope: Vec<(String, Value)>,
}

impl<'a> Compiler<'a> {
    pub fn new(entity: &'a EntityMeta, options: &'a Options) -> Compiler<'a> {
        Compiler {
            entity,
            options,
            db_fields: None,
            scope: vec![],
        }
    }

    pub fn with_db_fields(mut self, db_fields: &'a DbFieldCollection) -> Compiler<'a> {
        self.db_fields = Some(db_fields);
        self
    }

    /// Compiles `expr` into a query group.
    pub fn compile(&mut self, expr: &Expr) -> Result<QueryGroup> {
        let mut group = self.predicate(expr)?;
        self.encode_enums(&mut group);
        group.fix_parameters();
        Ok(group)
    }

    /// Compiles a boolean-valued expression.
    fn predicate(&mut self, expr: &Expr) -> Result<QueryGroup> {
        match expr {
            Expr::BinaryOp(expr) => self.binary_op(expr),
            Expr::UnaryOp(ExprUnaryOp {
                op: UnaryOp::Not,
                operand,
            }) => self.not(operand),
            Expr::UnaryOp(ExprUnaryOp {
                op: UnaryOp::Convert(_),
                operand,
            }) => self.predicate(operand),
            Expr::Call(call) => self.call(call, false),
            Expr::Field(name) => {
                let property = self.property(name)?;

                if !property.ty.is_bool() {
                    return Err(Error::unsupported_expression(format!(
                        "`{name}` is not a boolean property and cannot be used as a predicate"
                    )));
                }

                Ok(self.emit(property, Operation::Equal, Value::Bool(true)))
            }
            _ => Err(unsupported(expr)),
        }
    }

    fn not(&mut self, operand: &Expr) -> Result<QueryGroup> {
        match operand {
            Expr::Call(call) => self.call(call, true),
            _ => Ok(self.predicate(operand)?.not()),
        }
    }

    /// Builds the group for one comparison, including the guards the null
    /// semantics call for.
    fn emit(&self, property: &Property, operation: Operation, value: Value) -> QueryGroup {
        let column = &property.column;

        let mut field = QueryField::new(column, operation, value);
        field.field.ty = Some(property.ty);

        if field.is_null_check() {
            return QueryGroup::from(field);
        }

        match self.options.null_semantics {
            NullSemantics::NullNotEqual if operation.is_negative() => {
                QueryGroup::or([field, QueryField::is_null(column)])
            }
            NullSemantics::NullNotEqual => {
                QueryGroup::and([field, QueryField::is_not_null(column)])
            }
            NullSemantics::SqlNull
                if operation.is_ne()
                    && self.options.boolean_not_equals
                    && self.is_nullable(property) =>
            {
                // NOT ([c] = @c AND [c] IS NOT NULL)
                field.operation = Operation::Equal;

                QueryGroup {
                    children: vec![field.into(), QueryField::is_not_null(column).into()],
                    conjunction: Conjunction::And,
                    is_not: true,
                }
            }
            NullSemantics::SqlNull => QueryGroup::from(field),
        }
    }

    fn is_nullable(&self, property: &Property) -> bool {
        self.db_fields
            .and_then(|db_fields| db_fields.get(&property.column))
            .map_or(property.nullable, |db_field| db_field.is_nullable)
    }

    /// The property `expr` refers to, looking through conversions.
    fn field(&self, expr: &Expr) -> Result<Option<&'a Property>> {
        match expr {
            Expr::Field(name) => self.property(name).map(Some),
            Expr::UnaryOp(ExprUnaryOp {
                op: UnaryOp::Convert(_),
                operand,
            }) => self.field(operand),
            _ => Ok(None),
        }
    }

    fn property(&self, name: &str) -> Result<&'a Property> {
        let entity = self.entity;

        entity.get(name).ok_or_else(|| {
            Error::unsupported_expression(format!(
                "`{name}` is not a property of `{}`",
                entity.name
            ))
        })
    }
}

fn unsupported(expr: &Expr) -> Error {
    Error::unsupported_expression(format!("{expr:?}"))
}
