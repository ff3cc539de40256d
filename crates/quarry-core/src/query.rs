//! The dialect-neutral intermediate representation of a compiled predicate.

mod conjunction;
pub use conjunction::Conjunction;

pub(crate) mod field;
pub use field::Field;

mod operation;
pub use operation::Operation;

mod order_field;
pub use order_field::{Order, OrderField};

mod parameter;
pub use parameter::{Parameter, ParameterDirection};

mod query_field;
pub use query_field::QueryField;

mod query_group;
pub use query_group::{QueryGroup, QueryNode};

mod ty;
pub use ty::Type;

mod value;
pub use value::{Value, ValueEnum};
