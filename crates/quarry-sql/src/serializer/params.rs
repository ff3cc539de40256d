use super::{Formatter, ToSql};

use quarry_core::query::Parameter;

/// Receives the values bound by a serialized statement, in placeholder order.
pub trait Params {
    fn push(&mut self, param: Parameter);
}

impl Params for Vec<Parameter> {
    fn push(&mut self, param: Parameter) {
        Vec::push(self, param);
    }
}

/// A placeholder whose value the caller binds at execution time.
///
/// Inside a batch the name carries the statement's `_<index>` suffix.
pub(super) struct Placeholder(pub(super) String);

/// A placeholder bound to a value known while rendering.
pub(super) struct Binding(pub(super) Parameter);

impl ToSql for Placeholder {
    fn to_sql(self, f: &mut Formatter<'_>) {
        f.placeholders += 1;
        f.dst.push(f.serializer.capability.parameter_prefix);
        f.dst.push_str(&self.0);

        if f.batch_index > 0 {
            f.dst.push('_');
            f.dst.push_str(&f.batch_index.to_string());
        }
    }
}

impl ToSql for Binding {
    fn to_sql(self, f: &mut Formatter<'_>) {
        f.placeholders += 1;
        f.dst.push(f.serializer.capability.parameter_prefix);
        f.dst.push_str(&self.0.name);
        f.params.push(self.0);
    }
}
