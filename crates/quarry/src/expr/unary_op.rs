use quarry_core::query::Type;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// Logical negation
    Not,

    /// Conversion to another host type. Transparent on the field side.
    Convert(Type),
}
