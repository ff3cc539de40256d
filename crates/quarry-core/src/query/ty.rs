/// Host-side type of a property, a bound value or a resolved column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Bool,
    I16,
    I32,
    I64,
    F32,
    F64,
    Decimal,
    String,
    Bytes,
    Uuid,
    Date,
    Time,
    DateTime,
    /// An enumeration. Its storage encoding is decided per column.
    Enum,
    /// The type could not be determined.
    Unknown,
}

impl Type {
    pub fn is_integer(self) -> bool {
        matches!(self, Self::I16 | Self::I32 | Self::I64)
    }

    pub fn is_numeric(self) -> bool {
        self.is_integer() || matches!(self, Self::F32 | Self::F64 | Self::Decimal)
    }

    pub fn is_string(self) -> bool {
        matches!(self, Self::String)
    }

    pub fn is_bool(self) -> bool {
        matches!(self, Self::Bool)
    }

    pub fn is_enum(self) -> bool {
        matches!(self, Self::Enum)
    }

    pub fn is_unknown(self) -> bool {
        matches!(self, Self::Unknown)
    }
}
