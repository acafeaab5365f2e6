use super::Type;

use uuid::Uuid;

#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// Signed 64-bit integer
    I64(i64),

    /// String value
    String(String),

    /// UUID value
    Uuid(Uuid),

    /// Null value
    #[default]
    Null,
}

impl Value {
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` for `Null` and for strings that are empty or contain
    /// only whitespace.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Null => true,
            Self::String(value) => value.trim().is_empty(),
            _ => false,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(&**v),
            _ => None,
        }
    }

    /// Returns the type of the value, `None` for `Null`.
    pub fn ty(&self) -> Option<Type> {
        match self {
            Self::Bool(_) => Some(Type::Bool),
            Self::I64(_) => Some(Type::I64),
            Self::String(_) => Some(Type::String),
            Self::Uuid(_) => Some(Type::Uuid),
            Self::Null => None,
        }
    }

    /// Converts the value to `ty`, the way a foreign key column coerces what
    /// is assigned to it. `Null` converts to `Null`. Returns `None` when the
    /// value has no representation in `ty`.
    pub fn cast(&self, ty: &Type) -> Option<Value> {
        match (self, ty) {
            (Self::Null, _) => Some(Self::Null),
            (Self::Bool(_), Type::Bool)
            | (Self::I64(_), Type::I64)
            | (Self::String(_), Type::String)
            | (Self::Uuid(_), Type::Uuid) => Some(self.clone()),
            (Self::String(v), Type::I64) => v.trim().parse().ok().map(Self::I64),
            (Self::String(v), Type::Uuid) => v.trim().parse().ok().map(Self::Uuid),
            (Self::I64(v), Type::String) => Some(Self::String(v.to_string())),
            (Self::Uuid(v), Type::String) => Some(Self::String(v.to_string())),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(src: bool) -> Self {
        Self::Bool(src)
    }
}

macro_rules! impl_from_int {
    ( $($t:ty),+ ) => {
        $(
            impl From<$t> for Value {
                fn from(src: $t) -> Self {
                    Self::I64(src.into())
                }
            }
        )+
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl From<String> for Value {
    fn from(src: String) -> Self {
        Self::String(src)
    }
}

impl From<&String> for Value {
    fn from(src: &String) -> Self {
        Self::String(src.clone())
    }
}

impl From<Uuid> for Value {
    fn from(src: Uuid) -> Self {
        Self::Uuid(src)
    }
}

impl<T> From<Option<T>> for Value
where
    Value: From<T>,
{
    fn from(src: Option<T>) -> Self {
        match src {
            Some(value) => value.into(),
            None => Self::Null,
        }
    }
}
