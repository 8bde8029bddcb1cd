/// A parsed S-expression value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Symbol(String),
    String(String),
    Integer(i32),
    Real(f32),
    Boolean(bool),
    List(Vec<Value>),
}

impl Value {
    /// Short human-readable name of the value kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Symbol(_) => "symbol",
            Value::String(_) => "string",
            Value::Integer(_) => "integer",
            Value::Real(_) => "real",
            Value::Boolean(_) => "boolean",
            Value::List(_) => "list",
        }
    }

    #[inline]
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Value::Symbol(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Numeric view: integers widen to `f32`.
    #[inline]
    pub fn as_f32(&self) -> Option<f32> {
        match *self {
            Value::Real(r) => Some(r),
            Value::Integer(i) => Some(i as f32),
            _ => None,
        }
    }

    #[inline]
    pub fn as_i32(&self) -> Option<i32> {
        match *self {
            Value::Integer(i) => Some(i),
            _ => None,
        }
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            Value::Boolean(b) => Some(b),
            _ => None,
        }
    }

    /// Strings and bare symbols both read as text.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) | Value::Symbol(s) => Some(s),
            _ => None,
        }
    }
}
