/// A coerced, typed argument value.
///
/// Produced by a [`Filter`](crate::Filter) (or a custom check) and handed to the action via the [`Payload`](crate::Payload).
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A boolean value (ex: a switch).
    Boolean(bool),
    /// A finite number; integers are represented as integral `f64`.
    Number(f64),
    /// A text value.
    String(String),
}

impl Value {
    /// The [`Kind`] of this value.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Boolean(_) => Kind::Boolean,
            Value::Number(_) => Kind::Number,
            Value::String(_) => Kind::String,
        }
    }

    /// Get the boolean, if this is a [`Value::Boolean`].
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the number, if this is a [`Value::Number`].
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the text, if this is a [`Value::String`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::String(s) => write!(f, "{s}"),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

macro_rules! number_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(value: $t) -> Self {
                    Value::Number(f64::from(value))
                }
            }
        )*
    };
}

number_from!(i8, i16, i32, u8, u16, u32, f32, f64);

/// A raw, un-coerced input as produced by the tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Raw {
    /// An option given without a value (ex: `--verbose`).
    Flag(bool),
    /// A textual token.
    Text(String),
}

impl std::fmt::Display for Raw {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Raw::Flag(b) => write!(f, "{b}"),
            Raw::Text(t) => write!(f, "{t}"),
        }
    }
}

impl From<bool> for Raw {
    fn from(value: bool) -> Self {
        Raw::Flag(value)
    }
}

impl From<&str> for Raw {
    fn from(value: &str) -> Self {
        Raw::Text(value.to_string())
    }
}

impl From<String> for Raw {
    fn from(value: String) -> Self {
        Raw::Text(value)
    }
}

impl From<Raw> for Value {
    fn from(value: Raw) -> Self {
        match value {
            Raw::Flag(b) => Value::Boolean(b),
            Raw::Text(t) => Value::String(t),
        }
    }
}

/// The target type of a [`Filter`](crate::Filter).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// Coerces into [`Value::Boolean`].
    Boolean,
    /// Coerces into [`Value::Number`].
    Number,
    /// Coerces into [`Value::String`].
    String,
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Kind::Boolean => write!(f, "boolean"),
            Kind::Number => write!(f, "number"),
            Kind::String => write!(f, "string"),
        }
    }
}
