use crate::{Error, Number, Symbol, Text, Value, value_error};
use indexmap::Equivalent;
use std::{
    fmt,
    hash::{Hash, Hasher},
};

/// The key type used by [Store](crate::Store)
///
/// Only hashable values can be used as keys, see [Value::is_hashable].
/// Keys compare strictly: a number key never equals a string key, and a
/// decimal zero never equals an integer zero.
#[derive(Clone, Debug)]
pub struct Key(Value);

impl Key {
    /// Returns a reference to the key's value
    pub fn value(&self) -> &Value {
        &self.0
    }
}

impl TryFrom<Value> for Key {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        if value.is_hashable() {
            Ok(Self(value))
        } else {
            value_error!("only hashable values can be used as keys")
        }
    }
}

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        self.0.strict_eq(&other.0)
    }
}
impl Eq for Key {}

impl Hash for Key {
    fn hash<H: Hasher>(&self, state: &mut H) {
        use Value::*;

        match &self.0 {
            Null => {}
            Bool(b) => b.hash(state),
            Number(n) => hash_number(n, state),
            Decimal(d) => d.hash(state),
            Str(s) => s.hash(state),
            Symbol(s) => s.hash(state),
            List(_) => {}
        }
    }
}

// Integer-valued floats hash like the equivalent int, keeping the hash
// consistent with Number's mixed-representation equality.
fn hash_number<H: Hasher>(n: &Number, state: &mut H) {
    match *n {
        Number::Int(i) => state.write_i64(i),
        Number::Float(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 => {
            state.write_i64(f as i64)
        }
        Number::Float(f) => state.write_u64(f.to_bits()),
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Text> for Key {
    fn from(value: Text) -> Self {
        Self(Value::Str(value))
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Self(Value::Str(value.into()))
    }
}

impl From<Symbol> for Key {
    fn from(value: Symbol) -> Self {
        Self(Value::Symbol(value))
    }
}

impl From<bool> for Key {
    fn from(value: bool) -> Self {
        Self(Value::Bool(value))
    }
}

impl<T> From<T> for Key
where
    Number: From<T>,
{
    fn from(value: T) -> Self {
        Self(Value::Number(value.into()))
    }
}

// Support efficient map accesses with &str
impl Equivalent<Key> for str {
    fn equivalent(&self, other: &Key) -> bool {
        match &other.0 {
            Value::Str(s) => self == s.as_str(),
            _ => false,
        }
    }
}

impl Equivalent<Key> for Text {
    fn equivalent(&self, other: &Key) -> bool {
        match &other.0 {
            Value::Str(s) => self == s,
            _ => false,
        }
    }
}
