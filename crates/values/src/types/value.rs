//! The core value type used by the value model

use crate::{Decimal, DisplayContext, List, Number, Symbol, Text};
use std::fmt;
use vesper_memory::Ptr;

/// The core value type for the vesper value model
///
/// Scalar variants are owned and copied by value; [List](Value::List) is
/// shared by reference. Cross-variant comparisons are always false; there's
/// no implicit coercion anywhere in the model (see
/// [convert](crate::convert) for the explicit boundary).
#[derive(Clone, Default)]
pub enum Value {
    /// The default type representing the absence of a value
    #[default]
    Null,

    /// A boolean, can be either true or false
    Bool(bool),

    /// A number, represented as either a signed 64 bit integer or float
    Number(Number),

    /// An arbitrary-precision number
    Decimal(Ptr<Decimal>),

    /// An immutable string with shared data
    Str(Text),

    /// A unique identifier
    Symbol(Symbol),

    /// A sequence of values with shared, mutable data
    List(List),
}

impl Value {
    /// Returns a recursive 'deep copy' of the value
    ///
    /// Lists get fresh allocations all the way down; everything else is a
    /// cheap clone of immutable data.
    pub fn deep_copy(&self) -> Value {
        match self {
            Value::List(l) => {
                let result: List = l.data().iter().map(|v| v.deep_copy()).collect();
                result.into()
            }
            _ => self.clone(),
        }
    }

    /// Returns true if the value counts as true in a boolean position
    ///
    /// `Null`, `false`, zero and NaN numbers, zero decimals, and the empty
    /// string are falsy. Everything else is truthy, including the empty list:
    /// a list is a reference to a container, not a measure of its contents.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => match n {
                Number::Float(f) => *f != 0.0 && !f.is_nan(),
                Number::Int(i) => *i != 0,
            },
            Value::Decimal(d) => !d.is_zero(),
            Value::Str(s) => !s.is_empty(),
            Value::Symbol(_) => true,
            Value::List(_) => true,
        }
    }

    /// Returns true if the value is hashable
    ///
    /// Only hashable values are acceptable as [Key](crate::Key)s.
    pub fn is_hashable(&self) -> bool {
        !matches!(self, Value::List(_))
    }

    /// Returns true if the two values are identical
    ///
    /// Scalars are identical when their contents match, and never across
    /// variants. Lists are identical only when they share an allocation;
    /// use `==` for element-wise comparison.
    pub fn strict_eq(&self, other: &Value) -> bool {
        use Value::*;

        match (self, other) {
            (Null, Null) => true,
            (Bool(a), Bool(b)) => a == b,
            (Number(a), Number(b)) => a == b,
            (Decimal(a), Decimal(b)) => a == b,
            (Str(a), Str(b)) => a == b,
            (Symbol(a), Symbol(b)) => a == b,
            (List(a), List(b)) => a.is_same_instance(b),
            _ => false,
        }
    }

    /// Returns the value's type as a static string
    pub fn type_as_str(&self) -> &'static str {
        use Value::*;
        match &self {
            Null => "Null",
            Bool(_) => "Bool",
            Number(crate::Number::Float(_)) => "Float",
            Number(crate::Number::Int(_)) => "Int",
            Decimal(_) => "Decimal",
            Str(_) => "String",
            Symbol(_) => "Symbol",
            List(_) => "List",
        }
    }

    /// Renders the value into the provided display context
    pub fn display(&self, ctx: &mut DisplayContext) {
        use Value::*;
        match self {
            Null => ctx.append("null"),
            Bool(b) => ctx.append(b.to_string()),
            Number(n) => ctx.append(n.to_string()),
            Decimal(d) => ctx.append(d.to_string()),
            Symbol(s) => ctx.append(s.to_string()),
            Str(s) => s.display(ctx),
            List(l) => l.display(ctx),
        }
    }
}

/// Structural equality
///
/// Lists compare element-wise; see [Value::strict_eq] for identity.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        use Value::*;

        match (self, other) {
            (List(a), List(b)) => {
                a.is_same_instance(b)
                    || (a.len() == b.len()
                        && a.data().iter().zip(b.data().iter()).all(|(x, y)| x == y))
            }
            _ => self.strict_eq(other),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ctx = DisplayContext::default();
        self.display(&mut ctx);
        f.write_str(&ctx.result())
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Value::*;
        match self {
            Null => f.write_str("Null"),
            Bool(b) => write!(f, "Bool({b})"),
            Number(n) => write!(f, "{n:?}"),
            Decimal(d) => write!(f, "Decimal({d})"),
            Str(s) => write!(f, "Str({:?})", s.as_str()),
            Symbol(s) => write!(f, "{s:?}"),
            List(_) => write!(f, "List({self})"),
        }
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Self::Null
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Self::Number(value)
    }
}

impl From<Decimal> for Value {
    fn from(value: Decimal) -> Self {
        Self::Decimal(value.into())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.into())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value.into())
    }
}

impl From<Text> for Value {
    fn from(value: Text) -> Self {
        Self::Str(value)
    }
}

impl From<Symbol> for Value {
    fn from(value: Symbol) -> Self {
        Self::Symbol(value)
    }
}

impl From<List> for Value {
    fn from(value: List) -> Self {
        Self::List(value)
    }
}
