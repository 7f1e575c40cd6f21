//! The types used by the vesper value model

mod decimal;
mod key;
mod list;
mod number;
mod symbol;
mod text;
mod value;

pub use self::{
    decimal::Decimal,
    key::Key,
    list::{List, ValueVec},
    number::Number,
    symbol::Symbol,
    text::Text,
    value::Value,
};
