//! A collection of useful items to make it easier to work with `vesper_values`

#[doc(inline)]
pub use crate::{
    Borrow, BorrowMut, Decimal, DisplayContext, Error, ErrorKind, Key, List, Lookup, MutCell,
    Number, Ptr, PtrMut, Result, Slot, Store, Symbol, Text, Value, ValueVec, convert,
    unexpected_type, value_error,
};
