//! The dynamic value model used by vesper
//!
//! This crate provides the value types of a small dynamically typed model —
//! [Value] with its scalar and shared-reference variants — together with a
//! presence-aware [Store] that distinguishes cleared keys from missing ones,
//! and the [convert] module's explicit conversion boundary.
//!
//! Two rules hold throughout:
//! - Scalars are immutable and copied by value; lists are shared by
//!   reference (see [Value::strict_eq] vs `==`).
//! - Nothing converts implicitly. Every coercion is a visible call into
//!   [convert], and every failure is an explicit error.

#![warn(missing_docs)]

mod display;
mod error;
mod store;
mod types;

pub mod convert;
pub mod prelude;

pub use crate::{
    display::{DisplayContext, StringBuilderAppend},
    error::{Error, ErrorKind, Result, unexpected_type},
    store::{Lookup, Slot, Store, StoreHasher},
    types::{Decimal, Key, List, Number, Symbol, Text, Value, ValueVec},
};
pub use vesper_memory::{Address, Borrow, BorrowMut, MutCell, Ptr, PtrMut};
