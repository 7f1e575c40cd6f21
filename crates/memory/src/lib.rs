//! Memory management utilities for the vesper value model
//!
//! Values that are shared by reference (rather than copied by value) are held
//! behind [Ptr] and [PtrMut]. Only single-threaded reference counting is
//! implemented; the types exist so that the distinction between *identity*
//! and *content* stays visible at the call site.

#![warn(missing_docs)]

mod address;
mod ptr;
mod ptr_mut;

pub use address::Address;
pub use ptr::Ptr;
pub use ptr_mut::{Borrow, BorrowMut, MutCell, PtrMut};
