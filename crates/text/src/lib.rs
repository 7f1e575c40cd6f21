//! String transformation utilities used by vesper
//!
//! The crate provides [TextPipeline], an owning chainable wrapper around a
//! text value, the closed set of capitalization styles in [CapStyle], and a
//! few parsing helpers for people-shaped strings (names, emails, usernames).
//!
//! Operations here are total: there's no input that makes a transform fail,
//! and the parsing helpers signal absence with `Option` rather than
//! guessing.

#![warn(missing_docs)]

mod caps;
mod parse;
mod pipeline;

pub use caps::{CapStyle, capitalize};
pub use parse::{
    EmailParts, FullName, format_username, parse_email, parse_full_name, sanitize_username,
};
pub use pipeline::TextPipeline;
