//! dsearch-display
//!
//! Turns a resolved [`dsearch_core::Page`] into a styled terminal text
//! block. See `format` for the layout rules and `colour` for the ANSI codes.

#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

pub mod colour;
pub mod format;

pub use format::{format_page, PageFormatter};
