//! Common utility functions shared across the IronPath crates.

mod string;

pub use string::{none_if_blank, normalize_key, StringExt};
