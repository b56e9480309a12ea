//! Infrastructure implementations.
//!
//! Document loaders, settings, and the live-state port with its in-memory adapter.

pub mod documents;
pub mod memory_state;
pub mod ports;
pub mod settings;
