//! Port traits for infrastructure boundaries.
//!
//! The live-state port is the only abstraction the engine needs: everything
//! else is loaded once into concrete types. Hosts implement the port against
//! their client; tests use `MockLiveStatePort` or `InMemoryLiveState`.

mod error;
mod live_state;

pub use error::LiveStateError;
pub use live_state::LiveStatePort;

#[cfg(test)]
pub use live_state::MockLiveStatePort;
