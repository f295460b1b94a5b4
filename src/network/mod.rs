//! Network layer - HTTP calls against the lottery backend
//!
//! The Network actor receives commands and sends back one response each.

pub mod actor;
pub mod client;
pub mod decode;

pub use actor::NetworkActor;
