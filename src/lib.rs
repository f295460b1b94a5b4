//! # Lottery TUI
//!
//! A terminal client for a lottery backend.
//!
//! ## Features
//! - Buy a ticket, close the lottery, claim a prize
//! - Optional lottery state fetch with JSON highlighting
//! - Validated decoding of every endpoint reply
//! - One request per action at a time, loading flag always cleared
//! - Timestamped activity log
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine)
//! - Network Layer (Tokio runtime)

pub mod config;
pub mod constants;
pub mod models;
pub mod ui;
pub mod messages;
pub mod app;
pub mod network;

// Re-export commonly used types
pub use config::Config;
pub use models::{LotteryAction, Notification, NotificationKind};
pub use messages::{UiEvent, NetworkCommand, NetworkResponse, RenderState};
pub use app::{AppState, AppActor};
pub use network::NetworkActor;
pub use network::decode::{ActionError, ActionOutcome};
