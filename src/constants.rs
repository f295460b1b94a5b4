//! Application constants
//!
//! Centralized location for endpoint paths and configuration defaults.

/// Default backend base URL
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Default per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default log file, relative to the working directory
pub const DEFAULT_LOG_FILE: &str = "lottery-tui.log";

/// Config directory under the user's home
pub const CONFIG_DIR: &str = ".lottery-tui";

/// Config file name inside [`CONFIG_DIR`]
pub const CONFIG_FILE: &str = "config.yaml";

pub const LOTTERY_STATE_PATH: &str = "/api/lottery-state";
pub const PURCHASE_TICKET_PATH: &str = "/api/purchase-ticket";
pub const CLOSE_LOTTERY_PATH: &str = "/api/close-lottery";
pub const CLAIM_PRIZE_PATH: &str = "/api/claim-prize";

/// Maximum number of entries kept in the activity log
pub const MAX_ACTIVITY: usize = 50;

/// Application name
pub const APP_NAME: &str = "Lottery TUI";
