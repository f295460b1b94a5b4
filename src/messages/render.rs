//! Render state - data structure sent from App layer to UI for rendering

use crate::models::{ActivityEntry, LotteryAction, Notification};

/// Complete state needed by the UI to render
#[derive(Debug, Clone, Default)]
pub struct RenderState {
    pub base_url: String,

    // Lottery view
    /// Pretty-printed lottery state, `None` until one has been fetched
    pub lottery_state: Option<String>,
    pub ticket_id: String,
    pub winner: Option<String>,
    pub is_loading: bool,
    pub in_flight: Vec<LotteryAction>,

    // Popups
    pub notification: Option<Notification>,
    /// Notifications waiting behind the visible one
    pub queued_notifications: usize,
    pub show_help: bool,

    // Activity log, newest first
    pub activity: Vec<ActivityEntry>,
    pub activity_scroll: u16,
}

impl RenderState {
    pub fn is_in_flight(&self, action: LotteryAction) -> bool {
        self.in_flight.contains(&action)
    }
}
