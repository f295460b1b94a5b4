//! App state - pure data structure with no I/O logic

use std::collections::{HashMap, VecDeque};

use crate::config::Config;
use crate::constants::MAX_ACTIVITY;
use crate::messages::RenderState;
use crate::models::{ActivityEntry, LotteryAction, Notification};

/// The lottery view's local state - pure data, no I/O
pub struct AppState {
    pub base_url: String,
    /// Whether `RefreshState` actually calls the backend
    pub fetch_state: bool,

    // Lottery view
    pub lottery_state: Option<serde_json::Value>,
    pub ticket_id: String,
    pub winner: Option<String>,
    pub is_loading: bool,

    // Request tracking, one request per action at most
    pub in_flight: HashMap<LotteryAction, u64>,
    pub next_request_id: u64,

    // Popups
    pub notifications: VecDeque<Notification>,
    pub show_help: bool,

    // Activity log, newest first
    pub activity: VecDeque<ActivityEntry>,
    pub activity_scroll: u16,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        AppState {
            base_url: config.base_url.clone(),
            fetch_state: config.fetch_state,
            lottery_state: None,
            ticket_id: String::new(),
            winner: None,
            is_loading: false,
            in_flight: HashMap::new(),
            next_request_id: 1,
            notifications: VecDeque::new(),
            show_help: false,
            activity: VecDeque::with_capacity(MAX_ACTIVITY),
            activity_scroll: 0,
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// Notification currently on screen
    pub fn current_notification(&self) -> Option<&Notification> {
        self.notifications.front()
    }

    pub fn push_activity(&mut self, entry: ActivityEntry) {
        if self.activity.len() >= MAX_ACTIVITY {
            self.activity.pop_back();
        }
        self.activity.push_front(entry);
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        let lottery_state = self.lottery_state.as_ref().map(|value| {
            serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
        });

        let mut in_flight: Vec<LotteryAction> = self.in_flight.keys().copied().collect();
        in_flight.sort_by_key(|action| action.hotkey());

        RenderState {
            base_url: self.base_url.clone(),
            lottery_state,
            ticket_id: self.ticket_id.clone(),
            winner: self.winner.clone(),
            is_loading: self.is_loading,
            in_flight,
            notification: self.current_notification().cloned(),
            queued_notifications: self.notifications.len().saturating_sub(1),
            show_help: self.show_help,
            activity: self.activity.iter().cloned().collect(),
            activity_scroll: self.activity_scroll,
        }
    }
}
