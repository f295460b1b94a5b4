//! Command handlers - state transitions for UI events and network responses
//!
//! Nothing here performs I/O. Transitions that need the backend return the
//! `NetworkCommand` for the actor to forward.

use crate::app::AppState;
use crate::messages::{NetworkCommand, NetworkResponse};
use crate::models::{ActivityEntry, LotteryAction, Notification};
use crate::network::decode::{ActionError, ActionOutcome};

const PURCHASE_OK: &str = "Ticket purchased successfully!";
const CLOSE_OK: &str = "Lottery closed! Winner selected.";

impl AppState {
    // ========================
    // Actions
    // ========================

    /// Start `action`, returning the command to send if it may run.
    ///
    /// An action that is already in flight is rejected. A state refresh is a
    /// no-op unless fetching is enabled in the config.
    pub fn begin_action(&mut self, action: LotteryAction) -> Option<NetworkCommand> {
        if action == LotteryAction::RefreshState && !self.fetch_state {
            tracing::debug!("lottery state fetch is disabled, refresh ignored");
            return None;
        }

        if let Some(pending) = self.in_flight.get(&action) {
            tracing::warn!(?action, pending, "action already in flight, rejecting");
            return None;
        }

        let id = self.next_id();
        self.in_flight.insert(action, id);
        self.is_loading = true;
        tracing::info!(id, ?action, "action started");

        Some(NetworkCommand::Execute { id, action })
    }

    pub fn refresh_state(&mut self) -> Option<NetworkCommand> {
        self.begin_action(LotteryAction::RefreshState)
    }

    pub fn purchase_ticket(&mut self) -> Option<NetworkCommand> {
        self.begin_action(LotteryAction::PurchaseTicket)
    }

    pub fn close_lottery(&mut self) -> Option<NetworkCommand> {
        self.begin_action(LotteryAction::CloseLottery)
    }

    pub fn claim_prize(&mut self) -> Option<NetworkCommand> {
        self.begin_action(LotteryAction::ClaimPrize)
    }

    // ========================
    // Responses
    // ========================

    /// Apply a network response. Responses that do not match the in-flight
    /// request for their action are dropped.
    pub fn handle_response(&mut self, response: NetworkResponse) {
        let id = response.id();
        let action = response.action();
        let time_ms = response.time_ms();

        if self.in_flight.get(&action) != Some(&id) {
            tracing::debug!(id, ?action, "dropping stale response");
            return;
        }
        self.in_flight.remove(&action);
        self.is_loading = !self.in_flight.is_empty();

        let result = response.into_result();
        let (ok, summary) = match &result {
            Ok(outcome) => (
                !matches!(outcome, ActionOutcome::Rejected { .. }),
                summarize(outcome),
            ),
            Err(error) => (false, error.to_string()),
        };
        tracing::info!(id, ?action, ok, time_ms, "action finished");

        match result {
            Ok(outcome) => self.apply_outcome(outcome),
            Err(error) => self.apply_error(action, error),
        }

        self.push_activity(ActivityEntry {
            action,
            ok,
            summary,
            time_ms,
            timestamp: chrono::Utc::now(),
        });
    }

    fn apply_outcome(&mut self, outcome: ActionOutcome) {
        match outcome {
            ActionOutcome::StateLoaded(value) => {
                self.lottery_state = Some(value);
            }
            ActionOutcome::TicketPurchased { ticket_id } => {
                self.ticket_id = ticket_id;
                self.notify(Notification::success(PURCHASE_OK));
            }
            ActionOutcome::LotteryClosed { winner } => {
                self.winner = Some(winner);
                self.notify(Notification::success(CLOSE_OK));
            }
            ActionOutcome::PrizeClaim { message } => {
                self.notify(Notification::info(message));
            }
            ActionOutcome::Rejected { message } => {
                self.notify(Notification::error(format!(
                    "Error: {}",
                    message.as_deref().unwrap_or("no message provided")
                )));
            }
        }
    }

    /// Failed refreshes stay silent, the activity log records them
    fn apply_error(&mut self, action: LotteryAction, error: ActionError) {
        tracing::warn!(?action, %error, "action failed");
        if action != LotteryAction::RefreshState {
            self.notify(Notification::error(format!("Error: {}", error)));
        }
    }

    // ========================
    // Popups
    // ========================

    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push_back(notification);
    }

    pub fn dismiss_notification(&mut self) {
        self.notifications.pop_front();
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }

    // ========================
    // Activity log scrolling
    // ========================

    pub fn scroll_up(&mut self) {
        self.activity_scroll = self.activity_scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        let max = self.activity.len().saturating_sub(1) as u16;
        self.activity_scroll = self.activity_scroll.saturating_add(1).min(max);
    }
}

fn summarize(outcome: &ActionOutcome) -> String {
    match outcome {
        ActionOutcome::StateLoaded(_) => "state loaded".to_string(),
        ActionOutcome::TicketPurchased { ticket_id } => format!("ticket {}", ticket_id),
        ActionOutcome::LotteryClosed { winner } => format!("winner {}", winner),
        ActionOutcome::PrizeClaim { message } => message.clone(),
        ActionOutcome::Rejected { message } => {
            format!("rejected: {}", message.as_deref().unwrap_or("-"))
        }
    }
}
