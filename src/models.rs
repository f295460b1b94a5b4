use crate::constants::{
    CLAIM_PRIZE_PATH, CLOSE_LOTTERY_PATH, LOTTERY_STATE_PATH, PURCHASE_TICKET_PATH,
};

/// HTTP methods used by the lottery endpoints
#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    GET,
    POST,
}

impl HttpMethod {
    pub fn as_str(&self) -> &str {
        match self {
            HttpMethod::GET => "GET",
            HttpMethod::POST => "POST",
        }
    }
}

/// A user-triggerable operation against the lottery backend
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LotteryAction {
    RefreshState,
    PurchaseTicket,
    CloseLottery,
    ClaimPrize,
}

impl LotteryAction {
    /// Actions shown as buttons, in display order
    pub const BUTTONS: [LotteryAction; 3] = [
        LotteryAction::PurchaseTicket,
        LotteryAction::CloseLottery,
        LotteryAction::ClaimPrize,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            LotteryAction::RefreshState => LOTTERY_STATE_PATH,
            LotteryAction::PurchaseTicket => PURCHASE_TICKET_PATH,
            LotteryAction::CloseLottery => CLOSE_LOTTERY_PATH,
            LotteryAction::ClaimPrize => CLAIM_PRIZE_PATH,
        }
    }

    pub fn method(&self) -> HttpMethod {
        match self {
            LotteryAction::RefreshState => HttpMethod::GET,
            _ => HttpMethod::POST,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LotteryAction::RefreshState => "Refresh",
            LotteryAction::PurchaseTicket => "Buy Ticket",
            LotteryAction::CloseLottery => "Close Lottery",
            LotteryAction::ClaimPrize => "Claim Prize",
        }
    }

    /// Key that triggers the action
    pub fn hotkey(&self) -> char {
        match self {
            LotteryAction::RefreshState => 'r',
            LotteryAction::PurchaseTicket => 'b',
            LotteryAction::CloseLottery => 'c',
            LotteryAction::ClaimPrize => 'p',
        }
    }

    pub fn from_hotkey(c: char) -> Option<LotteryAction> {
        match c {
            'r' => Some(LotteryAction::RefreshState),
            'b' => Some(LotteryAction::PurchaseTicket),
            'c' => Some(LotteryAction::CloseLottery),
            'p' => Some(LotteryAction::ClaimPrize),
            _ => None,
        }
    }
}

/// Severity of a notification popup
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

/// A modal message shown to the user until dismissed
#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub text: String,
}

impl Notification {
    pub fn success(text: impl Into<String>) -> Self {
        Notification {
            kind: NotificationKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Notification {
            kind: NotificationKind::Error,
            text: text.into(),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Notification {
            kind: NotificationKind::Info,
            text: text.into(),
        }
    }
}

/// One completed request in the activity log
#[derive(Clone, Debug)]
pub struct ActivityEntry {
    pub action: LotteryAction,
    pub ok: bool,
    pub summary: String,
    pub time_ms: u64,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}
