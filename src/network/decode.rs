//! Validated decoding of lottery endpoint replies
//!
//! Every reply body is checked against the shape its endpoint promises before
//! any state is touched. Shape violations become [`ActionError::Malformed`]
//! instead of leaking missing fields into the view.

use std::fmt;

use serde::Deserialize;
use serde_json::Value;

use crate::models::LotteryAction;

/// Longest body excerpt carried in an error
const MAX_ERROR_BODY: usize = 200;

/// A reply that decoded cleanly
#[derive(Clone, Debug, PartialEq)]
pub enum ActionOutcome {
    /// Opaque lottery state snapshot
    StateLoaded(Value),
    TicketPurchased { ticket_id: String },
    LotteryClosed { winner: String },
    /// Claim replies are informational and carry no success flag
    PrizeClaim { message: String },
    /// The backend answered `success: false`
    Rejected { message: Option<String> },
}

/// Failure to obtain a usable reply
#[derive(Clone, Debug, PartialEq)]
pub enum ActionError {
    /// Connect, DNS, timeout or body read failure
    Transport(String),
    /// Non-2xx status with a body that does not match the endpoint's shape
    Http { status: u16, body: String },
    /// 2xx status but the body is not the expected JSON
    Malformed(String),
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionError::Transport(msg) => write!(f, "request failed: {}", msg),
            ActionError::Http { status, body } if body.is_empty() => {
                write!(f, "server returned HTTP {}", status)
            }
            ActionError::Http { status, body } => {
                write!(f, "server returned HTTP {}: {}", status, body)
            }
            ActionError::Malformed(msg) => write!(f, "malformed response: {}", msg),
        }
    }
}

impl std::error::Error for ActionError {}

#[derive(Deserialize)]
struct PurchaseReply {
    success: bool,
    #[serde(rename = "ticketId")]
    ticket_id: Option<String>,
    message: Option<String>,
}

#[derive(Deserialize)]
struct CloseReply {
    success: bool,
    winner: Option<String>,
    message: Option<String>,
}

#[derive(Deserialize)]
struct ClaimReply {
    message: String,
}

/// Decode a reply body for `action` received with HTTP `status`
pub fn decode_reply(
    action: LotteryAction,
    status: u16,
    body: &str,
) -> Result<ActionOutcome, ActionError> {
    match decode_body(action, body) {
        Ok(outcome) => Ok(outcome),
        Err(_) if !(200..300).contains(&status) => Err(ActionError::Http {
            status,
            body: excerpt(body),
        }),
        Err(e) => Err(e),
    }
}

fn decode_body(action: LotteryAction, body: &str) -> Result<ActionOutcome, ActionError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| ActionError::Malformed(format!("not JSON ({})", e)))?;

    match action {
        LotteryAction::RefreshState => Ok(ActionOutcome::StateLoaded(value)),
        LotteryAction::PurchaseTicket => {
            let reply: PurchaseReply = from_value(value)?;
            match (reply.success, reply.ticket_id) {
                (true, Some(ticket_id)) => Ok(ActionOutcome::TicketPurchased { ticket_id }),
                (true, None) => Err(ActionError::Malformed(
                    "success reply without ticketId".to_string(),
                )),
                (false, _) => Ok(ActionOutcome::Rejected {
                    message: reply.message,
                }),
            }
        }
        LotteryAction::CloseLottery => {
            let reply: CloseReply = from_value(value)?;
            match (reply.success, reply.winner) {
                (true, Some(winner)) => Ok(ActionOutcome::LotteryClosed { winner }),
                (true, None) => Err(ActionError::Malformed(
                    "success reply without winner".to_string(),
                )),
                (false, _) => Ok(ActionOutcome::Rejected {
                    message: reply.message,
                }),
            }
        }
        LotteryAction::ClaimPrize => {
            let reply: ClaimReply = from_value(value)?;
            Ok(ActionOutcome::PrizeClaim {
                message: reply.message,
            })
        }
    }
}

fn from_value<T: for<'de> Deserialize<'de>>(value: Value) -> Result<T, ActionError> {
    serde_json::from_value(value).map_err(|e| ActionError::Malformed(e.to_string()))
}

fn excerpt(body: &str) -> String {
    let trimmed = body.trim();
    match trimmed.char_indices().nth(MAX_ERROR_BODY) {
        Some((idx, _)) => format!("{}...", &trimmed[..idx]),
        None => trimmed.to_string(),
    }
}
