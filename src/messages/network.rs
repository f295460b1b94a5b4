//! Network messages - communication between App and Network layers

use crate::models::LotteryAction;
use crate::network::decode::{ActionError, ActionOutcome};

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone)]
pub enum NetworkCommand {
    /// Call the endpoint behind `action`
    Execute {
        id: u64,
        action: LotteryAction,
    },
    /// Shutdown the network actor
    Shutdown,
}

/// Responses sent from Network layer to App layer.
///
/// Exactly one response is sent per `Execute`, whatever happens on the wire.
#[derive(Debug, Clone)]
pub enum NetworkResponse {
    /// A reply arrived and decoded
    Success {
        id: u64,
        action: LotteryAction,
        outcome: ActionOutcome,
        time_ms: u64,
    },
    /// The call failed or the reply did not decode
    Error {
        id: u64,
        action: LotteryAction,
        error: ActionError,
        time_ms: u64,
    },
}

impl NetworkResponse {
    pub fn from_result(
        id: u64,
        action: LotteryAction,
        result: Result<ActionOutcome, ActionError>,
        time_ms: u64,
    ) -> Self {
        match result {
            Ok(outcome) => NetworkResponse::Success {
                id,
                action,
                outcome,
                time_ms,
            },
            Err(error) => NetworkResponse::Error {
                id,
                action,
                error,
                time_ms,
            },
        }
    }

    /// Get the request ID from the response
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::Success { id, .. } => *id,
            NetworkResponse::Error { id, .. } => *id,
        }
    }

    pub fn action(&self) -> LotteryAction {
        match self {
            NetworkResponse::Success { action, .. } => *action,
            NetworkResponse::Error { action, .. } => *action,
        }
    }

    pub fn time_ms(&self) -> u64 {
        match self {
            NetworkResponse::Success { time_ms, .. } => *time_ms,
            NetworkResponse::Error { time_ms, .. } => *time_ms,
        }
    }

    pub fn into_result(self) -> Result<ActionOutcome, ActionError> {
        match self {
            NetworkResponse::Success { outcome, .. } => Ok(outcome),
            NetworkResponse::Error { error, .. } => Err(error),
        }
    }
}
