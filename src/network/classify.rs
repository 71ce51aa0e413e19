//! Mapping of provider failures onto the chain-read error taxonomy

use alloy::transports::{RpcError, TransportError, TransportErrorKind};
use crate::errors::QueryError;

/// Codes nodes return for "historical state is not available" or "state is pruned"
pub const HISTORICAL_STATE_ERROR_CODES: &[i64] = &[-32000, -32603];

/// Codes some providers use in-band for request throttling
pub const RATE_LIMIT_ERROR_CODES: &[i64] = &[429, -32005];

pub fn classify_transport_error(error: TransportError) -> QueryError {
    let message = error.to_string();

    if is_rate_limited(&error, &message) {
        return QueryError::RateLimited(message);
    }

    if let Some(payload) = error.as_error_resp() {
        if HISTORICAL_STATE_ERROR_CODES.contains(&payload.code) {
            return QueryError::StateUnavailable {
                code: payload.code,
                message: payload.message.to_string(),
            };
        }
    }

    QueryError::Rpc(message)
}

fn is_rate_limited(error: &TransportError, message: &str) -> bool {
    if let RpcError::Transport(TransportErrorKind::HttpError(http)) = error {
        if http.status == 429 {
            return true;
        }
    }

    if let Some(payload) = error.as_error_resp() {
        if RATE_LIMIT_ERROR_CODES.contains(&payload.code) {
            return true;
        }
    }

    message.contains("Too Many Requests") || message.to_lowercase().contains("rate limit")
}
