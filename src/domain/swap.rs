//! Raw swap order data as reported by the swap engine.
//!
//! Field names and nesting mirror the engine's wire format: camelCase at
//! the top level, snake_case inside the engine payload.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// SwapRequest holds the trade terms the user originally asked for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwapRequest {
    /// Amount of base currency requested.
    pub amount: Decimal,
    /// Total quote currency value requested.
    pub total: Decimal,
    /// Requested price per unit of base currency.
    pub price: Decimal,
}

/// SwapResponse holds the terms the engine actually matched and broadcast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapResponse {
    /// Order direction as reported by the engine ("Buy" or "Sell").
    pub action: String,
    /// Base currency symbol (e.g., "BTC").
    pub base: String,
    /// Quote currency symbol (e.g., "USD").
    pub rel: String,
    /// Matched amount of base currency.
    pub base_amount: Decimal,
    /// Matched amount of quote currency.
    pub quote_amount: Decimal,
}

/// EventData is the optional payload attached to a lifecycle event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventData {
    /// Error description attached by the engine to failure events.
    pub error: Option<String>,
}

/// EventBody is a single lifecycle notification from the swap engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventBody {
    /// Event type name (e.g., "TakerFeeSent", "Finished").
    #[serde(rename = "type")]
    pub kind: String,
    /// Payload; present on failure events.
    pub data: Option<EventData>,
}

/// SwapEvent wraps one entry of the engine's append-only event log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwapEvent {
    pub event: EventBody,
}

/// SwapEngineData is everything the engine has reported about a running
/// swap so far.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwapEngineData {
    /// Lifecycle events in chronological order; later entries are newer.
    pub events: Vec<SwapEvent>,
    /// Event type names that denote terminal failure.
    pub error_events: Vec<String>,
    /// Event type names that denote success, including the structural
    /// markers Started, Negotiated and Finished.
    pub success_events: Vec<String>,
}

/// SwapInput is the full raw bundle for one swap order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapInput {
    /// Unique identifier assigned by the engine.
    pub uuid: String,
    /// When the order was placed, in epoch milliseconds on the wire.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub time_started: DateTime<Utc>,
    /// The originally requested trade terms.
    pub request: SwapRequest,
    /// The terms the engine matched and broadcast.
    pub response: SwapResponse,
    /// Engine progress data; absent until the engine first reports.
    pub swap_data: Option<SwapEngineData>,
}
