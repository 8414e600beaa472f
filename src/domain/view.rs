//! Derived, UI-ready view records for swap orders.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use super::swap::{SwapEngineData, SwapEvent, SwapRequest, SwapResponse};

/// OrderType represents the direction of an order from the user's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    /// OrderTypeBuy indicates the user buys the base currency.
    Buy,
    /// OrderTypeSell indicates the user sells the base currency.
    Sell,
}

impl OrderType {
    /// Maps the engine's action string; anything other than "Buy" sells.
    pub fn from_action(action: &str) -> Self {
        match action {
            "Buy" => OrderType::Buy,
            _ => OrderType::Sell,
        }
    }
}

/// SwapStatus represents the display state of a swap order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SwapStatus {
    /// Placed but not yet matched with a counterparty.
    Pending,
    /// Matched; payment stages have not started yet.
    Matched,
    /// Payment stages are executing.
    Swapping,
    /// All stages finished successfully.
    Completed,
    /// A stage failed, or the order was abandoned in a previous session.
    Failed,
}

impl SwapStatus {
    /// Returns true when no further engine updates can change the status.
    pub fn is_terminal(&self) -> bool {
        matches!(self, SwapStatus::Completed | SwapStatus::Failed)
    }

    /// Translation key for the human-readable label of this status.
    ///
    /// Pending orders are labelled "open" in the UI.
    pub fn label_key(&self) -> &'static str {
        match self {
            SwapStatus::Pending => "status.open",
            SwapStatus::Matched => "status.matched",
            SwapStatus::Swapping => "status.swapping",
            SwapStatus::Completed => "status.completed",
            SwapStatus::Failed => "status.failed",
        }
    }
}

impl std::fmt::Display for SwapStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SwapStatus::Pending => "pending",
            SwapStatus::Matched => "matched",
            SwapStatus::Swapping => "swapping",
            SwapStatus::Completed => "completed",
            SwapStatus::Failed => "failed",
        };
        write!(f, "{}", name)
    }
}

/// SwapError carries failure details surfaced to the UI.
///
/// Both fields are absent for orders cancelled across sessions: there is
/// no engine event to quote.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SwapError {
    /// Type name of the failing event.
    pub code: Option<String>,
    /// Error description attached by the engine.
    pub message: Option<String>,
}

/// QuoteAmounts is one (base, quote, price) triple, rounded for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteAmounts {
    pub base_currency_amount: Decimal,
    pub quote_currency_amount: Decimal,
    pub price: Decimal,
}

/// ExecutedAmounts describes what actually settled. Populated by the
/// execution tracker, never by the view builder.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutedAmounts {
    pub base_currency_amount: Option<Decimal>,
    pub quote_currency_amount: Option<Decimal>,
    pub price: Option<Decimal>,
    pub percent_cheaper_than_requested: Option<Decimal>,
}

/// SwapDebug retains the raw inputs for diagnostics. Not part of the
/// display contract.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapDebug {
    pub request: SwapRequest,
    pub response: SwapResponse,
    pub swap_data: Option<SwapEngineData>,
}

/// SwapView is the normalized, UI-ready record for one swap order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapView {
    /// Unique identifier assigned by the engine.
    pub uuid: String,
    /// When the order was placed.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub time_started: DateTime<Utc>,
    /// Buy or sell, from the user's side.
    pub order_type: OrderType,
    /// Display state derived from the event log.
    pub status: SwapStatus,
    /// Localized, lower-cased label for the status.
    pub status_formatted: String,
    /// Failure details; None while the order is healthy.
    pub error: Option<SwapError>,
    /// Display progress in [0, 1].
    pub progress: f64,
    /// Base currency symbol.
    pub base_currency: String,
    /// Quote currency symbol.
    pub quote_currency: String,
    /// Matched amount of base currency, rounded to 8 digits.
    pub base_currency_amount: Decimal,
    /// Matched amount of quote currency, rounded to 8 digits.
    pub quote_currency_amount: Decimal,
    /// Matched price, quote per base, rounded to 8 digits.
    pub price: Decimal,
    /// What the user originally asked for.
    pub requested: QuoteAmounts,
    /// Snapshot of the matched amounts as broadcast. Stable even if the
    /// top-level amounts are later overwritten by the execution tracker.
    pub broadcast: QuoteAmounts,
    /// What actually settled; unset here.
    pub executed: ExecutedAmounts,
    /// Expected progress-bearing stage names, in engine order.
    pub total_stages: Vec<String>,
    /// Progress-bearing events that have occurred so far.
    pub stages: Vec<SwapEvent>,
    #[serde(rename = "_debug")]
    pub debug: SwapDebug,
}

impl SwapView {
    /// Returns true while the order can still change state.
    ///
    /// Computed from the current status on every call, so it stays
    /// correct if a caller reassigns `status`.
    pub fn is_active(&self) -> bool {
        !self.status.is_terminal()
    }
}
