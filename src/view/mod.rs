//! Builds UI-ready view records from raw swap order data.
//!
//! The builder is a stateless classifier over the engine's event log: the
//! log itself is the authoritative state machine, and every call derives
//! the full display state from scratch. Callers re-invoke it on a fresh
//! snapshot whenever new events arrive.

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use crate::domain::{
    ExecutedAmounts, OrderType, QuoteAmounts, SwapDebug, SwapEngineData, SwapError, SwapEvent,
    SwapInput, SwapStatus, SwapView,
};
use crate::i18n::{DomainTranslator, Translator};

/// Event types that mark protocol bookkeeping rather than user-visible
/// progress.
const STRUCTURAL_EVENTS: [&str; 3] = ["Started", "Negotiated", "Finished"];

/// Share of the progress bar covered by the payment stages. Matching
/// accounts for the first 0.1; completion fills the rest.
const MAX_SWAP_PROGRESS: f64 = 0.8;

/// Progress shown once the order is matched but before any stage runs.
const MATCHED_PROGRESS: f64 = 0.1;

/// Translation catalog domain for swap order labels.
const LABEL_DOMAIN: &str = "swap";

/// Monetary amounts are displayed with 8 fractional digits.
const DISPLAY_DIGITS: u32 = 8;

/// Rounds a monetary amount for display. Midpoints round away from zero.
fn round_amount(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DISPLAY_DIGITS, RoundingStrategy::MidpointAwayFromZero)
}

/// Price of a fill, quote per base. A zero base amount has no
/// representable price and degrades to zero.
fn price_of(quote_amount: Decimal, base_amount: Decimal) -> Decimal {
    quote_amount.checked_div(base_amount).unwrap_or_default()
}

/// Outcome of classifying the event log.
struct Classification {
    status: SwapStatus,
    status_formatted: String,
    progress: f64,
    error: Option<SwapError>,
    total_stages: Vec<String>,
    stages: Vec<SwapEvent>,
}

/// Classifies the event log into a display status and progress fraction.
///
/// Precedence: failure beats completion beats in-progress beats matched
/// beats pending. Absent engine data leaves the order pending.
fn classify(swap_data: Option<&SwapEngineData>, t: DomainTranslator<'_>) -> Classification {
    let mut status = SwapStatus::Pending;
    let mut progress = 0.0;
    let mut error = None;
    let mut swapping_label = None;
    let mut total_stages = Vec::new();
    let mut stages = Vec::new();

    if let Some(data) = swap_data {
        let failed_event = data
            .events
            .iter()
            .find(|e| data.error_events.contains(&e.event.kind));

        // Expected stage vocabulary: the declared success events minus the
        // structural markers.
        total_stages = data
            .success_events
            .iter()
            .filter(|kind| !STRUCTURAL_EVENTS.contains(&kind.as_str()))
            .cloned()
            .collect();

        // Stages that have actually occurred. Event types outside the
        // declared vocabulary still count; engines emit extra non-terminal
        // progress events.
        stages = data
            .events
            .iter()
            .filter(|e| {
                !STRUCTURAL_EVENTS.contains(&e.event.kind.as_str())
                    && !data.error_events.contains(&e.event.kind)
            })
            .cloned()
            .collect();

        let is_finished =
            failed_event.is_none() && data.events.iter().any(|e| e.event.kind == "Finished");
        let is_swapping = failed_event.is_none() && !is_finished && !stages.is_empty();
        let newest_event = data.events.last();

        if let Some(failed) = failed_event {
            status = SwapStatus::Failed;
            progress = 1.0;
            error = Some(SwapError {
                code: Some(failed.event.kind.clone()),
                message: failed.event.data.as_ref().and_then(|d| d.error.clone()),
            });
        } else if is_finished {
            status = SwapStatus::Completed;
            progress = 1.0;
        } else if is_swapping {
            status = SwapStatus::Swapping;
            swapping_label = Some(format!("swap {}/{}", stages.len(), total_stages.len()));
            // An engine declaring no payment stages while emitting stage
            // events divides by zero here; the fraction stays a float so
            // the result is infinite rather than a panic.
            progress = MATCHED_PROGRESS
                + (stages.len() as f64 / total_stages.len() as f64) * MAX_SWAP_PROGRESS;
        } else if newest_event.is_some_and(|e| e.event.kind == "Negotiated") {
            status = SwapStatus::Matched;
            progress = MATCHED_PROGRESS;
        }
    }

    // The swapping branch builds its own literal "swap n/m" label; every
    // other status takes the localized one.
    let status_formatted =
        swapping_label.unwrap_or_else(|| t.get(status.label_key()).to_lowercase());

    Classification {
        status,
        status_formatted,
        progress,
        error,
        total_stages,
        stages,
    }
}

/// Builds the UI-ready record for one swap order.
///
/// `app_time_started` is the instant the hosting process started. Orders
/// still pending from before it will never be reported on again and are
/// shown as cancelled.
///
/// Total over structurally valid input: absent engine data and missing
/// optional fields branch instead of failing, and failure details surface
/// in the record's `error` field.
pub fn build_swap_view(
    input: &SwapInput,
    app_time_started: DateTime<Utc>,
    translator: &Translator,
) -> SwapView {
    let t = translator.domain(LABEL_DOMAIN);
    let response = &input.response;

    let matched = QuoteAmounts {
        base_currency_amount: round_amount(response.base_amount),
        quote_currency_amount: round_amount(response.quote_amount),
        price: round_amount(price_of(response.quote_amount, response.base_amount)),
    };
    let requested = QuoteAmounts {
        base_currency_amount: round_amount(input.request.amount),
        quote_currency_amount: round_amount(input.request.total),
        price: round_amount(input.request.price),
    };

    let mut classification = classify(input.swap_data.as_ref(), t);

    // Orders left pending by a previous session are dead: the engine only
    // reports on swaps it started. Progress stays at zero.
    if classification.status == SwapStatus::Pending && input.time_started < app_time_started {
        classification.status = SwapStatus::Failed;
        classification.error = Some(SwapError::default());
        classification.status_formatted = t.get("status.cancelled").to_lowercase();
    }

    debug!(
        uuid = %input.uuid,
        status = %classification.status,
        progress = classification.progress,
        "classified swap order"
    );

    SwapView {
        uuid: input.uuid.clone(),
        time_started: input.time_started,
        order_type: OrderType::from_action(&response.action),
        status: classification.status,
        status_formatted: classification.status_formatted,
        error: classification.error,
        progress: classification.progress,
        base_currency: response.base.clone(),
        quote_currency: response.rel.clone(),
        base_currency_amount: matched.base_currency_amount,
        quote_currency_amount: matched.quote_currency_amount,
        price: matched.price,
        requested,
        broadcast: matched,
        executed: ExecutedAmounts::default(),
        total_stages: classification.total_stages,
        stages: classification.stages,
        debug: SwapDebug {
            request: input.request.clone(),
            response: input.response.clone(),
            swap_data: input.swap_data.clone(),
        },
    }
}
