//! Tests for the wire contract and status helpers.

use super::*;
use crate::i18n::Translator;
use crate::view::build_swap_view;
use chrono::{TimeZone, Utc};

// ==================== Wire contract tests ====================

const ENGINE_JSON: &str = r#"
{
    "uuid": "5acb0e63-8b26-469e-81df-0c64589bb5cd",
    "timeStarted": 1700000000000,
    "request": {
        "amount": "1",
        "total": "100",
        "price": "100"
    },
    "response": {
        "action": "Buy",
        "base": "BTC",
        "rel": "USD",
        "baseAmount": "1",
        "quoteAmount": "100"
    },
    "swapData": {
        "events": [
            {"event": {"type": "Started"}},
            {"event": {"type": "TakerPaymentFailed", "data": {"error": "timeout"}}}
        ],
        "error_events": ["TakerPaymentFailed"],
        "success_events": ["Started", "Negotiated", "TakerFeeSent", "Finished"]
    }
}
"#;

#[test]
fn test_swap_input_from_engine_json() {
    let input: SwapInput = serde_json::from_str(ENGINE_JSON).unwrap();

    assert_eq!(input.uuid, "5acb0e63-8b26-469e-81df-0c64589bb5cd");
    assert_eq!(
        input.time_started,
        Utc.timestamp_millis_opt(1_700_000_000_000).unwrap()
    );
    assert_eq!(input.response.action, "Buy");
    assert_eq!(input.response.base, "BTC");
    assert_eq!(input.response.rel, "USD");

    let data = input.swap_data.expect("swapData should be present");
    assert_eq!(data.events.len(), 2);
    assert_eq!(data.events[0].event.kind, "Started");
    assert_eq!(data.events[0].event.data, None);
    assert_eq!(
        data.events[1]
            .event
            .data
            .as_ref()
            .and_then(|d| d.error.as_deref()),
        Some("timeout")
    );
    assert_eq!(data.error_events, vec!["TakerPaymentFailed"]);
    assert_eq!(data.success_events.len(), 4);
}

#[test]
fn test_swap_input_without_swap_data() {
    let json = r#"
{
    "uuid": "a",
    "timeStarted": 0,
    "request": {"amount": "1", "total": "2", "price": "2"},
    "response": {"action": "Sell", "base": "KMD", "rel": "BTC", "baseAmount": "1", "quoteAmount": "2"}
}
"#;
    let input: SwapInput = serde_json::from_str(json).unwrap();

    assert_eq!(input.swap_data, None);
}

#[test]
fn test_swap_view_serializes_for_the_ui() {
    let input: SwapInput = serde_json::from_str(ENGINE_JSON).unwrap();
    let app_started = Utc.timestamp_millis_opt(1_600_000_000_000).unwrap();
    let view = build_swap_view(&input, app_started, &Translator::default());

    let value = serde_json::to_value(&view).unwrap();

    assert_eq!(value["uuid"], "5acb0e63-8b26-469e-81df-0c64589bb5cd");
    assert_eq!(value["timeStarted"], 1_700_000_000_000_i64);
    assert_eq!(value["orderType"], "buy");
    assert_eq!(value["status"], "failed");
    assert_eq!(value["statusFormatted"], "failed");
    assert_eq!(value["error"]["code"], "TakerPaymentFailed");
    assert_eq!(value["error"]["message"], "timeout");
    assert_eq!(value["baseCurrency"], "BTC");
    assert_eq!(value["quoteCurrency"], "USD");
    assert_eq!(value["requested"]["baseCurrencyAmount"], "1");
    assert_eq!(value["broadcast"]["price"], "100");
    assert_eq!(value["executed"]["percentCheaperThanRequested"], serde_json::Value::Null);
    assert_eq!(value["totalStages"], serde_json::json!(["TakerFeeSent"]));
    assert!(value["_debug"]["swapData"].is_object());
}

// ==================== Status helper tests ====================

#[test]
fn test_order_type_from_action_buy() {
    assert_eq!(OrderType::from_action("Buy"), OrderType::Buy);
}

#[test]
fn test_order_type_from_action_sell() {
    assert_eq!(OrderType::from_action("Sell"), OrderType::Sell);
}

#[test]
fn test_order_type_from_action_unknown_is_sell() {
    assert_eq!(OrderType::from_action("bid"), OrderType::Sell);
}

#[test]
fn test_terminal_statuses() {
    assert!(SwapStatus::Completed.is_terminal());
    assert!(SwapStatus::Failed.is_terminal());
    assert!(!SwapStatus::Pending.is_terminal());
    assert!(!SwapStatus::Matched.is_terminal());
    assert!(!SwapStatus::Swapping.is_terminal());
}

#[test]
fn test_pending_label_key_is_open() {
    assert_eq!(SwapStatus::Pending.label_key(), "status.open");
}

#[test]
fn test_status_display_is_lowercase() {
    assert_eq!(SwapStatus::Swapping.to_string(), "swapping");
    assert_eq!(SwapStatus::Failed.to_string(), "failed");
}
