//! UI-ready view records for peer-to-peer atomic swap orders.
//!
//! The swap engine reports an order as the original request/response pair
//! plus an append-only log of lifecycle events. [`build_swap_view`] folds
//! one such bundle into a normalized record with a display status, a
//! progress fraction in `[0, 1]`, a localized status label and rounded
//! monetary amounts, ready for order lists and detail panels.
//!
//! Classification is stateless: every call re-derives the status from the
//! full event log, so re-invoking the builder on a fresh snapshot of the
//! log naturally advances the displayed state.

pub mod domain;
pub mod i18n;
pub mod view;

pub use domain::{
    EventBody, EventData, ExecutedAmounts, OrderType, QuoteAmounts, SwapDebug, SwapEngineData,
    SwapError, SwapEvent, SwapInput, SwapRequest, SwapResponse, SwapStatus, SwapView,
};
pub use i18n::{CatalogError, DomainTranslator, Translator};
pub use view::build_swap_view;
