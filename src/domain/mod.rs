//! Core entities for swap orders and their derived view records.

mod swap;
mod view;

pub use swap::{
    EventBody, EventData, SwapEngineData, SwapEvent, SwapInput, SwapRequest, SwapResponse,
};
pub use view::{
    ExecutedAmounts, OrderType, QuoteAmounts, SwapDebug, SwapError, SwapStatus, SwapView,
};

#[cfg(test)]
mod tests;
