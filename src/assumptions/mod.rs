//! Return-rate assumptions derived from the caller's risk profile

mod returns;

pub use returns::{ReturnRates, RiskProfile};
