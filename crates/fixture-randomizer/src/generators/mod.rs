//! Per-family generation helpers used by the dispatch engine.
//!
//! Simple kinds are drawn inline in the dispatch match; the draws that
//! need more than a plain sample live here.

pub mod numeric;
pub mod temporal;
