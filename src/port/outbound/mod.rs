//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe the data providers the pipeline reads from.
//! Both are fully resolved before any rating or edge computation runs.

pub mod odds;
pub mod results;
