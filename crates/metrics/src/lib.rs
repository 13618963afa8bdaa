//! Snapshot aggregation: one pass over equipment and one over maintenance
//! logs, producing the four-grouping [`activa_types::MetricsBundle`].

mod aggregate;

pub use aggregate::aggregate;
