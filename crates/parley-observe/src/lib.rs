//! Observability setup for Parley: structured logging through `tracing`,
//! with an optional OpenTelemetry bridge.

pub mod tracing_setup;
