// ============================================================================
// Event Sourcing Infrastructure
// ============================================================================
//
// Append-only, in-memory event log for the order aggregate.
// Domain-specific business rules live in src/domain/ - this module only
// knows how to append events and derive the current projection.
//
// ============================================================================

mod event_log;

pub use event_log::OrderEventLog;
