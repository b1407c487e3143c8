// ============================================================================
// Order Domain - Business Logic for the Order Aggregate
// ============================================================================
//
// This module contains ALL Order-specific code:
// - Value objects (OrderLine, OrderStatus, Order)
// - Events (OrderEvent, ChangeReason)
// - Errors (OrderError enum)
// - Lifecycle service (OrderService with business logic)
//
// This is completely separate from the generic event sourcing infrastructure
// and from the messaging adapters.
//
// ============================================================================

pub mod value_objects;
pub mod events;
pub mod errors;
pub mod service;

// Re-export for convenience
pub use value_objects::*;
pub use events::*;
pub use errors::*;
pub use service::*;
