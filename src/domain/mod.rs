// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// This module contains domain-specific business logic.
// The order aggregate has its own subdirectory with:
// - Value objects
// - Events
// - Errors
// - Lifecycle service
//
// This layer is completely separate from the event sourcing infrastructure.
//
// ============================================================================

pub mod order;
