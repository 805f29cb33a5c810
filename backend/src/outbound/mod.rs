//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! This module follows the hexagonal architecture pattern: concrete
//! implementations of the domain port traits live here, and they convert
//! between domain types and infrastructure-specific representations without
//! carrying business logic.
//!
//! - **persistence**: visit store adapters.

pub mod persistence;
