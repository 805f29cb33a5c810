//! Persistence adapters implementing the visit store port.
//!
//! Adapters are thin translators between domain types and storage
//! representations; no business logic resides here. The bundled adapter is
//! in-memory, which keeps the binary free-standing. Database-backed
//! adapters plug in behind the same port.

mod memory;

pub use memory::InMemoryVisitStore;
