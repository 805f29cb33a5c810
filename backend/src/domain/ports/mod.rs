//! Domain ports and supporting types for the hexagonal boundary.

mod visit_store;

#[cfg(test)]
pub use visit_store::MockVisitStore;
pub use visit_store::{FixtureVisitStore, VisitStore, VisitStoreError};
