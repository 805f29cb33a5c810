//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::VisitStore;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub visits: Arc<dyn VisitStore>,
}

impl HttpState {
    /// Construct state around a visit store implementation.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use visits_service::domain::ports::FixtureVisitStore;
    /// use visits_service::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(Arc::new(FixtureVisitStore));
    /// let _visits = state.visits.clone();
    /// ```
    pub fn new(visits: Arc<dyn VisitStore>) -> Self {
        Self { visits }
    }
}
