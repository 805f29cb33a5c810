//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::sync::Arc;

use crate::domain::ports::VisitStore;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) store: Option<Arc<dyn VisitStore>>,
}

impl ServerConfig {
    /// Construct a server configuration for the given listen address.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            store: None,
        }
    }

    /// Attach a visit store for the persistence port.
    ///
    /// When omitted, the server falls back to the in-memory store, which
    /// keeps local runs and tests self-contained.
    #[must_use]
    pub fn with_store(mut self, store: Arc<dyn VisitStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
