//! Inbound adapters that translate external requests into domain calls while
//! keeping framework details at the edge.
//!
//! HTTP handlers live under [`http`]; any future inbound transport is
//! expected to sit alongside it.

pub mod http;
