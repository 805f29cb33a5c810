//! Domain primitives and aggregates.
//!
//! Purpose: Define strongly typed domain entities used by the API and
//! persistence layers. Keep types immutable and document invariants and
//! serialisation contracts (serde) in each type's Rustdoc.
//!
//! Public surface:
//! - `Error` / `ErrorCode`: API error response payload and its stable codes.
//! - `Visit` / `NewVisit`: persisted and yet-to-be-persisted appointment
//!   records.
//! - `TraceId`: request-scoped correlation identifier.
//! - `ports`: hexagonal boundary traits, currently the visit store.

pub mod error;
pub mod ports;
pub mod trace_id;
pub mod visit;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::visit::{NewVisit, Visit, VisitValidationError};
