//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers:
//!
//! - **Paths**: All HTTP endpoints from the inbound layer (visits, health)
//! - **Schemas**: Domain type wrappers ([`ErrorSchema`], [`ErrorCodeSchema`],
//!   [`VisitSchema`]) that provide OpenAPI definitions without coupling domain
//!   types to the utoipa framework, plus the request and response payloads
//!
//! The generated specification is used by Swagger UI (debug builds) and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema, VisitSchema};
use crate::inbound::http::visits::{CreateVisitRequestBody, VisitsResponseBody};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Visits service API",
        description = "HTTP interface for recording and listing veterinary visits.",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0.html"
        )
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::visits::create_visit,
        crate::inbound::http::visits::list_visits,
        crate::inbound::http::visits::list_visits_for_pets,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        VisitSchema,
        ErrorSchema,
        ErrorCodeSchema,
        CreateVisitRequestBody,
        VisitsResponseBody
    )),
    tags(
        (name = "visits", description = "Operations related to pet visits"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
