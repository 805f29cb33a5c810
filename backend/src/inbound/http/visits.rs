//! Visit HTTP handlers.
//!
//! Exposes the visit endpoints: recording a visit for a pet, listing the
//! visits of a single pet, and listing the visits of several pets at once.
//! The owner segment in the nested routes is accepted for URL compatibility
//! but never interpreted; the pet identifier alone scopes a visit.

use actix_web::{HttpRequest, HttpResponse, get, post, web};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{error, info};
use url::form_urlencoded;
use utoipa::ToSchema;

use crate::domain::ports::VisitStoreError;
use crate::domain::{Error, NewVisit, Visit, VisitValidationError};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, VisitSchema};
use crate::inbound::http::state::HttpState;

/// Fixed client-facing message for store failures. The underlying cause is
/// logged and surfaced only under `details.cause`, never as the message.
const DATABASE_ERROR: &str = "Database error";

/// Query parameter carrying a pet identifier in the multi-pet listing.
const PET_ID_PARAM: &str = "petId";

/// Request payload for recording a visit.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateVisitRequestBody {
    /// Calendar date of the appointment as an ISO `YYYY-MM-DD` string.
    pub date: Option<String>,
    /// Free-text description of the appointment.
    pub description: Option<String>,
    /// Accepted for wire compatibility; the path segment always wins.
    pub pet_id: Option<i32>,
}

/// Response payload for the multi-pet visit listing.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VisitsResponseBody {
    /// Visits for the requested pets, in store order.
    #[schema(value_type = Vec<VisitSchema>)]
    pub items: Vec<Visit>,
}

/// Path parameters for the nested visit routes. The `owner_id` segment is
/// deliberately not bound; only the pet identifier is used.
#[derive(Debug, Deserialize)]
struct VisitPath {
    pet_id: String,
}

fn invalid_pet_id_error(value: &str, code: &str) -> Error {
    Error::invalid_input("Invalid pet ID").with_details(json!({
        "field": "petId",
        "value": value,
        "code": code,
    }))
}

fn parse_pet_id(raw: &str) -> Result<i32, Error> {
    let Ok(pet_id) = raw.parse::<i32>() else {
        return Err(invalid_pet_id_error(raw, "malformed_pet_id"));
    };
    if pet_id < 1 {
        return Err(invalid_pet_id_error(raw, "non_positive_pet_id"));
    }
    Ok(pet_id)
}

fn parse_visit_date(raw: Option<String>) -> Result<Option<NaiveDate>, Error> {
    raw.map(|value| {
        NaiveDate::parse_from_str(&value, "%Y-%m-%d").map_err(|_| {
            Error::invalid_input("date must be an ISO calendar date").with_details(json!({
                "field": "date",
                "value": value,
                "code": "invalid_date",
            }))
        })
    })
    .transpose()
}

/// Collects every `petId` query value in request order. Absent or empty
/// queries yield an empty list rather than an error.
fn parse_pet_ids(request: &HttpRequest) -> Result<Vec<i32>, Error> {
    form_urlencoded::parse(request.query_string().as_bytes())
        .filter(|(key, _)| key == PET_ID_PARAM)
        .map(|(_, value)| {
            value
                .parse::<i32>()
                .map_err(|_| invalid_pet_id_error(value.as_ref(), "malformed_pet_id"))
        })
        .collect()
}

fn map_visit_validation_error(err: VisitValidationError) -> Error {
    match err {
        VisitValidationError::InvalidPetId => Error::invalid_input("Invalid pet ID")
            .with_details(json!({ "field": "petId", "code": "non_positive_pet_id" })),
        VisitValidationError::MissingDate => Error::invalid_input("Visit date is required")
            .with_details(json!({ "field": "date", "code": "missing_date" })),
        VisitValidationError::MissingDescription => {
            Error::invalid_input("Visit description is required")
                .with_details(json!({ "field": "description", "code": "missing_description" }))
        }
    }
}

fn store_failure(err: &VisitStoreError) -> Error {
    let cause = err.to_string();
    let error = Error::upstream_failure(DATABASE_ERROR);
    if cause.trim().is_empty() {
        error
    } else {
        error.with_details(json!({ "cause": cause }))
    }
}

fn map_save_error(pet_id: i32, err: &VisitStoreError) -> Error {
    error!(pet_id, error = %err, "failed to save visit");
    store_failure(err)
}

fn map_list_error(pet_id: i32, err: &VisitStoreError) -> Error {
    error!(pet_id, error = %err, "failed to list visits for pet");
    store_failure(err)
}

fn map_list_many_error(pet_ids: &[i32], err: &VisitStoreError) -> Error {
    error!(?pet_ids, error = %err, "failed to list visits for pets");
    store_failure(err)
}

/// Records a visit for the pet named in the path.
///
/// Validation is fail-fast: the pet identifier is checked first, then the
/// date, then the description. Any pet identifier in the payload is
/// discarded in favour of the path value.
#[utoipa::path(
    post,
    path = "/owners/{owner_id}/pets/{pet_id}/visits",
    request_body = CreateVisitRequestBody,
    params(
        ("owner_id" = String, Path, description = "Owner identifier; accepted but not interpreted"),
        ("pet_id" = i32, Path, description = "Positive pet identifier")
    ),
    responses(
        (status = 201, description = "Visit recorded", body = VisitSchema),
        (status = 400, description = "Invalid pet identifier or visit payload", body = ErrorSchema),
        (status = 500, description = "Visit store unavailable", body = ErrorSchema)
    ),
    tags = ["visits"],
    operation_id = "createVisit"
)]
#[post("/owners/{owner_id}/pets/{pet_id}/visits")]
pub async fn create_visit(
    state: web::Data<HttpState>,
    path: web::Path<VisitPath>,
    payload: web::Json<CreateVisitRequestBody>,
) -> ApiResult<HttpResponse> {
    let pet_id = parse_pet_id(&path.pet_id)?;
    let CreateVisitRequestBody {
        date, description, ..
    } = payload.into_inner();
    let date = parse_visit_date(date)?;
    let visit = NewVisit::new(pet_id, date, description).map_err(map_visit_validation_error)?;

    info!(pet_id, "saving visit");
    let saved = state
        .visits
        .save(visit)
        .await
        .map_err(|err| map_save_error(pet_id, &err))?;

    Ok(HttpResponse::Created().json(saved))
}

/// Lists the visits recorded for the pet named in the path.
#[utoipa::path(
    get,
    path = "/owners/{owner_id}/pets/{pet_id}/visits",
    params(
        ("owner_id" = String, Path, description = "Owner identifier; accepted but not interpreted"),
        ("pet_id" = i32, Path, description = "Positive pet identifier")
    ),
    responses(
        (status = 200, description = "Visits for the pet, oldest first", body = [VisitSchema]),
        (status = 400, description = "Invalid pet identifier", body = ErrorSchema),
        (status = 500, description = "Visit store unavailable", body = ErrorSchema)
    ),
    tags = ["visits"],
    operation_id = "listVisits"
)]
#[get("/owners/{owner_id}/pets/{pet_id}/visits")]
pub async fn list_visits(
    state: web::Data<HttpState>,
    path: web::Path<VisitPath>,
) -> ApiResult<web::Json<Vec<Visit>>> {
    let pet_id = parse_pet_id(&path.pet_id)?;
    let visits = state
        .visits
        .find_by_pet_id(pet_id)
        .await
        .map_err(|err| map_list_error(pet_id, &err))?;

    Ok(web::Json(visits))
}

/// Lists the visits recorded for every pet named in the `petId` query
/// parameters. Pets without visits simply contribute nothing; an absent
/// query yields an empty collection.
#[utoipa::path(
    get,
    path = "/pets/visits",
    params(
        ("petId" = Vec<i32>, Query, description = "Pet identifiers, repeated per pet")
    ),
    responses(
        (status = 200, description = "Visits for the requested pets", body = VisitsResponseBody),
        (status = 400, description = "Malformed pet identifier", body = ErrorSchema),
        (status = 500, description = "Visit store unavailable", body = ErrorSchema)
    ),
    tags = ["visits"],
    operation_id = "listVisitsForPets"
)]
#[get("/pets/visits")]
pub async fn list_visits_for_pets(
    state: web::Data<HttpState>,
    request: HttpRequest,
) -> ApiResult<web::Json<VisitsResponseBody>> {
    let pet_ids = parse_pet_ids(&request)?;
    let items = state
        .visits
        .find_by_pet_id_in(pet_ids.clone())
        .await
        .map_err(|err| map_list_many_error(&pet_ids, &err))?;

    Ok(web::Json(VisitsResponseBody { items }))
}

#[cfg(test)]
#[path = "visits_tests.rs"]
mod tests;
