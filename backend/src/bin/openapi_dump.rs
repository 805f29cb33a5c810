//! Print the OpenAPI document as JSON.

use utoipa::OpenApi;
use visits_service::doc::ApiDoc;

fn main() {
    println!("{}", ApiDoc::openapi().to_json().unwrap());
}
