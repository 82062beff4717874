use axum::Json;
use axum::http::StatusCode;

use crate::api::models::DescriptionResult;

pub const USAGE: &str =
    "Add /description?name=<name>&lang=<lang> in your browser, such that name and language are query parameters\n";

pub fn success(name: String, desc: String) -> (StatusCode, Json<DescriptionResult>) {
    (StatusCode::OK, Json(DescriptionResult { name, desc }))
}
