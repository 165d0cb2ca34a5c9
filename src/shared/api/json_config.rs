use crate::shared::api::ApiResponse;
use actix_web::web::JsonConfig;

/// Malformed JSON bodies come back in the same envelope as every other
/// error instead of actix's default plain-text 400.
pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, _req| {
        let response = ApiResponse::bad_request("VALIDATION_ERROR", &err.to_string());
        actix_web::error::InternalError::from_response(err, response).into()
    })
}
