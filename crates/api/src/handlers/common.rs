use serde::Serialize;
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use crate::validation::ValidationError;

/// Error body shared by handlers, shaped like the validator's native
/// error payloads so clients can match on `code`
#[derive(Debug, Serialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
	pub status_code: u16,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub code: Option<String>,
	pub error: String,
	pub message: String,
}

impl ErrorBody {
	pub fn validation(error: ValidationError) -> Self {
		Self {
			status_code: 400,
			code: Some("FST_ERR_VALIDATION".to_string()),
			error: "Bad Request".to_string(),
			message: error.message,
		}
	}

	pub fn internal(message: String) -> Self {
		Self {
			status_code: 500,
			code: None,
			error: "Internal Server Error".to_string(),
			message,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn validation_body_matches_the_wire_contract() {
		let body = ErrorBody::validation(ValidationError {
			message: "querystring must have required property 'tokenIn'".to_string(),
		});
		let json = serde_json::to_value(&body).unwrap();
		assert_eq!(json["statusCode"], 400);
		assert_eq!(json["code"], "FST_ERR_VALIDATION");
		assert_eq!(json["error"], "Bad Request");
		assert_eq!(
			json["message"],
			"querystring must have required property 'tokenIn'"
		);
	}

	#[test]
	fn internal_body_omits_the_code_field() {
		let json = serde_json::to_value(ErrorBody::internal("boom".to_string())).unwrap();
		assert_eq!(json["statusCode"], 500);
		assert!(json.get("code").is_none());
		assert_eq!(json["error"], "Internal Server Error");
	}
}
