use axum::{routing::post, Json, Router};
use radix_core::{
    api::{req::ConvertRequest, resp::ConvertResponse},
    convert::{convert, Format},
    error::ConvertError,
    http::ApiError,
};
use tracing::info;

pub fn routers() -> Router {
    Router::new().route("/convert", post(convert_number))
}

async fn convert_number(
    Json(req): Json<ConvertRequest>,
) -> Result<Json<ConvertResponse>, ApiError> {
    info!(
        "convert {} -> {}: {:?}",
        req.input_type, req.output_type, req.input
    );
    Ok(Json(convert_request(&req)))
}

/// Conversion failures go into the response envelope, not the HTTP
/// status, thin clients only look at the `error` key.
fn convert_request(req: &ConvertRequest) -> ConvertResponse {
    match try_convert(req) {
        Ok(result) => ConvertResponse::success(result),
        Err(e) => ConvertResponse::error(&e.to_string()),
    }
}

fn try_convert(req: &ConvertRequest) -> Result<String, ConvertError> {
    let from = Format::parse(&req.input_type).ok_or(ConvertError::InvalidInputType)?;
    let to = Format::parse(&req.output_type).ok_or(ConvertError::InvalidOutputType)?;

    convert(&req.input, from, to)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(input: &str, input_type: &str, output_type: &str) -> ConvertRequest {
        ConvertRequest {
            input: input.to_string(),
            input_type: input_type.to_string(),
            output_type: output_type.to_string(),
        }
    }

    #[test]
    fn test_convert_request_success() {
        let resp = convert_request(&request("42", "decimal", "binary"));
        assert_eq!(resp.result.as_deref(), Some("101010"));
        assert_eq!(resp.error, None);

        let resp = convert_request(&request("ff", "hexadecimal", "decimal"));
        assert_eq!(resp.result.as_deref(), Some("255"));

        let resp = convert_request(&request("five", "text", "decimal"));
        assert_eq!(resp.result.as_deref(), Some("5"));
    }

    #[test]
    fn test_convert_request_base64_round_trip() {
        let encoded = convert_request(&request("42", "decimal", "base64"));
        assert_eq!(encoded.error, None);

        let decoded = convert_request(&request(
            encoded.result.as_deref().unwrap(),
            "base64",
            "decimal",
        ));
        assert_eq!(decoded.result.as_deref(), Some("42"));
        assert_eq!(decoded.error, None);
    }

    #[test]
    fn test_convert_request_bad_types() {
        let resp = convert_request(&request("42", "invalid", "decimal"));
        assert_eq!(resp.result, None);
        assert_eq!(resp.error.as_deref(), Some("Invalid input type"));

        let resp = convert_request(&request("42", "decimal", "invalid"));
        assert_eq!(resp.result, None);
        assert_eq!(resp.error.as_deref(), Some("Invalid output type"));
    }

    #[test]
    fn test_convert_request_bad_values() {
        let resp = convert_request(&request("invalid@base64!", "base64", "decimal"));
        assert_eq!(resp.result, None);
        assert_eq!(resp.error.as_deref(), Some("Invalid base64 input"));

        let resp = convert_request(&request("eleven", "text", "decimal"));
        assert_eq!(resp.error.as_deref(), Some("Unable to convert text to number"));

        let resp = convert_request(&request("123", "binary", "decimal"));
        assert!(resp.error.unwrap().contains("base 2"));
    }

    #[test]
    fn test_convert_request_missing_data() {
        // an empty body deserializes to empty strings
        let resp = convert_request(&ConvertRequest::default());
        assert_eq!(resp.result, None);
        assert!(resp.error.is_some());
    }

    #[tokio::test]
    async fn test_convert_handler() -> anyhow::Result<()> {
        let Json(body) = convert_number(Json(request("101010", "binary", "decimal")))
            .await
            .map_err(|_| anyhow::anyhow!("handler returned an api error"))?;

        assert_eq!(body.result.as_deref(), Some("42"));
        assert_eq!(body.error, None);
        Ok(())
    }
}
