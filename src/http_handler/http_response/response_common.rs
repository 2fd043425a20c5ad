use crate::http_handler::common::ResponseError;
use reqwest::StatusCode;

/// Shape of the body the backend attaches to rejected requests.
#[derive(Debug, serde::Deserialize)]
struct RejectionBody {
    #[serde(default)]
    error: Option<String>,
}

pub(crate) trait HTTPResponseType {
    type ParsedResponseType;

    fn parse_body(body: &[u8]) -> Result<Self::ParsedResponseType, ResponseError>;

    fn read_response(
        status: StatusCode,
        body: &[u8],
    ) -> Result<Self::ParsedResponseType, ResponseError> {
        Self::unwrap_return_code(status, body)?;
        Self::parse_body(body)
    }

    /// Maps any non-2xx status to an error. The body is only used to pick up
    /// the backend's `error` text; an unreadable body still yields an error.
    fn unwrap_return_code(status: StatusCode, body: &[u8]) -> Result<(), ResponseError> {
        if status.is_success() {
            return Ok(());
        }
        let status = status.as_u16();
        match serde_json::from_slice::<RejectionBody>(body).ok().and_then(|b| b.error) {
            Some(message) => Err(ResponseError::Rejected { status, message }),
            None => Err(ResponseError::Unsuccessful { status }),
        }
    }
}

/// Marker for responses whose body is parsed strictly with serde.
pub(crate) trait SerdeJSONBodyHTTPResponseType {}

impl<T> HTTPResponseType for T
where
    T: SerdeJSONBodyHTTPResponseType,
    for<'de> T: serde::Deserialize<'de>,
{
    type ParsedResponseType = T;

    fn parse_body(body: &[u8]) -> Result<Self::ParsedResponseType, ResponseError> {
        Ok(serde_json::from_slice::<T>(body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http_handler::http_response::{flight_list::FlightListResponse, message::MessageResponse};

    #[test]
    fn test_rejection_carries_error_text() {
        let err = MessageResponse::read_response(StatusCode::NOT_FOUND, br#"{"error":"not found"}"#)
            .unwrap_err();
        assert_eq!(err, ResponseError::Rejected { status: 404, message: "not found".into() });
    }

    #[test]
    fn test_rejection_without_readable_body() {
        let err = MessageResponse::read_response(StatusCode::INTERNAL_SERVER_ERROR, b"<html>oops</html>")
            .unwrap_err();
        assert_eq!(err, ResponseError::Unsuccessful { status: 500 });
    }

    #[test]
    fn test_flight_list_must_be_an_array() {
        let err = FlightListResponse::read_response(StatusCode::OK, br#"{"flights":[]}"#).unwrap_err();
        assert!(matches!(err, ResponseError::Malformed { .. }));
        let err = FlightListResponse::read_response(StatusCode::OK, b"").unwrap_err();
        assert!(matches!(err, ResponseError::Malformed { .. }));
    }
}
