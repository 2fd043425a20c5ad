use crate::http_handler::common::ResponseError;
use crate::http_handler::http_response::response_common::HTTPResponseType;

/// Optional `{message}` body returned by mutating endpoints on success.
///
/// Parsing is lenient: the body is informational only, so an empty or
/// non-JSON 2xx body yields an empty response instead of an error.
#[derive(serde::Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageResponse {
    #[serde(default)]
    message: Option<String>,
}

impl MessageResponse {
    pub fn message(&self) -> Option<&str> { self.message.as_deref() }
}

impl HTTPResponseType for MessageResponse {
    type ParsedResponseType = MessageResponse;

    fn parse_body(body: &[u8]) -> Result<Self::ParsedResponseType, ResponseError> {
        Ok(serde_json::from_slice(body).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_message_is_optional() {
        let parsed = MessageResponse::read_response(StatusCode::OK, br#"{"message":"Flight added"}"#).unwrap();
        assert_eq!(parsed.message(), Some("Flight added"));
        let mixed = MessageResponse::read_response(StatusCode::OK, br#"{"error":null,"count":3}"#).unwrap();
        assert_eq!(mixed, MessageResponse::default());

        let empty = MessageResponse::read_response(StatusCode::NO_CONTENT, b"").unwrap();
        assert_eq!(empty, MessageResponse::default());
        let text = MessageResponse::read_response(StatusCode::OK, b"ok").unwrap();
        assert_eq!(text.message(), None);
    }
}
