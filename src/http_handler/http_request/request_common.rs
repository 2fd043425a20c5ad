use super::super::http_response::response_common::HTTPResponseType;

/// HTTP methods used by the flight backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HTTPRequestMethod {
    Get,
    Post,
    Delete,
}

/// A typed request against a single endpoint.
pub(crate) trait HTTPRequestType {
    /// Type of the expected response.
    type Response: HTTPResponseType;
    /// JSON body sent with the request; `()` for body-less requests.
    type Body: serde::Serialize + ?Sized;
    /// Path of the endpoint, appended to the client's base URL.
    fn endpoint(&self) -> &'static str;
    /// The corresponding HTTP Request Method.
    fn request_method(&self) -> HTTPRequestMethod;
    fn body(&self) -> Option<&Self::Body> { None }
}
