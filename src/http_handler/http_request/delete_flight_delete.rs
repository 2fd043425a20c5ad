use super::request_common::{HTTPRequestMethod, HTTPRequestType};
use crate::http_handler::http_response::message::MessageResponse;

/// Request type for `DELETE /api/flights`. The flight is identified by the
/// JSON body rather than the path.
#[derive(serde::Serialize, Debug)]
pub(crate) struct DeleteFlightRequest<'a> {
    flight_no: &'a str,
}

impl<'a> DeleteFlightRequest<'a> {
    pub(crate) fn new(flight_no: &'a str) -> Self { Self { flight_no } }
}

impl HTTPRequestType for DeleteFlightRequest<'_> {
    type Response = MessageResponse;
    type Body = Self;
    fn endpoint(&self) -> &'static str { "/api/flights" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Delete }
    fn body(&self) -> Option<&Self::Body> { Some(self) }
}
