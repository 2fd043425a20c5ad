use super::request_common::{HTTPRequestMethod, HTTPRequestType};
use crate::http_handler::http_response::flight_list::FlightListResponse;

/// Request type for `GET /api/flights`.
#[derive(Debug)]
pub(crate) struct FlightListRequest {}

impl HTTPRequestType for FlightListRequest {
    type Response = FlightListResponse;
    type Body = ();
    fn endpoint(&self) -> &'static str { "/api/flights" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}
