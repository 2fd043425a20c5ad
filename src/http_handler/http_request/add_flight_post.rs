use super::request_common::{HTTPRequestMethod, HTTPRequestType};
use crate::http_handler::common::NewFlight;
use crate::http_handler::http_response::message::MessageResponse;

/// Request type for `POST /api/flights`.
#[derive(Debug)]
pub(crate) struct AddFlightRequest<'a> {
    flight: &'a NewFlight,
}

impl<'a> AddFlightRequest<'a> {
    pub(crate) fn new(flight: &'a NewFlight) -> Self { Self { flight } }
}

impl HTTPRequestType for AddFlightRequest<'_> {
    type Response = MessageResponse;
    type Body = NewFlight;
    fn endpoint(&self) -> &'static str { "/api/flights" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
    fn body(&self) -> Option<&Self::Body> { Some(self.flight) }
}
