use super::request_common::{HTTPRequestMethod, HTTPRequestType};
use crate::http_handler::http_response::message::MessageResponse;

/// Request type for `POST /api/simulate`. Carries no body.
#[derive(Debug)]
pub(crate) struct SimulateRequest {}

impl HTTPRequestType for SimulateRequest {
    type Response = MessageResponse;
    type Body = ();
    fn endpoint(&self) -> &'static str { "/api/simulate" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}
