use super::request_common::{HTTPRequestMethod, HTTPRequestType};
use crate::http_handler::common::Credentials;
use crate::http_handler::http_response::message::MessageResponse;

/// Request type for `POST /api/login`.
#[derive(Debug)]
pub(crate) struct LoginRequest<'a> {
    credentials: &'a Credentials,
}

impl<'a> LoginRequest<'a> {
    pub(crate) fn new(credentials: &'a Credentials) -> Self { Self { credentials } }
}

impl HTTPRequestType for LoginRequest<'_> {
    type Response = MessageResponse;
    type Body = Credentials;
    fn endpoint(&self) -> &'static str { "/api/login" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
    fn body(&self) -> Option<&Self::Body> { Some(self.credentials) }
}
