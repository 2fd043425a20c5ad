use super::request_common::{HTTPRequestMethod, HTTPRequestType};
use crate::http_handler::common::Credentials;
use crate::http_handler::http_response::message::MessageResponse;

/// Request type for `POST /api/register`.
#[derive(Debug)]
pub(crate) struct RegisterRequest<'a> {
    credentials: &'a Credentials,
}

impl<'a> RegisterRequest<'a> {
    pub(crate) fn new(credentials: &'a Credentials) -> Self { Self { credentials } }
}

impl HTTPRequestType for RegisterRequest<'_> {
    type Response = MessageResponse;
    type Body = Credentials;
    fn endpoint(&self) -> &'static str { "/api/register" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
    fn body(&self) -> Option<&Self::Body> { Some(self.credentials) }
}
