pub use chrono;
pub use reqwest;
pub use serde;

pub mod common;
pub mod flight_api;
pub mod http_client;
pub(crate) mod http_request;
pub mod http_response;

pub use common::{Credentials, Flight, Fuel, HTTPError, NewFlight, RequestError, ResponseError};
pub use flight_api::FlightApi;
pub use http_client::HTTPClient;
pub use http_response::message::MessageResponse;
