use crate::http_handler::common::Flight;
use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;

/// Response of `GET /api/flights`: a bare JSON array, in server order.
#[derive(serde::Deserialize, Debug)]
#[serde(transparent)]
pub struct FlightListResponse {
    flights: Vec<Flight>,
}

impl SerdeJSONBodyHTTPResponseType for FlightListResponse {}

impl FlightListResponse {
    pub fn into_flights(self) -> Vec<Flight> { self.flights }
}
