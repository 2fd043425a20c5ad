use super::common::{Flight, HTTPError, NewFlight};
use super::http_client::HTTPClient;
use super::http_request::{
    add_flight_post::AddFlightRequest, delete_flight_delete::DeleteFlightRequest,
    flight_list_get::FlightListRequest, simulate_post::SimulateRequest,
};
use super::http_response::message::MessageResponse;
use async_trait::async_trait;

/// The flight endpoints the list view model depends on.
///
/// `HTTPClient` is the production implementation; anything else (an in-memory
/// backend in tests, a recorded session) can stand in for it.
#[async_trait]
pub trait FlightApi: Send + Sync {
    /// `GET /api/flights`.
    async fn list_flights(&self) -> Result<Vec<Flight>, HTTPError>;
    /// `POST /api/flights`.
    async fn create_flight(&self, flight: &NewFlight) -> Result<MessageResponse, HTTPError>;
    /// `DELETE /api/flights` with `{flight_no}`.
    async fn delete_flight(&self, flight_no: &str) -> Result<MessageResponse, HTTPError>;
    /// `POST /api/simulate`.
    async fn simulate(&self) -> Result<MessageResponse, HTTPError>;
}

#[async_trait]
impl FlightApi for HTTPClient {
    async fn list_flights(&self) -> Result<Vec<Flight>, HTTPError> {
        Ok(self.send(&FlightListRequest {}).await?.into_flights())
    }

    async fn create_flight(&self, flight: &NewFlight) -> Result<MessageResponse, HTTPError> {
        self.send(&AddFlightRequest::new(flight)).await
    }

    async fn delete_flight(&self, flight_no: &str) -> Result<MessageResponse, HTTPError> {
        self.send(&DeleteFlightRequest::new(flight_no)).await
    }

    async fn simulate(&self) -> Result<MessageResponse, HTTPError> {
        self.send(&SimulateRequest {}).await
    }
}
