use super::confirm::Confirm;
use super::render_target::{FlightRow, NotificationLevel, RenderTarget};
use super::request_tracker::{RequestTracker, ViewState};
use crate::config::Config;
use crate::http_handler::{Flight, FlightApi, HTTPError, NewFlight, RequestError};
use crate::{error, event, info, log};
use chrono::{DateTime, Utc};
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Text of the single error row shown when the list cannot be loaded.
pub const LOAD_FAILED: &str = "Failed to load flights";
const ADD_FAILED: &str = "Failed to add flight";
const DELETE_FAILED: &str = "Failed to delete flight";
const DELETE_DONE: &str = "Flight deleted";
const SIMULATE_FAILED: &str = "Simulation failed";
const SIMULATE_DONE: &str = "Simulation updated";

/// Keeps a rendered flight list in sync with the backend.
///
/// All operations take `&self` and may overlap. Load responses are applied
/// only if they belong to the most recently issued load; mutations always
/// finish with a full reload instead of patching the cached list.
pub struct FlightListViewModel {
    /// The backend the flights are mirrored from.
    api: Arc<dyn FlightApi>,
    /// Where rows, the count indicator and notifications end up.
    target: Arc<dyn RenderTarget>,
    /// Gate in front of every delete.
    confirm: Arc<dyn Confirm>,
    /// Flights of the last applied load, in server order.
    flights: Mutex<Vec<Flight>>,
    last_synced: Mutex<Option<DateTime<Utc>>>,
    tracker: RequestTracker,
    request_timeout: Duration,
    /// Cancelled by `shutdown`, aborting every outstanding request.
    cancel: CancellationToken,
}

impl FlightListViewModel {
    /// Creates an empty view model. Nothing is rendered until the first `load`.
    ///
    /// # Arguments
    /// - `api`: Backend the flight list is mirrored from.
    /// - `target`: Surface the list is rendered into.
    /// - `confirm`: Capability asked before each delete.
    /// - `config`: Supplies the per-request timeout.
    pub fn new(
        api: Arc<dyn FlightApi>,
        target: Arc<dyn RenderTarget>,
        confirm: Arc<dyn Confirm>,
        config: &Config,
    ) -> Self {
        Self {
            api,
            target,
            confirm,
            flights: Mutex::new(Vec::new()),
            last_synced: Mutex::new(None),
            tracker: RequestTracker::default(),
            request_timeout: config.request_timeout(),
            cancel: CancellationToken::new(),
        }
    }

    pub fn state(&self) -> ViewState { self.tracker.state() }

    /// Snapshot of the flights from the last applied load.
    pub fn flights(&self) -> Vec<Flight> { lock(&self.flights).clone() }

    pub fn last_synced(&self) -> Option<DateTime<Utc>> { *lock(&self.last_synced) }

    /// Cancels every outstanding request. Cancelled operations render nothing.
    pub fn shutdown(&self) { self.cancel.cancel(); }

    /// Fetches all flights and replaces the rendered list with them.
    ///
    /// Failures render a single error row and are logged; they never reach
    /// the caller. A response is dropped if a newer load was issued meanwhile.
    pub async fn load(&self) {
        let ticket = self.tracker.issue_ticket();
        event!("Flight list load #{ticket} issued.");
        let result = self.guarded(self.api.list_flights()).await;
        if !self.tracker.is_latest(ticket) {
            event!("Discarding stale flight list response #{ticket}.");
            return;
        }
        match result {
            Ok(flights) => self.apply(flights),
            Err(err) if err.is_cancelled() => log!("Flight list load #{ticket} cancelled."),
            Err(err) => {
                error!("Failed to load flights: {err}");
                self.target.set_error(LOAD_FAILED);
            }
        }
    }

    /// Submits a new flight and reloads the list once the backend accepted it.
    ///
    /// On failure the current list stays as it is and an error is notified.
    pub async fn add(&self, flight: &NewFlight) {
        match self.guarded(self.api.create_flight(flight)).await {
            Ok(response) => {
                info!("Flight {} added.", flight.flight_no());
                if let Some(message) = response.message() {
                    self.target.notify(NotificationLevel::Success, message);
                }
                self.load().await;
            }
            Err(err) if err.is_cancelled() => log!("Adding flight {} cancelled.", flight.flight_no()),
            Err(err) => {
                error!("Failed to add flight {}: {err}", flight.flight_no());
                self.target.notify(NotificationLevel::Error, err.server_message().unwrap_or(ADD_FAILED));
            }
        }
    }

    /// Deletes the flight with the given number after the user confirmed it.
    ///
    /// A declined confirmation sends nothing and renders nothing.
    pub async fn delete(&self, flight_no: &str) {
        if !self.confirm.confirm(&format!("Delete flight {flight_no}?")).await {
            log!("Deletion of flight {flight_no} declined.");
            return;
        }
        match self.guarded(self.api.delete_flight(flight_no)).await {
            Ok(response) => {
                info!("Flight {flight_no} deleted.");
                self.target.notify(NotificationLevel::Success, response.message().unwrap_or(DELETE_DONE));
                self.load().await;
            }
            Err(err) if err.is_cancelled() => log!("Deleting flight {flight_no} cancelled."),
            Err(err) => {
                error!("Failed to delete flight {flight_no}: {err}");
                self.target.notify(NotificationLevel::Error, err.server_message().unwrap_or(DELETE_FAILED));
            }
        }
    }

    /// Asks the backend to advance the simulated flight states, then reloads.
    pub async fn simulate(&self) {
        match self.guarded(self.api.simulate()).await {
            Ok(response) => {
                info!("Simulation step triggered.");
                self.target.notify(NotificationLevel::Info, response.message().unwrap_or(SIMULATE_DONE));
                self.load().await;
            }
            Err(err) if err.is_cancelled() => log!("Simulation request cancelled."),
            Err(err) => {
                error!("Simulation request failed: {err}");
                self.target.notify(NotificationLevel::Error, SIMULATE_FAILED);
            }
        }
    }

    fn apply(&self, flights: Vec<Flight>) {
        let rows: Vec<FlightRow> = flights.iter().map(FlightRow::from).collect();
        let count = rows.len();
        *lock(&self.flights) = flights;
        *lock(&self.last_synced) = Some(Utc::now());
        self.target.set_rows(rows);
        self.target.set_count(count);
        event!("Rendered {count} flights.");
    }

    /// Runs one request under the configured timeout, racing it against `shutdown`.
    async fn guarded<T, F>(&self, request: F) -> Result<T, HTTPError>
    where
        F: Future<Output = Result<T, HTTPError>>,
    {
        let _in_flight = self.tracker.begin();
        tokio::select! {
            () = self.cancel.cancelled() => Err(HTTPError::from(RequestError::Cancelled)),
            result = tokio::time::timeout(self.request_timeout, request) => {
                result.unwrap_or_else(|_| Err(HTTPError::from(RequestError::Timeout)))
            }
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> { mutex.lock().unwrap_or_else(PoisonError::into_inner) }
