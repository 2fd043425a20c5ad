use super::*;
use crate::config::Config;
use crate::http_handler::{
    Flight, FlightApi, Fuel, HTTPError, MessageResponse, NewFlight, RequestError, ResponseError,
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Notify;

/// In-memory stand-in for the flight backend that records every call.
#[derive(Default)]
struct MockFlightApi {
    flights: Mutex<Vec<Flight>>,
    calls: Mutex<Vec<&'static str>>,
    failures: Mutex<HashMap<&'static str, HTTPError>>,
    stall_list: AtomicBool,
    list_gate: Mutex<Option<(Arc<Notify>, Arc<Notify>)>>,
}

impl MockFlightApi {
    fn with_flights(flights: Vec<Flight>) -> Arc<Self> {
        let api = Self::default();
        *api.flights.lock().unwrap() = flights;
        Arc::new(api)
    }

    fn set_flights(&self, flights: Vec<Flight>) { *self.flights.lock().unwrap() = flights; }

    fn fail(&self, call: &'static str, err: HTTPError) { self.failures.lock().unwrap().insert(call, err); }

    fn recover(&self, call: &'static str) { self.failures.lock().unwrap().remove(call); }

    fn calls(&self) -> Vec<&'static str> { self.calls.lock().unwrap().clone() }

    fn record(&self, call: &'static str) -> Result<(), HTTPError> {
        self.calls.lock().unwrap().push(call);
        match self.failures.lock().unwrap().get(call) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl FlightApi for MockFlightApi {
    async fn list_flights(&self) -> Result<Vec<Flight>, HTTPError> {
        let outcome = self.record("list");
        let snapshot = self.flights.lock().unwrap().clone();
        let gate = self.list_gate.lock().unwrap().take();
        if let Some((entered, release)) = gate {
            entered.notify_one();
            release.notified().await;
        }
        if self.stall_list.load(Ordering::SeqCst) {
            std::future::pending::<()>().await;
        }
        outcome.map(|()| snapshot)
    }

    async fn create_flight(&self, flight: &NewFlight) -> Result<MessageResponse, HTTPError> {
        self.record("create")?;
        self.flights.lock().unwrap().push(Flight::new(
            flight.flight_no(),
            flight.source(),
            flight.destination(),
            flight.status(),
            Some(flight.fuel().clone()),
        ));
        Ok(MessageResponse::default())
    }

    async fn delete_flight(&self, flight_no: &str) -> Result<MessageResponse, HTTPError> {
        self.record("delete")?;
        let mut flights = self.flights.lock().unwrap();
        let before = flights.len();
        flights.retain(|f| f.flight_no() != Some(flight_no));
        if flights.len() == before {
            return Err(rejected(404, "not found"));
        }
        Ok(MessageResponse::default())
    }

    async fn simulate(&self) -> Result<MessageResponse, HTTPError> {
        self.record("simulate")?;
        let mut flights = self.flights.lock().unwrap();
        let advanced: Vec<Flight> =
            flights.drain(..).map(|f| f.with_status("Departed").with_fuel(Some(Fuel::Level(75)))).collect();
        *flights = advanced;
        Ok(MessageResponse::default())
    }
}

fn rejected(status: u16, message: &str) -> HTTPError {
    ResponseError::Rejected { status, message: message.to_string() }.into()
}

fn ai101() -> Flight { Flight::new("AI101", "DEL", "BOM", "Scheduled", Some(Fuel::Level(80))) }

fn fixture(api: &Arc<MockFlightApi>, confirm: bool) -> (Arc<FlightListViewModel>, Arc<MemorySurface>) {
    let surface = Arc::new(MemorySurface::new());
    let vm = FlightListViewModel::new(
        Arc::clone(api) as Arc<dyn FlightApi>,
        Arc::clone(&surface) as Arc<dyn RenderTarget>,
        Arc::new(move |_prompt: &str| confirm),
        &Config::default().with_timeout(Duration::from_secs(5)),
    );
    (Arc::new(vm), surface)
}

#[tokio::test]
async fn test_single_flight_row_and_count() {
    let api = MockFlightApi::with_flights(vec![ai101()]);
    let (vm, surface) = fixture(&api, true);
    vm.load().await;
    assert_eq!(surface.lines(), vec!["AI101 | DEL \u{2192} BOM | Scheduled | 80%"]);
    assert_eq!(surface.count_label().as_deref(), Some("1 flights"));
    assert_eq!(vm.flights(), vec![ai101()]);
    assert!(vm.last_synced().is_some());
    assert_eq!(vm.state(), ViewState::Idle);
}

#[tokio::test]
async fn test_empty_collection() {
    let api = MockFlightApi::with_flights(vec![]);
    let (vm, surface) = fixture(&api, true);
    vm.load().await;
    assert!(surface.rows().is_empty());
    assert_eq!(surface.count_label().as_deref(), Some("0 flights"));
    assert_eq!(surface.error(), None);
}

#[tokio::test]
async fn test_repeated_load_renders_identically() {
    let api = MockFlightApi::with_flights(vec![ai101(), Flight::new("6E202", "BLR", "MAA", "Boarding", None)]);
    let (vm, surface) = fixture(&api, true);
    vm.load().await;
    let first = surface.lines();
    vm.load().await;
    assert_eq!(surface.lines(), first);
    assert_eq!(surface.render_count(), 2);
}

#[tokio::test]
async fn test_missing_fields_use_placeholders() {
    let blank_fuel = Flight::new("UK303", "BOM", "GOI", "Delayed", Some(Fuel::from("")));
    let odd_fuel = Flight::new("G8505", "PNQ", "HYD", "Landed", Some(Fuel::Other(serde_json::json!({"left": 40}))));
    let api = MockFlightApi::with_flights(vec![Flight::default(), blank_fuel, odd_fuel]);
    let (vm, surface) = fixture(&api, true);
    vm.load().await;
    assert_eq!(
        surface.lines(),
        vec![
            "N/A | ? \u{2192} ? | Unknown | \u{2014}",
            "UK303 | BOM \u{2192} GOI | Delayed | \u{2014}",
            "G8505 | PNQ \u{2192} HYD | Landed | \u{2014}",
        ]
    );
}

#[tokio::test]
async fn test_load_failure_renders_error_row() {
    let api = MockFlightApi::with_flights(vec![ai101()]);
    api.fail("list", RequestError::NoConnection.into());
    let (vm, surface) = fixture(&api, true);
    vm.load().await;
    assert_eq!(surface.error().as_deref(), Some(LOAD_FAILED));
    assert!(surface.rows().is_empty());
    assert_eq!(vm.state(), ViewState::Idle);
}

#[tokio::test]
async fn test_failed_reload_keeps_cached_flights() {
    let api = MockFlightApi::with_flights(vec![ai101()]);
    let (vm, surface) = fixture(&api, true);
    vm.load().await;
    let synced = vm.last_synced();

    api.fail("list", RequestError::Timeout.into());
    vm.load().await;
    assert_eq!(surface.error().as_deref(), Some(LOAD_FAILED));
    assert_eq!(surface.count_label().as_deref(), Some("1 flights"));
    assert_eq!(vm.flights(), vec![ai101()]);
    assert_eq!(vm.last_synced(), synced);
}

#[tokio::test]
async fn test_malformed_list_is_degraded_like_transport_failure() {
    let api = MockFlightApi::with_flights(vec![]);
    api.fail("list", ResponseError::Malformed { detail: "expected array".into() }.into());
    let (vm, surface) = fixture(&api, true);
    vm.load().await;
    assert_eq!(surface.error().as_deref(), Some(LOAD_FAILED));
    assert!(surface.notifications().is_empty());
}

#[tokio::test]
async fn test_add_reloads_from_server() {
    let api = MockFlightApi::with_flights(vec![ai101()]);
    let (vm, surface) = fixture(&api, true);
    vm.load().await;
    // Server-side change the client has not seen yet.
    api.set_flights(vec![]);
    vm.add(&NewFlight::new("SG404", "CCU", "DEL", "Scheduled", Fuel::from("55"))).await;
    assert_eq!(api.calls(), vec!["list", "create", "list"]);
    assert_eq!(surface.lines(), vec!["SG404 | CCU \u{2192} DEL | Scheduled | 55%"]);
    assert_eq!(surface.count_label().as_deref(), Some("1 flights"));
}

#[tokio::test]
async fn test_failed_add_leaves_list_untouched() {
    let api = MockFlightApi::with_flights(vec![ai101()]);
    let (vm, surface) = fixture(&api, true);
    vm.load().await;
    api.fail("create", rejected(400, "Flight already exists"));
    vm.add(&NewFlight::new("AI101", "DEL", "BOM", "Scheduled", Fuel::Level(80))).await;
    assert_eq!(api.calls(), vec!["list", "create"]);
    assert_eq!(surface.render_count(), 1);
    assert_eq!(surface.lines(), vec!["AI101 | DEL \u{2192} BOM | Scheduled | 80%"]);
    assert_eq!(
        surface.last_notification(),
        Some(Notification { level: NotificationLevel::Error, message: "Flight already exists".into() })
    );
}

#[tokio::test]
async fn test_failed_add_without_server_message_uses_fallback() {
    let api = MockFlightApi::with_flights(vec![]);
    api.fail("create", RequestError::NoConnection.into());
    let (vm, surface) = fixture(&api, true);
    vm.add(&NewFlight::new("AI101", "DEL", "BOM", "Scheduled", Fuel::Level(80))).await;
    assert_eq!(surface.last_notification().map(|n| n.message).as_deref(), Some("Failed to add flight"));
    assert_eq!(surface.render_count(), 0);
}

#[tokio::test]
async fn test_declined_delete_sends_nothing() {
    let api = MockFlightApi::with_flights(vec![ai101()]);
    let (vm, surface) = fixture(&api, false);
    vm.delete("AI101").await;
    assert!(api.calls().is_empty());
    assert!(surface.notifications().is_empty());
    assert_eq!(surface.render_count(), 0);
}

#[tokio::test]
async fn test_delete_prompt_names_the_flight() {
    let api = MockFlightApi::with_flights(vec![ai101()]);
    let surface = Arc::new(MemorySurface::new());
    let prompts = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&prompts);
    let vm = FlightListViewModel::new(
        Arc::clone(&api) as Arc<dyn FlightApi>,
        Arc::clone(&surface) as Arc<dyn RenderTarget>,
        Arc::new(move |prompt: &str| {
            seen.lock().unwrap().push(prompt.to_string());
            true
        }),
        &Config::default(),
    );
    vm.delete("AI101").await;
    assert_eq!(*prompts.lock().unwrap(), vec!["Delete flight AI101?".to_string()]);
    assert_eq!(api.calls(), vec!["delete", "list"]);
    assert_eq!(surface.count_label().as_deref(), Some("0 flights"));
    assert_eq!(surface.last_notification().map(|n| n.message).as_deref(), Some("Flight deleted"));
}

#[tokio::test]
async fn test_delete_not_found_keeps_previous_list() {
    let api = MockFlightApi::with_flights(vec![ai101()]);
    let (vm, surface) = fixture(&api, true);
    vm.load().await;
    api.set_flights(vec![]);
    vm.delete("AI101").await;
    assert_eq!(api.calls(), vec!["list", "delete"]);
    assert_eq!(surface.last_notification().map(|n| n.message).as_deref(), Some("not found"));
    assert_eq!(surface.lines(), vec!["AI101 | DEL \u{2192} BOM | Scheduled | 80%"]);
    assert_eq!(surface.count_label().as_deref(), Some("1 flights"));
}

#[tokio::test]
async fn test_simulate_reloads_advanced_state() {
    let api = MockFlightApi::with_flights(vec![ai101()]);
    let (vm, surface) = fixture(&api, true);
    vm.simulate().await;
    assert_eq!(api.calls(), vec!["simulate", "list"]);
    assert_eq!(surface.lines(), vec!["AI101 | DEL \u{2192} BOM | Departed | 75%"]);
    assert_eq!(
        surface.last_notification(),
        Some(Notification { level: NotificationLevel::Info, message: "Simulation updated".into() })
    );
}

#[tokio::test]
async fn test_failed_simulation_is_notified_generically() {
    let api = MockFlightApi::with_flights(vec![ai101()]);
    api.fail("simulate", rejected(500, "mongo down"));
    let (vm, surface) = fixture(&api, true);
    vm.simulate().await;
    assert_eq!(api.calls(), vec!["simulate"]);
    assert_eq!(surface.last_notification().map(|n| n.message).as_deref(), Some("Simulation failed"));
}

#[tokio::test]
async fn test_stale_load_response_is_discarded() {
    let api = MockFlightApi::with_flights(vec![ai101()]);
    let entered = Arc::new(Notify::new());
    let release = Arc::new(Notify::new());
    *api.list_gate.lock().unwrap() = Some((Arc::clone(&entered), Arc::clone(&release)));
    let (vm, surface) = fixture(&api, true);

    let vm_first = Arc::clone(&vm);
    let first = tokio::spawn(async move { vm_first.load().await });
    entered.notified().await;

    api.set_flights(vec![]);
    vm.load().await;
    assert_eq!(surface.count_label().as_deref(), Some("0 flights"));

    release.notify_one();
    first.await.unwrap();
    assert!(surface.rows().is_empty());
    assert_eq!(surface.count_label().as_deref(), Some("0 flights"));
    assert_eq!(surface.render_count(), 1);
    assert!(vm.flights().is_empty());
}

#[tokio::test]
async fn test_stale_load_failure_is_discarded() {
    let api = MockFlightApi::with_flights(vec![ai101()]);
    api.fail("list", RequestError::NoConnection.into());
    let entered = Arc::new(Notify::new());
    let release = Arc::new(Notify::new());
    *api.list_gate.lock().unwrap() = Some((Arc::clone(&entered), Arc::clone(&release)));
    let (vm, surface) = fixture(&api, true);

    let vm_first = Arc::clone(&vm);
    let first = tokio::spawn(async move { vm_first.load().await });
    entered.notified().await;

    api.recover("list");
    vm.load().await;
    assert_eq!(surface.lines(), vec!["AI101 | DEL \u{2192} BOM | Scheduled | 80%"]);

    release.notify_one();
    first.await.unwrap();
    assert_eq!(surface.error(), None);
    assert_eq!(surface.lines(), vec!["AI101 | DEL \u{2192} BOM | Scheduled | 80%"]);
    assert_eq!(surface.render_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_stalled_load_times_out() {
    let api = MockFlightApi::with_flights(vec![ai101()]);
    api.stall_list.store(true, Ordering::SeqCst);
    let (vm, surface) = fixture(&api, true);

    let vm_task = Arc::clone(&vm);
    let load = tokio::spawn(async move { vm_task.load().await });
    tokio::task::yield_now().await;
    assert_eq!(vm.state(), ViewState::Loading);

    load.await.unwrap();
    assert_eq!(surface.error().as_deref(), Some(LOAD_FAILED));
    assert_eq!(vm.state(), ViewState::Idle);
}

#[tokio::test]
async fn test_shutdown_cancels_without_rendering() {
    let api = MockFlightApi::with_flights(vec![ai101()]);
    api.stall_list.store(true, Ordering::SeqCst);
    let (vm, surface) = fixture(&api, true);

    let vm_task = Arc::clone(&vm);
    let load = tokio::spawn(async move { vm_task.load().await });
    tokio::task::yield_now().await;
    vm.shutdown();
    load.await.unwrap();

    assert_eq!(surface.render_count(), 0);
    assert_eq!(surface.error(), None);
    assert_eq!(vm.state(), ViewState::Idle);
}
