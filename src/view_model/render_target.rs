use crate::http_handler::Flight;
use std::fmt;
use strum_macros::Display;

pub const MISSING_FLIGHT_NO: &str = "N/A";
pub const MISSING_ENDPOINT: &str = "?";
pub const MISSING_STATUS: &str = "Unknown";
/// Shown in place of a missing fuel level.
pub const EM_DASH: &str = "\u{2014}";

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Error,
}

/// Receives one-shot user notifications (toasts, alerts).
pub trait Notifier: Send + Sync {
    fn notify(&self, level: NotificationLevel, message: &str);
}

/// The surface the flight list is drawn into.
///
/// Each call replaces what it names: `set_rows` the whole list, `set_count`
/// the count indicator, and `set_error` swaps the list for a single error row.
pub trait RenderTarget: Notifier {
    fn set_rows(&self, rows: Vec<FlightRow>);
    fn set_count(&self, count: usize);
    fn set_error(&self, message: &str);
}

/// Text of the count indicator.
pub fn count_label(count: usize) -> String { format!("{count} flights") }

/// One rendered line of the flight list, with placeholders already applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightRow {
    flight_no: String,
    route: String,
    status: String,
    fuel: String,
}

impl FlightRow {
    pub fn flight_no(&self) -> &str { &self.flight_no }
    pub fn route(&self) -> &str { &self.route }
    pub fn status(&self) -> &str { &self.status }
    pub fn fuel(&self) -> &str { &self.fuel }
}

impl From<&Flight> for FlightRow {
    fn from(flight: &Flight) -> Self {
        let fuel = match flight.fuel() {
            Some(fuel) if !fuel.is_blank() => format!("{fuel}%"),
            _ => EM_DASH.to_string(),
        };
        Self {
            flight_no: flight.flight_no().unwrap_or(MISSING_FLIGHT_NO).to_string(),
            route: format!(
                "{} \u{2192} {}",
                flight.source().unwrap_or(MISSING_ENDPOINT),
                flight.destination().unwrap_or(MISSING_ENDPOINT)
            ),
            status: flight.status().unwrap_or(MISSING_STATUS).to_string(),
            fuel,
        }
    }
}

impl fmt::Display for FlightRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {} | {} | {}", self.flight_no, self.route, self.status, self.fuel)
    }
}
