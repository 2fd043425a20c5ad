//! Client-side view model for the flight list.
//!
//! The view model mirrors the server's flight collection into an injected
//! [`RenderTarget`]. Every mutation is followed by a full reload, so what is
//! rendered always comes from a server round-trip.

mod confirm;
mod flight_list;
mod memory_surface;
mod render_target;
mod request_tracker;

#[cfg(test)]
mod tests;

pub use confirm::Confirm;
pub use flight_list::{FlightListViewModel, LOAD_FAILED};
pub use memory_surface::{MemorySurface, Notification};
pub use render_target::{
    FlightRow, NotificationLevel, Notifier, RenderTarget, count_label, EM_DASH, MISSING_ENDPOINT,
    MISSING_FLIGHT_NO, MISSING_STATUS,
};
pub use request_tracker::ViewState;
