use super::render_target::{FlightRow, NotificationLevel, Notifier, RenderTarget, count_label};
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

/// Headless render target that keeps what was drawn in memory.
///
/// Used by embedders without a display and throughout the test suite.
#[derive(Debug, Default)]
pub struct MemorySurface {
    state: Mutex<SurfaceState>,
}

#[derive(Debug, Default)]
struct SurfaceState {
    rows: Vec<FlightRow>,
    count: Option<String>,
    error: Option<String>,
    notifications: Vec<Notification>,
    renders: usize,
}

impl MemorySurface {
    pub fn new() -> Self { Self::default() }

    fn lock(&self) -> MutexGuard<'_, SurfaceState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn rows(&self) -> Vec<FlightRow> { self.lock().rows.clone() }

    /// Rows in their displayed `a | b | c | d` form.
    pub fn lines(&self) -> Vec<String> { self.lock().rows.iter().map(ToString::to_string).collect() }

    pub fn count_label(&self) -> Option<String> { self.lock().count.clone() }

    pub fn error(&self) -> Option<String> { self.lock().error.clone() }

    pub fn notifications(&self) -> Vec<Notification> { self.lock().notifications.clone() }

    pub fn last_notification(&self) -> Option<Notification> { self.lock().notifications.last().cloned() }

    /// Number of times the list area was redrawn (rows or error row).
    pub fn render_count(&self) -> usize { self.lock().renders }
}

impl Notifier for MemorySurface {
    fn notify(&self, level: NotificationLevel, message: &str) {
        self.lock().notifications.push(Notification { level, message: message.to_string() });
    }
}

impl RenderTarget for MemorySurface {
    fn set_rows(&self, rows: Vec<FlightRow>) {
        let mut state = self.lock();
        state.rows = rows;
        state.error = None;
        state.renders += 1;
    }

    fn set_count(&self, count: usize) { self.lock().count = Some(count_label(count)); }

    fn set_error(&self, message: &str) {
        let mut state = self.lock();
        state.rows.clear();
        state.error = Some(message.to_string());
        state.renders += 1;
    }
}
