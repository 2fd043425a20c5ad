use flightdeck::view_model::{FlightRow, NotificationLevel, Notifier, RenderTarget, count_label};
use flightdeck::{error, info, warn};
use std::sync::atomic::{AtomicBool, Ordering};

/// Prints the flight list to stdout and notifications through the logger.
#[derive(Debug, Default)]
pub(crate) struct ConsoleSurface {
    failed: AtomicBool,
}

impl ConsoleSurface {
    /// Whether an error row or error notification was shown.
    pub(crate) fn failed(&self) -> bool { self.failed.load(Ordering::SeqCst) }
}

impl Notifier for ConsoleSurface {
    fn notify(&self, level: NotificationLevel, message: &str) {
        match level {
            NotificationLevel::Error => {
                self.failed.store(true, Ordering::SeqCst);
                error!("{message}");
            }
            NotificationLevel::Success | NotificationLevel::Info => info!("{message}"),
        }
    }
}

impl RenderTarget for ConsoleSurface {
    fn set_rows(&self, rows: Vec<FlightRow>) {
        for row in rows {
            println!("  {row}");
        }
    }

    fn set_count(&self, count: usize) { println!("{}", count_label(count)); }

    fn set_error(&self, message: &str) {
        self.failed.store(true, Ordering::SeqCst);
        warn!("{message}");
    }
}
