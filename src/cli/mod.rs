mod console_surface;
mod stdin_confirm;

pub(crate) use console_surface::ConsoleSurface;
pub(crate) use stdin_confirm::StdinConfirm;

use clap::{Parser, Subcommand};
use flightdeck::config::{DEFAULT_BASE_URL, DEFAULT_REQUEST_TIMEOUT};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub(crate) struct Cli {
    /// Root URL of the flight backend
    #[arg(short, long, global = true, env = "FLIGHTDECK_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub(crate) base_url: String,

    /// Seconds before an outstanding request is abandoned
    #[arg(short, long, global = true, env = "FLIGHTDECK_TIMEOUT_SECS", default_value_t = DEFAULT_REQUEST_TIMEOUT.as_secs())]
    pub(crate) timeout_secs: u64,

    /// Delete without asking for confirmation
    #[arg(short, long, global = true)]
    pub(crate) yes: bool,

    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub(crate) enum Commands {
    /// Show all flights
    List,
    /// Create a flight, then show the refreshed list
    Add {
        flight_no: String,
        source: String,
        destination: String,
        /// Fuel level in percent, sent as typed
        fuel: String,
        #[arg(short, long, default_value = "Scheduled")]
        status: String,
    },
    /// Delete a flight by number, then show the refreshed list
    Delete { flight_no: String },
    /// Advance the simulated flight states, then show the refreshed list
    Simulate,
    /// Log in with email and password
    Login { email: String, password: String },
    /// Register a new account
    Register { email: String, password: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_arguments() {
        let cli = Cli::try_parse_from(["flightdeck", "add", "AI101", "DEL", "BOM", "80", "--status", "Boarding"])
            .unwrap();
        assert_eq!(
            cli.command,
            Commands::Add {
                flight_no: "AI101".into(),
                source: "DEL".into(),
                destination: "BOM".into(),
                fuel: "80".into(),
                status: "Boarding".into(),
            }
        );
        assert!(!cli.yes);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "flightdeck",
            "delete",
            "AI101",
            "--yes",
            "--base-url",
            "http://flights.test",
            "--timeout-secs",
            "3",
        ])
        .unwrap();
        assert_eq!(cli.command, Commands::Delete { flight_no: "AI101".into() });
        assert!(cli.yes);
        assert_eq!(cli.base_url, "http://flights.test");
        assert_eq!(cli.timeout_secs, 3);
    }
}
