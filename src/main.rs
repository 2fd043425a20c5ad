#![allow(clippy::module_name_repetitions)]
mod cli;

use clap::Parser;
use cli::{Cli, Commands, ConsoleSurface, StdinConfirm};
use flightdeck::http_handler::{Credentials, FlightApi, Fuel, HTTPClient, NewFlight};
use flightdeck::session::{self, AuthOutcome};
use flightdeck::view_model::{Confirm, FlightListViewModel, RenderTarget};
use flightdeck::{Config, info};
use std::process::ExitCode;
use std::{sync::Arc, time::Duration};

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let args = Cli::parse();
    let config = Config::new(&args.base_url, Duration::from_secs(args.timeout_secs));
    let client = Arc::new(HTTPClient::new(&config)?);
    let surface = Arc::new(ConsoleSurface::default());
    info!("Using flight backend at {}.", client.url());

    let flight_list = || {
        let api: Arc<dyn FlightApi> = client.clone();
        let target: Arc<dyn RenderTarget> = surface.clone();
        let confirm: Arc<dyn Confirm> =
            if args.yes { Arc::new(|_prompt: &str| true) } else { Arc::new(StdinConfirm) };
        FlightListViewModel::new(api, target, confirm, &config)
    };

    match &args.command {
        Commands::List => flight_list().load().await,
        Commands::Add { flight_no, source, destination, fuel, status } => {
            let flight = NewFlight::new(flight_no, source, destination, status, Fuel::from(fuel.as_str()));
            flight_list().add(&flight).await;
        }
        Commands::Delete { flight_no } => flight_list().delete(flight_no).await,
        Commands::Simulate => flight_list().simulate().await,
        Commands::Login { email, password } => {
            let outcome = session::login(&client, &Credentials::new(email, password), surface.as_ref()).await;
            report_auth(&outcome);
        }
        Commands::Register { email, password } => {
            let outcome = session::register(&client, &Credentials::new(email, password), surface.as_ref()).await;
            report_auth(&outcome);
        }
    }

    Ok(if surface.failed() { ExitCode::FAILURE } else { ExitCode::SUCCESS })
}

fn report_auth(outcome: &AuthOutcome) {
    if let AuthOutcome::Redirect(view) = outcome {
        info!("Continue at {view}.");
    }
}
