#![allow(clippy::module_name_repetitions)]
//! Client library for the flight-management backend.
//!
//! [`view_model::FlightListViewModel`] keeps a rendered flight list in sync
//! with `/api/flights`; [`session`] covers login and registration. Both talk
//! to the backend through [`http_handler::HTTPClient`].

pub mod config;
pub mod http_handler;
pub mod logger;
pub mod session;
pub mod view_model;

pub use config::Config;
