use std::fmt;
use strum_macros::Display;

/// A flight record as stored by the backend.
///
/// Every field is optional on read: the server stores whatever the create
/// request carried, so older or hand-edited records may lack any of them.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq, Default)]
pub struct Flight {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    flight_no: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    destination: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    fuel: Option<Fuel>,
}

impl Flight {
    pub fn new(flight_no: &str, source: &str, destination: &str, status: &str, fuel: Option<Fuel>) -> Self {
        Self {
            flight_no: Some(flight_no.to_string()),
            source: Some(source.to_string()),
            destination: Some(destination.to_string()),
            status: Some(status.to_string()),
            fuel,
        }
    }

    pub fn flight_no(&self) -> Option<&str> { self.flight_no.as_deref() }
    pub fn source(&self) -> Option<&str> { self.source.as_deref() }
    pub fn destination(&self) -> Option<&str> { self.destination.as_deref() }
    pub fn status(&self) -> Option<&str> { self.status.as_deref() }
    pub fn fuel(&self) -> Option<&Fuel> { self.fuel.as_ref() }

    pub fn with_status(self, status: &str) -> Self { Self { status: Some(status.to_string()), ..self } }
    pub fn with_fuel(self, fuel: Option<Fuel>) -> Self { Self { fuel, ..self } }
}

/// Fuel level in percent, in whichever shape it travelled over the wire.
///
/// The add form submits fuel as typed text, while the server normalizes stored
/// values to integers. Both shapes show up in list responses. Anything else a
/// record may carry is kept as `Other` so the rest of the list still parses.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Fuel {
    Level(i64),
    Fraction(f64),
    Text(String),
    Other(serde_json::Value),
}

impl Fuel {
    /// Blank text and unusable values count as no fuel value at all.
    pub fn is_blank(&self) -> bool {
        match self {
            Fuel::Text(text) => text.trim().is_empty(),
            Fuel::Other(_) => true,
            Fuel::Level(_) | Fuel::Fraction(_) => false,
        }
    }
}

impl fmt::Display for Fuel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fuel::Level(level) => write!(f, "{level}"),
            Fuel::Fraction(level) => write!(f, "{level}"),
            Fuel::Text(text) => write!(f, "{}", text.trim()),
            Fuel::Other(value) => write!(f, "{value}"),
        }
    }
}

impl From<i64> for Fuel {
    fn from(value: i64) -> Self { Fuel::Level(value) }
}

impl From<&str> for Fuel {
    fn from(value: &str) -> Self { Fuel::Text(value.to_string()) }
}

/// Body of a create request. Validation is left to the server.
#[derive(serde::Serialize, Debug, Clone, PartialEq)]
pub struct NewFlight {
    flight_no: String,
    source: String,
    destination: String,
    status: String,
    fuel: Fuel,
}

impl NewFlight {
    pub fn new(flight_no: &str, source: &str, destination: &str, status: &str, fuel: Fuel) -> Self {
        Self {
            flight_no: flight_no.to_string(),
            source: source.to_string(),
            destination: destination.to_string(),
            status: status.to_string(),
            fuel,
        }
    }

    pub fn flight_no(&self) -> &str { &self.flight_no }
    pub fn source(&self) -> &str { &self.source }
    pub fn destination(&self) -> &str { &self.destination }
    pub fn status(&self) -> &str { &self.status }
    pub fn fuel(&self) -> &Fuel { &self.fuel }
}

#[derive(serde::Serialize, Debug, Clone)]
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    pub fn new(email: &str, password: &str) -> Self {
        Self { email: email.to_string(), password: password.to_string() }
    }

    pub fn email(&self) -> &str { &self.email }
}

/// Failures that happen before a complete response was received.
#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[strum(to_string = "backend unreachable")]
    NoConnection,
    #[strum(to_string = "request timed out")]
    Timeout,
    #[strum(to_string = "request cancelled")]
    Cancelled,
    #[strum(to_string = "transport failure: {detail}")]
    Transport { detail: String },
}

impl std::error::Error for RequestError {}

impl From<reqwest::Error> for RequestError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_timeout() {
            RequestError::Timeout
        } else if value.is_connect() {
            RequestError::NoConnection
        } else {
            RequestError::Transport { detail: value.to_string() }
        }
    }
}

/// Failures derived from a response the backend did send.
#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum ResponseError {
    /// Non-2xx status whose body carried an `error` field.
    #[strum(to_string = "request rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },
    /// Non-2xx status without a readable `error` field.
    #[strum(to_string = "request rejected with status {status}")]
    Unsuccessful { status: u16 },
    #[strum(to_string = "malformed response body: {detail}")]
    Malformed { detail: String },
}

impl std::error::Error for ResponseError {}

impl From<serde_json::Error> for ResponseError {
    fn from(value: serde_json::Error) -> Self { ResponseError::Malformed { detail: value.to_string() } }
}

#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum HTTPError {
    #[strum(to_string = "{0}")]
    HTTPRequestError(RequestError),
    #[strum(to_string = "{0}")]
    HTTPResponseError(ResponseError),
}

impl HTTPError {
    /// The error text the backend attached to a rejection, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            HTTPError::HTTPResponseError(ResponseError::Rejected { message, .. }) => Some(message),
            _ => None,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, HTTPError::HTTPRequestError(RequestError::Cancelled))
    }
}

impl std::error::Error for HTTPError {}

impl From<RequestError> for HTTPError {
    fn from(value: RequestError) -> Self { HTTPError::HTTPRequestError(value) }
}

impl From<ResponseError> for HTTPError {
    fn from(value: ResponseError) -> Self { HTTPError::HTTPResponseError(value) }
}

impl From<reqwest::Error> for HTTPError {
    fn from(value: reqwest::Error) -> Self { HTTPError::HTTPRequestError(value.into()) }
}
