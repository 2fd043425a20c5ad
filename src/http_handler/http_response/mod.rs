pub mod flight_list;
pub mod message;
pub(crate) mod response_common;
