pub(crate) mod add_flight_post;
pub(crate) mod delete_flight_delete;
pub(crate) mod flight_list_get;
pub(crate) mod login_post;
pub(crate) mod register_post;
pub(crate) mod request_common;
pub(crate) mod simulate_post;
