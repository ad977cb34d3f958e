pub mod time;

pub use time::{handle_get_time, ErrorResponse, TimeQuery, __path_handle_get_time};
