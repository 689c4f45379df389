pub mod any;
pub mod period;
pub mod types;
pub mod utils;
