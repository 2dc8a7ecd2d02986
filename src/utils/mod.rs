pub mod date;
pub mod table;
pub mod time;

pub use time::hours_to_hhmmss;
