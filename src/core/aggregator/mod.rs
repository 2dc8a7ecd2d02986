pub mod daily;
pub mod monthly;
pub mod weekly;

pub use daily::aggregate_daily;
pub use monthly::aggregate_monthly;
pub use weekly::aggregate_weekly;
