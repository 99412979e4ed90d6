pub mod metrics;
pub mod processor;
pub mod reading;
pub mod series;
pub mod test_run;
pub mod traits;
