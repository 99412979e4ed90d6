//! # heat_balance_rig
//!
//! The `heat_balance_rig` crate computes the performance and the heat balance of an internal
//! combustion engine running on a test rig, reading by reading, and draws the usual
//! diagnostic charts (BMEP against SFC and efficiencies, load against BMEP).
//!
//! A [`TestRun`] owns the selected [`EngineProfile`], the [`RigConstants`] and the collected
//! series. Readings come from any [`ReadingSource`] (operator console, `.json` file, in-memory
//! list) and charts go to any [`ChartRenderer`], gnuplot by default.
//! See [`doc::rig_file`] for the configuration format and a complete example.

mod core;
mod engine;
mod error;
mod input;
mod plot;
pub mod doc;

// Re-exporting
pub use crate::core::metrics::{HeatBalance, MetricsRecord};
pub use crate::core::processor::{process_reading, ReadingProcessor};
pub use crate::core::reading::{RawReading, OBSERVATION_LABELS};
pub use crate::core::series::{SeriesCollector, SeriesSnapshot};
pub use crate::core::test_run::{ReadingOutcome, TestRun};
pub use crate::core::traits::{ChartRenderer, ReadingSource, SaveData};
pub use crate::engine::json_reader::RigConfig;
pub use crate::engine::profile::{EngineProfile, EngineType};
pub use crate::engine::rig::{Geometry, RigConstants};
pub use crate::error::{Result, RigError};
pub use crate::input::{ConsoleSource, ReadingList};
pub use crate::plot::{diagnostic_charts, Chart, GnuplotRenderer, PlotOutput};
