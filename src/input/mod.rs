//! Sources of rig observations: the operator console, a `.json` file or an in-memory list

pub mod console;

use crate::core::reading::RawReading;
use crate::core::traits::ReadingSource;
use crate::error::{Result, RigError};
use std::collections::VecDeque;
use tracing::info;

pub use console::ConsoleSource;

/// Readings known up front, handed out in their original order
#[derive(Debug, Clone, Default)]
pub struct ReadingList {
    readings: VecDeque<RawReading>,
}

impl ReadingList {
    pub fn new(readings: Vec<RawReading>) -> ReadingList {
        ReadingList {
            readings: readings.into(),
        }
    }

    /// Loads a `.json` array of readings, e.g.
    /// `[{"load": 1000.0, "voltage": 220.0, "current": 5.0, ...}]`
    pub fn from_file(file_name: &str) -> Result<ReadingList> {
        let json_file = std::fs::read_to_string(file_name)?;
        let readings: Vec<RawReading> =
            serde_json::from_str(&json_file).map_err(|source| RigError::Json {
                file: file_name.to_string(),
                source,
            })?;
        info!(file = file_name, readings = readings.len(), "readings loaded");
        Ok(ReadingList::new(readings))
    }
}

impl ReadingSource for ReadingList {
    fn next_reading(&mut self) -> Result<Option<RawReading>> {
        Ok(self.readings.pop_front())
    }

    fn remaining(&self) -> Option<usize> {
        Some(self.readings.len())
    }
}

impl FromIterator<RawReading> for ReadingList {
    fn from_iter<I: IntoIterator<Item = RawReading>>(iter: I) -> Self {
        ReadingList {
            readings: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hands_out_in_order() {
        let mut list: ReadingList = (1..=3)
            .map(|i| {
                let load = i as f64 * 100.0;
                RawReading::from_values([
                    load, 220.0, 5.0, 1500.0, 20.0, 0.0, 0.0, 25.0, 40.0, 300.0, 0.05,
                ])
            })
            .collect();
        assert_eq!(list.remaining(), Some(3));
        let loads: Vec<f64> = std::iter::from_fn(|| list.next_reading().unwrap())
            .map(|r| r.load)
            .collect();
        assert_eq!(loads, vec![100.0, 200.0, 300.0]);
        assert_eq!(list.remaining(), Some(0));
        assert!(list.next_reading().unwrap().is_none());
    }
}
