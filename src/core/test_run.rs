use crate::core::metrics::MetricsRecord;
use crate::core::processor::ReadingProcessor;
use crate::core::reading::RawReading;
use crate::core::series::{SeriesCollector, SeriesSnapshot};
use crate::core::traits::{ReadingSource, SaveData};
use crate::engine::profile::{EngineProfile, EngineType};
use crate::engine::rig::RigConstants;
use crate::error::{Result, RigError};
use crate::plot::{self, Chart};
use std::io::Write;
use tracing::{error, info};

/// One session on the rig: a fixed engine, its readings and the collected series.
pub struct TestRun {
    engine: EngineType,
    processor: ReadingProcessor,
    series: SeriesCollector,
    records: Vec<MetricsRecord>,
    rejected: usize,
}

/// Outcome of submitting a reading to a [`TestRun`]
#[derive(Debug)]
pub enum ReadingOutcome {
    Accepted(MetricsRecord),
    Rejected(RigError),
}

impl TestRun {
    pub fn new(engine: EngineType, profile: EngineProfile, rig: RigConstants) -> TestRun {
        TestRun {
            engine,
            processor: ReadingProcessor::new(profile, rig),
            series: SeriesCollector::new(),
            records: Vec::new(),
            rejected: 0,
        }
    }

    /// Test run using the built-in profile of `engine` and the default rig
    pub fn with_defaults(engine: EngineType) -> TestRun {
        TestRun::new(engine, EngineProfile::for_engine(engine), RigConstants::default())
    }

    pub fn engine(&self) -> EngineType {
        self.engine
    }

    /// Processes one reading. A reading error only rejects this reading; the run stays usable.
    pub fn submit(&mut self, reading: &RawReading) -> ReadingOutcome {
        match self.processor.process(reading) {
            Ok(record) => {
                self.series.push(&record);
                self.records.push(record);
                ReadingOutcome::Accepted(record)
            }
            Err(err) => {
                error!(load = reading.load, %err, "reading rejected");
                self.rejected += 1;
                ReadingOutcome::Rejected(err)
            }
        }
    }

    /// Drains `source`, calling `report` with the reading number and outcome of each reading.
    /// Errors of the source itself (closed input, unreadable file) end the run.
    pub fn run<S, F>(&mut self, source: &mut S, mut report: F) -> Result<()>
    where
        S: ReadingSource + ?Sized,
        F: FnMut(usize, &ReadingOutcome),
    {
        let mut index = 0;
        while let Some(reading) = source.next_reading()? {
            index += 1;
            let outcome = self.submit(&reading);
            report(index, &outcome);
        }
        info!(
            engine = self.engine.name(),
            accepted = self.records.len(),
            rejected = self.rejected,
            "test run finished"
        );
        Ok(())
    }

    pub fn records(&self) -> &[MetricsRecord] {
        &self.records
    }

    pub fn rejected(&self) -> usize {
        self.rejected
    }

    pub fn series(&self) -> SeriesSnapshot {
        self.series.snapshot()
    }

    /// The four diagnostic charts of the collected series
    pub fn charts(&self) -> Vec<Chart> {
        plot::diagnostic_charts(&self.series.snapshot(), self.engine)
    }

    /// Writes every accepted record as a tab separated table with a header line
    pub fn write_to_file(&self, file_name: &str) -> Result<()> {
        let mut file = std::fs::File::create(file_name)?;
        self.write_table(&mut file)?;
        info!(file = file_name, rows = self.records.len(), "metrics table written");
        Ok(())
    }

    pub fn write_table<W: Write>(&self, out: &mut W) -> Result<()> {
        let first = match self.records.first() {
            Some(r) => r,
            None => return Ok(()),
        };
        writeln!(out, "reading\t{}", first.get_headers())?;
        for (i, record) in self.records.iter().enumerate() {
            let row: Vec<String> = record
                .get_storable_data()
                .iter()
                .map(|v| format!("{}", v))
                .collect();
            writeln!(out, "{}\t{}", i + 1, row.join("\t"))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ReadingList;

    fn reading(load: f64, current: f64) -> RawReading {
        RawReading {
            load,
            voltage: 220.0,
            current,
            speed: 1500.0,
            fuel_time: 20.0,
            h1: 100.0,
            h2: 120.0,
            water_inlet: 25.0,
            water_outlet: 40.0,
            exhaust_temp: 300.0,
            water_flow: 0.05,
        }
    }

    #[test]
    fn rejected_reading_does_not_stop_the_run() {
        let mut bad = reading(2000.0, 9.0);
        bad.h1 = -500.0;
        let mut source = ReadingList::new(vec![reading(1000.0, 5.0), bad, reading(3000.0, 13.0)]);
        let mut run = TestRun::with_defaults(EngineType::Diesel);
        let mut seen = Vec::new();
        run.run(&mut source, |i, outcome| {
            seen.push((i, matches!(outcome, ReadingOutcome::Accepted(_))))
        })
        .unwrap();

        assert_eq!(seen, vec![(1, true), (2, false), (3, true)]);
        assert_eq!(run.records().len(), 2);
        assert_eq!(run.rejected(), 1);
        assert_eq!(run.series().load.to_vec(), vec![1000.0, 3000.0]);
    }

    #[test]
    fn submit_reports_the_error() {
        let mut run = TestRun::with_defaults(EngineType::Petrol);
        let mut r = reading(1000.0, 5.0);
        r.fuel_time = 0.0;
        match run.submit(&r) {
            ReadingOutcome::Rejected(RigError::NonPositiveFuelTime(t)) => assert_eq!(t, 0.0),
            other => panic!("unexpected outcome {:?}", other),
        }
        assert!(run.records().is_empty());
    }

    #[test]
    fn accepted_outcome_is_the_stored_record() {
        let mut run = TestRun::with_defaults(EngineType::Diesel);
        let record = match run.submit(&reading(1000.0, 5.0)) {
            ReadingOutcome::Accepted(record) => record,
            other => panic!("unexpected outcome {:?}", other),
        };
        assert_eq!(run.records(), &[record]);
        assert_eq!(run.series().load.to_vec(), vec![1000.0]);
    }

    #[test]
    fn table_has_one_row_per_record() {
        let mut run = TestRun::with_defaults(EngineType::Diesel);
        run.submit(&reading(1000.0, 5.0));
        run.submit(&reading(2000.0, 9.0));
        let mut out = Vec::new();
        run.write_table(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("reading\tload [W]"));
        assert!(lines[1].starts_with("1\t1000\t"));
        assert!(lines[2].starts_with("2\t2000\t"));
        assert_eq!(lines[1].split('\t').count(), 15);
    }

    #[test]
    fn empty_run_writes_nothing() {
        let run = TestRun::with_defaults(EngineType::Diesel);
        let mut out = Vec::new();
        run.write_table(&mut out).unwrap();
        assert!(out.is_empty());
    }
}
