use crate::core::reading::RawReading;
use crate::error::Result;
use crate::plot::Chart;
use ndarray::*;

/// Producer of observations. Yields one reading at a time, `Ok(None)` once exhausted.
pub trait ReadingSource {
    fn next_reading(&mut self) -> Result<Option<RawReading>>;

    /// Number of readings still expected, if known in advance
    fn remaining(&self) -> Option<usize> {
        None
    }
}

/// Terminal consumer of the charts, called once after every reading was processed
pub trait ChartRenderer {
    fn render(&mut self, charts: &[Chart]) -> Result<()>;
}

pub trait SaveData {
    fn get_headers(&self) -> String;
    fn num_storable_variables(&self) -> usize;
    fn get_storable_data(&self) -> Array1<f64>;
}
