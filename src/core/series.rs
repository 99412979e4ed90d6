use crate::core::metrics::MetricsRecord;
use ndarray::*;

/// Accumulates the plotted projection of every processed reading, in reading order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesCollector {
    load: Vec<f64>,
    bmep: Vec<f64>,
    sfc: Vec<f64>,
    brake_thermal_efficiency: Vec<f64>,
    mechanical_efficiency: Vec<f64>,
}

impl SeriesCollector {
    pub fn new() -> SeriesCollector {
        SeriesCollector::default()
    }

    pub fn push(&mut self, record: &MetricsRecord) {
        self.load.push(record.load);
        self.bmep.push(record.bmep);
        self.sfc.push(record.sfc);
        self.brake_thermal_efficiency.push(record.brake_thermal_efficiency);
        self.mechanical_efficiency.push(record.mechanical_efficiency);
    }

    pub fn len(&self) -> usize {
        self.load.len()
    }

    pub fn is_empty(&self) -> bool {
        self.load.is_empty()
    }

    /// Read-only copy of the collected sequences
    pub fn snapshot(&self) -> SeriesSnapshot {
        SeriesSnapshot {
            load: Array1::from(self.load.clone()),
            bmep: Array1::from(self.bmep.clone()),
            sfc: Array1::from(self.sfc.clone()),
            brake_thermal_efficiency: Array1::from(self.brake_thermal_efficiency.clone()),
            mechanical_efficiency: Array1::from(self.mechanical_efficiency.clone()),
        }
    }
}

/// Collected series handed to the charts, one entry per reading
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesSnapshot {
    pub load: Array1<f64>,                     // [W]
    pub bmep: Array1<f64>,                     // [bar]
    pub sfc: Array1<f64>,                      // [kg/kWh]
    pub brake_thermal_efficiency: Array1<f64>, // [%]
    pub mechanical_efficiency: Array1<f64>,    // [%]
}

impl SeriesSnapshot {
    pub fn len(&self) -> usize {
        self.load.len()
    }

    pub fn is_empty(&self) -> bool {
        self.load.is_empty()
    }

    /// Series as columns of a `(readings, 5)` table ordered as
    /// load, bmep, sfc, brake thermal efficiency, mechanical efficiency
    pub fn to_table(&self) -> Array2<f64> {
        let columns = [
            &self.load,
            &self.bmep,
            &self.sfc,
            &self.brake_thermal_efficiency,
            &self.mechanical_efficiency,
        ];
        Array2::from_shape_fn((self.len(), columns.len()), |(i, j)| columns[j][i])
    }
}
