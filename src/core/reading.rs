use serde::{Deserialize, Serialize};

/// Prompt labels of the observation table, in entry order
pub const OBSERVATION_LABELS: [&str; 11] = [
    "Load (W)",
    "Voltage (V)",
    "Current (A)",
    "Speed (RPM)",
    "Time for 10cc fuel (sec)",
    "Manometer h1 (mm)",
    "Manometer h2 (mm)",
    "Cooling water inlet temp (°C)",
    "Cooling water outlet temp (°C)",
    "Exhaust gas temp (°C)",
    "Cooling water flow rate (kg/s)",
];

/// One line of the observation table as entered by the operator
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RawReading {
    pub load: f64,          // [W]
    pub voltage: f64,       // [V]
    pub current: f64,       // [A]
    pub speed: f64,         // [RPM]
    pub fuel_time: f64,     // [s] - time to burn the fuel sample volume
    pub h1: f64,            // [mm]
    pub h2: f64,            // [mm]
    pub water_inlet: f64,   // [°C] - T1
    pub water_outlet: f64,  // [°C] - T2
    pub exhaust_temp: f64,  // [°C] - T4
    pub water_flow: f64,    // [kg/s]
}

impl RawReading {
    /// Builds a reading from values ordered as [`OBSERVATION_LABELS`]
    pub fn from_values(v: [f64; 11]) -> RawReading {
        RawReading {
            load: v[0],
            voltage: v[1],
            current: v[2],
            speed: v[3],
            fuel_time: v[4],
            h1: v[5],
            h2: v[6],
            water_inlet: v[7],
            water_outlet: v[8],
            exhaust_temp: v[9],
            water_flow: v[10],
        }
    }

    /// Manometer head, `[mm]` of water
    pub fn manometer_head(&self) -> f64 {
        self.h1 + self.h2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_follow_label_order() {
        let r = RawReading::from_values([
            1000.0, 220.0, 5.0, 1500.0, 20.0, 100.0, 120.0, 25.0, 40.0, 300.0, 0.05,
        ]);
        assert_eq!(r.load, 1000.0);
        assert_eq!(r.fuel_time, 20.0);
        assert_eq!(r.water_outlet, 40.0);
        assert_eq!(r.water_flow, 0.05);
        assert_eq!(r.manometer_head(), 220.0);
    }
}
