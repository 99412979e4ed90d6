//! Per-reading performance and heat balance calculation

use crate::core::metrics::MetricsRecord;
use crate::core::reading::RawReading;
use crate::engine::profile::EngineProfile;
use crate::engine::rig::RigConstants;
use crate::error::{Result, RigError};
use tracing::{debug, warn};

/// Turns raw observations into a [`MetricsRecord`] for a fixed engine profile and rig.
///
/// The calculation is pure: the same reading always yields a bit-identical record.
/// Divisions by a vanishing indicated power, heat input, brake power or swept volume
/// produce `0.0` instead of an error. A negative (or NaN) manometer head, a negative
/// orifice radicand or a non-positive fuel time rejects the reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReadingProcessor {
    profile: EngineProfile,
    rig: RigConstants,
}

impl ReadingProcessor {
    pub fn new(profile: EngineProfile, rig: RigConstants) -> ReadingProcessor {
        ReadingProcessor { profile, rig }
    }

    pub fn process(&self, reading: &RawReading) -> Result<MetricsRecord> {
        process_reading(reading, &self.profile, &self.rig)
    }
}

/// Computes every metric of one reading. See [`ReadingProcessor`].
pub fn process_reading(
    reading: &RawReading,
    profile: &EngineProfile,
    rig: &RigConstants,
) -> Result<MetricsRecord> {
    // rejects NaN as well
    if !(reading.fuel_time > 0.0) {
        return Err(RigError::NonPositiveFuelTime(reading.fuel_time));
    }
    let head = reading.manometer_head();
    if !(head >= 0.0) {
        return Err(RigError::InvalidSensorGeometry { head });
    }

    // Fuel
    let fuel_flow = (rig.fuel_sample_volume * profile.specific_gravity)
        / (reading.fuel_time * 1000.0); // [kg/s]

    // Power and efficiencies
    let brake_power =
        (reading.voltage * reading.current) / (1000.0 * rig.generator_efficiency); // [kW]
    let indicated_power = brake_power + profile.friction_power; // [kW]
    let mechanical_efficiency =
        guarded_ratio(brake_power, indicated_power, "indicated power") * 100.0;
    let heat_input = fuel_flow * profile.calorific_value; // [kW]
    let brake_thermal_efficiency = guarded_ratio(brake_power, heat_input, "heat input") * 100.0;
    let sfc = guarded_ratio(fuel_flow * 3600.0, brake_power, "brake power"); // [kg/kWh]

    // BMEP
    let geom = &rig.geometry;
    let swept_rate =
        geom.stroke() * geom.bore_area() * reading.speed * (geom.cylinders() as f64 / 2.0);
    let bmep = guarded_ratio(brake_power * 60.0 * 1000.0, swept_rate, "swept volume rate"); // [Pa]
    let bmep = bmep / 1e5; // [bar]

    // Air intake through the orifice
    let water_head = head / 1000.0; // [m]
    let air_head = (water_head * rig.water_density) / rig.nominal_air_density; // [m]
    let radicand = 2.0 * rig.gravity * air_head;
    if !(radicand >= 0.0) {
        return Err(RigError::InvalidSensorGeometry { head });
    }
    let air_flow = rig.air_density()
        * rig.discharge_coefficient
        * rig.orifice_area()
        * radicand.sqrt(); // [kg/s]
    let exhaust_flow = air_flow + fuel_flow; // [kg/s]

    // Heat balance
    let cooling_loss =
        reading.water_flow * rig.cp_water * (reading.water_outlet - reading.water_inlet); // [kW]
    let exhaust_loss =
        exhaust_flow * rig.cp_exhaust * (reading.exhaust_temp - rig.exhaust_reference_temp); // [kW]
    let unaccounted_loss = heat_input - (brake_power + cooling_loss + exhaust_loss); // [kW]

    debug!(
        load = reading.load,
        fuel_flow,
        brake_power,
        indicated_power,
        bmep,
        air_flow,
        heat_input,
        unaccounted_loss,
        "reading processed"
    );

    Ok(MetricsRecord {
        load: reading.load,
        fuel_flow,
        brake_power,
        indicated_power,
        mechanical_efficiency,
        brake_thermal_efficiency,
        sfc,
        bmep,
        air_flow,
        exhaust_flow,
        heat_input,
        cooling_loss,
        exhaust_loss,
        unaccounted_loss,
    })
}

/// `num / den`, or `0.0` when `den` is zero
fn guarded_ratio(num: f64, den: f64, what: &str) -> f64 {
    if den != 0.0 {
        num / den
    } else {
        warn!("{} is zero, ratio reported as 0", what);
        0.0
    }
}
