use crate::error::{Result, RigError};
use std::f64::consts::PI;

/// Fixed constants of the test rig: ambient conditions, instrumentation and engine geometry.
///
/// Built once at start-up (defaults or a rig file, see [`crate::doc::rig_file`])
/// and shared read-only by every reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigConstants {
    pub gravity: f64,                 // [m/s²]
    pub water_density: f64,           // [kg/m³]
    pub air_gas_constant: f64,        // [J/(kg.K)]
    pub atmospheric_pressure: f64,    // [Pa]
    pub ambient_temperature: f64,     // [K]
    pub generator_efficiency: f64,    // [-]
    pub discharge_coefficient: f64,   // [-]
    pub orifice_diameter: f64,        // [m]
    pub cp_water: f64,                // [kJ/(kg.K)]
    pub cp_exhaust: f64,              // [kJ/(kg.K)]
    pub fuel_sample_volume: f64,      // [cm³] - burette volume timed by the operator
    pub nominal_air_density: f64,     // [kg/m³] - converts water head into air head
    pub exhaust_reference_temp: f64,  // [°C]
    pub geometry: Geometry,
}

impl Default for RigConstants {
    fn default() -> Self {
        RigConstants {
            gravity: 9.81,
            water_density: 1000.0,
            air_gas_constant: 287.0,
            atmospheric_pressure: 101325.0,
            ambient_temperature: 298.0,
            generator_efficiency: 0.80,
            discharge_coefficient: 0.6,
            orifice_diameter: 0.02,
            cp_water: 4.187,
            cp_exhaust: 1.005,
            fuel_sample_volume: 10.0,
            nominal_air_density: 1.2,
            exhaust_reference_temp: 25.0,
            geometry: Geometry::default(),
        }
    }
}

impl RigConstants {
    /// Intake air density at ambient conditions, `[kg/m³]`
    pub fn air_density(&self) -> f64 {
        self.atmospheric_pressure / (self.air_gas_constant * self.ambient_temperature)
    }

    /// Cross section of the intake orifice, `[m²]`
    pub fn orifice_area(&self) -> f64 {
        PI * self.orifice_diameter.powi(2) / 4.0
    }

    /// Refuses constants that would turn every reading into NaN or infinity
    pub fn validate(&self) -> Result<()> {
        check_positive("gravity", self.gravity)?;
        check_positive("water_density", self.water_density)?;
        check_positive("air_gas_constant", self.air_gas_constant)?;
        check_positive("atmospheric_pressure", self.atmospheric_pressure)?;
        check_positive("ambient_temperature", self.ambient_temperature)?;
        check_positive("generator_efficiency", self.generator_efficiency)?;
        check_positive("fuel_sample_volume", self.fuel_sample_volume)?;
        check_positive("nominal_air_density", self.nominal_air_density)?;
        check_positive("stroke", self.geometry.stroke)?;
        check_positive("bore", self.geometry.bore)?;
        check_finite("discharge_coefficient", self.discharge_coefficient)?;
        check_finite("orifice_diameter", self.orifice_diameter)?;
        check_finite("cp_water", self.cp_water)?;
        check_finite("cp_exhaust", self.cp_exhaust)?;
        check_finite("exhaust_reference_temp", self.exhaust_reference_temp)
    }
}

pub(crate) fn check_positive(name: &'static str, value: f64) -> Result<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(RigError::InvalidRigConstant {
            name,
            value,
            expected: "positive",
        })
    }
}

pub(crate) fn check_finite(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(RigError::InvalidRigConstant {
            name,
            value,
            expected: "finite",
        })
    }
}

/// Cylinder geometry. The transverse area is computed once from the bore.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    cylinders: u32,
    stroke: f64,    // [m]
    bore: f64,      // [m]
    bore_area: f64, // [m²]
}

impl Geometry {
    /// Creates a `Geometry` object. Inputs must be in SI units
    pub fn new(cylinders: u32, stroke: f64, bore: f64) -> Geometry {
        Geometry {
            cylinders,
            stroke,
            bore,
            bore_area: PI * bore.powi(2) / 4.0,
        }
    }

    pub fn cylinders(&self) -> u32 {
        self.cylinders
    }

    pub fn stroke(&self) -> f64 {
        self.stroke
    }

    pub fn bore(&self) -> f64 {
        self.bore
    }

    pub fn bore_area(&self) -> f64 {
        self.bore_area
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Geometry::new(1, 0.11, 0.08)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bore_area_follows_bore() {
        let geom = Geometry::default();
        assert_eq!(geom.bore_area(), PI * 0.08f64.powi(2) / 4.0);
        let geom = Geometry::new(4, 0.09, 0.1);
        assert!((geom.bore_area() - 7.853981633974483e-3).abs() < 1e-15);
        assert_eq!(geom.cylinders(), 4);
    }

    #[test]
    fn ambient_air_density() {
        let rig = RigConstants::default();
        // 101325 / (287 * 298)
        assert!((rig.air_density() - 1.18471).abs() < 1e-5);
    }

    #[test]
    fn default_rig_is_valid() {
        assert!(RigConstants::default().validate().is_ok());
    }

    #[test]
    fn zero_generator_efficiency_is_refused() {
        let rig = RigConstants {
            generator_efficiency: 0.0,
            ..RigConstants::default()
        };
        match rig.validate() {
            Err(RigError::InvalidRigConstant { name, value, .. }) => {
                assert_eq!(name, "generator_efficiency");
                assert_eq!(value, 0.0);
            }
            other => panic!("expected InvalidRigConstant, got {:?}", other),
        }
    }

    #[test]
    fn non_finite_constants_are_refused() {
        let rig = RigConstants {
            cp_exhaust: f64::INFINITY,
            ..RigConstants::default()
        };
        assert!(matches!(
            rig.validate(),
            Err(RigError::InvalidRigConstant { name: "cp_exhaust", .. })
        ));
        let rig = RigConstants {
            geometry: Geometry::new(1, f64::NAN, 0.08),
            ..RigConstants::default()
        };
        assert!(matches!(
            rig.validate(),
            Err(RigError::InvalidRigConstant { name: "stroke", .. })
        ));
    }
}
