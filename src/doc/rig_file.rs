//! # Describing a rig with a `.json` file
//!
//! Every field is optional. Omitted fields keep the values of the stock single
//! cylinder rig (`RigConstants::default()` and the built-in engine profiles).
//! Lengths of the orifice and of the cylinder geometry are given in millimetres.
//!
//! Densities, gravity, gas constant, ambient pressure and temperature, generator
//! efficiency, fuel sample volume, stroke, bore, calorific value and specific
//! gravity must be positive; every other number must be finite. A file breaking
//! this is refused with `RigError::InvalidRigConstant`.
//!
//! ## The rig.json file
//!
//! ```json
//! {
//!     "gravity": 9.81,
//!     "water_density": 1000.0,
//!     "air_gas_constant": 287.0,
//!     "atmospheric_pressure": 101325.0,
//!     "ambient_temperature": 298.0,
//!     "generator_efficiency": 0.80,
//!     "discharge_coefficient": 0.6,
//!     "orifice_diameter": 20.0,
//!     "cp_water": 4.187,
//!     "cp_exhaust": 1.005,
//!     "fuel_sample_volume": 10.0,
//!     "nominal_air_density": 1.2,
//!     "exhaust_reference_temp": 25.0,
//!     "geometry": {
//!         "cylinders": 1,
//!         "stroke": 110.0,
//!         "bore": 80.0
//!     },
//!     "profiles": {
//!         "diesel": {
//!             "calorific_value": 45500.0,
//!             "specific_gravity": 0.82,
//!             "friction_power": 0.75
//!         }
//!     }
//! }
//! ```
//!
//! ## The readings.json file
//!
//! Passed with `--readings`, replaces the interactive observation table.
//!
//! ```json
//! [
//!     {
//!         "load": 1000.0, "voltage": 220.0, "current": 5.0, "speed": 1500.0,
//!         "fuel_time": 20.0, "h1": 100.0, "h2": 120.0,
//!         "water_inlet": 25.0, "water_outlet": 40.0, "exhaust_temp": 300.0,
//!         "water_flow": 0.05
//!     }
//! ]
//! ```
//!
//! ## From code
//!
//! ```
//! use heat_balance_rig as hbr;
//! use hbr::{EngineType, RawReading, ReadingList, RigConfig, TestRun};
//!
//! let config = RigConfig::from_json_str(r#"{ "generator_efficiency": 0.85 }"#).unwrap();
//! let engine = EngineType::Diesel;
//! let mut run = TestRun::new(engine, config.profile(engine), config.constants);
//!
//! let mut source = ReadingList::new(vec![RawReading::from_values([
//!     1000.0, 220.0, 5.0, 1500.0, 20.0, 100.0, 120.0, 25.0, 40.0, 300.0, 0.05,
//! ])]);
//! run.run(&mut source, |i, outcome| println!("reading {}: {:?}", i, outcome)).unwrap();
//!
//! assert_eq!(run.records().len(), 1);
//! assert_eq!(run.charts().len(), 4);
//! ```
