// Reading and treating the optional rig `.json` file

use super::profile::{EngineProfile, EngineType};
use super::rig::{check_finite, check_positive, Geometry, RigConstants};
use crate::error::{Result, RigError};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct JsonRig {
    pub gravity: Option<f64>,
    pub water_density: Option<f64>,
    pub air_gas_constant: Option<f64>,
    pub atmospheric_pressure: Option<f64>,
    pub ambient_temperature: Option<f64>,
    pub generator_efficiency: Option<f64>,
    pub discharge_coefficient: Option<f64>,
    pub orifice_diameter: Option<f64>,   // [mm]
    pub cp_water: Option<f64>,
    pub cp_exhaust: Option<f64>,
    pub fuel_sample_volume: Option<f64>, // [cm³]
    pub nominal_air_density: Option<f64>,
    pub exhaust_reference_temp: Option<f64>,
    pub geometry: Option<JsonGeometry>,
    pub profiles: Option<JsonProfiles>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub struct JsonGeometry {
    pub cylinders: u32,
    pub stroke: f64, // [mm]
    pub bore: f64,   // [mm]
}

#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct JsonProfiles {
    pub diesel: Option<EngineProfile>,
    pub petrol: Option<EngineProfile>,
}

/// Rig constants plus the engine profiles available for selection
#[derive(Debug, Clone, PartialEq)]
pub struct RigConfig {
    pub constants: RigConstants,
    diesel: EngineProfile,
    petrol: EngineProfile,
}

impl Default for RigConfig {
    fn default() -> Self {
        RigConfig {
            constants: RigConstants::default(),
            diesel: EngineProfile::DIESEL,
            petrol: EngineProfile::PETROL,
        }
    }
}

impl RigConfig {
    /// Reads a rig file. Every field is optional, missing ones keep the built-in value.
    /// The resolved constants and profiles are validated before use.
    pub fn from_file(file_name: &str) -> Result<RigConfig> {
        let json_file = std::fs::read_to_string(file_name)?;
        let config = RigConfig::parse(&json_file, file_name)?;
        info!(file = file_name, "rig configuration loaded");
        Ok(config)
    }

    pub fn from_json_str(json: &str) -> Result<RigConfig> {
        RigConfig::parse(json, "<string>")
    }

    fn parse(json: &str, file_name: &str) -> Result<RigConfig> {
        let json_rig: JsonRig = serde_json::from_str(json).map_err(|source| RigError::Json {
            file: file_name.to_string(),
            source,
        })?;
        let config = RigConfig::from(json_rig);
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.constants.validate()?;
        for profile in [&self.diesel, &self.petrol] {
            check_positive("calorific_value", profile.calorific_value)?;
            check_positive("specific_gravity", profile.specific_gravity)?;
            check_finite("friction_power", profile.friction_power)?;
        }
        Ok(())
    }

    /// Profile used for `engine`, built-in unless the rig file replaced it
    pub fn profile(&self, engine: EngineType) -> EngineProfile {
        let profile = match engine {
            EngineType::Diesel => self.diesel,
            EngineType::Petrol => self.petrol,
        };
        info!(engine = engine.name(), %profile, "engine profile selected");
        profile
    }
}

impl From<JsonRig> for RigConfig {
    fn from(json: JsonRig) -> RigConfig {
        let def = RigConstants::default();
        // geometry and orifice come in millimetres
        let geometry = match json.geometry {
            Some(g) => Geometry::new(g.cylinders, g.stroke * 1e-3, g.bore * 1e-3),
            None => def.geometry,
        };
        let constants = RigConstants {
            gravity: json.gravity.unwrap_or(def.gravity),
            water_density: json.water_density.unwrap_or(def.water_density),
            air_gas_constant: json.air_gas_constant.unwrap_or(def.air_gas_constant),
            atmospheric_pressure: json
                .atmospheric_pressure
                .unwrap_or(def.atmospheric_pressure),
            ambient_temperature: json.ambient_temperature.unwrap_or(def.ambient_temperature),
            generator_efficiency: json
                .generator_efficiency
                .unwrap_or(def.generator_efficiency),
            discharge_coefficient: json
                .discharge_coefficient
                .unwrap_or(def.discharge_coefficient),
            orifice_diameter: json.orifice_diameter.map_or(def.orifice_diameter, |d| d * 1e-3),
            cp_water: json.cp_water.unwrap_or(def.cp_water),
            cp_exhaust: json.cp_exhaust.unwrap_or(def.cp_exhaust),
            fuel_sample_volume: json.fuel_sample_volume.unwrap_or(def.fuel_sample_volume),
            nominal_air_density: json.nominal_air_density.unwrap_or(def.nominal_air_density),
            exhaust_reference_temp: json
                .exhaust_reference_temp
                .unwrap_or(def.exhaust_reference_temp),
            geometry,
        };
        let profiles = json.profiles.unwrap_or_default();
        let config = RigConfig {
            constants,
            diesel: profiles.diesel.unwrap_or(EngineProfile::DIESEL),
            petrol: profiles.petrol.unwrap_or(EngineProfile::PETROL),
        };
        debug!(?config, "rig configuration resolved");
        config
    }
}
