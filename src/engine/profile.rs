use crate::error::{Result, RigError};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Engine family mounted on the rig. The family fixes the fuel properties and friction losses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineType {
    Diesel,
    Petrol,
}

impl EngineType {
    /// Maps the operator menu choice: `1` is Diesel, `2` is Petrol. Any other value is rejected.
    pub fn from_choice(choice: i64) -> Result<EngineType> {
        match choice {
            1 => Ok(EngineType::Diesel),
            2 => Ok(EngineType::Petrol),
            other => Err(RigError::InvalidEngineChoice(other)),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            EngineType::Diesel => "Diesel",
            EngineType::Petrol => "Petrol",
        }
    }
}

impl std::str::FromStr for EngineType {
    type Err = RigError;
    fn from_str(s: &str) -> Result<EngineType> {
        match s.trim().to_lowercase().as_str() {
            "diesel" | "1" => Ok(EngineType::Diesel),
            "petrol" | "gasoline" | "2" => Ok(EngineType::Petrol),
            _ => Err(RigError::UnknownEngineName(s.to_string())),
        }
    }
}

impl std::fmt::Display for EngineType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Fuel and friction constants of one engine family. Immutable once selected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngineProfile {
    pub calorific_value: f64,  // [kJ/kg]
    pub specific_gravity: f64, // [-]
    pub friction_power: f64,   // [kW]
}

impl EngineProfile {
    pub const DIESEL: EngineProfile = EngineProfile {
        calorific_value: 45500.0,
        specific_gravity: 0.82,
        friction_power: 0.75,
    };

    pub const PETROL: EngineProfile = EngineProfile {
        calorific_value: 47000.0,
        specific_gravity: 0.74,
        friction_power: 0.60,
    };

    /// Returns the built-in constants of `engine`
    pub fn for_engine(engine: EngineType) -> EngineProfile {
        let profile = match engine {
            EngineType::Diesel => EngineProfile::DIESEL,
            EngineType::Petrol => EngineProfile::PETROL,
        };
        info!(
            engine = engine.name(),
            calorific_value = profile.calorific_value,
            specific_gravity = profile.specific_gravity,
            friction_power = profile.friction_power,
            "engine profile selected"
        );
        profile
    }
}

impl std::fmt::Display for EngineProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "calorific value: {} [kJ/kg], specific gravity: {}, friction power: {} [kW]",
            self.calorific_value, self.specific_gravity, self.friction_power
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_choices() {
        assert_eq!(EngineType::from_choice(1).unwrap(), EngineType::Diesel);
        assert_eq!(EngineType::from_choice(2).unwrap(), EngineType::Petrol);
        for bad in [0, 3, -1, 42] {
            match EngineType::from_choice(bad) {
                Err(RigError::InvalidEngineChoice(c)) => assert_eq!(c, bad),
                other => panic!("choice {} should be rejected, got {:?}", bad, other),
            }
        }
    }

    #[test]
    fn parse_names() {
        assert_eq!("Diesel".parse::<EngineType>().unwrap(), EngineType::Diesel);
        assert_eq!(" petrol ".parse::<EngineType>().unwrap(), EngineType::Petrol);
        assert!("kerosene".parse::<EngineType>().is_err());
    }

    #[test]
    fn built_in_profiles() {
        let diesel = EngineProfile::for_engine(EngineType::Diesel);
        assert_eq!(diesel.calorific_value, 45500.0);
        assert_eq!(diesel.specific_gravity, 0.82);
        assert_eq!(diesel.friction_power, 0.75);

        let petrol = EngineProfile::for_engine(EngineType::Petrol);
        assert_eq!(petrol.calorific_value, 47000.0);
        assert_eq!(petrol.specific_gravity, 0.74);
        assert_eq!(petrol.friction_power, 0.60);
    }
}
