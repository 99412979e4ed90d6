use crate::core::traits::SaveData;
use ansi_term::Style;
use ndarray::*;

/// Performance and heat balance figures derived from one reading
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricsRecord {
    pub load: f64,                     // [W]
    pub fuel_flow: f64,                // [kg/s]
    pub brake_power: f64,              // [kW]
    pub indicated_power: f64,          // [kW]
    pub mechanical_efficiency: f64,    // [%]
    pub brake_thermal_efficiency: f64, // [%]
    pub sfc: f64,                      // [kg/kWh]
    pub bmep: f64,                     // [bar]
    pub air_flow: f64,                 // [kg/s]
    pub exhaust_flow: f64,             // [kg/s]
    pub heat_input: f64,               // [kW]
    pub cooling_loss: f64,             // [kW]
    pub exhaust_loss: f64,             // [kW]
    pub unaccounted_loss: f64,         // [kW]
}

impl MetricsRecord {
    pub fn heat_balance(&self) -> HeatBalance {
        HeatBalance {
            heat_input: self.heat_input,
            brake_power: self.brake_power,
            cooling_loss: self.cooling_loss,
            exhaust_loss: self.exhaust_loss,
            unaccounted_loss: self.unaccounted_loss,
        }
    }
}

/// Split of the fuel heat input, all terms in `[kW]`.
/// `unaccounted_loss` is the closing term and may be negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatBalance {
    pub heat_input: f64,
    pub brake_power: f64,
    pub cooling_loss: f64,
    pub exhaust_loss: f64,
    pub unaccounted_loss: f64,
}

impl HeatBalance {
    /// Sum of the four outgoing terms
    pub fn total_out(&self) -> f64 {
        self.brake_power + self.cooling_loss + self.exhaust_loss + self.unaccounted_loss
    }

    /// Each outgoing term as a percentage of the heat input, in the order
    /// brake power, cooling, exhaust, unaccounted. All zero without heat input.
    pub fn shares(&self) -> [f64; 4] {
        if self.heat_input == 0.0 {
            return [0.0; 4];
        }
        let pct = |q: f64| q / self.heat_input * 100.0;
        [
            pct(self.brake_power),
            pct(self.cooling_loss),
            pct(self.exhaust_loss),
            pct(self.unaccounted_loss),
        ]
    }
}

impl SaveData for MetricsRecord {
    fn get_headers(&self) -> String {
        "load [W]\tfuel flow [kg/s]\tbrake power [kW]\tindicated power [kW]\t\
         mech. efficiency [%]\tbrake thermal efficiency [%]\tsfc [kg/kWh]\tbmep [bar]\t\
         air flow [kg/s]\texhaust flow [kg/s]\theat input [kW]\tcooling loss [kW]\t\
         exhaust loss [kW]\tunaccounted loss [kW]"
            .to_string()
    }
    fn num_storable_variables(&self) -> usize {
        14
    }
    fn get_storable_data(&self) -> Array1<f64> {
        array![
            self.load,
            self.fuel_flow,
            self.brake_power,
            self.indicated_power,
            self.mechanical_efficiency,
            self.brake_thermal_efficiency,
            self.sfc,
            self.bmep,
            self.air_flow,
            self.exhaust_flow,
            self.heat_input,
            self.cooling_loss,
            self.exhaust_loss,
            self.unaccounted_loss
        ]
    }
}

impl std::fmt::Display for MetricsRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [bp_pct, cool_pct, exh_pct, un_pct] = self.heat_balance().shares();
        write!(
            f,
            "{}
        Brake Power = {:.3} kW
        Indicated Power = {:.3} kW
        Mechanical Efficiency = {:.2} %
        Brake Thermal Efficiency = {:.2} %
        SFC = {:.3} kg/kWh
        BMEP = {:.3} bar
        Fuel Flow = {:.6} kg/s \t Air Flow = {:.6} kg/s
{}
        Heat Input = {:.3} kW
        Brake Power = {:.3} kW \t ({:.2} %)
        Cooling Water Loss = {:.3} kW \t ({:.2} %)
        Exhaust Gas Loss = {:.3} kW \t ({:.2} %)
        Unaccounted Loss = {:.3} kW \t ({:.2} %)",
            Style::new().bold().underline().paint("--- PERFORMANCE RESULTS ---"),
            self.brake_power,
            self.indicated_power,
            self.mechanical_efficiency,
            self.brake_thermal_efficiency,
            self.sfc,
            self.bmep,
            self.fuel_flow,
            self.air_flow,
            Style::new().bold().underline().paint("--- HEAT BALANCE ---"),
            self.heat_input,
            self.brake_power,
            bp_pct,
            self.cooling_loss,
            cool_pct,
            self.exhaust_loss,
            exh_pct,
            self.unaccounted_loss,
            un_pct,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> MetricsRecord {
        MetricsRecord {
            load: 1000.0,
            fuel_flow: 4.0e-4,
            brake_power: 2.0,
            indicated_power: 2.75,
            mechanical_efficiency: 72.7,
            brake_thermal_efficiency: 11.0,
            sfc: 0.72,
            bmep: 1.0,
            air_flow: 8.0e-3,
            exhaust_flow: 8.4e-3,
            heat_input: 20.0,
            cooling_loss: 5.0,
            exhaust_loss: 3.0,
            unaccounted_loss: 10.0,
        }
    }

    #[test]
    fn shares_sum_to_one_hundred() {
        let shares = record().heat_balance().shares();
        assert_eq!(shares, [10.0, 25.0, 15.0, 50.0]);
        assert!((shares.iter().sum::<f64>() - 100.0).abs() < 1e-12);
    }

    #[test]
    fn shares_without_heat_input() {
        let mut r = record();
        r.heat_input = 0.0;
        assert_eq!(r.heat_balance().shares(), [0.0; 4]);
    }

    #[test]
    fn storable_data_matches_headers() {
        let r = record();
        let data = r.get_storable_data();
        assert_eq!(data.len(), r.num_storable_variables());
        assert_eq!(r.get_headers().split('\t').count(), r.num_storable_variables());
        assert_eq!(data[0], 1000.0);
        assert_eq!(data[13], 10.0);
    }
}
