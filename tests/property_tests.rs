//! Property tests of the per-reading calculation.

use heat_balance_rig::{
    process_reading, EngineProfile, EngineType, MetricsRecord, RawReading, RigConstants,
    SeriesCollector,
};
use proptest::prelude::*;

fn process(r: &RawReading, e: EngineType) -> MetricsRecord {
    process_reading(r, &EngineProfile::for_engine(e), &RigConstants::default()).unwrap()
}

fn engine() -> impl Strategy<Value = EngineType> {
    prop_oneof![Just(EngineType::Diesel), Just(EngineType::Petrol)]
}

prop_compose! {
    fn sane_reading()(
        load in 0.0f64..5000.0,
        voltage in 0.0f64..260.0,
        current in 0.0f64..25.0,
        speed in 500.0f64..3000.0,
        fuel_time in 5.0f64..120.0,
        h1 in 0.0f64..200.0,
        h2 in 0.0f64..200.0,
        water_inlet in 15.0f64..35.0,
        rise in 0.0f64..40.0,
        exhaust_temp in 25.0f64..600.0,
        water_flow in 0.0f64..0.2,
    ) -> RawReading {
        RawReading {
            load, voltage, current, speed, fuel_time, h1, h2,
            water_inlet,
            water_outlet: water_inlet + rise,
            exhaust_temp,
            water_flow,
        }
    }
}

proptest! {
    /// Heat input is fully distributed over the four outgoing terms.
    #[test]
    fn heat_balance_closes(r in sane_reading(), e in engine()) {
        let m = process(&r, e);
        let hb = m.heat_balance();
        let scale = hb.heat_input.abs() + hb.brake_power.abs() + hb.cooling_loss.abs()
            + hb.exhaust_loss.abs() + 1.0;
        prop_assert!((hb.total_out() - hb.heat_input).abs() <= 8.0 * f64::EPSILON * scale);
    }

    #[test]
    fn efficiencies_are_finite_and_bounded(r in sane_reading(), e in engine()) {
        let m = process(&r, e);
        for v in [m.mechanical_efficiency, m.brake_thermal_efficiency, m.sfc, m.bmep,
                  m.air_flow, m.exhaust_flow, m.unaccounted_loss] {
            prop_assert!(v.is_finite());
        }
        prop_assert!(m.mechanical_efficiency >= 0.0 && m.mechanical_efficiency <= 100.0);
        if m.brake_power <= m.heat_input {
            prop_assert!(m.brake_thermal_efficiency >= 0.0 && m.brake_thermal_efficiency <= 100.0);
        }
    }

    #[test]
    fn calculation_is_deterministic(r in sane_reading(), e in engine()) {
        let profile = EngineProfile::for_engine(e);
        let rig = RigConstants::default();
        let a = process_reading(&r, &profile, &rig).unwrap();
        let b = process_reading(&r, &profile, &rig).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn zero_guards_never_leak_nan(
        r in sane_reading(),
        e in engine(),
        zero_power in any::<bool>(),
    ) {
        let mut r = r;
        r.fuel_time = 1e308;
        if zero_power {
            r.current = 0.0;
        }
        let m = process(&r, e);
        prop_assert_eq!(m.brake_thermal_efficiency, 0.0);
        prop_assert!(!m.sfc.is_nan() && !m.mechanical_efficiency.is_nan());
    }

    #[test]
    fn series_keep_order(readings in proptest::collection::vec(sane_reading(), 1..20)) {
        let profile = EngineProfile::for_engine(EngineType::Diesel);
        let rig = RigConstants::default();
        let mut series = SeriesCollector::new();
        for r in &readings {
            series.push(&process_reading(r, &profile, &rig).unwrap());
        }
        let snap = series.snapshot();
        prop_assert_eq!(snap.len(), readings.len());
        let loads: Vec<f64> = readings.iter().map(|r| r.load).collect();
        prop_assert_eq!(snap.load.to_vec(), loads);
    }
}
