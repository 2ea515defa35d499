//! Unit tests for hq-core primitives.

#[cfg(test)]
mod ids {
    use crate::{BedId, NurseId, PatientId};

    #[test]
    fn index_matches_inner() {
        assert_eq!(PatientId(42).index(), 42);
        assert_eq!(NurseId(3).index(), 3);
        assert_eq!(BedId(0).index(), 0);
    }

    #[test]
    fn ordering() {
        assert!(PatientId(0) < PatientId(1));
        assert!(NurseId(100) > NurseId(99));
    }

    #[test]
    fn display() {
        assert_eq!(PatientId(7).to_string(), "PatientId(7)");
        assert_eq!(BedId(2).to_string(), "BedId(2)");
    }
}

#[cfg(test)]
mod time {
    use crate::SimTime;

    #[test]
    fn offset_and_since() {
        let t = SimTime(10.0);
        assert_eq!(t.offset(2.5), SimTime(12.5));
        assert_eq!(SimTime(12.5).since(t), 2.5);
        assert_eq!(SimTime(12.5) - t, 2.5);
        assert_eq!(t + 0.5, SimTime(10.5));
    }

    #[test]
    fn total_order() {
        assert!(SimTime(1.0) < SimTime(2.0));
        assert!(SimTime(-0.5) < SimTime::ZERO);
        let mut times = vec![SimTime(3.0), SimTime(1.0), SimTime(2.0)];
        times.sort();
        assert_eq!(times, vec![SimTime(1.0), SimTime(2.0), SimTime(3.0)]);
    }

    #[test]
    fn display_precision() {
        assert_eq!(SimTime(1.23456).to_string(), "1.235");
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a: f64 = r1.random();
            let b: f64 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut r1 = SimRng::new(1);
        let mut r2 = SimRng::new(2);
        let a: u64 = r1.random();
        let b: u64 = r2.random();
        assert_ne!(a, b);
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let v = rng.gen_range(1.25f64..1.75);
            assert!((1.25..1.75).contains(&v));
        }
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = SimRng::new(0);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }
}

#[cfg(test)]
mod config {
    use crate::{HqError, SimConfig, StartMode};

    fn valid() -> SimConfig {
        SimConfig {
            nurses:           4,
            beds:             7,
            arrival_rate:     1.0,
            triage_rate:      0.357,
            bed_rate:         0.143,
            stable_home_rate: 0.16,
            p_stable:         0.2,
            healed_target:    20,
            start_mode:       StartMode::Empty,
            seed:             42,
        }
    }

    #[test]
    fn valid_config_passes() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn zero_beds_allowed() {
        let mut cfg = valid();
        cfg.beds = 0;
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn zero_nurses_rejected() {
        let mut cfg = valid();
        cfg.nurses = 0;
        assert!(matches!(cfg.validate(), Err(HqError::Config(_))));
    }

    #[test]
    fn nonpositive_rates_rejected() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let mut cfg = valid();
            cfg.arrival_rate = bad;
            assert!(cfg.validate().is_err(), "arrival_rate = {bad} should fail");

            let mut cfg = valid();
            cfg.bed_rate = bad;
            assert!(cfg.validate().is_err(), "bed_rate = {bad} should fail");
        }
    }

    #[test]
    fn p_stable_out_of_range_rejected() {
        for bad in [-0.1, 1.1, f64::NAN] {
            let mut cfg = valid();
            cfg.p_stable = bad;
            assert!(cfg.validate().is_err(), "p_stable = {bad} should fail");
        }
    }

    #[test]
    fn p_stable_bounds_accepted() {
        for ok in [0.0, 1.0] {
            let mut cfg = valid();
            cfg.p_stable = ok;
            assert!(cfg.validate().is_ok());
        }
    }

    #[test]
    fn zero_target_rejected() {
        let mut cfg = valid();
        cfg.healed_target = 0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn start_mode_occupancy() {
        assert_eq!(StartMode::Empty.occupied(4), 0);
        assert_eq!(StartMode::Half.occupied(4), 2);
        assert_eq!(StartMode::Half.occupied(5), 2);
        assert_eq!(StartMode::Half.occupied(1), 0);
        assert_eq!(StartMode::Full.occupied(7), 7);
    }
}
