//! Integration tests for hq-engine.

use hq_core::{SimConfig, SimTime, StartMode};

use crate::{
    Counters, Event, EventKind, EventSchedule, HospitalSim, NoopObserver, Occupancy, ServiceUnit,
    SimObserver, VariateKind,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn base_config() -> SimConfig {
    SimConfig {
        nurses:           4,
        beds:             7,
        arrival_rate:     1.0,
        triage_rate:      0.357,
        bed_rate:         0.143,
        stable_home_rate: 0.16,
        p_stable:         0.2,
        healed_target:    200,
        start_mode:       StartMode::Empty,
        seed:             42,
    }
}

fn arrival(time: f64, patient: u32) -> Event {
    Event {
        time:     SimTime(time),
        kind:     EventKind::Arrival,
        patient:  hq_core::PatientId(patient),
        service:  ServiceUnit::None,
        duration: 0.0,
    }
}

// ── Event schedule ────────────────────────────────────────────────────────────

#[cfg(test)]
mod schedule_tests {
    use super::*;

    #[test]
    fn pops_in_time_order() {
        let mut schedule = EventSchedule::new();
        schedule.push(arrival(3.0, 0));
        schedule.push(arrival(1.0, 1));
        schedule.push(arrival(2.0, 2));

        let times: Vec<f64> = std::iter::from_fn(|| schedule.pop_min())
            .map(|e| e.time.0)
            .collect();
        assert_eq!(times, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn equal_timestamps_pop_in_insertion_order() {
        let mut schedule = EventSchedule::new();
        for patient in 0..5 {
            schedule.push(arrival(1.0, patient));
        }
        let patients: Vec<u32> = std::iter::from_fn(|| schedule.pop_min())
            .map(|e| e.patient.0)
            .collect();
        assert_eq!(patients, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn next_time_peeks_without_removing() {
        let mut schedule = EventSchedule::new();
        assert_eq!(schedule.next_time(), None);
        schedule.push(arrival(2.5, 0));
        schedule.push(arrival(0.5, 1));
        assert_eq!(schedule.next_time(), Some(SimTime(0.5)));
        assert_eq!(schedule.len(), 2);
    }

    #[test]
    fn empty_pop_returns_none() {
        let mut schedule = EventSchedule::new();
        assert!(schedule.is_empty());
        assert!(schedule.pop_min().is_none());
    }
}

// ── Usage windows ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod usage_window_tests {
    use crate::UsageWindow;
    use hq_core::SimTime;

    #[test]
    fn accumulates_closed_spans() {
        let mut window = UsageWindow::default();
        window.open(SimTime(1.0));
        window.close(SimTime(3.0));
        window.open(SimTime(10.0));
        window.close(SimTime(10.5));
        assert!((window.total - 2.5).abs() < 1e-12);
        assert!(!window.is_open());
    }

    #[test]
    fn reopen_while_open_is_noop() {
        let mut window = UsageWindow::default();
        window.open(SimTime(1.0));
        window.open(SimTime(5.0)); // ignored: window anchored at 1.0
        window.close(SimTime(6.0));
        assert!((window.total - 5.0).abs() < 1e-12);
    }

    #[test]
    fn close_while_closed_is_noop() {
        let mut window = UsageWindow::default();
        window.close(SimTime(4.0));
        assert_eq!(window.total, 0.0);
    }
}

// ── Construction ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod construction_tests {
    use super::*;

    #[test]
    fn valid_config_builds() {
        assert!(HospitalSim::new(base_config()).is_ok());
    }

    #[test]
    fn invalid_configs_rejected_before_run() {
        let mut cfg = base_config();
        cfg.nurses = 0;
        assert!(HospitalSim::new(cfg).is_err());

        let mut cfg = base_config();
        cfg.triage_rate = -1.0;
        assert!(HospitalSim::new(cfg).is_err());

        let mut cfg = base_config();
        cfg.p_stable = 1.5;
        assert!(HospitalSim::new(cfg).is_err());

        let mut cfg = base_config();
        cfg.healed_target = 0;
        assert!(HospitalSim::new(cfg).is_err());
    }

    #[test]
    fn zero_beds_build_and_run() {
        let mut cfg = base_config();
        cfg.beds = 0;
        cfg.healed_target = 5;
        let mut sim = HospitalSim::new(cfg).unwrap();
        sim.run(&mut NoopObserver).unwrap();
        assert_eq!(sim.counters.healed, 5);
        assert_eq!(sim.counters.treated_at_hospital, 0);
    }
}

// ── Invariants over a full run ────────────────────────────────────────────────

#[cfg(test)]
mod invariant_tests {
    use super::*;

    /// Checks the census identity, pool bounds, and monotonicity after
    /// every dispatched event.
    struct InvariantChecker {
        nurses:      u32,
        beds:        u32,
        last_time:   f64,
        last_healed: u64,
        events:      usize,
    }

    impl InvariantChecker {
        fn new(cfg: &SimConfig) -> Self {
            Self {
                nurses:      cfg.nurses as u32,
                beds:        cfg.beds as u32,
                last_time:   0.0,
                last_healed: 0,
                events:      0,
            }
        }
    }

    impl SimObserver for InvariantChecker {
        fn on_event(&mut self, event: &Event, occupancy: &Occupancy, counters: &Counters) {
            assert_eq!(
                occupancy.in_system,
                occupancy.in_triage + occupancy.in_beds + occupancy.at_home,
                "census identity broken at t={}",
                event.time
            );
            assert!(occupancy.in_triage <= self.nurses);
            assert!(occupancy.in_beds <= self.beds);
            assert!(event.time.0 >= self.last_time, "clock moved backwards");
            assert!(counters.healed >= self.last_healed);
            self.last_time = event.time.0;
            self.last_healed = counters.healed;
            self.events += 1;
        }
    }

    #[test]
    fn full_run_preserves_invariants() {
        let cfg = base_config();
        let mut checker = InvariantChecker::new(&cfg);
        let mut sim = HospitalSim::new(cfg).unwrap();
        sim.run(&mut checker).unwrap();
        assert!(checker.events >= 200, "at least one event per healed patient");
    }

    #[test]
    fn conservation_totals_hold_at_end() {
        let mut sim = HospitalSim::new(base_config()).unwrap();
        sim.run(&mut NoopObserver).unwrap();

        let c = &sim.counters;
        assert_eq!(c.direct_to_triage + c.waited_for_triage, c.arrived);
        assert_eq!(c.admitted_to_bed + c.rejected_from_beds, c.critical_cases);
        assert_eq!(c.treated_at_home + c.treated_at_hospital, c.healed);
    }

    #[test]
    fn stops_exactly_at_target() {
        let mut sim = HospitalSim::new(base_config()).unwrap();
        sim.run(&mut NoopObserver).unwrap();
        assert_eq!(sim.counters.healed, sim.config.healed_target);
        // The self-perpetuating arrival chain keeps a future event pending.
        assert!(!sim.schedule.is_empty());
    }

    #[test]
    fn rerun_after_finish_is_a_noop() {
        let mut sim = HospitalSim::new(base_config()).unwrap();
        sim.run(&mut NoopObserver).unwrap();
        let counters = sim.counters;
        let final_time = sim.now;
        sim.run(&mut NoopObserver).unwrap();
        assert_eq!(sim.counters, counters);
        assert_eq!(sim.now, final_time);
    }
}

// ── Determinism ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod determinism_tests {
    use super::*;

    #[derive(Default)]
    struct TraceCollector {
        rows: Vec<(f64, EventKind, u32)>,
    }

    impl SimObserver for TraceCollector {
        fn on_event(&mut self, event: &Event, _occ: &Occupancy, _c: &Counters) {
            self.rows.push((event.time.0, event.kind, event.patient.0));
        }
    }

    #[test]
    fn same_seed_replays_identical_trace() {
        let mut first = TraceCollector::default();
        let mut sim = HospitalSim::new(base_config()).unwrap();
        sim.run(&mut first).unwrap();

        let mut second = TraceCollector::default();
        let mut replay = HospitalSim::new(base_config()).unwrap();
        replay.run(&mut second).unwrap();

        assert_eq!(first.rows, second.rows);
        assert_eq!(sim.counters, replay.counters);
        assert_eq!(sim.now, replay.now);
    }

    #[test]
    fn different_seeds_diverge() {
        let mut sim_a = HospitalSim::new(base_config()).unwrap();
        sim_a.run(&mut NoopObserver).unwrap();

        let mut cfg = base_config();
        cfg.seed = 43;
        let mut sim_b = HospitalSim::new(cfg).unwrap();
        sim_b.run(&mut NoopObserver).unwrap();

        assert_ne!(sim_a.now, sim_b.now);
    }
}

// ── Concrete scenarios ────────────────────────────────────────────────────────

#[cfg(test)]
mod scenario_tests {
    use super::*;

    /// Asserts nobody ever waits and no bed is ever occupied.
    struct NoQueueNoBeds;

    impl SimObserver for NoQueueNoBeds {
        fn on_event(&mut self, event: &Event, occupancy: &Occupancy, _c: &Counters) {
            assert_eq!(occupancy.waiting, 0, "unexpected queue at t={}", event.time);
            assert_eq!(occupancy.in_beds, 0, "unexpected bed use at t={}", event.time);
        }
    }

    #[test]
    fn single_stable_patient_goes_straight_home() {
        let cfg = SimConfig {
            nurses:           1,
            beds:             1,
            arrival_rate:     1.0,
            triage_rate:      1.0,
            bed_rate:         1.0,
            stable_home_rate: 1.0,
            p_stable:         1.0, // the stable branch wins every split
            healed_target:    1,
            start_mode:       StartMode::Empty,
            seed:             7,
        };
        let mut sim = HospitalSim::new(cfg).unwrap();
        sim.run(&mut NoQueueNoBeds).unwrap();

        assert_eq!(sim.counters.healed, 1);
        assert_eq!(sim.counters.treated_at_home, 1);
        assert_eq!(sim.counters.treated_at_hospital, 0);
        assert_eq!(sim.counters.critical_cases, 0);
        assert_eq!(sim.counters.direct_to_triage, 1);

        // The healed patient carries both timestamps.
        let sojourn = sim.ward.patients[0].sojourn().unwrap();
        assert!(sojourn > 0.0);
    }

    #[test]
    fn single_nurse_busy_window_matches_worked_time() {
        let cfg = SimConfig {
            nurses:           1,
            beds:             1,
            arrival_rate:     1.0,
            triage_rate:      1.0,
            bed_rate:         1.0,
            stable_home_rate: 1.0,
            p_stable:         1.0,
            healed_target:    1,
            start_mode:       StartMode::Empty,
            seed:             7,
        };
        let mut sim = HospitalSim::new(cfg).unwrap();
        sim.run(&mut NoopObserver).unwrap();

        // With one nurse, pool-busy time and the nurse's own busy time are
        // the same quantity measured two ways.
        let pool_busy = sim.triage_usage.all_busy.total;
        let nurse_busy = sim.ward.nurses[0].busy_time;
        assert!((pool_busy - nurse_busy).abs() < 1e-9, "{pool_busy} vs {nurse_busy}");
        // Beds were never touched.
        assert_eq!(sim.bed_usage.all_busy.total, 0.0);
    }

    #[test]
    fn zero_beds_rejects_every_critical_patient() {
        let cfg = SimConfig {
            nurses:           1,
            beds:             0,
            arrival_rate:     1.0,
            triage_rate:      1.0,
            bed_rate:         1.0,
            stable_home_rate: 1.0,
            p_stable:         0.0, // the critical branch wins every split
            healed_target:    10,
            start_mode:       StartMode::Empty,
            seed:             11,
        };
        let mut sim = HospitalSim::new(cfg).unwrap();
        sim.run(&mut NoopObserver).unwrap();

        let c = &sim.counters;
        assert!(c.critical_cases >= 10);
        assert_eq!(c.rejected_from_beds, c.critical_cases);
        assert_eq!(c.admitted_to_bed, 0);
        assert_eq!(c.treated_at_hospital, 0);
        assert_eq!(c.treated_at_home, c.healed);
    }

    #[test]
    fn zero_beds_uses_only_the_critical_home_variate() {
        #[derive(Default)]
        struct KindCounter {
            bed_treatment: usize,
            home_stable:   usize,
            home_critical: usize,
        }
        impl SimObserver for KindCounter {
            fn on_variate(&mut self, kind: VariateKind, _value: f64) {
                match kind {
                    VariateKind::BedTreatment => self.bed_treatment += 1,
                    VariateKind::HomeStable   => self.home_stable += 1,
                    VariateKind::HomeCritical => self.home_critical += 1,
                    _ => {}
                }
            }
        }

        let cfg = SimConfig {
            nurses:           1,
            beds:             0,
            arrival_rate:     1.0,
            triage_rate:      1.0,
            bed_rate:         1.0,
            stable_home_rate: 1.0,
            p_stable:         0.0,
            healed_target:    5,
            start_mode:       StartMode::Empty,
            seed:             11,
        };
        let mut counter = KindCounter::default();
        let mut sim = HospitalSim::new(cfg).unwrap();
        sim.run(&mut counter).unwrap();

        assert_eq!(counter.bed_treatment, 0);
        assert_eq!(counter.home_stable, 0);
        assert!(counter.home_critical >= 5);
    }
}

// ── FIFO fairness ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod fairness_tests {
    use super::*;

    /// Records the patient id of every triage departure.
    #[derive(Default)]
    struct DepartureOrder {
        patients: Vec<u32>,
    }

    impl SimObserver for DepartureOrder {
        fn on_event(&mut self, event: &Event, _occ: &Occupancy, _c: &Counters) {
            if event.kind == EventKind::TriageDeparture {
                self.patients.push(event.patient.0);
            }
        }
    }

    #[test]
    fn single_nurse_serves_in_arrival_order() {
        // Arrivals much faster than service, so the queue stays deep.
        let cfg = SimConfig {
            nurses:           1,
            beds:             1,
            arrival_rate:     10.0,
            triage_rate:      1.0,
            bed_rate:         1.0,
            stable_home_rate: 1.0,
            p_stable:         1.0,
            healed_target:    30,
            start_mode:       StartMode::Empty,
            seed:             5,
        };
        let mut order = DepartureOrder::default();
        let mut sim = HospitalSim::new(cfg).unwrap();
        sim.run(&mut order).unwrap();

        // Patient ids are assigned in arrival order, so FIFO service means
        // departures come out strictly ascending.
        assert!(order.patients.len() >= 30);
        assert!(
            order.patients.windows(2).all(|w| w[0] < w[1]),
            "out-of-order departures: {:?}",
            order.patients
        );
    }
}

// ── Start modes ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod start_mode_tests {
    use super::*;

    /// Captures the census right after the first dispatched event (the
    /// seeded Arrival at time 0).
    #[derive(Default)]
    struct FirstEvent {
        first: Option<(Occupancy, Counters)>,
    }

    impl SimObserver for FirstEvent {
        fn on_event(&mut self, _event: &Event, occupancy: &Occupancy, counters: &Counters) {
            if self.first.is_none() {
                self.first = Some((*occupancy, *counters));
            }
        }
    }

    #[test]
    fn half_start_occupies_floor_halves() {
        let mut cfg = base_config(); // S=4, K=7
        cfg.start_mode = StartMode::Half;
        cfg.healed_target = 1;
        let mut first = FirstEvent::default();
        let mut sim = HospitalSim::new(cfg).unwrap();
        sim.run(&mut first).unwrap();

        let (occupancy, counters) = first.first.unwrap();
        // 2 synthetic triage patients + 3 synthetic bed patients, plus the
        // first real arrival who finds one of the two remaining nurses.
        assert_eq!(occupancy.in_triage, 3);
        assert_eq!(occupancy.in_beds, 3);
        assert_eq!(occupancy.waiting, 0);
        assert_eq!(occupancy.in_system, 6);
        assert_eq!(counters.direct_to_triage, 1);
    }

    #[test]
    fn full_start_queues_the_first_arrival() {
        let mut cfg = base_config();
        cfg.nurses = 2;
        cfg.beds = 2;
        cfg.start_mode = StartMode::Full;
        cfg.healed_target = 1;
        let mut first = FirstEvent::default();
        let mut sim = HospitalSim::new(cfg).unwrap();
        sim.run(&mut first).unwrap();

        let (occupancy, counters) = first.first.unwrap();
        assert_eq!(occupancy.in_triage, 2);
        assert_eq!(occupancy.in_beds, 2);
        assert_eq!(occupancy.waiting, 1, "no nurse free: first arrival must wait");
        assert_eq!(counters.direct_to_triage, 0);
        assert_eq!(counters.waited_for_triage, 1);
    }

    #[test]
    fn start_modes_complete_and_conserve() {
        for mode in [StartMode::Empty, StartMode::Half, StartMode::Full] {
            let mut cfg = base_config();
            cfg.start_mode = mode;
            cfg.healed_target = 50;
            let mut sim = HospitalSim::new(cfg).unwrap();
            sim.run(&mut NoopObserver).unwrap();
            assert_eq!(sim.counters.healed, 50, "mode {mode}");
            let c = &sim.counters;
            assert_eq!(c.direct_to_triage + c.waited_for_triage, c.arrived, "mode {mode}");
            assert_eq!(c.admitted_to_bed + c.rejected_from_beds, c.critical_cases, "mode {mode}");
        }
    }
}
