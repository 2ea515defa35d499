//! `HospitalSim` — simulation state and the four transition handlers.

use hq_core::{NurseId, PatientId, SimConfig, SimTime, StartMode};

use crate::{
    Counters, EngineError, EngineResult, Event, EventKind, EventSchedule, Occupancy, PoolUsage,
    ServiceUnit, SimObserver, VariateKind, VariateSource, Ward,
};

/// The simulation engine: one owned value holding every piece of mutable
/// run state, passed explicitly through the handlers.  No ambient state,
/// no interior mutability, no threads.
///
/// A patient's stage is encoded by which structure holds its id:
///
/// ```text
/// waiting queue → in triage → in a bed ─┐
///                          └→ at home  ─┴→ healed (registry only)
/// ```
///
/// Create via [`HospitalSim::new`], drive via [`run`][HospitalSim::run],
/// then hand the finished value to a reporting layer — all terminal state
/// is reachable through the public fields.
pub struct HospitalSim {
    /// Immutable run parameters.
    pub config: SimConfig,

    /// Current simulation clock; advanced to each event's timestamp before
    /// its handler mutates anything.
    pub now: SimTime,

    /// Entity registries and the three FIFO queues.
    pub ward: Ward,

    /// Instantaneous patient census.
    pub occupancy: Occupancy,

    /// Patient-flow totals, including the stopping counter.
    pub counters: Counters,

    /// All-idle / all-busy windows for the nurse pool.
    pub triage_usage: PoolUsage,

    /// All-idle / all-busy windows for the bed pool.
    pub bed_usage: PoolUsage,

    pub(crate) schedule: EventSchedule,
    pub(crate) variates: VariateSource,
    seeded: bool,
}

impl HospitalSim {
    // ── Construction ──────────────────────────────────────────────────────

    /// Validate `config` and build an engine ready to run.
    ///
    /// All configuration errors surface here; `run` cannot fail on user
    /// input afterwards.
    pub fn new(config: SimConfig) -> EngineResult<Self> {
        config.validate()?;
        let variates = VariateSource::new(&config)?;
        let ward = Ward::new(config.nurses, config.beds);
        Ok(Self {
            config,
            now: SimTime::ZERO,
            ward,
            occupancy: Occupancy::default(),
            counters: Counters::default(),
            triage_usage: PoolUsage::default(),
            bed_usage: PoolUsage::default(),
            schedule: EventSchedule::new(),
            variates,
            seeded: false,
        })
    }

    // ── Run loop ──────────────────────────────────────────────────────────

    /// Run until the healed-patient target is reached.
    ///
    /// The first call seeds the arrival chain (and any start-mode
    /// occupancy); a call on an already-finished engine returns
    /// immediately.  `Err(ScheduleExhausted)` indicates an engine bug, not
    /// bad input — see [`EngineError::ScheduleExhausted`].
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> EngineResult<()> {
        if !self.seeded {
            self.seeded = true;
            self.seed(observer);
        }
        while self.counters.healed < self.config.healed_target {
            let event = self.schedule.pop_min().ok_or(EngineError::ScheduleExhausted {
                healed: self.counters.healed,
                target: self.config.healed_target,
            })?;
            self.dispatch(event, observer);
        }
        observer.on_sim_end(self.now);
        Ok(())
    }

    // ── Initialization ────────────────────────────────────────────────────

    /// Apply the start-mode occupancy, then dispatch the first Arrival at
    /// time 0 directly — every later Arrival is scheduled by its
    /// predecessor, so the chain needs exactly one external push.
    fn seed<O: SimObserver>(&mut self, observer: &mut O) {
        let t0 = SimTime::ZERO;
        match self.config.start_mode {
            StartMode::Empty => {
                self.triage_usage.all_idle.open(t0);
                self.bed_usage.all_idle.open(t0);
            }
            mode @ (StartMode::Half | StartMode::Full) => {
                for _ in 0..mode.occupied(self.config.nurses) {
                    let Some(nurse) = self.ward.idle_nurses.pop_front() else { break };
                    let patient = self.ward.register_patient();
                    self.occupancy.in_triage += 1;
                    self.occupancy.in_system += 1;
                    let duration = self.variates.triage_service();
                    observer.on_variate(VariateKind::TriageService, duration);
                    self.schedule.push(Event {
                        time: t0.offset(duration),
                        kind: EventKind::TriageDeparture,
                        patient,
                        service: ServiceUnit::Nurse(nurse),
                        duration,
                    });
                }
                if self.ward.idle_nurses.is_empty() {
                    self.triage_usage.all_busy.open(t0);
                }

                for _ in 0..mode.occupied(self.config.beds) {
                    let Some(bed) = self.ward.idle_beds.pop_front() else { break };
                    let patient = self.ward.register_patient();
                    self.occupancy.in_beds += 1;
                    self.occupancy.in_system += 1;
                    let duration = self.variates.bed_treatment();
                    observer.on_variate(VariateKind::BedTreatment, duration);
                    self.schedule.push(Event {
                        time: t0.offset(duration),
                        kind: EventKind::TreatedAtHospital,
                        patient,
                        service: ServiceUnit::Bed(bed),
                        duration,
                    });
                }
                if self.ward.idle_beds.is_empty() {
                    self.bed_usage.all_busy.open(t0);
                }
            }
        }

        let patient = self.ward.register_patient();
        let first = Event {
            time: t0,
            kind: EventKind::Arrival,
            patient,
            service: ServiceUnit::None,
            duration: 0.0,
        };
        self.dispatch(first, observer);
    }

    // ── Dispatch ──────────────────────────────────────────────────────────

    fn dispatch<O: SimObserver>(&mut self, event: Event, observer: &mut O) {
        self.now = event.time;
        match event.kind {
            EventKind::Arrival           => self.on_arrival(&event, observer),
            EventKind::TriageDeparture   => self.on_triage_departure(&event, observer),
            EventKind::TreatedAtHome     => self.on_treated_at_home(&event),
            EventKind::TreatedAtHospital => self.on_treated_at_hospital(&event),
        }
        debug_assert_eq!(
            self.occupancy.in_system,
            self.occupancy.in_triage + self.occupancy.in_beds + self.occupancy.at_home,
        );
        debug_assert!(self.occupancy.in_triage as usize <= self.ward.nurses.len());
        debug_assert!(self.occupancy.in_beds as usize <= self.ward.beds.len());
        observer.on_event(&event, &self.occupancy, &self.counters);
    }

    // ── Handlers ──────────────────────────────────────────────────────────

    /// A new patient enters the system: straight to a nurse if one is idle,
    /// otherwise to the back of the waiting queue.  Always schedules the
    /// next Arrival, keeping exactly one future arrival live.
    fn on_arrival<O: SimObserver>(&mut self, event: &Event, observer: &mut O) {
        self.occupancy.in_system += 1;
        self.counters.arrived += 1;
        self.ward.patient_mut(event.patient).enter_time = Some(event.time);

        match self.ward.idle_nurses.pop_front() {
            Some(nurse) => {
                self.counters.direct_to_triage += 1;
                self.begin_triage(event.patient, nurse, observer);
            }
            None => {
                self.occupancy.waiting += 1;
                self.counters.waited_for_triage += 1;
                self.ward.triage_queue.push_back(event.patient);
            }
        }

        let next = self.ward.register_patient();
        let gap = self.variates.interarrival();
        observer.on_variate(VariateKind::Interarrival, gap);
        self.schedule.push(Event {
            time: self.now.offset(gap),
            kind: EventKind::Arrival,
            patient: next,
            service: ServiceUnit::None,
            duration: 0.0,
        });
    }

    /// Commit an already-popped idle nurse to `patient`: usage-window edges,
    /// census, service draw, and the departure event.
    fn begin_triage<O: SimObserver>(&mut self, patient: PatientId, nurse: NurseId, observer: &mut O) {
        self.triage_usage.all_idle.close(self.now);
        if self.ward.idle_nurses.is_empty() {
            self.triage_usage.all_busy.open(self.now);
        }
        self.occupancy.in_triage += 1;
        let duration = self.variates.triage_service();
        observer.on_variate(VariateKind::TriageService, duration);
        self.schedule.push(Event {
            time: self.now.offset(duration),
            kind: EventKind::TriageDeparture,
            patient,
            service: ServiceUnit::Nurse(nurse),
            duration,
        });
    }

    /// A patient leaves triage: the condition split decides home vs. bed
    /// (vs. rejection), and the freed nurse is offered to the waiting queue
    /// before any future arrival can claim them.
    fn on_triage_departure<O: SimObserver>(&mut self, event: &Event, observer: &mut O) {
        let ServiceUnit::Nurse(nurse) = event.service else {
            debug_assert!(false, "triage departure without a nurse");
            return;
        };

        self.occupancy.in_triage -= 1;
        self.ward.idle_nurses.push_back(nurse);
        if self.ward.idle_nurses.len() == 1 {
            self.triage_usage.all_busy.close(self.now);
        }
        self.ward.nurse_mut(nurse).busy_time += event.duration;
        if self.occupancy.in_triage == 0 {
            self.triage_usage.all_idle.open(self.now);
        }

        if self.variates.condition_split() < self.config.p_stable {
            // Stable: home treatment at the configured rate.
            self.occupancy.at_home += 1;
            let duration = self.variates.home_stable();
            observer.on_variate(VariateKind::HomeStable, duration);
            self.schedule.push(Event {
                time: self.now.offset(duration),
                kind: EventKind::TreatedAtHome,
                patient: event.patient,
                service: ServiceUnit::None,
                duration,
            });
        } else {
            self.counters.critical_cases += 1;
            match self.ward.idle_beds.pop_front() {
                Some(bed) => {
                    self.bed_usage.all_idle.close(self.now);
                    if self.ward.idle_beds.is_empty() {
                        self.bed_usage.all_busy.open(self.now);
                    }
                    self.occupancy.in_beds += 1;
                    self.counters.admitted_to_bed += 1;
                    let duration = self.variates.bed_treatment();
                    observer.on_variate(VariateKind::BedTreatment, duration);
                    self.schedule.push(Event {
                        time: self.now.offset(duration),
                        kind: EventKind::TreatedAtHospital,
                        patient: event.patient,
                        service: ServiceUnit::Bed(bed),
                        duration,
                    });
                }
                None => {
                    // No bed free: home treatment at the slower derived rate.
                    self.counters.rejected_from_beds += 1;
                    self.occupancy.at_home += 1;
                    let duration = self.variates.home_critical();
                    observer.on_variate(VariateKind::HomeCritical, duration);
                    self.schedule.push(Event {
                        time: self.now.offset(duration),
                        kind: EventKind::TreatedAtHome,
                        patient: event.patient,
                        service: ServiceUnit::None,
                        duration,
                    });
                }
            }
        }

        // Immediate hand-off: the freed nurse serves the longest-waiting
        // patient, never a not-yet-arrived one.
        if let Some(waiting) = self.ward.triage_queue.pop_front() {
            self.occupancy.waiting -= 1;
            if let Some(nurse) = self.ward.idle_nurses.pop_front() {
                self.begin_triage(waiting, nurse, observer);
            }
        }
    }

    /// A home-treated patient heals.
    fn on_treated_at_home(&mut self, event: &Event) {
        self.occupancy.at_home -= 1;
        self.occupancy.in_system -= 1;
        self.counters.healed += 1;
        self.counters.treated_at_home += 1;
        self.ward.patient_mut(event.patient).exit_time = Some(event.time);
    }

    /// A bed-treated patient heals and frees their bed.
    fn on_treated_at_hospital(&mut self, event: &Event) {
        let ServiceUnit::Bed(bed) = event.service else {
            debug_assert!(false, "hospital treatment without a bed");
            return;
        };

        self.occupancy.in_beds -= 1;
        self.occupancy.in_system -= 1;
        self.counters.healed += 1;
        self.counters.treated_at_hospital += 1;
        self.ward.patient_mut(event.patient).exit_time = Some(event.time);

        if self.occupancy.in_beds == 0 {
            self.bed_usage.all_idle.open(self.now);
        }
        self.ward.idle_beds.push_back(bed);
        if self.ward.idle_beds.len() == 1 {
            self.bed_usage.all_busy.close(self.now);
        }
        self.ward.bed_mut(bed).busy_time += event.duration;
    }
}
