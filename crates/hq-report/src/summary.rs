//! Descriptive statistics derived from a finished run.

use std::fmt;

use hq_engine::HospitalSim;

/// Long-run measures computed from terminal engine state.
///
/// A pure function of the final counters, window totals, and registries:
/// recomputing from the same engine value always yields the same report.
#[derive(Clone, Debug, PartialEq)]
pub struct SummaryReport {
    /// Simulated time at which the healed target was reached.
    pub final_time: f64,
    pub healed: u64,
    /// Long-run probability that an arriving patient finds an idle nurse.
    pub nurse_available_probability: f64,
    /// Long-run probability that a critical patient finds a free bed.
    pub bed_available_probability: f64,
    /// Product of the two availability probabilities.
    pub joint_availability: f64,
    /// Share of critical patients turned away from the beds.
    pub bed_rejection_ratio: f64,
    /// Mean of per-nurse busy time over total time.
    pub mean_nurse_utilization: f64,
    /// Mean of per-bed busy time over total time.
    pub mean_bed_occupancy: f64,
    /// Share of all arrivals that healed at home.
    pub home_treatment_share: f64,
    /// Mean sojourn (exit − enter) over patients with both timestamps.
    pub mean_recovery_time: f64,
}

impl SummaryReport {
    pub fn from_sim(sim: &HospitalSim) -> Self {
        let time = sim.now.0;
        let c = &sim.counters;

        let share = |part: u64, whole: u64| {
            if whole == 0 { 0.0 } else { part as f64 / whole as f64 }
        };
        // Availability = fraction of time the pool was NOT saturated.
        let availability = |all_busy_total: f64| {
            if time > 0.0 { (time - all_busy_total) / time } else { 1.0 }
        };
        let mean_utilization = |busy_times: &[f64]| {
            if busy_times.is_empty() || time <= 0.0 {
                0.0
            } else {
                busy_times.iter().map(|b| b / time).sum::<f64>() / busy_times.len() as f64
            }
        };

        let nurse_available = availability(sim.triage_usage.all_busy.total);
        let bed_available = availability(sim.bed_usage.all_busy.total);

        let nurse_busy: Vec<f64> = sim.ward.nurses.iter().map(|n| n.busy_time).collect();
        let bed_busy: Vec<f64> = sim.ward.beds.iter().map(|b| b.busy_time).collect();

        let sojourns: Vec<f64> = sim.ward.patients.iter().filter_map(|p| p.sojourn()).collect();
        let mean_recovery = if sojourns.is_empty() {
            0.0
        } else {
            sojourns.iter().sum::<f64>() / sojourns.len() as f64
        };

        Self {
            final_time: time,
            healed: c.healed,
            nurse_available_probability: nurse_available,
            bed_available_probability: bed_available,
            joint_availability: nurse_available * bed_available,
            bed_rejection_ratio: share(c.rejected_from_beds, c.critical_cases),
            mean_nurse_utilization: mean_utilization(&nurse_busy),
            mean_bed_occupancy: mean_utilization(&bed_busy),
            home_treatment_share: share(c.treated_at_home, c.arrived),
            mean_recovery_time: mean_recovery,
        }
    }
}

impl fmt::Display for SummaryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "healed patients                : {}", self.healed)?;
        writeln!(f, "final simulated time           : {:.3}", self.final_time)?;
        writeln!(f, "P(arriving patient finds nurse): {:.4}", self.nurse_available_probability)?;
        writeln!(f, "P(critical patient finds bed)  : {:.4}", self.bed_available_probability)?;
        writeln!(f, "joint availability             : {:.4}", self.joint_availability)?;
        writeln!(f, "bed rejection ratio            : {:.4}", self.bed_rejection_ratio)?;
        writeln!(f, "mean nurse utilization         : {:.4}", self.mean_nurse_utilization)?;
        writeln!(f, "mean bed occupancy             : {:.4}", self.mean_bed_occupancy)?;
        writeln!(f, "home treatment share           : {:.4}", self.home_treatment_share)?;
        write!(f,   "mean recovery time             : {:.3}", self.mean_recovery_time)
    }
}
