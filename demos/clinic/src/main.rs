//! clinic — reference scenario for the rust_hq healthcare queueing simulator.
//!
//! Four triage nurses feed seven hospital beds; one patient arrives per time
//! unit on average and a fifth of them are stable.  Runs until 10,000
//! patients have healed, prints the long-run report, and drops the first
//! stretch of the event trace into `output/clinic/trace.csv`.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use hq_core::{SimConfig, StartMode};
use hq_engine::HospitalSim;
use hq_report::{SummaryReport, TraceObserver, write_trace};

// ── Constants ─────────────────────────────────────────────────────────────────

const NURSES:           u16 = 4;
const BEDS:             u16 = 7;
const ARRIVAL_RATE:     f64 = 1.0;
const TRIAGE_RATE:      f64 = 0.357142857;
const BED_RATE:         f64 = 0.142857143;
const STABLE_HOME_RATE: f64 = 0.16;
const P_STABLE:         f64 = 0.2;
const HEALED_TARGET:    u64 = 10_000;
const SEED:             u64 = 42;
const TRACE_ROWS:       usize = 50; // enough to eyeball the warm-up phase

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== clinic — rust_hq discrete-event simulation ===");
    println!("Nurses: {NURSES}  |  Beds: {BEDS}  |  Target: {HEALED_TARGET} healed  |  Seed: {SEED}");
    println!();

    // 1. Configuration.
    let config = SimConfig {
        nurses:           NURSES,
        beds:             BEDS,
        arrival_rate:     ARRIVAL_RATE,
        triage_rate:      TRIAGE_RATE,
        bed_rate:         BED_RATE,
        stable_home_rate: STABLE_HOME_RATE,
        p_stable:         P_STABLE,
        healed_target:    HEALED_TARGET,
        start_mode:       StartMode::Empty,
        seed:             SEED,
    };

    // 2. Build and run the engine with a bounded trace.
    let mut sim = HospitalSim::new(config)?;
    let mut trace = TraceObserver::with_limit(TRACE_ROWS);

    let t0 = Instant::now();
    sim.run(&mut trace)?;
    let elapsed = t0.elapsed();

    println!(
        "Healed {} patients ({} arrivals) in {:.3} s",
        sim.counters.healed, sim.counters.arrived, elapsed.as_secs_f64()
    );
    println!();

    // 3. Long-run report.
    println!("{}", SummaryReport::from_sim(&sim));
    println!();

    // 4. Per-resource utilization table.
    let time = sim.now.0;
    println!("{:<12} {:<12}", "Nurse", "Utilization");
    println!("{}", "-".repeat(24));
    for nurse in &sim.ward.nurses {
        println!("{:<12} {:<12.4}", nurse.id.0, nurse.busy_time / time);
    }
    println!();
    println!("{:<12} {:<12}", "Bed", "Occupancy");
    println!("{}", "-".repeat(24));
    for bed in &sim.ward.beds {
        println!("{:<12} {:<12.4}", bed.id.0, bed.busy_time / time);
    }
    println!();

    // 5. Event trace.
    std::fs::create_dir_all("output/clinic")?;
    let path = Path::new("output/clinic/trace.csv");
    write_trace(path, &trace.rows)?;
    println!("Wrote first {} events to {}", trace.rows.len(), path.display());

    Ok(())
}
