//! CSV export for trace rows.

use std::path::Path;

use csv::Writer;

use crate::{ReportResult, TraceRow};

/// Write `rows` to `path` with a header record, one record per event.
pub fn write_trace(path: &Path, rows: &[TraceRow]) -> ReportResult<()> {
    let mut writer = Writer::from_path(path)?;
    writer.write_record([
        "time", "event", "patient_id", "in_system", "in_triage", "in_beds", "waiting", "healed",
    ])?;
    for row in rows {
        writer.write_record(&[
            format!("{:.6}", row.time),
            row.kind.as_str().to_string(),
            row.patient.to_string(),
            row.in_system.to_string(),
            row.in_triage.to_string(),
            row.in_beds.to_string(),
            row.waiting.to_string(),
            row.healed.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}
