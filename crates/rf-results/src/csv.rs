//! CSV export of trace records.

use crate::types::TraceRecord;

/// Render one coil's trace as CSV with a header row.
pub fn trace_to_csv(trace: &TraceRecord) -> String {
    let mut csv = String::from("time_s,flux_wb,voltage_v\n");
    for sample in &trace.samples {
        csv.push_str(&format!(
            "{},{},{}\n",
            sample.t_s, sample.flux_wb, sample.v_volts
        ));
    }
    csv
}
