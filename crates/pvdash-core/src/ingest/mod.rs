//! Ingestion of the aggregator document into the snapshot model
//!
//! The aggregator publishes one flat JSON object per refresh. Parsing is
//! all-or-nothing: a document that is not well-formed JSON, or not an object,
//! leaves the snapshot exactly as it was. Once the document parses, every
//! recognised field is read on its own; absent or wrongly typed fields keep
//! their previous reading instead of being zeroed.

extern crate alloc;

use alloc::vec::Vec;
use log::{debug, warn};
use serde_json::Value;
use thiserror_no_std::Error;

use crate::snapshot::TelemetrySnapshot;

mod field;

pub use field::{Field, FieldReader, number_from};

/// Keys of the three grid phases, in L1..L3 order: (voltage, current, power).
const PHASE_KEYS: [(&str, &str, &str); 3] = [
    ("l1_voltage", "l1_current", "l1_power"),
    ("l2_voltage", "l2_current", "l2_power"),
    ("l3_voltage", "l3_current", "l3_power"),
];

/// Keys of the two PV strings: (voltage, current).
const PV_KEYS: [(&str, &str); 2] = [
    ("fve_pv_01_voltage", "fve_pv_01_current"),
    ("fve_pv_02_voltage", "fve_pv_02_current"),
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IngestError {
    /// The payload is not well-formed JSON.
    #[error("Malformed payload at line {line}, column {column}")]
    Malformed { line: usize, column: usize },

    /// The payload parsed but its root is not an object.
    #[error("Payload root is not an object")]
    NotAnObject,
}

/// Per-document summary of which fields were taken over.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestReport {
    pub applied: usize,
    pub missing: usize,
    /// Keys whose values had the wrong shape.
    pub invalid: Vec<&'static str>,
}

impl IngestReport {
    fn mark_invalid(&mut self, key: &'static str) {
        self.invalid.push(key);
    }

    pub fn is_clean(&self) -> bool {
        self.missing == 0 && self.invalid.is_empty()
    }
}

/// Parse `payload` and update `snapshot` from it.
///
/// On error the snapshot is not touched.
pub fn ingest(
    snapshot: &mut TelemetrySnapshot,
    payload: &[u8],
) -> Result<IngestReport, IngestError> {
    let document: Value = serde_json::from_slice(payload).map_err(|e| {
        warn!("Discarding payload: {}", e);
        IngestError::Malformed {
            line: e.line(),
            column: e.column(),
        }
    })?;

    let Some(object) = document.as_object() else {
        warn!("Discarding payload: root is not an object");
        return Err(IngestError::NotAnObject);
    };

    let mut staged = snapshot.clone();
    let mut reader = FieldReader::new(object);
    apply_fields(&mut reader, &mut staged);
    *snapshot = staged;

    let report = reader.finish();
    debug!(
        "Ingested payload: {} applied, {} missing, {} invalid",
        report.applied,
        report.missing,
        report.invalid.len()
    );
    Ok(report)
}

fn apply_fields(reader: &mut FieldReader<'_>, snapshot: &mut TelemetrySnapshot) {
    reader.read_history("power_history", &mut snapshot.power_history);
    reader.read_history("yeld_history", &mut snapshot.yield_history);

    let inverter = &mut snapshot.inverter;
    reader.read_text("fve_state", &mut inverter.state);
    for (&(voltage_key, current_key), pv) in PV_KEYS.iter().zip(inverter.pv.iter_mut()) {
        reader.read_number(voltage_key, &mut pv.voltage);
        reader.read_number(current_key, &mut pv.current);
    }
    reader.read_number("fve_input_power", &mut inverter.input_power);
    reader.read_number("fve_grid_voltage", &mut inverter.output_voltage);
    reader.read_number("fve_grid_current", &mut inverter.output_current);
    reader.read_number("fve_day_active_power_peak", &mut inverter.peak_power_today);
    reader.read_number("fve_active_power", &mut inverter.active_power);
    reader.read_number("fve_accumulated_yield_energy", &mut inverter.total_yield_kwh);
    reader.read_number("fve_daily_yield_energy", &mut inverter.daily_yield_kwh);
    reader.read_number("shelly_huawei_power", &mut inverter.metered_output_power);

    let grid = &mut snapshot.grid;
    for (&(voltage_key, current_key, power_key), phase) in
        PHASE_KEYS.iter().zip(grid.phases.iter_mut())
    {
        reader.read_number(voltage_key, &mut phase.voltage);
        reader.read_number(current_key, &mut phase.current);
        reader.read_number(power_key, &mut phase.power);
    }
    reader.read_number("power_meter_active_power", &mut grid.meter_power);

    let boiler = &mut snapshot.boiler;
    reader.read_number("boiler_status", &mut boiler.status);
    reader.read_number("boiler_power", &mut boiler.power);
    reader.read_number("boiler_water", &mut boiler.water_temperature);

    let consumption = &mut snapshot.consumption;
    reader.read_number("gas", &mut consumption.gas_m3);
    reader.read_number("water", &mut consumption.water_litres);
    reader.read_number("power", &mut consumption.electricity_kwh);
    reader.read_number("temp", &mut consumption.temperature_c);
}

/// Document captured from the aggregator.
#[cfg(test)]
pub(crate) const SAMPLE: &str = r#"{"l1_power":39.81,"l1_voltage":232.11,"l1_current":1.53,"l2_power":50.23,"l2_voltage":236.05,"l2_current":0.64,"l3_power":22.15,"l3_voltage":237.89,"l3_current":0.56,"fve_state":"grid-connected","fve_pv_01_voltage":379,"fve_pv_01_current":0.39,"fve_pv_02_voltage":170.5,"fve_pv_02_current":0.38,"fve_input_power":202,"fve_grid_voltage":231.5,"fve_grid_current":0.93,"fve_day_active_power_peak":204,"fve_active_power":194,"fve_accumulated_yield_energy":185.16,"fve_daily_yield_energy":0.12,"power_meter_active_power":-327,"boiler_status":0,"boiler_power":0,"boiler_water":"21.1","shelly_huawei_status":"1","shelly_huawei_power":187,"power_history":[14.733799999998,18.210399999996,13.007399999999,11.664699999998,11.074999999997,13.0514,9.5926999999974,3.8765999999996],"yeld_history":[3.03,11.97,2.24,1.29,3.05,3.17,1.5,0.12],"water":100,"gas":1,"power":4,"temp":20.3}"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn ingested() -> TelemetrySnapshot {
        let mut snapshot = TelemetrySnapshot::new();
        ingest(&mut snapshot, SAMPLE.as_bytes()).unwrap();
        snapshot
    }

    #[test]
    fn test_sample_document() {
        let snapshot = ingested();

        assert_eq!(snapshot.inverter.state, "grid-connected");
        assert_eq!(snapshot.inverter.pv[0].voltage, 379.0);
        assert_eq!(snapshot.inverter.pv[1].current, 0.38);
        assert_eq!(snapshot.inverter.active_power, 194.0);
        assert_eq!(snapshot.inverter.daily_yield_kwh, 0.12);
        assert_eq!(snapshot.inverter.metered_output_power, 187.0);
        assert_eq!(snapshot.grid.phases[1].voltage, 236.05);
        assert_eq!(snapshot.grid.phases[2].power, 22.15);
        assert_eq!(snapshot.grid.meter_power, -327.0);
        assert_eq!(snapshot.boiler.water_temperature, 21.1);
        assert_eq!(snapshot.consumption.water_litres, 100.0);
        assert_eq!(snapshot.consumption.temperature_c, 20.3);
        assert_eq!(snapshot.yield_history.get(7), Some(0.12));
        assert_eq!(snapshot.yield_history.max(), 11.97);
        assert_eq!(snapshot.power_history.max(), 18.210399999996_f64 as f32);
    }

    #[test]
    fn test_sample_report_is_clean() {
        let mut snapshot = TelemetrySnapshot::new();
        let report = ingest(&mut snapshot, SAMPLE.as_bytes()).unwrap();
        assert!(report.is_clean(), "{:?}", report);
        assert_eq!(report.applied, 32);
    }

    #[test]
    fn test_malformed_leaves_snapshot_untouched() {
        let mut snapshot = ingested();
        let before = snapshot.to_retained().unwrap();

        let truncated = &SAMPLE.as_bytes()[..SAMPLE.len() / 2];
        for payload in [truncated, b"".as_slice(), b"<html>502</html>".as_slice()] {
            let err = ingest(&mut snapshot, payload).unwrap_err();
            assert!(matches!(err, IngestError::Malformed { .. }));
            assert_eq!(snapshot.to_retained().unwrap(), before);
        }
    }

    #[test]
    fn test_non_object_root_rejected() {
        let mut snapshot = ingested();
        let before = snapshot.clone();

        assert_eq!(
            ingest(&mut snapshot, b"[1, 2, 3]"),
            Err(IngestError::NotAnObject)
        );
        assert_eq!(snapshot, before);
    }

    #[test]
    fn test_missing_fields_keep_previous_values() {
        let mut snapshot = ingested();
        let report = ingest(&mut snapshot, br#"{"l1_power": 500}"#).unwrap();

        assert_eq!(report.applied, 1);
        assert_eq!(snapshot.grid.phases[0].power, 500.0);
        assert_eq!(snapshot.grid.phases[0].voltage, 232.11);
        assert_eq!(snapshot.grid.meter_power, -327.0);
        assert_eq!(snapshot.inverter.state, "grid-connected");
    }

    #[test]
    fn test_invalid_field_is_skipped() {
        let mut snapshot = ingested();
        let report = ingest(
            &mut snapshot,
            br#"{"boiler_water": "hot", "fve_state": 3, "boiler_power": 1200}"#,
        )
        .unwrap();

        assert_eq!(report.invalid, ["fve_state", "boiler_water"]);
        assert_eq!(snapshot.boiler.water_temperature, 21.1);
        assert_eq!(snapshot.inverter.state, "grid-connected");
        assert_eq!(snapshot.boiler.power, 1200.0);
    }

    #[test]
    fn test_short_history_leaves_tail_unchanged() {
        let mut snapshot = ingested();
        ingest(&mut snapshot, br#"{"yeld_history": [0.5, 0.7]}"#).unwrap();

        let values = snapshot.yield_history.values();
        assert_eq!(values[0], 0.5);
        assert_eq!(values[1], 0.7);
        assert_eq!(values[2], 2.24);
        assert_eq!(values[7], 0.12);
        // lower overwrites never pull the maximum down
        assert_eq!(snapshot.yield_history.max(), 11.97);
    }

    #[test]
    fn test_long_history_is_truncated() {
        let mut snapshot = TelemetrySnapshot::new();
        ingest(
            &mut snapshot,
            br#"{"power_history": [1, 2, 3, 4, 5, 6, 7, 8, 99]}"#,
        )
        .unwrap();

        assert_eq!(snapshot.power_history.get(7), Some(8.0));
        assert_eq!(snapshot.power_history.max(), 8.0);
    }

    #[test]
    fn test_history_skips_bad_elements() {
        let mut snapshot = ingested();
        let report = ingest(&mut snapshot, br#"{"yeld_history": [1.0, "x", 2.0]}"#).unwrap();

        assert_eq!(report.invalid, ["yeld_history"]);
        assert_eq!(snapshot.yield_history.get(0), Some(1.0));
        assert_eq!(snapshot.yield_history.get(1), Some(11.97));
        assert_eq!(snapshot.yield_history.get(2), Some(2.0));
    }

    #[test]
    fn test_history_not_array_is_invalid() {
        let mut snapshot = ingested();
        let before = *snapshot.power_history.values();
        let report = ingest(&mut snapshot, br#"{"power_history": 12}"#).unwrap();

        assert_eq!(report.invalid, ["power_history"]);
        assert_eq!(*snapshot.power_history.values(), before);
    }
}
