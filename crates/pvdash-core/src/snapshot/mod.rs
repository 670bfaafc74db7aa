//! Telemetry snapshot model
//!
//! One [`TelemetrySnapshot`] lives for the lifetime of the device. Ingestion
//! overwrites its readings once per refresh cycle; the dashboard only reads
//! it. Grid totals are derived on demand from the three phases and never
//! stored, so they cannot drift from the per-phase readings.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};
use thiserror_no_std::Error;

mod history;

pub use history::{HISTORY_CAPACITY, HistoryError, HistorySeries};

/// Number of days covered by the weather forecast.
pub const FORECAST_DAYS: usize = 8;

/// One PV string on the inverter input.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PvString {
    pub voltage: f64,
    pub current: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InverterReadings {
    /// Free-form inverter state, e.g. "grid-connected".
    pub state: String,
    pub pv: [PvString; 2],
    pub input_power: f64,
    pub output_voltage: f64,
    pub output_current: f64,
    pub peak_power_today: f64,
    /// Instantaneous panel power in W.
    pub active_power: f64,
    pub total_yield_kwh: f64,
    pub daily_yield_kwh: f64,
    /// Inverter output as measured by the external meter on its feed line.
    pub metered_output_power: f64,
}

/// Voltage, current and power of a single grid phase.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PhaseReading {
    pub voltage: f64,
    pub current: f64,
    pub power: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GridReadings {
    pub phases: [PhaseReading; 3],
    /// Net exchange reported by the power meter, sign preserved as received.
    /// Negative values are drawn from the grid, positive values are exported.
    pub meter_power: f64,
}

impl GridReadings {
    /// Totals across the three phases: mean voltage, summed current and power.
    pub fn total(&self) -> PhaseReading {
        let [l1, l2, l3] = self.phases;
        PhaseReading {
            voltage: (l1.voltage + l2.voltage + l3.voltage) / 3.0,
            current: l1.current + l2.current + l3.current,
            power: l1.power + l2.power + l3.power,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoilerReadings {
    /// Heating flag; anything above zero means the element is on.
    pub status: f64,
    pub power: f64,
    pub water_temperature: f64,
}

impl BoilerReadings {
    pub fn is_heating(&self) -> bool {
        self.status > 0.0
    }
}

/// Household meter counters for the current day.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Consumption {
    pub gas_m3: f64,
    pub water_litres: f64,
    pub electricity_kwh: f64,
    pub temperature_c: f64,
}

/// Daily forecast supplied by the weather collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Forecast {
    pub max_temp: [f32; FORECAST_DAYS],
    pub min_temp: [f32; FORECAST_DAYS],
    pub clouds: [f32; FORECAST_DAYS],
}

/// Scalars reported by the network stack and the power subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DeviceStatus {
    pub wifi_rssi_dbm: i32,
    pub battery_capacity_pct: u8,
    pub battery_voltage: f32,
}

impl DeviceStatus {
    /// Signal quality in percent derived from RSSI.
    ///
    /// -100 dBm and below is 0 %, -50 dBm and above is 100 %, linear between.
    pub fn wifi_quality(&self) -> u8 {
        match self.wifi_rssi_dbm {
            rssi if rssi <= -100 => 0,
            rssi if rssi >= -50 => 100,
            rssi => (2 * (rssi + 100)) as u8,
        }
    }
}

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Failed to encode retained snapshot")]
    Encode,
    #[error("Failed to decode retained snapshot")]
    Decode,
}

/// Complete set of telemetry for one refresh cycle.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    pub inverter: InverterReadings,
    pub grid: GridReadings,
    pub boiler: BoilerReadings,
    pub consumption: Consumption,
    pub power_history: HistorySeries,
    pub yield_history: HistorySeries,
    pub device: DeviceStatus,
    forecast: Forecast,
}

impl TelemetrySnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn forecast(&self) -> &Forecast {
        &self.forecast
    }

    /// Replace the forecast with a fresh one from the weather collaborator.
    pub fn set_forecast(&mut self, forecast: Forecast) {
        self.forecast = forecast;
    }

    /// Encode the snapshot so it can be kept across deep sleep.
    pub fn to_retained(&self) -> Result<Vec<u8>, SnapshotError> {
        postcard::to_allocvec(self).map_err(|_| SnapshotError::Encode)
    }

    /// Restore a snapshot written by [`TelemetrySnapshot::to_retained`].
    pub fn from_retained(bytes: &[u8]) -> Result<Self, SnapshotError> {
        postcard::from_bytes(bytes).map_err(|_| SnapshotError::Decode)
    }
}
