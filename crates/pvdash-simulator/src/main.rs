//! Desktop simulator for the pvdash e-paper energy dashboard.
//!
//! Renders pvdash-core screens in an SDL2 window via
//! `embedded-graphics-simulator`. The telemetry document is read from disk
//! (the path given on the command line, or the bundled sample) and the
//! weather forecast is synthesised, so the whole refresh cycle runs without
//! the aggregator.
//!
//! # Configuration
//!
//! Read from the environment, with `.env` loaded by `dotenvy`:
//!
//! | Variable             | Meaning                                   |
//! |----------------------|-------------------------------------------|
//! | `PVDASH_SSID`        | Network named on the connectivity screen  |
//! | `PVDASH_URL`         | Aggregator URL, logged only               |
//! | `PVDASH_VERSION`     | Version string in the header              |
//! | `PVDASH_SCREENSHOT`  | Save every presented frame to this PNG    |
//!
//! # Key bindings
//!
//! | Key | Action                                  |
//! |-----|-----------------------------------------|
//! | R   | Run a refresh cycle                     |
//! | E   | Toggle a simulated transport failure    |
//! | Q   | Quit                                    |

use std::convert::Infallible;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use chrono::{Datelike, Local, Timelike};
use embedded_graphics::pixelcolor::Gray4;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{
    OutputSettings, OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window,
    sdl2::Keycode,
};
use log::{error, info, warn};

use pvdash_core::config::{Config, DEFAULT_VERSION};
use pvdash_core::display_manager::{DisplayManager, Panel};
use pvdash_core::framebuffer::FrameBuffer;
use pvdash_core::refresh::{CycleContext, CycleOutcome, PayloadSource, run_cycle};
use pvdash_core::snapshot::{DeviceStatus, FORECAST_DAYS, Forecast, TelemetrySnapshot};
use pvdash_core::ui::{DISPLAY_HEIGHT_PX, DISPLAY_WIDTH_PX, OutlineIcons, Timestamp};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Document captured from the aggregator, used when no path is given.
const BUNDLED_SAMPLE: &str = include_str!("../data/sample.json");

/// Idle time between polls of the SDL event queue.
const POLL_INTERVAL: Duration = Duration::from_millis(33);

// ---------------------------------------------------------------------------
// Host collaborators
// ---------------------------------------------------------------------------

/// Payload source backed by a file on disk.
struct FileSource {
    path: Option<PathBuf>,
    /// Simulated outage; every fetch fails while set.
    offline: bool,
}

impl PayloadSource for FileSource {
    type Error = std::io::Error;

    fn fetch(&mut self) -> Result<Vec<u8>, Self::Error> {
        if self.offline {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotConnected,
                "simulated outage",
            ));
        }
        match &self.path {
            Some(path) => std::fs::read(path),
            None => Ok(BUNDLED_SAMPLE.as_bytes().to_vec()),
        }
    }
}

/// SDL window standing in for the e-paper panel.
struct SimulatorPanel {
    display: SimulatorDisplay<Gray4>,
    window: Window,
    output_settings: OutputSettings,
    screenshot: Option<PathBuf>,
}

impl SimulatorPanel {
    fn new(screenshot: Option<PathBuf>) -> Self {
        let output_settings = OutputSettingsBuilder::new().scale(1).build();
        Self {
            display: SimulatorDisplay::new(Size::new(DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX)),
            window: Window::new("pvdash simulator", &output_settings),
            output_settings,
            screenshot,
        }
    }

    fn save_screenshot(&self) {
        let Some(path) = &self.screenshot else {
            return;
        };
        let image = self
            .display
            .to_grayscale_output_image(&self.output_settings);
        match image.save_png(path) {
            Ok(()) => info!("Saved screenshot to {}", path.display()),
            Err(e) => warn!("Saving screenshot to {} failed: {}", path.display(), e),
        }
    }
}

impl Panel for SimulatorPanel {
    type Error = Infallible;

    fn present(&mut self, frame: &FrameBuffer) -> Result<(), Self::Error> {
        frame.flush(&mut self.display)?;
        self.window.update(&self.display);
        self.save_screenshot();
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Mock data
// ---------------------------------------------------------------------------

/// Eight days of plausible autumn weather.
fn mock_forecast() -> Forecast {
    let mut forecast = Forecast::default();
    for day in 0..FORECAST_DAYS {
        let t = day as f32;
        forecast.max_temp[day] = 14.0 + 4.0 * (t * 0.8).sin();
        forecast.min_temp[day] = 3.0 + 3.0 * (t * 0.8 + 1.0).sin();
        forecast.clouds[day] = (55.0 + 40.0 * (t * 1.3).cos()).clamp(0.0, 100.0);
    }
    forecast
}

fn mock_device() -> DeviceStatus {
    DeviceStatus {
        wifi_rssi_dbm: -62,
        battery_capacity_pct: 87,
        battery_voltage: 4.05,
    }
}

fn now() -> Timestamp {
    let now = Local::now();
    Timestamp::new(
        now.year().clamp(0, u16::MAX as i32) as u16,
        now.month() as u8,
        now.day() as u8,
        now.hour() as u8,
        now.minute() as u8,
    )
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Owned environment values the borrowed [`Config`] points into.
struct Environment {
    ssid: String,
    url: String,
    version: String,
    screenshot: Option<PathBuf>,
}

impl Environment {
    fn load() -> Self {
        if let Err(e) = dotenvy::dotenv() {
            info!("No .env file loaded: {}", e);
        }
        let var = |key: &str| std::env::var(key).ok();

        Self {
            ssid: var("PVDASH_SSID").unwrap_or_else(|| "pvdash".to_owned()),
            url: var("PVDASH_URL").unwrap_or_default(),
            version: var("PVDASH_VERSION").unwrap_or_else(|| DEFAULT_VERSION.to_owned()),
            screenshot: var("PVDASH_SCREENSHOT").map(PathBuf::from),
        }
    }

    fn config(&self) -> Config<'_> {
        let mut config = Config::default();
        config.internet.ssid = &self.ssid;
        config.source.url = &self.url;
        config.display.version = &self.version;
        config
    }
}

// ---------------------------------------------------------------------------
// Refresh
// ---------------------------------------------------------------------------

/// Keep the snapshot the way a sleeping device would: encoded and restored.
fn sleep_and_wake(snapshot: &TelemetrySnapshot) -> TelemetrySnapshot {
    match snapshot
        .to_retained()
        .and_then(|bytes| TelemetrySnapshot::from_retained(&bytes))
    {
        Ok(restored) => restored,
        Err(e) => {
            warn!("Retained snapshot lost: {}", e);
            TelemetrySnapshot::new()
        }
    }
}

fn refresh(
    snapshot: &mut TelemetrySnapshot,
    source: &mut FileSource,
    manager: &mut DisplayManager<SimulatorPanel>,
    config: &Config<'_>,
) {
    *snapshot = sleep_and_wake(snapshot);
    snapshot.set_forecast(mock_forecast());
    snapshot.device = mock_device();

    let context = CycleContext {
        version: config.display.version,
        network: config.internet.ssid,
        updated: now(),
    };

    match run_cycle(snapshot, source, manager, &context, &OutlineIcons) {
        Ok(CycleOutcome::Dashboard { ingest: Ok(report) }) => info!(
            "Dashboard refreshed: {} fields applied, {} missing, invalid {:?}",
            report.applied, report.missing, report.invalid
        ),
        Ok(CycleOutcome::Dashboard { ingest: Err(e) }) => {
            warn!("Dashboard shows previous readings: {}", e)
        }
        Ok(CycleOutcome::ConnectivityError) => warn!("Showing connectivity error"),
        Err(e) => error!("Refresh failed: {}", e),
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let environment = Environment::load();
    let config = environment.config();
    let payload = std::env::args_os().nth(1).map(PathBuf::from);

    info!("Starting pvdash simulator");
    info!(
        "Display: {}x{}, source {}",
        DISPLAY_WIDTH_PX,
        DISPLAY_HEIGHT_PX,
        match &payload {
            Some(path) => path.display().to_string(),
            None => "bundled sample".to_owned(),
        }
    );
    if !config.source.url.is_empty() {
        info!("Configured aggregator: {}", config.source.url);
    }
    info!("Keys: R=Refresh  E=Toggle outage  Q=Quit");

    if let Some(path) = &payload {
        std::fs::metadata(path)
            .with_context(|| format!("Payload {} is not readable", path.display()))?;
    }

    let mut source = FileSource {
        path: payload,
        offline: false,
    };
    let mut manager = DisplayManager::new(SimulatorPanel::new(environment.screenshot.clone()));
    let mut snapshot = TelemetrySnapshot::new();

    // The first present also initialises the SDL window, which must happen
    // before events are polled.
    refresh(&mut snapshot, &mut source, &mut manager, &config);

    'running: loop {
        let events: Vec<SimulatorEvent> = manager.panel_mut().window.events().collect();
        for event in events {
            match event {
                SimulatorEvent::Quit => break 'running,
                SimulatorEvent::KeyDown { keycode, .. } => match keycode {
                    Keycode::Q | Keycode::Escape => break 'running,
                    Keycode::R => refresh(&mut snapshot, &mut source, &mut manager, &config),
                    Keycode::E => {
                        source.offline = !source.offline;
                        info!(
                            "Transport {}",
                            if source.offline { "down" } else { "restored" }
                        );
                        refresh(&mut snapshot, &mut source, &mut manager, &config);
                    }
                    _ => {}
                },
                _ => {}
            }
        }

        std::thread::sleep(POLL_INTERVAL);
    }

    info!(
        "Simulator exiting after {} refreshes",
        manager.refresh_count()
    );
    Ok(())
}
