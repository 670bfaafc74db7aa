//! One refresh cycle: fetch, ingest, render, commit
//!
//! A transport failure replaces the dashboard with the connectivity error
//! screen. A payload that fails to parse leaves the snapshot as it was and
//! the dashboard is drawn from the previous readings.

extern crate alloc;

use alloc::vec::Vec;
use log::{debug, warn};

use crate::display_manager::{DisplayError, DisplayManager, Panel};
use crate::ingest::{IngestError, IngestReport, ingest};
use crate::pages::{ConnectivityErrorPage, DashboardContext, DashboardPage, Screen};
use crate::snapshot::TelemetrySnapshot;
use crate::ui::core::Timestamp;
use crate::ui::icons::IconSet;

/// Transport that delivers the aggregator document.
pub trait PayloadSource {
    type Error: core::fmt::Debug;

    /// Fetch the raw document body.
    fn fetch(&mut self) -> Result<Vec<u8>, Self::Error>;
}

/// Values the cycle needs besides the snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleContext<'a> {
    pub version: &'a str,
    /// Network name shown on the connectivity error screen.
    pub network: &'a str,
    pub updated: Timestamp,
}

impl<'a> CycleContext<'a> {
    pub fn dashboard(&self) -> DashboardContext<'a> {
        DashboardContext {
            version: self.version,
            updated: self.updated,
        }
    }
}

/// What a cycle ended up showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The dashboard was shown; `ingest` tells whether the payload was taken over.
    Dashboard {
        ingest: Result<IngestReport, IngestError>,
    },
    /// The source could not be reached.
    ConnectivityError,
}

/// Run one complete refresh cycle and commit the resulting frame.
pub fn run_cycle<S, P, I>(
    snapshot: &mut TelemetrySnapshot,
    source: &mut S,
    manager: &mut DisplayManager<P>,
    context: &CycleContext<'_>,
    icons: &I,
) -> Result<CycleOutcome, DisplayError<P::Error>>
where
    S: PayloadSource,
    P: Panel,
    I: IconSet,
{
    let payload = match source.fetch() {
        Ok(payload) => payload,
        Err(e) => {
            warn!("Fetching payload failed: {:?}", e);
            let screen: Screen<'_, I> =
                Screen::ConnectivityError(ConnectivityErrorPage::new(context.network));
            manager.show(&screen)?;
            return Ok(CycleOutcome::ConnectivityError);
        }
    };
    debug!("Fetched {} byte payload", payload.len());

    let result = ingest(snapshot, &payload);
    if let Err(e) = &result {
        warn!("Keeping previous readings: {}", e);
    }

    let page = DashboardPage::new(snapshot, context.dashboard(), icons);
    manager.show(&Screen::Dashboard(page))?;

    Ok(CycleOutcome::Dashboard { ingest: result })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::FrameBuffer;
    use crate::ingest::SAMPLE;
    use crate::pages::{render_connectivity_error, render_dashboard};
    use crate::ui::icons::OutlineIcons;
    use alloc::collections::VecDeque;

    #[derive(Debug, PartialEq)]
    struct Offline;

    /// Replays queued responses, one per fetch.
    struct ScriptedSource {
        responses: VecDeque<Result<Vec<u8>, Offline>>,
    }

    impl ScriptedSource {
        fn new(responses: impl IntoIterator<Item = Result<Vec<u8>, Offline>>) -> Self {
            Self {
                responses: responses.into_iter().collect(),
            }
        }
    }

    impl PayloadSource for ScriptedSource {
        type Error = Offline;

        fn fetch(&mut self) -> Result<Vec<u8>, Self::Error> {
            self.responses.pop_front().unwrap_or(Err(Offline))
        }
    }

    struct MirrorPanel {
        shown: FrameBuffer,
        presents: usize,
    }

    impl Panel for MirrorPanel {
        type Error = core::convert::Infallible;

        fn present(&mut self, frame: &FrameBuffer) -> Result<(), Self::Error> {
            self.presents += 1;
            frame.flush(&mut self.shown)
        }
    }

    fn manager() -> DisplayManager<MirrorPanel> {
        DisplayManager::new(MirrorPanel {
            shown: FrameBuffer::new(),
            presents: 0,
        })
    }

    fn context() -> CycleContext<'static> {
        CycleContext {
            version: "Version 1.0a",
            network: "garage",
            updated: Timestamp::new(2024, 11, 2, 14, 30),
        }
    }

    #[test]
    fn test_cycle_shows_dashboard() {
        let mut snapshot = TelemetrySnapshot::new();
        let mut source = ScriptedSource::new([Ok(SAMPLE.as_bytes().to_vec())]);
        let mut manager = manager();

        let outcome = run_cycle(
            &mut snapshot,
            &mut source,
            &mut manager,
            &context(),
            &OutlineIcons,
        )
        .unwrap();

        match outcome {
            CycleOutcome::Dashboard { ingest: Ok(report) } => assert!(report.is_clean()),
            other => panic!("unexpected outcome {:?}", other),
        }
        assert_eq!(snapshot.grid.meter_power, -327.0);

        let mut expected = FrameBuffer::new();
        render_dashboard(&snapshot, context().dashboard(), &OutlineIcons, &mut expected);
        assert!(manager.panel().shown == expected);
        assert_eq!(manager.panel().presents, 1);
    }

    #[test]
    fn test_transport_failure_shows_connectivity_error() {
        let mut snapshot = TelemetrySnapshot::new();
        let mut source = ScriptedSource::new([Err(Offline)]);
        let mut manager = manager();

        let outcome = run_cycle(
            &mut snapshot,
            &mut source,
            &mut manager,
            &context(),
            &OutlineIcons,
        )
        .unwrap();

        assert_eq!(outcome, CycleOutcome::ConnectivityError);
        let mut expected = FrameBuffer::new();
        render_connectivity_error("garage", &mut expected);
        assert!(manager.panel().shown == expected);
        assert_eq!(snapshot, TelemetrySnapshot::new());
    }

    #[test]
    fn test_malformed_payload_keeps_previous_readings() {
        let mut snapshot = TelemetrySnapshot::new();
        let mut source = ScriptedSource::new([
            Ok(SAMPLE.as_bytes().to_vec()),
            Ok(b"{\"l1_power\": 12".to_vec()),
        ]);
        let mut manager = manager();

        run_cycle(&mut snapshot, &mut source, &mut manager, &context(), &OutlineIcons).unwrap();
        let before = snapshot.to_retained().unwrap();

        let outcome =
            run_cycle(&mut snapshot, &mut source, &mut manager, &context(), &OutlineIcons)
                .unwrap();

        assert!(matches!(
            outcome,
            CycleOutcome::Dashboard {
                ingest: Err(IngestError::Malformed { .. })
            }
        ));
        assert_eq!(snapshot.to_retained().unwrap(), before);
        assert_eq!(manager.panel().presents, 2);
    }
}
