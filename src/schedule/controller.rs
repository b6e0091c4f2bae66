use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

use super::clock::{resolve_instant, Clock};
use crate::power::PowerControl;
use crate::recording::{RecordingRequest, StreamRecorder};

/// How often the start wait re-checks the clock. Minute-granularity
/// schedules don't need sub-10-second precision.
const POLL_INTERVAL: Duration = Duration::from_secs(10);

/// Drives one scheduled recording from start to finish.
///
/// The flow is linear: wait for the start instant, capture, then keep
/// re-capturing while the reconnect window (if any) is open, and finally
/// trigger a shutdown when one was requested. Captures are awaited one at
/// a time; nothing runs concurrently and nothing is interrupted mid-flight.
pub struct ScheduleController {
    clock: Arc<dyn Clock>,
    recorder: Arc<dyn StreamRecorder>,
    power: Arc<dyn PowerControl>,
}

impl ScheduleController {
    pub fn new(
        clock: Arc<dyn Clock>,
        recorder: Arc<dyn StreamRecorder>,
        power: Arc<dyn PowerControl>,
    ) -> Self {
        Self {
            clock,
            recorder,
            power,
        }
    }

    pub async fn run(&self, request: &RecordingRequest) -> Result<()> {
        // Resolved before the start wait and held fixed for the whole run.
        // A capture running past midnight must not roll the window end to
        // the wrong day.
        let reconnect_until = match &request.reconnect {
            Some(time) => Some(resolve_instant(time, self.clock.now())?),
            None => None,
        };

        let start_at = resolve_instant(&request.start_time, self.clock.now())?;
        info!("Recording of {} scheduled for {}", request.channel, start_at);

        while self.clock.now() < start_at {
            self.clock.sleep(POLL_INTERVAL).await;
        }

        info!("Starting recording of {}", request.channel);
        self.record_once(request).await;

        if let Some(until) = reconnect_until {
            while self.clock.now() < until {
                info!(
                    "Reconnect window open until {}, recording {} again",
                    until, request.channel
                );
                self.record_once(request).await;
            }
        }

        if request.shutdown {
            info!("Schedule complete, requesting system shutdown");
            if let Err(e) = self.power.shutdown().await {
                error!("Shutdown request failed: {}", e);
            }
        }

        Ok(())
    }

    /// One capture cycle. A capture that fails to launch is logged and
    /// otherwise ignored; the reconnect loop decides whether another
    /// attempt happens.
    async fn record_once(&self, request: &RecordingRequest) {
        let result = self
            .recorder
            .record(
                &request.channel,
                request.quality.as_deref(),
                request.filename.as_deref(),
            )
            .await;

        if let Err(e) = result {
            error!("Recording invocation failed: {}", e);
        }
    }
}
