use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use chrono::{Duration, Local, NaiveDateTime};

/// Wall-clock capability for the schedule loop.
///
/// Injected so tests can run the loop against a scripted clock instead of
/// real time.
#[async_trait]
pub trait Clock: Send + Sync {
    /// Current local wall-clock time.
    fn now(&self) -> NaiveDateTime;

    /// Suspend the schedule loop for `duration`.
    async fn sleep(&self, duration: std::time::Duration);
}

/// Real local time and real sleeps.
pub struct SystemClock;

#[async_trait]
impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }

    async fn sleep(&self, duration: std::time::Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Resolve an "HH:MM" wall-clock string into the next instant it names.
///
/// The instant lands on `reference`'s calendar date when the time is still
/// ahead; a time already passed, or equal to the reference, rolls over to
/// the same time tomorrow. The result is therefore always strictly in the
/// future relative to `reference`.
pub fn resolve_instant(time: &str, reference: NaiveDateTime) -> Result<NaiveDateTime> {
    let (hour, minute) = parse_clock_time(time)?;

    let candidate = reference
        .date()
        .and_hms_opt(hour, minute, 0)
        .with_context(|| format!("Invalid time of day '{}'", time))?;

    if candidate <= reference {
        Ok(candidate + Duration::days(1))
    } else {
        Ok(candidate)
    }
}

/// Parse "HH:MM" (any single non-digit separator) into hour and minute.
fn parse_clock_time(time: &str) -> Result<(u32, u32)> {
    let (hour, minute) = time
        .split_once(|c: char| !c.is_ascii_digit())
        .with_context(|| format!("Expected a time like HH:MM, got '{}'", time))?;

    let hour: u32 = hour
        .parse()
        .with_context(|| format!("Invalid hour in '{}'", time))?;
    let minute: u32 = minute
        .parse()
        .with_context(|| format!("Invalid minute in '{}'", time))?;

    if hour > 23 || minute > 59 {
        bail!("Time out of range (00:00-23:59): '{}'", time);
    }

    Ok((hour, minute))
}
