//! Process introspection
//!
//! High-resolution time is relative to the first time this module's clock is
//! touched, which the CLI does right at startup via [`start_clock`].

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use std::time::{Duration, Instant};

static START_TIME: Lazy<Instant> = Lazy::new(Instant::now);

const NANOS_PER_SEC: u64 = 1_000_000_000;

/// `[seconds, nanoseconds]` pair; `nanos` is always below one second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct HrTime {
    pub secs: u64,
    pub nanos: u32,
}

impl HrTime {
    fn from_duration(d: Duration) -> Self {
        Self {
            secs: d.as_secs(),
            nanos: d.subsec_nanos(),
        }
    }

    pub fn as_duration(&self) -> Duration {
        Duration::new(self.secs, self.nanos)
    }

    pub fn as_nanos(&self) -> u128 {
        self.secs as u128 * NANOS_PER_SEC as u128 + self.nanos as u128
    }
}

/// Pin the reference instant for [`hrtime`]. Later calls are no-ops.
pub fn start_clock() {
    Lazy::force(&START_TIME);
    tracing::debug!(target: "yaso::process", "hrtime clock started");
}

pub fn hrtime() -> HrTime {
    HrTime::from_duration(START_TIME.elapsed())
}

/// Time elapsed since an earlier [`hrtime`] reading. Saturates at zero.
pub fn hrtime_since(previous: HrTime) -> HrTime {
    let now = START_TIME.elapsed();
    HrTime::from_duration(now.saturating_sub(previous.as_duration()))
}

/// Nanoseconds since the reference instant.
pub fn hrtime_bigint() -> u128 {
    START_TIME.elapsed().as_nanos()
}

pub fn cwd() -> Result<String> {
    let dir = std::env::current_dir().context("read current directory")?;
    tracing::trace!(target: "yaso::process", dir = %dir.display(), "cwd");
    Ok(dir.to_string_lossy().into_owned())
}

/// Same naming as [`crate::os::arch`].
pub fn arch() -> &'static str {
    crate::os::arch()
}

/// Lower-case platform name (`linux`, `darwin`, `win32`, ...).
pub fn platform() -> &'static str {
    match std::env::consts::OS {
        "macos" => "darwin",
        "windows" => "win32",
        other => other,
    }
}
