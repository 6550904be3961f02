// crates/infra/src/platform.rs
//! Platform-specific timestamp access.
//!
//! Centralizes the OS-specific parts of stat so the filesystem adapter stays
//! free of conditional compilation.

use std::{fs::Metadata, time::SystemTime};

use chrono::{DateTime, Local};

// ============================================================================
// Status Change Time
// ============================================================================

/// Trait for reading timestamps that only some platforms expose.
pub trait PlatformTimes {
    /// Inode status change time (`st_ctime`).
    fn changed(&self, metadata: &Metadata) -> Option<DateTime<Local>>;

    /// Creation (birth) time. Not every filesystem records it.
    fn created(&self, metadata: &Metadata) -> Option<DateTime<Local>> {
        metadata.created().ok().map(to_local)
    }
}

/// Unix: ctime comes from the raw stat fields.
#[cfg(unix)]
#[derive(Debug, Clone, Copy, Default)]
pub struct UnixTimes;

#[cfg(unix)]
impl PlatformTimes for UnixTimes {
    fn changed(&self, metadata: &Metadata) -> Option<DateTime<Local>> {
        use std::os::unix::fs::MetadataExt;

        let nanos = u32::try_from(metadata.ctime_nsec()).ok()?;
        DateTime::from_timestamp(metadata.ctime(), nanos).map(|utc| utc.with_timezone(&Local))
    }
}

/// Other platforms have no status change time.
#[cfg(not(unix))]
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackTimes;

#[cfg(not(unix))]
impl PlatformTimes for FallbackTimes {
    fn changed(&self, _metadata: &Metadata) -> Option<DateTime<Local>> {
        None
    }
}

/// Timestamp reader for the current platform.
#[cfg(unix)]
pub type DefaultPlatformTimes = UnixTimes;

#[cfg(not(unix))]
pub type DefaultPlatformTimes = FallbackTimes;

pub fn default_platform_times() -> DefaultPlatformTimes {
    #[cfg(unix)]
    return UnixTimes;

    #[cfg(not(unix))]
    return FallbackTimes;
}

pub fn to_local(time: SystemTime) -> DateTime<Local> {
    DateTime::<Local>::from(time)
}
