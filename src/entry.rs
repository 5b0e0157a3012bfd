//! Entry point functions over the thread-local CSPRNG and the system clock

#![cfg(feature = "global_gen")]

use crate::{DefaultCodec, Error, Uuid};
use chrono::{DateTime, TimeZone};

/// Generates a UUIDv7 object from the current system time.
///
/// # Errors
///
/// Returns [`Error::TimestampOutOfRange`] if the system clock is set before the Unix epoch.
///
/// # Examples
///
/// ```rust
/// let uuid = guid7::uuid7()?;
/// println!("{uuid}"); // e.g., "01809424-3e59-7c05-9219-566f82fff672"
/// println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
/// # Ok::<(), guid7::Error>(())
/// ```
#[cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]
pub fn uuid7() -> Result<Uuid, Error> {
    default_codec().generate_v7()
}

/// Generates a UUIDv7 object from `timestamp`.
///
/// # Errors
///
/// Returns [`Error::TimestampOutOfRange`] if `timestamp` precedes the Unix epoch or lies past the
/// end of the 48-bit millisecond range.
///
/// # Examples
///
/// ```rust
/// use chrono::{Duration, TimeZone, Utc};
///
/// let epoch = Utc.timestamp_millis_opt(0).unwrap();
/// assert!(guid7::uuid7_at(&epoch)?.to_string().starts_with("00000000-0000-7"));
/// assert!(guid7::uuid7_at(&(epoch - Duration::milliseconds(1))).is_err());
/// # Ok::<(), guid7::Error>(())
/// ```
#[cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]
pub fn uuid7_at<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> Result<Uuid, Error> {
    default_codec().generate_v7_at(timestamp)
}

/// Generates a UUIDv4 object.
///
/// # Examples
///
/// ```rust
/// let uuid = guid7::uuid4();
/// println!("{uuid}"); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
/// ```
#[cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]
pub fn uuid4() -> Uuid {
    default_codec().generate_v4()
}

/// Returns a fresh codec borrowing the thread-local CSPRNG.
fn default_codec() -> DefaultCodec {
    unix_fork_safety::reseed_thread_rng_upon_pid_change();
    DefaultCodec::default()
}

#[cfg(unix)]
mod unix_fork_safety {
    use std::{cell::Cell, process};

    thread_local! {
        static PID: Cell<u32> = Cell::new(process::id());
    }

    /// Forces ThreadRng to reseed when the process ID has changed since the last call on this
    /// thread, so a forked child does not repeat the random bytes of its parent.
    pub fn reseed_thread_rng_upon_pid_change() {
        PID.with(|last_pid| {
            let pid = process::id();
            if pid != last_pid.replace(pid) {
                // rand v0.8 with rand_chacha v0.3 may hand out up to 63 buffered `u32` values
                // before noticing a fork; drain them so that the next draw reseeds.
                // See https://github.com/rust-random/rand/pull/1317
                let _: [[u32; 32]; 2] = rand::random();
                log::debug!("reseeded thread-local RNG after fork (pid {pid})");
            }
        })
    }
}

#[cfg(not(unix))]
mod unix_fork_safety {
    pub const fn reseed_thread_rng_upon_pid_change() {}
}
