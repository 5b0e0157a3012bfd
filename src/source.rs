//! Entropy and clock sources that [`Codec`](crate::Codec) draws from.

use chrono::{DateTime, Utc};

/// A trait that defines the random number generator interface for [`Codec`](crate::Codec).
///
/// Implementations used outside of tests must be cryptographically secure; the bits they produce
/// become the `rand_a` and `rand_b` fields that keep identifiers minted within the same
/// millisecond apart.
pub trait RandSource {
    /// Fills `dest` with random data.
    fn fill_bytes(&mut self, dest: &mut [u8]);
}

/// A trait that defines the system clock interface for [`Codec`](crate::Codec).
pub trait TimeSource {
    /// Returns the current instant.
    fn now(&mut self) -> DateTime<Utc>;
}

/// An adapter that implements [`RandSource`] for [`RngCore`](rand::RngCore) types from `rand`
/// (v0.8) crate.
///
/// # Examples
///
/// ```rust
/// use guid7::{source::Adapter, Codec, SystemClock};
/// use rand::rngs::OsRng;
///
/// let mut g = Codec::with_sources(Adapter(OsRng), SystemClock);
/// println!("{}", g.generate_v4());
/// ```
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Adapter<T>(/** The wrapped [`RngCore`](rand::RngCore) type. */ pub T);

impl<T: rand::RngCore> RandSource for Adapter<T> {
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.0.fill_bytes(dest);
    }
}

impl<T: RandSource + ?Sized> RandSource for &mut T {
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        (**self).fill_bytes(dest);
    }
}

impl<T: TimeSource + ?Sized> TimeSource for &mut T {
    fn now(&mut self) -> DateTime<Utc> {
        (**self).now()
    }
}

/// The default [`TimeSource`] that reads the system clock.
#[cfg(feature = "global_gen")]
#[cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Default)]
pub struct SystemClock;

#[cfg(feature = "global_gen")]
impl TimeSource for SystemClock {
    fn now(&mut self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A [`TimeSource`] that always reports the same instant.
///
/// # Examples
///
/// ```rust
/// use chrono::DateTime;
/// use guid7::{source::{Adapter, FixedClock}, Codec};
///
/// let frozen = DateTime::from_timestamp_millis(0x0123_4567_89ab).unwrap();
/// let mut g = Codec::with_sources(Adapter(rand::thread_rng()), FixedClock(frozen));
/// assert_eq!(g.generate_v7()?.unix_ts_ms(), 0x0123_4567_89ab);
/// # Ok::<(), guid7::Error>(())
/// ```
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct FixedClock(/** The instant reported. */ pub DateTime<Utc>);

impl TimeSource for FixedClock {
    fn now(&mut self) -> DateTime<Utc> {
        self.0
    }
}
