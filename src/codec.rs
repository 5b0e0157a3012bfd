//! UUIDv4 and UUIDv7 generation over injected entropy and clock sources

use crate::source::{RandSource, TimeSource};
#[cfg(feature = "global_gen")]
use crate::source::{Adapter, SystemClock};
use crate::{Error, Uuid};
use chrono::{DateTime, TimeZone};

/// Largest value the 48-bit `unix_ts_ms` field can hold.
const MAX_UNIX_TS_MS: i64 = (1 << 48) - 1;

/// Bits of the big-endian 16-bit field at bytes 6 and 7 occupied by the version.
const VERSION_MASK: u16 = 0xf000;

/// Bits of byte 8 occupied by the variant.
const VARIANT_MASK: u8 = 0xc0;

/// The RFC 9562 variant (`0b10`) placed in [`VARIANT_MASK`].
const VARIANT_RFC: u8 = 0x80;

/// Represents a UUID generator that combines a random number generator with a clock.
///
/// The codec keeps no state between calls other than the two sources it owns: every UUID is built
/// from freshly drawn random bytes, with no counter that orders UUIDs minted within the same
/// millisecond. Inject deterministic sources to reproduce exact bit patterns.
///
/// # Examples
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use guid7::DefaultCodec;
///
/// let mut g = DefaultCodec::default();
/// let ts = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
/// let uuid = g.generate_v7_at(&ts)?;
/// assert!(uuid.to_string().starts_with("018f3173-7000-7"));
/// assert_eq!(uuid.version(), 7);
/// # Ok::<(), guid7::Error>(())
/// ```
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Codec<R, T> {
    /// The random number generator used by the codec.
    rng: R,

    /// The clock used by [`Codec::generate_v7`].
    clock: T,
}

/// A [`Codec`] over the thread-local CSPRNG of `rand` crate and the system clock.
#[cfg(feature = "global_gen")]
#[cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]
pub type DefaultCodec = Codec<Adapter<rand::rngs::ThreadRng>, SystemClock>;

impl<R, T> Codec<R, T> {
    /// Creates a codec instance from a random number generator and a clock.
    pub const fn with_sources(rng: R, clock: T) -> Self {
        Self { rng, clock }
    }
}

impl<R: RandSource, T> Codec<R, T> {
    /// Generates a new UUIDv4 object: 122 random bits with the version field set at `0100` and
    /// the variant field set at `10`.
    pub fn generate_v4(&mut self) -> Uuid {
        let mut bytes = [0u8; 16];
        self.rng.fill_bytes(&mut bytes);
        stamp_version(&mut bytes, 4);
        stamp_variant(&mut bytes);
        Uuid::from(bytes)
    }

    /// Generates a new UUIDv7 object from `timestamp`.
    ///
    /// Sub-millisecond precision is floored away; the UTC offset of `timestamp` does not affect
    /// the result.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TimestampOutOfRange`] if `timestamp` precedes the Unix epoch or lies past
    /// the end of the 48-bit millisecond range.
    pub fn generate_v7_at<Tz: TimeZone>(
        &mut self,
        timestamp: &DateTime<Tz>,
    ) -> Result<Uuid, Error> {
        self.encode_v7("timestamp", timestamp.timestamp_millis())
    }

    /// Generates a new UUIDv7 object from a raw `unix_ts_ms` (milliseconds since the Unix epoch).
    ///
    /// # Errors
    ///
    /// Returns [`Error::TimestampOutOfRange`] if `unix_ts_ms` is not a 48-bit unsigned integer.
    pub fn generate_v7_core(&mut self, unix_ts_ms: i64) -> Result<Uuid, Error> {
        self.encode_v7("unix_ts_ms", unix_ts_ms)
    }

    fn encode_v7(&mut self, param: &'static str, unix_ts_ms: i64) -> Result<Uuid, Error> {
        if !(0..=MAX_UNIX_TS_MS).contains(&unix_ts_ms) {
            log::debug!("rejected `{param}` of {unix_ts_ms} ms: not a 48-bit unsigned integer");
            return Err(Error::TimestampOutOfRange { param, unix_ts_ms });
        }

        let mut bytes = [0u8; 16];
        self.rng.fill_bytes(&mut bytes);

        // unix_ts_ms: the low 6 bytes of the big-endian i64, which is non-negative here
        bytes[..6].copy_from_slice(&unix_ts_ms.to_be_bytes()[2..]);
        stamp_version(&mut bytes, 7);
        stamp_variant(&mut bytes);
        Ok(Uuid::from(bytes))
    }
}

impl<R: RandSource, T: TimeSource> Codec<R, T> {
    /// Generates a new UUIDv7 object from the current instant reported by the clock.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TimestampOutOfRange`] if the clock reports an instant the 48-bit
    /// `unix_ts_ms` field cannot hold.
    pub fn generate_v7(&mut self) -> Result<Uuid, Error> {
        let now = self.clock.now();
        self.generate_v7_at(&now)
    }
}

/// Overwrites the top 4 bits of the big-endian field at bytes 6 and 7, keeping the low 12 bits.
fn stamp_version(bytes: &mut [u8; 16], version: u8) {
    let field = u16::from_be_bytes([bytes[6], bytes[7]]);
    let field = (field & !VERSION_MASK) | (u16::from(version) << 12);
    bytes[6..8].copy_from_slice(&field.to_be_bytes());
}

/// Overwrites the top 2 bits of byte 8 with `10`, keeping the low 6 bits.
fn stamp_variant(bytes: &mut [u8; 16]) {
    bytes[8] = (bytes[8] & !VARIANT_MASK) | VARIANT_RFC;
}
