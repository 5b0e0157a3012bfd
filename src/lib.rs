//! An RFC 9562 UUID version 7 codec
//!
//! ```rust
//! use guid7::uuid7;
//!
//! let uuid = uuid7()?;
//! println!("{uuid}"); // e.g., "01809424-3e59-7c05-9219-566f82fff672"
//! println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
//! assert_eq!(uuid.version(), 7);
//! assert_eq!(uuid.variant() & 0b1100, 0b1000);
//! # Ok::<(), guid7::Error>(())
//! ```
//!
//! See [RFC 9562](https://www.rfc-editor.org/rfc/rfc9562).
//!
//! # Field and bit layout
//!
//! This implementation produces identifiers with the following bit layout:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                          unix_ts_ms                           |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |          unix_ts_ms           |  ver  |        rand_a         |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|                        rand_b                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                            rand_b                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Where:
//!
//! - The 48-bit `unix_ts_ms` field is dedicated to the Unix timestamp in milliseconds. Timestamps
//!   before the Unix epoch or past the 48-bit range are rejected with
//!   [`Error::TimestampOutOfRange`], never clamped or wrapped.
//! - The 4-bit `ver` field is set at `0111`.
//! - The 2-bit `var` field is set at `10`.
//! - The 12-bit `rand_a` and 62-bit `rand_b` fields are filled with a cryptographically strong
//!   random number.
//!
//! UUIDs minted at later milliseconds compare greater than earlier ones as unsigned big-endian
//! byte arrays. No counter is carried between calls, so UUIDs minted within the same millisecond
//! come in arbitrary order.
//!
//! # Other features
//!
//! This library also generates UUID version 4 and reads the version and variant fields of any
//! UUID:
//!
//! ```rust
//! use guid7::{uuid4, Uuid};
//!
//! let uuid = uuid4();
//! println!("{uuid}"); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
//! assert_eq!(uuid.version(), 4);
//!
//! let foreign = "00000000-0000-0000-c000-000000000046".parse::<Uuid>()?;
//! assert_eq!(foreign.variant(), 0xc);
//! # Ok::<(), guid7::Error>(())
//! ```
//!
//! # Crate features
//!
//! Default features:
//!
//! - `global_gen`: enables the [`uuid7()`], [`uuid7_at()`], and [`uuid4()`] functions backed by
//!   the thread-local CSPRNG and the system clock.
//!
//! Optional features:
//!
//! - `serde`: enables serialization/deserialization of [`Uuid`] via serde.
//! - `uuid`: enables conversion from/to the [`uuid`](https://crates.io/crates/uuid) crate's type.

#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
pub use error::Error;

mod id;
pub use id::Uuid;

pub mod codec;
pub use codec::Codec;
#[cfg(feature = "global_gen")]
pub use codec::DefaultCodec;

pub mod source;
#[cfg(feature = "global_gen")]
pub use source::SystemClock;

mod entry;
#[cfg(feature = "global_gen")]
pub use entry::{uuid4, uuid7, uuid7_at};
