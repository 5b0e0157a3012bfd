use crate::Error;
use fstr::FStr;
use std::{fmt, str};

/// Represents a Universally Unique IDentifier as a 16-byte big-endian array.
///
/// The derived [`Ord`] compares the bytes as unsigned integers from the most significant one, so
/// UUIDv7 values sort by their embedded timestamps.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Uuid([u8; 16]);

impl Uuid {
    /// Nil UUID (00000000-0000-0000-0000-000000000000)
    pub const NIL: Self = Self([0x00; 16]);

    /// Max UUID (ffffffff-ffff-ffff-ffff-ffffffffffff)
    pub const MAX: Self = Self([0xff; 16]);

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Returns the value of the variant field: the most significant 4 bits of the 8th byte
    /// (00000000-0000-0000-F000-000000000000).
    ///
    /// The "don't-care" bits are not masked out, so the RFC 9562 variant is returned as any of
    /// `0b1000` through `0b1011`. See RFC 9562 for how to interpret the other values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use guid7::Uuid;
    ///
    /// let x = "0180ae59-078c-7b80-b113-2fe14a615fb3".parse::<Uuid>()?;
    /// assert_eq!(x.variant(), 0b1011);
    /// # Ok::<(), guid7::Error>(())
    /// ```
    pub const fn variant(&self) -> u8 {
        self.0[8] >> 4
    }

    /// Returns the value of the version field: the most significant 4 bits of the 16-bit
    /// big-endian field at the 6th and 7th bytes (00000000-0000-F000-0000-000000000000).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use guid7::Uuid;
    ///
    /// let x = "0180ae59-078c-7b80-b113-2fe14a615fb3".parse::<Uuid>()?;
    /// assert_eq!(x.version(), 7);
    /// # Ok::<(), guid7::Error>(())
    /// ```
    pub const fn version(&self) -> u8 {
        (u16::from_be_bytes([self.0[6], self.0[7]]) >> 12) as u8
    }

    /// Returns `true` if the variant field holds the `0b10xx` pattern defined by RFC 9562.
    pub const fn is_rfc_variant(&self) -> bool {
        self.variant() & 0b1100 == 0b1000
    }

    /// Returns the 48-bit big-endian integer stored in the first 6 bytes, which is the
    /// `unix_ts_ms` field of a UUIDv7.
    pub const fn unix_ts_ms(&self) -> u64 {
        let b = &self.0;
        u64::from_be_bytes([0, 0, b[0], b[1], b[2], b[3], b[4], b[5]])
    }

    /// Returns the 8-4-4-4-12 hexadecimal string representation in a stack-allocated
    /// [`FStr`] that can be dereferenced as `str` and [`Display`](fmt::Display)ed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use guid7::Uuid;
    ///
    /// let x = "01809424-3E59-7C05-9219-566F82FFF672".parse::<Uuid>()?;
    /// assert_eq!(&x.encode() as &str, "01809424-3e59-7c05-9219-566f82fff672");
    /// # Ok::<(), guid7::Error>(())
    /// ```
    pub fn encode(&self) -> FStr<36> {
        const DIGITS: &[u8; 16] = b"0123456789abcdef";

        let mut buffer = [b'-'; 36];
        let mut pos = 0;
        for (i, e) in self.0.iter().enumerate() {
            buffer[pos] = DIGITS[(e >> 4) as usize];
            buffer[pos + 1] = DIGITS[(e & 15) as usize];
            pos += if matches!(i, 3 | 5 | 7 | 9) { 3 } else { 2 };
        }
        debug_assert!(buffer.is_ascii());
        // SAFETY: `buffer` holds ASCII hex digits and hyphens only
        unsafe { FStr::from_bytes_unchecked(buffer) }
    }
}

impl fmt::Display for Uuid {
    /// Returns the 8-4-4-4-12 canonical hexadecimal string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl str::FromStr for Uuid {
    type Err = Error;

    /// Creates an object from the 8-4-4-4-12 hexadecimal string representation, accepting both
    /// lower- and upper-case digits.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        let src = src.as_bytes();
        if src.len() != 36 {
            return Err(Error::InvalidString);
        }

        let mut dst = [0u8; 16];
        let mut pos = 0;
        for (i, e) in dst.iter_mut().enumerate() {
            let hi = hex_value(src[pos]).ok_or(Error::InvalidString)?;
            let lo = hex_value(src[pos + 1]).ok_or(Error::InvalidString)?;
            *e = (hi << 4) | lo;
            pos += 2;
            if matches!(i, 3 | 5 | 7 | 9) {
                if src[pos] != b'-' {
                    return Err(Error::InvalidString);
                }
                pos += 1;
            }
        }
        Ok(Self(dst))
    }
}

const fn hex_value(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl From<Uuid> for [u8; 16] {
    fn from(src: Uuid) -> Self {
        src.0
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(src: [u8; 16]) -> Self {
        Self(src)
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Uuid> for u128 {
    fn from(src: Uuid) -> Self {
        Self::from_be_bytes(src.0)
    }
}

impl From<u128> for Uuid {
    fn from(src: u128) -> Self {
        Self(src.to_be_bytes())
    }
}

impl From<Uuid> for String {
    fn from(src: Uuid) -> Self {
        String::from(&src.encode() as &str)
    }
}

impl TryFrom<&str> for Uuid {
    type Error = Error;

    fn try_from(src: &str) -> Result<Self, Self::Error> {
        src.parse()
    }
}

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
mod uuid_support {
    use super::Uuid;

    impl From<Uuid> for uuid::Uuid {
        fn from(src: Uuid) -> Self {
            uuid::Uuid::from_bytes(src.0)
        }
    }

    impl From<uuid::Uuid> for Uuid {
        fn from(src: uuid::Uuid) -> Self {
            Self(src.into_bytes())
        }
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::{fmt, Uuid};
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for Uuid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.encode())
            } else {
                serializer.serialize_bytes(self.as_bytes())
            }
        }
    }

    impl<'de> serde::Deserialize<'de> for Uuid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(UuidVisitor)
            } else {
                deserializer.deserialize_bytes(UuidVisitor)
            }
        }
    }

    struct UuidVisitor;

    impl<'de> de::Visitor<'de> for UuidVisitor {
        type Value = Uuid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a UUID as 8-4-4-4-12 string or 16 bytes")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            value.parse::<Self::Value>().map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            <[u8; 16]>::try_from(value)
                .map(Self::Value::from)
                .map_err(|_| de::Error::invalid_length(value.len(), &self))
        }
    }

}
