//! Error type of the crate

use thiserror::Error;

/// The error type for this crate.
#[derive(Error, Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum Error {
    /// A timestamp was given that the 48-bit `unix_ts_ms` field cannot hold, i.e., one before the
    /// Unix epoch or one past the end of the 48-bit millisecond range (around year 10895).
    #[error("`{param}` out of range: {unix_ts_ms} ms since the Unix epoch is not a 48-bit unsigned integer")]
    TimestampOutOfRange {
        /// Name of the offending parameter.
        param: &'static str,

        /// Milliseconds elapsed from the Unix epoch, as computed from the parameter.
        unix_ts_ms: i64,
    },

    /// A string was given that is not the 8-4-4-4-12 hexadecimal representation.
    #[error("invalid string representation")]
    InvalidString,
}

#[cfg(test)]
mod tests {
    use super::Error;

    /// Names the offending parameter in message
    #[test]
    fn names_the_offending_parameter_in_message() {
        let e = Error::TimestampOutOfRange {
            param: "timestamp",
            unix_ts_ms: -1,
        };
        assert_eq!(
            e.to_string(),
            "`timestamp` out of range: -1 ms since the Unix epoch is not a 48-bit unsigned integer"
        );
        assert_eq!(Error::InvalidString.to_string(), "invalid string representation");
    }
}
