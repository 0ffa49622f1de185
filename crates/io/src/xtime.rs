//! Fixed-width byte codec for the `xtime` time-string field.

use firn_calendar::TimeStamp;

use crate::error::IoError;

/// Byte width of one `xtime` record in a forcing file.
pub const XTIME_WIDTH: usize = 64;

/// Decodes one fixed-width `xtime` record into a [`TimeStamp`].
///
/// Trailing and leading space/NUL padding is stripped before parsing; the
/// remaining text must match `YYYY-MM-DD_HH:MM:SS` exactly.
///
/// # Errors
///
/// Returns [`IoError::InvalidTimeString`] if the bytes are not UTF-8, or
/// [`IoError::Calendar`] if the trimmed text is not a valid no-leap stamp.
pub fn decode_stamp(raw: &[u8]) -> Result<TimeStamp, IoError> {
    let text = std::str::from_utf8(raw).map_err(|e| IoError::InvalidTimeString {
        reason: format!("not UTF-8: {e}"),
    })?;
    let trimmed = text.trim_matches(|c: char| c.is_whitespace() || c == '\0');
    Ok(TimeStamp::parse(trimmed)?)
}

/// Encodes a [`TimeStamp`] into a left-justified, space-padded
/// [`XTIME_WIDTH`]-byte record.
pub fn encode_stamp(stamp: &TimeStamp) -> [u8; XTIME_WIDTH] {
    let text = stamp.to_xtime_string();
    let mut record = [b' '; XTIME_WIDTH];
    record[..text.len()].copy_from_slice(text.as_bytes());
    record
}
