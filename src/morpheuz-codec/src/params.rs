use morpheuz_types::ClockTime;

use crate::CodecError;

/// `goneoff` value sent when the alarm did not go off.
pub const NOT_FIRED: &str = "N";

/// Parses an `hhmm` clock string.
pub fn parse_clock(hhmm: &str) -> Result<ClockTime, CodecError> {
    let invalid = || CodecError::InvalidClock(hhmm.to_owned());
    if hhmm.len() != 4 || !hhmm.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let hour = hhmm[..2].parse().map_err(|_| invalid())?;
    let minute = hhmm[2..].parse().map_err(|_| invalid())?;
    ClockTime::new(hour, minute).ok_or_else(invalid)
}

/// Builds a clock time from separate hour and minute parameters,
/// which may or may not be zero padded.
pub fn clock_from_parts(hour: &str, minute: &str) -> Result<ClockTime, CodecError> {
    let h = hour
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|h| *h < 24)
        .ok_or_else(|| CodecError::InvalidHour(hour.to_owned()))?;
    let m = minute
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|m| *m < 60)
        .ok_or_else(|| CodecError::InvalidMinute(minute.to_owned()))?;

    ClockTime::new(h, m).ok_or_else(|| CodecError::InvalidHour(hour.to_owned()))
}

/// `N` (or nothing) means the alarm never went off.
pub fn parse_goneoff(goneoff: &str) -> Result<Option<ClockTime>, CodecError> {
    match goneoff.trim() {
        "" | NOT_FIRED => Ok(None),
        hhmm => parse_clock(hhmm).map(Some),
    }
}

pub fn parse_flag(flag: &str) -> Result<bool, CodecError> {
    match flag.trim() {
        "Y" => Ok(true),
        "N" | "" => Ok(false),
        other => Err(CodecError::InvalidFlag(other.to_owned())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_clock_four_digits() {
        assert_eq!(parse_clock("0630").unwrap(), ClockTime::new(6, 30).unwrap());
        assert_eq!(parse_clock("2359").unwrap(), ClockTime::new(23, 59).unwrap());
    }

    #[test]
    fn parse_clock_rejects_bad_input() {
        assert!(parse_clock("630").is_err());
        assert!(parse_clock("2460").is_err());
        assert!(parse_clock("ab12").is_err());
        assert!(matches!(parse_clock("99999"), Err(CodecError::InvalidClock(_))));
    }

    #[test]
    fn clock_from_unpadded_parts() {
        assert_eq!(clock_from_parts("6", "0").unwrap(), ClockTime::new(6, 0).unwrap());
        assert_eq!(clock_from_parts("22", "30").unwrap(), ClockTime::new(22, 30).unwrap());
        assert!(matches!(clock_from_parts("25", "0"), Err(CodecError::InvalidHour(_))));
        assert!(matches!(clock_from_parts("6", "x"), Err(CodecError::InvalidMinute(_))));
    }

    #[test]
    fn goneoff_sentinel() {
        assert_eq!(parse_goneoff("N").unwrap(), None);
        assert_eq!(parse_goneoff("").unwrap(), None);
        assert_eq!(parse_goneoff("0612").unwrap(), ClockTime::new(6, 12));
        assert!(parse_goneoff("later").is_err());
    }

    #[test]
    fn smart_flag() {
        assert!(parse_flag("Y").unwrap());
        assert!(!parse_flag("N").unwrap());
        assert!(parse_flag("yes").is_err());
    }
}
