use std::fmt::Display;

use chrono::{NaiveDateTime, Timelike};

/// Wall clock hour and minute, as configured on the watch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ClockTime {
    pub hour: u32,
    pub minute: u32,
}

impl ClockTime {
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(Self { hour, minute })
    }

    pub fn of(time: &NaiveDateTime) -> Self {
        Self {
            hour: time.hour(),
            minute: time.minute(),
        }
    }

    /// Zero padded `hhmm`, the form used for bucket matching.
    pub fn hhmm(&self) -> String {
        format!("{:02}{:02}", self.hour, self.minute)
    }

    pub fn hh_mm(&self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }
}

impl Display for ClockTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.hh_mm())
    }
}

/// Smart alarm settings for the night.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlarmWindow {
    pub enabled: bool,
    pub from: ClockTime,
    pub to: ClockTime,
    /// When the alarm actually went off, `None` if it never did.
    pub fired_at: Option<ClockTime>,
}

impl AlarmWindow {
    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn new(from: ClockTime, to: ClockTime) -> Self {
        Self {
            enabled: true,
            from,
            to,
            fired_at: None,
        }
    }

    pub fn with_fired_at(mut self, fired_at: Option<ClockTime>) -> Self {
        self.fired_at = fired_at;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn formats_zero_padded() {
        let t = ClockTime::new(6, 5).unwrap();
        assert_eq!(t.hhmm(), "0605");
        assert_eq!(t.hh_mm(), "06:05");
        assert_eq!(t.to_string(), "06:05");
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(ClockTime::new(24, 0).is_none());
        assert!(ClockTime::new(23, 60).is_none());
        assert!(ClockTime::new(23, 59).is_some());
    }

    #[test]
    fn of_takes_hour_and_minute() {
        let time = NaiveDate::from_ymd_opt(2014, 3, 2)
            .unwrap()
            .and_hms_opt(22, 47, 31)
            .unwrap();
        assert_eq!(ClockTime::of(&time), ClockTime::new(22, 47).unwrap());
    }

    #[test]
    fn disabled_window_has_nothing_fired() {
        let window = AlarmWindow::disabled();
        assert!(!window.enabled);
        assert!(window.fired_at.is_none());
    }
}
