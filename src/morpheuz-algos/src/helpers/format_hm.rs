use chrono::{NaiveDateTime, TimeDelta};

pub trait FormatHM {
    fn format_hm(&self) -> String;
}

impl FormatHM for TimeDelta {
    /// Hours are not wrapped, a 25 hour span reads `25:00`.
    fn format_hm(&self) -> String {
        let minutes = self.num_minutes();
        format!("{:02}:{:02}", minutes / 60, minutes % 60)
    }
}

impl FormatHM for NaiveDateTime {
    fn format_hm(&self) -> String {
        self.format("%H:%M").to_string()
    }
}
