use chrono::NaiveDate;
use morpheuz_types::{AlarmWindow, Sample};
use serde::Serialize;

use crate::helpers::format_hm::FormatHM;

const URL_NEWLINE: &str = "%0D%0A";
const NEWLINE: &str = "\r\n";

/// The same CSV text twice: `body` for a mailto link, `copy_body` for the clipboard.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ExportBodies {
    pub body: String,
    pub copy_body: String,
}

pub struct ExportFormatter;

impl ExportFormatter {
    pub fn lines(samples: &[Sample], window: &AlarmWindow) -> Vec<String> {
        let mut lines = samples
            .iter()
            .map(|s| format!("{},{}", s.time.format_hm(), s.raw))
            .collect::<Vec<_>>();

        if window.enabled {
            lines.push(format!("{},START", window.from.hh_mm()));
            lines.push(format!("{},END", window.to.hh_mm()));
        }
        if let Some(fired_at) = window.fired_at {
            lines.push(format!("{},ALARM", fired_at.hh_mm()));
        }

        lines
    }

    pub fn format(samples: &[Sample], window: &AlarmWindow) -> ExportBodies {
        let mut bodies = ExportBodies::default();
        for line in Self::lines(samples, window) {
            bodies.body.push_str(&line);
            bodies.body.push_str(URL_NEWLINE);
            bodies.copy_body.push_str(&line);
            bodies.copy_body.push_str(NEWLINE);
        }
        bodies
    }
}

impl ExportBodies {
    pub fn line_count(&self) -> usize {
        self.copy_body.matches(NEWLINE).count()
    }

    /// Query part of the mail link, `?subject=Morpheuz-<date>.csv&body=...`.
    pub fn mail_query(&self, night: NaiveDate) -> String {
        format!(
            "?subject=Morpheuz-{}.csv&body={}",
            night.format("%Y-%m-%d"),
            self.body
        )
    }
}
