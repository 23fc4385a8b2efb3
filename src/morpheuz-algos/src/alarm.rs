use chrono::NaiveDateTime;
use morpheuz_types::{AlarmWindow, Marker, MarkerKind};
use serde::Serialize;

use crate::helpers::time_axis::TimeAxis;

/// Where the smart alarm window opens and closes on the time axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AlarmBounds {
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
}

impl AlarmBounds {
    pub fn markers(&self) -> Vec<Marker> {
        let start = self.start.map(|t| Marker::new(MarkerKind::Start, t));
        let end = self.end.map(|t| Marker::new(MarkerKind::End, t));
        start.into_iter().chain(end).collect()
    }
}

pub struct AlarmWindowLocator {
    axis: TimeAxis,
}

impl AlarmWindowLocator {
    pub fn new(axis: TimeAxis) -> Self {
        Self { axis }
    }

    pub fn locate(&self, window: &AlarmWindow, slot_count: usize) -> AlarmBounds {
        let mut bounds = AlarmBounds::default();
        if !window.enabled {
            return bounds;
        }

        let from = window.from.hhmm();
        let to = window.to.hhmm();

        for bucket in self.axis.buckets(slot_count) {
            if bounds.start.is_none() {
                bounds.start = bucket.locate(&from);
            }
            if bounds.end.is_none() {
                bounds.end = bucket.locate(&to);
            }
            if bounds.start.is_some() && bounds.end.is_some() {
                break;
            }
        }

        if bounds.start.is_none() {
            debug!("alarm window start {} is outside the recorded night", window.from);
        }
        if bounds.end.is_none() {
            debug!("alarm window end {} is outside the recorded night", window.to);
        }

        bounds
    }

    pub fn markers(&self, window: &AlarmWindow, slot_count: usize) -> Vec<Marker> {
        self.locate(window, slot_count).markers()
    }
}
