use chrono::NaiveDateTime;

use crate::{Band, MorpheuzConfig, Reading};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    /// Position of the slot in the encoded string, empty slots included.
    pub slot: usize,
    pub time: NaiveDateTime,
    /// Slot text exactly as received.
    pub raw: String,
    pub reading: Reading,
}

impl Sample {
    pub fn band(&self, config: &MorpheuzConfig) -> Band {
        self.reading.band(config)
    }

    pub fn chart_point(&self) -> (NaiveDateTime, Option<u32>) {
        (self.time, self.reading.chart_value())
    }
}
