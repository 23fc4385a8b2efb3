use chrono::{NaiveDateTime, TimeDelta};
use morpheuz_types::{Reading, Sample};

pub const DELIMITER: char = '!';

/// Decoded movement series.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Series {
    pub samples: Vec<Sample>,
    /// Number of slots in the encoded string, empty ones included.
    pub slot_count: usize,
}

/// Turns the `!` separated movement string into timestamped samples.
#[derive(Clone, Copy, Debug)]
pub struct SeriesParser {
    base: NaiveDateTime,
    interval: TimeDelta,
}

impl SeriesParser {
    pub fn new(base: NaiveDateTime, interval: TimeDelta) -> Self {
        Self { base, interval }
    }

    pub fn parse(&self, encoded: &str) -> Series {
        if encoded.is_empty() {
            return Series::default();
        }

        let mut samples = Vec::new();
        let mut cursor = self.base;
        let mut slot_count = 0;

        for (slot, raw) in encoded.split(DELIMITER).enumerate() {
            slot_count += 1;
            if !raw.is_empty() {
                samples.push(Sample {
                    slot,
                    time: cursor,
                    raw: raw.to_owned(),
                    reading: Self::decode_slot(raw),
                });
            }
            cursor += self.interval;
        }

        Series {
            samples,
            slot_count,
        }
    }

    fn decode_slot(raw: &str) -> Reading {
        match leading_int(raw) {
            Some(value) => Reading::from_value(value),
            None => {
                debug!("slot `{}` is not a number, treating as missing", raw);
                Reading::Missing
            }
        }
    }
}

/// Reads an optionally signed integer prefix, ignoring leading whitespace
/// and anything after the digits.
fn leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let digits_start = usize::from(trimmed.starts_with(['-', '+']));
    let digits_end = trimmed[digits_start..]
        .find(|c: char| !c.is_ascii_digit())
        .map_or(trimmed.len(), |i| i + digits_start);

    if digits_end == digits_start {
        return None;
    }

    let digits = &trimmed[..digits_end];
    match digits.parse() {
        Ok(value) => Some(value),
        // only overflow is left once the digits are validated
        Err(_) if digits.starts_with('-') => Some(i64::MIN),
        Err(_) => Some(i64::MAX),
    }
}
