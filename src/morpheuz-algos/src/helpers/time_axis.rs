use chrono::{NaiveDateTime, TimeDelta};

/// Sampling instants `base, base + interval, base + 2 * interval, ...`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeAxis {
    base: NaiveDateTime,
    interval: TimeDelta,
}

/// Span between two neighbouring axis instants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bucket {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

pub fn format_clock(time: &NaiveDateTime) -> String {
    time.format("%H%M").to_string()
}

impl TimeAxis {
    pub fn new(base: NaiveDateTime, interval: TimeDelta) -> Self {
        Self { base, interval }
    }

    pub fn base(&self) -> NaiveDateTime {
        self.base
    }

    pub fn interval(&self) -> TimeDelta {
        self.interval
    }

    pub fn at(&self, slot: usize) -> NaiveDateTime {
        self.base + self.interval * slot as i32
    }

    pub fn bucket(&self, slot: usize) -> Bucket {
        Bucket::new(self.at(slot), self.interval)
    }

    pub fn buckets(&self, count: usize) -> impl Iterator<Item = Bucket> + '_ {
        (0..count).map(|slot| self.bucket(slot))
    }
}

impl Bucket {
    pub fn new(start: NaiveDateTime, interval: TimeDelta) -> Self {
        Self {
            start,
            end: start + interval,
        }
    }

    /// Compares zero padded `hhmm` strings, so a bucket crossing midnight
    /// (`2355` to `0005`) never contains anything.
    pub fn contains(&self, target: &str) -> bool {
        let start = format_clock(&self.start);
        let end = format_clock(&self.end);
        start.as_str() <= target && target <= end.as_str()
    }

    /// Walks the bucket a minute at a time looking for `target`,
    /// settling for the bucket start when no minute matches.
    pub fn absolute_match(&self, target: &str) -> NaiveDateTime {
        let mut point = self.start;
        while point <= self.end {
            if format_clock(&point) == target {
                return point;
            }
            point += TimeDelta::minutes(1);
        }

        debug!("no exact minute for {} in bucket starting {}", target, self.start);
        self.start
    }

    pub fn locate(&self, target: &str) -> Option<NaiveDateTime> {
        self.contains(target).then(|| self.absolute_match(target))
    }
}
