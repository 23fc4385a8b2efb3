use chrono::{NaiveDateTime, TimeDelta};
use morpheuz_types::{Band, ClockTime, Marker, MarkerKind, MorpheuzConfig, Sample};
use serde::Serialize;

use crate::helpers::time_axis::Bucket;

/// Sample counts per band between sleep begin and sleep end.
///
/// `sleep_begin` of `None` means there was not enough data to find any
/// sleep, not that the night lasted zero minutes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SleepStats {
    pub sleep_begin: Option<NaiveDateTime>,
    pub sleep_end: Option<NaiveDateTime>,
    pub deep: u32,
    pub light: u32,
    pub awake: u32,
    pub ignore: u32,
}

impl SleepStats {
    pub fn count(&self, band: Band) -> u32 {
        match band {
            Band::Deep => self.deep,
            Band::Light => self.light,
            Band::Awake => self.awake,
            Band::Ignore => self.ignore,
        }
    }

    pub fn total(&self) -> u32 {
        self.deep + self.light + self.awake + self.ignore
    }

    pub fn duration(&self, band: Band, interval: TimeDelta) -> TimeDelta {
        interval * self.count(band) as i32
    }

    pub fn total_duration(&self, interval: TimeDelta) -> TimeDelta {
        interval * self.total() as i32
    }

    pub fn has_sleep(&self) -> bool {
        self.sleep_begin.is_some() && self.sleep_end.is_some()
    }

    fn add(&mut self, band: Band) {
        match band {
            Band::Deep => self.deep += 1,
            Band::Light => self.light += 1,
            Band::Awake => self.awake += 1,
            Band::Ignore => self.ignore += 1,
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct SleepSpan {
    begin: usize,
    end: usize,
    begin_time: NaiveDateTime,
    end_time: NaiveDateTime,
}

pub struct SleepStatsCalculator {
    config: MorpheuzConfig,
}

impl SleepStatsCalculator {
    pub fn new(config: MorpheuzConfig) -> Self {
        Self { config }
    }

    /// Finds the sleep span and tallies bands inside it. The markers are the
    /// `begin` and `endstop` lines for the span, empty when no sleep was found.
    pub fn calculate(
        &self,
        samples: &[Sample],
        goneoff: Option<ClockTime>,
    ) -> (SleepStats, Vec<Marker>) {
        let Some(span) = self.find_span(samples, goneoff) else {
            debug!("no sample at or below {} movement", self.config.awake_above);
            return (SleepStats::default(), Vec::new());
        };

        let mut stats = SleepStats {
            sleep_begin: Some(span.begin_time),
            sleep_end: Some(span.end_time),
            ..Default::default()
        };

        for sample in &samples[span.begin..=span.end] {
            stats.add(sample.band(&self.config));
        }

        let markers = vec![
            Marker::new(MarkerKind::Begin, span.begin_time),
            Marker::new(MarkerKind::Endstop, span.end_time),
        ];

        (stats, markers)
    }

    fn find_span(&self, samples: &[Sample], goneoff: Option<ClockTime>) -> Option<SleepSpan> {
        let interval = self.config.sample_interval();
        let goneoff = goneoff.map(|t| t.hhmm());

        let mut begin = None;
        let mut last_asleep = None;
        let mut alarm = None;

        for (i, sample) in samples.iter().enumerate() {
            let bucket = Bucket::new(sample.time, interval);

            // the alarm going off ends the night, whatever follows
            if let Some(end) = goneoff.as_deref().and_then(|g| bucket.locate(g)) {
                alarm = Some((i, end));
                break;
            }

            if sample.reading.is_asleep(&self.config) {
                begin.get_or_insert((i, sample.time));
                last_asleep = Some((i, bucket.end));
            }
        }

        let (begin, begin_time) = begin?;
        let (end, end_time) = alarm.or(last_asleep)?;

        Some(SleepSpan {
            begin,
            end,
            begin_time,
            end_time,
        })
    }
}
