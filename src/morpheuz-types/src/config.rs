use chrono::TimeDelta;

/// Thresholds and cadence shared by every stage of the night analysis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MorpheuzConfig {
    /// Movement strictly above this is counted as awake.
    pub awake_above: u32,
    /// Movement strictly above this (and not awake) is counted as light sleep.
    pub light_above: u32,
    pub sample_interval_mins: i64,
    /// Watch app version, shown divided by ten.
    pub version: u32,
}

impl MorpheuzConfig {
    pub const AWAKE_ABOVE: u32 = 1000;
    pub const LIGHT_ABOVE: u32 = 120;
    pub const SAMPLE_INTERVAL_MINS: i64 = 10;
    pub const VERSION: u32 = 25;
    /// Longest accepted sampling interval, one day.
    pub const MAX_SAMPLE_INTERVAL_MINS: i64 = 1440;

    pub fn sample_interval_in_range(mins: i64) -> bool {
        (1..=Self::MAX_SAMPLE_INTERVAL_MINS).contains(&mins)
    }

    /// Out of range intervals are clamped to `1..=MAX_SAMPLE_INTERVAL_MINS`.
    pub fn sample_interval(&self) -> TimeDelta {
        TimeDelta::minutes(
            self.sample_interval_mins
                .clamp(1, Self::MAX_SAMPLE_INTERVAL_MINS),
        )
    }

    pub fn version_string(&self) -> String {
        format!("{}", f64::from(self.version) / 10.0)
    }
}

impl Default for MorpheuzConfig {
    fn default() -> Self {
        Self {
            awake_above: Self::AWAKE_ABOVE,
            light_above: Self::LIGHT_ABOVE,
            sample_interval_mins: Self::SAMPLE_INTERVAL_MINS,
            version: Self::VERSION,
        }
    }
}
