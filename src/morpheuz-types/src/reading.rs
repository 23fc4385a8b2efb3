use crate::MorpheuzConfig;

/// One decoded movement slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Reading {
    Measured(u32),
    /// The watch had no reading for the interval (`-1` on the wire).
    Missing,
    /// The user excluded the interval (`-2` on the wire).
    Ignored,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Band {
    Deep,
    Light,
    Awake,
    Ignore,
}

impl Reading {
    pub const MISSING: i64 = -1;
    pub const IGNORED: i64 = -2;

    pub fn from_value(value: i64) -> Self {
        match value {
            Self::IGNORED => Self::Ignored,
            // saturates at u32::MAX
            0.. => Self::Measured(u32::try_from(value).unwrap_or(u32::MAX)),
            _ => Self::Missing,
        }
    }

    pub fn value(&self) -> i64 {
        match self {
            Self::Measured(v) => i64::from(*v),
            Self::Missing => Self::MISSING,
            Self::Ignored => Self::IGNORED,
        }
    }

    pub fn measured(&self) -> Option<u32> {
        match self {
            Self::Measured(v) => Some(*v),
            Self::Missing | Self::Ignored => None,
        }
    }

    pub fn is_ignored(&self) -> bool {
        matches!(self, Self::Ignored)
    }

    /// Value plotted on the movement chart, `None` breaks the line.
    pub fn chart_value(&self) -> Option<u32> {
        self.measured()
    }

    /// True while movement stays at or below the awake threshold.
    pub fn is_asleep(&self, config: &MorpheuzConfig) -> bool {
        self.measured().is_some_and(|v| v <= config.awake_above)
    }

    pub fn band(&self, config: &MorpheuzConfig) -> Band {
        match self.measured() {
            None => Band::Ignore,
            Some(v) if v > config.awake_above => Band::Awake,
            Some(v) if v > config.light_above => Band::Light,
            Some(_) => Band::Deep,
        }
    }
}
