use chrono::NaiveDateTime;

/// Vertical line drawn over the movement chart.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Marker {
    pub kind: MarkerKind,
    pub time: NaiveDateTime,
    pub style: MarkerStyle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MarkerKind {
    Ignore,
    Start,
    End,
    Begin,
    Endstop,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct MarkerStyle {
    pub line_width: u8,
    pub color: &'static str,
    pub dash_pattern: Option<[u8; 2]>,
}

impl MarkerKind {
    const DASH: [u8; 2] = [1, 4];

    pub fn style(&self) -> MarkerStyle {
        match self {
            Self::Ignore => MarkerStyle {
                line_width: 5,
                color: "#184E99",
                dash_pattern: None,
            },
            Self::Start => MarkerStyle {
                line_width: 1,
                color: "rgb(76, 217, 100)",
                dash_pattern: Some(Self::DASH),
            },
            Self::End => MarkerStyle {
                line_width: 1,
                color: "rgb(255, 59, 48)",
                dash_pattern: Some(Self::DASH),
            },
            // sleep begin and end share one colour
            Self::Begin | Self::Endstop => MarkerStyle {
                line_width: 1,
                color: "rgb(255, 149, 0)",
                dash_pattern: None,
            },
        }
    }
}

impl Marker {
    pub fn new(kind: MarkerKind, time: NaiveDateTime) -> Self {
        Self {
            kind,
            time,
            style: kind.style(),
        }
    }

    pub fn is_dashed(&self) -> bool {
        self.style.dash_pattern.is_some()
    }
}
