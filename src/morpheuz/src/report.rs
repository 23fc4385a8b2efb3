use std::fmt::Display;

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use morpheuz_algos::{
    AlarmBounds, AlarmWindowLocator, ExportBodies, ExportFormatter, IgnoreMarker, SleepStats,
    SleepStatsCalculator,
    helpers::{format_hm::FormatHM, time_axis::TimeAxis},
};
use morpheuz_codec::SeriesParser;
use morpheuz_types::{AlarmWindow, Band, Marker, MorpheuzConfig};
use serde::Serialize;

/// Everything the watch hands over for one night.
#[derive(Clone, Debug, Default)]
pub struct NightInput {
    pub base: NaiveDateTime,
    pub graph: String,
    pub alarm: AlarmWindow,
    pub token: Option<String>,
    pub email_to: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SleepSummary {
    pub total: String,
    pub awake: String,
    pub light: String,
    pub deep: String,
    pub ignore: String,
}

/// Hand-off of the sleep period to a health data store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthLink {
    pub starts: String,
    pub ends: String,
    pub url: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct NightReport {
    pub night: NaiveDate,
    pub version: String,
    pub chart: Vec<(NaiveDateTime, Option<u32>)>,
    pub markers: Vec<Marker>,
    pub alarm_bounds: AlarmBounds,
    pub stats: SleepStats,
    pub summary: SleepSummary,
    pub pie: Vec<(&'static str, u32)>,
    pub export: ExportBodies,
    pub mailto: String,
    pub health_link: Option<HealthLink>,
}

impl SleepSummary {
    pub fn new(stats: &SleepStats, interval: TimeDelta) -> Self {
        let hm = |band| stats.duration(band, interval).format_hm();
        Self {
            total: stats.total_duration(interval).format_hm(),
            awake: hm(Band::Awake),
            light: hm(Band::Light),
            deep: hm(Band::Deep),
            ignore: hm(Band::Ignore),
        }
    }
}

impl HealthLink {
    const SCHEME: &'static str = "swpro2hk://?source=Morpheuz";

    pub fn new(stats: &SleepStats, token: Option<&str>) -> Option<Self> {
        let (begin, end) = (stats.sleep_begin?, stats.sleep_end?);
        let stamp = |t: NaiveDateTime| t.format("%Y-%m-%dT%H:%M:00").to_string();
        let shown = |t: NaiveDateTime| t.format("%d %b %Y %H:%M").to_string();

        let mut url = format!("{}&starts={}&ends={}", Self::SCHEME, stamp(begin), stamp(end));
        if let Some(token) = token.filter(|t| !t.is_empty()) {
            url.push_str("&at=");
            url.push_str(token);
        }

        Some(Self {
            starts: shown(begin),
            ends: shown(end),
            url,
        })
    }
}

impl NightReport {
    pub fn build(input: &NightInput, config: &MorpheuzConfig) -> Self {
        let interval = config.sample_interval();
        let series = SeriesParser::new(input.base, interval).parse(&input.graph);
        debug!(
            "{} samples from {} slots starting {}",
            series.samples.len(),
            series.slot_count,
            input.base
        );

        let alarm_bounds = AlarmWindowLocator::new(TimeAxis::new(input.base, interval))
            .locate(&input.alarm, series.slot_count);
        let (stats, sleep_markers) =
            SleepStatsCalculator::new(*config).calculate(&series.samples, input.alarm.fired_at);

        let mut markers = IgnoreMarker::markers(&series.samples);
        markers.extend(alarm_bounds.markers());
        markers.extend(sleep_markers);

        let export = ExportFormatter::format(&series.samples, &input.alarm);
        let night = input.base.date();
        let mailto = format!("mailto:{}{}", input.email_to, export.mail_query(night));

        Self {
            night,
            version: config.version_string(),
            chart: series.samples.iter().map(|s| s.chart_point()).collect(),
            markers,
            alarm_bounds,
            summary: SleepSummary::new(&stats, interval),
            pie: vec![
                ("Awake?", stats.awake),
                ("Light", stats.light),
                ("Deep", stats.deep),
                ("Ignore", stats.ignore),
            ],
            health_link: HealthLink::new(&stats, input.token.as_deref()),
            stats,
            export,
            mailto,
        }
    }
}

impl Display for NightReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Morpheuz {} - {}", self.version, self.night.format("%Y-%m-%d"))?;
        match &self.health_link {
            Some(link) => {
                writeln!(f, "Sleep start: {}", link.starts)?;
                writeln!(f, "Sleep end: {}", link.ends)?;
            }
            None => writeln!(f, "Not enough data to find a sleep period")?,
        }
        writeln!(f, "Total: {}", self.summary.total)?;
        writeln!(f, "Awake: {}", self.summary.awake)?;
        writeln!(f, "Light: {}", self.summary.light)?;
        writeln!(f, "Deep: {}", self.summary.deep)?;
        write!(f, "Ignore: {}", self.summary.ignore)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use morpheuz_types::{ClockTime, MarkerKind};

    fn at(day: u32, h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2014, 3, day)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn kinds(report: &NightReport) -> Vec<MarkerKind> {
        report.markers.iter().map(|m| m.kind).collect()
    }

    #[test]
    fn empty_night() {
        let input = NightInput {
            base: at(2, 0, 0),
            ..Default::default()
        };
        let report = NightReport::build(&input, &MorpheuzConfig::default());

        assert!(report.chart.is_empty());
        assert!(report.markers.is_empty());
        assert_eq!(report.stats, SleepStats::default());
        assert!(report.health_link.is_none());
        assert_eq!(report.summary.total, "00:00");
        assert_eq!(report.export, ExportBodies::default());
        assert_eq!(report.mailto, "mailto:?subject=Morpheuz-2014-03-02.csv&body=");
        assert!(report.to_string().contains("Not enough data"));
    }

    #[test]
    fn short_mixed_night() {
        let input = NightInput {
            base: at(2, 0, 0),
            graph: "50!70!-1!-2!1500!90".to_owned(),
            ..Default::default()
        };
        let report = NightReport::build(&input, &MorpheuzConfig::default());

        assert_eq!(
            report.chart,
            vec![
                (at(2, 0, 0), Some(50)),
                (at(2, 0, 10), Some(70)),
                (at(2, 0, 20), None),
                (at(2, 0, 30), None),
                (at(2, 0, 40), Some(1500)),
                (at(2, 0, 50), Some(90)),
            ]
        );
        assert_eq!(
            kinds(&report),
            vec![MarkerKind::Ignore, MarkerKind::Begin, MarkerKind::Endstop]
        );
        assert_eq!(report.stats.deep, 3);
        assert_eq!(report.stats.ignore, 2);
        assert_eq!(report.stats.awake, 1);
        assert_eq!(report.stats.light, 0);
        assert_eq!(report.summary.total, "01:00");
        assert_eq!(report.summary.deep, "00:30");
        assert_eq!(
            report.pie,
            vec![("Awake?", 1), ("Light", 0), ("Deep", 3), ("Ignore", 2)]
        );
    }

    #[test]
    fn smart_alarm_night() {
        let graph = vec!["80"; 60].join("!");
        let input = NightInput {
            base: at(2, 22, 0),
            graph,
            alarm: AlarmWindow::new(ClockTime::new(22, 30).unwrap(), ClockTime::new(6, 0).unwrap())
                .with_fired_at(ClockTime::new(5, 42)),
            token: Some("abc".to_owned()),
            email_to: "me@example.com".to_owned(),
        };
        let report = NightReport::build(&input, &MorpheuzConfig::default());

        assert_eq!(report.alarm_bounds.start, Some(at(2, 22, 30)));
        assert_eq!(report.alarm_bounds.end, Some(at(3, 6, 0)));
        assert_eq!(
            kinds(&report),
            vec![
                MarkerKind::Start,
                MarkerKind::End,
                MarkerKind::Begin,
                MarkerKind::Endstop
            ]
        );
        assert_eq!(report.stats.sleep_end, Some(at(3, 5, 42)));
        // 22:00 through the 05:40 sample
        assert_eq!(report.stats.deep, 47);
        assert_eq!(report.export.line_count(), 63);
        assert!(report.mailto.starts_with("mailto:me@example.com?subject=Morpheuz-2014-03-02.csv&body=22:00,80%0D%0A"));

        let link = report.health_link.unwrap();
        assert_eq!(link.starts, "02 Mar 2014 22:00");
        assert_eq!(link.ends, "03 Mar 2014 05:42");
        assert_eq!(
            link.url,
            "swpro2hk://?source=Morpheuz&starts=2014-03-02T22:00:00&ends=2014-03-03T05:42:00&at=abc"
        );
    }

    #[test]
    fn health_link_without_token() {
        let stats = SleepStats {
            sleep_begin: Some(at(2, 23, 0)),
            sleep_end: Some(at(3, 7, 0)),
            ..Default::default()
        };
        let link = HealthLink::new(&stats, Some("")).unwrap();
        assert!(!link.url.contains("&at="));
        assert!(HealthLink::new(&SleepStats::default(), None).is_none());
    }

    #[test]
    fn report_serializes() {
        let input = NightInput {
            base: at(2, 0, 0),
            graph: "50!-2".to_owned(),
            ..Default::default()
        };
        let report = NightReport::build(&input, &MorpheuzConfig::default());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["version"], "2.5");
        assert_eq!(json["markers"][0]["kind"], "ignore");
        assert!(json["chart"][1][1].is_null());
    }
}
