#[macro_use]
extern crate log;

use anyhow::{Context, anyhow};
use chrono::{DateTime, Local, NaiveDateTime};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use dotenv::dotenv;
use morpheuz::{
    NightInput, NightReport,
    types::{AlarmWindow, MorpheuzConfig},
};
use morpheuz_codec::{clock_from_parts, parse_flag, parse_goneoff};

#[derive(Parser)]
#[command(name = "morpheuz", about = "Sleep statistics from a Morpheuz movement graph")]
pub struct MorpheuzCli {
    /// Time of the first sample, epoch milliseconds. Defaults to now.
    #[arg(env = "MORPHEUZ_BASE", long)]
    pub base: Option<i64>,
    /// `!` separated movement samples
    #[arg(env = "MORPHEUZ_GRAPH", long, default_value = "")]
    pub graph: String,
    /// Smart alarm enabled, `Y` or `N`
    #[arg(env = "MORPHEUZ_SMART", long, default_value = "N")]
    pub smart: String,
    #[arg(env = "MORPHEUZ_FROMHR", long)]
    pub fromhr: Option<String>,
    #[arg(env = "MORPHEUZ_FROMMIN", long)]
    pub frommin: Option<String>,
    #[arg(env = "MORPHEUZ_TOHR", long)]
    pub tohr: Option<String>,
    #[arg(env = "MORPHEUZ_TOMIN", long)]
    pub tomin: Option<String>,
    /// `hhmm` the alarm went off, `N` if it did not
    #[arg(env = "MORPHEUZ_GONEOFF", long, default_value = "N")]
    pub goneoff: String,
    #[arg(env = "MORPHEUZ_TOKEN", long)]
    pub token: Option<String>,
    #[arg(env = "MORPHEUZ_EMAILTO", long, default_value = "")]
    pub emailto: String,
    #[arg(env = "MORPHEUZ_VERS", long, default_value_t = MorpheuzConfig::VERSION)]
    pub vers: u32,
    #[arg(env = "MORPHEUZ_AWAKE_ABOVE", long, default_value_t = MorpheuzConfig::AWAKE_ABOVE)]
    pub awake_above: u32,
    #[arg(env = "MORPHEUZ_LIGHT_ABOVE", long, default_value_t = MorpheuzConfig::LIGHT_ABOVE)]
    pub light_above: u32,
    #[arg(
        env = "MORPHEUZ_SAMPLE_INTERVAL_MINS",
        long,
        default_value_t = MorpheuzConfig::SAMPLE_INTERVAL_MINS
    )]
    pub sample_interval_mins: i64,
    #[clap(subcommand)]
    pub subcommand: MorpheuzCommand,
}

#[derive(Subcommand)]
pub enum MorpheuzCommand {
    ///
    /// Print sleep begin, end and time spent in each band
    ///
    Summary,
    ///
    /// Print the night as CSV, ready for the clipboard
    ///
    Csv,
    ///
    /// Print the mailto link carrying the CSV
    ///
    Mailto,
    ///
    /// Print the whole report as JSON
    ///
    Json {
        #[arg(long)]
        pretty: bool,
    },
    ///
    /// Generate shell completions
    ///
    Completions { shell: Shell },
}

impl MorpheuzCli {
    fn config(&self) -> anyhow::Result<MorpheuzConfig> {
        if !MorpheuzConfig::sample_interval_in_range(self.sample_interval_mins) {
            return Err(anyhow!(
                "sample interval {} is outside 1..={} minutes",
                self.sample_interval_mins,
                MorpheuzConfig::MAX_SAMPLE_INTERVAL_MINS
            ));
        }
        if self.light_above > self.awake_above {
            return Err(anyhow!(
                "light threshold {} is above awake threshold {}",
                self.light_above,
                self.awake_above
            ));
        }

        Ok(MorpheuzConfig {
            awake_above: self.awake_above,
            light_above: self.light_above,
            sample_interval_mins: self.sample_interval_mins,
            version: self.vers,
        })
    }

    fn base(&self) -> anyhow::Result<NaiveDateTime> {
        let Some(millis) = self.base else {
            return Ok(Local::now().naive_local());
        };

        let base = DateTime::from_timestamp_millis(millis)
            .ok_or_else(|| anyhow!("base `{}` is out of range", millis))?;
        Ok(base.with_timezone(&Local).naive_local())
    }

    fn alarm(&self) -> anyhow::Result<AlarmWindow> {
        let fired_at = parse_goneoff(&self.goneoff).context("invalid goneoff")?;
        if !parse_flag(&self.smart).context("invalid smart flag")? {
            return Ok(AlarmWindow::disabled().with_fired_at(fired_at));
        }

        let part = |value: &Option<String>, name: &str| {
            value
                .clone()
                .ok_or_else(|| anyhow!("--{} is required when the smart alarm is on", name))
        };
        let from = clock_from_parts(&part(&self.fromhr, "fromhr")?, &part(&self.frommin, "frommin")?)
            .context("invalid alarm window start")?;
        let to = clock_from_parts(&part(&self.tohr, "tohr")?, &part(&self.tomin, "tomin")?)
            .context("invalid alarm window end")?;

        Ok(AlarmWindow::new(from, to).with_fired_at(fired_at))
    }

    fn night(&self) -> anyhow::Result<NightInput> {
        Ok(NightInput {
            base: self.base()?,
            graph: self.graph.clone(),
            alarm: self.alarm()?,
            token: self.token.clone(),
            email_to: self.emailto.clone(),
        })
    }
}

fn build_report(cli: &MorpheuzCli) -> anyhow::Result<NightReport> {
    let config = cli.config()?;
    let report = NightReport::build(&cli.night()?, &config);
    info!(
        "{} samples, {} markers for the night of {}",
        report.chart.len(),
        report.markers.len(),
        report.night
    );
    Ok(report)
}

fn main() -> anyhow::Result<()> {
    let dotenv_result = dotenv();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(error) = dotenv_result {
        debug!("{}", error);
    }

    let cli = MorpheuzCli::parse();

    match cli.subcommand {
        MorpheuzCommand::Summary => println!("{}", build_report(&cli)?),
        MorpheuzCommand::Csv => print!("{}", build_report(&cli)?.export.copy_body),
        MorpheuzCommand::Mailto => println!("{}", build_report(&cli)?.mailto),
        MorpheuzCommand::Json { pretty } => {
            let report = build_report(&cli)?;
            let json = if pretty {
                serde_json::to_string_pretty(&report)?
            } else {
                serde_json::to_string(&report)?
            };
            println!("{}", json);
        }
        MorpheuzCommand::Completions { shell } => {
            let mut command = MorpheuzCli::command();
            clap_complete::generate(shell, &mut command, "morpheuz", &mut std::io::stdout());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use morpheuz::types::ClockTime;

    fn cli(args: &[&str]) -> MorpheuzCli {
        MorpheuzCli::try_parse_from(std::iter::once("morpheuz").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn smart_alarm_parameters() {
        let cli = cli(&[
            "--smart", "Y", "--fromhr", "6", "--frommin", "0", "--tohr", "6", "--tomin", "30",
            "--goneoff", "0612", "summary",
        ]);
        let alarm = cli.alarm().unwrap();
        assert!(alarm.enabled);
        assert_eq!(alarm.from, ClockTime::new(6, 0).unwrap());
        assert_eq!(alarm.to, ClockTime::new(6, 30).unwrap());
        assert_eq!(alarm.fired_at, ClockTime::new(6, 12));
    }

    #[test]
    fn smart_alarm_needs_window() {
        let cli = cli(&["--smart", "Y", "--fromhr", "6", "summary"]);
        assert!(cli.alarm().is_err());
    }

    #[test]
    fn alarm_off_by_default() {
        let alarm = cli(&["csv"]).alarm().unwrap();
        assert_eq!(alarm, AlarmWindow::disabled());
    }

    #[test]
    fn thresholds_are_validated() {
        assert!(cli(&["--light-above", "2000", "summary"]).config().is_err());
        assert!(cli(&["--sample-interval-mins", "0", "summary"]).config().is_err());
        assert!(cli(&["--sample-interval-mins", "1441", "summary"]).config().is_err());
        assert!(
            cli(&["--sample-interval-mins", "200000000000000", "summary"])
                .config()
                .is_err()
        );
        assert!(cli(&["--sample-interval-mins", "1440", "summary"]).config().is_ok());
        assert_eq!(cli(&["summary"]).config().unwrap(), MorpheuzConfig::default());
    }

    #[test]
    fn base_from_epoch_millis() {
        let base = cli(&["--base", "1393797600000", "summary"]).base().unwrap();
        let expected = DateTime::from_timestamp_millis(1_393_797_600_000)
            .unwrap()
            .with_timezone(&Local)
            .naive_local();
        assert_eq!(base, expected);
    }
}
