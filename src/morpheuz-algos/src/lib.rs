#[macro_use]
extern crate log;

pub(crate) mod ignore;
pub use ignore::IgnoreMarker;

pub(crate) mod alarm;
pub use alarm::{AlarmBounds, AlarmWindowLocator};

pub(crate) mod sleep;
pub use sleep::{SleepStats, SleepStatsCalculator};

pub(crate) mod export;
pub use export::{ExportBodies, ExportFormatter};

pub mod helpers;
