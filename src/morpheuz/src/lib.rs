#[macro_use]
extern crate log;

mod report;
pub use report::{HealthLink, NightInput, NightReport, SleepSummary};

pub mod algo {
    pub use morpheuz_algos::*;
}

pub mod types {
    pub use morpheuz_types::*;
}
