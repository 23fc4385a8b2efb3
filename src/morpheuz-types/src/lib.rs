#[macro_use]
extern crate serde;

mod config;
pub use config::MorpheuzConfig;

mod reading;
pub use reading::{Band, Reading};

mod sample;
pub use sample::Sample;

mod clock;
pub use clock::{AlarmWindow, ClockTime};

mod marker;
pub use marker::{Marker, MarkerKind, MarkerStyle};
