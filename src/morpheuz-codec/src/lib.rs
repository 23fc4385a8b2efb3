#[macro_use]
extern crate log;

mod error;
pub use error::CodecError;

mod series;
pub use series::{Series, SeriesParser, DELIMITER};

mod params;
pub use params::{clock_from_parts, parse_clock, parse_flag, parse_goneoff, NOT_FIRED};
