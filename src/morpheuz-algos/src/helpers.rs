pub mod format_hm;
pub mod time_axis;
