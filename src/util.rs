mod interval;

pub use interval::{assert_interval, assert_probability};
