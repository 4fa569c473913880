//! Library components behind the `support-analytics` binary.

pub mod logging;
pub mod render;
pub mod sample;
