//! CLI library components for the festreg reporting toolkit.

pub mod logging;
pub mod pipeline;
