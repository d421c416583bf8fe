//! Library side of the `eqs` binary: settings and logging setup.

pub mod config;
pub mod logging;
