//! Driver and helpers for the Silicon Labs SI7210 hall-effect magnetic
//! field and temperature sensor.
#![cfg_attr(not(test), no_std)]

// Must come first so the macros are visible in the modules below.
#[macro_use]
mod fmt;

pub mod si7210;
pub mod stats;
