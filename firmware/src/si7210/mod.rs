pub mod bus;
pub mod calibration;
pub mod config;
pub mod error;
pub(crate) mod raw_sample;
pub mod registers;
pub mod si7210;

#[cfg(test)]
pub(crate) mod mock;

// Re-export the public API things
// This avoids having to do firmware::si7210::si7210::Si7210, etc
pub use bus::{Bus, HalBus};
pub use calibration::Calibration;
pub use config::Config;
pub use error::Error;
pub use raw_sample::RawSample;
pub use si7210::{resolve_address, Measurement, Si7210};
