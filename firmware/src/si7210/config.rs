/// Driver options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub struct Config {
    /// Extra OTP status polls allowed while the OTP controller reports
    /// busy. 0 means one attempt: busy fails the calibration fetch.
    pub otp_busy_retries: u8,
}

impl Config {
    pub fn with_otp_busy_retries(mut self, retries: u8) -> Self {
        self.otp_busy_retries = retries;
        self
    }
}
