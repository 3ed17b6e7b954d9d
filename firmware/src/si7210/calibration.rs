/// Factory temperature trim read from OTP.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub struct Calibration {
    /// Added after the gain, in degrees Celsius
    pub offset: f32,
    pub gain: f32,
}

impl Calibration {
    /// Calibration that leaves the polynomial untouched.
    pub const IDENTITY: Calibration = Calibration {
        offset: 0.0,
        gain: 1.0,
    };

    /// Build from the signed OTP cells `temp_offset` (0x1D) and
    /// `temp_gain` (0x1E).
    pub fn from_otp(offset: i8, gain: i8) -> Self {
        Self {
            offset: f32::from(offset) / 16.0,
            gain: 1.0 + f32::from(gain) / 2048.0,
        }
    }

    /// Degrees Celsius for a temperature code (see
    /// [`RawSample::temperature_code`](super::RawSample::temperature_code)).
    pub fn temperature(&self, code: u16) -> f32 {
        let t = f32::from(code);
        // Datasheet polynomial, with the supply correction for 3.0 V folded in.
        let celsius = -3.83e-6 * t * t + 0.16094 * t - 279.80 - 0.222 * 3.0;
        self.gain * celsius + self.offset
    }
}
