/// Bit 15 of the DSPSIGM/DSPSIGL pair; set once a conversion has landed.
const FRESH_MASK: u16 = 0x8000;

/// Raw contents of the DSPSIGM/DSPSIGL register pair, as read off the wire.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RawSample(pub [u8; 2]);

impl RawSample {
    /// The register pair as one word. DSPSIGM is sent first, so the wire
    /// order is big-endian.
    pub fn value(&self) -> u16 {
        u16::from_be_bytes(self.0)
    }

    pub fn is_fresh(&self) -> bool {
        self.value() & FRESH_MASK != 0
    }

    /// The 15 data bits with the fresh-data marker stripped.
    pub fn code(&self) -> u16 {
        self.value() & !FRESH_MASK
    }

    /// Convert a magnetic sample to flux density.
    ///
    /// 0xC000 (0x4000 with the marker stripped) is zero field; each LSB is
    /// 0.00125.
    pub fn flux_density(&self) -> f32 {
        (i32::from(self.value()) - 0xC000) as f32 * 0.00125
    }

    /// Temperature code fed to the compensation polynomial.
    pub fn temperature_code(&self) -> u16 {
        self.code() >> 3
    }
}

#[cfg(target_os = "none")]
impl defmt::Format for RawSample {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{:#x}", self.0);
    }
}
