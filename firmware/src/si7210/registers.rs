//! SI7210 register map.
//!
//! Addresses and bit masks are fixed by the silicon; every value here is
//! what goes on the wire.

/// 7-bit I2C base address. The two low bits come from the part number
/// variant (SI7210-x0 .. SI7210-x3).
pub const SI7210_BASE_ADDR_7BIT: u8 = 0x30;

/// I2C registers for Si72xx
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
#[repr(u8)]
pub enum Register {
    /// Hardware revision id
    HRevId = 0xC0,
    /// Signal output, high byte. Bit 7 is the fresh-data marker.
    DspSigM = 0xC1,
    /// Signal output, low byte
    DspSigL = 0xC2,
    /// Selects which signal lands in DSPSIGM/DSPSIGL
    DspSigSel = 0xC3,
    PowerCtrl = 0xC4,
    ArAutoInc = 0xC5,
    Ctrl1 = 0xC6,
    Ctrl2 = 0xC7,
    SlTime = 0xC8,
    Ctrl3 = 0xC9,
    A0 = 0xCA,
    A1 = 0xCB,
    A2 = 0xCC,
    Ctrl4 = 0xCD,
    A3 = 0xCE,
    A4 = 0xCF,
    A5 = 0xD0,
    OtpAddr = 0xE1,
    OtpData = 0xE2,
    OtpCtrl = 0xE3,
    TmFg = 0xE4,
}

impl Register {
    pub const fn addr(self) -> u8 {
        self as u8
    }
}

/// OTP cells holding the factory temperature trim. Both are signed bytes.
pub const OTP_TEMP_OFFSET: u8 = 0x1D;
pub const OTP_TEMP_GAIN: u8 = 0x1E;

pub const ARAUTOINC_MASK: u8 = 0x01;

pub const OTP_CTRL_BUSY_MASK: u8 = 0x01;
pub const OTP_CTRL_READ_EN_MASK: u8 = 0x02;

pub const POWER_CTRL_SLEEP_MASK: u8 = 0x01;
pub const POWER_CTRL_STOP_MASK: u8 = 0x02;
pub const POWER_CTRL_ONEBURST_MASK: u8 = 0x04;
pub const POWER_CTRL_USESTORE_MASK: u8 = 0x08;
pub const POWER_CTRL_MEAS_MASK: u8 = 0x80;

/// DSPSIGSEL values
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
#[repr(u8)]
pub enum Signal {
    Magnetic = 0,
    Temperature = 1,
}

// Free-running setup used for field noise captures:
// CTRL4 selects the on-chip filter, SLTIME 0 removes the sleep between
// samples, CTRL3 sets sltfast.
pub const CONTINUOUS_CTRL4: u8 = 0x04;
pub const CONTINUOUS_SLTIME: u8 = 0x00;
pub const CONTINUOUS_CTRL3: u8 = 0x02;
pub const CONTINUOUS_POWER_CTRL: u8 = 0x00;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_addresses_match_datasheet() {
        assert_eq!(Register::HRevId.addr(), 0xC0);
        assert_eq!(Register::DspSigM.addr(), 0xC1);
        assert_eq!(Register::DspSigSel.addr(), 0xC3);
        assert_eq!(Register::PowerCtrl.addr(), 0xC4);
        assert_eq!(Register::ArAutoInc.addr(), 0xC5);
        assert_eq!(Register::SlTime.addr(), 0xC8);
        assert_eq!(Register::Ctrl3.addr(), 0xC9);
        assert_eq!(Register::Ctrl4.addr(), 0xCD);
        assert_eq!(Register::A5.addr(), 0xD0);
        assert_eq!(Register::OtpAddr.addr(), 0xE1);
        assert_eq!(Register::OtpData.addr(), 0xE2);
        assert_eq!(Register::OtpCtrl.addr(), 0xE3);
        assert_eq!(Register::TmFg.addr(), 0xE4);
    }
}
