use super::bus::Bus;
use super::calibration::Calibration;
use super::config::Config;
use super::error::Error;
use super::raw_sample::RawSample;
use super::registers::*;

/// One magnetic field + temperature reading.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub struct Measurement {
    /// Magnetic flux density (T)
    pub flux_density: f32,
    /// Degrees Celsius
    pub temperature: f32,
}

impl Measurement {
    pub fn fahrenheit(&self) -> f32 {
        self.temperature * 1.8 + 32.0
    }
}

/// SI7210 hall sensor on a two-wire bus.
///
/// `B` is usually a borrow of the real bus (`&mut HalBus<_>`, or
/// `&RefCell<_>` when several sensors share it), so the driver cannot
/// outlive it.
pub struct Si7210<B> {
    bus: B,
    address: u8,
    calibration: Option<Calibration>,
    enabled: bool,
    config: Config,
}

impl<B: Bus> Si7210<B> {
    /// `selector` is the two-bit part variant; anything above bit 1 is
    /// ignored.
    pub fn new(bus: B, selector: u8) -> Self {
        Self::with_config(bus, selector, Config::default())
    }

    pub fn with_config(bus: B, selector: u8, config: Config) -> Self {
        Self {
            bus,
            address: resolve_address(selector),
            calibration: None,
            enabled: false,
            config,
        }
    }

    /// 8-bit (shifted) bus address
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Last power state this driver commanded. Not read back from the part.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn calibration(&self) -> Option<Calibration> {
        self.calibration
    }

    pub fn config(&self) -> Config {
        self.config
    }

    pub fn release(self) -> B {
        self.bus
    }

    /// Wake the sensor. An empty write is enough to bring it out of sleep.
    pub fn enable(&mut self) -> Result<(), Error<B::Error>> {
        self.bus
            .write(self.address, &[], false)
            .map_err(Error::Bus)?;
        self.enabled = true;
        Ok(())
    }

    /// Put the sensor to sleep.
    pub fn disable(&mut self) -> Result<(), Error<B::Error>> {
        self.write_reg(Register::PowerCtrl, POWER_CTRL_SLEEP_MASK)?;
        self.enabled = false;
        Ok(())
    }

    /// Take one magnetic and one temperature sample and convert them.
    ///
    /// The factory temperature trim is fetched from OTP on the first
    /// successful pass and kept for the lifetime of the driver. If that
    /// fetch fails the whole read fails and the next call tries again.
    pub fn read(&mut self) -> Result<Measurement, Error<B::Error>> {
        self.write_reg(Register::ArAutoInc, ARAUTOINC_MASK)?;
        let field = self.measure(Signal::Magnetic)?;
        let temp = self.measure(Signal::Temperature)?;
        trace!("raw field {:?} temp {:?}", field, temp);

        let calibration = match self.calibration {
            Some(calibration) => calibration,
            None => {
                let calibration = self.read_calibration()?;
                self.calibration = Some(calibration);
                calibration
            }
        };

        if !field.is_fresh() || !temp.is_fresh() {
            debug!("stale sample: field {:?} temp {:?}", field, temp);
            return Err(Error::StaleSample);
        }

        Ok(Measurement {
            flux_density: field.flux_density(),
            temperature: calibration.temperature(temp.temperature_code()),
        })
    }

    /// Hardware revision id (HREVID)
    pub fn revision(&mut self) -> Result<u8, Error<B::Error>> {
        let mut data = [0u8; 1];
        self.read_regs(Register::HRevId, &mut data)?;
        Ok(data[0])
    }

    /// Switch to free-running magnetic conversions with no sleep between
    /// samples. Poll with [`Si7210::read_field`].
    pub fn start_continuous(&mut self) -> Result<(), Error<B::Error>> {
        self.write_reg(Register::ArAutoInc, ARAUTOINC_MASK)?;
        self.write_reg(Register::DspSigSel, Signal::Magnetic as u8)?;
        self.write_reg(Register::Ctrl4, CONTINUOUS_CTRL4)?;
        self.write_reg(Register::SlTime, CONTINUOUS_SLTIME)?;
        self.write_reg(Register::Ctrl3, CONTINUOUS_CTRL3)?;
        self.write_reg(Register::PowerCtrl, CONTINUOUS_POWER_CTRL)?;
        self.enabled = true;
        Ok(())
    }

    /// Latest sample from the signal output registers, without triggering a
    /// conversion. The fresh-data bit is left for the caller to judge.
    pub fn read_field(&mut self) -> Result<RawSample, Error<B::Error>> {
        let mut raw = RawSample::default();
        self.read_regs(Register::DspSigM, &mut raw.0)?;
        Ok(raw)
    }

    fn measure(&mut self, signal: Signal) -> Result<RawSample, Error<B::Error>> {
        self.write_reg(Register::DspSigSel, signal as u8)?;
        self.write_reg(Register::PowerCtrl, POWER_CTRL_ONEBURST_MASK)?;
        self.read_field()
    }

    fn read_calibration(&mut self) -> Result<Calibration, Error<B::Error>> {
        let offset = self.read_otp(OTP_TEMP_OFFSET)? as i8;
        let gain = self.read_otp(OTP_TEMP_GAIN)? as i8;
        let calibration = Calibration::from_otp(offset, gain);
        debug!(
            "OTP temperature offset {} gain {}",
            calibration.offset, calibration.gain
        );
        Ok(calibration)
    }

    fn read_otp(&mut self, otp_addr: u8) -> Result<u8, Error<B::Error>> {
        let mut ctrl = [0u8; 1];
        let mut polls = 0;
        loop {
            self.read_regs(Register::OtpCtrl, &mut ctrl)?;
            if ctrl[0] & OTP_CTRL_BUSY_MASK == 0 {
                break;
            }
            if polls == self.config.otp_busy_retries {
                return Err(Error::OtpBusy);
            }
            polls += 1;
        }

        self.write_reg(Register::OtpAddr, otp_addr)?;
        self.write_reg(Register::OtpCtrl, OTP_CTRL_READ_EN_MASK)?;
        let mut data = [0u8; 1];
        self.read_regs(Register::OtpData, &mut data)?;
        Ok(data[0])
    }

    fn write_reg(&mut self, reg: Register, value: u8) -> Result<(), Error<B::Error>> {
        self.bus
            .write(self.address, &[reg.addr(), value], false)
            .map_err(Error::Bus)
    }

    /// Set the register pointer, then read `data.len()` registers from it.
    /// The sensor auto-increments across the burst.
    fn read_regs(&mut self, start: Register, data: &mut [u8]) -> Result<(), Error<B::Error>> {
        self.bus
            .write(self.address, &[start.addr()], true)
            .map_err(Error::Bus)?;
        self.bus.read(self.address, data).map_err(Error::Bus)
    }
}

/// 8-bit bus address for a two-bit part variant selector.
pub const fn resolve_address(selector: u8) -> u8 {
    ((selector & 0x3) + SI7210_BASE_ADDR_7BIT) << 1
}
