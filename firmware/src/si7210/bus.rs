//! Two-wire bus capability used by the driver.

use core::cell::RefCell;
use core::fmt::Debug;

use embedded_hal::blocking::i2c::{Read, Write, WriteRead};
use heapless::Vec;

/// Blocking register bus.
///
/// Addresses are 8-bit: the 7-bit device address shifted left by one, the
/// R/W bit left clear.
pub trait Bus {
    type Error: Debug;

    /// Write `bytes` to the device. With `repeated_start` the transfer is
    /// left open so the next [`Bus::read`] follows without a stop
    /// condition.
    fn write(&mut self, address: u8, bytes: &[u8], repeated_start: bool)
        -> Result<(), Self::Error>;

    /// Read `buffer.len()` bytes from the device.
    fn read(&mut self, address: u8, buffer: &mut [u8]) -> Result<(), Self::Error>;
}

impl<T: Bus + ?Sized> Bus for &mut T {
    type Error = T::Error;

    fn write(
        &mut self,
        address: u8,
        bytes: &[u8],
        repeated_start: bool,
    ) -> Result<(), Self::Error> {
        (**self).write(address, bytes, repeated_start)
    }

    fn read(&mut self, address: u8, buffer: &mut [u8]) -> Result<(), Self::Error> {
        (**self).read(address, buffer)
    }
}

/// Lets several drivers share one bus. Each transaction borrows the bus
/// for its own duration only, so callers must not hold a borrow of the
/// `RefCell` across driver calls or the `borrow_mut` here panics.
impl<T: Bus> Bus for &RefCell<T> {
    type Error = T::Error;

    fn write(
        &mut self,
        address: u8,
        bytes: &[u8],
        repeated_start: bool,
    ) -> Result<(), Self::Error> {
        self.borrow_mut().write(address, bytes, repeated_start)
    }

    fn read(&mut self, address: u8, buffer: &mut [u8]) -> Result<(), Self::Error> {
        self.borrow_mut().read(address, buffer)
    }
}

/// Longest write that can be held back for a repeated start.
const MAX_POINTER_LEN: usize = 4;

/// Adapter for `embedded-hal` 0.2 blocking I2C peripherals.
///
/// A write flagged `repeated_start` is held back and sent together with the
/// following read as one `write_read`, so no stop goes out between the
/// register pointer and the data.
pub struct HalBus<I> {
    i2c: I,
    pending: Option<(u8, Vec<u8, MAX_POINTER_LEN>)>,
}

impl<I> HalBus<I> {
    pub fn new(i2c: I) -> Self {
        Self { i2c, pending: None }
    }

    pub fn release(self) -> I {
        self.i2c
    }
}

impl<I, E> HalBus<I>
where
    I: Write<Error = E>,
{
    /// Send a held-back write on its own.
    fn flush(&mut self) -> Result<(), E> {
        match self.pending.take() {
            Some((address, bytes)) => self.i2c.write(address >> 1, &bytes),
            None => Ok(()),
        }
    }
}

impl<I, E> Bus for HalBus<I>
where
    I: Write<Error = E> + Read<Error = E> + WriteRead<Error = E>,
    E: Debug,
{
    type Error = E;

    fn write(
        &mut self,
        address: u8,
        bytes: &[u8],
        repeated_start: bool,
    ) -> Result<(), Self::Error> {
        self.flush()?;
        if repeated_start {
            if let Ok(held) = Vec::from_slice(bytes) {
                self.pending = Some((address, held));
                return Ok(());
            }
        }
        self.i2c.write(address >> 1, bytes)
    }

    fn read(&mut self, address: u8, buffer: &mut [u8]) -> Result<(), Self::Error> {
        match self.pending.take() {
            Some((pending_address, bytes)) if pending_address == address => {
                self.i2c.write_read(address >> 1, &bytes, buffer)
            }
            other => {
                self.pending = other;
                self.flush()?;
                self.i2c.read(address >> 1, buffer)
            }
        }
    }
}
