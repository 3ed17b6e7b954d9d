//! Simulated SI7210 on a recording bus, for tests.

use std::vec::Vec;

use super::bus::Bus;
use super::registers::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Nack;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transaction {
    Write {
        address: u8,
        data: Vec<u8>,
        repeated_start: bool,
    },
    Read {
        address: u8,
        len: usize,
    },
}

/// Register-level model of the sensor.
///
/// Writes set the register pointer and store values with auto-increment,
/// reads return registers from the pointer on. DSPSIGM/DSPSIGL follow
/// DSPSIGSEL, and writing READ_EN to OTP_CTRL latches the addressed OTP
/// cell into OTP_DATA. Every transaction is logged, whatever the address.
#[derive(Debug)]
pub struct MockBus {
    transactions: Vec<Transaction>,
    registers: [u8; 256],
    otp: [u8; 256],
    pointer: u8,
    pub field: [u8; 2],
    pub temperature: [u8; 2],
    fail_at: Option<usize>,
    busy_polls: usize,
}

impl MockBus {
    pub fn new() -> Self {
        Self {
            transactions: Vec::new(),
            registers: [0; 256],
            otp: [0; 256],
            pointer: 0,
            field: [0xC0, 0x00],
            temperature: [0x84, 0x00],
            fail_at: None,
            busy_polls: 0,
        }
    }

    pub fn with_otp(mut self, offset: i8, gain: i8) -> Self {
        self.otp[OTP_TEMP_OFFSET as usize] = offset as u8;
        self.otp[OTP_TEMP_GAIN as usize] = gain as u8;
        self
    }

    /// Fail the transaction with this index (0-based, counted over the
    /// whole log).
    pub fn fail_at(&mut self, index: usize) {
        self.fail_at = Some(index);
    }

    pub fn clear_failure(&mut self) {
        self.fail_at = None;
    }

    /// Report the OTP controller busy on the next `polls` status reads.
    pub fn otp_busy_for(&mut self, polls: usize) {
        self.busy_polls = polls;
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn clear_transactions(&mut self) {
        self.transactions.clear();
    }

    pub fn register(&self, reg: Register) -> u8 {
        self.registers[reg.addr() as usize]
    }

    pub fn set_register(&mut self, reg: Register, value: u8) {
        self.registers[reg.addr() as usize] = value;
    }

    fn check_failure(&self) -> Result<(), Nack> {
        if self.fail_at == Some(self.transactions.len() - 1) {
            Err(Nack)
        } else {
            Ok(())
        }
    }

    fn store(&mut self, reg: u8, value: u8) {
        self.registers[reg as usize] = value;
        if reg == Register::OtpCtrl.addr() && value & OTP_CTRL_READ_EN_MASK != 0 {
            let cell = self.registers[Register::OtpAddr.addr() as usize];
            self.registers[Register::OtpData.addr() as usize] = self.otp[cell as usize];
        }
    }

    fn load(&mut self, reg: u8) -> u8 {
        let sample = if self.registers[Register::DspSigSel.addr() as usize]
            == Signal::Temperature as u8
        {
            self.temperature
        } else {
            self.field
        };

        match reg {
            r if r == Register::DspSigM.addr() => sample[0],
            r if r == Register::DspSigL.addr() => sample[1],
            r if r == Register::OtpCtrl.addr() => {
                let value = self.registers[r as usize] & !OTP_CTRL_BUSY_MASK;
                if self.busy_polls > 0 {
                    self.busy_polls -= 1;
                    value | OTP_CTRL_BUSY_MASK
                } else {
                    value
                }
            }
            r => self.registers[r as usize],
        }
    }
}

impl Bus for MockBus {
    type Error = Nack;

    fn write(&mut self, address: u8, bytes: &[u8], repeated_start: bool) -> Result<(), Nack> {
        self.transactions.push(Transaction::Write {
            address,
            data: bytes.to_vec(),
            repeated_start,
        });
        self.check_failure()?;

        if let Some((&reg, values)) = bytes.split_first() {
            self.pointer = reg;
            for &value in values {
                self.store(self.pointer, value);
                self.pointer = self.pointer.wrapping_add(1);
            }
        }
        Ok(())
    }

    fn read(&mut self, address: u8, buffer: &mut [u8]) -> Result<(), Nack> {
        self.transactions.push(Transaction::Read {
            address,
            len: buffer.len(),
        });
        self.check_failure()?;

        for byte in buffer.iter_mut() {
            *byte = self.load(self.pointer);
            self.pointer = self.pointer.wrapping_add(1);
        }
        Ok(())
    }
}
