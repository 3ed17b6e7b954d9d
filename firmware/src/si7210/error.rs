use core::fmt;

/// Things that can go wrong talking to the SI7210.
///
/// `E` is the error type of the underlying [`Bus`](super::Bus).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub enum Error<E> {
    /// The bus transaction failed (NACK, arbitration loss, timeout, ...)
    Bus(E),
    /// The OTP controller was still busy on every allowed status poll
    OtpBusy,
    /// All transfers succeeded but a sample lacked the fresh-data bit
    StaleSample,
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Bus(e) => write!(f, "I2C error: {:?}", e),
            Error::OtpBusy => write!(f, "OTP controller busy"),
            Error::StaleSample => write!(f, "sample not marked fresh"),
        }
    }
}
