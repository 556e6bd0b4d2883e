use core::fmt;

/// The checksum byte of a frame did not match the sum of its data bytes.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChecksumError {
    /// Truncated sum of the four data bytes.
    pub expected: u8,
    /// Checksum byte sent by the sensor.
    pub actual: u8,
}

/// Possible errors from the DHT11 driver.
///
/// Every variant ends the current read. The driver never retries.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, PartialEq, Eq)]
pub enum DhtError<E> {
    /// The sensor did not pull the line low after the start signal.
    StartLow,
    /// The sensor did not release the line after its low acknowledgment.
    StartHigh,
    /// Timed out waiting for the low pulse that starts a data bit.
    DataLow,
    /// The high pulse of a data bit lasted longer than any valid bit.
    DataRead,
    /// Timed out waiting for the low pulse that ends the frame.
    DataEof,
    /// A full frame was received but failed its integrity check.
    ChecksumMismatch(ChecksumError),
    /// Error from the GPIO pin (input/output).
    PinError(E),
}

impl<E> DhtError<E> {
    /// Numeric code for this error, as reported by the classic Arduino
    /// SimpleDHT library (100..=105). Pin errors have no code.
    pub fn code(&self) -> Option<u8> {
        match self {
            DhtError::StartLow => Some(100),
            DhtError::StartHigh => Some(101),
            DhtError::DataLow => Some(102),
            DhtError::DataRead => Some(103),
            DhtError::DataEof => Some(104),
            DhtError::ChecksumMismatch(_) => Some(105),
            DhtError::PinError(_) => None,
        }
    }

    /// Returns `true` if the sensor stopped answering within a timing budget.
    pub fn is_timeout(&self) -> bool {
        matches!(
            self,
            DhtError::StartLow
                | DhtError::StartHigh
                | DhtError::DataLow
                | DhtError::DataRead
                | DhtError::DataEof
        )
    }
}

impl<E> From<E> for DhtError<E> {
    fn from(value: E) -> Self {
        Self::PinError(value)
    }
}

impl fmt::Display for ChecksumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "checksum mismatch (expected {:#04x}, received {:#04x})",
            self.expected, self.actual
        )
    }
}

impl<E: fmt::Debug> fmt::Display for DhtError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DhtError::StartLow => f.write_str("sensor did not acknowledge the start signal (low)"),
            DhtError::StartHigh => {
                f.write_str("sensor did not acknowledge the start signal (high)")
            }
            DhtError::DataLow => f.write_str("timed out waiting for a data bit to start"),
            DhtError::DataRead => f.write_str("data bit high pulse too long"),
            DhtError::DataEof => f.write_str("timed out waiting for the end of the frame"),
            DhtError::ChecksumMismatch(err) => err.fmt(f),
            DhtError::PinError(err) => write!(f, "HAL pin error: {:?}", err),
        }
    }
}

impl core::error::Error for ChecksumError {}

impl<E: fmt::Debug> core::error::Error for DhtError<E> {}
