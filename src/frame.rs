//! Decoding of the 40-bit frame sent by the sensor.
//!
//! The frame is five bytes, most significant bit first: humidity integer,
//! humidity fraction, temperature integer, temperature fraction and a
//! checksum that equals the truncated sum of the other four.

use crate::error::ChecksumError;

/// Number of bits in one frame.
pub const FRAME_BITS: usize = 40;

/// Raw demodulated frame, in transmission order.
pub type Bits = [bool; FRAME_BITS];

/// Reading returned by the DHT11 sensor.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reading {
    /// Temperature in degrees Celsius.
    pub temperature: u8,
    /// Relative humidity in percent.
    pub humidity: u8,
}

/// A frame split into its five bytes.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame {
    bytes: [u8; 5],
}

impl Frame {
    /// Packs 40 bits into five bytes.
    pub fn from_bits(bits: &Bits) -> Self {
        let mut bytes = [0u8; 5];
        for (byte, chunk) in bytes.iter_mut().zip(bits.chunks_exact(8)) {
            *byte = bits_to_byte(chunk);
        }
        Frame { bytes }
    }

    pub fn humidity(&self) -> u8 {
        self.bytes[0]
    }

    pub fn humidity_fraction(&self) -> u8 {
        self.bytes[1]
    }

    pub fn temperature(&self) -> u8 {
        self.bytes[2]
    }

    pub fn temperature_fraction(&self) -> u8 {
        self.bytes[3]
    }

    /// Checksum byte as sent by the sensor.
    pub fn checksum(&self) -> u8 {
        self.bytes[4]
    }

    /// Checksum computed from the four data bytes.
    pub fn expected_checksum(&self) -> u8 {
        self.bytes[..4]
            .iter()
            .fold(0u8, |sum, v| sum.wrapping_add(*v))
    }

    /// Checks the checksum and extracts the integer parts.
    ///
    /// The DHT11 always reports zero in the fraction bytes, so they only take
    /// part in the checksum.
    pub fn validate(&self) -> Result<Reading, ChecksumError> {
        let expected = self.expected_checksum();
        let actual = self.checksum();
        if expected != actual {
            return Err(ChecksumError { expected, actual });
        }
        Ok(Reading {
            temperature: self.temperature(),
            humidity: self.humidity(),
        })
    }

    /// The five raw bytes.
    pub fn as_bytes(&self) -> &[u8; 5] {
        &self.bytes
    }
}

/// Parses a raw frame into a checksum-validated reading.
pub fn parse(bits: &Bits) -> Result<Reading, ChecksumError> {
    Frame::from_bits(bits).validate()
}

/// Packs up to 8 bits into a byte, MSB first.
fn bits_to_byte(bits: &[bool]) -> u8 {
    bits.iter().fold(0u8, |byte, &bit| (byte << 1) | bit as u8)
}

#[cfg(test)]
pub(crate) fn encode(bytes: [u8; 5]) -> Bits {
    let mut bits = [false; FRAME_BITS];
    for (i, bit) in bits.iter_mut().enumerate() {
        *bit = (bytes[i / 8] >> (7 - i % 8)) & 1 == 1;
    }
    bits
}
