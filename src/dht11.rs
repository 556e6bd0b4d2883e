use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin, PinState},
};

use crate::error::DhtError;
use crate::frame::{Bits, FRAME_BITS, Frame, Reading};

/// How long the host holds the line low to wake the sensor.
pub const START_LOW_MS: u32 = 20;

/// Pause after releasing the line, before listening for the sensor.
pub const START_RELEASE_US: u32 = 30;

/// Length of each half of the sensor's acknowledgment (low, then high).
pub const ACK_US: u32 = 80;

/// Length of the low pulse before every data bit and at end of frame.
pub const BIT_START_US: u32 = 50;

/// Polling granularity.
pub const POLL_US: u32 = 10;

/// Polls spent measuring one high pulse before giving up.
///
/// A "1" is ~70us high, a "0" is 26-28us.
pub const MAX_HIGH_POLLS: u8 = 8;

/// A high pulse seen on more than this many polls is a "1".
///
/// Tuned against real sensors; changing it breaks compatibility.
pub const ONE_THRESHOLD_TICKS: u8 = 3;

/// Driver for the DHT11 temperature and humidity sensor.
///
/// The pin must be configured as open drain with a pull-up: `set_low` drives
/// the line and `set_high` releases it to the sensor.
pub struct Dht11<PIN, D> {
    pin: PIN,
    delay: D,
}

impl<PIN, DELAY, E> Dht11<PIN, DELAY>
where
    PIN: InputPin<Error = E> + OutputPin<Error = E>,
    DELAY: DelayNs,
{
    /// Creates a new instance of the DHT11 driver.
    ///
    /// # Arguments
    ///
    /// * `pin` - The GPIO pin connected to the DHT11 data line. Must support both input and output.
    /// * `delay` - A delay provider implementing the `DelayNs` trait.
    pub fn new(pin: PIN, delay: DELAY) -> Self {
        Dht11 { pin, delay }
    }

    /// Gives back the pin and delay provider.
    pub fn release(self) -> (PIN, DELAY) {
        (self.pin, self.delay)
    }

    /// Reads a temperature and humidity measurement from the DHT11 sensor.
    ///
    /// Blocks for a little over 20ms. The bit timing has no slack for
    /// preemption, so run this with interrupts disabled.
    pub fn read(&mut self) -> Result<Reading, DhtError<E>> {
        self.read_with_bits().map(|(reading, _)| reading)
    }

    /// Like [`read`](Self::read), but also returns the raw frame.
    ///
    /// The bits are only returned when the whole read succeeds.
    pub fn read_with_bits(&mut self) -> Result<(Reading, Bits), DhtError<E>> {
        let bits = match self.sample() {
            Ok(bits) => bits,
            Err(err) => {
                #[cfg(feature = "defmt")]
                defmt::debug!("dht11: sample failed, code {}", err.code());
                return Err(err);
            }
        };

        let frame = Frame::from_bits(&bits);
        #[cfg(feature = "defmt")]
        defmt::trace!("dht11: received {}", frame);

        let reading = frame.validate().map_err(|err| {
            #[cfg(feature = "defmt")]
            defmt::debug!("dht11: {}", err);
            DhtError::ChecksumMismatch(err)
        })?;

        Ok((reading, bits))
    }

    /// Runs the handshake and receives one 40-bit frame.
    ///
    /// Bits are not interpreted here; see [`crate::frame::parse`].
    pub fn sample(&mut self) -> Result<Bits, DhtError<E>> {
        self.start()?;

        let mut bits = [false; FRAME_BITS];
        for bit in bits.iter_mut() {
            self.confirm(PinState::Low, BIT_START_US, DhtError::DataLow)?;
            *bit = self.read_bit()?;
        }

        self.confirm(PinState::Low, BIT_START_US, DhtError::DataEof)?;
        Ok(bits)
    }

    /// Sends the start signal and waits out the sensor's acknowledgment.
    fn start(&mut self) -> Result<(), DhtError<E>> {
        self.pin.set_low()?;
        self.delay.delay_ms(START_LOW_MS);
        self.pin.set_high()?;
        self.delay.delay_us(START_RELEASE_US);

        self.confirm(PinState::Low, ACK_US, DhtError::StartLow)?;
        self.confirm(PinState::High, ACK_US, DhtError::StartHigh)?;
        Ok(())
    }

    /// Measures the high half of a data bit.
    ///
    /// Must stay a tight poll: anything slower than a few microseconds per
    /// iteration misreads a "0".
    #[inline(always)]
    fn read_bit(&mut self) -> Result<bool, DhtError<E>> {
        for tick in 0..MAX_HIGH_POLLS {
            if self.pin.is_low()? {
                return Ok(tick > ONE_THRESHOLD_TICKS);
            }
            self.delay.delay_us(POLL_US);
        }
        Err(DhtError::DataRead)
    }

    /// Waits for the line to leave `level`, which should last about `us`.
    ///
    /// Polls `us / POLL_US + 1` times. Returns `timeout` if the line is still
    /// at `level` on every poll.
    fn confirm(
        &mut self,
        level: PinState,
        us: u32,
        timeout: DhtError<E>,
    ) -> Result<(), DhtError<E>> {
        let polls = us / POLL_US + 1;
        for _ in 0..polls {
            if PinState::from(self.pin.is_high()?) != level {
                return Ok(());
            }
            self.delay.delay_us(POLL_US);
        }
        Err(timeout)
    }
}
