//! DHT11 Sensor Driver for Embedded Rust
//!
//! This crate provides a platform-agnostic, bit-banging driver for the DHT11
//! temperature and humidity sensor, built on top of the [`embedded-hal`] traits.
//!
//! The sensor talks over a single open-drain line. The host pulls it low to
//! request a reading, then the sensor answers with 40 bits encoded as pulse
//! widths: a short high pulse is a `0`, a long one is a `1`. The driver
//! measures those pulses by polling, so it needs the CPU to itself for the
//! ~25ms a read takes.
//!
//! # Features
//! - Blocking synchronous API using `embedded-hal` traits
//! - Designed for `no_std` environments, no allocation
//! - Raw frame access for diagnostics ([`Dht11::read_with_bits`])
//! - Optional logging support via `defmt`
//!
//! # Dependencies
//! This driver depends on the following `embedded-hal` traits:
//! - [`InputPin`] and [`OutputPin`] for GPIO access
//! - [`DelayNs`] for accurate timing
//!
//! # Optional Features
//! - `defmt`: Implements `defmt::Format` and logs failed reads
//!
//! [`embedded-hal`]: https://docs.rs/embedded-hal
//! [`InputPin`]: embedded_hal::digital::InputPin
//! [`OutputPin`]: embedded_hal::digital::OutputPin
//! [`DelayNs`]: embedded_hal::delay::DelayNs

#![cfg_attr(not(test), no_std)]

pub mod dht11;
pub mod error;
pub mod frame;

pub use dht11::Dht11;
pub use error::{ChecksumError, DhtError};
pub use frame::{Bits, FRAME_BITS, Frame, Reading, parse};
