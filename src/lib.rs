//! Platform-agnostic driver for the TI OPT3001 ambient light sensor, based on
//! the `embedded-hal` I²C traits.
//!
//! ```rust,no_run
//! # use embedded_hal_1::i2c::I2c;
//! # fn example<I2C: I2c>(mut i2c: I2C) -> Result<(), opt3001::Error<I2C::Error>> {
//! use opt3001::{ConversionTime, Opt3001};
//!
//! let mut als = Opt3001::setup(&mut i2c, 0x44)?;
//! als.detect()?;
//! als.config_set(ConversionTime::Ms100)?;
//! als.conversion_continuous_enable()?;
//! let lux = als.lux_read()?;
//! # let _ = lux;
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(test), no_std)]

mod driver;
mod error;
mod lux;
mod register;

pub use driver::{Opt3001, SlaveAddr};
pub use error::{Access, Error, ErrorKind};
pub use lux::raw_to_lux;
pub use register::{Config, ConversionMode, ConversionTime, Register, Status};
