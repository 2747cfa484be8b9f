use embedded_hal_1::{delay::DelayNs, i2c::I2c};

use crate::error::{Access, Error};
use crate::lux::raw_to_lux;
use crate::register::{
    set_bits, Config, ConversionMode, ConversionTime, Register, Status, CT_MSK, DEVICE_ID, MANUFACTURER_ID,
    MODE_MSK, RANGE_AUTO, RANGE_MSK,
};

/// I²C address, selected by the ADDR pin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SlaveAddr {
    /// ADDR to GND, 0x44
    Gnd,
    /// ADDR to VDD, 0x45
    Vdd,
    /// ADDR to SDA, 0x46
    Sda,
    /// ADDR to SCL, 0x47
    Scl,
}

impl SlaveAddr {
    /// 7-bit I²C address.
    pub const fn addr(self) -> u8 {
        match self {
            SlaveAddr::Gnd => 0x44,
            SlaveAddr::Vdd => 0x45,
            SlaveAddr::Sda => 0x46,
            SlaveAddr::Scl => 0x47,
        }
    }
}

impl Default for SlaveAddr {
    fn default() -> Self {
        SlaveAddr::Gnd
    }
}

impl TryFrom<u8> for SlaveAddr {
    type Error = u8;

    /// Accepts `0b0100_01xx` only.
    fn try_from(address: u8) -> Result<Self, u8> {
        if address & 0b1111_1100 != 0b0100_0100 {
            return Err(address);
        }
        Ok(match address & 0b11 {
            0 => SlaveAddr::Gnd,
            1 => SlaveAddr::Vdd,
            2 => SlaveAddr::Sda,
            _ => SlaveAddr::Scl,
        })
    }
}

/// OPT3001 Ambient Light Sensor(ALS)
///
/// - Output: lux(lx)
/// - Range: 0.01 to 83865.6
/// - Address(7bit): 0x44 to 0x47
///
/// Pass `&mut i2c` to keep ownership of the bus with the caller.
#[derive(Debug)]
pub struct Opt3001<I2C> {
    i2c: I2C,
    address: SlaveAddr,
}

impl<I2C> Opt3001<I2C>
where
    I2C: I2c,
{
    /// Create a driver for an already validated address. No bus traffic.
    pub fn new(i2c: I2C, address: SlaveAddr) -> Self {
        Opt3001 { i2c, address }
    }

    /// Validate a raw 7-bit address and bind the bus. No bus traffic.
    pub fn setup(i2c: I2C, address: u8) -> Result<Self, Error<I2C::Error>> {
        let address = SlaveAddr::try_from(address).map_err(Error::InvalidAddress)?;
        Ok(Self::new(i2c, address))
    }

    pub fn address(&self) -> SlaveAddr {
        self.address
    }

    pub fn release(self) -> I2C {
        self.i2c
    }

    /// Detect, then apply conversion time and mode.
    pub fn init(&mut self, config: Config) -> Result<(), Error<I2C::Error>> {
        self.detect()?;
        self.config_set(config.conversion_time)?;
        self.set_conversion_mode(config.mode)
    }

    /// Check manufacturer and device IDs.
    pub fn detect(&mut self) -> Result<(), Error<I2C::Error>> {
        self.verify_id(Register::ManufacturerId, MANUFACTURER_ID)?;
        self.verify_id(Register::DeviceId, DEVICE_ID)
    }

    fn verify_id(&mut self, register: Register, expected: u16) -> Result<(), Error<I2C::Error>> {
        let found = self.register_read(register)?;
        if found == expected {
            Ok(())
        } else {
            #[cfg(feature = "defmt")]
            defmt::debug!("opt3001: {} is {:04x}, expected {:04x}", register, found, expected);
            Err(Error::NotFound { register, found })
        }
    }

    /// Enable automatic full-scale range and set the conversion time.
    pub fn config_set(&mut self, ct: ConversionTime) -> Result<(), Error<I2C::Error>> {
        let data = self.register_read(Register::Config)?;
        let data = set_bits!(data, RANGE_MSK, RANGE_AUTO);
        let data = set_bits!(data, CT_MSK, ct.bits());
        self.register_write(Register::Config, data)
    }

    pub fn conversion_time(&mut self) -> Result<ConversionTime, Error<I2C::Error>> {
        Ok(ConversionTime::from_config(self.register_read(Register::Config)?))
    }

    /// Replace the mode field of CONFIG, keeping all other bits.
    pub fn set_conversion_mode(&mut self, mode: ConversionMode) -> Result<(), Error<I2C::Error>> {
        let data = self.register_read(Register::Config)?;
        let data = set_bits!(data, MODE_MSK, mode.bits());
        #[cfg(feature = "defmt")]
        defmt::debug!("opt3001: mode {}", mode);
        self.register_write(Register::Config, data)
    }

    pub fn conversion_mode(&mut self) -> Result<ConversionMode, Error<I2C::Error>> {
        Ok(ConversionMode::from_config(self.register_read(Register::Config)?))
    }

    pub fn conversion_continuous_enable(&mut self) -> Result<(), Error<I2C::Error>> {
        self.set_conversion_mode(ConversionMode::Continuous)
    }

    /// Enter shutdown.
    pub fn conversion_continuous_disable(&mut self) -> Result<(), Error<I2C::Error>> {
        self.set_conversion_mode(ConversionMode::Shutdown)
    }

    /// Start one conversion. The chip returns to shutdown when it is done.
    pub fn conversion_singleshot_trigger(&mut self) -> Result<(), Error<I2C::Error>> {
        self.set_conversion_mode(ConversionMode::SingleShot)
    }

    /// Read overflow and conversion-ready flags. This clears the ready flag on the chip.
    pub fn status(&mut self) -> Result<Status, Error<I2C::Error>> {
        Ok(Status::from_config(self.register_read(Register::Config)?))
    }

    #[inline]
    pub fn raw_result(&mut self) -> Result<u16, Error<I2C::Error>> {
        self.register_read(Register::Result)
    }

    /// Read the latest result in lux.
    pub fn lux_read(&mut self) -> Result<f32, Error<I2C::Error>> {
        Ok(raw_to_lux(self.raw_result()?))
    }

    /// Read the result only if a conversion finished since CONFIG was last accessed.
    pub fn lux_read_if_ready(&mut self) -> nb::Result<f32, Error<I2C::Error>> {
        if !self.status()?.conversion_ready {
            return Err(nb::Error::WouldBlock);
        }
        Ok(self.lux_read()?)
    }

    /// Trigger a single-shot conversion and wait for its result.
    pub fn measure_single_shot<D: DelayNs>(&mut self, delay: &mut D) -> Result<f32, Error<I2C::Error>> {
        let config = self.register_read(Register::Config)?;
        let ct = ConversionTime::from_config(config);
        let config = set_bits!(config, MODE_MSK, ConversionMode::SingleShot.bits());
        self.register_write(Register::Config, config)?;
        delay.delay_ms(ct.millis());
        // allow one more conversion time in 1ms steps for a slow oscillator
        for _ in 0..ct.millis() {
            match self.lux_read_if_ready() {
                Ok(lux) => return Ok(lux),
                Err(nb::Error::WouldBlock) => delay.delay_ms(1),
                Err(nb::Error::Other(e)) => return Err(e),
            }
        }
        Err(Error::ConversionTimeout)
    }

    /// Read a register, MSB first.
    pub fn register_read(&mut self, register: Register) -> Result<u16, Error<I2C::Error>> {
        let mut data = [0u8; 2];
        self.i2c
            .write_read(self.address.addr(), &[register.addr()], &mut data)
            .map_err(|source| Error::I2c {
                register,
                access: Access::Read,
                source,
            })?;
        let value = u16::from_be_bytes(data);
        #[cfg(feature = "defmt")]
        defmt::trace!("opt3001: read {} = {:04x}", register, value);
        Ok(value)
    }

    /// Write a register, MSB first.
    pub fn register_write(&mut self, register: Register, value: u16) -> Result<(), Error<I2C::Error>> {
        #[cfg(feature = "defmt")]
        defmt::trace!("opt3001: write {} = {:04x}", register, value);
        let [msb, lsb] = value.to_be_bytes();
        self.i2c
            .write(self.address.addr(), &[register.addr(), msb, lsb])
            .map_err(|source| Error::I2c {
                register,
                access: Access::Write,
                source,
            })
    }
}
