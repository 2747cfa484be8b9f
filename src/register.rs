//! Register map and CONFIG bit fields.

/// OPT3001 registers. All registers are 16 bits wide, MSB first on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Register {
    /// Conversion result, exponent in bits 15:12, mantissa in bits 11:0.
    Result = 0x00,
    /// Configuration.
    Config = 0x01,
    /// Low limit.
    LimitLow = 0x02,
    /// High limit.
    LimitHigh = 0x03,
    /// Manufacturer ID, reads `0x5449` ("TI").
    ManufacturerId = 0x7E,
    /// Device ID, reads `0x3001`.
    DeviceId = 0x7F,
}

impl Register {
    /// Register address as sent on the bus.
    pub const fn addr(self) -> u8 {
        self as u8
    }
}

pub(crate) const MANUFACTURER_ID: u16 = 0x5449;
pub(crate) const DEVICE_ID: u16 = 0x3001;

// CONFIG fields
pub(crate) const RANGE_MSK: u16 = 0xF000;
pub(crate) const RANGE_AUTO: u16 = 0b1100 << 12;
pub(crate) const CT_MSK: u16 = 1 << 11;
pub(crate) const MODE_MSK: u16 = 0b11 << 9;
pub(crate) const MODE_POS: u16 = 9;
pub(crate) const OVF: u16 = 1 << 8;
pub(crate) const CRF: u16 = 1 << 7;

macro_rules! set_bits {
    ($reg_data:expr, $mask:expr, $data:expr) => {
        ($reg_data & !$mask) | ($data & $mask)
    };
}
pub(crate) use set_bits;

/// Conversion time, CONFIG bit 11.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConversionTime {
    /// 100 ms
    Ms100,
    /// 800 ms, lowest noise
    Ms800,
}

impl ConversionTime {
    pub(crate) const fn bits(self) -> u16 {
        match self {
            ConversionTime::Ms100 => 0,
            ConversionTime::Ms800 => CT_MSK,
        }
    }

    pub(crate) const fn from_config(config: u16) -> Self {
        if config & CT_MSK != 0 {
            ConversionTime::Ms800
        } else {
            ConversionTime::Ms100
        }
    }

    /// Nominal conversion time in milliseconds.
    pub const fn millis(self) -> u32 {
        match self {
            ConversionTime::Ms100 => 100,
            ConversionTime::Ms800 => 800,
        }
    }
}

impl Default for ConversionTime {
    fn default() -> Self {
        ConversionTime::Ms800
    }
}

/// Mode of conversion operation, CONFIG bits 10:9.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConversionMode {
    /// Low-power shutdown, `00`.
    Shutdown,
    /// Single conversion, then back to shutdown, `01`.
    SingleShot,
    /// Continuous conversions, `11`.
    Continuous,
}

impl ConversionMode {
    pub(crate) const fn bits(self) -> u16 {
        let field = match self {
            ConversionMode::Shutdown => 0b00,
            ConversionMode::SingleShot => 0b01,
            ConversionMode::Continuous => 0b11,
        };
        field << MODE_POS
    }

    pub(crate) const fn from_config(config: u16) -> Self {
        // 0b10 is continuous as well
        match (config & MODE_MSK) >> MODE_POS {
            0b00 => ConversionMode::Shutdown,
            0b01 => ConversionMode::SingleShot,
            _ => ConversionMode::Continuous,
        }
    }
}

impl Default for ConversionMode {
    fn default() -> Self {
        ConversionMode::Continuous
    }
}

/// Flags reported in CONFIG.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Status {
    /// The light level exceeded the full-scale range of the current conversion.
    pub overflow: bool,
    /// A conversion finished since CONFIG was last read or written.
    pub conversion_ready: bool,
}

impl Status {
    pub(crate) const fn from_config(config: u16) -> Self {
        Status {
            overflow: config & OVF != 0,
            conversion_ready: config & CRF != 0,
        }
    }
}

/// Settings applied by [`Opt3001::init`](crate::Opt3001::init).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    pub conversion_time: ConversionTime,
    pub mode: ConversionMode,
}
