use crate::register::Register;

/// Bus phase in which an I²C error occurred.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Access {
    /// Register pointer write followed by the 2-byte read.
    Read,
    /// Register pointer and content write.
    Write,
}

/// OPT3001 errors
#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Address is not one of 0x44..=0x47
    InvalidAddress(u8),
    /// I²C bus error
    I2c {
        register: Register,
        access: Access,
        source: E,
    },
    /// Identification register doesn't match expected value
    NotFound { register: Register, found: u16 },
    /// Single-shot conversion did not complete in time
    ConversionTimeout,
}

/// Coarse classification of [`Error`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ErrorKind {
    InvalidArgument,
    Io,
    NotFound,
}

impl<E> Error<E> {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidAddress(_) => ErrorKind::InvalidArgument,
            Error::I2c { .. } | Error::ConversionTimeout => ErrorKind::Io,
            Error::NotFound { .. } => ErrorKind::NotFound,
        }
    }
}

impl<E: core::fmt::Debug> core::fmt::Display for Error<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::InvalidAddress(addr) => write!(f, "invalid OPT3001 address {:#04x}", addr),
            Error::I2c {
                register,
                access,
                source,
            } => write!(f, "I2C {:?} of {:?} failed: {:?}", access, register, source),
            Error::NotFound { register, found } => {
                write!(f, "unexpected {:?} {:#06x}", register, found)
            }
            Error::ConversionTimeout => f.write_str("conversion did not complete"),
        }
    }
}
