use std::io;

use thiserror::Error;

/// Errors returned by the BMP280 driver.
///
/// Every failure on the bus surfaces as an I/O error. Nothing is retried.
#[derive(Debug, Error)]
pub enum Error {
    /// Writing the register address or reading the register block failed,
    /// including short reads.
    #[error("i/o error on register {register:#04x}: {source}")]
    Io {
        register: u8,
        #[source]
        source: io::Error,
    },

    /// The Linux I2C bus could not be opened or addressed.
    #[error("i2c bus error: {0}")]
    I2c(#[from] rppal::i2c::Error),

    /// A measurement was requested before `start` succeeded.
    #[error("driver has not been started")]
    NotStarted,
}

impl Error {
    pub(crate) fn io(register: u8, source: io::Error) -> Self {
        Error::Io { register, source }
    }

    /// Reports whether the error came from a bus transaction.
    pub fn is_io(&self) -> bool {
        matches!(self, Error::Io { .. } | Error::I2c(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
