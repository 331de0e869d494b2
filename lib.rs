//! Driver for the Bosch BMP280 barometric pressure / temperature sensor on a
//! Raspberry Pi I2C bus.
//!
//! ```no_run
//! use rpbmp280::{Bmp280Driver, Config, I2cConnector};
//!
//! let mut bmp = Bmp280Driver::with_config(I2cConnector, Config::new().with_address(0x76));
//! bmp.start()?;
//! println!("{:.2} C, {:.2} hPa", bmp.temperature()?, bmp.pressure()? / 100.0);
//! # Ok::<(), rpbmp280::Error>(())
//! ```

pub mod compensation;
pub mod config;
pub mod connection;
pub mod driver;
pub mod error;
pub mod structs;

#[cfg(test)]
mod testutil;

pub use config::Config;
pub use connection::{Connection, Connector, I2cConnection, I2cConnector};
pub use driver::Bmp280Driver;
pub use error::{Error, Result};
pub use structs::{Calibration, RawReading};
