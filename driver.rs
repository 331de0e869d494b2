use std::sync::atomic::{AtomicUsize, Ordering};

use log::{debug, info};

use crate::compensation::{compute_pressure, compute_temperature};
use crate::config::{Config, DEFAULT_ADDRESS};
use crate::connection::{read_register, Connection, Connector};
use crate::error::{Error, Result};
use crate::structs::{Calibration, RawReading, REG_ADC_LEN, REG_CALIB_00, REG_CALIB_LEN, REG_PRESS_MSB};

static INSTANCES: AtomicUsize = AtomicUsize::new(0);

fn default_name() -> String {
    format!("BMP280-{}", INSTANCES.fetch_add(1, Ordering::Relaxed))
}

/// Driver for the BMP280 temperature/pressure sensor.
///
/// Call `start` once to open the connection and load the calibration block,
/// then `temperature` / `pressure`. Each measurement is a fresh register read.
/// The driver is not synchronised; share it behind a lock if needed.
pub struct Bmp280Driver<C: Connector> {
    name: String,
    connector: C,
    config: Config,
    connection: Option<C::Connection>,
    calib: Option<Calibration>,
}

impl<C: Connector> Bmp280Driver<C> {
    pub fn new(connector: C) -> Self {
        Self::with_config(connector, Config::default())
    }

    pub fn with_config(connector: C, config: Config) -> Self {
        Bmp280Driver {
            name: default_name(),
            connector,
            config,
            connection: None,
            calib: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn connector(&self) -> &C {
        &self.connector
    }

    /// The open connection, `None` until `start` has succeeded.
    pub fn connection(&self) -> Option<&C::Connection> {
        self.connection.as_ref()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Calibration coefficients, `None` until `start` has succeeded.
    pub fn calibration(&self) -> Option<&Calibration> {
        self.calib.as_ref()
    }

    /// Opens the connection and loads the calibration coefficients.
    ///
    /// On failure the driver keeps neither the connection nor any calibration
    /// and measurements return `Error::NotStarted` until `start` succeeds.
    pub fn start(&mut self) -> Result<()> {
        self.connection = None;
        self.calib = None;

        let bus = self.config.bus_or_default(self.connector.default_bus());
        let address = self.config.address_or_default(DEFAULT_ADDRESS);
        let mut conn = self.connector.connection(address, bus)?;
        let calib = read_calib(&mut conn)?;

        info!("{} started on bus {} address {:#04x}", self.name, bus, address);
        self.connection = Some(conn);
        self.calib = Some(calib);
        Ok(())
    }

    pub fn halt(&mut self) -> Result<()> {
        info!("{} halted", self.name);
        Ok(())
    }

    /// Current temperature in degrees Celsius.
    pub fn temperature(&mut self) -> Result<f32> {
        let (calib, raw) = self.read_raw()?;
        let (celsius, _) = compute_temperature(&calib, raw.temperature);
        Ok(celsius)
    }

    /// Current barometric pressure in Pa.
    ///
    /// Temperature and pressure both come from the same register read, so the
    /// fine temperature fed into the pressure formula matches this sample.
    pub fn pressure(&mut self) -> Result<f32> {
        let (calib, raw) = self.read_raw()?;
        let (_, t_fine) = compute_temperature(&calib, raw.temperature);
        Ok(compute_pressure(&calib, raw.pressure, t_fine))
    }

    fn read_raw(&mut self) -> Result<(Calibration, RawReading)> {
        let calib = self.calib.ok_or(Error::NotStarted)?;
        let conn = self.connection.as_mut().ok_or(Error::NotStarted)?;
        let data = read_register(conn, REG_PRESS_MSB, REG_ADC_LEN)?;

        let mut buf = [0u8; REG_ADC_LEN];
        buf.copy_from_slice(&data);
        let raw = RawReading::from_bytes(&buf);
        debug!("raw temperature {} raw pressure {}", raw.temperature, raw.pressure);
        Ok((calib, raw))
    }
}

fn read_calib<T: Connection>(conn: &mut T) -> Result<Calibration> {
    let data = read_register(conn, REG_CALIB_00, REG_CALIB_LEN)?;
    let mut buf = [0u8; REG_CALIB_LEN];
    buf.copy_from_slice(&data);
    let calib = Calibration::from_bytes(&buf);
    debug!("calibration {:?}", calib);
    Ok(calib)
}
