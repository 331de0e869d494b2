use std::io;

use log::{debug, warn};
use rppal::i2c::I2c;

use crate::error::{Error, Result};

/// An open, addressed connection to one peripheral on the bus.
pub trait Connection {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize>;
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize>;
}

/// Something that can hand out connections for a bus/address pair.
pub trait Connector {
    type Connection: Connection;

    fn default_bus(&self) -> u8;
    fn connection(&mut self, address: u16, bus: u8) -> Result<Self::Connection>;
}

/// Writes `register` then reads exactly `n` bytes back.
pub fn read_register<C: Connection + ?Sized>(conn: &mut C, register: u8, n: usize) -> Result<Vec<u8>> {
    debug!("read {} bytes from register {:#04x}", n, register);
    conn.write(&[register]).map_err(|e| {
        warn!("write of register {:#04x} failed: {}", register, e);
        Error::io(register, e)
    })?;

    let mut buf = vec![0u8; n];
    let read = conn.read(&mut buf).map_err(|e| {
        warn!("read of register {:#04x} failed: {}", register, e);
        Error::io(register, e)
    })?;
    if read != n {
        warn!("short read on register {:#04x}: {} of {} bytes", register, read, n);
        return Err(Error::io(
            register,
            io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("expected {} bytes, got {}", n, read),
            ),
        ));
    }
    Ok(buf)
}

/// Opens `/dev/i2c-<bus>` through rppal.
#[derive(Debug, Default)]
pub struct I2cConnector;

impl Connector for I2cConnector {
    type Connection = I2cConnection;

    fn default_bus(&self) -> u8 {
        crate::config::DEFAULT_BUS
    }

    fn connection(&mut self, address: u16, bus: u8) -> Result<I2cConnection> {
        let mut i2c = I2c::with_bus(bus)?;
        i2c.set_slave_address(address)?;
        debug!("opened i2c bus {} at address {:#04x}", bus, address);
        Ok(I2cConnection { i2c })
    }
}

pub struct I2cConnection {
    i2c: I2c,
}

impl Connection for I2cConnection {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.i2c.write(buf).map_err(into_io)
    }

    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.i2c.read(buf).map_err(into_io)
    }
}

fn into_io(err: rppal::i2c::Error) -> io::Error {
    match err {
        rppal::i2c::Error::Io(e) => e,
        other => io::Error::new(io::ErrorKind::Other, other),
    }
}
