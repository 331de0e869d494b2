//! Fixtures and a scripted bus for unit tests.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::io;
use std::rc::Rc;

use crate::connection::{Connection, Connector};
use crate::error::{Error, Result};
use crate::structs::{Calibration, REG_CALIB_LEN, REG_ADC_LEN};

// dig_T1..dig_P9 from the datasheet example, 3.12, followed by the two reserved bytes.
pub const DATASHEET_CALIB_BYTES: [u8; REG_CALIB_LEN] = [
    112, 107, 67, 103, 24, 252, 125, 142, 67, 214, 208, 11, 39, 11, 140, 0, 249, 255, 140, 60,
    248, 198, 112, 23, 0, 0,
];

pub const DATASHEET_RAW_TEMPERATURE: i32 = 519888;
pub const DATASHEET_RAW_PRESSURE: i32 = 415148;

// adc_P = 415148, adc_T = 519888 as laid out in 0xF7 - 0xFC.
pub const DATASHEET_ADC_BYTES: [u8; REG_ADC_LEN] = [0x65, 0x5A, 0xC0, 0x7E, 0xED, 0x00];

pub fn datasheet_calibration() -> Calibration {
    Calibration {
        t1: 27504,
        t2: 26435,
        t3: -1000,
        p1: 36477,
        p2: -10685,
        p3: 3024,
        p4: 2855,
        p5: 140,
        p6: -7,
        p7: 15500,
        p8: -14600,
        p9: 6000,
    }
}

#[derive(Default)]
struct Script {
    responses: HashMap<u8, VecDeque<Vec<u8>>>,
    selected: Option<u8>,
    writes: Vec<Vec<u8>>,
    reads: usize,
    fail_write: bool,
    fail_read: bool,
}

/// Replies to register reads from per-register queues and records every transaction.
///
/// Clones share the same script, so a test can keep one handle while the driver owns another.
#[derive(Clone, Default)]
pub struct ScriptedConnection {
    script: Rc<RefCell<Script>>,
}

impl ScriptedConnection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues `data` as the reply to the next read of `register`. Fewer bytes than
    /// requested produces a short read.
    pub fn respond(&self, register: u8, data: Vec<u8>) {
        self.script
            .borrow_mut()
            .responses
            .entry(register)
            .or_default()
            .push_back(data);
    }

    pub fn fail_next_write(&self) {
        self.script.borrow_mut().fail_write = true;
    }

    pub fn fail_next_read(&self) {
        self.script.borrow_mut().fail_read = true;
    }

    pub fn writes(&self) -> Vec<Vec<u8>> {
        self.script.borrow().writes.clone()
    }

    pub fn reads(&self) -> usize {
        self.script.borrow().reads
    }
}

impl Connection for ScriptedConnection {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut script = self.script.borrow_mut();
        script.writes.push(buf.to_vec());
        if script.fail_write {
            script.fail_write = false;
            return Err(io::Error::new(io::ErrorKind::Other, "nack on write"));
        }
        script.selected = buf.first().copied();
        Ok(buf.len())
    }

    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let mut script = self.script.borrow_mut();
        script.reads += 1;
        if script.fail_read {
            script.fail_read = false;
            return Err(io::Error::new(io::ErrorKind::TimedOut, "bus timeout"));
        }
        let reply = match script.selected {
            Some(register) => script
                .responses
                .get_mut(&register)
                .and_then(VecDeque::pop_front)
                .unwrap_or_default(),
            None => Vec::new(),
        };
        let n = reply.len().min(buf.len());
        buf[..n].copy_from_slice(&reply[..n]);
        Ok(n)
    }
}

/// Hands out clones of one `ScriptedConnection` and remembers what was opened.
#[derive(Default)]
pub struct ScriptedConnector {
    pub connection: ScriptedConnection,
    pub opened: Vec<(u16, u8)>,
    pub fail_open: bool,
}

impl ScriptedConnector {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Connector for ScriptedConnector {
    type Connection = ScriptedConnection;

    fn default_bus(&self) -> u8 {
        7
    }

    fn connection(&mut self, address: u16, bus: u8) -> Result<ScriptedConnection> {
        if self.fail_open {
            return Err(Error::I2c(rppal::i2c::Error::Io(io::Error::new(
                io::ErrorKind::NotFound,
                "no such bus",
            ))));
        }
        self.opened.push((address, bus));
        Ok(self.connection.clone())
    }
}
