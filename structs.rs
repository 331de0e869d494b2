// BMP280 register addresses.
// cf. Bosch BST-BMP280-DS001, 4.3 Memory map
pub const REG_CALIB_00: u8 = 0x88;
pub const REG_CALIB_LEN: usize = 26;
pub const REG_PRESS_MSB: u8 = 0xF7;
pub const REG_ADC_LEN: usize = 6;

/// Width and signedness of one calibration word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Word {
    U16,
    I16,
}

impl Word {
    fn decode(self, bytes: [u8; 2]) -> i32 {
        match self {
            Word::U16 => u16::from_le_bytes(bytes).into(),
            Word::I16 => i16::from_le_bytes(bytes).into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coefficient {
    T1,
    T2,
    T3,
    P1,
    P2,
    P3,
    P4,
    P5,
    P6,
    P7,
    P8,
    P9,
}

/// Calibration block 0x88 - 0x9F in transmission order. All words are little-endian.
/// The two trailing bytes of the 26 byte read (0xA0, 0xA1) are reserved on the BMP280.
pub const CALIB_LAYOUT: [(Coefficient, Word); 12] = [
    (Coefficient::T1, Word::U16),
    (Coefficient::T2, Word::I16),
    (Coefficient::T3, Word::I16),
    (Coefficient::P1, Word::U16),
    (Coefficient::P2, Word::I16),
    (Coefficient::P3, Word::I16),
    (Coefficient::P4, Word::I16),
    (Coefficient::P5, Word::I16),
    (Coefficient::P6, Word::I16),
    (Coefficient::P7, Word::I16),
    (Coefficient::P8, Word::I16),
    (Coefficient::P9, Word::I16),
];

/// Factory trimmed compensation parameters (dig_T1..dig_T3, dig_P1..dig_P9).
///
/// Read once by `Bmp280Driver::start` and never written afterwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Calibration {
    pub t1: u16,
    pub t2: i16,
    pub t3: i16,
    pub p1: u16,
    pub p2: i16,
    pub p3: i16,
    pub p4: i16,
    pub p5: i16,
    pub p6: i16,
    pub p7: i16,
    pub p8: i16,
    pub p9: i16,
}

impl Calibration {
    /// Decodes the calibration block by walking `CALIB_LAYOUT` over the buffer.
    pub fn from_bytes(buf: &[u8; REG_CALIB_LEN]) -> Self {
        let mut calib = Calibration::default();
        for (&(coefficient, word), pair) in CALIB_LAYOUT.iter().zip(buf.chunks_exact(2)) {
            calib.set(coefficient, word.decode([pair[0], pair[1]]));
        }
        calib
    }

    // `value` always fits the field: it was decoded with the field's own word type.
    fn set(&mut self, coefficient: Coefficient, value: i32) {
        match coefficient {
            Coefficient::T1 => self.t1 = value as u16,
            Coefficient::T2 => self.t2 = value as i16,
            Coefficient::T3 => self.t3 = value as i16,
            Coefficient::P1 => self.p1 = value as u16,
            Coefficient::P2 => self.p2 = value as i16,
            Coefficient::P3 => self.p3 = value as i16,
            Coefficient::P4 => self.p4 = value as i16,
            Coefficient::P5 => self.p5 = value as i16,
            Coefficient::P6 => self.p6 = value as i16,
            Coefficient::P7 => self.p7 = value as i16,
            Coefficient::P8 => self.p8 = value as i16,
            Coefficient::P9 => self.p9 = value as i16,
        }
    }
}

/// Uncompensated 20-bit ADC values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawReading {
    pub temperature: i32,
    pub pressure: i32,
}

impl RawReading {
    /// Unpacks press_msb, press_lsb, press_xlsb, temp_msb, temp_lsb, temp_xlsb (0xF7 - 0xFC).
    pub fn from_bytes(data: &[u8; REG_ADC_LEN]) -> Self {
        RawReading {
            pressure: unpack_20bit(data[0], data[1], data[2]),
            temperature: unpack_20bit(data[3], data[4], data[5]),
        }
    }
}

fn unpack_20bit(msb: u8, lsb: u8, xlsb: u8) -> i32 {
    (i32::from(msb) << 12) | (i32::from(lsb) << 4) | (i32::from(xlsb) >> 4)
}
