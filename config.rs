/// BMP280 I2C default slave address (SDO pulled high).
pub const DEFAULT_ADDRESS: u16 = 0x77;
/// I2C bus exposed on the Raspberry Pi GPIO header.
pub const DEFAULT_BUS: u8 = 1;

/// Bus and address selection. Unset fields fall back to the connector's defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    pub bus: Option<u8>,
    pub address: Option<u16>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bus(mut self, bus: u8) -> Self {
        self.bus = Some(bus);
        self
    }

    pub fn with_address(mut self, address: u16) -> Self {
        self.address = Some(address);
        self
    }

    pub fn bus_or_default(&self, default: u8) -> u8 {
        self.bus.unwrap_or(default)
    }

    pub fn address_or_default(&self, default: u16) -> u16 {
        self.address.unwrap_or(default)
    }
}
