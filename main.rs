use log::error;
use rpbmp280::{Bmp280Driver, Config, I2cConnector};

// usage: rpbmp280 [bus] [address]
fn parse_args() -> Result<Config, String> {
    let mut config = Config::new();
    let mut args = std::env::args().skip(1);
    if let Some(bus) = args.next() {
        config = config.with_bus(bus.parse().map_err(|_| format!("invalid bus: {}", bus))?);
    }
    if let Some(addr) = args.next() {
        let parsed = match addr.strip_prefix("0x") {
            Some(hex) => u16::from_str_radix(hex, 16),
            None => addr.parse(),
        };
        config = config.with_address(parsed.map_err(|_| format!("invalid address: {}", addr))?);
    }
    Ok(config)
}

fn run(config: Config) -> rpbmp280::Result<()> {
    let mut bmp = Bmp280Driver::with_config(I2cConnector, config);
    bmp.start()?;

    let t = bmp.temperature()?;
    println!("Temperature: {:.2} C", t);
    let p = bmp.pressure()?;
    println!("Pressure: {:.2} hPa", p / 100.0);

    bmp.halt()
}

fn main() {
    env_logger::init();

    let config = match parse_args() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("usage: rpbmp280 [bus] [address]");
            std::process::exit(2);
        }
    };
    if let Err(e) = run(config) {
        error!("{}", e);
        std::process::exit(1);
    }
}
