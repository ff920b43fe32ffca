use std::path::PathBuf;

use alpha_modbus_protocol::{
    catalog, Exchange, LinkConfig, Reading, RegisterHandler, SerialChannel, WordWidth,
};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Diagnostic access to an AlphaESS controller over RS485
#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// TOML link configuration
    #[arg(short, long, env = "ALPHA_CONFIG")]
    config: Option<PathBuf>,

    /// Serial device, overrides the configuration
    #[arg(short, long)]
    port: Option<String>,

    /// Baud rate, overrides the configuration
    #[arg(short, long)]
    baud_rate: Option<u32>,

    /// Read the inverter serial number first to pick the system fault table
    #[arg(long)]
    detect_prefix: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List every register in the catalog
    List,
    /// Read and decode one register, by name or id
    Read { register: String },
    /// Read and decode every register in the catalog
    ReadAll,
    /// Read raw words without decoding
    RawRead {
        #[arg(value_parser = parse_u16)]
        address: u16,
        #[arg(default_value_t = 1)]
        count: u16,
    },
    /// Write one register with function 0x06
    WriteSingle {
        #[arg(value_parser = parse_u16)]
        address: u16,
        #[arg(value_parser = parse_u16)]
        value: u16,
    },
    /// Write one or two words with function 0x10
    WriteData {
        #[arg(value_parser = parse_u16)]
        address: u16,
        value: u32,
        #[arg(default_value_t = 1)]
        words: u16,
    },
}

fn parse_u16(text: &str) -> Result<u16, String> {
    let parsed = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => u16::from_str_radix(hex, 16),
        None => text.parse(),
    };
    parsed.map_err(|err| format!("{text}: {err}"))
}

fn init_logging(level: &str) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn resolve_register(register: &str) -> Result<u16> {
    if let Some(descriptor) = catalog::by_name(register) {
        return Ok(descriptor.id);
    }
    match parse_u16(register) {
        Ok(id) => Ok(id),
        Err(_) => bail!("{register} is neither a register name nor an id"),
    }
}

fn print_reading(reading: &Reading) {
    let name = reading.name().unwrap_or("?");
    match &reading.formatted {
        Some(formatted) => println!("{:#06x} {name}: {formatted}", reading.id),
        None => println!(
            "{:#06x} {name}: {} ({})",
            reading.id,
            reading.status,
            reading.status.short_name()
        ),
    }
}

fn print_exchange(exchange: &Exchange) {
    println!(
        "{} ({}) payload {:02X?}",
        exchange.status,
        exchange.status.short_name(),
        exchange.payload
    );
    if let Some(code) = exchange.error_code() {
        println!("error code {code:#04x}");
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level);

    if let Command::List = args.command {
        for descriptor in catalog::iter() {
            println!(
                "{:#06x} {:<60} {:?} x{}",
                descriptor.id, descriptor.name, descriptor.data_type, descriptor.count
            );
        }
        return Ok(());
    }

    let mut config = LinkConfig::load(args.config.as_deref())?;
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(baud_rate) = args.baud_rate {
        config.baud_rate = baud_rate;
    }

    let channel = SerialChannel::open(&config.port, config.baud_rate, config.rts_direction)
        .with_context(|| format!("Failed to open {}", config.port))?;
    let mut handler = RegisterHandler::from_config(channel, &config)?;
    info!("Connected to {} at {} baud", config.port, config.baud_rate);

    if args.detect_prefix {
        let status = handler.detect_serial_number_prefix();
        info!(
            "Prefix detection {status}, using {}",
            handler.serial_number_prefix()
        );
    }

    match args.command {
        Command::List => {}
        Command::Read { register } => {
            let id = resolve_register(&register)?;
            print_reading(&handler.read_handled(id));
        }
        Command::ReadAll => {
            for reading in handler.read_all_handled() {
                print_reading(&reading);
            }
        }
        Command::RawRead { address, count } => {
            print_exchange(&handler.read_raw(address, count)?);
        }
        Command::WriteSingle { address, value } => {
            print_exchange(&handler.write_raw_single(address, value));
        }
        Command::WriteData {
            address,
            value,
            words,
        } => {
            let width = WordWidth::try_from(words)?;
            print_exchange(&handler.write_raw_data(address, value, width)?);
        }
    }

    Ok(())
}
