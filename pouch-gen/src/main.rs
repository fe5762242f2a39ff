use std::fs;
use std::path::PathBuf;

use clap::Parser;
use tracing::{Level, info};

use pouch_format::{ContentType, Entry, encode_pouch};

mod lorem;

#[derive(Parser)]
#[command(
    name = "pouch-gen",
    about = "Generate synthetic pouch payloads for firmware test harnesses",
    version,
    long_about = "Builds a pouch payload from repeated lorem-ipsum JSON entries, \
the same synthetic corpus the firmware test suites decode, and writes the \
encoded bytes to a file."
)]
struct Cli {
    /// Set the logging level
    #[arg(short, long, value_enum, default_value = "info")]
    log_level: LogLevel,

    /// Device id written into the pouch header
    #[arg(short, long, default_value = "id123")]
    device_id: String,

    /// Device-side path of each generated entry
    #[arg(short, long, default_value = "/.s/lorem")]
    path: String,

    /// Bytes of lorem-ipsum filler per entry (defaults to one full copy)
    #[arg(long)]
    length: Option<usize>,

    /// Number of identical entries to generate
    #[arg(short, long, default_value_t = 1)]
    count: usize,

    /// Output encoding
    #[arg(short, long, value_enum, default_value = "raw")]
    format: OutputFormat,

    /// File the encoded payload is written to
    out: PathBuf,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum OutputFormat {
    /// Raw payload bytes
    Raw,
    /// Lowercase hex
    Hex,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(Level::from(cli.log_level))
        .with_target(false)
        .init();

    let length = cli.length.unwrap_or(lorem::LOREM_IPSUM.len());
    let body = lorem::lorem_json(length);

    let entry = Entry::text(&cli.path, ContentType::Json, &body);
    let entries = vec![entry; cli.count];

    let payload = encode_pouch(&cli.device_id, &entries)?;

    info!(
        device_id = %cli.device_id,
        entries = entries.len(),
        bytes = payload.len(),
        "encoded pouch payload"
    );

    match cli.format {
        OutputFormat::Raw => fs::write(&cli.out, &payload)?,
        OutputFormat::Hex => fs::write(&cli.out, hex::encode(&payload))?,
    }

    Ok(())
}
