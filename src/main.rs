//! # serial-lcd CLI
//!
//! Command-line interface for a character LCD behind a serial backpack.
//!
//! ## Usage
//!
//! ```bash
//! # Write text after clearing the screen
//! serial-lcd text --clear "Hello"
//!
//! # Set the backlight color
//! serial-lcd color '#ff8000'
//!
//! # Upload a glyph drawn in a text file to slot 0
//! serial-lcd glyph 0 heart.txt
//!
//! # Show the bytes instead of sending them
//! serial-lcd --dry-run color '#ff8000'
//!
//! # Web control panel
//! serial-lcd serve --listen 0.0.0.0:12000
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use serial_lcd::{
    DisplayConfig, Lcd, LcdError,
    demo::{self, Pacing},
    lcd::Command,
    protocol::{
        color::Rgb,
        eeprom,
        glyph::{self, Glyph},
    },
    server::{self, ServerConfig},
    transport::{BoxedTransport, MemoryTransport, SerialTransport, serial},
    worker::Worker,
};

/// serial-lcd - Character LCD backpack utility
#[derive(Parser, Debug)]
#[command(name = "serial-lcd")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Serial device the backpack is on
    #[arg(long, global = true, default_value = serial::DEFAULT_DEVICE)]
    device: String,

    /// Baud rate
    #[arg(long, global = true, default_value_t = serial::DEFAULT_BAUD)]
    baud: u32,

    /// Panel size, COLSxROWS
    #[arg(long, global = true, default_value = "16x2")]
    size: DisplayConfig,

    /// Print the encoded bytes as hex instead of opening the device
    #[arg(long, global = true)]
    dry_run: bool,

    /// Log every frame
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write text at the cursor
    Text {
        text: String,

        /// Clear the screen and go home first
        #[arg(long)]
        clear: bool,
    },

    /// Set the backlight color (#rrggbb or #rgb)
    Color { color: Rgb },

    /// Set the backlight brightness (0-255)
    Brightness { value: u8 },

    /// Set the contrast (0-255)
    Contrast { value: u8 },

    /// Upload a custom character from a text file (8 rows of 5 characters)
    Glyph {
        /// Slot 0-7
        #[arg(value_parser = clap::value_parser!(u8).range(0..i64::from(glyph::SLOTS)))]
        slot: u8,

        file: PathBuf,

        /// Also save the RAM slots to this EEPROM bank (0-3)
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..i64::from(eeprom::BANKS)))]
        save_bank: Option<u8>,
    },

    /// Set the power-up splash screen
    Splash { text: String },

    /// Run the hardware demo
    Demo,

    /// Start the web control panel
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "0.0.0.0:12000")]
        listen: String,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), LcdError> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let display = cli.size;

    let commands = match cli.command {
        Commands::Text { text, clear } => {
            let mut commands = Vec::new();
            if clear {
                commands.extend([Command::Clear, Command::Home]);
            }
            commands.push(Command::text(text));
            commands
        }
        Commands::Color { color } => vec![Command::Background(color)],
        Commands::Brightness { value } => vec![Command::Brightness(value)],
        Commands::Contrast { value } => vec![Command::Contrast(value)],
        Commands::Glyph {
            slot,
            file,
            save_bank,
        } => {
            let text = std::fs::read_to_string(&file).map_err(|e| {
                LcdError::InvalidArgument(format!("Failed to read {}: {}", file.display(), e))
            })?;
            let glyph = Glyph::parse(&text)?;
            let mut commands = vec![Command::CreateChar { slot, glyph }];
            if let Some(bank) = save_bank {
                commands.push(Command::SaveChars { bank });
            }
            commands
        }
        Commands::Splash { text } => vec![Command::Splash { text, display }],
        Commands::Demo => {
            let pacing = if cli.dry_run {
                Pacing::NONE
            } else {
                Pacing::HARDWARE
            };
            return with_transport(&cli.device, cli.baud, cli.dry_run, |transport| {
                let worker = Worker::spawn(Lcd::new(transport));
                let result = demo::run(&worker.handle(), &display, pacing);
                let closed = worker.shutdown();
                result.and(closed)
            });
        }
        Commands::Serve { listen } => {
            let config = ServerConfig {
                device_path: cli.device.clone(),
                baud: cli.baud,
                listen_addr: listen,
                display,
            };
            let runtime = tokio::runtime::Runtime::new()?;
            return runtime.block_on(server::serve(config));
        }
    };

    with_transport(&cli.device, cli.baud, cli.dry_run, |transport| {
        let mut lcd = Lcd::new(transport);
        for command in &commands {
            lcd.apply(command)?;
        }
        lcd.close()
    })
}

/// Run `f` on the real device, or on a memory sink whose bytes are printed.
fn with_transport<F>(device: &str, baud: u32, dry_run: bool, f: F) -> Result<(), LcdError>
where
    F: FnOnce(BoxedTransport) -> Result<(), LcdError>,
{
    if dry_run {
        let probe = MemoryTransport::new();
        f(Box::new(probe.clone()))?;
        let bytes = probe.contents();
        println!("{}", hex_dump(&bytes));
        println!("{} bytes", bytes.len());
        return Ok(());
    }

    let transport = SerialTransport::open(device, baud)?;
    f(Box::new(transport))?;
    println!("Sent to {}", device);
    Ok(())
}

fn hex_dump(bytes: &[u8]) -> String {
    bytes
        .chunks(16)
        .map(|line| {
            line.iter()
                .map(|b| format!("{:02X}", b))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
