use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use umorse_cli::{commands, LayoutArg, PlayOptions};
use umorse_core::constants::DEFAULT_CAPACITY;

#[derive(Parser)]
#[command(name = "umorse")]
#[command(about = "uMorse - Slim Morse code encoding for small devices", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode text into packed Morse code
    Encode {
        /// Input text file, `-` for stdin
        #[arg(short, long, default_value = "-")]
        input: String,

        /// Output file for the code; prints hex when omitted
        #[arg(short, long)]
        output: Option<String>,

        /// Code layout
        #[arg(long, value_enum, default_value_t = LayoutArg::Aligned)]
        layout: LayoutArg,

        /// Size of the code buffer in bytes
        #[arg(long, default_value_t = DEFAULT_CAPACITY)]
        capacity: usize,
    },

    /// Play a packed code file on the console
    Play {
        /// Input code file, `-` for stdin
        #[arg(short, long, default_value = "-")]
        input: String,

        #[command(flatten)]
        options: PlayOptions,
    },

    /// Encode text and play it straight away
    Send {
        /// Message to send
        #[arg(short, long)]
        text: Option<String>,

        /// Read the message from a file instead, `-` for stdin
        #[arg(short, long)]
        input: Option<String>,

        /// Code layout
        #[arg(long, value_enum, default_value_t = LayoutArg::Aligned)]
        layout: LayoutArg,

        /// Size of the code buffer in bytes
        #[arg(long, default_value_t = DEFAULT_CAPACITY)]
        capacity: usize,

        #[command(flatten)]
        options: PlayOptions,
    },

    /// Show statistics and events of a packed code file
    Inspect {
        /// Input code file, `-` for stdin
        #[arg(short, long, default_value = "-")]
        input: String,

        /// Output JSON file for the report
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    // Execute command
    match cli.command {
        Commands::Encode {
            input,
            output,
            layout,
            capacity,
        } => commands::encode::execute(&input, output.as_deref(), layout, capacity),

        Commands::Play { input, options } => commands::play::execute(&input, &options),

        Commands::Send {
            text,
            input,
            layout,
            capacity,
            options,
        } => commands::send::execute(text.as_deref(), input.as_deref(), layout, capacity, &options),

        Commands::Inspect { input, output } => commands::inspect::execute(&input, output.as_deref()),
    }
}
