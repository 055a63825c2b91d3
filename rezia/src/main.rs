use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rezia::{EncodeOptions, RunSummary};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "zia")]
#[command(version = "0.1.0")]
#[command(about = "zia lossless signal transform converter", long_about = None)]
struct Cli {
    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a raw little-endian signal to a zia container
    Encode {
        /// Input raw signal file
        input: PathBuf,
        /// Output zia file
        output: PathBuf,
        /// Sample width in bits (16 or 32)
        #[arg(short, long, default_value = "16")]
        width: u8,
        /// Predictor order
        #[arg(short, long, default_value = "6")]
        order: usize,
        /// Maximum windows used to fit the predictor
        #[arg(long, default_value = "10000")]
        training_samples: usize,
        /// Transform chain (markov, sparse, delta)
        #[arg(short, long, default_value = "markov")]
        mode: String,
    },
    /// Decode a zia container to a raw little-endian signal
    Decode {
        /// Input zia file
        input: PathBuf,
        /// Output raw signal file
        output: PathBuf,
    },
    /// Print the zero-run segmentation of a raw signal
    Runs {
        /// Input raw signal file
        input: PathBuf,
        /// Sample width in bits (16 or 32)
        #[arg(short, long, default_value = "16")]
        width: u8,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show information about a zia container
    Info {
        /// Input zia file
        input: PathBuf,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match cli.command {
        Commands::Encode {
            input,
            output,
            width,
            order,
            training_samples,
            mode,
        } => {
            let options = EncodeOptions {
                width: rezia::parse_width(width)?,
                mode: rezia::parse_mode(&mode)?,
                ..Default::default()
            }
            .with_order(order)
            .with_training_samples(training_samples);
            encode(&input, &output, &options)?;
        }
        Commands::Decode { input, output } => {
            decode(&input, &output)?;
        }
        Commands::Runs { input, width, json } => {
            runs(&input, width, json)?;
        }
        Commands::Info { input, json } => {
            info(&input, json)?;
        }
    }

    Ok(())
}

fn encode(input: &PathBuf, output: &PathBuf, options: &EncodeOptions) -> Result<()> {
    println!("Reading {}...", input.display());
    let raw_bytes = fs::read(input).context("Failed to read input file")?;

    println!(
        "Encoding to zia ({:?}, {}-bit, order {})...",
        options.mode,
        options.width.bits(),
        options.order
    );
    let zia_data = rezia::encode_raw(&raw_bytes, options)?;

    fs::write(output, &zia_data).context("Failed to write output file")?;

    let ratio = if zia_data.is_empty() {
        0.0
    } else {
        raw_bytes.len() as f64 / zia_data.len() as f64
    };
    println!("✓ Wrote {}", output.display());
    println!(
        "  {} bytes -> {} bytes ({:.2}x)",
        raw_bytes.len(),
        zia_data.len(),
        ratio
    );

    Ok(())
}

fn decode(input: &PathBuf, output: &PathBuf) -> Result<()> {
    println!("Reading {}...", input.display());
    let zia_data = fs::read(input).context("Failed to read zia file")?;

    println!("Decoding...");
    let raw_bytes = rezia::decode_to_raw(&zia_data)?;

    fs::write(output, &raw_bytes).context("Failed to write output file")?;
    println!("✓ Wrote {} ({} bytes)", output.display(), raw_bytes.len());

    Ok(())
}

fn runs(input: &PathBuf, width: u8, json: bool) -> Result<()> {
    let raw_bytes = fs::read(input).context("Failed to read input file")?;
    let summary = rezia::runs_of_raw(&raw_bytes, rezia::parse_width(width)?)?;

    if json {
        let json_str =
            serde_json::to_string_pretty(&summary).context("Failed to serialize run lengths")?;
        println!("{}", json_str);
    } else {
        print_runs_readable(&summary);
    }

    Ok(())
}

fn print_runs_readable(summary: &RunSummary) {
    println!("Zero Runs");
    println!("═══════════════════════════════════════");
    println!("Samples:         {}", summary.signal_len);
    println!("Zero samples:    {}", summary.zero_samples);
    println!("Runs:            {}", summary.runs.len());
    println!("Run width:       {} bits", summary.run_bits);
    println!();

    for (i, pair) in summary.runs.chunks(2).enumerate() {
        match pair {
            [data, zeros] => println!("  [{}] {} non-zero, {} zero", i, data, zeros),
            [data] => println!("  [{}] {} non-zero", i, data),
            _ => {}
        }
    }
}

fn info(input: &PathBuf, json: bool) -> Result<()> {
    let zia_data = fs::read(input).context("Failed to read zia file")?;
    let info = rezia::get_info(&zia_data)?;

    if json {
        let json_str =
            serde_json::to_string_pretty(&info).context("Failed to serialize info")?;
        println!("{}", json_str);
        return Ok(());
    }

    println!("zia Container");
    println!("═══════════════════════════════════════");
    println!("Version:         {}", info.version);
    println!("Kind:            {}", info.kind);
    println!("Sample width:    {} bits", info.sample_bits);
    println!("Samples:         {}", info.signal_len);
    println!("Payload:         {} bytes", info.payload_size);
    println!("File size:       {} bytes", info.file_size);
    println!("Compression:     {:.2}x", info.compression_ratio);
    println!(
        "CRC:             {}",
        if info.crc_valid { "✓ valid" } else { "✗ INVALID" }
    );

    Ok(())
}
