//! bpe-cli - Command-line interface for the byte-pair codec
//!
//! Encodes a file into a payload plus a separate substitution table file, and reverses it.

use bytepair::{decode, encode_with_stats, SubstitutionTable};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

#[derive(Parser)]
#[command(name = "bpe-cli")]
#[command(about = "A CLI tool for byte-pair encoding and decoding")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a file
    Compress {
        /// Input file to encode
        input: PathBuf,

        /// Output file for the encoded payload
        output: PathBuf,

        /// Where to write the substitution table (default: <output>.table)
        #[arg(short, long)]
        table: Option<PathBuf>,

        /// Force overwrite of output files
        #[arg(short, long)]
        force: bool,
    },

    /// Decode a file
    Decompress {
        /// Encoded payload
        input: PathBuf,

        /// Output decoded file
        output: PathBuf,

        /// Substitution table to replay (default: <input>.table)
        #[arg(short, long)]
        table: Option<PathBuf>,

        /// Force overwrite of output file
        #[arg(short, long)]
        force: bool,
    },

    /// List the entries of a substitution table
    Info {
        /// Table file to inspect
        table: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    // Keep going without log output if a logger cannot be installed
    let _ = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );

    let result = match cli.command {
        Commands::Compress {
            input,
            output,
            table,
            force,
        } => {
            let table = table.unwrap_or_else(|| table_path_for(&output));
            compress_file(&input, &output, &table, force, cli.verbose, cli.quiet)
        }
        Commands::Decompress {
            input,
            output,
            table,
            force,
        } => {
            let table = table.unwrap_or_else(|| table_path_for(&input));
            decompress_file(&input, &table, &output, force, cli.verbose, cli.quiet)
        }
        Commands::Info { table } => show_table_info(&table, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Default table location next to a payload file
fn table_path_for(payload: &Path) -> PathBuf {
    let mut name = payload.as_os_str().to_owned();
    name.push(".table");
    PathBuf::from(name)
}

fn check_paths(
    input: &Path,
    outputs: &[&Path],
    force: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !input.exists() {
        return Err(format!("Input file '{}' does not exist", input.display()).into());
    }

    for output in outputs {
        if output.exists() && !force {
            return Err(format!(
                "Output file '{}' already exists. Use --force to overwrite",
                output.display()
            )
            .into());
        }
    }

    Ok(())
}

fn spinner(quiet: bool, size: usize, message: &'static str) -> Option<ProgressBar> {
    if quiet || size <= 1024 * 1024 {
        return None;
    }

    let pb = ProgressBar::new_spinner();
    if let Ok(style) =
        ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed_precise}] {msg}")
    {
        pb.set_style(style);
    }
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    Some(pb)
}

fn compress_file(
    input: &Path,
    output: &Path,
    table_path: &Path,
    force: bool,
    verbose: bool,
    quiet: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    check_paths(input, &[output, table_path], force)?;

    if verbose {
        println!(
            "Encoding '{}' to '{}' (table '{}')",
            input.display(),
            output.display(),
            table_path.display()
        );
    }

    let start_time = Instant::now();

    let input_data = fs::read(input)?;
    let input_size = input_data.len();

    if verbose {
        println!("Input size: {} bytes", input_size);
    }

    // Encoding is quadratic in the worst case, so show activity for large files
    let progress = spinner(quiet, input_size, "Encoding...");

    let (encoded, table, stats) = encode_with_stats(&input_data);

    if let Some(ref pb) = progress {
        pb.finish_with_message("Encoding complete");
    }

    fs::write(output, &encoded)?;
    let mut table_file = fs::File::create(table_path)?;
    table.write_to(&mut table_file)?;

    let encode_time = start_time.elapsed();
    let table_size = table.len() * bytepair::TABLE_RECORD_SIZE;

    if !quiet {
        println!("✓ Encoding successful!");
        println!("  Input:   {} bytes", input_size);
        println!("  Output:  {} bytes", encoded.len());
        println!("  Table:   {} entries ({} bytes)", table.len(), table_size);
        println!("  Ratio:   {:.1}%", stats.compression_ratio() * 100.0);
        println!("  Stopped: {:?}", stats.stop_reason);
        println!("  Time:    {:.2?}", encode_time);
    }

    Ok(())
}

fn decompress_file(
    input: &Path,
    table_path: &Path,
    output: &Path,
    force: bool,
    verbose: bool,
    quiet: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    check_paths(input, &[output], force)?;
    if !table_path.exists() {
        return Err(format!("Table file '{}' does not exist", table_path.display()).into());
    }

    if verbose {
        println!(
            "Decoding '{}' with table '{}' to '{}'",
            input.display(),
            table_path.display(),
            output.display()
        );
    }

    let start_time = Instant::now();

    let encoded = fs::read(input)?;
    let mut table_file = fs::File::open(table_path)?;
    let table = SubstitutionTable::read_from(&mut table_file)
        .map_err(|e| format!("Failed to read table: {}", e))?;

    if verbose {
        println!(
            "Encoded size: {} bytes, {} table entries",
            encoded.len(),
            table.len()
        );
    }

    let progress = spinner(quiet, encoded.len(), "Decoding...");
    let decoded = decode(&encoded, &table);
    if let Some(ref pb) = progress {
        pb.finish_with_message("Decoding complete");
    }

    fs::write(output, &decoded)?;

    if !quiet {
        println!("✓ Decoding successful!");
        println!("  Input:  {} bytes", encoded.len());
        println!("  Output: {} bytes", decoded.len());
        println!("  Time:   {:.2?}", start_time.elapsed());
    }

    Ok(())
}

/// Render bytes as printable ASCII where possible
fn printable(bytes: &[u8]) -> String {
    bytes
        .iter()
        .flat_map(|&b| std::ascii::escape_default(b))
        .map(char::from)
        .collect()
}

fn show_table_info(table_path: &Path, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    if !table_path.exists() {
        return Err(format!("Table file '{}' does not exist", table_path.display()).into());
    }

    let data = fs::read(table_path)?;
    let table = SubstitutionTable::from_bytes(&data)?;

    println!("Substitution Table Information:");
    println!("  File:    {}", table_path.display());
    println!("  Size:    {} bytes", data.len());
    println!("  Entries: {}", table.len());

    for (round, entry) in table.iter().enumerate() {
        let expanded = table.expand(entry.code).unwrap_or_default();
        if verbose {
            println!(
                "  {:3}: {:02x} <- {:02x} {:02x}  \"{}\" ({} bytes)",
                round + 1,
                entry.code,
                entry.bigram.first,
                entry.bigram.second,
                printable(&expanded),
                expanded.len()
            );
        } else {
            println!(
                "  {:3}: {:02x} <- \"{}\"",
                round + 1,
                entry.code,
                printable(&expanded)
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_round_trip() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let input_path = dir.path().join("input.txt");
        let encoded_path = dir.path().join("encoded.bpe");
        let table_path = table_path_for(&encoded_path);
        let output_path = dir.path().join("output.txt");

        let test_data = b"Hello, World! This is a test of the byte-pair CLI tool. Hello again!";
        fs::write(&input_path, test_data)?;

        compress_file(&input_path, &encoded_path, &table_path, false, false, true)?;
        assert!(table_path.exists());

        decompress_file(&encoded_path, &table_path, &output_path, false, false, true)?;

        let result_data = fs::read(&output_path)?;
        assert_eq!(test_data, &result_data[..]);

        show_table_info(&table_path, true)?;

        Ok(())
    }

    #[test]
    fn test_refuses_overwrite() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let input_path = dir.path().join("input.txt");
        let encoded_path = dir.path().join("encoded.bpe");
        let table_path = table_path_for(&encoded_path);
        fs::write(&input_path, b"abababab")?;
        fs::write(&encoded_path, b"existing")?;

        let result = compress_file(&input_path, &encoded_path, &table_path, false, false, true);
        assert!(result.is_err());
        compress_file(&input_path, &encoded_path, &table_path, true, false, true)?;

        Ok(())
    }

    #[test]
    fn test_table_path_for() {
        assert_eq!(
            table_path_for(Path::new("out/data.bpe")),
            PathBuf::from("out/data.bpe.table")
        );
    }

    #[test]
    fn test_printable() {
        assert_eq!(printable(b"ab\n\x01"), "ab\\n\\x01");
    }
}
