//! PoxHash CLI
//!
//! # Commands
//!
//! - `hash` - Hash strings, files (`file=`) or byte lists (`int=`)
//! - `bench` - Measure hashing throughput
//! - `params` - Print the algorithm parameters

use anyhow::Context;
use clap::{ArgAction, Args, Parser, Subcommand};
use log::{debug, info, LevelFilter};
use std::time::Instant;

use poxhash::algorithm::{self, Padding};
use poxhash::input::{join_args, message_bytes};
use poxhash::report::{DigestKind, HashRun, Output, Selection, TimeUnit};
use poxhash::{PoxHash, Version};

#[derive(Parser)]
#[command(name = "poxhash")]
#[command(version)]
#[command(about = "PoxHash 64-bit hash runner")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Hash one or more messages
    Hash(HashArgs),

    /// Run performance benchmark
    Bench {
        /// Number of hashes to compute
        #[arg(short, long, default_value = "10000")]
        count: u32,

        /// Message size in bytes
        #[arg(short, long, default_value = "64")]
        size: usize,

        /// Algorithm version
        #[arg(short, long, default_value_t = Version::LATEST)]
        algorithm: Version,
    },

    /// Print the algorithm parameters
    Params {
        /// Algorithm version
        #[arg(short, long, default_value_t = Version::LATEST)]
        algorithm: Version,
    },
}

#[derive(Args)]
struct HashArgs {
    /// Messages: plain text, file=<path> or int=<byte,byte,...>
    #[arg(required = true)]
    inputs: Vec<String>,

    /// Hash all inputs joined by spaces as a single message
    #[arg(short, long)]
    join: bool,

    /// Print each input before its digest
    #[arg(short, long)]
    echo: bool,

    /// Digest forms to print (repeatable)
    #[arg(short, long = "digest", value_enum)]
    digests: Vec<DigestKind>,

    /// Time the hashing
    #[arg(short, long)]
    benchmark: bool,

    /// Units for benchmark timings (repeatable, default: us)
    #[arg(long = "unit", value_enum)]
    units: Vec<TimeUnit>,

    /// Print timings only, no digests
    #[arg(long)]
    benchmark_only: bool,

    /// Algorithm version
    #[arg(short, long, default_value_t = Version::LATEST)]
    algorithm: Version,

    /// Print digests as JSON
    #[arg(long)]
    json: bool,

    /// Do not print the header line
    #[arg(long)]
    no_header: bool,
}

impl HashArgs {
    fn output(&self) -> Output {
        let timed = self.benchmark || self.benchmark_only;
        Output {
            selection: Selection::from_kinds(&self.digests),
            echo: self.echo,
            json: self.json,
            header: !self.no_header,
            show_digests: !self.benchmark_only,
            timing: timed.then(|| self.units.clone()),
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Hash(args) => cmd_hash(&args),
        Commands::Bench {
            count,
            size,
            algorithm,
        } => cmd_bench(count, size, algorithm),
        Commands::Params { algorithm } => cmd_params(algorithm),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn cmd_hash(args: &HashArgs) -> anyhow::Result<()> {
    println!("{}", run_hash(args)?);
    Ok(())
}

/// Hash the inputs and render everything `hash` prints
fn run_hash(args: &HashArgs) -> anyhow::Result<String> {
    let (labels, messages) = if args.join {
        let joined = join_args(&args.inputs);
        let bytes = joined.as_bytes().to_vec();
        (vec![joined], vec![bytes])
    } else {
        let mut messages = Vec::with_capacity(args.inputs.len());
        for arg in &args.inputs {
            let bytes = message_bytes(arg)
                .with_context(|| format!("invalid input `{}`", arg))?;
            messages.push(bytes);
        }
        (args.inputs.clone(), messages)
    };
    info!(
        "hashing {} message(s) with {}",
        messages.len(),
        args.algorithm
    );

    let hasher = PoxHash::with_version(args.algorithm);
    let start = Instant::now();
    let digests: Vec<_> = messages.iter().map(|m| hasher.hash(m)).collect();
    let elapsed = start.elapsed();

    let run = HashRun {
        version: args.algorithm,
        labels: &labels,
        digests: &digests,
        elapsed,
    };
    Ok(args.output().render(&run)?)
}

/// Distinct messages of `size` bytes for benchmarking
fn bench_messages(count: u32, size: usize) -> Vec<Vec<u8>> {
    (0..count)
        .map(|i| {
            let seed = i.to_le_bytes();
            (0..size).map(|j| seed[j % 4] ^ j as u8).collect()
        })
        .collect()
}

fn cmd_bench(count: u32, size: usize, version: Version) -> anyhow::Result<()> {
    if count == 0 {
        anyhow::bail!("count must be at least 1");
    }
    println!(
        "Running benchmark with {} hashes of {} bytes ({})...",
        count, size, version
    );

    let hasher = PoxHash::with_version(version);
    let messages = bench_messages(count, size);
    debug!("prepared {} benchmark messages", messages.len());

    let start = Instant::now();
    for message in &messages {
        let _ = hasher.hash_words(message);
    }
    let sequential = start.elapsed();

    let start = Instant::now();
    let batch = hasher.hash_batch(&messages);
    let batched = start.elapsed();
    debug!("batch produced {} digests", batch.len());

    let total_bytes = count as f64 * size as f64;
    let hashrate = count as f64 / sequential.as_secs_f64();
    let batch_rate = count as f64 / batched.as_secs_f64();

    println!("\nResults:");
    println!("  Total hashes: {}", count);
    println!("  Sequential: {:.4e}s", sequential.as_secs_f64());
    println!("  Hashrate: {:.2} H/s", hashrate);
    println!(
        "  Throughput: {:.2} MiB/s",
        total_bytes / sequential.as_secs_f64() / (1024.0 * 1024.0)
    );
    println!(
        "  Batch: {:.4e}s ({:.2} H/s)",
        batched.as_secs_f64(),
        batch_rate
    );

    println!();
    print_params(version);

    Ok(())
}

fn cmd_params(version: Version) -> anyhow::Result<()> {
    print_params(version);
    Ok(())
}

fn print_params(version: Version) {
    let padding = match version.padding() {
        Padding::Zero => "zero",
        Padding::Octopad => "octopad",
    };
    let [a, b, c, d] = algorithm::INITIAL_FACTORS;

    println!("Algorithm parameters ({}):", version);
    println!("  Block size: {} bytes", algorithm::BLOCK_SIZE);
    println!("  Chunk size: {} bytes", algorithm::CHUNK_SIZE);
    println!("  Portion size: {} bytes", algorithm::PORTION_SIZE);
    println!("  Rounds per portion: {}", algorithm::ROUNDS);
    println!("  Rounds per block: {}", algorithm::ROUNDS_PER_BLOCK);
    println!("  Round primes: {}", version.round_primes().len());
    println!("  Padding: {}", padding);
    println!(
        "  Initial factors: {:#06x} {:#06x} {:#06x} {:#06x}",
        a, b, c, d
    );
    println!("  Digest size: {} bytes", algorithm::DIGEST_SIZE);
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    fn parse_hash(line: &str) -> HashArgs {
        match Cli::try_parse_from(line.split(' ')).unwrap().command {
            Commands::Hash(args) => args,
            _ => panic!("expected hash command"),
        }
    }

    #[test]
    fn test_parse_hash_options() {
        let args = parse_hash("poxhash hash -a v1 -d sex -d quad --unit ms -j a b");
        assert_eq!(args.inputs, vec!["a", "b"]);
        assert!(args.join);
        assert_eq!(args.digests, vec![DigestKind::Sex, DigestKind::Quad]);
        assert_eq!(args.units, vec![TimeUnit::Ms]);
        assert_eq!(args.algorithm, Version::V1);
    }

    #[test]
    fn test_hash_text_output() {
        let args = parse_hash("poxhash hash -e abcdefghijk int=97,98,99");
        let out = run_hash(&args).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "PoxHash v2 | 2 message(s)");
        assert_eq!(lines[1], "Arg: abcdefghijk");
        assert_eq!(lines[2], "Hexdigest: 39CCDFC644E439F4");
        assert_eq!(lines[4], "Arg: int=97,98,99");
        assert_eq!(
            lines[5],
            format!("Hexdigest: {}", poxhash::hash(b"abc").hexdigest)
        );
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn test_hash_json_with_benchmark_is_valid_json() {
        let args = parse_hash("poxhash hash --json -b abc");
        let out = run_hash(&args).unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        let hex = poxhash::hash(b"abc").hexdigest;
        assert_eq!(json["digests"][0]["version"], "v2");
        assert_eq!(json["digests"][0]["digests"]["hex"], hex.as_str());
        assert_eq!(json["timing"]["messages"], 1);
        assert!(json["timing"]["elapsed"]["us"].is_f64());
    }

    #[test]
    fn test_hash_json_benchmark_only() {
        let args = parse_hash("poxhash hash --json --benchmark-only --unit ns a b");
        let out = run_hash(&args).unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["digests"], serde_json::json!([]));
        assert_eq!(json["timing"]["messages"], 2);
        assert!(json["timing"]["elapsed"]["ns"].is_f64());
    }

    #[test]
    fn test_hash_reports_bad_input() {
        let args = parse_hash("poxhash hash int=0x100");
        let err = run_hash(&args).unwrap_err();
        assert!(format!("{:#}", err).contains("invalid input `int=0x100`"));
    }

    #[test]
    fn test_hash_requires_input() {
        let missing = Cli::try_parse_from(["poxhash", "hash"]);
        assert!(missing.is_err());
        let unknown_version = Cli::try_parse_from(["poxhash", "hash", "-a", "v3", "x"]);
        assert!(unknown_version.is_err());
    }

    #[test]
    fn test_bench_messages_are_distinct() {
        let messages = bench_messages(4, 16);
        assert_eq!(messages.len(), 4);
        assert!(messages.iter().all(|m| m.len() == 16));
        assert_ne!(messages[0], messages[1]);
        assert_ne!(messages[2], messages[3]);
    }
}
