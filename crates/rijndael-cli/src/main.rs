//! Command-line interface for `rijndael-core`.

#![forbid(unsafe_code)]

mod hexio;

use anyhow::{bail, Result};
use clap::{ArgAction, Parser, Subcommand};
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use rijndael_core::{Block, CipherKey, Direction, KeySize, Rijndael, Step, TraceLine};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::hexio::{parse_block_hex, parse_key_hex};

/// Rijndael (AES) single-block CLI.
#[derive(Parser)]
#[command(
    name = "rijndael",
    version,
    about = "Rijndael (AES-128/192/256) single-block cipher with FIPS-197 round traces"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). `RUST_LOG` wins.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt one block.
    Encrypt {
        /// Key as 32, 48 or 64 hex characters.
        #[arg(long, value_name = "HEX")]
        key: String,
        /// Plaintext block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        block: String,
        /// Print every intermediate state before the result.
        #[arg(long, default_value_t = false)]
        trace: bool,
    },
    /// Decrypt one block.
    Decrypt {
        /// Key as 32, 48 or 64 hex characters.
        #[arg(long, value_name = "HEX")]
        key: String,
        /// Ciphertext block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        block: String,
        /// Print every intermediate state before the result.
        #[arg(long, default_value_t = false)]
        trace: bool,
    },
    /// Print the expanded key schedule, one round key per line.
    Schedule {
        /// Key as 32, 48 or 64 hex characters.
        #[arg(long, value_name = "HEX")]
        key: String,
    },
    /// Run the FIPS-197 Appendix C vectors in both directions.
    Vectors {
        /// Print the full round trace for every vector.
        #[arg(long, default_value_t = false)]
        trace: bool,
    },
    /// Round-trip random blocks under random keys of every size.
    Demo {
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
        /// Blocks per key size.
        #[arg(long, default_value_t = 4)]
        samples: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.command {
        Commands::Encrypt { key, block, trace } => cmd_encrypt(&key, &block, trace),
        Commands::Decrypt { key, block, trace } => cmd_decrypt(&key, &block, trace),
        Commands::Schedule { key } => cmd_schedule(&key),
        Commands::Vectors { trace } => cmd_vectors(trace),
        Commands::Demo { seed, samples } => cmd_demo(seed, samples),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_encrypt(key_hex: &str, block_hex: &str, trace: bool) -> Result<()> {
    let key = parse_key_hex(key_hex)?;
    let block = parse_block_hex(block_hex)?;
    let ct = encrypt(&key, &block, trace);
    println!("{}", hex::encode(ct));
    Ok(())
}

fn cmd_decrypt(key_hex: &str, block_hex: &str, trace: bool) -> Result<()> {
    let key = parse_key_hex(key_hex)?;
    let block = parse_block_hex(block_hex)?;
    let pt = decrypt(&key, &block, trace);
    println!("{}", hex::encode(pt));
    Ok(())
}

fn cmd_schedule(key_hex: &str) -> Result<()> {
    let key = parse_key_hex(key_hex)?;
    let cipher = Rijndael::from_key(&key);
    let schedule = cipher.schedule();
    println!("{}", size_header(key.size()));
    for round in 0..=schedule.rounds() {
        let words: String = schedule
            .round_key(round)
            .iter()
            .map(|word| format!("{word:08x}"))
            .collect();
        println!("{round:2}). {words}");
    }
    Ok(())
}

const PLAINTEXT: &str = "00112233445566778899aabbccddeeff";

const VECTORS: [(&str, &str); 3] = [
    (
        "000102030405060708090a0b0c0d0e0f",
        "69c4e0d86a7b0430d8cdb78070b4c55a",
    ),
    (
        "000102030405060708090a0b0c0d0e0f1011121314151617",
        "dda97ca4864cdfe06eaf70a0ec0d7191",
    ),
    (
        "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f",
        "8ea2b7ca516745bfeafc49904b496089",
    ),
];

fn cmd_vectors(trace: bool) -> Result<()> {
    let plaintext = parse_block_hex(PLAINTEXT)?;
    let mut failures = 0usize;

    for (key_hex, expected_hex) in VECTORS {
        let key = parse_key_hex(key_hex)?;
        let expected = parse_block_hex(expected_hex)?;

        println!("{}", size_header(key.size()));
        println!("PLAINTEXT:          {PLAINTEXT}");
        println!("KEY:                {key_hex}");

        let ct = encrypt(&key, &plaintext, trace);
        let pt = decrypt(&key, &expected, trace);
        let ok = ct == expected && pt == plaintext;
        println!(
            "ciphertext: {} ({})",
            hex::encode(ct),
            verdict(ct == expected)
        );
        println!(
            "plaintext:  {} ({})",
            hex::encode(pt),
            verdict(pt == plaintext)
        );
        println!();

        if !ok {
            failures += 1;
        }
        info!(key_bits = key.size().bits(), ok, "checked vector");
    }

    if failures > 0 {
        bail!("{failures} of {} vectors failed", VECTORS.len());
    }
    println!("all {} vectors passed", VECTORS.len());
    Ok(())
}

fn cmd_demo(seed: Option<u64>, samples: usize) -> Result<()> {
    let mut rng = seeded_rng(seed);
    for size in KeySize::ALL {
        let mut key_bytes = vec![0u8; size.bytes()];
        rng.fill_bytes(&mut key_bytes);
        let cipher = Rijndael::new(&key_bytes)?;
        println!("AES-{} key: {}", size.bits(), hex::encode(&key_bytes));

        for _ in 0..samples {
            let block: Block = rng.gen();
            let ct = cipher.encrypt_block(&block);
            let pt = cipher.decrypt_block(&ct);
            println!("  {} -> {}", hex::encode(block), hex::encode(ct));
            if pt != block {
                bail!("demo roundtrip failed for AES-{}", size.bits());
            }
        }
    }
    Ok(())
}

fn encrypt(key: &CipherKey, block: &Block, trace: bool) -> Block {
    let cipher = Rijndael::from_key(key);
    debug!(key_bits = key.size().bits(), trace, "encrypt");
    if trace {
        println!("CIPHER (ENCRYPT):");
        cipher.encrypt_block_with(block, &mut print_line)
    } else {
        cipher.encrypt_block(block)
    }
}

fn decrypt(key: &CipherKey, block: &Block, trace: bool) -> Block {
    let cipher = Rijndael::from_key(key);
    debug!(key_bits = key.size().bits(), trace, "decrypt");
    if trace {
        println!("INVERSE CIPHER (DECRYPT):");
        cipher.decrypt_block_with(block, &mut print_line)
    } else {
        cipher.decrypt_block(block)
    }
}

fn print_line(direction: Direction, round: usize, step: Step, value: &Block) {
    let line = TraceLine {
        direction,
        round,
        step,
        value: *value,
    };
    println!("{line}");
}

fn size_header(size: KeySize) -> String {
    let section = match size {
        KeySize::Aes128 => "C.1",
        KeySize::Aes192 => "C.2",
        KeySize::Aes256 => "C.3",
    };
    format!(
        "{section}   AES-{} (Nk={}, Nr={})",
        size.bits(),
        size.nk(),
        size.nr()
    )
}

fn verdict(ok: bool) -> &'static str {
    if ok {
        "ok"
    } else {
        "MISMATCH"
    }
}

fn seeded_rng(seed: Option<u64>) -> ChaCha20Rng {
    match seed {
        Some(value) => ChaCha20Rng::seed_from_u64(value),
        None => {
            let mut seed_bytes = [0u8; 32];
            rand::rngs::OsRng.fill_bytes(&mut seed_bytes);
            ChaCha20Rng::from_seed(seed_bytes)
        }
    }
}
