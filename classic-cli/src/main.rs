#![deny(missing_docs)]
//! A command-line interface for the classical cipher toolkit.

use clap::{Args, Parser, Subcommand};
use classic_core::ciphers::{affine, caesar, hill, playfair};
use classic_core::{
    AffineKey, CipherError, HillKeyInput, Matrix2x2, PlayfairKeySquare,
    crack_hill_key_known_plaintext,
};
use log::{error, info};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "EXAMPLES:\n  \n# Caesar shift by 3\nclassic-cli caesar encrypt --shift 3 \"Hello, World!\"\n\n# Affine with a=17, b=20\nclassic-cli affine decrypt -a 17 -b 20 \"UBBAHK CAPJKX\"\n\n# Playfair, reading from a file\nclassic-cli playfair encrypt --key MONARCHY --input ./message.txt --output ./message.enc\n\n# Hill with a string or matrix key\nclassic-cli hill encrypt --key HILL \"short example\"\nclassic-cli hill decrypt --matrix 7,8,11,11 APADJTFTWLFJ\n\n# Recover a Hill key from known plaintext\nclassic-cli hill crack --plaintext \"short example\" --ciphertext APADJTFTWLFJ"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Caesar shift cipher
    Caesar {
        #[command(subcommand)]
        command: CaesarCommands,
    },
    /// Affine cipher, E(x) = (a*x + b) mod 26
    Affine {
        #[command(subcommand)]
        command: AffineCommands,
    },
    /// Playfair 5x5 key-square cipher
    Playfair {
        #[command(subcommand)]
        command: PlayfairCommands,
    },
    /// 2x2 Hill cipher and its known-plaintext attack
    Hill {
        #[command(subcommand)]
        command: HillCommands,
    },
}

/// Where the text comes from and where the result goes.
#[derive(Args)]
struct TextArgs {
    /// Text to process. If omitted, --input or stdin is used.
    #[arg()]
    text: Option<String>,

    /// Read the text from this file instead.
    #[arg(short, long, value_name = "INPUT_FILE", conflicts_with = "text")]
    input: Option<PathBuf>,

    /// Write the result to this file instead of stdout.
    #[arg(short, long, value_name = "OUTPUT_FILE")]
    output: Option<PathBuf>,
}

#[derive(Subcommand)]
enum CaesarCommands {
    /// Shift letters forward
    Encrypt(CaesarArgs),
    /// Shift letters back
    Decrypt(CaesarArgs),
}

#[derive(Args)]
struct CaesarArgs {
    /// The shift; any integer, reduced mod 26.
    #[arg(short, long, allow_negative_numbers = true)]
    shift: i64,

    #[command(flatten)]
    io: TextArgs,
}

#[derive(Subcommand)]
enum AffineCommands {
    /// Encrypt with E(x) = (a*x + b) mod 26
    Encrypt(AffineArgs),
    /// Decrypt with D(y) = a^-1 * (y - b) mod 26
    Decrypt(AffineArgs),
}

#[derive(Args)]
struct AffineArgs {
    /// Multiplier; must be coprime with 26.
    #[arg(short, allow_negative_numbers = true)]
    a: i64,

    /// Offset.
    #[arg(short, allow_negative_numbers = true)]
    b: i64,

    #[command(flatten)]
    io: TextArgs,
}

#[derive(Subcommand)]
enum PlayfairCommands {
    /// Encrypt, inserting X fillers as needed
    Encrypt(PlayfairArgs),
    /// Decrypt; the letter count must be even
    Decrypt(PlayfairArgs),
    /// Print the 5x5 key square for a key
    Square {
        /// The Playfair key (letters only).
        #[arg(short, long)]
        key: String,
    },
}

#[derive(Args)]
struct PlayfairArgs {
    /// The Playfair key (letters only).
    #[arg(short, long)]
    key: String,

    #[command(flatten)]
    io: TextArgs,
}

#[derive(Subcommand)]
#[command(
    after_help = "EXAMPLES:\n  \n# String key, row-major\nclassic-cli hill encrypt --key HILL \"short example\"\n\n# Matrix key [[7,8],[11,11]]\nclassic-cli hill encrypt --matrix 7,8,11,11 \"short example\""
)]
enum HillCommands {
    /// Encrypt; output is letters-only uppercase
    Encrypt(HillArgs),
    /// Decrypt; the letter count must be even
    Decrypt(HillArgs),
    /// Recover the key from aligned plaintext and ciphertext
    Crack {
        /// The known plaintext.
        #[arg(long)]
        plaintext: String,

        /// The ciphertext matching the known plaintext.
        #[arg(long)]
        ciphertext: String,

        /// Write the recovered key (JSON) to this file instead of stdout.
        #[arg(short, long, value_name = "OUTPUT_FILE")]
        output: Option<PathBuf>,
    },
}

#[derive(Args)]
struct HillArgs {
    /// Four-letter key, e.g. HILL.
    #[arg(short, long, required_unless_present = "matrix", conflicts_with = "matrix")]
    key: Option<String>,

    /// Matrix key as four comma-separated integers, row-major: a,b,c,d.
    #[arg(short, long, value_delimiter = ',', allow_hyphen_values = true)]
    matrix: Option<Vec<i64>>,

    #[command(flatten)]
    io: TextArgs,
}

impl HillArgs {
    fn key_input(&self) -> Result<HillKeyInput, CipherError> {
        match (&self.key, &self.matrix) {
            (_, Some(m)) => match m.as_slice() {
                &[a, b, c, d] => Ok(Matrix2x2::new(a, b, c, d).into()),
                other => Err(CipherError::InvalidKey(format!(
                    "Hill matrix key must have exactly 4 entries. Got {}.",
                    other.len()
                ))),
            },
            (Some(k), None) => Ok(k.as_str().into()),
            (None, None) => Err(CipherError::InvalidKey(
                "Either --key or --matrix is required.".into(),
            )),
        }
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Caesar { command } => match command {
            CaesarCommands::Encrypt(args) => {
                let text = read_text(&args.io);
                finish(args.io.output.as_deref(), Ok(caesar::encrypt(&text, args.shift)));
            }
            CaesarCommands::Decrypt(args) => {
                let text = read_text(&args.io);
                finish(args.io.output.as_deref(), Ok(caesar::decrypt(&text, args.shift)));
            }
        },
        Commands::Affine { command } => {
            let (args, result) = match command {
                AffineCommands::Encrypt(args) => {
                    let key = AffineKey { a: args.a, b: args.b };
                    (args, affine::encrypt(&read_text(&args.io), &key))
                }
                AffineCommands::Decrypt(args) => {
                    let key = AffineKey { a: args.a, b: args.b };
                    (args, affine::decrypt(&read_text(&args.io), &key))
                }
            };
            finish(args.io.output.as_deref(), result);
        }
        Commands::Playfair { command } => match command {
            PlayfairCommands::Encrypt(args) => {
                let text = read_text(&args.io);
                finish(args.io.output.as_deref(), playfair::encrypt(&text, &args.key));
            }
            PlayfairCommands::Decrypt(args) => {
                let text = read_text(&args.io);
                finish(args.io.output.as_deref(), playfair::decrypt(&text, &args.key));
            }
            PlayfairCommands::Square { key } => {
                let square = PlayfairKeySquare::new(key).map(|s| s.to_string());
                finish(None, square);
            }
        },
        Commands::Hill { command } => match command {
            HillCommands::Encrypt(args) => {
                let text = read_text(&args.io);
                let result = args.key_input().and_then(|key| hill::encrypt(&text, &key));
                finish(args.io.output.as_deref(), result);
            }
            HillCommands::Decrypt(args) => {
                let text = read_text(&args.io);
                let result = args.key_input().and_then(|key| hill::decrypt(&text, &key));
                finish(args.io.output.as_deref(), result);
            }
            HillCommands::Crack {
                plaintext,
                ciphertext,
                output,
            } => {
                let recovered = crack_hill_key_known_plaintext(plaintext, ciphertext);
                if let Ok(key) = &recovered {
                    info!("Recovered Hill key '{}'", key.key_string);
                }
                let rendered = recovered.map(|key| {
                    serde_json::to_string_pretty(&key).unwrap_or_else(|e| {
                        error!("Failed to serialize recovered key: {e}");
                        std::process::exit(1);
                    })
                });
                finish(output.as_deref(), rendered);
            }
        },
    }
}

/// Text from the positional argument, then `--input`, then stdin.
fn read_text(io: &TextArgs) -> String {
    if let Some(text) = &io.text {
        return text.clone();
    }
    if let Some(path) = &io.input {
        return fs::read_to_string(path).unwrap_or_else(|e| {
            error!("Failed to read input file '{}': {e}", path.display());
            std::process::exit(1);
        });
    }
    let mut buffer = String::new();
    if let Err(e) = std::io::stdin().read_to_string(&mut buffer) {
        error!("Failed to read from stdin: {e}");
        std::process::exit(1);
    }
    buffer
}

/// Prints or writes a successful result; logs the failure and exits otherwise.
fn finish(output: Option<&Path>, result: Result<String, CipherError>) {
    let text = result.unwrap_or_else(|e| {
        error!("{e}");
        std::process::exit(1);
    });

    match output {
        Some(path) => {
            if let Err(e) = fs::write(path, &text) {
                error!("Failed to write output file '{}': {e}", path.display());
                std::process::exit(1);
            }
            info!("Result written to '{}'", path.display());
        }
        None => println!("{text}"),
    }
}
