// src/bin/prefcrypt.rs
//! prefcrypt CLI: encrypt/decrypt single values from the shell

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use prefcrypt::config::{self, Config};
use prefcrypt::key_ops::{generate_key, key_representations};
use prefcrypt::{CipherEngine, CipherMode, KeyPolicy};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "prefcrypt", version, about = "Encrypt and decrypt stored text values")]
struct Cli {
    #[command(flatten)]
    key: KeyArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct KeyArgs {
    /// 16-byte key string
    #[arg(long, env = "PREFCRYPT_KEY", hide_env_values = true, global = true)]
    key: Option<String>,

    /// Key as 32 hex digits
    #[arg(long, global = true)]
    key_hex: Option<String>,

    /// Device identifier for identity-derived keys
    #[arg(long, global = true, requires = "app_id")]
    device_id: Option<String>,

    /// Application identifier for identity-derived keys
    #[arg(long, global = true, requires = "device_id")]
    app_id: Option<String>,

    /// Cipher mode (defaults to the config file, then cbc)
    #[arg(long, value_enum, global = true)]
    mode: Option<ModeArg>,

    /// Pad or truncate key strings instead of rejecting them
    #[arg(long, global = true)]
    lenient: bool,

    /// Config file (defaults to PREFCRYPT_CONFIG or the platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encrypt TEXT (or stdin) into a Base64 blob
    Encrypt { text: Option<String> },
    /// Decrypt BLOB (or stdin) back to text
    Decrypt { blob: Option<String> },
    /// Re-encrypt a legacy CTR blob as CBC under the same key (ignores --mode)
    Upgrade { blob: Option<String> },
    /// Print a fresh random key
    Keygen,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ModeArg {
    Cbc,
    Ctr,
}

impl From<ModeArg> for CipherMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Cbc => CipherMode::Cbc,
            ModeArg::Ctr => CipherMode::Ctr,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Command::Keygen => {
            let repr = key_representations(&generate_key());
            println!("hex:         {}", repr.hex);
            println!("base64:      {}", repr.base64);
            println!("fingerprint: {}", repr.fingerprint);
        }
        Command::Encrypt { text } => {
            let engine = build_engine(&cli.key)?;
            let text = input_or_stdin(text.as_deref())?;
            println!("{}", engine.encrypt(&text)?);
        }
        Command::Decrypt { blob } => {
            let engine = build_engine(&cli.key)?;
            let blob = input_or_stdin(blob.as_deref())?;
            println!("{}", engine.decrypt(&blob)?);
        }
        Command::Upgrade { blob } => {
            let key = resolve_config(&cli.key)?
                .symmetric_key()
                .context("could not derive the key")?;
            let blob = input_or_stdin(blob.as_deref())?;
            let upgraded = prefcrypt::upgrade_legacy(&key, &blob)?;
            info!(key = %key.fingerprint(), "upgraded legacy blob to cbc");
            println!("{upgraded}");
        }
    }

    Ok(())
}

/// Command-line key options layered over the config file
fn resolve_config(args: &KeyArgs) -> Result<Config> {
    let path = args.config.clone().unwrap_or_else(config::config_path);
    let mut conf = config::load_from(&path)
        .with_context(|| format!("failed to load config from {}", path.display()))?;

    if let Some(key) = &args.key {
        conf = conf.with_key_override(Some(key.clone()));
    }
    if let Some(key_hex) = &args.key_hex {
        conf.key.secret_hex = Some(key_hex.clone());
    }
    if let (Some(device_id), Some(app_id)) = (&args.device_id, &args.app_id) {
        conf.key.secret = None;
        conf.key.secret_hex = None;
        conf.key.device_id = Some(device_id.clone());
        conf.key.app_id = Some(app_id.clone());
    }
    if let Some(mode) = args.mode {
        conf.cipher.mode = mode.into();
    }
    if args.lenient {
        conf.cipher.key_policy = KeyPolicy::Lenient;
    }
    Ok(conf)
}

fn build_engine(args: &KeyArgs) -> Result<CipherEngine> {
    let engine = resolve_config(args)?
        .engine()
        .context("could not build a cipher engine")?;
    info!(mode = engine.mode().as_str(), key = %engine.key_fingerprint(), "engine ready");
    Ok(engine)
}

fn input_or_stdin(arg: Option<&str>) -> Result<String> {
    match arg {
        Some(value) => Ok(value.to_owned()),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            Ok(buffer.trim_end_matches(['\n', '\r']).to_owned())
        }
    }
}
