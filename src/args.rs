use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, author, arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encrypt a message file into a hex ciphertext file
    Encrypt(EncryptArgs),

    /// Decrypt a hex ciphertext file into a message file
    Decrypt(DecryptArgs),
}

#[derive(Args, Debug)]
#[command(arg_required_else_help = true)]
pub struct CommonArgs {
    /// Input file path.
    #[arg(short = 'i', long = "input")]
    pub input: PathBuf,

    /// Output file path.
    #[arg(short = 'o', long = "output")]
    pub output: PathBuf,

    /// Key file path. Holds the 16 key bytes as hex, either as one 32-digit token or as
    /// 16 whitespace-separated byte tokens.
    #[arg(short = 'k', long = "key")]
    pub key: PathBuf,
}

#[derive(Args, Debug)]
#[command(arg_required_else_help = true)]
pub struct EncryptArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Generate a random key (written to path specified by key)
    #[arg(long = "gen-key")]
    pub gen_key: bool,
}

#[derive(Args, Debug)]
#[command(arg_required_else_help = true)]
pub struct DecryptArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Keep trailing zero padding in the decrypted output.
    #[arg(long = "keep-padding")]
    pub keep_padding: bool,
}
