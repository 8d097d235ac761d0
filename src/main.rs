mod args;
mod hex;

use args::{Cli, Commands};
use clap::Parser;
use log::{debug, info};

use std::fs;
use std::process::ExitCode;
use std::time::Instant;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("invalid hex: {0}")]
    Hex(#[from] hex::HexError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Aes(#[from] aes128::Error),
}

fn main() -> ExitCode {
    env_logger::init();

    match aes_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn aes_cli() -> Result<(), CliError> {
    let args = Cli::parse();

    match args.command {
        Commands::Encrypt(enc) => {
            let common = enc.common; // move ownership

            // read plaintext from input path
            let plaintext = fs::read(&common.input)?;

            // read or generate key
            let key = if enc.gen_key {
                let rand_key = aes128::Key::random()?;
                fs::write(&common.key, hex::encode_key(rand_key.as_bytes()) + "\n")?;
                info!("wrote new key to {}", common.key.display());
                rand_key
            } else {
                let key_text = fs::read_to_string(&common.key)?;
                aes128::Key::from(hex::decode_key(&key_text)?)
            };

            let start = Instant::now();

            let cipher = aes128::Cipher::new(&key);
            let ciphertext = cipher.encrypt_ecb(&plaintext);

            let duration = start.elapsed();
            debug!("padded {} bytes to {}", plaintext.len(), ciphertext.len());

            fs::write(&common.output, hex::encode(&ciphertext))?;
            println!(
                "Encrypted {} bytes in {} ms, ciphertext written to {}",
                plaintext.len(),
                duration.as_millis(),
                common.output.display()
            );
            Ok(())
        }
        Commands::Decrypt(dec) => {
            let common = dec.common;

            // read inputs
            let ciphertext = hex::decode(&fs::read_to_string(&common.input)?)?;
            let key = aes128::Key::from(hex::decode_key(&fs::read_to_string(&common.key)?)?);

            let start = Instant::now();

            let cipher = aes128::Cipher::new(&key);
            let padded = cipher.decrypt_ecb(&ciphertext)?;
            let plaintext = if dec.keep_padding {
                &padded[..]
            } else {
                aes128::strip_zero_padding(&padded)
            };

            let duration = start.elapsed();

            fs::write(&common.output, plaintext)?;
            println!(
                "Decrypted {} bytes in {} ms, message written to {}",
                plaintext.len(),
                duration.as_millis(),
                common.output.display()
            );
            Ok(())
        }
    }
}
