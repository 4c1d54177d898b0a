use std::path::PathBuf;
use std::process::ExitCode;
use anyhow::Context;
use clap::{Parser, Subcommand};
use tsx_tileset::{fixture, validate, validate_image_file, TsxWriter, WriterConfig};

/// Checks and writes the test character tileset.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validates the tileset and prints every violation found.
    Check {
        /// Directory holding the tileset image. Enables the image size check.
        #[arg(long)]
        image_dir: Option<PathBuf>,
    },
    /// Writes the tileset as a .tsx file.
    Write {
        /// YAML writer config.
        #[arg(long)]
        config: Option<PathBuf>,
        /// Directory holding the tileset image. Enables the image size check.
        #[arg(long)]
        image_dir: Option<PathBuf>,
        /// Write even if validation fails.
        #[arg(long)]
        force: bool,
        out: PathBuf,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    env_logger::init();
    let cli = Cli::parse();
    let tileset = fixture::test_tileset();

    match cli.command {
        Command::Check { image_dir } => {
            let mut ok = true;
            if let Err(errors) = validate(&tileset) {
                println!("Tileset '{}' is invalid:\n{errors}", tileset.name);
                ok = false;
            }
            if let Some(image_dir) = image_dir {
                if let Err(err) = validate_image_file(&tileset, &image_dir) {
                    println!("{err}");
                    ok = false;
                }
            }
            if ok {
                println!("Tileset '{}' is valid", tileset.name);
                Ok(ExitCode::SUCCESS)
            }
            else {
                Ok(ExitCode::FAILURE)
            }
        },
        Command::Write { config, image_dir, force, out } => {
            let mut config = match config {
                Some(path) => WriterConfig::load(&path)
                    .with_context(|| format!("Failed to load config {}", path.display()))?,
                None => WriterConfig::default(),
            };
            if force {
                config.validate = false;
            }
            if let (Some(image_dir), false) = (image_dir, force) {
                validate_image_file(&tileset, &image_dir)?;
            }
            TsxWriter::new(config)
                .write_file(&tileset, &out)
                .with_context(|| format!("Failed to write {}", out.display()))?;
            Ok(ExitCode::SUCCESS)
        },
    }
}
