use clap::{Parser, Subcommand};
use solar_manifest::{config, manifest, output, snake_case};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "solar-manifest")]
#[command(about = "Build the icon manifest for the Solar icon gallery")]
#[command(long_about = "\
Build the icon manifest for the Solar icon gallery

Run without arguments from the gallery root. Every SVG found at

  icons/solar/<type>/<category>/<name>.svg

is listed in manifest.json, along with the sorted set of types and
categories. Categories starting with sp_ are skipped.

Types scanned: bold, bold_duotone, broken, line_duotone, linear, outline")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Copy a raw icon set into a sibling folder with snake_case names
    SnakeCase {
        /// Directory holding the raw icon set
        source: PathBuf,

        /// Name of the output folder, created next to the source
        #[arg(long, default_value = snake_case::DEFAULT_OUTPUT_FOLDER)]
        output_folder: String,

        /// Perform the copy (default is a dry run)
        #[arg(long)]
        apply: bool,

        /// Delete an existing output folder before copying
        #[arg(long, requires = "apply")]
        force: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(false)
        .without_time()
        .init();

    let cli = Cli::parse();

    match cli.command {
        None => {
            manifest::run(&config::ManifestConfig::default())?;
        }
        Some(Command::SnakeCase {
            source,
            output_folder,
            apply,
            force,
        }) => {
            let plan = snake_case::plan_copy(&source, &output_folder)?;
            if apply {
                let report = snake_case::apply_copy(&plan, force)?;
                output::print_copy_report(&plan, &report);
            } else {
                output::print_copy_plan(&plan);
            }
        }
    }

    Ok(())
}
