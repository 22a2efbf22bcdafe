use anyhow::{Context, Result};
use clap::Parser;
use ic_app::Convertor;

mod cli;

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Config : fichier puis overrides CLI
    let config = cli.resolve_config()?;
    log::debug!("Configuration : {config:?}");

    // 4. Valider et charger image + police
    let convertor = Convertor::builder()
        .image_path(&cli.input)
        .output_path(&cli.output)
        .config(config)
        .build()
        .with_context(|| format!("Conversion impossible de {}", cli.input.display()))?;

    // 5. Convertir
    let output = convertor.convert()?;
    println!("{}", output.display());
    Ok(())
}
