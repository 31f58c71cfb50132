use clap::Parser;
use inventory_common::Dataset;
use inventory_desk::{cli, config, error, preview};
use cli::{Cli, Commands};
use config::Config;
use error::Result;

fn init_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);
    let mut config = Config::load()?;
    let format = cli.output.unwrap_or(config.output);

    match cli.command {
        Commands::Contacts { file } => {
            let path = config.resolve_data_file(file)?;
            let dataset = Dataset::from_file(&path)?;
            println!("{}", preview::render_contacts(&dataset.contacts, format)?);
        }

        Commands::Catalog { file, category } => {
            let path = config.resolve_data_file(file)?;
            let dataset = Dataset::from_file(&path)?;
            let catalog = dataset.catalog();
            println!("{}", preview::render_catalog(&catalog, category.as_deref(), format)?);
        }

        Commands::Products { file } => {
            let path = config.resolve_data_file(file)?;
            let dataset = Dataset::from_file(&path)?;
            let catalog = dataset.catalog();
            println!("{}", preview::render_products(&catalog, &dataset.products, format)?);
        }

        Commands::Config { show, set_data_file, set_output } => {
            let mut changed = false;
            if let Some(path) = set_data_file {
                config.data_file = Some(path);
                changed = true;
            }
            if let Some(output) = set_output {
                config.output = output;
                changed = true;
            }
            if changed {
                config.save()?;
                println!("✔ 設定を保存しました: {}", Config::config_path()?.display());
            }
            if show || !changed {
                println!("{}", serde_json::to_string_pretty(&config)?);
            }
        }
    }

    Ok(())
}
