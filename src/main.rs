//! QB passing-stats extraction CLI

use clap::{Parser, Subcommand};
use qb_scrape::{Config, Result};

#[derive(Parser)]
#[command(name = "qb-scrape")]
#[command(about = "Extract NFL quarterback passing statistics to a flat file", long_about = None)]
struct Cli {
    /// Config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the configured seasons
    Run {
        /// Override the configured seasons (comma-separated years)
        #[arg(long, value_delimiter = ',')]
        seasons: Option<Vec<String>>,
        /// Override the per-season row budget
        #[arg(long)]
        budget: Option<usize>,
        /// Override the output file path
        #[arg(long)]
        output: Option<String>,
    },
    /// Write a default config file
    Init,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    // Load or create config
    let config = if std::path::Path::new(&cli.config).exists() {
        match Config::load(&cli.config) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        Config::default()
    };

    let result = match cli.command {
        Commands::Run {
            seasons,
            budget,
            output,
        } => commands::run(config, seasons, budget, output),
        Commands::Init => commands::init(&cli.config),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

mod commands {
    use super::*;
    use qb_scrape::driver;
    use qb_scrape::fetch::PassingPageFetcher;
    use qb_scrape::sink::CsvSink;

    pub fn run(
        mut config: Config,
        seasons: Option<Vec<String>>,
        budget: Option<usize>,
        output: Option<String>,
    ) -> Result<()> {
        if let Some(seasons) = seasons {
            config.scrape.seasons = seasons;
        }
        if let Some(budget) = budget {
            config.scrape.row_budget = budget;
        }
        if let Some(output) = output {
            config.output.path = output;
        }
        config.validate()?;

        let fetcher = PassingPageFetcher::new();
        let mut sink = CsvSink::create(&config.output.path, config.output.delimiter)?;

        let total = driver::run(&config, &fetcher, &mut sink)?;
        println!("Wrote {} records to {}", total, config.output.path);

        Ok(())
    }

    pub fn init(config_path: &str) -> Result<()> {
        let config = Config::default();
        config.save(config_path)?;
        println!("Created default config at {}", config_path);
        println!("\nNext steps:");
        println!("  1. Edit {} to choose seasons and output", config_path);
        println!("  2. Run 'qb-scrape run' to extract the data");
        Ok(())
    }
}
