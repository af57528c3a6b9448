use anyhow::{bail, Context, Result};
use clap::Parser;
use paper_diary::config::Config;
use paper_diary::logging::init_tracing;
use paper_diary::store::AppStore;
use paper_diary::ui::app::App;
use paper_diary::ui::profile::validate_name;
use paper_diary::ui::runtime;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "paper-diary", version, about = "A two-screen terminal diary")]
struct Cli {
    /// Path to the config file (default: <config dir>/paper-diary/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Display name to start with
    #[arg(long, value_name = "NAME")]
    name: Option<String>,

    /// Start with every diary entry listed
    #[arg(long)]
    show_all: bool,
}

fn main() {
    if let Err(err) = try_main() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn try_main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&config_path)?;
    if cli.show_all {
        config.diary.show_all = true;
    }

    let store = AppStore::new();
    if let Some(raw) = cli.name.as_deref() {
        let Some(name) = validate_name(raw) else {
            bail!("Display name must not be blank");
        };
        store.set_user_name(name);
    }

    let app = App::new(&config, &store).context("Failed to mount screens")?;
    runtime::run(app, &config).context("Terminal UI failed")?;
    Ok(())
}
