use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages;

/// Handle the `init` command
///
/// Creates:
///  - the config directory (if missing)
///  - the YAML configuration file
///  - the submissions fallback directory
pub fn handle(cli: &Cli) -> AppResult<()> {
    println!("⚙️  Initializing CoffeeConnect...");

    let cfg = Config::init_all(cli.fallback_dir.clone(), cli.test)?;

    println!("📄 Config file : {:?}", Config::config_file());
    println!("🗂️  Fallback dir: {:?}", cfg.fallback_path());

    messages::success("🎉 CoffeeConnect initialization completed!");
    Ok(())
}
