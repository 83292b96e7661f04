use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file with the default rule set
pub fn handle(cli: &Cli) -> AppResult<()> {
    println!("⚙️  Initializing rollcall…");

    Config::init_all(cli.test)?;

    let cfg = Config::load();
    println!("📄 Config file : {}", Config::config_file().display());
    println!(
        "📐 Rules       : low<{}h, full≥{}h, late>{}",
        cfg.low_hours_threshold, cfg.full_day_threshold, cfg.late_cutoff
    );

    println!("🎉 rollcall initialization completed!");
    Ok(())
}
