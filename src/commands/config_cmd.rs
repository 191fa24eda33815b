//! Show and initialize configuration

use std::path::Path;

use dirtidy::config::Config;
use dirtidy::output::{OperationResult, OutputMode};

use crate::cli::ConfigAction;

/// Print the effective config or its location, or write a default one
pub fn config_cmd(
    action: &ConfigAction,
    config_path: Option<&Path>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let path = Config::resolve_path(config_path);

    match action {
        ConfigAction::Path => {
            if mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "path": path,
                        "exists": path.exists()
                    })
                );
            } else {
                println!("{}", path.display());
            }
        },
        ConfigAction::Show => {
            let config = Config::load(&path)?;
            if mode == OutputMode::Json {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                if !path.exists() {
                    println!("# {} not found, showing defaults", path.display());
                }
                print!("{}", config.to_toml()?);
            }
        },
        ConfigAction::Init { force } => {
            let result = if path.exists() && !force {
                OperationResult {
                    success: false,
                    message: format!(
                        "{} already exists (use --force to overwrite)",
                        path.display()
                    ),
                }
            } else {
                Config::default().save(&path)?;
                log::info!("Wrote default config to {}", path.display());
                OperationResult {
                    success: true,
                    message: format!("Created {}", path.display()),
                }
            };
            result.render(mode);
        },
    }

    Ok(())
}
