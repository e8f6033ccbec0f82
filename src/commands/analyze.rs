use anyhow::{Context, Result};
use std::path::Path;

use ritrends::analytics::Analyzer;
use ritrends::config::Config;

use super::FilterArgs;

pub fn analyze(config: &Config, args: &FilterArgs, output: Option<&Path>, pretty: bool) -> Result<()> {
    let reports = args.load()?;
    let analyzer = Analyzer::from_config(config);
    let dashboard = analyzer.analyze(&reports, &args.filter());

    if let Some(insufficient) = &dashboard.rising.insufficient {
        tracing::warn!(reason = %insufficient, "Rising keywords unavailable");
    }
    if let Some(insufficient) = &dashboard.burst.insufficient {
        tracing::warn!(reason = %insufficient, "Burst keywords unavailable");
    }

    let json = if pretty {
        serde_json::to_string_pretty(&dashboard)?
    } else {
        serde_json::to_string(&dashboard)?
    };

    match output {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), total = dashboard.total, "Dashboard written");
        }
        None => println!("{json}"),
    }

    Ok(())
}
