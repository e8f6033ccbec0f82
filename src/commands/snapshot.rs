use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use ritrends::analytics::Analyzer;
use ritrends::config::Config;

use super::FilterArgs;

pub fn snapshot(config: &Config, args: &FilterArgs, output: Option<&Path>) -> Result<()> {
    let reports = args.load()?;
    let analyzer = Analyzer::from_config(config);
    let snapshot = analyzer.snapshot(&reports, &args.filter(), chrono::Utc::now());

    let path = match output {
        Some(path) if path.is_dir() => path.join(snapshot.file_name()),
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(snapshot.file_name()),
    };

    let json = snapshot.to_json_pretty()?;
    std::fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::info!(
        path = %path.display(),
        total = snapshot.total,
        bins = snapshot.five_year_top_keywords.len(),
        "Snapshot exported"
    );
    println!("{}", path.display());

    Ok(())
}
