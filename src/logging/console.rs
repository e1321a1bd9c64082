use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Routes log records to the terminal and to `{name}.log` in `dir`.
/// Targets starting with any of the `ignore` prefixes are dropped.
pub fn init(dir: &Path, name: &str, ignore: &[&'static str]) -> Result<PathBuf> {
	use simplelog::*;
	std::fs::create_dir_all(dir)?;
	let log_path = dir.join(format!("{name}.log"));
	let file = std::fs::File::create(&log_path)
		.with_context(|| format!("Failed to create log file {}", log_path.display()))?;
	let cfg = {
		let mut builder = ConfigBuilder::new();
		builder
			.set_max_level(LevelFilter::Error)
			.set_time_format_custom(format_description!(
				"[year].[month].[day]-[hour].[minute].[second]"
			))
			// [ERROR]
			// [ INFO]
			.set_level_padding(LevelPadding::Left)
			.set_thread_level(LevelFilter::Off)
			// Every line names the target that wrote it
			.set_target_level(LevelFilter::Error)
			.set_location_level(LevelFilter::Off);
		for prefix in ignore {
			builder.add_filter_ignore_str(prefix);
		}
		builder.build()
	};
	CombinedLogger::init(vec![
		TermLogger::new(LevelFilter::Info, cfg.clone(), TerminalMode::Stderr, ColorChoice::Auto),
		WriteLogger::new(LevelFilter::Trace, cfg, file),
	])
	.context("A logger is already installed")?;
	log::info!(target: "logging", "Writing log to {}", log_path.display());
	Ok(log_path)
}
