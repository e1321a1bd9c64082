use log::Level;

/// Settings for the browser console logger.
#[derive(Clone, Copy, Debug)]
pub struct Config {
	level: Level,
}

impl Default for Config {
	fn default() -> Self {
		Self { level: Level::Debug }
	}
}

impl Config {
	pub fn with_level(mut self, level: Level) -> Self {
		self.level = level;
		self
	}
}

/// Sends log records and panics to the developer console.
pub fn init(config: Config) {
	console_error_panic_hook::set_once();
	if let Err(err) = console_log::init_with_level(config.level) {
		// Some other logger was installed first and keeps receiving records.
		log::warn!(target: "logging", "{err}");
	}
}
