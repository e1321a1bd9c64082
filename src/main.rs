#[cfg(target_family = "wasm")]
fn main() {
	use character_roster::{logging, page};
	logging::wasm::init(logging::wasm::Config::default().with_level(log::Level::Info));
	yew::Renderer::<page::App>::new().render();
}

#[cfg(not(target_family = "wasm"))]
fn main() -> anyhow::Result<()> {
	use anyhow::Context;
	use character_roster::{
		data::{Initiative, Roster},
		logging,
	};

	logging::console::init(&std::env::current_dir()?, "character-roster", &[])?;

	let roster = Roster::bundled().context("Failed to load the bundled roster")?;
	log::info!(target: "roster", "Loaded {} characters", roster.characters.len());

	if roster.is_empty() {
		println!("Initiative order is empty");
		return Ok(());
	}
	for character in Initiative::new(&roster.characters).order() {
		print!("{character}");
	}
	Ok(())
}
