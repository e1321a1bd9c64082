use crate::{
	components::{initiative, CharacterList},
	data::Roster,
};
use yew::prelude::*;

#[function_component]
pub fn App() -> Html {
	let characters = match Roster::bundled() {
		Ok(roster) => roster.characters.clone(),
		Err(err) => {
			log::error!(target: "roster", "{err}");
			Vec::new()
		}
	};

	html! {<>
		<h1>{"Characters"}</h1>
		<CharacterList characters={characters.clone()} />
		<initiative::Provider {characters}>
			<initiative::TurnOrder />
		</initiative::Provider>
	</>}
}

#[cfg(test)]
mod test {
	use super::*;

	#[tokio::test]
	async fn renders_bundled_roster() {
		let html = yew::ServerRenderer::<App>::new().hydratable(false).render().await;
		let roster = Roster::bundled().expect("bundled roster is valid");

		assert!(html.starts_with("<h1>Characters</h1>"));
		assert_eq!(
			html.matches("<div class=\"character\">").count(),
			roster.characters.len()
		);
		assert!(html.contains("<p>Name: Aria</p>"));
		assert_eq!(html.matches("Debug</button>").count(), 1);
		assert!(html.contains("Turn Order"));
	}
}
