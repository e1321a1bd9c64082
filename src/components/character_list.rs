use super::{CharacterProps, CharacterView};
use crate::data::Character;
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct CharacterListProps {
	pub characters: Vec<Character>,
}

/// Builds the props of one [`CharacterView`] per character, in roster order.
pub fn character_views(characters: &[Character]) -> Vec<CharacterProps> {
	characters.iter().map(CharacterProps::from).collect()
}

/// The text written to the console by the debug button.
pub fn debug_report(views: &[CharacterProps]) -> String {
	format!("{} character views: {views:?}", views.len())
}

#[function_component]
pub fn CharacterList(CharacterListProps { characters }: &CharacterListProps) -> Html {
	let views = character_views(characters);

	let onclick = Callback::from({
		let views = views.clone();
		move |_: MouseEvent| {
			log::info!(target: "character_list", "{}", debug_report(&views));
		}
	});

	html! {
		<div class="character-wrapper">
			{views.into_iter().map(|props| html!(<CharacterView ..props />)).collect::<Html>()}
			<button type="button" class="btn btn-outline-secondary" {onclick}>{"Debug"}</button>
		</div>
	}
}
