use crate::data::{placeholder, Character};
use yew::prelude::*;

#[derive(Clone, PartialEq, Default, Debug, Properties)]
pub struct CharacterProps {
	#[prop_or_default]
	pub name: Option<String>,
	#[prop_or_default]
	pub hp: Option<i32>,
	#[prop_or_default]
	pub ac: Option<i32>,
	#[prop_or_default]
	pub initiative: Option<i32>,
}

impl From<&Character> for CharacterProps {
	fn from(character: &Character) -> Self {
		Self {
			name: character.name.clone(),
			hp: character.hp,
			ac: character.ac,
			initiative: character.initiative,
		}
	}
}

/// Displays each field of a single character behind its label.
/// Missing fields are left blank.
#[function_component]
pub fn CharacterView(
	CharacterProps {
		name,
		hp,
		ac,
		initiative,
	}: &CharacterProps,
) -> Html {
	html! {
		<div class="character">
			<p>{format!("Name: {}", placeholder(name))}</p>
			<p>{format!("HP: {}", placeholder(hp))}</p>
			<p>{format!("AC: {}", placeholder(ac))}</p>
			<p>{format!("Initiative: {}", placeholder(initiative))}</p>
		</div>
	}
}
