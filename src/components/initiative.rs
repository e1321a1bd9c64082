use crate::data::{Character, Initiative};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct ProviderProps {
	pub characters: Vec<Character>,
	#[prop_or_default]
	pub children: Children,
}

/// Shares the turn order of `characters` with every [TurnOrder] below it.
#[function_component]
pub fn Provider(ProviderProps { characters, children }: &ProviderProps) -> Html {
	let context = Context::from(use_reducer({
		let characters = characters.clone();
		move || Initiative::new(&characters)
	}));
	use_effect_with(characters.clone(), {
		let context = context.clone();
		move |characters: &Vec<Character>| {
			context.dispatch(Action::Reset(characters.clone()));
		}
	});
	html! {
		<ContextProvider<Context> {context}>
			{children.clone()}
		</ContextProvider<Context>>
	}
}

/// Dispatches [Action]s to the shared [Initiative].
#[derive(Clone, PartialEq)]
pub struct Context(UseReducerHandle<Initiative>);
impl From<UseReducerHandle<Initiative>> for Context {
	fn from(value: UseReducerHandle<Initiative>) -> Self {
		Self(value)
	}
}
impl Context {
	pub fn callback<T, F>(&self, fn_action: F) -> Callback<T, ()>
	where
		F: Fn(T) -> Action + 'static,
	{
		let handle = self.0.clone();
		Callback::from(move |input: T| {
			handle.dispatch(fn_action(input));
		})
	}

	pub fn dispatch(&self, action: Action) {
		self.0.dispatch(action);
	}
}
impl std::ops::Deref for Context {
	type Target = Initiative;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

#[derive(Clone, PartialEq, Debug)]
pub enum Action {
	/// Move to the next character, wrapping to the top.
	Advance,
	/// Go back to the first character.
	Top,
	/// Rebuild the order from a new set of characters, starting at the top.
	Reset(Vec<Character>),
}

impl Reducible for Initiative {
	type Action = Action;

	fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
		let mut initiative = (*self).clone();
		match action {
			Action::Advance => initiative.advance(),
			Action::Top => initiative.top(),
			Action::Reset(characters) => {
				let reset = Initiative::new(&characters);
				if reset.order() == self.order() {
					return self;
				}
				log::debug!(target: "initiative", "Order rebuilt with {} characters", reset.order().len());
				return Rc::new(reset);
			}
		}
		if let Some(character) = initiative.current() {
			log::debug!(target: "initiative", "{}'s turn", character.name_or_blank());
		}
		Rc::new(initiative)
	}
}

#[function_component]
pub fn TurnOrder() -> Html {
	let Some(initiative) = use_context::<Context>() else {
		return html!();
	};
	if initiative.is_empty() {
		return html!(<div class="initiative">{"Initiative order is empty"}</div>);
	}

	let on_next = initiative.callback(|_: MouseEvent| Action::Advance);
	let on_top = initiative.callback(|_: MouseEvent| Action::Top);
	let entries = initiative
		.order()
		.iter()
		.enumerate()
		.map(|(idx, character)| {
			let mut classes = classes!("list-group-item");
			if initiative.current_index() == Some(idx) {
				classes.push("active");
			}
			html! {
				<li class={classes}>{character.name_or_blank().to_owned()}</li>
			}
		})
		.collect::<Vec<_>>();

	html! {
		<div class="initiative">
			<h2>{"Turn Order"}</h2>
			<ol class="list-group list-group-numbered">
				{entries}
			</ol>
			<div class="btn-group mt-2">
				<button type="button" class="btn btn-primary" onclick={on_next}>{"Next"}</button>
				<button type="button" class="btn btn-outline-primary" onclick={on_top}>{"Top"}</button>
			</div>
		</div>
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[derive(Clone, PartialEq, Properties)]
	struct FixtureProps {
		characters: Vec<Character>,
	}

	#[function_component]
	fn Fixture(FixtureProps { characters }: &FixtureProps) -> Html {
		html! {
			<Provider characters={characters.clone()}>
				<TurnOrder />
			</Provider>
		}
	}

	async fn render(characters: Vec<Character>) -> String {
		yew::ServerRenderer::<Fixture>::with_props(move || FixtureProps { characters })
			.hydratable(false)
			.render()
			.await
	}

	#[test]
	fn reduce_advances_and_resets() {
		let characters = vec![Character::new("Aria", 12, 15, 3), Character::new("Sable", 9, 13, 17)];
		let initiative = Rc::new(Initiative::new(&characters));
		let initiative = initiative.reduce(Action::Advance);
		assert_eq!(initiative.current().map(Character::name_or_blank), Some("Aria"));
		let initiative = initiative.reduce(Action::Top);
		assert_eq!(initiative.current().map(Character::name_or_blank), Some("Sable"));
	}

	#[test]
	fn reset_replaces_order() {
		let initiative = Rc::new(Initiative::new(&[Character::new("Aria", 12, 15, 3)]));
		let initiative = initiative.reduce(Action::Reset(vec![
			Character::new("Borin", 28, 18, 1),
			Character::new("Sable", 9, 13, 17),
		]));
		let names = initiative.order().iter().map(Character::name_or_blank).collect::<Vec<_>>();
		assert_eq!(names, vec!["Sable", "Borin"]);
		assert_eq!(initiative.current_index(), Some(0));
	}

	#[test]
	fn reset_with_same_roster_keeps_turn() {
		let characters = vec![Character::new("Aria", 12, 15, 3), Character::new("Sable", 9, 13, 17)];
		let initiative = Rc::new(Initiative::new(&characters)).reduce(Action::Advance);
		let after = initiative.clone().reduce(Action::Reset(characters));
		assert!(Rc::ptr_eq(&initiative, &after));
		assert_eq!(after.current_index(), Some(1));
	}

	#[tokio::test]
	async fn lists_in_turn_order() {
		let html = render(vec![Character::new("Aria", 12, 15, 3), Character::new("Sable", 9, 13, 17)]).await;
		assert!(html.contains("<li class=\"list-group-item active\">Sable</li>"));
		assert!(html.contains("<li class=\"list-group-item\">Aria</li>"));
		assert!(html.find("Sable").unwrap() < html.find("Aria").unwrap());
	}

	#[tokio::test]
	async fn empty_order() {
		let html = render(Vec::new()).await;
		assert!(html.contains("Initiative order is empty"));
		assert!(!html.contains("<li"));
	}
}
