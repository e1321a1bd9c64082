use super::Character;
use itertools::Itertools;
use std::cmp::Reverse;

/// Turn order over a set of characters.
///
/// Characters are ordered by initiative, highest first. Ties keep the order they were given in,
/// and characters without an initiative act last. The records themselves are never modified;
/// only the position of the current turn moves.
#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub struct Initiative {
	order: Vec<Character>,
	current: Option<usize>,
}

impl Initiative {
	pub fn new<'c>(characters: impl IntoIterator<Item = &'c Character>) -> Self {
		let order = characters
			.into_iter()
			.cloned()
			.sorted_by_key(|character| Reverse(character.initiative))
			.collect::<Vec<_>>();
		let current = (!order.is_empty()).then_some(0);
		Self { order, current }
	}

	pub fn order(&self) -> &[Character] {
		&self.order
	}

	pub fn is_empty(&self) -> bool {
		self.order.is_empty()
	}

	pub fn current_index(&self) -> Option<usize> {
		self.current
	}

	pub fn current(&self) -> Option<&Character> {
		self.current.and_then(|idx| self.order.get(idx))
	}

	/// Moves to the next turn, wrapping back to the top after the last character.
	pub fn advance(&mut self) {
		self.current = match self.current {
			None => None,
			Some(idx) if idx + 1 < self.order.len() => Some(idx + 1),
			Some(_) => Some(0),
		};
	}

	/// Resets the current turn to the top of the order.
	pub fn top(&mut self) {
		if !self.order.is_empty() {
			self.current = Some(0);
		}
	}

	pub fn find(&self, name: &str) -> Option<&Character> {
		self.order.iter().find(|character| character.name.as_deref() == Some(name))
	}
}
