use super::Character;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The roster document compiled into the binary.
pub static BUNDLED_SOURCE: &str = include_str!("../../assets/characters.json");

lazy_static::lazy_static! {
	static ref BUNDLED: Result<Roster, RosterError> = BUNDLED_SOURCE.parse();
}

#[derive(thiserror::Error, Debug)]
#[error("Invalid roster document: {0}")]
pub struct RosterError(#[from] serde_json::Error);

/// A flat, ordered collection of characters, read from a document of the form
/// `{ "Characters": [ ... ] }`.
#[derive(Clone, PartialEq, Eq, Default, Debug, Serialize, Deserialize)]
pub struct Roster {
	#[serde(rename = "Characters", default)]
	pub characters: Vec<Character>,
}

impl Roster {
	/// Returns the roster bundled with the crate, parsed on first access.
	pub fn bundled() -> Result<&'static Roster, &'static RosterError> {
		BUNDLED.as_ref()
	}

	pub fn is_empty(&self) -> bool {
		self.characters.is_empty()
	}
}

impl FromStr for Roster {
	type Err = RosterError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(serde_json::from_str(s)?)
	}
}
