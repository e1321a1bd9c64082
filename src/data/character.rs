use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// One row of the bundled roster.
///
/// Every field is optional so that a record with missing keys still renders,
/// with the missing values left blank.
#[derive(Clone, PartialEq, Eq, Default, Debug, Serialize, Deserialize)]
pub struct Character {
	#[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	#[serde(rename = "HP", default, skip_serializing_if = "Option::is_none")]
	pub hp: Option<i32>,
	#[serde(rename = "AC", default, skip_serializing_if = "Option::is_none")]
	pub ac: Option<i32>,
	#[serde(rename = "Initiative", default, skip_serializing_if = "Option::is_none")]
	pub initiative: Option<i32>,
}

impl Character {
	pub fn new(name: impl Into<String>, hp: i32, ac: i32, initiative: i32) -> Self {
		Self {
			name: Some(name.into()),
			hp: Some(hp),
			ac: Some(ac),
			initiative: Some(initiative),
		}
	}

	pub fn name_or_blank(&self) -> &str {
		self.name.as_deref().unwrap_or_default()
	}
}

/// Formats an optional field, leaving it empty when absent.
pub fn placeholder<T: Display>(value: &Option<T>) -> String {
	match value {
		Some(value) => value.to_string(),
		None => String::new(),
	}
}

/// Renders the record as a boxed terminal card.
impl std::fmt::Display for Character {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let name = self.name_or_blank();
		let stats = [
			format!(" HP {}", placeholder(&self.hp)),
			format!(" AC {}", placeholder(&self.ac)),
			format!(" Init {}", placeholder(&self.initiative)),
		];

		let name_len = name.chars().count();
		let width = stats
			.iter()
			.map(|line| line.chars().count() + 1)
			.fold(15usize.max(name_len + 2), usize::max);

		let left = (width - name_len) / 2;
		let right = width - name_len - left;

		writeln!(f, "┌{}┐", "─".repeat(width))?;
		writeln!(f, "│{}{name}{}│", " ".repeat(left), " ".repeat(right))?;
		for line in &stats {
			writeln!(f, "│{line:<width$}│")?;
		}
		writeln!(f, "└{}┘", "─".repeat(width))
	}
}
