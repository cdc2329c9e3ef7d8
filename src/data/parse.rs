//! Parser for pasted `Name: Friend1, Friend2` text.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::graph::RelationshipMap;

const LINE_PATTERN: &str = r"^([^:]+):\s*(.+)$";
static LINE: Lazy<Regex> = Lazy::new(|| Regex::new(LINE_PATTERN).expect("valid line pattern"));

/// Reasons pasted data is rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
	/// A non-blank line without `Name:` in front.
	#[error("Invalid format in line: \"{0}\". Expected format: \"Name: Friend1, Friend2, Friend3\"")]
	InvalidLine(String),

	/// The friend list after the colon was empty.
	#[error("No friends found for {0}")]
	NoFriends(String),

	/// Nothing but blank lines.
	#[error("No valid data found. Please paste data in the format: \"Name: Friend1, Friend2, Friend3\"")]
	Empty,
}

/// Parse `Name: Friend1, Friend2` lines into a relationship map.
///
/// Blank lines are skipped. A name given twice keeps the later list.
pub fn parse_relationships(text: &str) -> Result<RelationshipMap, ParseError> {
	let mut map = RelationshipMap::new();

	for line in text.trim().lines().filter(|l| !l.trim().is_empty()) {
		let caps = LINE
			.captures(line)
			.ok_or_else(|| ParseError::InvalidLine(line.to_owned()))?;
		let name = &caps[1];
		let friends: Vec<String> = caps[2]
			.split(',')
			.map(str::trim)
			.filter(|f| !f.is_empty())
			.map(str::to_owned)
			.collect();
		if friends.is_empty() {
			return Err(ParseError::NoFriends(name.to_owned()));
		}
		map.insert(name.trim(), friends);
	}

	if map.is_empty() {
		return Err(ParseError::Empty);
	}
	Ok(map)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_the_example_block() {
		let text = "Hannah: Hayden, Kaley, Kaylee\nNate: Cooper B, Tamia, Charlotte\n\nHunter: Mila, Livvy, Tamia\n";
		let map = parse_relationships(text).unwrap();
		assert_eq!(map.len(), 3);
		assert_eq!(map.get("Nate").unwrap(), ["Cooper B", "Tamia", "Charlotte"]);
		let keys: Vec<&str> = map.iter().map(|(k, _)| k).collect();
		assert_eq!(keys, ["Hannah", "Nate", "Hunter"]);
	}

	#[test]
	fn trims_and_drops_empty_friends() {
		let map = parse_relationships("  Amy  :Bo,, Cy ,\r\n").unwrap();
		assert_eq!(map.get("Amy").unwrap(), ["Bo", "Cy"]);
	}

	#[test]
	fn later_lines_replace_earlier_ones() {
		let map = parse_relationships("A: B\nC: A\nA: C").unwrap();
		assert_eq!(map.get("A").unwrap(), ["C"]);
		assert_eq!(map.iter().next().unwrap().0, "A");
	}

	#[test]
	fn line_without_colon_is_rejected() {
		let err = parse_relationships("Amy: Bo\njust some words").unwrap_err();
		assert_eq!(err, ParseError::InvalidLine("just some words".into()));
		assert_eq!(
			err.to_string(),
			"Invalid format in line: \"just some words\". Expected format: \"Name: Friend1, Friend2, Friend3\""
		);
	}

	#[test]
	fn line_without_friends_is_rejected() {
		assert_eq!(
			parse_relationships("Amy: , ,"),
			Err(ParseError::NoFriends("Amy".into()))
		);
		let err = parse_relationships("Amy:").unwrap_err();
		assert!(matches!(err, ParseError::InvalidLine(_)));
	}

	#[test]
	fn blank_input_is_rejected() {
		assert_eq!(parse_relationships(" \n\n "), Err(ParseError::Empty));
	}
}
