//! The built-in class roster shown until custom data is loaded.

use crate::graph::RelationshipMap;

const ROSTER: &[(&str, &[&str])] = &[
	("Hannah", &["Hayden", "Kaley", "Kaylee"]),
	("Hayden", &["Hannah", "Kaylee", "Mila"]),
	("Kaley", &["Kaylee", "Hannah", "Livvy"]),
	("Kaylee", &["Kaley", "Hayden", "Charlotte"]),
	("Nate", &["Cooper B", "Tamia", "Charlotte"]),
	("Cooper B", &["Nate", "Hunter", "Jonah"]),
	("Tamia", &["Charlotte", "Mila", "Nate"]),
	("Charlotte", &["Tamia", "Kaylee", "Livvy"]),
	("Hunter", &["Mila", "Livvy", "Tamia"]),
	("Mila", &["Livvy", "Hunter", "Hayden"]),
	("Livvy", &["Mila", "Charlotte", "Kaley"]),
	("Jonah", &["Cooper B", "Eli", "Marcus"]),
	("Eli", &["Jonah", "Marcus", "Nate"]),
	("Marcus", &["Eli", "Jonah", "Cooper B"]),
	("Sienna", &["Ava R", "Hannah", "Mila"]),
	("Ava R", &["Sienna", "Tamia", "Charlotte"]),
	("Owen", &["Marcus", "Eli", "Hunter"]),
];

/// The class roster shown until the user pastes their own data.
pub fn default_relationships() -> RelationshipMap {
	ROSTER
		.iter()
		.map(|(name, friends)| (*name, friends.to_vec()))
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn roster_is_not_empty_and_self_contained() {
		let map = default_relationships();
		assert_eq!(map.len(), ROSTER.len());
		for (_, friends) in map.iter() {
			for friend in friends {
				assert!(map.get(friend).is_some(), "{friend} has no entry");
			}
		}
	}
}
