//! Plain data types shared by the analytics pipeline.

use std::collections::HashMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Node identifier. Equal to the person's name.
pub type NodeId = String;

/// Ordered mapping from a person to the people they name as friends.
///
/// Keys keep their insertion order. Inserting an existing key replaces its
/// friend list without moving the key.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RelationshipMap {
	entries: Vec<(String, Vec<String>)>,
}

impl RelationshipMap {
	/// Create an empty map.
	pub fn new() -> Self {
		Self::default()
	}

	/// Insert or replace the friend list for `name`.
	pub fn insert(&mut self, name: impl Into<String>, friends: Vec<String>) {
		let name = name.into();
		match self.entries.iter_mut().find(|(key, _)| *key == name) {
			Some((_, existing)) => *existing = friends,
			None => self.entries.push((name, friends)),
		}
	}

	/// Friend list declared by `name`, if `name` is a key.
	pub fn get(&self, name: &str) -> Option<&[String]> {
		self.entries
			.iter()
			.find(|(key, _)| key == name)
			.map(|(_, friends)| friends.as_slice())
	}

	/// Whether `name` lists `friend`.
	pub fn lists(&self, name: &str, friend: &str) -> bool {
		self.get(name)
			.is_some_and(|friends| friends.iter().any(|f| f == friend))
	}

	/// Entries in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
		self.entries
			.iter()
			.map(|(name, friends)| (name.as_str(), friends.as_slice()))
	}

	/// Number of keys.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether the map has no keys.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

impl<N, F> FromIterator<(N, Vec<F>)> for RelationshipMap
where
	N: Into<String>,
	F: Into<String>,
{
	fn from_iter<I: IntoIterator<Item = (N, Vec<F>)>>(iter: I) -> Self {
		let mut map = Self::new();
		for (name, friends) in iter {
			map.insert(name, friends.into_iter().map(Into::into).collect());
		}
		map
	}
}

impl Serialize for RelationshipMap {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(self.entries.len()))?;
		for (name, friends) in &self.entries {
			map.serialize_entry(name, friends)?;
		}
		map.end()
	}
}

impl<'de> Deserialize<'de> for RelationshipMap {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		struct RelationshipVisitor;

		impl<'de> Visitor<'de> for RelationshipVisitor {
			type Value = RelationshipMap;

			fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
				f.write_str("an object mapping names to lists of friends")
			}

			fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
				let mut map = RelationshipMap::new();
				while let Some((name, friends)) = access.next_entry::<String, Vec<String>>()? {
					map.insert(name, friends);
				}
				Ok(map)
			}
		}

		deserializer.deserialize_map(RelationshipVisitor)
	}
}

/// A person in the graph with degree counters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Node {
	/// Same as `name`.
	pub id: NodeId,
	/// Display label.
	pub name: String,
	/// Always `incoming_connections + outgoing_connections`.
	pub connections: u32,
	/// Edges ending here.
	pub incoming_connections: u32,
	/// Edges starting here.
	pub outgoing_connections: u32,
}

impl Node {
	pub(crate) fn named(name: &str) -> Self {
		Self {
			id: name.to_owned(),
			name: name.to_owned(),
			..Self::default()
		}
	}
}

/// A declared friendship, directed from `source` to `target`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edge {
	/// The person who named the friend.
	pub source: NodeId,
	/// The friend named.
	pub target: NodeId,
	/// `target` also lists `source`.
	pub is_mutual: bool,
}

impl Edge {
	/// Whether `id` is either endpoint.
	pub fn touches(&self, id: &str) -> bool {
		self.source == id || self.target == id
	}
}

/// Output of the graph builder.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
	/// Keys first, then names seen only as friends.
	pub nodes: Vec<Node>,
	/// One per declared friendship, in declaration order.
	pub edges: Vec<Edge>,
}

/// Community id for every node.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommunityAssignment(HashMap<NodeId, usize>);

impl CommunityAssignment {
	/// Community of `id`, if assigned.
	pub fn get(&self, id: &str) -> Option<usize> {
		self.0.get(id).copied()
	}

	/// Assign `id` to `community`.
	pub fn assign(&mut self, id: impl Into<NodeId>, community: usize) {
		self.0.insert(id.into(), community);
	}

	/// Number of assigned nodes.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Whether nothing is assigned.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Number of distinct community ids in use.
	pub fn community_count(&self) -> usize {
		let mut ids: Vec<usize> = self.0.values().copied().collect();
		ids.sort_unstable();
		ids.dedup();
		ids.len()
	}
}

impl<I: Into<NodeId>> FromIterator<(I, usize)> for CommunityAssignment {
	fn from_iter<T: IntoIterator<Item = (I, usize)>>(iter: T) -> Self {
		Self(iter.into_iter().map(|(id, c)| (id.into(), c)).collect())
	}
}

/// Explicit coordinates for one node.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutPosition {
	/// Node placed.
	pub id: NodeId,
	/// World x.
	pub x: f64,
	/// World y.
	pub y: f64,
}

/// A node together with everything derived from it downstream.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnnotatedNode {
	/// Builder output.
	pub node: Node,
	/// Community id from detection.
	pub community: usize,
	/// Palette color of `community`.
	pub color: &'static str,
	/// Fixed coordinates from a non-physical layout.
	pub position: Option<(f64, f64)>,
}

impl AnnotatedNode {
	/// Id of the wrapped node.
	pub fn id(&self) -> &str {
		&self.node.id
	}
}

/// Everything the canvas needs to draw one dataset.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SociogramView {
	/// Nodes in builder order.
	pub nodes: Vec<AnnotatedNode>,
	/// Edges between those nodes.
	pub edges: Vec<Edge>,
	/// Distinct community ids in the full dataset.
	pub community_count: usize,
}

impl SociogramView {
	/// Look up a node by id.
	pub fn node(&self, id: &str) -> Option<&AnnotatedNode> {
		self.nodes.iter().find(|n| n.id() == id)
	}

	/// Community assignment recovered from the annotated nodes.
	pub fn communities(&self) -> CommunityAssignment {
		self.nodes
			.iter()
			.map(|n| (n.node.id.clone(), n.community))
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn insert_replaces_in_place() {
		let mut map = RelationshipMap::new();
		map.insert("A", vec!["B".into()]);
		map.insert("C", vec![]);
		map.insert("A", vec!["C".into()]);
		let keys: Vec<&str> = map.iter().map(|(k, _)| k).collect();
		assert_eq!(keys, ["A", "C"]);
		assert_eq!(map.get("A"), Some(&["C".to_string()][..]));
	}

	#[test]
	fn json_keeps_key_order() {
		let map: RelationshipMap = [("Zed", vec!["Amy"]), ("Amy", vec!["Zed", "Bo"])]
			.into_iter()
			.collect();
		let json = serde_json::to_string(&map).unwrap();
		assert_eq!(json, r#"{"Zed":["Amy"],"Amy":["Zed","Bo"]}"#);
		let back: RelationshipMap = serde_json::from_str(&json).unwrap();
		assert_eq!(back, map);
	}

	#[test]
	fn community_count_counts_distinct_ids() {
		let c: CommunityAssignment = [("a", 3), ("b", 3), ("c", 0)].into_iter().collect();
		assert_eq!(c.len(), 3);
		assert_eq!(c.community_count(), 2);
	}
}
