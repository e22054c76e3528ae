//! Ordered slot collection
//!
//! Overrides and observers live in a `Slots` collection: a doubly linked
//! list threaded through a `Slab`. Insertion and removal are O(1) and never
//! move other entries, so the key returned for one entry stays valid no
//! matter what happens to the rest of the collection.
//!
//! The collection is an implementation detail of the state records and is not
//! reachable from outside the crate.

use slab::Slab;

/// Stable position of one entry in a [`Slots`] collection
///
/// `seq` is the insertion sequence number of the entry. The slab reuses
/// freed indices, so removal only succeeds if the occupant of `index` still
/// carries the same `seq`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotKey {
	index: usize,
	seq: u64,
}

impl SlotKey {
	/// Insertion sequence number of the entry
	#[must_use]
	pub const fn seq(&self) -> u64 {
		self.seq
	}
}

#[derive(Debug)]
struct Node<T> {
	value: T,
	seq: u64,
	prev: Option<usize>,
	next: Option<usize>,
}

/// Insertion-ordered collection with stable keys
#[derive(Debug)]
pub struct Slots<T> {
	nodes: Slab<Node<T>>,
	head: Option<usize>,
	tail: Option<usize>,
	next_seq: u64,
}

impl<T> Default for Slots<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T> Slots<T> {
	/// Create an empty collection
	#[must_use]
	pub fn new() -> Self {
		Self {
			nodes: Slab::new(),
			head: None,
			tail: None,
			next_seq: 0,
		}
	}

	/// Number of entries currently present
	#[must_use]
	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	/// Append an entry and return its key
	pub fn push_back(&mut self, value: T) -> SlotKey {
		let seq = self.next_seq;
		self.next_seq += 1;

		let index = self.nodes.insert(Node {
			value,
			seq,
			prev: self.tail,
			next: None,
		});

		match self.tail {
			Some(tail) => self.nodes[tail].next = Some(index),
			None => self.head = Some(index),
		}
		self.tail = Some(index);

		SlotKey { index, seq }
	}

	/// Remove the entry bound to `key`
	///
	/// Returns `None` if the entry is already gone.
	pub fn remove(&mut self, key: SlotKey) -> Option<T> {
		if !self.contains(key) {
			return None;
		}

		let node = self.nodes.remove(key.index);

		match node.prev {
			Some(prev) => self.nodes[prev].next = node.next,
			None => self.head = node.next,
		}
		match node.next {
			Some(next) => self.nodes[next].prev = node.prev,
			None => self.tail = node.prev,
		}

		Some(node.value)
	}

	/// Whether the entry bound to `key` is still present
	#[must_use]
	pub fn contains(&self, key: SlotKey) -> bool {
		self.nodes.get(key.index).is_some_and(|node| node.seq == key.seq)
	}

	/// The entry bound to `key`, if still present
	#[must_use]
	pub fn get(&self, key: SlotKey) -> Option<&T> {
		self.nodes.get(key.index).filter(|node| node.seq == key.seq).map(|node| &node.value)
	}

	/// The most recently inserted entry that is still present
	#[must_use]
	pub fn back(&self) -> Option<&T> {
		self.tail.map(|tail| &self.nodes[tail].value)
	}

	/// Iterate over the entries in insertion order
	pub fn iter(&self) -> Iter<'_, T> {
		Iter {
			slots: self,
			cursor: self.head,
		}
	}
}

/// Iterator over a [`Slots`] collection in insertion order
pub struct Iter<'a, T> {
	slots: &'a Slots<T>,
	cursor: Option<usize>,
}

impl<'a, T> Iterator for Iter<'a, T> {
	type Item = &'a T;

	fn next(&mut self) -> Option<Self::Item> {
		let slots = self.slots;
		let node = &slots.nodes[self.cursor?];
		self.cursor = node.next;
		Some(&node.value)
	}
}

impl<'a, T> IntoIterator for &'a Slots<T> {
	type Item = &'a T;
	type IntoIter = Iter<'a, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}
