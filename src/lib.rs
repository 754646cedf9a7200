#![warn(missing_docs)]
#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod collection;

/// A hash map built on the chained [`HashTable`].
///
/// This module provides a `HashMap` that wraps the `HashTable` and provides
/// a key-value map interface with pluggable key hashers.
pub mod hash_map;

/// A chained hash table over an entry arena with an intrusive free list.
pub mod hash_table;

/// A hash set built on [`HashMap`].
pub mod hash_set;

pub mod hasher;
pub mod pipeline;
pub mod value;

pub use collection::Collection;
pub use hash_map::Entry;
pub use hash_map::HashMap;
pub use hash_set::HashSet;
pub use hash_table::HashTable;
pub use hasher::DefaultHashBuilder;
pub use value::OptionExt;
pub use value::ResultExt;
pub use value::Violation;
