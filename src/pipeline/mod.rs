//! Lazy combinators and eager reducers over any [`Iterator`].
//!
//! Combinators in [`transform`] wrap a source and pull from it only when
//! pulled themselves. Reducers in [`terminal`] drain a source to produce a
//! single value. Both take anything [`IntoIterator`], so containers of this
//! crate, standard collections and other adapters compose freely:
//!
//! ```rust
//! use chain_hash::HashMap;
//! use chain_hash::pipeline::terminal::{collect_to_vec, sum};
//! use chain_hash::pipeline::transform::{filter, map};
//!
//! let prices = HashMap::of([("tea", 3), ("cake", 5), ("soup", 7)]);
//! let total = sum(map(|(_, p)| *p, filter(|(_, p)| **p > 4, &prices)));
//! assert_eq!(total, 12);
//!
//! let names = collect_to_vec(map(|(n, _)| *n, &prices));
//! assert_eq!(names, ["tea", "cake", "soup"]);
//! ```

pub mod terminal;
pub mod transform;
