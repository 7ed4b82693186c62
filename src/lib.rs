//! Synthetic graph generation.
//!
//! Builds random graphs under two classical models on top of a minimal
//! grow-only graph store with dense integer node indices:
//!
//! - [`erdos_renyi`]: every candidate node pair receives an edge
//!   independently with a fixed probability.
//! - [`barabasi_albert`]: nodes join one at a time and attach
//!   preferentially to high-degree nodes, producing a scale-free degree
//!   distribution.
//!
//! Both generators accept an optional seed; a seeded run is reproducible
//! edge for edge, including insertion order.
//!
//! # Examples
//!
//! ```
//! use graphgen::{barabasi_albert, erdos_renyi};
//!
//! let random = erdos_renyi(100, 0.05, false, false, Some(42)).unwrap();
//! let scale_free = barabasi_albert(100, 3, false, Some(42)).unwrap();
//! assert_eq!(random.len(), scale_free.len());
//! ```

#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

mod adj;
pub mod erdos_renyi;
pub mod error;
pub mod graph;
pub mod preferential_attachment;
mod rng;

pub use crate::erdos_renyi::erdos_renyi;
pub use crate::error::{GraphError, GraphResult};
pub use crate::graph::Graph;
pub use crate::preferential_attachment::barabasi_albert;
