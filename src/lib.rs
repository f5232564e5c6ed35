//! BMSSP — Bounded Multi-Source Shortest Path.
//!
//! Single-source shortest paths on directed graphs with non-negative real edge
//! weights, implemented per Duan, Mao, Mao, Shu & Yin (2025), "Breaking the Sorting
//! Barrier for Directed Single-Source Shortest Paths": `O(m log^(2/3) n)` instead of
//! Dijkstra's `Omega(n log n)` comparison-addition floor.
//!
//! The public surface is [`algorithm::BmsspSssp`] driven by [`algorithm::SsspOptions`],
//! consuming a [`graph::CsrGraph`] built from [`graph::GraphInput`].

pub mod algorithm;
pub mod data_structures;
pub mod error;
pub mod graph;

pub use algorithm::{BmsspSssp, SsspOptions, SsspOutput};
pub use error::{Error, Result};
pub use graph::CsrGraph;
