pub mod base_case;
pub mod bmssp;
pub mod dijkstra;
pub mod driver;
pub mod find_pivots;
pub mod relax;

pub use driver::{BmsspSssp, SsspOptions, SsspOutput};
