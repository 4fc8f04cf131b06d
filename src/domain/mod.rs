pub mod analysis;
pub mod builder;
pub mod function;
pub mod graph;
pub mod paths;
pub mod ports;
pub mod scc;
pub mod summary;
