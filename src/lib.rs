pub mod cli;
pub mod config;
pub mod distribution;
pub mod error;
pub mod graph;
pub mod label_set;
pub mod proximity;
pub mod repair;

pub use distribution::LabelDistribution;
pub use error::{GraphError, Result};
pub use graph::LabelledGraph;
pub use label_set::LabelSet;
pub use repair::{RepairReport, Strategy};
