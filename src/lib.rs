//! Junction temperature estimate for a 3D IC cooled through a single thermal
//! interface material layer.

pub mod error;
pub mod estimator;
pub mod heatmap;
pub mod material;
pub mod model;
pub mod report;

pub use error::EstimateError;
pub use estimator::estimate;
pub use heatmap::ThermalMap;
pub use material::{Material, MaterialCatalog};
pub use model::{SimulationInput, SimulationOutput};
pub use report::Report;
