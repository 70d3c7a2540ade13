use thiserror::Error;

use crate::material::Material;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EstimateError {
    /// The material selector does not match any catalog entry.
    #[error("Unknown material {0:?} (expected one of {:?})", Material::NAMES)]
    UnknownMaterial(String),
}
