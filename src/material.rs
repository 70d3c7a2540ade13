use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use uom::si::{f64::ThermalConductivity, thermal_conductivity::watt_per_meter_kelvin};

#[cfg(test)]
use proptest::{
    arbitrary::Arbitrary,
    prelude::prop,
    strategy::{BoxedStrategy, Strategy},
};

use crate::error::EstimateError;

/// Thermal interface materials offered by the estimator.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Material {
    Copper,
    AlN,
    Graphite,
}

impl Material {
    /// All materials, in the order they are offered to the user.
    pub const ALL: [Material; 3] = [Material::Copper, Material::AlN, Material::Graphite];

    pub const NAMES: [&'static str; 3] = ["Copper", "AlN", "Graphite"];

    pub fn name(self) -> &'static str {
        match self {
            Material::Copper => "Copper",
            Material::AlN => "AlN",
            Material::Graphite => "Graphite",
        }
    }

    /// Bulk thermal conductivity in W/(m.K)
    pub fn conductivity_w_per_m_k(self) -> f64 {
        match self {
            Material::Copper => 400.0,
            Material::AlN => 140.0,
            Material::Graphite => 150.0,
        }
    }

    pub fn thermal_conductivity(self) -> ThermalConductivity {
        ThermalConductivity::new::<watt_per_meter_kelvin>(self.conductivity_w_per_m_k())
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Names are matched exactly, the same way the catalog lookup does.
impl FromStr for Material {
    type Err = EstimateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Material::ALL
            .into_iter()
            .find(|material| material.name() == s)
            .ok_or_else(|| EstimateError::UnknownMaterial(s.into()))
    }
}

#[cfg(test)]
impl Arbitrary for Material {
    type Parameters = ();
    type Strategy = BoxedStrategy<Material>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop::sample::select(Material::ALL.to_vec()).boxed()
    }
}

/// Fixed mapping from material name to material.
/// There is no way to add or remove entries after construction.
#[derive(Clone, Debug, PartialEq)]
pub struct MaterialCatalog {
    entries: HashMap<String, Material>,
}

impl MaterialCatalog {
    /// The three-entry catalog used by the estimator.
    pub fn standard() -> Self {
        MaterialCatalog {
            entries: Material::ALL
                .into_iter()
                .map(|material| (material.name().to_string(), material))
                .collect(),
        }
    }

    pub fn lookup(&self, name: &str) -> Result<Material, EstimateError> {
        self.entries
            .get(name)
            .copied()
            .ok_or_else(|| EstimateError::UnknownMaterial(name.into()))
    }

    pub fn conductivity(&self, name: &str) -> Result<ThermalConductivity, EstimateError> {
        Ok(self.lookup(name)?.thermal_conductivity())
    }

    /// Catalog names in presentation order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        Material::ALL
            .into_iter()
            .filter(|material| self.entries.contains_key(material.name()))
            .map(Material::name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for MaterialCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
