use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;

use uom::si::f64::ThermalConductivity;

#[cfg(test)]
use proptest::{
    arbitrary::Arbitrary,
    strategy::{BoxedStrategy, Strategy},
};

use crate::material::Material;

/// Range of the TIM thickness slider, in mm.
pub const TIM_THICKNESS_RANGE_MM: RangeInclusive<f64> = 0.1..=2.0;

pub const DEFAULT_TIM_THICKNESS_MM: f64 = 0.5;
pub const DEFAULT_POWER_DENSITY_W_PER_MM2: f64 = 0.5;
pub const DEFAULT_AMBIENT_TEMP_C: i64 = 25;
pub const DEFAULT_MATERIAL: Material = Material::Copper;

/// Parameters of a single estimate.
///
/// None of the numeric values are validated, thickness is only expected to stay
/// within [`TIM_THICKNESS_RANGE_MM`].
/// The material is kept as the selector string; it is resolved against the catalog
/// when the estimate is made.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationInput {
    pub tim_thickness_mm: f64,
    pub power_density_w_per_mm2: f64,
    pub ambient_temp_c: i64,
    pub material: String,
}

impl SimulationInput {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let string = fs::read_to_string(path)?;
        Self::from_json(&string)
    }

    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let loaded: as_loaded::SimulationInput = json5::from_str(json)?;
        let converted = loaded.try_into()?;
        Ok(converted)
    }

    /// Whether the thickness is within the range the slider allows.
    /// Out of range values are still accepted by the estimator.
    pub fn thickness_in_slider_range(&self) -> bool {
        TIM_THICKNESS_RANGE_MM.contains(&self.tim_thickness_mm)
    }
}

impl Default for SimulationInput {
    fn default() -> Self {
        SimulationInput {
            tim_thickness_mm: DEFAULT_TIM_THICKNESS_MM,
            power_density_w_per_mm2: DEFAULT_POWER_DENSITY_W_PER_MM2,
            ambient_temp_c: DEFAULT_AMBIENT_TEMP_C,
            material: DEFAULT_MATERIAL.name().into(),
        }
    }
}

impl TryFrom<as_loaded::SimulationInput> for SimulationInput {
    type Error = anyhow::Error;
    fn try_from(value: as_loaded::SimulationInput) -> Result<Self, Self::Error> {
        let default = SimulationInput::default();
        let ambient_temp_c = match value.ambient_temp_c {
            Some(ambient) => whole_degrees(ambient)?,
            None => default.ambient_temp_c,
        };
        Ok(SimulationInput {
            tim_thickness_mm: value.tim_thickness_mm.unwrap_or(default.tim_thickness_mm),
            power_density_w_per_mm2: value
                .power_density_w_per_mm2
                .unwrap_or(default.power_density_w_per_mm2),
            ambient_temp_c,
            material: value.material.unwrap_or(default.material),
        })
    }
}

/// Ambient temperature is entered in whole degrees.
fn whole_degrees(value: f64) -> anyhow::Result<i64> {
    // i64::MAX as f64 rounds up to 2^63, which is already out of range
    if value.fract() != 0.0 || !(value >= i64::MIN as f64 && value < i64::MAX as f64) {
        anyhow::bail!(
            "Ambient temperature must be a whole number of degrees, got {}",
            value
        )
    }
    Ok(value as i64)
}

#[cfg(test)]
impl Arbitrary for SimulationInput {
    type Parameters = ();
    type Strategy = BoxedStrategy<SimulationInput>;

    /// Inputs the user interface can produce: thickness within the slider range,
    /// positive power density and a catalog material.
    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        (
            TIM_THICKNESS_RANGE_MM,
            1e-3f64..10f64,
            -50i64..150i64,
            Material::arbitrary(),
        )
            .prop_map(|tuple| SimulationInput {
                tim_thickness_mm: tuple.0,
                power_density_w_per_mm2: tuple.1,
                ambient_temp_c: tuple.2,
                material: tuple.3.name().into(),
            })
            .boxed()
    }
}

/// Result of a single estimate.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SimulationOutput {
    pub thermal_conductivity: ThermalConductivity,
    /// Thermal resistance of the TIM layer [°C/W]
    pub thermal_resistance_c_per_w: f64,
    /// Estimated junction temperature [°C]
    pub junction_temp_c: f64,
}

mod as_loaded {
    use serde::Deserialize;

    /// Parameter file contents, every key is optional.
    /// Ambient temperature is read as a float so that fractional values can be
    /// rejected instead of truncated.
    #[derive(Clone, Debug, Default, Deserialize, PartialEq)]
    #[serde(default, deny_unknown_fields)]
    pub struct SimulationInput {
        pub tim_thickness_mm: Option<f64>,
        pub power_density_w_per_mm2: Option<f64>,
        pub ambient_temp_c: Option<f64>,
        pub material: Option<String>,
    }
}
