use uom::si::thermal_conductivity::watt_per_meter_kelvin;

use crate::error::EstimateError;
use crate::material::MaterialCatalog;
use crate::model::{SimulationInput, SimulationOutput};

/// Contact area of the TIM layer, 1 mm^2 [m^2]
pub const CONTACT_AREA_M2: f64 = 1e-6;

const MM_PER_M: f64 = 1000.0;
const MM2_PER_M2: f64 = 1e6;

/// Estimate junction temperature of a die cooled through a single TIM layer.
///
/// The layer is modeled as a single thermal resistance over a fixed contact area,
/// the junction sits at `ambient + power * resistance`.
/// Numeric inputs are not validated; only an unknown material fails.
pub fn estimate(
    input: &SimulationInput,
    catalog: &MaterialCatalog,
) -> Result<SimulationOutput, EstimateError> {
    let thermal_conductivity = catalog.conductivity(&input.material)?;

    // The calculation is done outside of UOM, to keep the exact operation order of the
    // closed form expression
    let thickness_m = input.tim_thickness_mm / MM_PER_M;
    let k = thermal_conductivity.get::<watt_per_meter_kelvin>();
    let thermal_resistance_c_per_w = thickness_m / (k * CONTACT_AREA_M2);
    let junction_temp_c = input.ambient_temp_c as f64
        + input.power_density_w_per_mm2 * MM2_PER_M2 * thermal_resistance_c_per_w;

    Ok(SimulationOutput {
        thermal_conductivity,
        thermal_resistance_c_per_w,
        junction_temp_c,
    })
}
