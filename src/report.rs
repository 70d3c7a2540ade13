use std::fmt;

use uom::si::thermal_conductivity::watt_per_meter_kelvin;

use crate::model::SimulationOutput;

/// Text summary of a single estimate.
#[derive(Copy, Clone, Debug)]
pub struct Report<'a> {
    pub material: &'a str,
    pub output: &'a SimulationOutput,
}

impl<'a> Report<'a> {
    pub fn new(material: &'a str, output: &'a SimulationOutput) -> Self {
        Report { material, output }
    }

    /// The one line summary, without the breakdown.
    pub fn headline(&self) -> Headline<'a> {
        Headline {
            output: self.output,
        }
    }
}

impl<'a> fmt::Display for Report<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Selected TIM Material: {}", self.material)?;
        writeln!(
            f,
            "Thermal Conductivity: {} W/m·K",
            self.output
                .thermal_conductivity
                .get::<watt_per_meter_kelvin>()
        )?;
        writeln!(
            f,
            "Thermal Resistance: {:.4} °C/W",
            self.output.thermal_resistance_c_per_w
        )?;
        write!(f, "{}", self.headline())
    }
}

#[derive(Copy, Clone, Debug)]
pub struct Headline<'a> {
    output: &'a SimulationOutput,
}

impl<'a> fmt::Display for Headline<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Estimated Junction Temperature: {:.2} °C",
            self.output.junction_temp_c
        )
    }
}
