use std::path::PathBuf;

use clap::Parser;
use log::{debug, info, warn};
use rand::{rngs::StdRng, SeedableRng};

use ic_thermal::model::TIM_THICKNESS_RANGE_MM;
use ic_thermal::{estimate, MaterialCatalog, Report, SimulationInput, ThermalMap};

/// Estimate junction temperature of a 3D IC through its thermal interface material.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// JSON5 parameter file; missing keys take the demo defaults
    #[arg(long)]
    params: Option<PathBuf>,

    /// TIM thickness [mm]
    #[arg(long, value_parser = parse_thickness)]
    thickness: Option<f64>,

    /// Power density [W/mm^2]
    #[arg(long, allow_negative_numbers = true)]
    power_density: Option<f64>,

    /// Ambient temperature [°C]
    #[arg(long, allow_negative_numbers = true)]
    ambient: Option<i64>,

    /// TIM material (Copper, AlN or Graphite)
    #[arg(long)]
    material: Option<String>,

    /// Seed for the thermal map, makes it reproducible
    #[arg(long)]
    seed: Option<u64>,

    /// Print the raw thermal map values below the shaded map
    #[arg(long)]
    map_values: bool,

    /// Skip the thermal map
    #[arg(long)]
    no_map: bool,
}

impl Args {
    /// Merge the parameter file (or defaults) with command line overrides.
    fn simulation_input(&self) -> anyhow::Result<SimulationInput> {
        let mut input = match &self.params {
            Some(path) => {
                let input = SimulationInput::load(path)?;
                debug!("Loaded parameters from {}: {:?}", path.display(), input);
                input
            }
            None => SimulationInput::default(),
        };

        if let Some(thickness) = self.thickness {
            input.tim_thickness_mm = thickness;
        }
        if let Some(power_density) = self.power_density {
            input.power_density_w_per_mm2 = power_density;
        }
        if let Some(ambient) = self.ambient {
            input.ambient_temp_c = ambient;
        }
        if let Some(material) = &self.material {
            input.material = material.clone();
        }

        Ok(input)
    }
}

/// Same bounds as the thickness slider.
fn parse_thickness(s: &str) -> Result<f64, String> {
    let thickness: f64 = s.parse().map_err(|e| format!("{}", e))?;
    if TIM_THICKNESS_RANGE_MM.contains(&thickness) {
        Ok(thickness)
    } else {
        Err(format!(
            "thickness must be within {}..={} mm",
            TIM_THICKNESS_RANGE_MM.start(),
            TIM_THICKNESS_RANGE_MM.end()
        ))
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let input = args.simulation_input()?;
    if !input.thickness_in_slider_range() {
        warn!(
            "TIM thickness {} mm is outside of {:?} mm, using it anyway",
            input.tim_thickness_mm, TIM_THICKNESS_RANGE_MM
        );
    }

    let catalog = MaterialCatalog::standard();
    let output = estimate(&input, &catalog)?;
    info!("Estimated {:?} for {:?}", output, input);

    println!("{}", Report::new(&input.material, &output));

    if !args.no_map {
        let map = match args.seed {
            Some(seed) => {
                let mut rng = StdRng::seed_from_u64(seed);
                ThermalMap::synthesize(output.junction_temp_c, &mut rng)?
            }
            None => ThermalMap::synthesize(output.junction_temp_c, &mut rand::thread_rng())?,
        };
        println!();
        println!("Simulated thermal map (sample, not a simulation result)");
        println!("{}", map);
        if args.map_values {
            println!("{}", map.to_values());
        }
    }

    anyhow::Result::Ok(())
}
