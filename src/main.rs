//! Show an IMU capture as two sequential charts.
//!
//! Reads `imu_data.csv` from the working directory, then displays the
//! acceleration chart and, once it is dismissed, the gyroscope chart.

use std::error::Error;

use imuplot::{run_figures, Figure, SampleTable};

const INPUT_PATH: &str = "imu_data.csv";

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let table = SampleTable::load(INPUT_PATH)?;
    log::info!("loaded {} samples from {INPUT_PATH}", table.len());

    run_figures(vec![
        Figure::acceleration(&table),
        Figure::angular_velocity(&table),
    ])?;
    Ok(())
}
