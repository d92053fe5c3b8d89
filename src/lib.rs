//! imuplot crate root: re-exports and module wiring.
//!
//! This crate displays IMU captures logged by the RP2040 data logger as
//! interactive charts built on egui/eframe:
//! - `table`: fixed 7-column CSV parsing into an in-memory sample table
//! - `figure`: chart descriptions and the native window runner
//!
//! The expected input is `imu_data.csv`: one header line followed by rows of
//! `sample_index, accel_x, accel_y, accel_z, gyro_x, gyro_y, gyro_z`.

pub mod figure;
pub mod table;

// Public re-exports for a compact external API
pub use figure::{run_figures, Figure, FigureApp, Trace};
pub use table::{Column, LoadError, SampleTable, COLUMN_COUNT};
