pub mod camera;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod controller;
pub mod input;
pub mod interpolator;
pub mod progress;

pub use camera::*;
pub use catalog::*;
pub use config::*;
pub use constants::*;
pub use controller::*;
pub use input::*;
pub use interpolator::*;
pub use progress::*;
