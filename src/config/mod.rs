//! Configuration management for the yield report

pub mod settings;
pub mod depositors;

pub use settings::*;
pub use depositors::*;

use lazy_static::lazy_static;

lazy_static! {
    pub static ref CONFIG: Config = Config::load();
}
