pub mod inhibit;
pub mod power;
pub mod warnings;

pub use inhibit::{BROWNOUT_INHIBIT, MAX_CURRENT_INHIBIT, config_dirs, is_inhibited};
pub use power::{PowerStatus, psu_max_current, read_status, reset_brownout};
pub use warnings::{RPI_PSU_URL, fill};
