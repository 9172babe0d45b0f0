use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use log::debug;

use pemmican::inhibit::{BROWNOUT_INHIBIT, MAX_CURRENT_INHIBIT, config_dirs, is_inhibited};
use pemmican::power::{self, DT_POWER};
use pemmican::warnings::{
    FILL_WIDTH, brownout_warning, fill, max_current_warning, suppression_note,
};

mod cli;

fn main() -> ExitCode {
    env_logger::init();
    let _ = cli::Cli::parse();

    let status = match power::read_status(Path::new(DT_POWER)) {
        Ok(status) => status,
        Err(err) => {
            // Not a Pi 5 (or firmware too old to report); stay silent
            debug!("cannot query power status: {err}");
            return ExitCode::SUCCESS;
        }
    };

    let dirs = config_dirs();
    let brownout = status.brownout && !is_inhibited(&dirs, BROWNOUT_INHIBIT);
    let max_current =
        status.max_current < 5000 && !is_inhibited(&dirs, MAX_CURRENT_INHIBIT);

    // A brownout reset already implies an inadequate PSU; don't double-warn
    if brownout {
        println!();
        println!("{}", fill(brownout_warning(), FILL_WIDTH));
    } else if max_current {
        println!();
        println!("{}", fill(max_current_warning(), FILL_WIDTH));
    }
    if brownout || max_current {
        println!();
        println!("{}", fill(&suppression_note(), FILL_WIDTH));
    }
    ExitCode::SUCCESS
}
