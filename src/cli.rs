use clap::Parser;

/// Checks the Raspberry Pi 5's power status and reports if the last reset
/// occurred due to a brownout (undervolt) situation, or if the current power
/// supply failed to negotiate a 5A supply. Intended to be run as part of the
/// update-motd(5) process; see pemmican-cli(1) for how to suppress the
/// warnings.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {}
