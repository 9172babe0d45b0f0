//! Power-supply status readout for the Raspberry Pi 5.
//!
//! The firmware exposes the power state of the last boot under
//! `/proc/device-tree/chosen/power` as big-endian 32-bit cells. Two of them
//! matter here:
//!
//! - `power_reset`: reset-cause flags; bit 1 indicates a brownout
//!   (undervolt) reset
//! - `max_current`: the maximum current negotiated with the power supply,
//!   in mA

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Location of the firmware power nodes on a Raspberry Pi 5.
pub const DT_POWER: &str = "/proc/device-tree/chosen/power";

const BROWNOUT_FLAG: u32 = 0x02;

/// Snapshot of the power state reported by the firmware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerStatus {
    /// The last reset was caused by a power brownout.
    pub brownout: bool,
    /// Maximum current negotiated with the PSU, in mA. A full-capability
    /// supply negotiates 5000 (5V at 5A); weaker supplies report 3000 or
    /// less.
    pub max_current: u32,
}

/// Returns `true` if the device-tree under `dir` reports that a power
/// brownout (undervolt condition) was the cause of the last reset.
///
/// Fails with the underlying I/O error if the reset condition cannot be
/// queried, e.g. when not running on a Raspberry Pi.
pub fn reset_brownout(dir: &Path) -> io::Result<bool> {
    Ok(read_be_u32(&dir.join("power_reset"))? & BROWNOUT_FLAG != 0)
}

/// Returns the maximum current negotiated with the PSU in mA.
///
/// Fails with the underlying I/O error if the value cannot be queried, e.g.
/// when not running on a Raspberry Pi.
pub fn psu_max_current(dir: &Path) -> io::Result<u32> {
    read_be_u32(&dir.join("max_current"))
}

/// Reads both power cells in one call.
pub fn read_status(dir: &Path) -> io::Result<PowerStatus> {
    Ok(PowerStatus {
        brownout: reset_brownout(dir)?,
        max_current: psu_max_current(dir)?,
    })
}

// Device-tree cells are big-endian regardless of host byte order.
fn read_be_u32(path: &Path) -> io::Result<u32> {
    let mut buf = [0u8; 4];
    File::open(path)?.read_exact(&mut buf)?;
    Ok(u32::from_be_bytes(buf))
}
