//! Warning texts shown to the user, plus plain-text paragraph filling for
//! motd output.

/// Where to learn about the Raspberry Pi 5 power supply.
pub const RPI_PSU_URL: &str = "https://rptl.io/rpi5-power-supply-info";

/// Width used when filling paragraphs for the console.
pub const FILL_WIDTH: usize = 70;

pub fn brownout_warning() -> &'static str {
    "Reset due to low power; please check your power supply"
}

pub fn max_current_warning() -> &'static str {
    "This power supply is not capable of supplying 5A; power to peripherals \
     will be restricted"
}

pub fn suppression_note() -> String {
    format!(
        "See man:pemmican-cli(1) for information on suppressing this \
         warning, or {RPI_PSU_URL} for more information on the Raspberry Pi \
         5 power supply"
    )
}

/// Greedy word-wrap of a single paragraph to the given width. Words longer
/// than the width occupy a line of their own.
pub fn fill(text: &str, width: usize) -> String {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && line.len() + 1 + word.len() > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines.join("\n")
}
