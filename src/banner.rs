//! Fixed welcome banner text.

use std::io::Write;

use anyhow::{Context, Result};

/// Width of the `=` rule printed above and below the feature list.
pub const SEPARATOR_WIDTH: usize = 50;

pub const WELCOME: &str = "🚀 Welcome to the Operit Java project!";

pub const DESCRIPTION: &str = "This is a standard Gradle Java project where you can:";

pub const FEATURES: [&str; 4] = [
    "  ✨ Write and compile Java code",
    "  📦 Manage dependencies with Gradle",
    "  🏗️ Build and run Java applications",
    "  🧪 Write and run unit tests",
];

pub const SUCCESS: &str = "✅ Programme ran successfully!";

/// The separator line, without trailing newline.
pub fn separator() -> String {
    "=".repeat(SEPARATOR_WIDTH)
}

/// Write the banner block: welcome, rule, description, features, rule.
pub fn write_banner<W: Write>(out: &mut W) -> Result<()> {
    let rule = separator();

    writeln!(out, "{}", WELCOME).context("Failed to write banner")?;
    writeln!(out, "{}", rule).context("Failed to write banner")?;
    writeln!(out, "{}", DESCRIPTION).context("Failed to write banner")?;
    for feature in FEATURES {
        writeln!(out, "{}", feature).context("Failed to write banner")?;
    }
    writeln!(out, "{}", rule).context("Failed to write banner")?;

    Ok(())
}
