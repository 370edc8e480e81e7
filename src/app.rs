//! The welcome program itself: banner, two calculator examples, confirmation.

use std::io::Write;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::banner;
use crate::calculator::Calculator;

/// Operands of the addition example
pub const ADD_OPERANDS: (i32, i32) = (5, 3);

/// Input of the array-sum example
pub const NUMBERS: [i32; 5] = [1, 2, 3, 4, 5];

/// Write the full program output to `out`.
pub fn run<W: Write>(out: &mut W) -> Result<()> {
    info!("Starting welcome program");

    banner::write_banner(out)?;

    let calc = Calculator::new();

    let (a, b) = ADD_OPERANDS;
    let result = calc.add(a, b);
    debug!("add({}, {}) = {}", a, b, result);
    writeln!(out, "\nCalculation example: {} + {} = {}", a, b, result)
        .context("Failed to write calculation example")?;

    let total = calc.sum(&NUMBERS);
    debug!("sum({:?}) = {}", NUMBERS, total);
    writeln!(out, "Array sum: {}\n", total)
        .context("Failed to write array sum")?;

    writeln!(out, "{}", banner::SUCCESS).context("Failed to write confirmation")?;
    out.flush().context("Failed to flush output")?;

    info!("Welcome program finished");
    Ok(())
}
