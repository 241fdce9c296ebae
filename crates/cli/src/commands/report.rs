use anyhow::Context;
use egg_scramble_sim::writer::read_results;

use crate::output;

pub fn run(path: &str) -> anyhow::Result<()> {
    let results =
        read_results(path).with_context(|| format!("Failed to read results file {}", path))?;
    if results.is_empty() {
        anyhow::bail!("No result rows in {}", path);
    }
    output::print_report(&results);
    Ok(())
}
