use colored::Colorize;
use jewel_core::{DumpReport, StatFrequencyMap};
use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

pub fn write_sweep_summary<W: Write>(
    out: &mut W,
    found: &StatFrequencyMap,
    output: &Path,
    total_duration: Duration,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "📊 Stat Sweep Summary".bright_cyan().bold())?;
    writeln!(out, "{}", "=====================".cyan())?;

    for (jewel_type, counts) in found.iter() {
        let occurrences: u64 = counts.values().sum();
        writeln!(
            out,
            "{:16} {} distinct stats, {} occurrences",
            jewel_type.to_string().bold(),
            counts.len().to_string().green(),
            occurrences
        )?;
    }

    writeln!(out, "Total time: {total_duration:?}")?;
    writeln!(out, "Wrote {}", output.display())?;
    Ok(())
}

pub fn write_dump_summary<W: Write>(out: &mut W, report: &DumpReport, path: &Path) -> io::Result<()> {
    writeln!(
        out,
        "Found {} alternate passives",
        report.alternate_count().to_string().green()
    )?;
    writeln!(
        out,
        "Found {} additive passives",
        report.additive_count().to_string().green()
    )?;
    if report.is_empty() {
        writeln!(out, "{}", "Jewel changes nothing for this seed".yellow())?;
    }
    writeln!(out, "Successfully wrote {}", path.display())?;
    Ok(())
}
