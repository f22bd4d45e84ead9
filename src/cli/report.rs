//! Report formatting and printing utilities.
//!
//! Every action prints one summary line. Decode warnings and, in verbose
//! mode, the list of written files are printed alongside it.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use colored::Colorize;

use crate::core::{AddedItem, MessageLoadWarning, OperationReport, UpgradeReport};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print_warnings<W: Write>(warnings: &[MessageLoadWarning], writer: &mut W) -> io::Result<()> {
    for warning in warnings {
        writeln!(writer, "{} {}", "warning:".bold().yellow(), warning)?;
    }
    Ok(())
}

pub fn print_added<W: Write>(added: &AddedItem, verbose: bool, writer: &mut W) -> io::Result<()> {
    let report = &added.report;
    print_operation(
        report,
        format!(
            "Added \"{}\" to {} of {} locale files",
            added.key,
            report.files_changed,
            report.files_written.len()
        ),
        verbose,
        writer,
    )
}

pub fn print_removed<W: Write>(
    key: &str,
    report: &OperationReport,
    verbose: bool,
    writer: &mut W,
) -> io::Result<()> {
    print_operation(
        report,
        format!(
            "Removed \"{}\" from {} of {} locale files",
            key,
            report.files_changed,
            report.files_written.len()
        ),
        verbose,
        writer,
    )
}

pub fn print_renamed<W: Write>(
    old_key: &str,
    new_key: &str,
    report: &OperationReport,
    verbose: bool,
    writer: &mut W,
) -> io::Result<()> {
    print_operation(
        report,
        format!(
            "Renamed \"{}\" to \"{}\" in {} of {} locale files",
            old_key,
            new_key,
            report.files_changed,
            report.files_written.len()
        ),
        verbose,
        writer,
    )
}

pub fn print_decoded<W: Write>(
    report: &OperationReport,
    verbose: bool,
    writer: &mut W,
) -> io::Result<()> {
    print_operation(
        report,
        format!("Re-encoded {} locale files", report.files_written.len()),
        verbose,
        writer,
    )
}

pub fn print_upgraded<W: Write>(
    report: &UpgradeReport,
    verbose: bool,
    writer: &mut W,
) -> io::Result<()> {
    print_warnings(&report.warnings, writer)?;
    if verbose {
        print_files("created", &report.created, writer)?;
        print_files("updated", &report.merged, writer)?;
    }
    print_success(
        &format!(
            "Upgraded {} locales ({} created, {} keys added)",
            report.locales_processed(),
            report.created.len(),
            report.keys_added
        ),
        writer,
    )
}

pub fn print_config_created<W: Write>(path: &Path, writer: &mut W) -> io::Result<()> {
    print_success(&format!("Created {}", path.display()), writer)
}

pub fn print_config_exists<W: Write>(path: &Path, writer: &mut W) -> io::Result<()> {
    writeln!(
        writer,
        "{} {}",
        FAILURE_MARK.red(),
        format!("{} already exists", path.display()).red()
    )
}

fn print_operation<W: Write>(
    report: &OperationReport,
    summary: String,
    verbose: bool,
    writer: &mut W,
) -> io::Result<()> {
    print_warnings(&report.warnings, writer)?;
    if verbose {
        print_files("wrote", &report.files_written, writer)?;
    }
    print_success(&summary, writer)
}

fn print_files<W: Write>(label: &str, files: &[PathBuf], writer: &mut W) -> io::Result<()> {
    for file in files {
        writeln!(writer, "  {} {}", label.dimmed(), file.display())?;
    }
    Ok(())
}

fn print_success<W: Write>(message: &str, writer: &mut W) -> io::Result<()> {
    writeln!(writer, "{} {}", SUCCESS_MARK.green(), message.green())
}
