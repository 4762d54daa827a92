//! Statistics reporting.

use console::style;

use crate::process::{FolderSummary, RunSummary};

/// Print statistics for a single folder.
pub fn print_folder_stats(summary: &FolderSummary) {
    println!();
    println!(
        "{}",
        style(format!("Statistics for {}:", summary.folder.display())).bold()
    );
    println!("  Files:      {}", summary.files);
    println!("  Duplicates: {} (removed)", summary.duplicates);
    println!("  Renamed:    {}", summary.renamed);
    println!("  Unchanged:  {} (already hash-named)", summary.already_named);
    if summary.parked > 0 {
        println!("  Cycles:     {} broken", summary.parked);
    }
    if summary.failed > 0 {
        println!("  Failed:     {}", style(summary.failed).red());
    }
}

/// Print totals across all folders.
pub fn print_run_stats(run: &RunSummary) {
    println!();
    println!("{}", style("═".repeat(50)).dim());
    println!("{}", style("Totals:").bold());
    println!("  Folders processed: {}", run.folders.len());
    println!("  Files:      {}", run.files());
    println!("  Duplicates: {}", run.duplicates());
    println!("  Renamed:    {}", run.renamed());
    println!("  Unchanged:  {}", run.already_named());
    if run.failed() > 0 {
        println!("  Failed:     {}", style(run.failed()).red());
    }
    println!("{}", style("═".repeat(50)).dim());
}

/// Print a summary line for quick viewing.
pub fn print_summary(run: &RunSummary) {
    println!(
        "Processed {} files: {} renamed, {} unchanged ({} duplicates removed)",
        run.files(),
        style(run.renamed()).green(),
        style(run.already_named()).green(),
        style(run.duplicates()).yellow()
    );
}
