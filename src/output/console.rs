//! Console output utilities.

use console::style;

use crate::output::events::{Event, Level};

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("OK").green().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print a processing event with the prefix matching its level.
pub fn print_event(event: &Event) {
    let message = event.to_string();
    match event.level() {
        Level::Info => print_info(&message),
        Level::Success => print_success(&message),
        Level::Warning => print_warning(&message),
        Level::Error => print_error(&message),
    }
}

/// Print the application banner.
pub fn print_banner() {
    let banner = r#"
╔═══════════════════════════════════════════════════════╗
║     hashnamer                                         ║
║     Deduplicate folders and rename files to hashes    ║
╚═══════════════════════════════════════════════════════╝
"#;
    println!("{}", style(banner).cyan());
}

/// Print configuration summary.
pub fn print_config_summary(folders: &[String], delete_mode: &str, verify: bool) {
    println!();
    println!("{}", style("Configuration:").bold());
    println!("  Folders: {}", folders.join(", "));
    println!("  Duplicates: {}", delete_mode);
    println!(
        "  Verify bytes: {}",
        if verify { "yes" } else { "no (fingerprint only)" }
    );
    println!();
}
