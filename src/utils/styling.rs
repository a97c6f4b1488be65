//! Terminal styling utilities

use console::{style, Emoji};
use std::path::Path;

// Emoji icons with fallbacks for terminals that don't support them
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static WARN: Emoji<'_, '_> = Emoji("⚠️  ", "[!] ");
pub static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", ">> ");
pub static FOLDER: Emoji<'_, '_> = Emoji("📂 ", "");
pub static CHART: Emoji<'_, '_> = Emoji("📊 ", "");
pub static SAVE: Emoji<'_, '_> = Emoji("💾 ", "");

/// Print the application banner
pub fn print_banner(version: &str) {
    println!();
    println!(
        "    {} {}",
        style("tabscope").cyan().bold(),
        style(format!("v{}", version)).dim()
    );
    println!("    {}", style("Exploratory analysis for tabular data").dim());
    println!("    {}", style("━".repeat(50)).dim());
    println!();
}

/// Print the configuration card
pub fn print_config(input: &Path, menu: &str, export: Option<&Path>) {
    let box_width = 56;
    let line = "─".repeat(box_width - 2);

    println!("    ┌{}┐", line);
    println!("    │ {:<52} │", style("Configuration").cyan().bold());
    println!("    ├{}┤", line);
    println!("    │  {}Input:  {:<42}│", FOLDER, truncate_path(input, 40));
    println!("    │  {}Menu:   {:<42}│", CHART, truncate_string(menu, 40));
    if let Some(path) = export {
        println!("    │  {}Export: {:<42}│", SAVE, truncate_path(path, 40));
    }
    println!("    └{}┘", line);
    println!();
}

/// Print a section header
pub fn print_step_header(step_num: u8, title: &str) {
    println!();
    println!(
        "    {} {} {}",
        style(format!("STEP {}", step_num)).cyan().bold(),
        style("│").dim(),
        style(title).white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
}

/// Print a bold sub-heading inside a section
pub fn print_subheading(title: &str) {
    println!();
    println!("    {}", style(title).white().bold());
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("    {} {}", style("✓").green().bold(), style(message).green());
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("    {}{}", INFO, message);
}

/// Print a non-fatal warning
pub fn print_warning(message: &str) {
    println!("    {}{}", WARN, style(message).yellow());
}

/// Print a fatal error to stderr
pub fn print_error(message: &str) {
    eprintln!("    {} {}", style("✗").red().bold(), style(message).red());
}

/// Print the final completion message
pub fn print_completion() {
    println!();
    println!(
        "    {}{}",
        ROCKET,
        style("Analysis complete!").green().bold()
    );
    println!();
}

/// Print each line indented under the current section
pub fn print_indented(lines: &str) {
    for line in lines.lines() {
        println!("    {}", line);
    }
}

fn truncate_path(path: &Path, max_len: usize) -> String {
    let path_str = path.display().to_string();
    truncate_string(&path_str, max_len)
}

/// Keep the tail of a string, prefixed with "...", when it exceeds `max_len` characters.
pub fn truncate_string(s: &str, max_len: usize) -> String {
    let len = s.chars().count();
    if len <= max_len {
        s.to_string()
    } else {
        let tail: String = s.chars().skip(len - max_len + 3).collect();
        format!("...{}", tail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_keeps_short_strings() {
        assert_eq!(truncate_string("data.csv", 20), "data.csv");
    }

    #[test]
    fn test_truncate_keeps_tail() {
        let out = truncate_string("/very/long/path/to/data.csv", 12);
        assert_eq!(out, ".../data.csv");
        assert_eq!(out.chars().count(), 12);
    }

    #[test]
    fn test_truncate_handles_multibyte() {
        let out = truncate_string("ééééééééé", 6);
        assert_eq!(out, "...ééé");
    }
}
