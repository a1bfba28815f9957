use crate::config::constants::ui::{KEY_COLUMN_WIDTH, RULE_WIDTH};
use console::style;

pub fn print_success(text: &str) {
    println!("{}", style(format!("✓ {text}")).green());
}

pub fn print_error(text: &str) {
    println!("{}", style(format!("✗ {text}")).red());
}

pub fn print_warning(text: &str) {
    println!("{}", style(format!("⚠ {text}")).yellow());
}

pub fn print_info(text: &str) {
    println!("{}", style(format!("→ {text}")).cyan());
}

pub fn print_rule() {
    println!("{}", "=".repeat(RULE_WIDTH));
}

/// Title block shown when the tool starts
pub fn print_banner(title: &str, host: &str) {
    println!();
    print_rule();
    println!("{}", style(format!("  {title} setup")).cyan().bold());
    print_rule();
    println!("  System: {host}");
    println!();
}

pub fn print_entry(key: &str, value: &str) {
    println!("{}", format_entry(key, value));
}

/// `  KEY<padding> = value`, aligned for the variable names in use
pub fn format_entry(key: &str, value: &str) -> String {
    format!("  {key:<KEY_COLUMN_WIDTH$} = {value}")
}
