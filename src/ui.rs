use console::style;

/// Format an error line for the terminal.
pub fn format_error(message: &str) -> String {
    format!("{} {}", style("ERROR:").for_stderr().red().bold(), message)
}

/// Print an error message in red on stderr.
pub fn display_error(message: &str) {
    eprintln!("{}", format_error(message));
}
