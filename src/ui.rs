//! Output for the command-line tool.
//!
//! Results go to stdout, diagnostics to stderr. Styling is dropped
//! automatically when the stream is not a terminal.

use console::style;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold().for_stderr(), message);
}

/// Print the bumped version on its own line.
pub fn display_version(rendered: &str) {
    println!("{}", rendered);
}

/// Print the named-field record; the text already ends with a newline.
pub fn display_fields(table: &str) {
    print!("{}", table);
}
