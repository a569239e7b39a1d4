//! Terminal rendering module for rich markdown output
//!
//! This module provides terminal rendering capabilities using termimad
//! for rich markdown display with optional fallback to plain text.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render a plan or lifecycle state to the terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if self.rich_enabled {
            for line in markdown.lines() {
                println!("{}", self.style_line(line));
            }
        } else {
            print!("{markdown}");
        }
        Ok(())
    }

    /// Headings in blue, a failure line with a red `Error:` label, anything
    /// else through the markdown skin.
    fn style_line(&self, line: &str) -> String {
        if line.starts_with('#') {
            format!("\x1b[34m{line}\x1b[0m")
        } else if let Some(message) = line.strip_prefix("Error: ") {
            format!("\x1b[31mError:\x1b[0m {message}")
        } else {
            self.skin.inline(line).to_string()
        }
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
