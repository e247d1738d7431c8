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

    /// Render markdown text to terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }

        for block in split_blocks(markdown) {
            match block {
                Block::Header(line) => println!("\x1b[34m{line}\x1b[0m"),
                Block::Table(rows) => self.skin.print_text(&rows),
                Block::Line(line) => {
                    self.skin.print_inline(line);
                    println!();
                }
            }
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

/// A run of markdown lines rendered the same way.
#[derive(Debug, PartialEq)]
enum Block<'a> {
    /// Headers keep their hash marks.
    Header(&'a str),
    /// Consecutive table rows, laid out together so columns align.
    Table(String),
    Line(&'a str),
}

fn split_blocks(markdown: &str) -> Vec<Block<'_>> {
    let mut blocks = Vec::new();
    let mut table = String::new();

    for line in markdown.lines() {
        if line.starts_with('|') {
            table.push_str(line);
            table.push('\n');
            continue;
        }
        if !table.is_empty() {
            blocks.push(Block::Table(std::mem::take(&mut table)));
        }
        if line.starts_with('#') {
            blocks.push(Block::Header(line));
        } else {
            blocks.push(Block::Line(line));
        }
    }
    if !table.is_empty() {
        blocks.push(Block::Table(table));
    }
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_renderer() {
        let renderer = TerminalRenderer::new(false);
        assert!(!renderer.rich_enabled);
    }

    #[test]
    fn test_default_is_rich() {
        let renderer = TerminalRenderer::default();
        assert!(renderer.rich_enabled);
    }

    #[test]
    fn test_split_blocks_groups_table_rows() {
        let markdown = "# Plan: Ship\n\n| # | Task |\n|---|------|\n| 1 | Build |\nSaved";
        let blocks = split_blocks(markdown);

        assert_eq!(
            blocks,
            vec![
                Block::Header("# Plan: Ship"),
                Block::Line(""),
                Block::Table("| # | Task |\n|---|------|\n| 1 | Build |\n".to_string()),
                Block::Line("Saved"),
            ]
        );
    }

    #[test]
    fn test_split_blocks_trailing_table() {
        let blocks = split_blocks("| a |\n| b |\n");
        assert_eq!(blocks, vec![Block::Table("| a |\n| b |\n".to_string())]);
    }
}
