//! Location parsing for CLI commands
//!
//! Accepts `file:line[:column]`, 1-indexed, with Windows drive prefixes.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};

use crate::infra::text;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLocation {
    pub file: PathBuf,
    pub line: u32,
    pub column: u32,
}

impl ParsedLocation {
    /// Parse location string and convert to an absolute path in one step
    pub fn parse_absolute(input: &str) -> Result<Self> {
        Self::parse(input)?.to_absolute()
    }

    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();
        if input.is_empty() {
            bail!("Location cannot be empty");
        }

        let split = Self::position_separator(input).with_context(|| {
            format!(
                "Invalid location '{}'. Expected: file:line[:column]\nExample: src/app/app.component.ts:12:18",
                input
            )
        })?;

        let (file_part, rest) = (&input[..split], &input[split + 1..]);
        if rest.starts_with('-') {
            bail!("Invalid line number: negative values not allowed. Lines are 1-indexed.");
        }

        let mut parts = rest.splitn(2, ':');
        let line = Self::parse_number(parts.next().unwrap_or(""), "line")?;
        let column = match parts.next() {
            Some(col) => Self::parse_number(col, "column")?,
            None => 1,
        };

        Ok(Self {
            file: PathBuf::from(file_part),
            line,
            column,
        })
    }

    /// First ':' followed by a digit or '-', skipping a drive prefix like `C:`
    fn position_separator(input: &str) -> Option<usize> {
        let bytes = input.as_bytes();
        let is_windows =
            bytes.len() > 2 && bytes[1] == b':' && bytes[0].is_ascii_alphabetic();
        let search_start = if is_windows { 2 } else { 0 };

        input[search_start..]
            .char_indices()
            .filter(|(_, ch)| *ch == ':')
            .map(|(i, _)| search_start + i)
            .find(|&pos| {
                input[pos + 1..]
                    .chars()
                    .next()
                    .is_some_and(|c| c.is_ascii_digit() || c == '-')
            })
    }

    fn parse_number(value: &str, what: &str) -> Result<u32> {
        if value.starts_with('-') {
            bail!("Invalid {} number '{}': negative values not allowed", what, value);
        }
        let number: u32 = value.parse().map_err(|_| {
            anyhow::anyhow!(
                "Invalid {} number '{}': must be a positive integer (1-indexed)",
                what,
                value
            )
        })?;
        if number == 0 {
            bail!("{} number must be >= 1 (got 0)", capitalize(what));
        }
        Ok(number)
    }

    /// Resolve the file against the current directory
    pub fn to_absolute(&self) -> Result<Self> {
        let file = if self.file.is_absolute() {
            self.file.clone()
        } else {
            std::env::current_dir()
                .context("Failed to get current directory")?
                .join(&self.file)
        };

        let canonical = file
            .canonicalize()
            .map_err(|_| anyhow::anyhow!("File not found: {}", file.display()))?;

        Ok(Self {
            file: canonical,
            line: self.line,
            column: self.column,
        })
    }

    /// Byte offset of this location in `content`
    pub fn offset_in(&self, content: &str) -> Result<usize> {
        text::offset_at(content, self.line, self.column).with_context(|| {
            format!(
                "Position {}:{} is outside {}",
                self.line,
                self.column,
                self.file.display()
            )
        })
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl std::fmt::Display for ParsedLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file.display(), self.line, self.column)
    }
}
