use crate::OutputFormat;
use anyhow::Context;
use serde::Serialize;
use std::cell::{RefCell, RefMut};
use std::io::{Read, Write};
use std::path::Path;

/// Output context shared by every subcommand
pub struct Viewer {
    writer: RefCell<Box<dyn Write>>,
    format: OutputFormat,
}

impl Viewer {
    pub fn new(writer: Box<dyn Write>, format: OutputFormat) -> Self {
        Viewer {
            writer: RefCell::new(writer),
            format,
        }
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn Write>> {
        self.writer.borrow_mut()
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn write_json<T: Serialize + ?Sized>(&self, value: &T) -> anyhow::Result<()> {
        let mut writer = self.writer();
        serde_json::to_writer_pretty(&mut *writer, value)?;
        writeln!(writer)?;
        Ok(())
    }
}

/// Read the whole input from a file, or from stdin when no file is given
pub fn read_input(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("failed to read stdin")?;
            Ok(input)
        }
    }
}

/// `#rrggbb` to an RGB triple for truecolor output
pub(crate) fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(hex.get(range)?, 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}
