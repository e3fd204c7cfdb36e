//! Tab-aligned text tables
//!
//! Text is written with `\t` terminating each aligned cell. On render, every
//! column is padded with spaces to the widest cell in its block of adjacent
//! lines, plus one space. The cell after the last tab on a line is left as is.

use std::fmt;

const PADDING: usize = 1;

/// Buffer that aligns tab-separated columns when rendered
#[derive(Debug, Default, Clone)]
pub struct TabTable {
    buf: String,
}

impl TabTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append raw tab-separated text
    pub fn push_str(&mut self, s: &str) {
        self.buf.push_str(s);
    }

    /// Render the buffered text with aligned columns
    pub fn render(&self) -> String {
        let (cells, newlines): (Vec<Vec<&str>>, Vec<bool>) = self
            .buf
            .split_inclusive('\n')
            .map(|line| match line.strip_suffix('\n') {
                Some(content) => (content.split('\t').collect(), true),
                None => (line.split('\t').collect(), false),
            })
            .unzip();

        let mut widths: Vec<Vec<usize>> = cells.iter().map(|c| vec![0; c.len() - 1]).collect();
        layout(&cells, 0, 0, cells.len(), &mut widths);

        let mut out = String::with_capacity(self.buf.len());
        for ((line, newline), widths) in cells.iter().zip(&newlines).zip(&widths) {
            let (trailing, aligned) = line.split_last().unwrap_or((&"", &[]));
            for (cell, &width) in aligned.iter().zip(widths) {
                out.push_str(cell);
                let pad = width.saturating_sub(cell_width(cell));
                out.extend(std::iter::repeat(' ').take(pad));
            }
            out.push_str(trailing);
            if *newline {
                out.push('\n');
            }
        }
        out
    }
}

impl fmt::Write for TabTable {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.buf.push_str(s);
        Ok(())
    }
}

/// Assign widths for `column` over lines `start..end`, block by block
fn layout(cells: &[Vec<&str>], column: usize, start: usize, end: usize, widths: &mut [Vec<usize>]) {
    let mut line = start;
    while line < end {
        if cells[line].len() - 1 <= column {
            line += 1;
            continue;
        }

        let block_start = line;
        let mut width = 0;
        while line < end && cells[line].len() - 1 > column {
            width = width.max(cell_width(cells[line][column]) + PADDING);
            line += 1;
        }
        for w in &mut widths[block_start..line] {
            w[column] = width;
        }
        layout(cells, column + 1, block_start, line, widths);
    }
}

fn cell_width(cell: &str) -> usize {
    cell.chars().count()
}
