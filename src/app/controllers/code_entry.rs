use crate::app::domain::entry::{CELL_COUNT, EntryBuffer};

/// What the pad should do after a cell's value changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellOutcome {
    /// The value was not a digit; the cell has been cleared.
    Rejected,
    /// Digit accepted; move focus to this cell.
    Advance(usize),
    /// Digit accepted in the last cell; submit the code.
    Submit,
}

pub struct CodeEntry {
    buffer: EntryBuffer,
}

impl CodeEntry {
    pub fn new() -> Self {
        Self {
            buffer: EntryBuffer::new(),
        }
    }

    /// Normalize a raw cell value after an edit.
    ///
    /// Only the last typed character is kept, so pasting or typing fast into a
    /// filled cell overwrites it.
    pub fn input(&mut self, index: usize, raw: &str) -> CellOutcome {
        if index >= CELL_COUNT {
            return CellOutcome::Rejected;
        }

        match raw.chars().last() {
            Some(ch) if ch.is_ascii_digit() => {
                self.buffer.set(index, ch);
                if index + 1 < CELL_COUNT {
                    CellOutcome::Advance(index + 1)
                } else {
                    CellOutcome::Submit
                }
            }
            _ => {
                self.buffer.clear_cell(index);
                CellOutcome::Rejected
            }
        }
    }

    /// Backspace in an empty cell moves back one cell.
    pub fn backspace(&self, index: usize) -> Option<usize> {
        if index > 0 && index < CELL_COUNT && self.buffer.get(index).is_none() {
            Some(index - 1)
        } else {
            None
        }
    }

    /// Canonical value of a cell, empty or a single digit.
    pub fn cell_value(&self, index: usize) -> String {
        self.buffer.get(index).map(String::from).unwrap_or_default()
    }

    pub fn entered(&self) -> String {
        self.buffer.code()
    }

    /// Exact comparison; an incomplete entry never matches a four-digit code.
    pub fn matches(&self, code: &str) -> bool {
        self.buffer.code() == code
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

impl Default for CodeEntry {
    fn default() -> Self {
        Self::new()
    }
}
