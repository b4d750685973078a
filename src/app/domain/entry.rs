/// Number of cells on the code pad.
pub const CELL_COUNT: usize = 4;

/// The digits currently typed into the code pad. Each slot is empty or holds
/// exactly one ASCII digit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryBuffer {
    cells: [Option<char>; CELL_COUNT],
}

impl EntryBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, index: usize) -> Option<char> {
        self.cells.get(index).copied().flatten()
    }

    /// Store `digit` in `index`. Non-digits and out-of-range indices are ignored.
    pub fn set(&mut self, index: usize, digit: char) {
        if digit.is_ascii_digit() {
            if let Some(cell) = self.cells.get_mut(index) {
                *cell = Some(digit);
            }
        }
    }

    pub fn clear_cell(&mut self, index: usize) {
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = None;
        }
    }

    pub fn clear(&mut self) {
        self.cells = [None; CELL_COUNT];
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// The cells concatenated in order; empty cells contribute nothing.
    pub fn code(&self) -> String {
        self.cells.iter().flatten().collect()
    }
}
