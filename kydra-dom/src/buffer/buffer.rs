use super::Cell;
use crate::types::Rgb;

#[derive(Debug, Clone)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    pub fn new(width: u16, height: u16) -> Self {
        let cells = vec![Cell::default(); (width as usize) * (height as usize)];
        Self {
            width,
            height,
            cells,
        }
    }

    /// A buffer pre-filled with a background color.
    pub fn filled(width: u16, height: u16, bg: Rgb) -> Self {
        let mut buf = Self::new(width, height);
        for cell in &mut buf.cells {
            cell.bg = bg;
        }
        buf
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if x < self.width && y < self.height {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            Some(&mut self.cells[idx])
        } else {
            None
        }
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            self.cells[idx] = cell;
        }
    }

    fn index(&self, x: u16, y: u16) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Plain-text snapshot of the buffer, one string per row with trailing
    /// spaces trimmed.
    pub fn to_lines(&self) -> Vec<String> {
        (0..self.height)
            .map(|y| {
                let line: String = (0..self.width)
                    .filter_map(|x| self.get(x, y))
                    .filter(|cell| !cell.wide_continuation)
                    .map(|cell| cell.char)
                    .collect();
                line.trim_end().to_string()
            })
            .collect()
    }

    /// Locate the first occurrence of `needle` in the text snapshot.
    /// Returns the (column, row) of its first cell.
    pub fn find_text(&self, needle: &str) -> Option<(u16, u16)> {
        self.to_lines().iter().enumerate().find_map(|(y, line)| {
            line.find(needle).map(|byte_idx| {
                let col = crate::text::display_width(&line[..byte_idx]);
                (col as u16, y as u16)
            })
        })
    }

    pub fn clear(&mut self) {
        self.fill(Rgb::new(0, 0, 0));
    }

    /// Reset every cell to a blank with the given background.
    pub fn fill(&mut self, bg: Rgb) {
        for cell in &mut self.cells {
            *cell = Cell::default().with_bg(bg);
        }
    }

    /// Cells that differ from `previous`, as (x, y, cell). Every cell counts
    /// as changed when the sizes differ.
    pub fn diff<'a>(&'a self, previous: &'a Buffer) -> impl Iterator<Item = (u16, u16, &'a Cell)> + 'a {
        let resized = self.width != previous.width || self.height != previous.height;
        let width = self.width.max(1) as usize;
        self.cells
            .iter()
            .enumerate()
            .filter(move |(i, cell)| resized || previous.cells.get(*i) != Some(*cell))
            .map(move |(i, cell)| ((i % width) as u16, (i / width) as u16, cell))
    }
}
