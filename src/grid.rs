use std::fmt;

use num::{One, Zero};

use crate::convert::to_index;
use crate::line::Point;

/// Fixed-size field of cells, stored row by row.
///
/// A cell counts as marked when it holds a non-zero value. Lines are
/// written with `T::one()`.
#[derive(Debug, PartialEq, Clone)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    buffer: Vec<T>,
}

impl<T> Grid<T>
where
    T: Copy + Zero + One,
{
    pub fn new(width: usize, height: usize) -> Grid<T> {
        Grid {
            width,
            height,
            buffer: vec![T::zero(); width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, point: Point) -> bool {
        self.index(point).is_some()
    }

    pub fn get(&self, x: usize, y: usize) -> Option<T> {
        if x < self.width && y < self.height {
            Some(self.buffer[y * self.width + x])
        } else {
            None
        }
    }

    pub fn is_marked(&self, point: Point) -> bool {
        match self.index(point) {
            Some(idx) => !self.buffer[idx].is_zero(),
            None => false,
        }
    }

    /// Marks the cell at `point`. Returns `false` without writing anything
    /// if `point` lies outside the grid.
    pub fn mark(&mut self, point: Point) -> bool {
        match self.index(point) {
            Some(idx) => {
                self.buffer[idx] = T::one();
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        for cell in &mut self.buffer {
            *cell = T::zero();
        }
    }

    /// Iterates over marked cells in row-major order.
    pub fn marked<'a>(&'a self) -> impl Iterator<Item = Point> + 'a {
        let width = self.width;
        self.buffer
            .iter()
            .enumerate()
            .filter(|(_, cell)| !cell.is_zero())
            .map(move |(idx, _)| {
                Point::new((idx % width) as i32, (idx / width) as i32)
            })
    }

    pub fn count_marked(&self) -> usize {
        self.buffer.iter().filter(|cell| !cell.is_zero()).count()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.buffer
    }

    fn index(&self, point: Point) -> Option<usize> {
        let x = to_index(point.x, self.width)?;
        let y = to_index(point.y, self.height)?;
        Some(y * self.width + x)
    }
}

impl<T> fmt::Display for Grid<T>
where
    T: Copy + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.width == 0 {
            return Ok(());
        }
        let mut text = String::with_capacity((self.width + 1) * self.height);
        for chunk in self.buffer.chunks(self.width) {
            for cell in chunk {
                text.push(if cell.is_zero() { '.' } else { '#' });
            }
            text.push('\n');
        }
        write!(f, "{}", text)?;
        Ok(())
    }
}
