use std::fmt::{Display, Formatter};
use std::str::FromStr;

use rand::Rng;

use crate::alphabet::random_letter;
use crate::boggle::position::Position;
use crate::error::{Error, Result};

/// A square grid of letters, stored row-major. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    dimension: usize,
    cells: Vec<char>,
}

impl Board {
    /// Fails when `dimension` is zero or too large to square, or when `cells`
    /// does not hold exactly `dimension * dimension` letters.
    pub fn new(dimension: usize, cells: Vec<char>) -> Result<Board> {
        let expected = Board::cell_count(dimension)?;
        if cells.len() != expected {
            return Err(Error::CellCountMismatch { dimension, expected, found: cells.len() });
        }
        Ok(Board { dimension, cells })
    }

    pub fn from_letters(dimension: usize, letters: &str) -> Result<Board> {
        Board::new(dimension, letters.chars().collect())
    }

    /// Reads a board either as one run of N² letters, or as N whitespace
    /// separated rows of N letters each.
    pub fn parse(s: &str) -> Result<Board> {
        let rows: Vec<Vec<char>> = s.split_whitespace().map(|row| row.chars().collect()).collect();
        match rows.len() {
            0 => Err(Error::InvalidDimension(0)),
            1 => {
                let cells = rows.into_iter().next().unwrap_or_default();
                let dimension = (cells.len() as f64).sqrt().round() as usize;
                Board::new(dimension, cells)
            }
            n => {
                if let Some(row) = rows.iter().find(|row| row.len() != n) {
                    return Err(Error::NotSquare { rows: n, width: row.len() });
                }
                Board::new(n, rows.concat())
            }
        }
    }

    pub fn random<R: Rng + ?Sized>(dimension: usize, rng: &mut R) -> Result<Board> {
        let count = Board::cell_count(dimension)?;
        Board::new(dimension, (0..count).map(|_| random_letter(rng)).collect())
    }

    fn cell_count(dimension: usize) -> Result<usize> {
        if dimension == 0 {
            return Err(Error::InvalidDimension(dimension));
        }
        dimension.checked_mul(dimension).ok_or(Error::InvalidDimension(dimension))
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn cells(&self) -> &[char] {
        &self.cells
    }

    pub fn get(&self, position: Position) -> Option<char> {
        if position.row >= self.dimension || position.col >= self.dimension {
            return None;
        }
        self.cells.get(position.index(self.dimension)).copied()
    }

    /// Every cell, row by row.
    pub fn positions(&self) -> impl Iterator<Item=Position> + '_ {
        (0..self.cells.len()).map(move |i| Position::from_index(i, self.dimension))
    }

    /// The up to eight in-bounds cells touching `position`.
    pub fn neighbors(&self, position: Position) -> impl Iterator<Item=Position> {
        let last = self.dimension - 1;
        let rows = position.row.saturating_sub(1)..=(position.row + 1).min(last);
        rows.flat_map(move |row| {
            let cols = position.col.saturating_sub(1)..=(position.col + 1).min(last);
            cols.map(move |col| Position::new(row, col))
        }).filter(move |p| *p != position)
    }

    /// Finds one path spelling `word` without reusing a cell, ignoring any
    /// dictionary.
    pub fn trace(&self, word: &str) -> Option<Vec<Position>> {
        let letters: Vec<char> = word.chars().collect();
        if letters.is_empty() {
            return None;
        }
        let mut path = Vec::with_capacity(letters.len());
        self.positions().find_map(|start| self.trace_from(start, &letters, &mut path))
    }

    fn trace_from(&self, position: Position, rest: &[char], path: &mut Vec<Position>) -> Option<Vec<Position>> {
        if path.contains(&position) || self.get(position) != Some(rest[0]) {
            return None;
        }
        path.push(position);
        if rest.len() == 1 {
            let found = path.clone();
            path.clear();
            return Some(found);
        }
        for next in self.neighbors(position) {
            if let Some(found) = self.trace_from(next, &rest[1..], path) {
                return Some(found);
            }
        }
        path.pop();
        None
    }
}

impl FromStr for Board {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Board::parse(s)
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.chunks(self.dimension) {
            let line: Vec<String> = row.iter().map(|c| c.to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
