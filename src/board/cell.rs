/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{
    fmt,
    ops::{Index, IndexMut},
    str::FromStr,
};

use anyhow::{bail, Result};

use super::BoardError;

/// File letter of every sector, indexed by sector.
///
/// Runs backwards from sector 11 (`a`) to sector 0 (`l`), then continues from sector 15 (`m`) to sector 12 (`p`).
#[rustfmt::skip]
const SECTOR_FILES: [char; Cell::SECTORS] = [
    'l', 'k', 'j', 'i', 'h', 'g', 'f', 'e',
    'd', 'c', 'b', 'a', 'p', 'o', 'n', 'm',
];

/// One of the two halves of the board that decide which way a Pawn advances.
///
/// Sectors `12..=15` and `0..=3` form the left half, sectors `4..=11` the right half.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub enum Hemisphere {
    Left,
    Right,
}

impl Hemisphere {
    /// Number of hemispheres.
    pub const COUNT: usize = 2;

    /// Classifies the provided sector, which is wrapped onto the board first.
    ///
    /// # Example
    /// ```
    /// # use circular_chess::Hemisphere;
    /// assert_eq!(Hemisphere::of(0), Hemisphere::Left);
    /// assert_eq!(Hemisphere::of(4), Hemisphere::Right);
    /// assert_eq!(Hemisphere::of(12), Hemisphere::Left);
    /// assert_eq!(Hemisphere::of(16), Hemisphere::Left);
    /// ```
    #[inline(always)]
    pub const fn of(sector: u8) -> Self {
        let sector = sector as usize % Cell::SECTORS;
        if sector <= 3 || sector >= 12 {
            Self::Left
        } else {
            Self::Right
        }
    }

    /// Returns this [`Hemisphere`] as a `usize`, for indexing into tables.
    #[inline(always)]
    pub const fn index(&self) -> usize {
        *self as usize
    }
}

/// A single cell on the circular board, addressed by annulus and sector.
///
/// Annuli are the four concentric rings, `0` being the innermost and `3` the outermost.
/// Sectors are the sixteen angular slices, numbered `0..16`.
/// Sector arithmetic wraps (sector `15 + 1` is sector `0`); annulus arithmetic does not.
///
/// ```text
/// annulus 3 | 48 49 50 51 52 53 54 55 56 57 58 59 60 61 62 63
/// annulus 2 | 32 33 34 35 36 37 38 39 40 41 42 43 44 45 46 47
/// annulus 1 | 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31
/// annulus 0 |  0  1  2  3  4  5  6  7  8  9 10 11 12 13 14 15
///           +------------------------------------------------
///    sector    0  1  2  3  4  5  6  7  8  9 10 11 12 13 14 15
///    file      l  k  j  i  h  g  f  e  d  c  b  a  p  o  n  m
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Cell {
    annulus: u8,
    sector: u8,
}

impl Cell {
    /// Number of annuli (rings) on the board.
    pub const ANNULI: usize = 4;

    /// Number of sectors in every annulus.
    pub const SECTORS: usize = 16;

    /// Number of cells on the board.
    pub const COUNT: usize = Self::ANNULI * Self::SECTORS;

    /// An iterator over all cells, innermost annulus first and by ascending sector within an annulus.
    ///
    /// # Example
    /// ```
    /// # use circular_chess::Cell;
    /// let mut iter = Cell::iter();
    /// assert_eq!(iter.len(), 64);
    /// assert_eq!(iter.next().unwrap(), Cell::new(0, 0).unwrap());
    /// assert_eq!(iter.last().unwrap(), Cell::new(3, 15).unwrap());
    /// ```
    #[inline(always)]
    pub fn iter() -> impl ExactSizeIterator<Item = Self> + DoubleEndedIterator<Item = Self> {
        (0..Self::COUNT).map(Self::from_index_unchecked)
    }

    /// Creates a new [`Cell`], rejecting any annulus outside `[0, 4)` or sector outside `[0, 16)`.
    ///
    /// # Example
    /// ```
    /// # use circular_chess::{BoardError, Cell};
    /// let cell = Cell::new(3, 10).unwrap();
    /// assert_eq!(cell.annulus(), 3);
    /// assert_eq!(cell.sector(), 10);
    ///
    /// assert!(matches!(Cell::new(4, 0), Err(BoardError::OutOfBoundsCell { .. })));
    /// assert!(matches!(Cell::new(0, 16), Err(BoardError::OutOfBoundsCell { .. })));
    /// ```
    #[inline(always)]
    pub fn new(annulus: u8, sector: u8) -> Result<Self, BoardError> {
        if annulus as usize >= Self::ANNULI || sector as usize >= Self::SECTORS {
            return Err(BoardError::OutOfBoundsCell {
                annulus: annulus as i16,
                sector: sector as i16,
            });
        }

        Ok(Self { annulus, sector })
    }

    /// Creates a new [`Cell`] without bounds checking.
    ///
    /// # Panics
    /// If `annulus >= 4` or `sector >= 16` and debug assertions are enabled.
    #[inline(always)]
    pub const fn new_unchecked(annulus: u8, sector: u8) -> Self {
        debug_assert!(
            (annulus as usize) < Self::ANNULI && (sector as usize) < Self::SECTORS,
            "Cell must lie within a 4x16 board"
        );
        Self { annulus, sector }
    }

    /// Creates a new [`Cell`] from its index (`annulus * 16 + sector`), without bounds checking.
    #[inline(always)]
    pub const fn from_index_unchecked(index: usize) -> Self {
        Self::new_unchecked(
            (index / Self::SECTORS) as u8,
            (index % Self::SECTORS) as u8,
        )
    }

    /// Wraps any sector onto `[0, 16)`.
    ///
    /// # Example
    /// ```
    /// # use circular_chess::Cell;
    /// assert_eq!(Cell::wrap_sector(16), 0);
    /// assert_eq!(Cell::wrap_sector(-1), 15);
    /// assert_eq!(Cell::wrap_sector(7), 7);
    /// ```
    #[inline(always)]
    pub const fn wrap_sector(sector: i16) -> u8 {
        sector.rem_euclid(Self::SECTORS as i16) as u8
    }

    /// Returns `true` if `annulus` lies on the board.
    ///
    /// Sectors are always on the board once wrapped, so only the annulus needs checking.
    #[inline(always)]
    pub const fn in_bounds(annulus: i16) -> bool {
        0 <= annulus && annulus < Self::ANNULI as i16
    }

    /// Fetches the annulus of this [`Cell`].
    #[inline(always)]
    pub const fn annulus(&self) -> u8 {
        self.annulus
    }

    /// Fetches the sector of this [`Cell`].
    #[inline(always)]
    pub const fn sector(&self) -> u8 {
        self.sector
    }

    /// Returns this [`Cell`] as a `usize` in `[0, 64)`.
    #[inline(always)]
    pub const fn index(&self) -> usize {
        self.annulus as usize * Self::SECTORS + self.sector as usize
    }

    /// Attempt to offset this [`Cell`] by an annulus and sector delta.
    ///
    /// The sector wraps around the board. If the annulus would leave the board, `None` is returned.
    ///
    /// # Example
    /// ```
    /// # use circular_chess::Cell;
    /// let cell = Cell::new(0, 0).unwrap();
    /// assert_eq!(cell.offset(1, -2), Some(Cell::new(1, 14).unwrap()));
    /// assert_eq!(cell.offset(0, 17), Some(Cell::new(0, 1).unwrap()));
    /// assert_eq!(cell.offset(-1, 0), None);
    /// ```
    #[inline(always)]
    pub const fn offset(&self, annulus_delta: i8, sector_delta: i8) -> Option<Self> {
        let annulus = self.annulus as i16 + annulus_delta as i16;
        if !Self::in_bounds(annulus) {
            return None;
        }

        let sector = Self::wrap_sector(self.sector as i16 + sector_delta as i16);
        Some(Self::new_unchecked(annulus as u8, sector))
    }

    /// Number of sector steps between two cells, going whichever way around the board is shorter.
    ///
    /// # Example
    /// ```
    /// # use circular_chess::Cell;
    /// let a = Cell::new(0, 1).unwrap();
    /// let b = Cell::new(2, 15).unwrap();
    /// assert_eq!(a.distance_sectors(b), 2);
    /// ```
    #[inline(always)]
    pub const fn distance_sectors(&self, other: Self) -> u8 {
        let diff = self.sector.abs_diff(other.sector);
        if diff as usize > Self::SECTORS / 2 {
            Self::SECTORS as u8 - diff
        } else {
            diff
        }
    }

    /// The file letter of this [`Cell`]'s sector.
    #[inline(always)]
    pub const fn file(&self) -> char {
        SECTOR_FILES[self.sector as usize]
    }

    /// The rank digit of this [`Cell`]'s annulus, `'1'` being the innermost annulus.
    #[inline(always)]
    pub const fn rank(&self) -> char {
        (b'1' + self.annulus) as char
    }

    /// Creates a [`Cell`] from its file letter and rank digit.
    ///
    /// # Example
    /// ```
    /// # use circular_chess::Cell;
    /// let cell = Cell::from_notation("c4").unwrap();
    /// assert_eq!(cell, Cell::new(3, 9).unwrap());
    ///
    /// assert!(Cell::from_notation("q1").is_err());
    /// assert!(Cell::from_notation("a5").is_err());
    /// ```
    pub fn from_notation(cell: &str) -> Result<Self> {
        let mut chars = cell.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            bail!("Invalid Cell string: String must contain exactly 2 characters. Got {cell:?}");
        };

        let Some(sector) = SECTOR_FILES
            .iter()
            .position(|&f| f == file.to_ascii_lowercase())
        else {
            bail!("Invalid file {file:?}: Files must be between [a, p]");
        };

        let Some(annulus) = rank
            .to_digit(10)
            .and_then(|r| r.checked_sub(1))
            .filter(|&a| (a as usize) < Self::ANNULI)
        else {
            bail!("Invalid rank {rank:?}: Ranks must be between [1, {}]", Self::ANNULI);
        };

        Ok(Self::new_unchecked(annulus as u8, sector as u8))
    }

    /// Converts this [`Cell`] to its file letter and rank digit.
    ///
    /// # Example
    /// ```
    /// # use circular_chess::Cell;
    /// assert_eq!(Cell::new(0, 11).unwrap().to_notation(), "a1");
    /// assert_eq!(Cell::new(3, 12).unwrap().to_notation(), "p4");
    /// ```
    #[inline(always)]
    pub fn to_notation(self) -> String {
        format!("{}{}", self.file(), self.rank())
    }
}

impl FromStr for Cell {
    type Err = anyhow::Error;
    /// Wrapper for [`Cell::from_notation`].
    #[inline(always)]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_notation(s)
    }
}

impl TryFrom<&str> for Cell {
    type Error = anyhow::Error;
    #[inline(always)]
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_notation(value)
    }
}

impl<T> Index<Cell> for [[T; Cell::SECTORS]; Cell::ANNULI] {
    type Output = T;
    #[inline(always)]
    fn index(&self, index: Cell) -> &Self::Output {
        &self[index.annulus as usize][index.sector as usize]
    }
}

impl<T> IndexMut<Cell> for [[T; Cell::SECTORS]; Cell::ANNULI] {
    #[inline(always)]
    fn index_mut(&mut self, index: Cell) -> &mut Self::Output {
        &mut self[index.annulus as usize][index.sector as usize]
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

impl fmt::Debug for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self} ({}, {})", self.annulus, self.sector)
    }
}
