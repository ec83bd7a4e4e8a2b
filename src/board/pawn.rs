/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::{Cell, Color, Hemisphere};

/// Sector each Pawn starts on, indexed by [`Color`] and then [`Hemisphere`].
const START_SECTORS: [[u8; Hemisphere::COUNT]; Color::COUNT] = [
    // White
    [13, 10],
    // Black
    [2, 5],
];

/// Last sector a Pawn can advance to, indexed by [`Color`] and then [`Hemisphere`].
const END_SECTORS: [[u8; Hemisphere::COUNT]; Color::COUNT] = [
    // White
    [3, 4],
    // Black
    [12, 11],
];

/// How a Pawn on a given sector moves.
///
/// Unlike a linear board, each side has two advance directions: one per [`Hemisphere`].
/// White advances towards higher sectors on the left half and towards lower sectors on the right half;
/// Black does the opposite. Nothing here is stored per Pawn; it is derived from the sector every time.
///
/// # Example
/// ```
/// # use circular_chess::{Color, Hemisphere, PawnOrientation};
/// let pawn = PawnOrientation::new(Color::White, 10);
/// assert_eq!(pawn.hemisphere(), Hemisphere::Right);
/// assert_eq!(pawn.direction(), -1);
/// assert_eq!(pawn.start_sector(), 10);
/// assert_eq!(pawn.end_sector(), 4);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PawnOrientation {
    hemisphere: Hemisphere,
    direction: i8,
    start_sector: u8,
    end_sector: u8,
}

impl PawnOrientation {
    /// Derives the orientation of a `color` Pawn standing on `sector`.
    #[inline(always)]
    pub const fn new(color: Color, sector: u8) -> Self {
        let hemisphere = Hemisphere::of(sector);
        let direction = match hemisphere {
            Hemisphere::Left => color.negation_multiplier(),
            Hemisphere::Right => -color.negation_multiplier(),
        };

        Self {
            hemisphere,
            direction,
            start_sector: START_SECTORS[color.index()][hemisphere.index()],
            end_sector: END_SECTORS[color.index()][hemisphere.index()],
        }
    }

    /// Derives the orientation of a `color` Pawn standing on `cell`.
    #[inline(always)]
    pub const fn of(color: Color, cell: Cell) -> Self {
        Self::new(color, cell.sector())
    }

    /// The half of the board the Pawn is on.
    #[inline(always)]
    pub const fn hemisphere(&self) -> Hemisphere {
        self.hemisphere
    }

    /// The sector delta of one step forward: `1` or `-1`.
    #[inline(always)]
    pub const fn direction(&self) -> i8 {
        self.direction
    }

    /// The sector Pawns of this side start on in this hemisphere.
    #[inline(always)]
    pub const fn start_sector(&self) -> u8 {
        self.start_sector
    }

    /// The sector Pawns of this side stop on in this hemisphere.
    #[inline(always)]
    pub const fn end_sector(&self) -> u8 {
        self.end_sector
    }

    /// Returns `true` if a Pawn on `sector` has not left its starting sector, and may therefore advance two steps.
    #[inline(always)]
    pub const fn can_double_step_from(&self, sector: u8) -> bool {
        sector == self.start_sector
    }

    /// Returns `true` if a Pawn on `sector` can advance no further.
    #[inline(always)]
    pub const fn is_exhausted_on(&self, sector: u8) -> bool {
        sector == self.end_sector
    }
}
