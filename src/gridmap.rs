// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The one two-dimensional map behind every intermediate grid in the
//! pipeline: the 8-bit energy map, the 32-bit cumulative cost map, and
//! the tiny direction map that records which way the cheapest path
//! continues below each pixel.

use std::ops::{Index, IndexMut};

/// Per-pixel edge strength, quantized to the 0-255 range.
pub type EnergyGrid = GridMap<u8>;

/// Per-pixel minimal total energy of any path from that pixel straight
/// down to the bottom row.  u32 sums of 8-bit energies are safe up to
/// 2^32 / 2^8 = 16,777,216 rows.
pub type CostGrid = GridMap<u32>;

/// Per-pixel step (-1 left, 0 center, +1 right) toward the cheapest of
/// the three candidates below.  The bottom row is never written and
/// stays at the zero default.
pub type DirectionGrid = GridMap<i8>;

/// An addressable two-dimensional field of plain values, row-major,
/// the same layout for every grid the pipeline passes between stages.
#[derive(Clone, Debug, PartialEq)]
pub struct GridMap<P: Default + Copy> {
    pub width: u32,
    pub height: u32,
    data: Vec<P>,
}

impl<P: Default + Copy> GridMap<P> {
    /// A new map with every cell at the content type's default.
    pub fn new(width: u32, height: u32) -> Self {
        GridMap {
            width,
            height,
            data: vec![P::default(); width as usize * height as usize],
        }
    }

    /// Adopt an already-populated row-major vector.
    pub fn from_raw(width: u32, height: u32, data: Vec<P>) -> Self {
        assert_eq!(
            data.len(),
            width as usize * height as usize,
            "raw grid data does not match {}x{}",
            width,
            height
        );
        GridMap {
            width,
            height,
            data,
        }
    }

    // Absolutely, the number one name of this game is keep the index
    // math in a singular location and never, ever mess with it.  This
    // particular variant is the same one used in image.rs.
    fn get_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// The backing row-major slice.
    pub fn data(&self) -> &[P] {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut [P] {
        &mut self.data
    }

    /// Surrender the backing row-major vector.
    pub fn into_raw(self) -> Vec<P> {
        self.data
    }
}

impl<P: Default + Copy> Index<(u32, u32)> for GridMap<P> {
    type Output = P;

    /// A convenience addressing mode for getting values.
    fn index(&self, (x, y): (u32, u32)) -> &P {
        let index = self.get_index(x, y);
        &self.data[index]
    }
}

impl<P: Default + Copy> IndexMut<(u32, u32)> for GridMap<P> {
    /// A convenience addressing mode for setting values.
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut P {
        let index = self.get_index(x, y);
        &mut self.data[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addressing_is_row_major() {
        let mut map: GridMap<u32> = GridMap::new(3, 2);
        map[(2, 0)] = 7;
        map[(0, 1)] = 9;
        assert_eq!(map.data(), &[0, 0, 7, 9, 0, 0]);
        assert_eq!(map[(2, 0)], 7);
        assert_eq!(map[(0, 1)], 9);
    }

    #[test]
    fn from_raw_round_trips() {
        let map = GridMap::from_raw(2, 2, vec![1u8, 2, 3, 4]);
        assert_eq!(map[(1, 1)], 4);
        assert_eq!(map.into_raw(), vec![1, 2, 3, 4]);
    }

    #[test]
    #[should_panic]
    fn from_raw_rejects_mismatched_lengths() {
        GridMap::from_raw(2, 2, vec![1u8, 2, 3]);
    }
}
