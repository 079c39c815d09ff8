// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Recover one seam from the cumulative cost and direction grids.

use crate::gridmap::{CostGrid, DirectionGrid};

/// A seam: one column index per row, top to bottom, adjacent entries
/// never more than one column apart.
pub type Seam = Vec<u32>;

/// Given the cumulative sums and directions, return the list of
/// x-coordinates that, when mapped with the range (0..height), give
/// the XY coordinates for each pixel in the seam to be removed.
///
/// The start is the cheapest cell of the top row (the first one in a
/// left-to-right scan when several tie), and each following row adds
/// that row's recorded direction for the column the seam came from.
pub fn find_vertical_seam(sums: &CostGrid, directions: &DirectionGrid) -> Seam {
    assert!(
        sums.width == directions.width && sums.height == directions.height,
        "cost and direction grids disagree on dimensions"
    );
    assert!(
        sums.width > 0 && sums.height > 0,
        "seam recovery requires non-empty grids"
    );

    let start = (0..sums.width).min_by_key(|&x| sums[(x, 0)]).unwrap();

    let mut seam = Vec::with_capacity(sums.height as usize);
    seam.push(start);
    let mut column = start;
    for y in 1..sums.height {
        column = (column as i32 + i32::from(directions[(column, y)])) as u32;
        seam.push(column);
    }
    seam
}
