// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Cumulative path costs
//!
//! Turn an energy grid into the pair of grids the seam finder walks:
//! for every pixel, the minimal total energy of any path from it down
//! to the bottom row, and the -1/0/+1 step toward the candidate below
//! that achieved it.  An exhaustive path search would cost
//! `O(width * 3^height)`; building the sums one row at a time from the
//! bottom shares every optimal suffix path and brings that down to
//! `O(3 * width * height)`.

use crate::cq;
use crate::gridmap::{CostGrid, DirectionGrid, EnergyGrid, GridMap};

// Prefers the center on ties, then the left: a candidate only takes
// over on strict improvement.  Keeps seams visually straighter and,
// since the callers pass a clamped duplicate of the center for
// off-grid candidates, guarantees an edge cell never points off-grid.
fn min_with_index(left: u32, center: u32, right: u32) -> (u32, i8) {
    let mut min = center;
    let mut direction = 0i8;
    if left < min {
        min = left;
        direction = -1;
    }
    if right < min {
        min = right;
        direction = 1;
    }
    (min, direction)
}

/// Given an energy grid, build the cumulative cost grid bottom-up
/// along with the direction grid recording which of the three
/// candidates below each pixel was cheapest.  The bottom cost row is a
/// straight copy of the bottom energy row; the bottom direction row is
/// never written.
pub fn cumulative_sums(energy: &EnergyGrid) -> (CostGrid, DirectionGrid) {
    let (width, height) = (energy.width, energy.height);
    assert!(
        width > 0 && height > 0,
        "cumulative sums require a non-empty energy grid"
    );

    let mut sums: CostGrid = GridMap::new(width, height);
    let mut directions: DirectionGrid = GridMap::new(width, height);

    // The bottom row has no row below it to add.
    let bottom = height - 1;
    for x in 0..width {
        sums[(x, bottom)] = u32::from(energy[(x, bottom)]);
    }

    let maxwidth = width - 1;
    // Every other row adds the cheapest of the three candidates below,
    // with out-of-range candidates standing in as the center value so
    // no comparison can steer a path off-grid.  Rows must finalize
    // strictly bottom-to-top; the columns within a row are free.
    for y in (0..bottom).rev() {
        let below = y + 1;
        for x in 0..width {
            let (min_below, direction) = min_with_index(
                sums[(cq!(x == 0, x, x - 1), below)],
                sums[(x, below)],
                sums[(cq!(x >= maxwidth, maxwidth, x + 1), below)],
            );
            sums[(x, y)] = u32::from(energy[(x, y)]) + min_below;
            directions[(x, y)] = direction;
        }
    }

    (sums, directions)
}
