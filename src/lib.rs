// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Content-aware image narrowing, better known as seam carving.
//!
//! The pipeline: estimate each pixel's visual importance with a Sobel
//! gradient pass, find the cheapest top-to-bottom path through the
//! resulting energies with a bottom-up dynamic program, and splice that
//! path out of the image.  Repeat until the image is as narrow as
//! requested.

mod ternary;

pub mod costmap;
pub mod energy;
pub mod gridmap;
pub mod seamcarver;
pub mod seamfinder;

pub use costmap::cumulative_sums;
pub use energy::{EnergyEstimator, SobelEstimator};
pub use gridmap::{CostGrid, DirectionGrid, EnergyGrid, GridMap};
pub use seamcarver::{remove_vertical_seam, CarveError, SeamCarver};
pub use seamfinder::{find_vertical_seam, Seam};
