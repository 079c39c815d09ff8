// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Estimate the energy of an image
//!
//! Given an image, calculate how visually important each pixel is.
//! Importance here is edge strength: the Euclidean magnitude of the
//! horizontal and vertical Sobel derivatives of the image's luma,
//! quantized to the 0-255 range.  Low energy means a pixel sits in a
//! visually quiet region and is safe to carve away.

use crate::cq;
use crate::gridmap::{EnergyGrid, GridMap};
use image::{GenericImageView, Pixel, Primitive};
use itertools::iproduct;
use num_traits::NumCast;

// BT.601 perceptual weights for reducing an RGB triple to luma.
const BT601: [f32; 3] = [0.299, 0.587, 0.114];

// The Sobel kernel pair: a derivative-of-average operator for each
// axis.  Row-major, applied with clamp-to-edge taps at the borders.
const SOBEL_KERNEL_X: [[f32; 3]; 3] = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];
const SOBEL_KERNEL_Y: [[f32; 3]; 3] = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

/// How the carver obtains an energy grid.  It's a primitive interface,
/// just enough to let the driver swap estimation strategies: the
/// portable CPU implementation below, or a device-backed one holding
/// its own pipeline handles, chosen when the carver is constructed.
pub trait EnergyEstimator {
    /// Score every pixel of the image, same dimensions in and out.
    fn estimate<I, P, S>(&self, image: &I) -> EnergyGrid
    where
        I: GenericImageView<Pixel = P>,
        P: Pixel<Subpixel = S> + 'static,
        S: Primitive + 'static;
}

/// The portable estimator: BT.601 luma, Sobel kernel pair, magnitude.
pub struct SobelEstimator;

// Image -> luma plane
//
// The BT.601 reduction commutes with the (linear) convolution, so the
// luma plane is computed once up front and the kernels run over a flat
// f32 slice instead of three channels.
fn luma_plane<I, P, S>(image: &I) -> Vec<f32>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    iproduct!(0..height, 0..width)
        .map(|(y, x)| {
            let rgb = image.get_pixel(x, y).to_rgb();
            let c = rgb.channels();
            BT601
                .iter()
                .zip(c)
                .map(|(weight, channel)| {
                    let channel: f32 = NumCast::from(*channel).unwrap();
                    weight * channel
                })
                .sum()
        })
        .collect()
}

// One output row of the convolution.  Out-of-range taps re-read the
// nearest in-range pixel, so every cell is defined by the same rule.
fn sobel_row(luma: &[f32], width: u32, height: u32, y: u32, out: &mut [u8]) {
    let (mw, mh) = (width - 1, height - 1);
    let rows = [cq!(y == 0, y, y - 1), y, cq!(y >= mh, mh, y + 1)];
    for x in 0..width {
        let cols = [cq!(x == 0, x, x - 1), x, cq!(x >= mw, mw, x + 1)];
        let mut gx = 0.0f32;
        let mut gy = 0.0f32;
        for ky in 0..3 {
            let row_start = rows[ky] as usize * width as usize;
            for kx in 0..3 {
                let tap = luma[row_start + cols[kx] as usize];
                gx += SOBEL_KERNEL_X[ky][kx] * tap;
                gy += SOBEL_KERNEL_Y[ky][kx] * tap;
            }
        }
        let magnitude = (gx * gx + gy * gy).sqrt();
        out[x as usize] = magnitude.min(255.0).round() as u8;
    }
}

#[cfg(not(feature = "threaded"))]
fn fill_rows(luma: &[f32], width: u32, height: u32, out: &mut [u8]) {
    if width == 0 || height == 0 {
        return;
    }
    for (y, row) in out.chunks_mut(width as usize).enumerate() {
        sobel_row(luma, width, height, y as u32, row);
    }
}

// Every output cell depends only on a fixed neighborhood of the shared
// read-only luma plane, so the rows split into bands with one writer
// each and no further coordination.
#[cfg(feature = "threaded")]
fn fill_rows(luma: &[f32], width: u32, height: u32, out: &mut [u8]) {
    if width == 0 || height == 0 {
        return;
    }
    let workers = num_cpus::get().max(1);
    let band_rows = ((height as usize + workers - 1) / workers).max(1);
    crossbeam::scope(|scope| {
        for (band, rows) in out.chunks_mut(band_rows * width as usize).enumerate() {
            scope.spawn(move |_| {
                for (i, row) in rows.chunks_mut(width as usize).enumerate() {
                    sobel_row(luma, width, height, (band * band_rows + i) as u32, row);
                }
            });
        }
    })
    .unwrap();
}

impl EnergyEstimator for SobelEstimator {
    fn estimate<I, P, S>(&self, image: &I) -> EnergyGrid
    where
        I: GenericImageView<Pixel = P>,
        P: Pixel<Subpixel = S> + 'static,
        S: Primitive + 'static,
    {
        let (width, height) = image.dimensions();
        let luma = luma_plane(image);
        let mut energy = GridMap::new(width, height);
        fill_rows(&luma, width, height, energy.data_mut());
        energy
    }
}
