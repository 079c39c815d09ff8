// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarve - The main function
//!
//! The seam remover and the driver that loops it: estimate energy,
//! sum the path costs, pick a seam, splice it out, and do it all again
//! on the narrowed image until the target width is reached.  Energy is
//! recomputed from scratch every iteration; removing a seam shifts
//! pixel adjacency across each row, so the previous map is stale.

use crate::costmap::cumulative_sums;
use crate::cq;
use crate::energy::EnergyEstimator;
use crate::seamfinder::find_vertical_seam;
use failure::Fail;
use image::{GenericImageView, ImageBuffer, Pixel, Primitive};
use log::debug;

/// The ways a carve request can be refused before any work starts.
#[derive(Debug, Fail, PartialEq)]
pub enum CarveError {
    /// Seam removal only ever narrows; widening is a different
    /// algorithm that this carver does not implement.
    #[fail(
        display = "seam carving cannot widen an image: target width {} exceeds current width {}",
        target, width
    )]
    TargetWiderThanImage { target: u32, width: u32 },
}

/// Copy the image into a fresh buffer one column narrower, dropping
/// the seam pixel in each row and shifting everything right of it one
/// column left.
///
/// A seam with the wrong length or an out-of-range column is a defect
/// in the solver or the finder, not a runtime condition, and trips an
/// assertion rather than being repaired.
pub fn remove_vertical_seam<I, P, S>(image: &I, seam: &[u32]) -> ImageBuffer<P, Vec<S>>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    assert!(width > 0, "cannot remove a seam from a zero-width image");
    assert!(
        seam.len() == height as usize,
        "seam has {} rows but the image has {}",
        seam.len(),
        height
    );

    let mut imgbuf = ImageBuffer::new(width - 1, height);
    for y in 0..height {
        let cut = seam[y as usize];
        assert!(
            cut < width,
            "seam column {} is outside image width {}",
            cut,
            width
        );
        for x in 0..width {
            if x == cut {
                continue;
            }
            imgbuf.put_pixel(cq!(x < cut, x, x - 1), y, image.get_pixel(x, y));
        }
    }
    imgbuf
}

/// A struct holding the image to be carved and the energy estimation
/// strategy to carve it with.  The estimator is constructed by the
/// caller and borrowed here, so a device-backed implementation can
/// keep its pipeline handles alive across every iteration.
pub struct SeamCarver<'a, I, E, P, S>
where
    I: GenericImageView<Pixel = P>,
    E: EnergyEstimator,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    image: &'a I,
    estimator: &'a E,
}

impl<'a, I, E, P, S> SeamCarver<'a, I, E, P, S>
where
    I: GenericImageView<Pixel = P>,
    E: EnergyEstimator,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    /// Creates a new SeamCarver around an image and an estimator.
    pub fn new(image: &'a I, estimator: &'a E) -> Self {
        SeamCarver { image, estimator }
    }

    /// Given a desired new width no greater than the current one,
    /// repeatedly carve seams out of the image.  A target equal to the
    /// current width performs zero iterations and returns a
    /// pixel-identical copy.
    pub fn carve(&self, target_width: u32) -> Result<ImageBuffer<P, Vec<S>>, CarveError> {
        let (width, height) = self.image.dimensions();
        if target_width > width {
            return Err(CarveError::TargetWiderThanImage {
                target: target_width,
                width,
            });
        }

        let mut scratch = ImageBuffer::<P, Vec<S>>::new(width, height);
        self.image.pixels().for_each(|p| scratch[(p.0, p.1)] = p.2);

        let mut width = width;
        while width > target_width {
            let energy = self.estimator.estimate(&scratch);
            let (sums, directions) = cumulative_sums(&energy);
            let seam = find_vertical_seam(&sums, &directions);
            scratch = remove_vertical_seam(&scratch, &seam);
            width = scratch.width();
            debug!("carved to {}x{}", width, height);
        }
        Ok(scratch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::energy::SobelEstimator;
    use image::{ImageBuffer, Luma};

    const NINE: [u8; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];

    // Two quiet columns of 10 against a loud step to 50: every seam
    // should come out of the flat region on the left.
    const STEP_DATA: [u8; 9] = [10, 10, 50, 10, 10, 50, 10, 10, 50];

    fn nine_buf() -> ImageBuffer<Luma<u8>, Vec<u8>> {
        ImageBuffer::from_raw(3, 3, NINE.to_vec()).unwrap()
    }

    #[test]
    fn removal_drops_exactly_the_seam_pixels() {
        let buf = nine_buf();
        let narrowed = remove_vertical_seam(&buf, &[1, 0, 1]);
        assert_eq!(narrowed.dimensions(), (2, 3));
        assert_eq!(narrowed.into_raw(), vec![1, 3, 5, 6, 7, 9]);
    }

    #[test]
    fn removal_of_an_edge_column_shifts_the_rest() {
        let buf = nine_buf();
        let narrowed = remove_vertical_seam(&buf, &[0, 0, 0]);
        assert_eq!(narrowed.into_raw(), vec![2, 3, 5, 6, 8, 9]);
    }

    #[test]
    #[should_panic]
    fn short_seam_is_an_upstream_defect() {
        remove_vertical_seam(&nine_buf(), &[1, 0]);
    }

    #[test]
    #[should_panic]
    fn out_of_range_seam_column_is_an_upstream_defect() {
        remove_vertical_seam(&nine_buf(), &[1, 3, 1]);
    }

    #[test]
    fn carving_to_the_current_width_is_the_identity() {
        let buf = nine_buf();
        let carved = SeamCarver::new(&buf, &SobelEstimator).carve(3).unwrap();
        assert_eq!(carved.into_raw(), NINE.to_vec());
    }

    #[test]
    fn carving_removes_the_quiet_lane() {
        let buf: ImageBuffer<Luma<u8>, Vec<u8>> =
            ImageBuffer::from_raw(3, 3, STEP_DATA.to_vec()).unwrap();
        let carved = SeamCarver::new(&buf, &SobelEstimator).carve(2).unwrap();
        assert_eq!(carved.dimensions(), (2, 3));
        assert_eq!(carved.into_raw(), vec![10, 50, 10, 50, 10, 50]);
    }

    #[test]
    fn carving_reaches_any_narrower_width() {
        let buf: ImageBuffer<Luma<u8>, Vec<u8>> =
            ImageBuffer::from_raw(5, 4, (0..20).map(|v| (v * 7) as u8).collect()).unwrap();
        let carved = SeamCarver::new(&buf, &SobelEstimator).carve(2).unwrap();
        assert_eq!(carved.dimensions(), (2, 4));
    }

    #[test]
    fn a_single_pixel_carves_down_to_nothing() {
        let buf: ImageBuffer<Luma<u8>, Vec<u8>> =
            ImageBuffer::from_raw(1, 1, vec![42]).unwrap();
        let carved = SeamCarver::new(&buf, &SobelEstimator).carve(0).unwrap();
        assert_eq!(carved.dimensions(), (0, 1));
    }

    #[test]
    fn widening_is_refused_up_front() {
        let buf = nine_buf();
        match SeamCarver::new(&buf, &SobelEstimator).carve(4) {
            Err(e) => assert_eq!(
                e,
                CarveError::TargetWiderThanImage {
                    target: 4,
                    width: 3
                }
            ),
            Ok(_) => panic!("carve accepted a widening target"),
        }
    }
}
