use clap::{App, Arg};
use image::GrayImage;
use sobelseam::{EnergyEstimator, SobelEstimator};

// Writes the energy grid the carver would steer by, as a grayscale
// image.  Handy for eyeballing what the estimator considers important
// before committing to a long carve.
fn main() -> Result<(), failure::Error> {
    env_logger::init();

    let matches = App::new("seamdump")
        .version("0.1.0")
        .about("Dump the Sobel energy map of an image")
        .arg(
            Arg::with_name("image")
                .help("The image to score")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .help("Where to write the grayscale energy map")
                .required(true)
                .index(2),
        )
        .get_matches();

    let image = image::open(matches.value_of("image").unwrap())?;
    let energy = SobelEstimator.estimate(&image);
    let (width, height) = (energy.width, energy.height);
    let map = GrayImage::from_raw(width, height, energy.into_raw()).unwrap();
    map.save(matches.value_of("output").unwrap())?;
    Ok(())
}
