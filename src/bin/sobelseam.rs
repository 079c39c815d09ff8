use clap::{value_t, App, Arg};
use image::GenericImageView;
use log::info;
use sobelseam::{SeamCarver, SobelEstimator};

fn main() -> Result<(), failure::Error> {
    env_logger::init();

    let matches = App::new("sobelseam")
        .version("0.1.0")
        .about("Content-aware width reduction for images")
        .arg(
            Arg::with_name("image")
                .help("The image to carve")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("width")
                .help("The width, in pixels, to carve down to")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::with_name("output")
                .help("Where to write the carved image")
                .required(true)
                .index(3),
        )
        .get_matches();

    let target = value_t!(matches, "width", u32).unwrap_or_else(|e| e.exit());
    let image = image::open(matches.value_of("image").unwrap())?;
    let (width, height) = image.dimensions();
    info!("carving {}x{} down to width {}", width, height, target);

    let estimator = SobelEstimator;
    let carved = SeamCarver::new(&image, &estimator).carve(target)?;
    carved.save(matches.value_of("output").unwrap())?;
    Ok(())
}
