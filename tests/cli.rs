use assert_cmd::prelude::*;
use image::GenericImageView;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn shrinks_an_image_from_the_command_line() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("input.png");
    let output = dir.path().join("carved.png");

    let img = image::ImageBuffer::from_fn(8, 6, |x, y| {
        image::Rgba([(x * 30) as u8, (y * 40) as u8, 128u8, 255u8])
    });
    img.save(&input)?;

    Command::cargo_bin("sobelseam")?
        .arg(&input)
        .arg("5")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let carved = image::open(&output)?;
    assert_eq!(carved.dimensions(), (5, 6));
    Ok(())
}

#[test]
fn refuses_to_widen() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("input.png");
    let output = dir.path().join("carved.png");

    let img = image::ImageBuffer::from_fn(4, 4, |x, _| image::Rgba([x as u8, 0u8, 0u8, 255u8]));
    img.save(&input)?;

    Command::cargo_bin("sobelseam")?
        .arg(&input)
        .arg("9")
        .arg(&output)
        .assert()
        .failure();

    assert!(!output.exists());
    Ok(())
}

#[test]
fn dumps_an_energy_map() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("input.png");
    let output = dir.path().join("energy.png");

    let img = image::ImageBuffer::from_fn(8, 6, |x, _| {
        let v = if x < 4 { 10u8 } else { 200u8 };
        image::Rgba([v, v, v, 255u8])
    });
    img.save(&input)?;

    Command::cargo_bin("seamdump")?
        .arg(&input)
        .arg(&output)
        .assert()
        .success();

    let energy = image::open(&output)?;
    assert_eq!(energy.dimensions(), (8, 6));
    Ok(())
}
