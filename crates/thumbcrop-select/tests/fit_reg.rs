//! Regression tests for cover-fit resolution.

use thumbcrop_select::{CropOptions, FitSpec, SelectError, Strategy, resolve};
use thumbcrop_test::{noise_rgb, uniform_rgb};

#[test]
fn wide_source_resolves_to_square_crop_and_downscale() {
    let img = noise_rgb(42, 1000, 500);
    let raster = img.raster();
    let spec = FitSpec::new(256, 256, Strategy::Entropy);
    let opts = CropOptions::new().set_sample_factor(8);

    let resolved = resolve(&raster, &spec, &opts).unwrap();
    assert_eq!(resolved.crop.w, 500);
    assert_eq!(resolved.crop.h, 500);
    assert_eq!(resolved.crop.y, 0);
    assert!(resolved.crop.x <= 500);
    assert!((resolved.scale - 0.512).abs() < 1e-12);
}

#[test]
fn scale_is_uniform_across_both_axes() {
    let img = noise_rgb(5, 640, 480);
    let raster = img.raster();
    let spec = FitSpec::new(320, 200, Strategy::Entropy);
    let opts = CropOptions::new().set_sample_factor(4);

    let resolved = resolve(&raster, &spec, &opts).unwrap();
    // 640x480 against aspect 1.6 keeps full width: crop is 640x400.
    assert_eq!(resolved.crop.w, 640);
    assert_eq!(resolved.crop.h, 400);
    let by_width = spec.target_w as f64 / resolved.crop.w as f64;
    let by_height = spec.target_h as f64 / resolved.crop.h as f64;
    assert_eq!(resolved.scale, by_width);
    assert!((by_width - by_height).abs() < 1e-9);
}

#[test]
fn matching_aspect_uses_the_whole_source() {
    let img = noise_rgb(9, 512, 512);
    let raster = img.raster();
    let spec = FitSpec::new(256, 256, Strategy::Attention);

    let resolved = resolve(&raster, &spec, &CropOptions::default()).unwrap();
    assert_eq!(resolved.crop, raster.bounds());
    assert_eq!(resolved.scale, 0.5);
}

#[test]
fn undersized_source_is_rejected_without_upscale() {
    let img = uniform_rgb((10, 20, 30), 100, 100);
    let raster = img.raster();
    let spec = FitSpec::new(256, 256, Strategy::Entropy);

    let result = resolve(&raster, &spec, &CropOptions::default());
    assert!(matches!(
        result,
        Err(SelectError::SourceTooSmall {
            source_w: 100,
            source_h: 100,
            target_w: 256,
            target_h: 256,
        })
    ));
}

#[test]
fn one_short_axis_is_enough_to_reject() {
    // Plenty of width, but covering a square 256 target needs a 256px
    // tall window and the source is only 200px tall.
    let img = uniform_rgb((10, 20, 30), 1000, 200);
    let raster = img.raster();
    let spec = FitSpec::new(256, 256, Strategy::Entropy);

    let result = resolve(&raster, &spec, &CropOptions::default());
    assert!(matches!(result, Err(SelectError::SourceTooSmall { .. })));
}

#[test]
fn allow_upscale_turns_rejection_into_scale_above_one() {
    let img = uniform_rgb((10, 20, 30), 100, 100);
    let raster = img.raster();
    let spec = FitSpec::new(256, 256, Strategy::Entropy).set_allow_upscale(true);

    let resolved = resolve(&raster, &spec, &CropOptions::default()).unwrap();
    assert_eq!(resolved.crop, raster.bounds());
    assert!((resolved.scale - 2.56).abs() < 1e-12);
}

#[test]
fn zero_target_dimension_is_invalid_aspect() {
    let img = uniform_rgb((10, 20, 30), 64, 64);
    let raster = img.raster();

    for (w, h) in [(0u32, 256u32), (256, 0), (0, 0)] {
        let spec = FitSpec::new(w, h, Strategy::Entropy);
        let result = resolve(&raster, &spec, &CropOptions::default());
        assert!(
            matches!(result, Err(SelectError::InvalidAspect(_))),
            "{w}x{h} target must be rejected"
        );
    }
}
