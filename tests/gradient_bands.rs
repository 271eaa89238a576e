use glaze::gradient::segment_lengths;
use glaze::{GradientAxis, GradientSpec, RasterImage, Rgba8Premul, fill_gradient, fill_gradient_rect};

const START: Rgba8Premul = Rgba8Premul::opaque(10, 20, 30);
const MID: Rgba8Premul = Rgba8Premul::opaque(200, 210, 220);
const END: Rgba8Premul = Rgba8Premul::opaque(90, 0, 0);

fn spec(ratio1: f32, ratio2: f32) -> GradientSpec {
    GradientSpec::new(ratio1, ratio2, START, MID, END)
}

fn row(raster: &RasterImage, y: u32) -> Rgba8Premul {
    raster.pixel(0, y).unwrap()
}

#[test]
fn vertical_band_partitions_rows() {
    // L = 40, ratios (0.25, 0.2): segments of 10, 8, 10, 12 rows.
    let mut raster = RasterImage::new(3, 40);
    fill_gradient(&mut raster, &spec(0.25, 0.2), GradientAxis::Vertical);

    // Segment A ramps start -> mid with exact endpoints.
    assert_eq!(row(&raster, 0), START);
    assert_eq!(row(&raster, 9), MID);

    // Segment B is uniformly mid.
    for y in 10..18 {
        assert_eq!(row(&raster, y), MID, "flat row {y}");
    }

    // Segment C ramps mid -> start.
    assert_eq!(row(&raster, 18), MID);
    assert_eq!(row(&raster, 27), START);

    // Segment D ramps start -> end over the remainder.
    assert_eq!(row(&raster, 28), START);
    assert_eq!(row(&raster, 39), END);
}

#[test]
fn band_is_cross_axis_invariant() {
    let mut raster = RasterImage::new(7, 40);
    fill_gradient(&mut raster, &spec(0.25, 0.2), GradientAxis::Vertical);

    for y in 0..40 {
        let first = raster.pixel(0, y);
        for x in 1..7 {
            assert_eq!(raster.pixel(x, y), first, "x={x} y={y}");
        }
    }
}

#[test]
fn horizontal_band_partitions_columns() {
    let mut raster = RasterImage::new(40, 3);
    fill_gradient(&mut raster, &spec(0.25, 0.2), GradientAxis::Horizontal);

    assert_eq!(raster.pixel(0, 1), Some(START));
    assert_eq!(raster.pixel(9, 1), Some(MID));
    assert_eq!(raster.pixel(13, 1), Some(MID));
    assert_eq!(raster.pixel(27, 1), Some(START));
    assert_eq!(raster.pixel(39, 1), Some(END));

    // Constant down each column.
    for x in 0..40 {
        assert_eq!(raster.pixel(x, 0), raster.pixel(x, 2));
    }
}

#[test]
fn overlong_ratios_truncate_instead_of_overflowing() {
    // Nominal 6+6+6 on a 10-row band: A keeps 6, B gets the last 4.
    assert_eq!(segment_lengths(&spec(0.6, 0.6), 10), [6, 4, 0, 0]);

    let mut raster = RasterImage::new(2, 10);
    fill_gradient(&mut raster, &spec(0.6, 0.6), GradientAxis::Vertical);

    assert_eq!(row(&raster, 0), START);
    assert_eq!(row(&raster, 5), MID);
    for y in 6..10 {
        assert_eq!(row(&raster, y), MID, "flat row {y}");
    }
    // The end color never appears: segment D was truncated away.
    for y in 0..10 {
        assert_ne!(row(&raster, y), END);
    }
}

#[test]
fn segment_sum_matches_band_length_across_ratio_grid() {
    for r1 in [0.0, 0.1, 0.25, 0.4, 0.6, 1.0] {
        for r2 in [0.0, 0.2, 0.5, 0.8, 1.0] {
            for len in [1u32, 2, 9, 40, 64, 333] {
                let segs = segment_lengths(&spec(r1, r2), len);
                assert_eq!(
                    segs.iter().sum::<u32>(),
                    len,
                    "r1={r1} r2={r2} len={len} segs={segs:?}"
                );
            }
        }
    }
}

#[test]
fn identical_inputs_produce_identical_pixels() {
    let mut a = RasterImage::new(13, 57);
    let mut b = RasterImage::new(13, 57);
    fill_gradient(&mut a, &spec(0.3, 0.15), GradientAxis::Vertical);
    fill_gradient(&mut b, &spec(0.3, 0.15), GradientAxis::Vertical);
    assert_eq!(a, b);
}

#[test]
fn rect_fill_leaves_outside_untouched() {
    let mut raster = RasterImage::new(10, 10);
    fill_gradient_rect(&mut raster, 2, 2, 4, 4, &spec(0.25, 0.25), GradientAxis::Vertical);

    assert_ne!(raster.pixel(2, 2), Some(Rgba8Premul::transparent()));
    assert_ne!(raster.pixel(5, 5), Some(Rgba8Premul::transparent()));

    assert_eq!(raster.pixel(1, 2), Some(Rgba8Premul::transparent()));
    assert_eq!(raster.pixel(2, 1), Some(Rgba8Premul::transparent()));
    assert_eq!(raster.pixel(6, 5), Some(Rgba8Premul::transparent()));
    assert_eq!(raster.pixel(5, 6), Some(Rgba8Premul::transparent()));
}

#[test]
fn rect_fill_keeps_proportions_when_clipped() {
    // A 20-column band hanging 5 columns off the left edge: the visible part
    // must match columns 5.. of an unclipped render.
    let mut clipped = RasterImage::new(10, 4);
    fill_gradient_rect(&mut clipped, -5, 0, 20, 4, &spec(0.25, 0.2), GradientAxis::Horizontal);

    let mut reference = RasterImage::new(20, 4);
    fill_gradient(&mut reference, &spec(0.25, 0.2), GradientAxis::Horizontal);

    for x in 0..10u32 {
        assert_eq!(clipped.pixel(x, 0), reference.pixel(x + 5, 0), "x={x}");
    }
}

#[test]
fn one_pixel_segments_take_the_from_color() {
    // L = 40, ratio1 = 0.025: ramps A and C are a single line each.
    let mut raster = RasterImage::new(1, 40);
    fill_gradient(&mut raster, &spec(0.025, 0.0), GradientAxis::Vertical);

    assert_eq!(row(&raster, 0), START); // A, single line
    assert_eq!(row(&raster, 1), MID); // C, single line
    assert_eq!(row(&raster, 2), START); // D begins
    assert_eq!(row(&raster, 39), END);
}

#[test]
fn zero_length_band_is_a_noop() {
    let mut raster = RasterImage::new(4, 4);
    fill_gradient_rect(&mut raster, 0, 0, 0, 4, &spec(0.5, 0.5), GradientAxis::Horizontal);
    fill_gradient_rect(&mut raster, 0, 0, 4, 0, &spec(0.5, 0.5), GradientAxis::Vertical);
    assert!(raster.data().iter().all(|&b| b == 0));
}
