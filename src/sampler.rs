//! SVG silhouette sampling
//!
//! Turns an SVG document into the constellation's point set: every path
//! outline is walked by arc length in fixed steps, then the whole cloud is
//! scaled and centered to fit the canvas.

use kurbo::{BezPath, ParamCurve, ParamCurveArclen, PathSeg, Point, Size};
use tracing::{debug, trace};

use crate::asset::AssetError;

/// Arc-length distance between consecutive samples, in SVG user units.
pub const SAMPLE_STEP: f64 = 55.0;

/// Fraction of the smaller canvas dimension the silhouette is scaled to.
pub const FIT_FRACTION: f64 = 0.4;

/// Arc-length accuracy for sampling, in user units.
const ARCLEN_ACCURACY: f64 = 1e-3;

/// Parse an SVG document and collect every path outline, with the node's
/// absolute transform baked into the geometry.
pub fn parse_outlines(svg_text: &str) -> Result<Vec<BezPath>, AssetError> {
    let tree = usvg::Tree::from_str(svg_text, &usvg::Options::default())?;

    let mut outlines = Vec::new();
    collect_paths(tree.root(), &mut outlines);
    debug!(outlines = outlines.len(), "Parsed SVG outlines");
    Ok(outlines)
}

fn collect_paths(group: &usvg::Group, out: &mut Vec<BezPath>) {
    for node in group.children() {
        match node {
            usvg::Node::Path(path) => out.push(to_bez_path(path)),
            usvg::Node::Group(group) => collect_paths(group, out),
            _ => {}
        }
    }
}

fn to_bez_path(path: &usvg::Path) -> BezPath {
    use usvg::tiny_skia_path::PathSegment;

    let ts = path.abs_transform();
    let map = |p: usvg::tiny_skia_path::Point| -> Point {
        let (x, y) = (p.x as f64, p.y as f64);
        let (sx, kx, ky, sy, tx, ty) = (
            ts.sx as f64,
            ts.kx as f64,
            ts.ky as f64,
            ts.sy as f64,
            ts.tx as f64,
            ts.ty as f64,
        );
        Point::new(sx * x + kx * y + tx, ky * x + sy * y + ty)
    };

    let mut bez = BezPath::new();
    for seg in path.data().segments() {
        match seg {
            PathSegment::MoveTo(p) => bez.move_to(map(p)),
            PathSegment::LineTo(p) => bez.line_to(map(p)),
            PathSegment::QuadTo(p1, p) => bez.quad_to(map(p1), map(p)),
            PathSegment::CubicTo(p1, p2, p) => bez.curve_to(map(p1), map(p2), map(p)),
            PathSegment::Close => bez.close_path(),
        }
    }
    bez
}

/// Sample one outline at arc lengths 0, step, 2*step, ... < total length.
///
/// Arc-length parameterization keeps the density uniform along the curve
/// instead of clustering samples on tightly-curved segments. A zero-length
/// outline yields no samples.
pub fn sample_outline(outline: &BezPath, step: f64) -> Vec<Point> {
    let segs: Vec<PathSeg> = outline.segments().collect();
    let lengths: Vec<f64> = segs.iter().map(|s| s.arclen(ARCLEN_ACCURACY)).collect();
    let total: f64 = lengths.iter().sum();

    let mut samples = Vec::new();
    let mut s = 0.0;
    while s < total {
        samples.push(point_at_length(&segs, &lengths, s));
        s += step;
    }
    trace!(total_length = total, samples = samples.len(), "Sampled outline");
    samples
}

/// Position at arc length `s` along the concatenated segments.
fn point_at_length(segs: &[PathSeg], lengths: &[f64], s: f64) -> Point {
    let mut remaining = s;
    for (seg, &len) in segs.iter().zip(lengths) {
        if remaining < len {
            let t = seg.inv_arclen(remaining, ARCLEN_ACCURACY);
            return seg.eval(t);
        }
        remaining -= len;
    }
    // s landed past the end by a rounding hair
    segs.last().map(|seg| seg.eval(1.0)).unwrap_or(Point::ZERO)
}

/// Scale and center the point cloud so its bounding box fits within
/// `FIT_FRACTION` of the smaller canvas dimension, aspect ratio preserved.
///
/// An empty cloud is returned unchanged (no bbox, nothing to scale).
/// A degenerate zero-area bbox yields a non-finite scale and non-finite
/// coordinates downstream; see DESIGN.md.
pub fn fit_to_canvas(points: Vec<Point>, canvas: Size) -> Vec<Point> {
    if points.is_empty() {
        return points;
    }

    let (mut min_x, mut min_y) = (f64::MAX, f64::MAX);
    let (mut max_x, mut max_y) = (f64::MIN, f64::MIN);
    for p in &points {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }

    let bbox_width = max_x - min_x;
    let bbox_height = max_y - min_y;

    let target = canvas.width.min(canvas.height) * FIT_FRACTION;
    let scale = target / bbox_width.max(bbox_height);

    let offset_x = (canvas.width - bbox_width * scale) / 2.0;
    let offset_y = (canvas.height - bbox_height * scale) / 2.0;

    debug!(
        bbox_width,
        bbox_height,
        scale,
        offset_x,
        offset_y,
        "Fitting point cloud to canvas"
    );

    points
        .into_iter()
        .map(|p| {
            Point::new(
                (p.x - min_x) * scale + offset_x,
                (p.y - min_y) * scale + offset_y,
            )
        })
        .collect()
}

/// Full startup pipeline: SVG text to canvas-fitted point set.
///
/// Runs exactly once; the resulting set is immutable for the page lifetime.
pub fn sample_constellation(svg_text: &str, canvas: Size) -> Result<Vec<Point>, AssetError> {
    let outlines = parse_outlines(svg_text)?;

    let mut points = Vec::new();
    for outline in &outlines {
        points.extend(sample_outline(outline, SAMPLE_STEP));
    }

    debug!(points = points.len(), "Sampled constellation");
    Ok(fit_to_canvas(points, canvas))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-6;

    fn square_path(side: f64) -> BezPath {
        let mut path = BezPath::new();
        path.move_to((0.0, 0.0));
        path.line_to((side, 0.0));
        path.line_to((side, side));
        path.line_to((0.0, side));
        path.close_path();
        path
    }

    #[test]
    fn test_sample_count_matches_arc_length() {
        // Perimeter 2200, step 55 -> samples at 0, 55, ..., 2145 = 40
        let path = square_path(550.0);
        let samples = sample_outline(&path, SAMPLE_STEP);
        assert_eq!(samples.len(), 40);
    }

    #[test]
    fn test_samples_lie_on_outline() {
        let path = square_path(550.0);
        for p in sample_outline(&path, SAMPLE_STEP) {
            let on_edge = p.x.abs() < TOLERANCE
                || p.y.abs() < TOLERANCE
                || (p.x - 550.0).abs() < TOLERANCE
                || (p.y - 550.0).abs() < TOLERANCE;
            assert!(on_edge, "sample {:?} not on the square outline", p);
        }
    }

    #[test]
    fn test_zero_length_path_yields_no_samples() {
        let mut path = BezPath::new();
        path.move_to((10.0, 10.0));
        assert!(sample_outline(&path, SAMPLE_STEP).is_empty());
    }

    #[test]
    fn test_curved_path_density_is_arc_length_based() {
        // A quarter-circle-ish cubic: sample count must track the measured
        // arc length, not the number of control points.
        let mut path = BezPath::new();
        path.move_to((0.0, 0.0));
        path.curve_to((0.0, 300.0), (300.0, 600.0), (600.0, 600.0));
        let total: f64 = path
            .segments()
            .map(|s| s.arclen(ARCLEN_ACCURACY))
            .sum();
        let samples = sample_outline(&path, SAMPLE_STEP);
        assert_eq!(samples.len(), (total / SAMPLE_STEP).ceil() as usize);
    }

    #[test]
    fn test_fit_scale_invariant() {
        let points = fit_to_canvas(
            sample_outline(&square_path(550.0), SAMPLE_STEP),
            Size::new(800.0, 600.0),
        );

        let (mut min_x, mut min_y) = (f64::MAX, f64::MAX);
        let (mut max_x, mut max_y) = (f64::MIN, f64::MIN);
        for p in &points {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }

        // max(scaled dims) == 0.4 * min(canvas dims) == 240
        let scaled = (max_x - min_x).max(max_y - min_y);
        assert!((scaled - 240.0).abs() < TOLERANCE, "scaled = {}", scaled);
    }

    #[test]
    fn test_fit_centers_bbox() {
        let points = fit_to_canvas(
            sample_outline(&square_path(550.0), SAMPLE_STEP),
            Size::new(800.0, 600.0),
        );

        let (mut min_x, mut min_y) = (f64::MAX, f64::MAX);
        let (mut max_x, mut max_y) = (f64::MIN, f64::MIN);
        for p in &points {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }

        assert!(((min_x + max_x) / 2.0 - 400.0).abs() < TOLERANCE);
        assert!(((min_y + max_y) / 2.0 - 300.0).abs() < TOLERANCE);
        // End-to-end offsets from the 550-square / 800x600 scenario
        assert!((min_x - 280.0).abs() < TOLERANCE);
        assert!((min_y - 180.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_fit_empty_is_identity() {
        let points = fit_to_canvas(Vec::new(), Size::new(800.0, 600.0));
        assert!(points.is_empty());
    }

    #[test]
    fn test_parse_square_svg() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="600" height="600">
            <path stroke="black" fill="none" d="M 0 0 L 550 0 L 550 550 L 0 550 Z"/>
        </svg>"#;

        let points = sample_constellation(svg, Size::new(800.0, 600.0)).unwrap();
        assert_eq!(points.len(), 40);
    }

    #[test]
    fn test_parse_nested_groups() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="600" height="600">
            <g><g><path stroke="black" fill="none" d="M 0 0 L 110 0"/></g></g>
            <path stroke="black" fill="none" d="M 0 100 L 110 100"/>
        </svg>"#;

        let outlines = parse_outlines(svg).unwrap();
        assert_eq!(outlines.len(), 2);
        // Two open 110-unit strokes -> 2 samples each
        let total: usize = outlines
            .iter()
            .map(|o| sample_outline(o, SAMPLE_STEP).len())
            .sum();
        assert_eq!(total, 4);
    }

    #[test]
    fn test_parse_transform_is_applied() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="600" height="600">
            <g transform="translate(100 50)"><path stroke="black" fill="none" d="M 0 0 L 110 0"/></g>
        </svg>"#;

        let outlines = parse_outlines(svg).unwrap();
        let samples = sample_outline(&outlines[0], SAMPLE_STEP);
        assert!((samples[0].x - 100.0).abs() < 1e-3);
        assert!((samples[0].y - 50.0).abs() < 1e-3);
    }

    #[test]
    fn test_svg_without_paths_is_empty() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10"/>"#;
        let points = sample_constellation(svg, Size::new(800.0, 600.0)).unwrap();
        assert!(points.is_empty());
    }

    #[test]
    fn test_malformed_svg_is_an_error() {
        assert!(parse_outlines("not an svg at all").is_err());
    }
}
