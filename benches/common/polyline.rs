use criterion::{black_box, Criterion};
use polycurve::{arc_length, spline, BezierCurve, Color, CurveType, Polyline};
use crate::common::samples::POLYLINES;

pub fn bezier(c: &mut Criterion) {
    c.bench_function("bezier", |b| {
        let curve: BezierCurve<f64> = POLYLINES.SHORT.iter().cloned().collect();
        b.iter(|| black_box(curve.sample(32)))
    });
}

pub fn spline(c: &mut Criterion) {
    c.bench_function("spline", |b| {
        b.iter(|| {
            for points in POLYLINES.iter() {
                black_box(spline::fit(points));
            }
        })
    });
}

pub fn position(c: &mut Criterion) {
    c.bench_function("position", |b| {
        let polyline = Polyline::new(POLYLINES.LONG.clone(), CurveType::Spline, Color::BLACK, 1).unwrap();
        b.iter(|| black_box(arc_length::position_at_fraction(polyline.curve_points(), 0.37)))
    });
}

pub fn sub_polyline(c: &mut Criterion) {
    c.bench_function("sub_polyline", |b| {
        let polyline = Polyline::new(POLYLINES.LONG.clone(), CurveType::Spline, Color::BLACK, 1).unwrap();
        b.iter(|| black_box(arc_length::sub_polyline(polyline.curve_points(), 0.25, 0.75)))
    });
}

pub fn all(c: &mut Criterion) {
    bezier(c);
    spline(c);
    position(c);
    sub_polyline(c);
}
