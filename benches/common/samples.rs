use nalgebra::Vector3;
use once_cell::sync::Lazy;

/// Points generated randomly
/// ```python
/// from random import random
/// for i in range(10):
///     print(f"Vector3::new({(random()-0.5)*i}, {(random()-0.5)*i}, {(random()-0.5)*i})")
/// ```
pub static POINTS: [[f64; 3]; 10] = [
    [ 0.0,      0.0,      0.0    ],
    [-0.29734,  0.44984,  0.12011],
    [-0.52560,  0.42885, -0.31870],
    [ 1.42777, -0.02652,  0.80413],
    [ 1.98032, -0.67824, -1.21508],
    [ 0.44863, -0.91328,  0.06342],
    [-2.51139, -0.79100,  1.77625],
    [-3.10479, -0.59318, -0.42196],
    [-1.16022, -2.95591,  2.31057],
    [-1.07946,  0.78888, -3.60113],
];

pub static POLYLINES: Lazy<Polylines> = Lazy::new(Polylines::new);
#[allow(non_snake_case)]
pub struct Polylines {
    pub SHORT: Vec<Vector3<f64>>,
    pub LONG: Vec<Vector3<f64>>,
}
impl Polylines {
    pub fn new() -> Polylines {
        let point = |i: usize| Vector3::from(POINTS[i]);
        Polylines {
            SHORT: [0, 3, 6, 9].into_iter().map(point).collect(),
            LONG: (0..100).map(|i| point((i * 7) % POINTS.len()) + Vector3::new(i as f64, 0.0, 0.0)).collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item=&Vec<Vector3<f64>>> {
        [&self.SHORT, &self.LONG].into_iter()
    }
}
