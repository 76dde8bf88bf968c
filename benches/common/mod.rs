pub mod polyline;
pub mod samples;
