// src/lib.rs

pub mod command;
pub mod error;
pub mod geometry;
pub mod intersection;
pub mod mesh;
pub mod point_list;
pub mod settings;
pub mod star;

pub use command::StarCommand;
pub use error::StarError;
pub use geometry::{modulo, ring_area, Line2};
pub use intersection::intersect_lines;
pub use settings::{DisplayOptions, SliderConfig};
pub use star::Star;
