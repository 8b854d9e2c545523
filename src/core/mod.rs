//! Core-Domänentypen: Points of Interest, Koordinaten-Mapper, Kartenbild.

pub mod map_image;
pub mod point;
pub mod surface;

pub use map_image::MapImage;
pub use point::PointOfInterest;
pub use surface::{SurfaceMapper, SurfaceRect};
