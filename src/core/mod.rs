pub mod bubble_radius;
pub mod magnitude;
pub mod types;

pub use bubble_radius::{
    DEFAULT_MAX_RADIUS_DENSITY_DIVISOR, DEFAULT_MAX_RADIUS_PADDING_PX, area_proportional_radius,
    circle_area, default_max_radius,
};
pub use magnitude::{
    Dimension, ResolvedMagnitude, extract_magnitude, has_z_dimension, is_dimensional_shape,
    max_magnitude, resolve_magnitude,
};
pub use types::{BubbleValue, DataPoint, NamedFields};
