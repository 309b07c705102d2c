use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Zero vector is not a valid direction")]
    ZeroVector,
    #[error("Cannot normalize a vector of zero length")]
    DegenerateVector,
    #[error("Radius must be positive, got {0}")]
    NonPositiveRadius(f64),
    #[error("Height must be positive, got {0}")]
    NonPositiveHeight(f64),
    #[error("A polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),
    #[error("Polygon vertices are not on the same plane")]
    NonCoplanarPolygon,
    #[error("Polygon is not convex")]
    NonConvexPolygon,
    #[error("Plane points coincide or are on the same line")]
    CollinearPoints,
    #[error("Camera forward and up directions are not orthogonal")]
    NonOrthogonalDirections,
    #[error("View plane {what} must be positive, got {value}")]
    NonPositiveViewPlane { what: &'static str, value: f64 },
    #[error("Invalid resolution {width}x{height}")]
    InvalidResolution { width: u32, height: u32 },
    #[error("Grid interval must be positive")]
    ZeroGridInterval,
    #[error("Missing {0}")]
    MissingResource(&'static str),
    #[error("Pixel ({x}, {y}) is outside the {width}x{height} image")]
    PixelOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
    #[error(transparent)]
    Image(#[from] image::ImageError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}
