use geo::Point;

#[derive(Clone, Debug, PartialEq)]
pub struct FilmRecord {
    pub name: String,
    pub year: Option<String>,
    pub location: String,
    // x = longitude, y = latitude
    pub coordinates: Option<Point>,
    // metres to the last reference point
    pub distance: Option<f64>,
}

impl FilmRecord {
    pub fn new(name: String, year: Option<String>, location: String) -> Self {
        FilmRecord {
            name,
            year,
            location,
            coordinates: None,
            distance: None,
        }
    }

    pub fn latitude(&self) -> Option<f64> {
        self.coordinates.map(|x| x.y())
    }

    pub fn longitude(&self) -> Option<f64> {
        self.coordinates.map(|x| x.x())
    }

    pub fn is_resolved(&self) -> bool {
        self.coordinates.is_some()
    }
}

/// Builds a point from latitude/longitude order, the way locations are
/// written by humans.
pub fn point(latitude: f64, longitude: f64) -> Point {
    Point::new(longitude, latitude)
}
