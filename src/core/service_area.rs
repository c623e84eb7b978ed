use crate::domain::model::{Coordinates, Region, ServiceAreaQuery, ServiceAreaResult};

/// Inclusive range of five-digit ZIP codes read as integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZipRange {
    pub start: u32,
    pub end: u32,
}

impl ZipRange {
    const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, zip: u32) -> bool {
        (self.start..=self.end).contains(&zip)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_latitude: f64,
    pub max_latitude: f64,
    pub min_longitude: f64,
    pub max_longitude: f64,
}

impl BoundingBox {
    /// NaN never satisfies the comparisons, so it is never contained.
    pub fn contains(&self, point: Coordinates) -> bool {
        point.latitude >= self.min_latitude
            && point.latitude <= self.max_latitude
            && point.longitude >= self.min_longitude
            && point.longitude <= self.max_longitude
    }
}

// Manhattan, Staten Island, Bronx, Brooklyn, Queens
const NYC_ZIPS: &[ZipRange] = &[
    ZipRange::new(10001, 10299),
    ZipRange::new(10301, 10314),
    ZipRange::new(10451, 10475),
    ZipRange::new(11201, 11256),
    ZipRange::new(11351, 11697),
];

// Nassau, Nassau, Suffolk
const LONG_ISLAND_ZIPS: &[ZipRange] = &[
    ZipRange::new(11001, 11199),
    ZipRange::new(11501, 11599),
    ZipRange::new(11701, 11980),
];

// Northern, Central/South
const NEW_JERSEY_ZIPS: &[ZipRange] = &[ZipRange::new(7001, 7999), ZipRange::new(8001, 8999)];

/// Checked in this order; the first region with a matching range wins.
const ZIP_REGIONS: &[(Region, &[ZipRange])] = &[
    (Region::Nyc, NYC_ZIPS),
    (Region::LongIsland, LONG_ISLAND_ZIPS),
    (Region::NewJersey, NEW_JERSEY_ZIPS),
];

/// These overlap, so the order is what decides a point near a border.
const AREA_BOXES: &[(Region, BoundingBox)] = &[
    (
        Region::Nyc,
        BoundingBox {
            min_latitude: 40.4,
            max_latitude: 40.95,
            min_longitude: -74.3,
            max_longitude: -73.7,
        },
    ),
    (
        Region::LongIsland,
        BoundingBox {
            min_latitude: 40.5,
            max_latitude: 41.1,
            min_longitude: -73.8,
            max_longitude: -71.8,
        },
    ),
    (
        Region::NewJersey,
        BoundingBox {
            min_latitude: 39.5,
            max_latitude: 41.3,
            min_longitude: -75.5,
            max_longitude: -74.0,
        },
    ),
];

pub const INVALID_ZIP_MESSAGE: &str = "Please enter a valid ZIP code";
pub const OUTSIDE_ZIP_MESSAGE: &str =
    "We don't currently service your area. Contact us for special arrangements.";
pub const OUTSIDE_LOCATION_MESSAGE: &str =
    "We may not service your exact location. Enter your ZIP to confirm.";

/// Classifies a ZIP code or a coordinate pair into one of the service regions.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServiceAreaResolver;

impl ServiceAreaResolver {
    pub fn new() -> Self {
        Self
    }

    pub fn resolve(&self, query: &ServiceAreaQuery) -> ServiceAreaResult {
        match query {
            ServiceAreaQuery::Zip(zip) => self.resolve_by_zip(zip),
            ServiceAreaQuery::Coordinates(point) => {
                self.resolve_by_coordinates(point.latitude, point.longitude)
            }
        }
    }

    pub fn resolve_by_zip(&self, zip: &str) -> ServiceAreaResult {
        let Some(zip_number) = parse_zip(zip) else {
            tracing::debug!("Rejected ZIP input '{}'", zip);
            return ServiceAreaResult {
                in_service_area: false,
                region: Region::Unknown,
                message: INVALID_ZIP_MESSAGE.to_string(),
                invalid_input: true,
            };
        };

        let region = ZIP_REGIONS
            .iter()
            .find(|(_, ranges)| ranges.iter().any(|range| range.contains(zip_number)))
            .map(|(region, _)| *region);

        tracing::debug!("ZIP {:05} resolved to {:?}", zip_number, region);

        match region {
            Some(region) => ServiceAreaResult {
                in_service_area: true,
                region,
                message: format!("We service your area in {}!", region),
                invalid_input: false,
            },
            None => outside(OUTSIDE_ZIP_MESSAGE),
        }
    }

    pub fn resolve_by_coordinates(&self, latitude: f64, longitude: f64) -> ServiceAreaResult {
        let point = Coordinates::new(latitude, longitude);
        let region = AREA_BOXES
            .iter()
            .find(|(_, bounds)| bounds.contains(point))
            .map(|(region, _)| *region);

        tracing::debug!("({}, {}) resolved to {:?}", latitude, longitude, region);

        match region {
            Some(region) => ServiceAreaResult {
                in_service_area: true,
                region,
                message: format!("You're in our {} service area!", region),
                invalid_input: false,
            },
            None => outside(OUTSIDE_LOCATION_MESSAGE),
        }
    }
}

fn outside(message: &str) -> ServiceAreaResult {
    ServiceAreaResult {
        in_service_area: false,
        region: Region::Unknown,
        message: message.to_string(),
        invalid_input: false,
    }
}

/// Keeps only digits. Fewer than five is unreadable. Nine digits is ZIP+4 and
/// only the first five count; any other length is read whole, which lands
/// outside every range.
fn parse_zip(input: &str) -> Option<u32> {
    let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();
    match digits.len() {
        0..=4 => None,
        9 => digits[..5].parse().ok(),
        _ => digits.parse().ok(),
    }
}
