use crate::domain::model::Coordinates;
use crate::domain::ports::{GeolocationError, GeolocationProvider, PositionOptions};
use async_trait::async_trait;

/// A position known up front, e.g. passed on the command line. `None` behaves
/// like a device without location support.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticGeolocation {
    position: Option<Coordinates>,
}

impl StaticGeolocation {
    pub fn at(latitude: f64, longitude: f64) -> Self {
        Self {
            position: Some(Coordinates::new(latitude, longitude)),
        }
    }

    pub fn unavailable() -> Self {
        Self { position: None }
    }

    pub fn from_option(position: Option<Coordinates>) -> Self {
        Self { position }
    }
}

#[async_trait]
impl GeolocationProvider for StaticGeolocation {
    async fn current_position(
        &self,
        _options: &PositionOptions,
    ) -> std::result::Result<Coordinates, GeolocationError> {
        self.position.ok_or(GeolocationError::Unavailable)
    }
}
