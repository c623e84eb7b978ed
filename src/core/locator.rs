use crate::core::service_area::ServiceAreaResolver;
use crate::domain::model::{Coordinates, Region, ServiceAreaResult};
use crate::domain::ports::{GeolocationError, GeolocationProvider, PositionOptions};
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;

#[derive(Debug, Clone, PartialEq)]
pub enum LocationOutcome {
    Resolved(ServiceAreaResult),
    /// No position could be read; the caller should ask for a ZIP instead.
    Fallback(GeolocationError),
}

impl LocationOutcome {
    /// A failed lookup becomes an empty Unknown result, so nothing is shown to the visitor.
    pub fn into_result(self) -> ServiceAreaResult {
        match self {
            LocationOutcome::Resolved(result) => result,
            LocationOutcome::Fallback(_) => ServiceAreaResult {
                in_service_area: false,
                region: Region::Unknown,
                message: String::new(),
                invalid_input: false,
            },
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct CachedFix {
    coordinates: Coordinates,
    captured_at: DateTime<Utc>,
}

/// Reads the device position through a [`GeolocationProvider`] and classifies
/// it, falling back to a ZIP lookup when the position is missing or unserved.
pub struct ServiceAreaLocator<G: GeolocationProvider> {
    provider: G,
    resolver: ServiceAreaResolver,
    options: PositionOptions,
    last_fix: Mutex<Option<CachedFix>>,
}

impl<G: GeolocationProvider> ServiceAreaLocator<G> {
    pub fn new(provider: G) -> Self {
        Self::with_options(provider, PositionOptions::default())
    }

    pub fn with_options(provider: G, options: PositionOptions) -> Self {
        Self {
            provider,
            resolver: ServiceAreaResolver::new(),
            options,
            last_fix: Mutex::new(None),
        }
    }

    pub fn options(&self) -> PositionOptions {
        self.options
    }

    pub async fn locate(&self) -> LocationOutcome {
        match self.current_position().await {
            Ok(point) => LocationOutcome::Resolved(
                self.resolver
                    .resolve_by_coordinates(point.latitude, point.longitude),
            ),
            Err(e) => {
                tracing::warn!("Location check failed, falling back to ZIP entry: {}", e);
                LocationOutcome::Fallback(e)
            }
        }
    }

    /// Geolocation first. A ZIP, when given, decides whenever the position is
    /// unavailable or outside every service area.
    pub async fn locate_or_zip(&self, zip: Option<&str>) -> ServiceAreaResult {
        match self.locate().await {
            LocationOutcome::Resolved(result) if result.in_service_area => result,
            outcome => match zip {
                Some(zip) => {
                    tracing::info!("Resolving service area from ZIP {}", zip);
                    self.resolver.resolve_by_zip(zip)
                }
                None => outcome.into_result(),
            },
        }
    }

    async fn current_position(&self) -> std::result::Result<Coordinates, GeolocationError> {
        let mut last_fix = self.last_fix.lock().await;

        if let Some(fix) = *last_fix {
            if self.is_fresh(&fix) {
                tracing::debug!("Reusing position captured at {}", fix.captured_at);
                return Ok(fix.coordinates);
            }
        }

        let coordinates = tokio::time::timeout(
            self.options.timeout,
            self.provider.current_position(&self.options),
        )
        .await
        .map_err(|_| GeolocationError::Timeout)??;

        *last_fix = Some(CachedFix {
            coordinates,
            captured_at: Utc::now(),
        });
        Ok(coordinates)
    }

    fn is_fresh(&self, fix: &CachedFix) -> bool {
        let age = Utc::now().signed_duration_since(fix.captured_at);
        match chrono::Duration::from_std(self.options.maximum_age) {
            Ok(maximum_age) => age < maximum_age,
            Err(_) => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    #[derive(Clone)]
    struct CountingProvider {
        position: Coordinates,
        calls: Arc<AtomicUsize>,
    }

    impl CountingProvider {
        fn new(latitude: f64, longitude: f64) -> Self {
            Self {
                position: Coordinates::new(latitude, longitude),
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }
    }

    #[async_trait]
    impl GeolocationProvider for CountingProvider {
        async fn current_position(
            &self,
            _options: &PositionOptions,
        ) -> std::result::Result<Coordinates, GeolocationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.position)
        }
    }

    struct HangingProvider;

    #[async_trait]
    impl GeolocationProvider for HangingProvider {
        async fn current_position(
            &self,
            _options: &PositionOptions,
        ) -> std::result::Result<Coordinates, GeolocationError> {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Ok(Coordinates::new(40.7128, -74.0060))
        }
    }

    struct DeniedProvider;

    #[async_trait]
    impl GeolocationProvider for DeniedProvider {
        async fn current_position(
            &self,
            _options: &PositionOptions,
        ) -> std::result::Result<Coordinates, GeolocationError> {
            Err(GeolocationError::PermissionDenied)
        }
    }

    #[derive(Default)]
    struct NoFixProvider {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl GeolocationProvider for NoFixProvider {
        async fn current_position(
            &self,
            _options: &PositionOptions,
        ) -> std::result::Result<Coordinates, GeolocationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(GeolocationError::PositionUnavailable(
                "no satellite fix".to_string(),
            ))
        }
    }

    #[tokio::test]
    async fn test_locate_resolves_position() {
        let locator = ServiceAreaLocator::new(CountingProvider::new(40.7128, -74.0060));
        match locator.locate().await {
            LocationOutcome::Resolved(result) => assert_eq!(result.region, Region::Nyc),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_position_is_cached_within_maximum_age() {
        let provider = CountingProvider::new(40.7128, -74.0060);
        let calls = provider.calls.clone();
        let locator = ServiceAreaLocator::new(provider);

        locator.locate().await;
        locator.locate().await;

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_zero_maximum_age_always_asks_again() {
        let provider = CountingProvider::new(40.7128, -74.0060);
        let calls = provider.calls.clone();
        let options = PositionOptions {
            timeout: Duration::from_secs(1),
            maximum_age: Duration::ZERO,
        };
        let locator = ServiceAreaLocator::with_options(provider, options);

        locator.locate().await;
        locator.locate().await;

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_slow_provider_times_out() {
        let options = PositionOptions {
            timeout: Duration::from_millis(20),
            maximum_age: Duration::ZERO,
        };
        let locator = ServiceAreaLocator::with_options(HangingProvider, options);
        assert_eq!(
            locator.locate().await,
            LocationOutcome::Fallback(GeolocationError::Timeout)
        );
    }

    #[tokio::test]
    async fn test_denied_without_zip_is_silent_unknown() {
        let locator = ServiceAreaLocator::new(DeniedProvider);
        let result = locator.locate_or_zip(None).await;
        assert_eq!(result.region, Region::Unknown);
        assert!(result.message.is_empty());
    }

    #[tokio::test]
    async fn test_denied_falls_back_to_zip() {
        let locator = ServiceAreaLocator::new(DeniedProvider);
        let result = locator.locate_or_zip(Some("07302")).await;
        assert!(result.in_service_area);
        assert_eq!(result.region, Region::NewJersey);
    }

    #[tokio::test]
    async fn test_position_outside_area_defers_to_zip() {
        let locator = ServiceAreaLocator::new(CountingProvider::new(34.05, -118.24));
        assert_eq!(
            locator.locate_or_zip(Some("11746")).await.region,
            Region::LongIsland
        );
        assert_eq!(locator.locate_or_zip(None).await.region, Region::Unknown);
    }

    #[tokio::test]
    async fn test_missing_fix_falls_back_and_is_not_cached() {
        let locator = ServiceAreaLocator::new(NoFixProvider::default());

        assert_eq!(
            locator.locate().await,
            LocationOutcome::Fallback(GeolocationError::PositionUnavailable(
                "no satellite fix".to_string()
            ))
        );

        let result = locator.locate_or_zip(Some("10001")).await;
        assert!(result.in_service_area);
        assert_eq!(result.region, Region::Nyc);
        assert_eq!(locator.provider.calls.load(Ordering::SeqCst), 2);
    }
}
