use crate::domain::model::{QuoteRequest, MAX_ROOMS};
use url::form_urlencoded;

/// Room counts and ZIP handed from the quick-quote widget to the booking form
/// as a URL query string (`bedrooms=2&bathrooms=1&zip=10001`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingPrefill {
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<u32>,
    pub zip: Option<String>,
}

impl BookingPrefill {
    /// Out-of-range or unparsable counts are dropped, not clamped, so the form
    /// keeps its own defaults. A leading `?` is tolerated.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut prefill = Self::default();

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "bedrooms" => {
                    prefill.bedrooms = value
                        .trim()
                        .parse::<u32>()
                        .ok()
                        .filter(|beds| *beds <= MAX_ROOMS);
                }
                "bathrooms" => {
                    prefill.bathrooms = value
                        .trim()
                        .parse::<u32>()
                        .ok()
                        .filter(|baths| (1..=MAX_ROOMS).contains(baths));
                }
                "zip" if !value.trim().is_empty() => {
                    prefill.zip = Some(value.trim().to_string());
                }
                _ => {}
            }
        }

        prefill
    }

    /// Absent fields are omitted; an empty prefill yields an empty string.
    pub fn to_query(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        if let Some(bedrooms) = self.bedrooms {
            serializer.append_pair("bedrooms", &bedrooms.to_string());
        }
        if let Some(bathrooms) = self.bathrooms {
            serializer.append_pair("bathrooms", &bathrooms.to_string());
        }
        if let Some(zip) = &self.zip {
            serializer.append_pair("zip", zip);
        }
        serializer.finish()
    }

    pub fn apply(&self, request: &mut QuoteRequest) {
        if let Some(bedrooms) = self.bedrooms {
            request.bedrooms = bedrooms;
        }
        if let Some(bathrooms) = self.bathrooms {
            request.bathrooms = bathrooms;
        }
    }
}
