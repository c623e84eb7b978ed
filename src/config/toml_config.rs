use crate::core::ConfigProvider;
use crate::domain::model::PromoDiscount;
use crate::domain::ports::PositionOptions;
use crate::domain::promo::PromoTable;
use crate::utils::error::{QuoteError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

/// Largest fixed promo, in dollars, a settings file may define.
pub const MAX_FIXED_PROMO: i64 = 10_000;

/// Site settings. Every section is optional and falls back to the live site's values.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingConfig {
    pub site: SiteConfig,
    pub contact: ContactConfig,
    pub features: FeatureConfig,
    pub geolocation: GeolocationConfig,
    pub pricing: PricingConfig,
    /// Replaces the seed table entirely when present.
    pub promo_codes: BTreeMap<String, PromoDiscount>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub name: String,
    pub url: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureConfig {
    pub booking: bool,
    pub promo_codes: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeolocationConfig {
    pub timeout_ms: u64,
    pub maximum_age_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    pub display_discount_percent: u32,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            site: SiteConfig::default(),
            contact: ContactConfig::default(),
            features: FeatureConfig::default(),
            geolocation: GeolocationConfig::default(),
            pricing: PricingConfig::default(),
            promo_codes: PromoTable::default()
                .iter()
                .map(|(code, discount)| (code.to_string(), discount))
                .collect(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "Otter Cleaning".to_string(),
            url: "https://ottercleaning.com".to_string(),
            description: "Professional house cleaning services in NYC, Long Island & New Jersey"
                .to_string(),
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            email: "hello@ottercleaning.com".to_string(),
            phone: "(929) 274-1177".to_string(),
        }
    }
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            booking: true,
            promo_codes: true,
        }
    }
}

impl Default for GeolocationConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 5_000,
            maximum_age_ms: 300_000,
        }
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            display_discount_percent: 5,
        }
    }
}

impl BookingConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// Replaces `${VAR}` with the environment value; unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| QuoteError::ConfigValidationError {
            field: "${VAR}".to_string(),
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("site.name", &self.site.name)?;
        validation::validate_url("site.url", &self.site.url)?;
        validation::validate_non_empty_string("contact.email", &self.contact.email)?;
        if !self.contact.email.contains('@') {
            return Err(QuoteError::InvalidConfigValueError {
                field: "contact.email".to_string(),
                value: self.contact.email.clone(),
                reason: "Not an email address".to_string(),
            });
        }

        validation::validate_range("geolocation.timeout_ms", self.geolocation.timeout_ms, 1, 60_000)?;
        validation::validate_range(
            "geolocation.maximum_age_ms",
            self.geolocation.maximum_age_ms,
            0,
            86_400_000,
        )?;
        validation::validate_range(
            "pricing.display_discount_percent",
            self.pricing.display_discount_percent,
            0,
            100,
        )?;

        if self.features.promo_codes && self.promo_codes.is_empty() {
            return Err(QuoteError::ConfigValidationError {
                field: "promo_codes".to_string(),
                message: "promo codes are enabled but none are configured".to_string(),
            });
        }

        for (code, discount) in &self.promo_codes {
            let field = format!("promo_codes.{}", code);
            validation::validate_promo_code_key(&field, code)?;
            match *discount {
                PromoDiscount::Percentage(percent) => {
                    validation::validate_range(&field, percent, 1, 100)?
                }
                PromoDiscount::Fixed(amount) => {
                    validation::validate_range(&field, amount, 1, MAX_FIXED_PROMO)?
                }
            }
        }

        Ok(())
    }
}

impl ConfigProvider for BookingConfig {
    fn promo_codes_enabled(&self) -> bool {
        self.features.promo_codes
    }

    fn promo_table(&self) -> PromoTable {
        self.promo_codes
            .iter()
            .map(|(code, discount)| (code.clone(), *discount))
            .collect()
    }

    fn position_options(&self) -> PositionOptions {
        PositionOptions {
            timeout: Duration::from_millis(self.geolocation.timeout_ms),
            maximum_age: Duration::from_millis(self.geolocation.maximum_age_ms),
        }
    }

    fn display_discount_percent(&self) -> u32 {
        self.pricing.display_discount_percent
    }
}

impl Validate for BookingConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
