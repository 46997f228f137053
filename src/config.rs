use std::collections::HashSet;

use log::Level;
use serde::Deserialize;

use crate::error::ConfigError;

const SITE_JSON: &str = include_str!("../assets/site.json");

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Brand {
    pub name: String,
    pub accent: String,
    pub full_name: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Hero {
    pub title: String,
    pub accent: String,
    pub tagline: String,
    pub cta: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct NavLink {
    pub id: String,
    pub label: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ServiceItem {
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct BenefitItem {
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Schedule {
    pub title: String,
    pub accent: String,
    pub text: String,
    pub cta: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Location {
    pub address: String,
    pub map_embed_url: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Contact {
    pub phone_display: String,
    pub hours: String,
}

/// Where the booking hand-off goes and what the modal says about it.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct BookingConfig {
    pub base_url: String,
    /// Country code and number, digits only.
    pub phone: String,
    pub message: String,
    pub title: String,
    pub text: String,
    pub confirm: String,
}

/// All page content. Loaded once at startup and shared read-only.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SiteConfig {
    pub brand: Brand,
    pub background_url: String,
    pub hero: Hero,
    pub nav: Vec<NavLink>,
    pub services: Vec<ServiceItem>,
    pub benefits: Vec<BenefitItem>,
    pub schedule: Schedule,
    pub location: Location,
    pub contact: Contact,
    pub booking: BookingConfig,
}

impl SiteConfig {
    /// The content compiled into the binary.
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_json(SITE_JSON)
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let booking = &self.booking;
        if booking.phone.is_empty() || !booking.phone.chars().all(|c| c.is_ascii_digit()) {
            return Err(ConfigError::Invalid(format!(
                "booking phone must be digits only, got {:?}",
                booking.phone
            )));
        }
        if !booking.base_url.starts_with("https://") {
            return Err(ConfigError::Invalid(format!(
                "booking base_url must be https, got {:?}",
                booking.base_url
            )));
        }

        let mut seen = HashSet::new();
        for link in &self.nav {
            if !seen.insert(link.id.as_str()) {
                return Err(ConfigError::Invalid(format!("duplicate nav id {:?}", link.id)));
            }
        }
        Ok(())
    }

    pub fn booking_link(&self) -> String {
        crate::booking::whatsapp_link(
            &self.booking.base_url,
            &self.booking.phone,
            &self.booking.message,
        )
    }
}
