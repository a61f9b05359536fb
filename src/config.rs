use serde::Deserialize;

use crate::error::PageError;

/// Id of the optional `<script type="application/json">` block carrying
/// overrides for [`PageConfig`].
pub const CONFIG_ELEMENT_ID: &str = "landing-config";

/// Everything the landing page needs to know that is not markup.
///
/// Every field has a default matching the shipped page, so an override blob
/// only needs the keys it changes.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub selectors: Selectors,
    pub carousel: CarouselSettings,
    pub scroll_to_top: ScrollToTopSettings,
    pub reveal: RevealSettings,
    pub counter: CounterSettings,
    pub activity: ActivitySettings,
    pub notifications: NotificationSettings,
    pub log_level: Option<String>,
}

impl PageConfig {
    /// Parses an override blob and rejects values the page cannot run with.
    pub fn from_json(json: &str) -> Result<Self, PageError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), PageError> {
        unit_interval("reveal.threshold", self.reveal.threshold)?;
        unit_interval("counter.threshold", self.counter.threshold)?;
        positive("counter.duration_ms", self.counter.duration_ms)?;
        positive("counter.frame_ms", self.counter.frame_ms)?;
        nonzero_period("activity.download_period_ms", self.activity.download_period_ms)?;
        nonzero_period("activity.users_period_ms", self.activity.users_period_ms)?;
        nonzero_period("notifications.period_ms", self.notifications.period_ms)?;
        if self.activity.users_min > self.activity.users_max {
            return Err(PageError::InvalidSetting {
                field: "activity.users_min",
                reason: "must not exceed users_max",
            });
        }
        if self.carousel.autoplay_delay_ms == 0 {
            return Err(PageError::InvalidSetting {
                field: "carousel.autoplay_delay_ms",
                reason: "must be positive",
            });
        }
        Ok(())
    }

    /// Reads the config block from the document, falling back to defaults
    /// when the page does not ship one.
    pub fn from_document(document: &web_sys::Document) -> Result<Self, PageError> {
        match document.get_element_by_id(CONFIG_ELEMENT_ID) {
            Some(element) => {
                let json = element.text_content().unwrap_or_default();
                if json.trim().is_empty() {
                    return Ok(Self::default());
                }
                Self::from_json(&json)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn log_level(&self) -> log::Level {
        self.log_level
            .as_deref()
            .and_then(|level| level.parse().ok())
            .unwrap_or(log::Level::Info)
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), PageError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(PageError::InvalidSetting {
            field,
            reason: "must be a positive number",
        })
    }
}

fn unit_interval(field: &'static str, value: f64) -> Result<(), PageError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(PageError::InvalidSetting {
            field,
            reason: "must be between 0 and 1",
        })
    }
}

fn nonzero_period(field: &'static str, (min, _): (u32, u32)) -> Result<(), PageError> {
    if min == 0 {
        Err(PageError::InvalidSetting {
            field,
            reason: "periods must be at least 1ms",
        })
    } else {
        Ok(())
    }
}

/// Element ids (plain names) and CSS selectors the page is wired against.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub testimonials_container: String,
    pub carousel: String,
    pub carousel_pagination: String,
    pub menu_button: String,
    pub menu: String,
    pub menu_close: String,
    pub faq_question: String,
    pub scroll_to_top: String,
    pub sections: String,
    pub lazy_images: String,
    pub counters: String,
    pub download_counter: String,
    pub active_users: String,
    pub toast: String,
    pub toast_name: String,
    pub toast_location: String,
    pub toast_time: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            testimonials_container: "testimonials-wrapper".to_string(),
            carousel: ".mySwiper".to_string(),
            carousel_pagination: ".swiper-pagination".to_string(),
            menu_button: "mobile-menu-btn".to_string(),
            menu: "mobile-menu".to_string(),
            menu_close: "mobile-menu-close".to_string(),
            faq_question: ".faq-question".to_string(),
            scroll_to_top: "scroll-to-top".to_string(),
            sections: "section".to_string(),
            lazy_images: "img[loading=\"lazy\"]".to_string(),
            counters: ".counter".to_string(),
            download_counter: "download-counter".to_string(),
            active_users: "active-users".to_string(),
            toast: "recent-download".to_string(),
            toast_name: "notification-name".to_string(),
            toast_location: "notification-location".to_string(),
            toast_time: "notification-time".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CarouselSettings {
    pub slides_per_view: u32,
    pub space_between: u32,
    pub autoplay_delay_ms: u32,
    /// `(min_width_px, slides_per_view, space_between)`
    pub breakpoints: Vec<(u32, u32, u32)>,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            slides_per_view: 1,
            space_between: 20,
            autoplay_delay_ms: 4000,
            breakpoints: vec![(768, 2, 30), (1024, 3, 30)],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScrollToTopSettings {
    pub threshold_px: f64,
}

impl Default for ScrollToTopSettings {
    fn default() -> Self {
        Self { threshold_px: 300.0 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RevealSettings {
    pub threshold: f64,
    pub root_margin: String,
}

impl Default for RevealSettings {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CounterSettings {
    pub threshold: f64,
    pub duration_ms: f64,
    pub frame_ms: f64,
}

impl Default for CounterSettings {
    fn default() -> Self {
        Self {
            threshold: 0.5,
            duration_ms: 2000.0,
            frame_ms: 16.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ActivitySettings {
    pub initial_downloads: u64,
    pub initial_active_users: u32,
    /// Half-open `[min, max)` range the download interval is drawn from.
    pub download_period_ms: (u32, u32),
    /// Inclusive range of downloads added per tick.
    pub download_step: (u64, u64),
    pub pulse_ms: u32,
    pub users_period_ms: (u32, u32),
    pub users_max_drift: u32,
    pub users_min: u32,
    pub users_max: u32,
}

impl Default for ActivitySettings {
    fn default() -> Self {
        Self {
            initial_downloads: 1247,
            initial_active_users: 23,
            download_period_ms: (8000, 15000),
            download_step: (1, 3),
            pulse_ms: 500,
            users_period_ms: (3000, 6000),
            users_max_drift: 3,
            users_min: 15,
            users_max: 35,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NotificationSettings {
    pub first_delay_ms: u32,
    pub period_ms: (u32, u32),
    pub visible_ms: u32,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            first_delay_ms: 10_000,
            period_ms: (20_000, 40_000),
            visible_ms: 5000,
        }
    }
}
