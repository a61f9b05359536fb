use std::collections::BTreeMap;

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::config::CarouselSettings;
use crate::error::PageError;

#[wasm_bindgen]
extern "C" {
    /// The page-global Swiper carousel.
    pub type Swiper;

    #[wasm_bindgen(constructor, catch)]
    fn new(selector: &str, options: &JsValue) -> Result<Swiper, JsValue>;

    #[wasm_bindgen(method)]
    fn destroy(this: &Swiper, delete_instance: bool, clean_styles: bool);
}

/// Options object handed to the Swiper constructor.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CarouselOptions {
    pub slides_per_view: u32,
    pub space_between: u32,
    #[serde(rename = "loop")]
    pub looping: bool,
    pub autoplay: Autoplay,
    pub pagination: Pagination,
    pub breakpoints: BTreeMap<u32, Breakpoint>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Autoplay {
    pub delay: u32,
    pub disable_on_interaction: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Pagination {
    pub el: String,
    pub clickable: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Breakpoint {
    pub slides_per_view: u32,
    pub space_between: u32,
}

impl CarouselOptions {
    pub fn new(settings: &CarouselSettings, pagination: &str) -> Self {
        Self {
            slides_per_view: settings.slides_per_view,
            space_between: settings.space_between,
            looping: true,
            autoplay: Autoplay {
                delay: settings.autoplay_delay_ms,
                disable_on_interaction: false,
            },
            pagination: Pagination {
                el: pagination.to_string(),
                clickable: true,
            },
            breakpoints: settings
                .breakpoints
                .iter()
                .map(|&(width, slides_per_view, space_between)| {
                    (width, Breakpoint { slides_per_view, space_between })
                })
                .collect(),
        }
    }
}

/// Live carousel instance, destroyed on drop.
pub struct Carousel {
    swiper: Swiper,
}

impl Carousel {
    pub fn mount(selector: &str, options: &CarouselOptions) -> Result<Self, PageError> {
        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        let options = options.serialize(&serializer)?;
        let swiper = Swiper::new(selector, &options)?;
        Ok(Self { swiper })
    }
}

impl Drop for Carousel {
    fn drop(&mut self) {
        self.swiper.destroy(true, false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_options_match_swiper_shape() {
        let options = CarouselOptions::new(&CarouselSettings::default(), ".swiper-pagination");
        let value = serde_json::to_value(&options).unwrap();
        assert_eq!(
            value,
            json!({
                "slidesPerView": 1,
                "spaceBetween": 20,
                "loop": true,
                "autoplay": { "delay": 4000, "disableOnInteraction": false },
                "pagination": { "el": ".swiper-pagination", "clickable": true },
                "breakpoints": {
                    "768": { "slidesPerView": 2, "spaceBetween": 30 },
                    "1024": { "slidesPerView": 3, "spaceBetween": 30 }
                }
            })
        );
    }

    #[test]
    fn breakpoints_follow_settings() {
        let settings = CarouselSettings {
            breakpoints: vec![(640, 2, 10)],
            ..CarouselSettings::default()
        };
        let options = CarouselOptions::new(&settings, "#dots");
        assert_eq!(options.breakpoints.len(), 1);
        assert_eq!(options.breakpoints[&640].slides_per_view, 2);
        assert_eq!(options.pagination.el, "#dots");
    }
}
