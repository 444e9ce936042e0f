use crate::config::SiteConfig;
use crate::core::carousel::Carousel;
use crate::core::catalog::{available_periods, build_items, earliest};
use crate::core::ContentSource;
use crate::utils::error::{Result, SiteError};

/// Builds the month gallery: one item per month from the configured (or
/// earliest photographed) start month to the configured (or current) end.
pub async fn load_gallery<C: ContentSource>(source: &C, config: &SiteConfig) -> Result<Carousel> {
    let labels = source.photo_labels().await?;
    let available = available_periods(&labels);

    let start = match config.gallery.start {
        Some(start) => start,
        None => earliest(&available).ok_or_else(|| {
            SiteError::invalid_configuration(
                "gallery.start is not set and photos.json lists no months",
            )
        })?,
    };
    let end = config.gallery_end();

    let items = build_items(start, end, &available, config.photo_dir())?;
    tracing::info!(
        "Gallery spans {} to {}: {} months, {} with photos",
        start,
        end,
        items.len(),
        items.iter().filter(|i| i.has_resource()).count()
    );

    Carousel::new(items, config.start_policy())
}

/// Hero background rotator, when the site configures one.
pub fn load_hero(config: &SiteConfig) -> Option<Result<Carousel>> {
    let images = config.hero_images();
    if images.is_empty() {
        return None;
    }
    Some(Carousel::from_resources(images.iter().cloned()))
}
