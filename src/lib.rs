pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{FileContentSource, LocalStorage, TalksSource};
pub use config::SiteConfig;
pub use crate::core::{
    auto_advance::{AutoAdvance, AutoAdvanceConfig},
    carousel::{Carousel, Direction},
    navbar::{NavbarAppearance, NavbarTracker},
    transition::TransitionEvent,
};
pub use domain::{
    model::{CarouselItem, StartPolicy, Talk},
    period::Period,
};
pub use utils::error::{Result, SiteError};
