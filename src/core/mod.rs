pub mod auto_advance;
pub mod carousel;
pub mod catalog;
pub mod navbar;
pub mod talks;
pub mod transition;

pub use crate::domain::model::{CarouselItem, StartPolicy, Talk};
pub use crate::domain::ports::{ContentSource, Storage};
pub use crate::utils::error::Result;
