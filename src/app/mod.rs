pub mod gallery;

pub use gallery::{load_gallery, load_hero};
