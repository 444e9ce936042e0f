use crate::domain::model::{CarouselItem, StartPolicy};
use crate::utils::error::{Result, SiteError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    fn delta(self) -> isize {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

/// Wraparound cursor over a fixed, non-empty list of items.
///
/// The item list never changes after construction; only [`advance`](Self::advance)
/// and [`jump_to`](Self::jump_to) move the cursor.
#[derive(Debug, Clone)]
pub struct Carousel {
    items: Vec<CarouselItem>,
    current_index: usize,
}

impl Carousel {
    pub fn new(items: Vec<CarouselItem>, policy: StartPolicy) -> Result<Self> {
        if items.is_empty() {
            return Err(SiteError::invalid_configuration(
                "carousel needs at least one item",
            ));
        }

        let current_index = match policy {
            StartPolicy::Last => items.len() - 1,
            StartPolicy::LastAvailable => items
                .iter()
                .rposition(CarouselItem::has_resource)
                .unwrap_or(0),
        };

        tracing::debug!(
            "Carousel built with {} items, starting at {} ({:?})",
            items.len(),
            current_index,
            policy
        );

        Ok(Self {
            items,
            current_index,
        })
    }

    /// Hero background: every entry is an image, labelled by its own path.
    /// Starts on the first image.
    pub fn from_resources<I, S>(resources: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items: Vec<CarouselItem> = resources
            .into_iter()
            .map(|r| {
                let r = r.into();
                CarouselItem::present(r.clone(), r)
            })
            .collect();

        let mut carousel = Self::new(items, StartPolicy::Last)?;
        carousel.current_index = 0;
        Ok(carousel)
    }

    pub fn current(&self) -> &CarouselItem {
        &self.items[self.current_index]
    }

    pub fn index(&self) -> usize {
        self.current_index
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn items(&self) -> &[CarouselItem] {
        &self.items
    }

    pub fn advance(&mut self, direction: Direction) -> &CarouselItem {
        let len = self.items.len() as isize;
        let next = (self.current_index as isize + direction.delta() + len) % len;
        self.current_index = next as usize;

        tracing::debug!(
            "Carousel moved {:?} to {} ({})",
            direction,
            self.current_index,
            self.items[self.current_index].label
        );
        self.current()
    }

    pub fn jump_to(&mut self, index: isize) -> Result<&CarouselItem> {
        let len = self.items.len();
        if index < 0 || index as usize >= len {
            return Err(SiteError::IndexOutOfRange { index, len });
        }

        self.current_index = index as usize;
        tracing::debug!("Carousel jumped to {}", self.current_index);
        Ok(self.current())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn months(entries: &[(&str, bool)]) -> Vec<CarouselItem> {
        entries
            .iter()
            .map(|(label, present)| {
                if *present {
                    CarouselItem::present(*label, format!("photos/{}.jpeg", label.replace(' ', "")))
                } else {
                    CarouselItem::absent(*label)
                }
            })
            .collect()
    }

    #[test]
    fn test_empty_sequence_is_invalid_configuration() {
        let result = Carousel::new(Vec::new(), StartPolicy::Last);
        assert!(matches!(result, Err(SiteError::InvalidConfiguration { .. })));

        let hero = Carousel::from_resources(Vec::<String>::new());
        assert!(matches!(hero, Err(SiteError::InvalidConfiguration { .. })));
    }

    #[test]
    fn test_last_policy_starts_at_end() {
        let c = Carousel::new(
            months(&[("September 2024", true), ("October 2024", false)]),
            StartPolicy::Last,
        )
        .unwrap();
        assert_eq!(c.current().label, "October 2024");
        assert!(!c.current().has_resource());
    }

    #[test]
    fn test_last_available_policy() {
        let c = Carousel::new(
            months(&[("January 2025", false), ("February 2025", true)]),
            StartPolicy::LastAvailable,
        )
        .unwrap();
        assert_eq!(c.current().label, "February 2025");

        let c = Carousel::new(
            months(&[("January 2025", true), ("February 2025", false), ("March 2025", false)]),
            StartPolicy::LastAvailable,
        )
        .unwrap();
        assert_eq!(c.index(), 0);

        let c = Carousel::new(months(&[("January 2025", false)]), StartPolicy::LastAvailable)
            .unwrap();
        assert_eq!(c.index(), 0);
        assert_eq!(c.current().label, "January 2025");
    }

    #[test]
    fn test_wraparound_both_directions() {
        let mut c = Carousel::new(
            months(&[
                ("September 2024", true),
                ("October 2024", true),
                ("November 2024", true),
            ]),
            StartPolicy::Last,
        )
        .unwrap();

        assert_eq!(c.current().label, "November 2024");
        assert_eq!(c.advance(Direction::Forward).label, "September 2024");
        assert_eq!(c.advance(Direction::Backward).label, "November 2024");
    }

    #[test]
    fn test_single_item_stays_put() {
        let mut c = Carousel::new(months(&[("May 2025", true)]), StartPolicy::Last).unwrap();
        c.advance(Direction::Forward);
        assert_eq!(c.index(), 0);
        c.advance(Direction::Backward);
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn test_jump_to_rejects_out_of_range() {
        let mut c = Carousel::new(
            months(&[("May 2025", true), ("June 2025", true)]),
            StartPolicy::Last,
        )
        .unwrap();

        assert!(matches!(
            c.jump_to(2),
            Err(SiteError::IndexOutOfRange { index: 2, len: 2 })
        ));
        assert!(matches!(
            c.jump_to(-1),
            Err(SiteError::IndexOutOfRange { index: -1, len: 2 })
        ));
        // 失敗的跳轉不改變位置
        assert_eq!(c.index(), 1);

        assert_eq!(c.jump_to(0).unwrap().label, "May 2025");
    }

    #[test]
    fn test_hero_starts_at_first_image() {
        let c = Carousel::from_resources(["hero/a.jpg", "hero/b.jpg"]).unwrap();
        assert_eq!(c.index(), 0);
        assert_eq!(c.current().resource_ref.as_deref(), Some("hero/a.jpg"));
        assert!(c.items().iter().all(CarouselItem::has_resource));
    }
}
