use serde::{Deserialize, Serialize};

/// One navigable unit of a carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarouselItem {
    pub label: String,
    /// `None` when the month has no photo; the view shows a placeholder.
    pub resource_ref: Option<String>,
}

impl CarouselItem {
    pub fn present(label: impl Into<String>, resource_ref: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            resource_ref: Some(resource_ref.into()),
        }
    }

    pub fn absent(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            resource_ref: None,
        }
    }

    pub fn has_resource(&self) -> bool {
        self.resource_ref.is_some()
    }
}

/// Where the carousel lands when it is first built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StartPolicy {
    /// The chronologically last item.
    #[default]
    Last,
    /// The last item that has a resource, falling back to the first item.
    LastAvailable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Talk {
    pub month: String,
    pub speaker: String,
    pub topic: String,
}
