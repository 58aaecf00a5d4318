//! Reference data for the site under test.

use serde::{Deserialize, Serialize};

/// Careers department filter options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    /// Sales
    Sales,
    /// R&D
    RAndD,
    /// R&D - DevOps
    RAndDDevOps,
    /// Customer Success
    CustomerSuccess,
    /// Product Management
    ProductManagement,
    /// R&D - QA
    RAndDQa,
    /// R&D - Development
    RAndDDevelopment,
    /// Support
    Support,
}

impl Department {
    /// Every department
    pub const ALL: [Self; 8] = [
        Self::Sales,
        Self::RAndD,
        Self::RAndDDevOps,
        Self::CustomerSuccess,
        Self::ProductManagement,
        Self::RAndDQa,
        Self::RAndDDevelopment,
        Self::Support,
    ];

    /// Option label as shown in the filter
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sales => "Sales",
            Self::RAndD => "R&D",
            Self::RAndDDevOps => "R&D - DevOps",
            Self::CustomerSuccess => "Customer Success",
            Self::ProductManagement => "Product Management",
            Self::RAndDQa => "R&D - QA",
            Self::RAndDDevelopment => "R&D - Development",
            Self::Support => "Support",
        }
    }
}

/// Careers location filter options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    /// Dallas office
    Dallas,
    /// Belgrade office
    Belgrade,
    /// Petah Tikva office
    PetahTikva,
    /// London office
    London,
}

impl Location {
    /// Every location
    pub const ALL: [Self; 4] = [Self::Dallas, Self::Belgrade, Self::PetahTikva, Self::London];

    /// Option label as shown in the filter
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dallas => "Dallas, Texas, United States",
            Self::Belgrade => "Belgrade, Serbia",
            Self::PetahTikva => "Petah Tikva, Israel",
            Self::London => "London, England, United Kingdom",
        }
    }
}

/// Resource library categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceCategory {
    /// Videos
    Videos,
    /// Webinars
    Webinar,
    /// Blog posts
    Blog,
    /// Guides
    Guides,
    /// Reports
    Reports,
    /// News
    News,
    /// Events
    Events,
}

impl ResourceCategory {
    /// Every category
    pub const ALL: [Self; 7] = [
        Self::Videos,
        Self::Webinar,
        Self::Blog,
        Self::Guides,
        Self::Reports,
        Self::News,
        Self::Events,
    ];

    /// Class carried by listing items of this category
    #[must_use]
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::Videos => "category-video",
            Self::Webinar => "category-webinar",
            Self::Blog => "category-blog",
            Self::Guides => "category-guides",
            Self::Reports => "category-reports",
            Self::News => "category-news",
            Self::Events => "category-events",
        }
    }

    /// Menu label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Videos => "Videos",
            Self::Webinar => "Webinars",
            Self::Blog => "Blog",
            Self::Guides => "Guides",
            Self::Reports => "Reports",
            Self::News => "News",
            Self::Events => "Events",
        }
    }

    /// Category whose menu label is `label`
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_unique() {
        let mut labels: Vec<&str> = Department::ALL.iter().map(|d| d.label()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), Department::ALL.len());
    }

    #[test]
    fn test_category_lookup() {
        assert_eq!(
            ResourceCategory::from_label(" Webinars "),
            Some(ResourceCategory::Webinar)
        );
        assert_eq!(ResourceCategory::from_label("Podcasts"), None);
        assert_eq!(ResourceCategory::Videos.class_name(), "category-video");
    }

    #[test]
    fn test_location_label() {
        assert_eq!(Location::London.label(), "London, England, United Kingdom");
    }
}
