//! Static content types for the landing page.
//!
//! Every type here is immutable and lives for the whole program: the page
//! content is compiled in and borrowed as `&'static` data.
//!
//! - [`Slide`] - Customer story shown in the carousel
//! - [`FaqEntry`] - Question and answer
//! - [`PlanTier`] - Rental plan with both billing prices
//! - [`HeroVideoSlot`] - One hero background video
//! - [`NavLink`], [`Step`], [`RobotCategory`], [`AddOn`], [`Stat`],
//!   [`FooterColumn`], [`SocialLink`] - Static section content

use serde::Serialize;

// =============================================================================
// Carousel
// =============================================================================

/// A customer story.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slide {
    pub id: u32,
    pub name: &'static str,
    pub role: &'static str,
    pub location: &'static str,
    pub quote: &'static str,
    /// Star rating, 1 to 5.
    pub rating: u8,
    /// Initials shown in the avatar bubble.
    pub avatar: &'static str,
    /// Robot or plan the customer uses.
    pub tag: &'static str,
}

impl Slide {
    /// "Role • Location" line under the name.
    pub fn byline(&self) -> String {
        format!("{} • {}", self.role, self.location)
    }
}

/// A headline number under the carousel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

// =============================================================================
// FAQ
// =============================================================================

/// One FAQ entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
    pub category: Option<&'static str>,
}

// =============================================================================
// Plans
// =============================================================================

/// A rental plan. Prices are whole dollars.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanTier {
    pub name: &'static str,
    pub description: &'static str,
    pub monthly_price: u32,
    pub yearly_price: u32,
    pub features: &'static [&'static str],
    pub popular: bool,
    pub cta: &'static str,
}

/// Optional upgrade listed under the plans.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddOn {
    pub name: &'static str,
    pub price: &'static str,
    pub description: &'static str,
}

// =============================================================================
// Hero
// =============================================================================

/// A hero background video.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeroVideoSlot {
    /// 1-based position in the rotation.
    pub ordinal: u8,
    pub source: &'static str,
    pub mime: &'static str,
    pub poster: &'static str,
}

// =============================================================================
// Static sections
// =============================================================================

/// In-page navigation link.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    /// Anchor including the leading `#`.
    pub href: &'static str,
}

impl NavLink {
    /// Element id the link points at, without the `#`.
    pub fn target_id(&self) -> Option<&'static str> {
        self.href.strip_prefix('#').filter(|id| !id.is_empty())
    }
}

/// A "how it works" step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Step {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// A robot category card.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RobotCategory {
    pub title: &'static str,
    pub description: &'static str,
    pub robot_types: &'static [&'static str],
    /// Demo clip played on hover, if the category has one.
    pub video: Option<&'static str>,
}

/// A footer link column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FooterColumn {
    pub title: &'static str,
    pub links: &'static [NavLink],
}

/// Social network link in the footer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_link_target() {
        let link = NavLink { label: "Plans", href: "#rental-plans" };
        assert_eq!(link.target_id(), Some("rental-plans"));

        let top = NavLink { label: "Top", href: "#" };
        assert_eq!(top.target_id(), None);
    }

    #[test]
    fn test_plan_serializes_camel_case() {
        let plan = PlanTier {
            name: "Solo",
            description: "One robot",
            monthly_price: 10,
            yearly_price: 100,
            features: &["a"],
            popular: false,
            cta: "Go",
        };
        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["monthlyPrice"], 10);
        assert_eq!(json["yearlyPrice"], 100);
    }
}
