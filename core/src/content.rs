//! The shipped page content.
//!
//! All copy is compiled in. [`site_content`] bundles the sections and
//! [`validate`] checks the invariants the widgets rely on (non-empty decks,
//! ratings in range, hero ordinals 1..=3).

use crate::config::HERO_SLOT_COUNT;
use crate::error::ContentError;
use crate::models::{
    AddOn, FaqEntry, FooterColumn, HeroVideoSlot, NavLink, PlanTier, RobotCategory, Slide,
    SocialLink, Stat, Step,
};

// =============================================================================
// Navigation
// =============================================================================

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Robots", href: "#robots" },
    NavLink { label: "How It Works", href: "#how-it-works" },
    NavLink { label: "Plans", href: "#rental-plans" },
    NavLink { label: "Stories", href: "#testimonials" },
];

// =============================================================================
// Hero
// =============================================================================

pub const HERO_VIDEOS: &[HeroVideoSlot] = &[
    HeroVideoSlot {
        ordinal: 1,
        source: "/demo-video.mp4",
        mime: "video/mp4",
        poster: "/stills/demo-still.webp",
    },
    HeroVideoSlot {
        ordinal: 2,
        source: "/demo-video-2.mp4",
        mime: "video/mp4",
        poster: "/stills/demo-still-2.webp",
    },
    HeroVideoSlot {
        ordinal: 3,
        source: "/demo-video-3.mp4",
        mime: "video/mp4",
        poster: "/stills/demo-still-3.webp",
    },
];

/// Initials in the hero social-proof row.
pub const HERO_AVATARS: &[&str] = &["JM", "RC", "SK", "TL"];

// =============================================================================
// How it works
// =============================================================================

pub const STEPS: &[Step] = &[
    Step {
        number: "01",
        title: "Browse & Choose",
        description: "Explore our robot catalog and select the perfect assistant for your needs. Filter by task, capability, or room type.",
    },
    Step {
        number: "02",
        title: "Quick Setup",
        description: "We deliver and professionally set up your robot at your home within 48 hours. No technical knowledge required.",
    },
    Step {
        number: "03",
        title: "Live & Enjoy",
        description: "Your robot starts working immediately. Control via our app, voice commands, or let it operate autonomously.",
    },
    Step {
        number: "04",
        title: "Swap Anytime",
        description: "Want to try something new? Swap robots as your needs change. Upgrade to the latest models at no extra cost.",
    },
];

// =============================================================================
// Robot categories
// =============================================================================

pub const CATEGORIES: &[RobotCategory] = &[
    RobotCategory {
        title: "Cleaning Crew",
        description: "Autonomous vacuuming, mopping, and tidying robots that keep your home spotless 24/7.",
        robot_types: &["VacBot Pro", "MopMaster", "TidyBot"],
        video: Some("/demo-video.mp4"),
    },
    RobotCategory {
        title: "Kitchen Helpers",
        description: "From meal prep to dishwashing, let culinary robots handle your kitchen tasks.",
        robot_types: &["ChefBot", "DishWasher AI", "PrepAssist"],
        video: Some("/demo-video-2.mp4"),
    },
    RobotCategory {
        title: "Companion Bots",
        description: "Interactive robots for entertainment, education, and emotional support for all ages.",
        robot_types: &["FriendBot", "TutorBot", "PetPal"],
        video: Some("/demo-video-3.mp4"),
    },
    RobotCategory {
        title: "Security & Monitoring",
        description: "Patrol robots with AI-powered surveillance, emergency response, and home monitoring.",
        robot_types: &["GuardBot", "PatrolPro", "SafeWatch"],
        video: None,
    },
    RobotCategory {
        title: "Outdoor Assistants",
        description: "Lawn care, gardening, and exterior maintenance robots for pristine outdoor spaces.",
        robot_types: &["LawnBot", "GardenPro", "SnowClear"],
        video: None,
    },
    RobotCategory {
        title: "Delivery & Errands",
        description: "Personal courier robots for neighborhood deliveries, pickups, and light shopping.",
        robot_types: &["FetchBot", "CarryPro", "ErrandRunner"],
        video: None,
    },
];

// =============================================================================
// Plans
// =============================================================================

pub const PLANS: &[PlanTier] = &[
    PlanTier {
        name: "Single Bot",
        description: "Perfect for trying out your first robot",
        monthly_price: 49,
        yearly_price: 490,
        features: &[
            "1 robot at a time",
            "Swap anytime (once per month)",
            "Free delivery & setup",
            "Basic maintenance included",
            "24/7 customer support",
        ],
        popular: false,
        cta: "Start Renting",
    },
    PlanTier {
        name: "Home Fleet",
        description: "Multiple robots working together",
        monthly_price: 129,
        yearly_price: 1290,
        features: &[
            "Up to 3 robots simultaneously",
            "Unlimited swaps",
            "Priority delivery (same-day)",
            "Premium maintenance & repairs",
            "Fleet coordination AI",
            "Dedicated support line",
            "Robot upgrade credits",
        ],
        popular: true,
        cta: "Get Your Fleet",
    },
    PlanTier {
        name: "Smart Home",
        description: "Full home automation with robots",
        monthly_price: 299,
        yearly_price: 2990,
        features: &[
            "Up to 8 robots simultaneously",
            "Unlimited swaps anytime",
            "Instant deployment (2-hour)",
            "Concierge service",
            "Custom robot programming",
            "Home integration setup",
            "Insurance coverage included",
            "Early access to new models",
        ],
        popular: false,
        cta: "Go Premium",
    },
];

pub const ADD_ONS: &[AddOn] = &[
    AddOn {
        name: "Extended Battery Pack",
        price: "$15/mo",
        description: "50% longer runtime",
    },
    AddOn {
        name: "Custom Robot Skins",
        price: "$25/mo",
        description: "Match your home decor",
    },
];

// =============================================================================
// Customer stories
// =============================================================================

pub const SLIDES: &[Slide] = &[
    Slide {
        id: 1,
        name: "Jennifer Martinez",
        role: "Busy Parent",
        location: "San Francisco, CA",
        quote: "Our CleanBot Pro has been a game-changer! With three kids and two jobs, coming home to a spotless house every day feels like magic. The rental model is perfect - we upgraded to a newer model last month at no extra cost.",
        rating: 5,
        avatar: "JM",
        tag: "CleanBot Pro + TidyBot",
    },
    Slide {
        id: 2,
        name: "Robert Chen",
        role: "Retiree",
        location: "Austin, TX",
        quote: "My CompanionBot helps me stay connected with family and reminds me about medications. It's like having a helpful friend who never gets tired. The support team even customized its personality for me!",
        rating: 5,
        avatar: "RC",
        tag: "CompanionBot Elder",
    },
    Slide {
        id: 3,
        name: "Sarah Kim",
        role: "Tech Entrepreneur",
        location: "Seattle, WA",
        quote: "I rent three robots - a kitchen helper, security bot, and cleaning crew. They work together seamlessly and I can control everything from my phone. Swapping is easy and maintenance is always included. Couldn't be happier!",
        rating: 5,
        avatar: "SK",
        tag: "Home Fleet Plan",
    },
    Slide {
        id: 4,
        name: "Marcus Thompson",
        role: "Small Business Owner",
        location: "Denver, CO",
        quote: "The delivery bot handles all my local courier needs for the business. It's reliable, cost-effective, and my customers love the novelty. Robotech's service has been outstanding from day one.",
        rating: 5,
        avatar: "MT",
        tag: "FetchBot Pro",
    },
    Slide {
        id: 5,
        name: "Lisa Patel",
        role: "Working Mom",
        location: "Boston, MA",
        quote: "The lawn care robot keeps our yard pristine without any effort. We tried it on the Single Bot plan first, loved it, and upgraded to Home Fleet. Now we have a cleaning bot too. Best decision ever!",
        rating: 5,
        avatar: "LP",
        tag: "LawnBot + VacBot Pro",
    },
];

pub const STATS: &[Stat] = &[
    Stat { value: "50,000+", label: "Happy households" },
    Stat { value: "4.9/5", label: "Average rating" },
    Stat { value: "98%", label: "Would recommend" },
];

// =============================================================================
// FAQ
// =============================================================================

pub const FAQS: &[FaqEntry] = &[
    FaqEntry {
        question: "How does robot rental work?",
        answer: "Choose your robot(s), select a rental plan, and we'll deliver and set up your robot within 48 hours. You can swap for different models, pause your subscription, or cancel anytime. All maintenance, repairs, and software updates are included in your monthly fee.",
        category: Some("Getting Started"),
    },
    FaqEntry {
        question: "What if my robot breaks or malfunctions?",
        answer: "All rentals include comprehensive maintenance and repair coverage. If your robot malfunctions, contact us and we'll either fix it remotely via software update or send a replacement within 24 hours. No additional fees apply for normal wear and tear.",
        category: Some("Support"),
    },
    FaqEntry {
        question: "Can I try a robot before committing to a plan?",
        answer: "Yes! We offer a 7-day trial period on your first robot rental. If you're not completely satisfied, return it for a full refund. We also have showrooms in major cities where you can interact with our robots before renting.",
        category: Some("Getting Started"),
    },
    FaqEntry {
        question: "Are the robots safe around children and pets?",
        answer: "Absolutely. All our robots are certified safe for home use and equipped with advanced sensors to detect and avoid children, pets, and obstacles. They meet or exceed all safety standards and have child-lock features you can enable.",
        category: Some("Safety"),
    },
    FaqEntry {
        question: "How do I swap my robot for a different model?",
        answer: "Swapping is easy! Log into your account, browse available robots, and request a swap. We'll schedule a convenient pickup/delivery time. Single Bot plans get one swap per month, while Home Fleet and Smart Home plans have unlimited swaps.",
        category: Some("Rentals"),
    },
    FaqEntry {
        question: "Do I need special equipment or home setup?",
        answer: "Most robots only need Wi-Fi and standard power outlets. Our setup team will visit your home during initial delivery to ensure everything is configured properly. For advanced features like multi-robot coordination, we may recommend a Robotech Hub (provided free with Home Fleet plans).",
        category: Some("Technical"),
    },
    FaqEntry {
        question: "What happens to my data and privacy?",
        answer: "Your privacy is paramount. All robots process data locally on-device whenever possible. Any cloud data is encrypted end-to-end and never shared with third parties. You can review, download, or delete your data anytime. Cameras can be physically disabled when not in use.",
        category: Some("Privacy"),
    },
    FaqEntry {
        question: "Can I purchase a robot instead of renting?",
        answer: "Currently, we operate on a rental-only model to ensure everyone has access to the latest technology without large upfront costs. However, we're exploring rent-to-own options. Join our mailing list to be notified when this becomes available.",
        category: Some("Rentals"),
    },
    FaqEntry {
        question: "What's included in maintenance?",
        answer: "All routine maintenance, software updates, part replacements, and repairs are included in your rental fee. We perform preventive maintenance proactively and will contact you to schedule service if needed. Emergency repairs are handled within 24 hours.",
        category: Some("Support"),
    },
    FaqEntry {
        question: "Can robots work together as a team?",
        answer: "Yes! Our Home Fleet and Smart Home plans include fleet coordination AI that allows multiple robots to work together seamlessly. For example, your cleaning robots can coordinate schedules, or your security bot can notify your companion bot of unusual activity.",
        category: Some("Features"),
    },
];

// =============================================================================
// Footer
// =============================================================================

pub const FOOTER_COLUMNS: &[FooterColumn] = &[
    FooterColumn {
        title: "Product",
        links: &[
            NavLink { label: "Browse Robots", href: "#robots" },
            NavLink { label: "Rental Plans", href: "#rental-plans" },
            NavLink { label: "How It Works", href: "#how-it-works" },
            NavLink { label: "Customer Stories", href: "#testimonials" },
            NavLink { label: "Showrooms", href: "#" },
        ],
    },
    FooterColumn {
        title: "Company",
        links: &[
            NavLink { label: "About Us", href: "#" },
            NavLink { label: "Careers", href: "#" },
            NavLink { label: "Blog", href: "#" },
            NavLink { label: "Press Kit", href: "#" },
            NavLink { label: "Contact", href: "#" },
        ],
    },
    FooterColumn {
        title: "Resources",
        links: &[
            NavLink { label: "Help Center", href: "#" },
            NavLink { label: "Robot Guides", href: "#" },
            NavLink { label: "Safety Info", href: "#" },
            NavLink { label: "Community Forum", href: "#" },
            NavLink { label: "API Docs", href: "#" },
        ],
    },
    FooterColumn {
        title: "Legal",
        links: &[
            NavLink { label: "Privacy Policy", href: "#" },
            NavLink { label: "Terms of Service", href: "#" },
            NavLink { label: "Rental Agreement", href: "#" },
            NavLink { label: "Safety Standards", href: "#" },
        ],
    },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { label: "Twitter", href: "#" },
    SocialLink { label: "GitHub", href: "#" },
    SocialLink { label: "LinkedIn", href: "#" },
    SocialLink { label: "Email", href: "#" },
];

// =============================================================================
// Bundle and validation
// =============================================================================

/// All page sections.
#[derive(Debug, Clone, Copy)]
pub struct SiteContent {
    pub nav_links: &'static [NavLink],
    pub hero_videos: &'static [HeroVideoSlot],
    pub steps: &'static [Step],
    pub categories: &'static [RobotCategory],
    pub plans: &'static [PlanTier],
    pub add_ons: &'static [AddOn],
    pub slides: &'static [Slide],
    pub stats: &'static [Stat],
    pub faqs: &'static [FaqEntry],
    pub footer_columns: &'static [FooterColumn],
    pub social_links: &'static [SocialLink],
}

/// The content the site ships with.
pub fn site_content() -> SiteContent {
    SiteContent {
        nav_links: NAV_LINKS,
        hero_videos: HERO_VIDEOS,
        steps: STEPS,
        categories: CATEGORIES,
        plans: PLANS,
        add_ons: ADD_ONS,
        slides: SLIDES,
        stats: STATS,
        faqs: FAQS,
        footer_columns: FOOTER_COLUMNS,
        social_links: SOCIAL_LINKS,
    }
}

/// Check the invariants the widgets depend on.
///
/// Returns the first violation found.
pub fn validate(content: &SiteContent) -> Result<(), ContentError> {
    if content.slides.is_empty() {
        return Err(ContentError::EmptySection("slides"));
    }
    if content.faqs.is_empty() {
        return Err(ContentError::EmptySection("faqs"));
    }
    if content.plans.is_empty() {
        return Err(ContentError::EmptySection("plans"));
    }

    for slide in content.slides {
        if !(1..=5).contains(&slide.rating) {
            return Err(ContentError::RatingOutOfRange {
                id: slide.id,
                rating: slide.rating,
            });
        }
    }

    if content.hero_videos.len() != HERO_SLOT_COUNT {
        return Err(ContentError::HeroSlotCount {
            expected: HERO_SLOT_COUNT,
            found: content.hero_videos.len(),
        });
    }
    for (position, slot) in content.hero_videos.iter().enumerate() {
        if usize::from(slot.ordinal) != position + 1 {
            return Err(ContentError::HeroOrdinal {
                position,
                ordinal: slot.ordinal,
            });
        }
    }

    let popular = content.plans.iter().filter(|p| p.popular).count();
    if popular > 1 {
        return Err(ContentError::MultiplePopular(popular));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipped_content_is_valid() {
        assert_eq!(validate(&site_content()), Ok(()));
    }

    #[test]
    fn test_empty_slides_rejected() {
        let content = SiteContent {
            slides: &[],
            ..site_content()
        };
        assert_eq!(validate(&content), Err(ContentError::EmptySection("slides")));
    }

    #[test]
    fn test_rating_out_of_range() {
        const BAD: &[Slide] = &[Slide {
            id: 9,
            name: "X",
            role: "Y",
            location: "Z",
            quote: "Q",
            rating: 0,
            avatar: "XY",
            tag: "T",
        }];
        let content = SiteContent {
            slides: BAD,
            ..site_content()
        };
        assert_eq!(
            validate(&content),
            Err(ContentError::RatingOutOfRange { id: 9, rating: 0 })
        );
    }

    #[test]
    fn test_hero_ordinals_must_be_sequential() {
        const SWAPPED: &[HeroVideoSlot] = &[
            HeroVideoSlot { ordinal: 2, source: "/a.mp4", mime: "video/mp4", poster: "/a.webp" },
            HeroVideoSlot { ordinal: 1, source: "/b.mp4", mime: "video/mp4", poster: "/b.webp" },
            HeroVideoSlot { ordinal: 3, source: "/c.mp4", mime: "video/mp4", poster: "/c.webp" },
        ];
        let content = SiteContent {
            hero_videos: SWAPPED,
            ..site_content()
        };
        assert_eq!(
            validate(&content),
            Err(ContentError::HeroOrdinal { position: 0, ordinal: 2 })
        );
    }

    #[test]
    fn test_single_popular_plan() {
        let popular: Vec<_> = PLANS.iter().filter(|p| p.popular).collect();
        assert_eq!(popular.len(), 1);
        assert_eq!(popular[0].name, "Home Fleet");
    }
}
