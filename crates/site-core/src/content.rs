//! Authored page content: experiences, navigation sections and the
//! supporting copy shown around them.
//!
//! Everything here is static and never mutated at runtime.

use crate::error::SiteError;
use std::str::FromStr;

/// Which interactive visual an experience renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InteractionKind {
    Flames,
    Maze,
    Leaderboard,
    Bubbles,
    Stars,
}

impl InteractionKind {
    pub const ALL: [InteractionKind; 5] = [
        InteractionKind::Flames,
        InteractionKind::Maze,
        InteractionKind::Leaderboard,
        InteractionKind::Bubbles,
        InteractionKind::Stars,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            InteractionKind::Flames => "flames",
            InteractionKind::Maze => "maze",
            InteractionKind::Leaderboard => "leaderboard",
            InteractionKind::Bubbles => "bubbles",
            InteractionKind::Stars => "stars",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Phase {
    pub title: &'static str,
    pub description: &'static str,
    pub animation: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExperienceDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    pub tagline: &'static str,
    pub color: &'static str,
    pub description: &'static str,
    /// Arrival, main event and aftermath, in that order.
    pub phases: [Phase; 3],
    pub kind: InteractionKind,
    pub full_concept: &'static str,
}

impl ExperienceDescriptor {
    /// Short label used by the navigation bar: the last word of the name.
    pub fn short_name(&self) -> &'static str {
        self.name.split_whitespace().last().unwrap_or(self.name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    pub color: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TechNode {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub details: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialCard {
    pub platform: &'static str,
    pub content: &'static str,
    pub author: &'static str,
    pub timestamp: &'static str,
}

pub const HERO_SECTION_ID: &str = "hero";
pub const TECH_SECTION_ID: &str = "tech";
pub const PERSONAL_SECTION_ID: &str = "personal";
pub const CTA_SECTION_ID: &str = "cta";

pub const HERO_QUESTION: &str = "How do you ignite a room full of Canada's boldest marketers?";
pub const HERO_FLICKER_WORD: &str = "ignite";
pub const HERO_FLICKER_REPLACEMENT: &str = "set on fire";

pub static EXPERIENCES: [ExperienceDescriptor; 5] = [
    ExperienceDescriptor {
        id: "inferno",
        name: "Gemini Data Inferno",
        tagline: "Every spark counts—turning your impact into a living spectacle.",
        color: "#FF4500",
        description: "Transform live audience data into an erupting digital inferno that responds to every interaction.",
        phases: [
            Phase {
                title: "Ignition Point",
                description: "Step in and you're instantly in the spotlight—a heatmap gallery builds as you walk in, energy rising with every new arrival.",
                animation: "flames-rise",
            },
            Phase {
                title: "Data Eruption",
                description: "The room erupts in live data art—every interaction, every shout, every post is captured and visualized. No wallflowers, only fire.",
                animation: "fire-burst",
            },
            Phase {
                title: "Spark Legacy",
                description: "You leave with a personalized highlight reel—your spark, your badge, your story—Google-official and shareable. FOMO guaranteed.",
                animation: "ember-trail",
            },
        ],
        kind: InteractionKind::Flames,
        full_concept: "The Gemini Data Inferno transforms GSHA 2025 into a living, breathing data visualization that erupts with every audience interaction. Using real-time sentiment analysis, social media monitoring, and proximity sensors, we create a digital inferno that grows more intense as engagement increases. Attendees become fuel for the fire, with their contributions visualized as flames, sparks, and heat signatures across massive displays. The more they participate, the more spectacular the show becomes, creating an addictive cycle of engagement that turns passive attendees into active performers.",
    },
    ExperienceDescriptor {
        id: "labyrinth",
        name: "The Experience Labyrinth",
        tagline: "Navigate the maze of possibility—every path leads to performance.",
        color: "#9F32E9",
        description: "An interactive journey where each choice reveals new performance strategies and unlocks hidden insights.",
        phases: [
            Phase {
                title: "Entry Portal",
                description: "Choose your path through a neon-lit maze of performance challenges. Each route offers different rewards and revelations.",
                animation: "maze-glow",
            },
            Phase {
                title: "Path Discovery",
                description: "Navigate through immersive scenarios, making choices that unlock personalized Google Search strategies and competitive insights.",
                animation: "portal-open",
            },
            Phase {
                title: "Exit Trophy",
                description: "Emerge with a custom performance roadmap, exclusive insights, and proof of your journey through the labyrinth.",
                animation: "treasure-reveal",
            },
        ],
        kind: InteractionKind::Maze,
        full_concept: "The Experience Labyrinth creates a choose-your-own-adventure experience where attendees navigate through different performance scenarios. Using AR wayfinding and interactive decision points, participants explore various Google Search optimization strategies, competitive analysis techniques, and performance measurement approaches. Each path through the labyrinth reveals different insights, case studies, and actionable strategies, ensuring every attendee leaves with a unique and personalized learning experience tailored to their specific challenges and goals.",
    },
    ExperienceDescriptor {
        id: "spark-index",
        name: "The Spark Index",
        tagline: "Where performance becomes competition—and everyone wins.",
        color: "#0C5964",
        description: "A real-time leaderboard that gamifies performance insights and rewards bold marketing moves.",
        phases: [
            Phase {
                title: "Index Entry",
                description: "Get scored instantly on your boldest marketing moves. The leaderboard updates live as you share your victories and challenges.",
                animation: "badge-rain",
            },
            Phase {
                title: "Performance Battle",
                description: "Compete in real-time challenges, share strategies, and watch your Spark Index score climb as you engage with fellow marketers.",
                animation: "leaderboard-pulse",
            },
            Phase {
                title: "Champion Badge",
                description: "Leave with your official Spark Index ranking, performance badges, and a network of fellow high-performers to connect with.",
                animation: "trophy-glow",
            },
        ],
        kind: InteractionKind::Leaderboard,
        full_concept: "The Spark Index transforms GSHA 2025 into a competitive gaming experience where marketing performance becomes a real-time competition. Attendees earn points for sharing insights, asking bold questions, participating in challenges, and demonstrating innovative thinking. The system tracks engagement across multiple touchpoints—from social media activity to session participation—creating a dynamic leaderboard that encourages friendly competition while fostering meaningful connections and knowledge sharing among Canada's top marketing professionals.",
    },
    ExperienceDescriptor {
        id: "firestarter",
        name: "FireStarter Academy",
        tagline: "Light the way for others—become the spark that ignites change.",
        color: "#9D531F",
        description: "Turn attendees into performance evangelists with tools, content, and confidence to spread the fire.",
        phases: [
            Phase {
                title: "Recruitment Rally",
                description: "Join the academy with a carnival of bold marketing questions, memes, and challenges that test your readiness to spread the performance gospel.",
                animation: "confetti-burst",
            },
            Phase {
                title: "Evangelism Training",
                description: "Master the art of performance storytelling with tools, templates, and tactics to become a champion for Google Search excellence.",
                animation: "spotlight-sweep",
            },
            Phase {
                title: "Ambassador Credentials",
                description: "Graduate with official FireStarter status, exclusive content to share, and a mission to ignite performance culture wherever you go.",
                animation: "banner-unfurl",
            },
        ],
        kind: InteractionKind::Bubbles,
        full_concept: "FireStarter Academy transforms GSHA attendees into performance evangelists who carry the message of Google Search excellence beyond the event. Through interactive workshops, content creation tools, and peer-to-peer learning sessions, participants develop the skills and confidence to champion performance-driven marketing within their organizations. The academy provides templates, case studies, presentation materials, and ongoing support to ensure the impact of GSHA 2025 continues long after the event ends, creating a ripple effect of performance culture across the Canadian marketing landscape.",
    },
    ExperienceDescriptor {
        id: "constellation",
        name: "The Performance Constellation",
        tagline: "Connect the stars—map your path to performance brilliance.",
        color: "#FFD700",
        description: "An interactive star map where connections between ideas, people, and strategies create new possibilities.",
        phases: [
            Phase {
                title: "Stellar Navigation",
                description: "Enter a cosmic space where each attendee becomes a star, and every interaction creates new constellations of possibility.",
                animation: "stars-emerge",
            },
            Phase {
                title: "Constellation Building",
                description: "Connect with other marketing stars, link strategies and insights, and watch as new patterns of performance excellence emerge.",
                animation: "lines-connect",
            },
            Phase {
                title: "Galaxy Map",
                description: "Leave with your personal constellation map showing all the connections you've made and the performance pathways you've discovered.",
                animation: "constellation-complete",
            },
        ],
        kind: InteractionKind::Stars,
        full_concept: "The Performance Constellation creates a living map of the GSHA 2025 community, visualizing connections between attendees, ideas, and strategies in real-time. Using proximity sensors, interaction tracking, and collaborative mapping tools, the experience shows how individual marketing challenges and solutions connect to form larger patterns of industry insight. Attendees can explore different \"star systems\" of expertise, discover unexpected connections between seemingly unrelated strategies, and contribute to a growing galaxy of performance knowledge that becomes more valuable with each new connection made.",
    },
];

pub static TECH_NODES: [TechNode; 5] = [
    TechNode {
        id: "live-data",
        name: "Live Data",
        description: "Your presence fuels the fire.",
        details: "Real-time audience sentiment, engagement metrics, and behavioral data streams that power all visual experiences.",
    },
    TechNode {
        id: "gemini-ai",
        name: "Gemini AI",
        description: "Narrating in real time.",
        details: "AI-powered commentary, insights generation, and personalized content creation that responds to live audience behavior.",
    },
    TechNode {
        id: "ar-badges",
        name: "AR Badges",
        description: "Your story, in your hand.",
        details: "Augmented reality achievements, progress tracking, and shareable digital collectibles that document each attendee's journey.",
    },
    TechNode {
        id: "projection",
        name: "Projection Mapping",
        description: "The room, reimagined as a canvas.",
        details: "Environmental projection that transforms physical spaces into immersive digital experiences responding to audience energy.",
    },
    TechNode {
        id: "social",
        name: "Social Integration",
        description: "Instant FOMO, everywhere.",
        details: "Real-time social media integration, shareable moments, and viral content generation that extends the experience beyond the venue.",
    },
];

pub static GEMINI_QUIPS: [&str; 10] = [
    "Nice move.",
    "Now that's performance!",
    "You just sparked something.",
    "Fire detected.",
    "Performance level: Legendary",
    "You're igniting the room.",
    "Bold choice, brilliant result.",
    "The algorithm approves.",
    "Spark achieved.",
    "You're the next big thing.",
];

pub static SOCIAL_CARDS: [SocialCard; 3] = [
    SocialCard {
        platform: "twitter",
        content: "Just experienced the future of marketing events at #GSHA2025. When performance meets artistry, magic happens. #IgniteYourPerformance",
        author: "@MarketingMaven",
        timestamp: "2m",
    },
    SocialCard {
        platform: "linkedin",
        content: "The GSHA 2025 experience redefined what's possible when data becomes art. Every marketer needs to see this. #PerformanceArt",
        author: "Sarah Chen, CMO",
        timestamp: "5m",
    },
    SocialCard {
        platform: "instagram",
        content: "When your search performance literally sets the room on fire 🔥 #GSHA2025 #IgniteYourPerformance #MarketingMagic",
        author: "@digitalfirestarter",
        timestamp: "8m",
    },
];

/// Ordered navigation sections, top of the page first.
pub fn sections() -> Vec<SectionDescriptor> {
    let mut out = Vec::with_capacity(EXPERIENCES.len() + 4);
    out.push(SectionDescriptor {
        id: HERO_SECTION_ID,
        name: "Home",
        color: "#FFFFFF",
    });
    out.extend(EXPERIENCES.iter().map(|e| SectionDescriptor {
        id: e.id,
        name: e.short_name(),
        color: e.color,
    }));
    out.push(SectionDescriptor {
        id: TECH_SECTION_ID,
        name: "Tech",
        color: "#9F32E9",
    });
    out.push(SectionDescriptor {
        id: PERSONAL_SECTION_ID,
        name: "Vision",
        color: "#FFD700",
    });
    out.push(SectionDescriptor {
        id: CTA_SECTION_ID,
        name: "Contact",
        color: "#FF4500",
    });
    out
}

pub fn experience(id: &str) -> Option<&'static ExperienceDescriptor> {
    EXPERIENCES.iter().find(|e| e.id == id)
}

pub fn experience_index(id: &str) -> Result<usize, SiteError> {
    EXPERIENCES
        .iter()
        .position(|e| e.id == id)
        .ok_or_else(|| SiteError::UnknownExperience(id.to_string()))
}

impl FromStr for InteractionKind {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InteractionKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| SiteError::UnknownExperience(s.to_string()))
    }
}
