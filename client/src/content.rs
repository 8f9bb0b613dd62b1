//! Static content registries rendered by the sections.
//!
//! Plain records in display order. Only their shape matters to the view-state
//! layer: projects feed the modal by id, everything else is list rendering.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    /// Gradient modifier class.
    pub accent: &'static str,
}

/// A portfolio project; the unit of modal selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub long_description: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
    pub link: Option<&'static str>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExperienceEntry {
    pub id: u32,
    pub company: &'static str,
    pub position: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub achievements: &'static [&'static str],
    pub logo: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
    pub accent: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const HIGHLIGHTS: &[&str] = &[
    "8+ years of iOS development experience",
    "Expert in Swift, SwiftUI, and UIKit",
    "Published apps with 500K+ downloads",
    "Strong focus on performance and UX",
    "Mentored junior developers",
    "Open source contributor",
];

pub const SKILLS: &[Skill] = &[
    Skill { name: "Swift", description: "Modern iOS development", icon: "⌨", accent: "accent-orange" },
    Skill { name: "SwiftUI", description: "Declarative UI framework", icon: "📱", accent: "accent-blue" },
    Skill { name: "UIKit", description: "Traditional UI framework", icon: "⚡", accent: "accent-yellow" },
    Skill { name: "Core Data", description: "Data persistence", icon: "🗄", accent: "accent-purple" },
    Skill { name: "Firebase", description: "Backend services", icon: "☁", accent: "accent-amber" },
    Skill { name: "Design", description: "UI/UX principles", icon: "🎨", accent: "accent-pink" },
];

pub const EXTRA_SKILLS: &[&str] =
    &["Xcode", "Git", "REST APIs", "GraphQL", "Unit Testing", "CI/CD", "Agile", "App Store"];

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "FitTrack Pro",
        description: "Comprehensive fitness tracking app",
        long_description: "A full-featured fitness tracking application with real-time workout monitoring, \
                           personalized recommendations, and social features. Built with SwiftUI and Core Data.",
        image: "🏋️",
        tags: &["SwiftUI", "Core Data", "HealthKit"],
        link: Some("#"),
    },
    Project {
        id: 2,
        title: "WeatherFlow",
        description: "Beautiful weather forecasting app",
        long_description: "An elegant weather app with detailed forecasts, severe weather alerts, and smooth \
                           animations. Integrates with multiple weather APIs.",
        image: "🌤️",
        tags: &["SwiftUI", "REST API", "MapKit"],
        link: Some("#"),
    },
    Project {
        id: 3,
        title: "NotesSync",
        description: "Cloud-synced notes application",
        long_description: "A notes app with cloud synchronization, rich text editing, and offline support. \
                           Features end-to-end encryption for privacy.",
        image: "📝",
        tags: &["UIKit", "Firebase", "CloudKit"],
        link: Some("#"),
    },
    Project {
        id: 4,
        title: "TaskMaster",
        description: "Advanced task management system",
        long_description: "A task management app with team collaboration, real-time updates, and intelligent \
                           scheduling.",
        image: "✅",
        tags: &["SwiftUI", "Combine", "WebSocket"],
        link: Some("#"),
    },
    Project {
        id: 5,
        title: "PhotoGallery",
        description: "AI-powered photo organization",
        long_description: "A photo gallery app that uses on-device machine learning for automatic organization \
                           and smart search.",
        image: "📸",
        tags: &["Vision Framework", "CoreML", "SwiftUI"],
        link: None,
    },
    Project {
        id: 6,
        title: "StreamHub",
        description: "Video streaming platform",
        long_description: "A streaming app with adaptive bitrate playback, offline downloads, and personalized \
                           recommendations.",
        image: "🎬",
        tags: &["AVFoundation", "HLS", "SwiftUI"],
        link: None,
    },
];

pub const EXPERIENCE: &[ExperienceEntry] = &[
    ExperienceEntry {
        id: 1,
        company: "TechCorp Inc.",
        position: "Senior iOS Developer",
        period: "2022 - Present",
        description: "Leading iOS development initiatives and mentoring junior developers.",
        achievements: &[
            "Led development of flagship app with 500K+ downloads",
            "Implemented SwiftUI architecture improvements",
            "Mentored 3 junior developers",
        ],
        logo: "🏢",
    },
    ExperienceEntry {
        id: 2,
        company: "StartupHub",
        position: "iOS Developer",
        period: "2020 - 2022",
        description: "Developed multiple iOS applications from concept to App Store launch.",
        achievements: &["Shipped 4 production apps", "Reduced app size by 40%", "Implemented CI/CD pipeline"],
        logo: "🚀",
    },
    ExperienceEntry {
        id: 3,
        company: "Mobile Solutions Ltd.",
        position: "Junior iOS Developer",
        period: "2018 - 2020",
        description: "Started iOS development journey, learned best practices and modern frameworks.",
        achievements: &["Completed iOS bootcamp", "Contributed to 6+ client projects", "Mastered Swift and UIKit"],
        logo: "📱",
    },
];

pub const EXPERIENCE_STATS: &[Stat] = &[
    Stat { value: "8+", label: "Years of Experience" },
    Stat { value: "20+", label: "Apps Shipped" },
    Stat { value: "500K+", label: "Total Downloads" },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { label: "Email", href: "mailto:hello@example.com", icon: "✉", accent: "accent-red" },
    SocialLink { label: "LinkedIn", href: "https://linkedin.com", icon: "in", accent: "accent-blue" },
    SocialLink { label: "GitHub", href: "https://github.com", icon: "⌥", accent: "accent-gray" },
    SocialLink { label: "Portfolio", href: "https://example.com", icon: "↗", accent: "accent-purple" },
];

/// Look up a project by id.
#[must_use]
pub fn project(id: u32) -> Option<&'static Project> {
    PROJECTS.iter().find(|project| project.id == id)
}
