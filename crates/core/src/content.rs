//! Static marketing copy rendered by the site's pages.

use serde::Serialize;

pub const SITE_NAME: &str = "LearnOne";

#[derive(Debug, Clone, Copy, Serialize)]
pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { name: "Home", href: "/" },
    NavLink { name: "About", href: "/about" },
    NavLink { name: "Courses", href: "/courses" },
    NavLink { name: "Contact", href: "/contact" },
];

/// Icon, title and body of a feature or value card
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Card {
    pub icon: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Step {
    pub step: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

const FEATURE_BODY: &str = "LearnOne brings students and tutors together for live, focused \
                            learning sessions designed around your goals.";

pub const HOME_FEATURES: &[Card] = &[
    Card { icon: "🎯", title: "Live Tutoring", body: FEATURE_BODY },
    Card { icon: "👩‍🏫", title: "Expert-Led Courses", body: FEATURE_BODY },
    Card { icon: "💼", title: "Career-Focused Skills", body: FEATURE_BODY },
    Card { icon: "📚", title: "Personalized Learning", body: FEATURE_BODY },
    Card { icon: "⏰", title: "Learn Anytime, Anywhere", body: FEATURE_BODY },
    Card { icon: "🌍", title: "Join a Global Community", body: FEATURE_BODY },
];

pub const HOW_IT_WORKS: &[Step] = &[
    Step {
        step: "1",
        title: "Sign Up",
        body: "Create your free account in seconds and set your learning goals.",
    },
    Step {
        step: "2",
        title: "Find a Tutor",
        body: "Browse qualified tutors and subjects that fit your needs.",
    },
    Step {
        step: "3",
        title: "Learn Live",
        body: "Join interactive sessions and track progress over time.",
    },
];

/// Stats preview shown to anonymous visitors in the hero
pub const HERO_STATS: &[Stat] = &[
    Stat { value: "10K+", label: "Students" },
    Stat { value: "500+", label: "Courses" },
    Stat { value: "95%", label: "Success" },
];

pub const ABOUT_STATS: &[Stat] = &[
    Stat { value: "10K+", label: "Students Served" },
    Stat { value: "500+", label: "Active Courses" },
    Stat { value: "50+", label: "Expert Instructors" },
    Stat { value: "95%", label: "Success Rate" },
];

pub const ABOUT_PILLARS: &[Card] = &[
    Card {
        icon: "👥",
        title: "Student-Focused",
        body: "Designed with learners in mind, from elementary to college level.",
    },
    Card {
        icon: "🎯",
        title: "Practical Learning",
        body: "Real-world projects and hands-on experience with industry tools.",
    },
    Card {
        icon: "🏅",
        title: "Expert Instructors",
        body: "Learn from experienced professionals and educators.",
    },
    Card {
        icon: "❤️",
        title: "Supportive Community",
        body: "Join a community of learners and mentors who care about your success.",
    },
];

pub const WHY_CHOOSE_US: &[Card] = &[
    Card {
        icon: "🎓",
        title: "Age-Appropriate Curriculum",
        body: "Courses are designed for different age groups, from elementary to college, \
               so content stays engaging and accessible.",
    },
    Card {
        icon: "🏆",
        title: "Project-Based Learning",
        body: "Every course culminates in a capstone project and a portfolio piece.",
    },
    Card {
        icon: "🚀",
        title: "Industry-Relevant Skills",
        body: "We teach the tools and technologies professionals use today.",
    },
    Card {
        icon: "👥",
        title: "Personalized Support",
        body: "Instructors and the community are ready to help along the way.",
    },
    Card {
        icon: "💡",
        title: "Flexible Learning",
        body: "Learn at your own pace, on your own schedule.",
    },
    Card {
        icon: "🌟",
        title: "Continuous Updates",
        body: "Courses evolve with technology and reflect current industry practice.",
    },
];

pub const CORE_VALUES: &[Card] = &[
    Card {
        icon: "🧠",
        title: "Accessibility",
        body: "Quality education should be accessible to everyone, regardless of background, \
               location, or financial situation.",
    },
    Card {
        icon: "🎯",
        title: "Excellence",
        body: "We hold our curriculum, instruction and student support to the highest standard.",
    },
    Card {
        icon: "🤝",
        title: "Community",
        body: "We connect students, instructors and alumni in a collaborative environment.",
    },
    Card {
        icon: "📈",
        title: "Growth",
        body: "We keep up with technology and improve our courses from student feedback.",
    },
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ContactInfo {
    pub email: &'static str,
    pub phones: &'static [&'static str],
    pub website: &'static str,
    pub response_time: &'static str,
}

pub const CONTACT_INFO: ContactInfo = ContactInfo {
    email: "elearningscenter@gmail.com",
    phones: &["+1 (720) 234-6452", "+977 9762119277"],
    website: "www.learningcenter.dev",
    response_time: "We typically respond to inquiries within 24 hours during business days. \
                    For urgent matters, please call us directly.",
};
