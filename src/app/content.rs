//! Static site content. Everything here is author-supplied and immutable;
//! the components just render it.

use crate::sequencer::ScriptBlock;

const TERMINAL_PROMPT: &str = "~/portfolio";

/// The fixed script the hero terminal replays.
pub fn hero_script_blocks() -> Vec<ScriptBlock> {
    vec![
        ScriptBlock::new(
            TERMINAL_PROMPT,
            "whoami",
            ["Chetan Jadhav", "Full Stack | Cybersecurity | ML", "India"],
        ),
        ScriptBlock::new(
            TERMINAL_PROMPT,
            "cat edu.md",
            ["B.E. Comp Eng — 3rd Year", "OPEN TO INTERNSHIPS"],
        ),
        ScriptBlock::new(
            TERMINAL_PROMPT,
            "./tech-stack.sh",
            [
                "🛠 Languages: Java, Python, JS, C++",
                "🛠 Web: React, Node, Express, Tailwind",
                "🛠 Mobile/ML: Android, Firebase, TF, OpenCV",
                "🛠 Sec/DB: OWASP, Nmap, MongoDB, MySQL",
            ],
        ),
        ScriptBlock::new(
            TERMINAL_PROMPT,
            "ls expertise/",
            [
                "🚀 App Security",
                "🚀 Anomaly Systems",
                "🚀 API Architecture",
                "🚀 UI/UX Design",
            ],
        ),
    ]
}

pub const ROLES: &[&str] = &[
    "App Developer",
    "Cyber Security",
    "UI/UX Designer",
    "ML Engineer",
    "Full-Stack Dev",
];

pub struct SkillGroup {
    pub name: &'static str,
    pub icon: &'static str,
    pub skills: &'static [&'static str],
}

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        name: "App Development",
        icon: "📱",
        skills: &[
            "Android (Kotlin)",
            "Flutter",
            "React Native",
            "Firebase",
            "REST APIs",
        ],
    },
    SkillGroup {
        name: "Cyber Security",
        icon: "🔒",
        skills: &[
            "Network Security",
            "OWASP Top 10",
            "Penetration Testing",
            "Cryptography",
            "Web Security",
        ],
    },
    SkillGroup {
        name: "UI/UX Design",
        icon: "🎨",
        skills: &[
            "Figma",
            "Design Systems",
            "Prototyping",
            "User Research",
            "Responsive Design",
        ],
    },
    SkillGroup {
        name: "Machine Learning",
        icon: "🤖",
        skills: &[
            "Python",
            "TensorFlow",
            "Data Analysis",
            "ML Models",
            "Data Visualization",
        ],
    },
];

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "SecureChat App",
        description: "End-to-end encrypted messaging app with real-time database",
        tech: &["Kotlin", "Firebase", "Encryption", "Android"],
    },
    Project {
        title: "ML Image Classifier",
        description: "Deep learning model for medical image classification",
        tech: &["Python", "TensorFlow", "OpenCV", "Data Science"],
    },
    Project {
        title: "Design System UI Kit",
        description: "Comprehensive UI component library with design tokens",
        tech: &["Figma", "React", "Storybook", "Design Systems"],
    },
    Project {
        title: "Network Analyzer Tool",
        description: "Network packet analysis and security assessment tool",
        tech: &["Python", "Scapy", "Security", "CLI"],
    },
    Project {
        title: "Cross-Platform Todo App",
        description: "Full-featured todo application with cloud sync",
        tech: &["Flutter", "Firebase", "Provider", "iOS/Android"],
    },
    Project {
        title: "Cyber Threat Dashboard",
        description: "Real-time security monitoring and threat visualization",
        tech: &["React", "Node.js", "D3.js", "Cyber Security"],
    },
];

pub struct TimelineEntry {
    pub years: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub org: &'static str,
    pub description: &'static str,
    pub milestones: &'static [&'static str],
}

pub const TIMELINE: &[TimelineEntry] = &[
    TimelineEntry {
        years: "2024 – Present",
        icon: "🚀",
        title: "Full-Stack Development",
        org: "Self-Directed / Freelance",
        description: "Building production-ready applications across Android, Web, and ML domains.",
        milestones: &[
            "Shipped 15+ projects",
            "Open-source contributions",
            "Hackathon victories",
        ],
    },
    TimelineEntry {
        years: "2023 – 2024",
        icon: "🔐",
        title: "Cyber Security Deep Dive",
        org: "Independent Research",
        description: "Explored penetration testing, network security, and OWASP vulnerabilities.",
        milestones: &[
            "Bug bounty participation",
            "Security certifications",
            "CTF competitions",
        ],
    },
    TimelineEntry {
        years: "2022 – 2023",
        icon: "🎨",
        title: "UI/UX Design Focus",
        org: "Design Studio Internship",
        description: "Designed scalable design systems and developed design thinking frameworks.",
        milestones: &[
            "Design system architecture",
            "User research methodologies",
            "Figma expertise",
        ],
    },
    TimelineEntry {
        years: "2021 – 2022",
        icon: "🤖",
        title: "Machine Learning Intro",
        org: "Academic + Self-Learning",
        description: "Started with data analysis, progressed to building ML models and pipelines.",
        milestones: &[
            "TensorFlow proficiency",
            "Data visualization",
            "Model optimization",
        ],
    },
];

pub struct ContactLink {
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
}

pub const CONTACT_LINKS: &[ContactLink] = &[
    ContactLink {
        label: "Email",
        value: "chetan.jadhav@example.com",
        href: "mailto:chetan.jadhav@example.com",
    },
    ContactLink {
        label: "LinkedIn",
        value: "linkedin.com/in/chetanjadhav",
        href: "https://linkedin.com/in/chetanjadhav",
    },
    ContactLink {
        label: "GitHub",
        value: "github.com/chetanjadhav",
        href: "https://github.com/chetanjadhav",
    },
];
