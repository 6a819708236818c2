//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Text assets are loaded at compile time using `include_str!`.

// =============================================================================
// Text Assets (loaded at compile time)
// =============================================================================

/// ASCII banner displayed after boot sequence.
pub const ASCII_BANNER: &str = include_str!("../assets/text/banner.txt");

/// Full command reference for `help`.
pub const HELP_TEXT: &str = include_str!("../assets/text/help.txt");

/// Easter egg text for `matrix`.
pub const MATRIX_TEXT: &str = include_str!("../assets/text/matrix.txt");

// =============================================================================
// Application Metadata
// =============================================================================

/// Operating system name shown in boot messages and generated files.
pub const APP_NAME: &str = "OBUMBRAVIT_OS";

/// Application version.
pub const APP_VERSION: &str = "2.1.0";

/// Terminal name used in footers of generated files.
pub const TERMINAL_NAME: &str = "OBUMBRAVIT_TERMINAL";

/// Host name displayed in the prompt.
pub const HOST_NAME: &str = "obumbravit.dev";

/// User tagline displayed after boot.
pub const APP_TAGLINE: &str = "Full-Stack Developer & iOS Specialist";

// =============================================================================
// Filesystem Configuration
// =============================================================================

/// Login name; also used as owner and group in `ls -l`.
pub const USER_NAME: &str = "obumbravit";

/// Home directory, the target of `~` and of `cd` without arguments.
pub const HOME_PATH: &str = "/home/obumbravit";

/// Directory holding one subdirectory per repository.
pub const PROJECTS_PATH: &str = "/home/obumbravit/projects";

/// Name of the projects directory inside home.
pub const PROJECTS_DIR: &str = "projects";

// =============================================================================
// Profile Data
// =============================================================================

/// Static profile data used by the content generators.
pub mod profile {
    pub const NAME: &str = "OBUMBRAVIT";
    pub const TITLE: &str = "Full-stack developer";
    pub const EXPERIENCE: &str = "6+ Years";
    pub const CURRENT_ROLE: &str = "Employed Full-Stack Developer";
    pub const AVAILABILITY: &str = "Limited (Currently employed)";
    pub const EMAIL: &str = "hello@obumbravit.com";
    pub const GITHUB: &str = "github.com/obumbravit";
    pub const LINKEDIN: &str = "linkedin.com/in/obumbravit";
    pub const TWITTER: &str = "@obumbravit";

    /// Professional services, in display order.
    pub const SERVICES: &[&str] = &[
        "iOS Development (Swift/SwiftUI)",
        "Full-Stack Web Development",
        "Desktop Application Development",
        "Modern UI/UX Design",
        "API Development & Integration",
    ];

    /// Technology stack as (category, technologies).
    pub const TECH_STACK: &[(&str, &str)] = &[
        ("iOS", "Swift, SwiftUI, Objective-C, UIKit"),
        ("Web", "React, Next.js, TypeScript, JavaScript, HTML5, CSS3"),
        ("Desktop", "Various frameworks and languages"),
        ("Databases", "PostgreSQL, MongoDB, SQLite"),
        ("Tools", "Git, Docker, Xcode, VS Code"),
    ];

    /// Core competencies as (area, summary).
    pub const COMPETENCIES: &[(&str, &str)] = &[
        ("iOS Development", "Native iOS apps with Swift/SwiftUI"),
        ("Full-Stack Web Development", "End-to-end web applications"),
        ("Desktop Development", "Cross-platform desktop applications"),
        ("UI/UX Design", "Modern, intuitive user interfaces"),
        ("API Development", "RESTful and GraphQL APIs"),
        ("Database Design", "Relational and NoSQL databases"),
        ("Performance Optimization", "Fast, efficient applications"),
        ("System Architecture", "Scalable, maintainable systems"),
    ];
}

// =============================================================================
// Network Configuration
// =============================================================================

/// GitHub account whose public repositories populate `~/projects`.
pub const GITHUB_USER: &str = "Obumbravit";

/// GitHub REST API base URL.
pub const GITHUB_API_URL: &str = "https://api.github.com";

/// GitHub web base URL (profile scraping fallback).
pub const GITHUB_WEB_URL: &str = "https://github.com";

/// Raw content base URL.
pub const GITHUB_RAW_URL: &str = "https://raw.githubusercontent.com";

/// Branches tried, in order, for raw content.
pub const RAW_BRANCHES: &[&str] = &["main", "master"];

/// Page size for the repository listing request.
pub const REPOS_PER_PAGE: usize = 100;

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: u32 = 10_000;

// =============================================================================
// Terminal Configuration
// =============================================================================

/// Maximum number of terminal output lines to keep in scrollback.
pub const MAX_TERMINAL_HISTORY: usize = 1000;

/// Maximum number of command history entries to keep.
pub const MAX_COMMAND_HISTORY: usize = 500;

/// Width of the right-justified line number column of `cat -n`.
pub const LINE_NUMBER_WIDTH: usize = 6;

// =============================================================================
// Logging
// =============================================================================

/// Maximum level forwarded to the browser console.
pub const LOG_LEVEL: tracing::Level = tracing::Level::INFO;

// =============================================================================
// Boot Sequence Configuration
// =============================================================================

/// Boot sequence animation delay constants (milliseconds).
pub mod boot_delays {
    /// Delay after kernel init message.
    pub const KERNEL_INIT: u32 = 120;
    /// Delay between subsystem messages.
    pub const SUBSYSTEM: u32 = 50;
    /// Delay after boot complete message.
    pub const BOOT_COMPLETE: u32 = 150;
}

/// Subsystem messages printed during boot, in order.
pub const BOOT_MESSAGES: &[&str] = &[
    "Loading kernel modules...",
    "Initializing virtual filesystem...",
    "Starting network services...",
    "Mounting /home/obumbravit...",
    "Loading developer profile...",
];

// =============================================================================
// Time Constants
// =============================================================================

/// Milliseconds per second for time formatting.
pub const MS_PER_SECOND: f64 = 1000.0;

// =============================================================================
// Cache Configuration
// =============================================================================

/// Session cache configuration.
pub mod cache {
    /// sessionStorage key for the repository listing.
    pub const REPOS_KEY: &str = "github_repos";
}
