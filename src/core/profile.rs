//! Generated file contents for the profile pages of the filesystem.
//!
//! Everything here is a pure function of the repository listing and the
//! build time, so a reload regenerates the pages with fresh statistics.

use std::collections::HashMap;
use std::fmt::Write;

use crate::config::{APP_NAME, APP_VERSION, TERMINAL_NAME, profile};
use crate::models::Repository;
use crate::utils::format::{format_date_iso, parse_iso_timestamp};

/// Number of languages and repositories shown in rankings.
const TOP_N: usize = 5;

// =============================================================================
// Statistics
// =============================================================================

/// Share of repositories using one primary language.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LanguageShare {
    pub language: String,
    pub repos: usize,
    /// Rounded percentage of repositories with a known language.
    pub percent: usize,
}

/// Aggregates over the public repositories.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RepoStats {
    pub total_repos: usize,
    pub total_stars: u64,
    pub total_forks: u64,
    /// Repository with the most stars.
    pub most_popular: Option<String>,
    /// Languages by repository count, most used first.
    pub languages: Vec<LanguageShare>,
}

impl RepoStats {
    pub fn from_repos(repos: &[Repository]) -> Self {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for lang in repos.iter().filter_map(|r| r.language.as_deref()) {
            *counts.entry(lang).or_default() += 1;
        }
        let known: usize = counts.values().sum();

        let mut languages: Vec<LanguageShare> = counts
            .into_iter()
            .map(|(language, repos)| LanguageShare {
                language: language.to_string(),
                repos,
                percent: (repos * 100 + known / 2) / known.max(1),
            })
            .collect();
        languages.sort_by(|a, b| b.repos.cmp(&a.repos).then_with(|| a.language.cmp(&b.language)));

        let most_popular = repos
            .iter()
            .max_by(|a, b| {
                a.stargazers_count
                    .cmp(&b.stargazers_count)
                    .then_with(|| b.name.cmp(&a.name))
            })
            .map(|r| r.name.clone());

        Self {
            total_repos: repos.len(),
            total_stars: repos.iter().map(|r| r.stargazers_count).sum(),
            total_forks: repos.iter().map(|r| r.forks_count).sum(),
            most_popular,
            languages,
        }
    }

    fn top_language(&self) -> &str {
        self.languages
            .first()
            .map_or("Not available", |l| l.language.as_str())
    }

    fn most_popular(&self) -> &str {
        self.most_popular.as_deref().unwrap_or("Not available")
    }
}

// =============================================================================
// Shared Fragments
// =============================================================================

fn footer() -> String {
    format!("---\n*Generated by {}*\n", TERMINAL_NAME)
}

fn bullet_list(items: &[&str]) -> String {
    items.iter().map(|i| format!("- {}\n", i)).collect()
}

fn tech_stack() -> String {
    profile::TECH_STACK
        .iter()
        .map(|(category, techs)| format!("- **{}**: {}\n", category, techs))
        .collect()
}

fn repo_statistics(stats: &RepoStats) -> String {
    format!(
        "- **Total Repositories**: {}\n- **Total Stars**: {}\n- **Total Forks**: {}\n",
        stats.total_repos, stats.total_stars, stats.total_forks
    )
}

fn language_lines(stats: &RepoStats, indent: &str) -> String {
    if stats.languages.is_empty() {
        return format!("{}- Not available\n", indent);
    }
    stats
        .languages
        .iter()
        .take(TOP_N)
        .map(|l| {
            format!(
                "{}- {}: {}% ({} {})\n",
                indent,
                l.language,
                l.percent,
                l.repos,
                if l.repos == 1 { "repository" } else { "repositories" }
            )
        })
        .collect()
}

// =============================================================================
// Home Directory
// =============================================================================

/// `~/about.md`
pub fn about(repos: &[Repository]) -> String {
    let stats = RepoStats::from_repos(repos);
    format!(
        "# About {name}\n\
         \n\
         ## Who I Am\n\
         {title} with {experience} of experience. {role}.\n\
         \n\
         ## What I Do\n\
         I design and develop applications across platforms, from native iOS apps \
         to responsive web applications and desktop software.\n\
         \n\
         ## Current Focus\n\
         {services}\n\
         ## Technologies\n\
         {stack}\n\
         ## Repository Statistics\n\
         - **Total Repositories**: {repos}\n\
         - **Total Stars**: {stars}\n\
         - **Most Popular Language**: {language}\n\
         \n\
         {footer}",
        name = profile::NAME,
        title = profile::TITLE,
        experience = profile::EXPERIENCE,
        role = profile::CURRENT_ROLE,
        services = bullet_list(profile::SERVICES),
        stack = tech_stack(),
        repos = stats.total_repos,
        stars = stats.total_stars,
        language = stats.top_language(),
        footer = footer(),
    )
}

/// `~/resume.md`
pub fn resume(repos: &[Repository]) -> String {
    let stats = RepoStats::from_repos(repos);
    format!(
        "# {name} - Resume\n\
         \n\
         ## Professional Summary\n\
         {title} with {experience} of experience. {role}.\n\
         \n\
         ## Specializations\n\
         {services}\n\
         ## Core Technologies\n\
         {stack}\n\
         ## GitHub Statistics\n\
         {statistics}\n\
         ## Contact\n\
         - Email: {email}\n\
         - GitHub: {github}\n\
         - LinkedIn: {linkedin}\n\
         - Twitter: {twitter}\n\
         \n\
         {footer}",
        name = profile::NAME,
        title = profile::TITLE,
        experience = profile::EXPERIENCE,
        role = profile::CURRENT_ROLE,
        services = bullet_list(profile::SERVICES),
        stack = tech_stack(),
        statistics = repo_statistics(&stats),
        email = profile::EMAIL,
        github = profile::GITHUB,
        linkedin = profile::LINKEDIN,
        twitter = profile::TWITTER,
        footer = footer(),
    )
}

/// `~/contact.txt`
pub fn contact(now: u64) -> String {
    format!(
        "{name} CONTACT INFORMATION\n\
         =====================================\n\
         \n\
         Email: {email}\n\
         GitHub: {github}\n\
         LinkedIn: {linkedin}\n\
         Twitter: {twitter}\n\
         \n\
         Professional Services:\n\
         {services}\n\
         Experience: {experience} Professional Development\n\
         Current Status: {role}\n\
         Availability: {availability}\n\
         \n\
         Status: ONLINE\n\
         Last Updated: {date}\n",
        name = profile::NAME,
        email = profile::EMAIL,
        github = profile::GITHUB,
        linkedin = profile::LINKEDIN,
        twitter = profile::TWITTER,
        services = bullet_list(profile::SERVICES),
        experience = profile::EXPERIENCE,
        role = profile::CURRENT_ROLE,
        availability = profile::AVAILABILITY,
        date = format_date_iso(now),
    )
}

/// `~/skills.md`
pub fn skills(repos: &[Repository]) -> String {
    let stats = RepoStats::from_repos(repos);
    let competencies: String = profile::COMPETENCIES
        .iter()
        .map(|(area, summary)| format!("- **{}**: {}\n", area, summary))
        .collect();

    format!(
        "# Technical Skills\n\
         \n\
         ## Programming Languages (from GitHub)\n\
         {languages}\n\
         ## Core Competencies\n\
         {competencies}\n\
         ## Repository Statistics\n\
         {statistics}\
         - **Most Popular Repo**: {popular}\n\
         \n\
         ## Primary Technologies\n\
         {stack}\n\
         {footer}",
        languages = language_lines(&stats, ""),
        competencies = competencies,
        statistics = repo_statistics(&stats),
        popular = stats.most_popular(),
        stack = tech_stack(),
        footer = footer(),
    )
}

// =============================================================================
// System Files
// =============================================================================

/// `/etc/system-info`
pub fn system_info(repos: &[Repository], now: u64) -> String {
    let stats = RepoStats::from_repos(repos);

    let mut by_stars: Vec<&Repository> = repos.iter().collect();
    by_stars.sort_by(|a, b| b.stargazers_count.cmp(&a.stargazers_count));
    let mut top_repos = String::new();
    for repo in by_stars.iter().take(TOP_N) {
        let _ = writeln!(top_repos, "  - {} ({} stars)", repo.name, repo.stargazers_count);
    }
    if top_repos.is_empty() {
        top_repos.push_str("  - Not available\n");
    }

    format!(
        "{app} {version} System Information\n\
         ===============================================\n\
         \n\
         System Status: ONLINE\n\
         Professional Status: EMPLOYED\n\
         Development Stack: ACTIVE\n\
         \n\
         Repository Statistics (from GitHub):\n\
         - Total Public Repos: {repos}\n\
         - Total Stars: {stars}\n\
         - Total Forks: {forks}\n\
         - Most Popular Repo: {popular}\n\
         \n\
         Top Languages (by repository count):\n\
         {languages}\n\
         Top Repositories:\n\
         {top_repos}\n\
         Current Role: {title}\n\
         Last Analysis: {date}\n\
         \n\
         {footer}",
        app = APP_NAME,
        version = APP_VERSION,
        repos = stats.total_repos,
        stars = stats.total_stars,
        forks = stats.total_forks,
        popular = stats.most_popular(),
        languages = language_lines(&stats, "  "),
        top_repos = top_repos,
        title = profile::TITLE,
        date = format_date_iso(now),
        footer = footer(),
    )
}

/// `/etc/profile`
pub fn shell_profile() -> String {
    format!(
        "# {app} Profile Configuration\n\
         \n\
         export PATH=\"/usr/local/bin:$PATH\"\n\
         export EDITOR=\"code\"\n\
         export TERM=\"xterm-256color\"\n\
         export LANG=\"en_US.UTF-8\"\n\
         \n\
         # Navigation aliases\n\
         alias ll='ls -la'\n\
         alias la='ls -a'\n\
         alias ..='cd ..'\n\
         alias ...='cd ../..'\n\
         \n\
         # Git aliases\n\
         alias gs='git status'\n\
         alias gl='git log --oneline'\n\
         \n\
         # Welcome message\n\
         echo \"Welcome to {app} {version}\"\n\
         echo \"{title}\"\n\
         echo \"Type 'help' for available commands\"\n\
         \n\
         {footer}",
        app = APP_NAME,
        version = APP_VERSION,
        title = profile::TITLE,
        footer = footer(),
    )
}

fn log_file(title: &str, events: &[&str], now: u64) -> String {
    let date = format_date_iso(now);
    let mut body = format!("{}\n{}\n\n", title, "=".repeat(title.len()));
    for event in events {
        let _ = writeln!(body, "{} - {}", date, event);
    }
    body.push('\n');
    body.push_str(&footer());
    body
}

/// `/var/log/terminal.log`
pub fn terminal_log(now: u64) -> String {
    log_file(
        &format!("{} LOG", TERMINAL_NAME),
        &[
            "Terminal initialized",
            "Boot sequence completed",
            "File system mounted",
            "GitHub integration active",
            "System ready for commands",
        ],
        now,
    )
}

/// `/var/log/access.log`
pub fn access_log(now: u64) -> String {
    log_file(
        &format!("{} Access Log", APP_NAME),
        &[
            "Terminal session started",
            "Guest session opened",
            "File system mounted",
            "GitHub integration initialized",
            "System ready for user interaction",
        ],
        now,
    )
}

/// `/usr/local/bin/obumbravit`
pub fn executable() -> String {
    format!(
        "#!/bin/bash\n\
         # {terminal} Executable\n\
         # Version: {version}\n\
         \n\
         echo \"{terminal} {version}\"\n\
         echo \"{title}\"\n\
         echo \"\"\n\
         echo \"Available commands:\"\n\
         echo \"  ls, cd, cat, pwd, tree, clear, help, reload, exit\"\n\
         echo \"  matrix - Enter the matrix (easter egg)\"\n\
         echo \"\"\n\
         echo \"Type 'help' for detailed information\"\n",
        terminal = TERMINAL_NAME,
        version = APP_VERSION,
        title = profile::TITLE,
    )
}

// =============================================================================
// Repository Files
// =============================================================================

/// Generated `README.md` for a repository whose listing is unavailable.
pub fn readme(repo: &Repository) -> String {
    let mut info = format!(
        "- **Language**: {}\n- **Stars**: {}\n- **Forks**: {}\n",
        repo.language.as_deref().unwrap_or("Not specified"),
        repo.stargazers_count,
        repo.forks_count
    );
    if let Some(ts) = parse_iso_timestamp(&repo.updated_at) {
        let _ = writeln!(info, "- **Last Updated**: {}", format_date_iso(ts));
    }
    let topics = if repo.topics.is_empty() {
        "None".to_string()
    } else {
        repo.topics.join(", ")
    };
    let _ = writeln!(info, "- **Topics**: {}", topics);
    if repo.fork {
        info.push_str("- **Type**: Forked Repository\n");
    }

    let mut links = format!("- **GitHub**: {}\n", repo.html_url);
    if let Some(homepage) = repo.homepage.as_deref().filter(|h| !h.is_empty()) {
        let _ = writeln!(links, "- **Homepage**: {}", homepage);
    }

    format!(
        "# {name}\n\n{description}\n\n## Repository Information\n{info}\n## Links\n{links}\n{footer}",
        name = repo.name,
        description = repo
            .description
            .as_deref()
            .unwrap_or("No description available."),
        info = info,
        links = links,
        footer = footer(),
    )
}

/// Generated `package.json` summarizing a repository.
pub fn package_json(repo: &Repository) -> String {
    let value = serde_json::json!({
        "name": repo.name,
        "description": repo.description.as_deref().unwrap_or("No description available."),
        "version": "1.0.0",
        "language": repo.language.as_deref().unwrap_or("Not specified"),
        "repository": {
            "type": "git",
            "url": repo.html_url,
        },
        "stats": {
            "stars": repo.stargazers_count,
            "forks": repo.forks_count,
            "lastUpdated": repo.updated_at,
        },
        "topics": repo.topics,
    });
    serde_json::to_string_pretty(&value).unwrap_or_default()
}

/// `projects/README.md` of the tree built without network access.
pub fn projects_placeholder() -> String {
    format!(
        "# Projects\n\
         \n\
         Repository listings are being fetched from GitHub.\n\
         Run `reload` to try again if they do not appear.\n\
         \n\
         {footer}",
        footer = footer(),
    )
}
