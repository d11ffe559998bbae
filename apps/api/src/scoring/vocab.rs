//! Fixed vocabularies for keyword extraction and bullet analysis. Immutable
//! statics, initialized once at process start.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

/// Words carrying no signal in a job description: auxiliaries, prepositions,
/// and recruiting boilerplate.
pub const STOP_WORDS: &[&str] = &[
    "we", "are", "is", "am", "was", "were", "been", "be", "being", "have", "has", "had", "do",
    "does", "did", "will", "would", "could", "should", "may", "might", "must", "can", "the", "a",
    "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "from", "as",
    "into", "through", "during", "before", "after", "above", "below", "up", "down", "out", "off",
    "over", "under", "again", "further", "then", "once", "here", "there", "when", "where", "why",
    "how", "all", "both", "each", "few", "more", "most", "other", "some", "such", "no", "nor",
    "not", "only", "own", "same", "so", "than", "too", "very", "this", "that", "these", "those",
    "who", "which", "what", "our", "your", "their", "seeking", "looking", "join", "team",
    "company", "role", "position", "opportunity", "candidate", "ideal", "perfect", "great",
    "good", "excellent", "strong", "solid", "proven", "work", "working", "able", "using", "use",
    "used", "growing", "dynamic", "fast", "paced", "innovative", "exciting",
];

/// Single-token technology and role terms recognized in job descriptions.
pub const KNOWN_TECH: &[&str] = &[
    "react", "angular", "vue", "svelte", "next", "nuxt", "node", "express", "django", "flask",
    "spring", "laravel", "typescript", "javascript", "python", "java", "ruby", "php", "go",
    "rust", "swift", "kotlin", "html", "css", "sass", "scss", "tailwind", "bootstrap", "sql",
    "mysql", "postgresql", "mongodb", "redis", "elasticsearch", "docker", "kubernetes",
    "jenkins", "gitlab", "github", "git", "aws", "azure", "gcp", "cloud", "api", "rest",
    "graphql", "grpc", "agile", "scrum", "kanban", "devops", "testing", "jest", "cypress",
    "selenium", "mocha", "webpack", "babel", "vite", "rollup", "redux", "mobx", "zustand",
    "recoil", "microservices", "serverless", "lambda", "linux", "unix", "bash", "shell", "ci",
    "cd", "pipeline", "deployment", "frontend", "backend", "fullstack", "design",
    "architecture", "patterns", "performance", "optimization", "scalability", "security",
    "authentication", "authorization", "developer", "engineer", "programmer", "architect",
    "lead", "senior",
];

/// Verbs that open a results-oriented experience bullet.
pub const ACTION_VERBS: &[&str] = &[
    "achieved", "improved", "increased", "decreased", "developed", "created", "built",
    "designed", "implemented", "led", "managed", "coordinated", "optimized", "streamlined",
    "established", "launched", "delivered", "reduced", "enhanced", "transformed", "generated",
    "accelerated",
];

lazy_static! {
    pub static ref STOP_WORD_SET: HashSet<&'static str> = STOP_WORDS.iter().copied().collect();
    pub static ref KNOWN_TECH_SET: HashSet<&'static str> = KNOWN_TECH.iter().copied().collect();

    /// Multi-word technical terms matched against the raw-cased description.
    /// Group 1 carries the term. Terms ending in `+`/`#` get spelled-out
    /// boundaries since `\b` cannot follow a non-word character.
    pub static ref MULTI_WORD_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(?i)\b(react\.?js|angular\.?js|vue\.?js|next\.?js|node\.?js|express\.?js)\b")
            .unwrap(),
        Regex::new(r"(?i)\b(full[- ]stack|front[- ]end|back[- ]end|micro[- ]frontend)\b").unwrap(),
        Regex::new(r"(?i)\b(machine learning|artificial intelligence|data science|cloud computing)\b")
            .unwrap(),
        Regex::new(r"(?i)\b(ci/cd|rest api|graphql|nosql|postgresql|mongodb)\b").unwrap(),
        Regex::new(r"(?i)\b(aws|azure|gcp|google cloud|cloud platform)\b").unwrap(),
        Regex::new(r"(?i)\b(type[- ]?script|java[- ]?script)\b").unwrap(),
        Regex::new(r"(?i)(?:^|[^\w+])(c\+\+|c#)(?:[^\w+#]|$)").unwrap(),
    ];

    /// One bullet may open with any recognized action verb.
    pub static ref ACTION_VERB_PATTERN: Regex = {
        let alternation = ACTION_VERBS.join("|");
        Regex::new(&format!(r"(?i)\b({alternation})\b")).unwrap()
    };

    /// Percentages, dollar amounts, comma-grouped numbers, "N+" counts, and
    /// "N <unit>" phrases.
    pub static ref METRIC_PATTERN: Regex = Regex::new(
        r"\d+%|\d+\+|\$\d+|\d+,\d+|\d+ (hours|days|weeks|months|users|customers|clients)"
    )
    .unwrap();
}
