//! Keyword-driven implementation plan heuristics
//!
//! Each field of the plan is produced by its own decision table scanned
//! against the lower-cased task description. The tables are independent:
//! one rule firing never suppresses another.

use serde::Serialize;

/// Estimated task complexity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Complexity::Low => write!(f, "low"),
            Complexity::Medium => write!(f, "medium"),
            Complexity::High => write!(f, "high"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanStep {
    pub step: usize,
    pub action: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImplementationPlan {
    pub task: String,
    pub estimated_complexity: Complexity,
    pub suggested_approach: Vec<String>,
    /// Relevant files exactly as supplied by the caller
    pub files_to_modify: Vec<String>,
    pub steps: Vec<PlanStep>,
    pub potential_issues: Vec<String>,
    pub testing_strategy: Vec<String>,
}

/// Appends `sentence` when any keyword is a substring of the task
struct KeywordRule {
    keywords: &'static [&'static str],
    sentence: &'static str,
}

impl KeywordRule {
    fn fires(&self, task: &str) -> bool {
        self.keywords.iter().any(|k| task.contains(k))
    }
}

// ── Decision tables ──────────────────────────────────────────────

/// Checked in order; first tier with a match wins
const COMPLEXITY_TIERS: &[(Complexity, &[&str])] = &[
    (
        Complexity::High,
        &["refactor", "architecture", "migration", "integration", "database", "authentication"],
    ),
    (
        Complexity::Medium,
        &["feature", "component", "service", "api", "optimization"],
    ),
    (Complexity::Low, &["fix", "update", "modify", "style", "text"]),
];

const DEFAULT_COMPLEXITY: Complexity = Complexity::Medium;

const APPROACH_RULES: &[KeywordRule] = &[
    KeywordRule {
        keywords: &["ui", "interface"],
        sentence: "Focus on UI/UX components and user interaction",
    },
    KeywordRule {
        keywords: &["api", "backend"],
        sentence: "Design API endpoints and data flow",
    },
    KeywordRule {
        keywords: &["database", "data"],
        sentence: "Plan data models and storage strategy",
    },
    KeywordRule {
        keywords: &["test"],
        sentence: "Implement comprehensive testing strategy",
    },
];

const FALLBACK_APPROACH: &str = "Break down into smaller, manageable components";

const RISK_RULES: &[KeywordRule] = &[
    KeywordRule {
        keywords: &["integration"],
        sentence: "API compatibility and version conflicts",
    },
    KeywordRule {
        keywords: &["performance"],
        sentence: "Memory usage and execution time optimization",
    },
    KeywordRule {
        keywords: &["ui"],
        sentence: "Cross-platform compatibility and responsive design",
    },
    KeywordRule {
        keywords: &["database"],
        sentence: "Data migration and backup strategies",
    },
];

const BASELINE_RISK: &str = "Code maintainability and future extensibility";

const FIRST_TEST_STRATEGY: &str = "Unit tests for core functionality";

const TEST_RULES: &[KeywordRule] = &[
    KeywordRule {
        keywords: &["ui"],
        sentence: "Widget tests for UI components",
    },
    KeywordRule {
        keywords: &["api"],
        sentence: "Integration tests for API endpoints",
    },
    KeywordRule {
        keywords: &["database"],
        sentence: "Database transaction tests",
    },
];

const LAST_TEST_STRATEGY: &str = "End-to-end testing for complete workflows";

const CANONICAL_STEPS: &[(&str, &str)] = &[
    (
        "Analyze requirements and existing code",
        "Understand the current state and requirements",
    ),
    (
        "Design solution architecture",
        "Plan the technical approach and structure",
    ),
    (
        "Implement core functionality",
        "Build the main features and logic",
    ),
    (
        "Add error handling and validation",
        "Ensure robustness and user experience",
    ),
    (
        "Test and verify implementation",
        "Validate functionality and fix issues",
    ),
    (
        "Document and optimize",
        "Add documentation and performance optimizations",
    ),
];

// ── Heuristics ───────────────────────────────────────────────────

pub fn estimate_complexity(task: &str) -> Complexity {
    let task = task.to_lowercase();
    COMPLEXITY_TIERS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| task.contains(k)))
        .map_or(DEFAULT_COMPLEXITY, |(tier, _)| *tier)
}

pub fn suggest_approach(task: &str) -> Vec<String> {
    let task = task.to_lowercase();
    let approaches = fired(APPROACH_RULES, &task);
    if approaches.is_empty() {
        vec![FALLBACK_APPROACH.to_string()]
    } else {
        approaches
    }
}

/// The canonical six steps; task content does not change them
pub fn generate_steps(_task: &str) -> Vec<PlanStep> {
    CANONICAL_STEPS
        .iter()
        .enumerate()
        .map(|(i, (action, description))| PlanStep {
            step: i + 1,
            action: action.to_string(),
            description: description.to_string(),
        })
        .collect()
}

pub fn identify_potential_issues(task: &str) -> Vec<String> {
    let task = task.to_lowercase();
    let mut issues = fired(RISK_RULES, &task);
    issues.push(BASELINE_RISK.to_string());
    issues
}

pub fn suggest_testing_strategy(task: &str) -> Vec<String> {
    let task = task.to_lowercase();
    let mut strategies = vec![FIRST_TEST_STRATEGY.to_string()];
    strategies.extend(fired(TEST_RULES, &task));
    strategies.push(LAST_TEST_STRATEGY.to_string());
    strategies
}

fn fired(rules: &[KeywordRule], task: &str) -> Vec<String> {
    rules
        .iter()
        .filter(|rule| rule.fires(task))
        .map(|rule| rule.sentence.to_string())
        .collect()
}

/// Build the full plan for a task description
pub fn generate_plan(task: &str, relevant_files: &[String]) -> ImplementationPlan {
    ImplementationPlan {
        task: task.to_string(),
        estimated_complexity: estimate_complexity(task),
        suggested_approach: suggest_approach(task),
        files_to_modify: relevant_files.to_vec(),
        steps: generate_steps(task),
        potential_issues: identify_potential_issues(task),
        testing_strategy: suggest_testing_strategy(task),
    }
}
