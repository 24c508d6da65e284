//! Path categorization
//!
//! Buckets each extracted path into one of six fixed categories using an
//! ordered decision list. Order matters: `/opt/rocm/lib/llama-server` is a
//! ROCm library, not a server file, because the ROCm rules are checked first.

use std::collections::BTreeMap;
use std::fmt;

/// Category a trace path is assigned to
///
/// Variants are declared in report order; `Ord` follows that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Category {
    RocmLib,
    RocmShare,
    RocmOther,
    TargetServer,
    SystemLib,
    Other,
}

impl Category {
    /// All categories in report order
    pub const ALL: [Category; 6] = [
        Category::RocmLib,
        Category::RocmShare,
        Category::RocmOther,
        Category::TargetServer,
        Category::SystemLib,
        Category::Other,
    ];

    /// Human-readable section label
    pub fn label(self) -> &'static str {
        match self {
            Category::RocmLib => "ROCM LIB",
            Category::RocmShare => "ROCM SHARE",
            Category::RocmOther => "ROCM OTHER",
            Category::TargetServer => "LLAMA SERVER",
            Category::SystemLib => "SYSTEM LIB",
            Category::Other => "OTHER",
        }
    }

    /// Machine-readable key used by JSON and CSV output
    pub fn key(self) -> &'static str {
        match self {
            Category::RocmLib => "rocm_lib",
            Category::RocmShare => "rocm_share",
            Category::RocmOther => "rocm_other",
            Category::TargetServer => "llama_server",
            Category::SystemLib => "system_lib",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single string test applied to a path
#[derive(Debug, Clone, Copy)]
enum Matcher {
    Contains(&'static str),
    StartsWith(&'static str),
}

impl Matcher {
    fn matches(self, path: &str) -> bool {
        match self {
            Matcher::Contains(needle) => path.contains(needle),
            Matcher::StartsWith(prefix) => path.starts_with(prefix),
        }
    }
}

/// A rule fires when any of its matchers hits
struct Rule {
    any_of: &'static [Matcher],
    category: Category,
}

/// Decision list, evaluated top to bottom; paths matching nothing are `Other`
const RULES: [Rule; 5] = [
    Rule {
        any_of: &[Matcher::Contains("/opt/rocm/lib")],
        category: Category::RocmLib,
    },
    Rule {
        any_of: &[Matcher::Contains("/opt/rocm/share")],
        category: Category::RocmShare,
    },
    Rule {
        any_of: &[Matcher::Contains("/opt/rocm")],
        category: Category::RocmOther,
    },
    Rule {
        any_of: &[
            Matcher::Contains("llama-server"),
            Matcher::Contains("/llama.cpp/"),
        ],
        category: Category::TargetServer,
    },
    Rule {
        any_of: &[Matcher::StartsWith("/lib"), Matcher::StartsWith("/usr/lib")],
        category: Category::SystemLib,
    },
];

/// Assign a single path to its category (first matching rule wins)
pub fn classify(path: &str) -> Category {
    RULES
        .iter()
        .find(|rule| rule.any_of.iter().any(|m| m.matches(path)))
        .map_or(Category::Other, |rule| rule.category)
}

/// Paths grouped by category, each group in input order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorizedReport {
    groups: BTreeMap<Category, Vec<String>>,
}

impl CategorizedReport {
    /// Members of a category (empty if none)
    pub fn get(&self, category: Category) -> &[String] {
        self.groups
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Non-empty categories with their members, in report order
    pub fn sections(&self) -> impl Iterator<Item = (Category, &[String])> + '_ {
        self.groups
            .iter()
            .filter(|(_, paths)| !paths.is_empty())
            .map(|(category, paths)| (*category, paths.as_slice()))
    }

    /// Total number of categorized paths
    pub fn total(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Partition paths into categories, preserving their relative order
pub fn categorize<S: AsRef<str>>(paths: &[S]) -> CategorizedReport {
    let mut groups: BTreeMap<Category, Vec<String>> = BTreeMap::new();
    for path in paths {
        let path = path.as_ref();
        groups
            .entry(classify(path))
            .or_default()
            .push(path.to_string());
    }
    CategorizedReport { groups }
}
