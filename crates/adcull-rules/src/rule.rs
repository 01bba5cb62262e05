//! Rule category definitions.

/// Syntactic category of a normalized rule.
///
/// Assigned exactly once, at insertion time, and is a pure function of the
/// rule's normalized text. The variant order is the fixed serialization
/// order of the output artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Exception rule (`@@` prefix); overrides block rules.
    Allow,
    /// Regular-expression rule (`/.../`).
    Regex,
    /// Domain block rule (`||host^`).
    Domain,
    /// Hosts-file style mapping (`0.0.0.0 host` and friends).
    Hosts,
    /// Anything else.
    Other,
}

impl Category {
    /// All categories, in serialization order.
    pub const ALL: [Category; 5] = [
        Category::Allow,
        Category::Regex,
        Category::Domain,
        Category::Hosts,
        Category::Other,
    ];

    /// Stable index into per-category arrays.
    pub(crate) fn index(self) -> usize {
        match self {
            Category::Allow => 0,
            Category::Regex => 1,
            Category::Domain => 2,
            Category::Hosts => 3,
            Category::Other => 4,
        }
    }

    /// Section name used in artifact separators.
    pub fn section_name(self) -> &'static str {
        match self {
            Category::Allow => "ALLOW",
            Category::Regex => "REGEX",
            Category::Domain => "DOMAIN",
            Category::Hosts => "HOSTS",
            Category::Other => "OTHER",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.section_name())
    }
}

/// Classify a normalized rule into exactly one category.
///
/// The checks run in a fixed precedence order, so every rule matches exactly
/// one arm and the result never changes for a given rule text.
pub fn categorize(rule: &str) -> Category {
    if rule.starts_with("@@") {
        return Category::Allow;
    }
    if rule.len() >= 2 && rule.starts_with('/') && rule.ends_with('/') {
        return Category::Regex;
    }
    if rule.starts_with("||") && rule.ends_with('^') {
        return Category::Domain;
    }
    if rule.starts_with("0.0.0.0 ")
        || rule.starts_with("127.0.0.1 ")
        || rule.starts_with("::1 ")
    {
        return Category::Hosts;
    }
    Category::Other
}
