//! Makefile building blocks.

/// A single Make rule: `target: deps` followed by a tab-indented recipe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildRule {
    pub target: String,
    pub dependencies: Vec<String>,
    /// Recipe lines, printed one per line behind a tab.
    pub recipe: Vec<String>,
    /// Printed as `## {comment}` above the rule.
    pub comment: Option<String>,
}

impl BuildRule {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            dependencies: Vec::new(),
            recipe: Vec::new(),
            comment: None,
        }
    }

    #[must_use]
    pub fn with_dependencies<I, S>(mut self, dependencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependencies = dependencies.into_iter().map(Into::into).collect();
        self
    }

    /// Set the recipe from a possibly multi-line script.
    #[must_use]
    pub fn with_recipe(mut self, script: &str) -> Self {
        self.recipe = script.split('\n').map(str::to_string).collect();
        self
    }

    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// One element of a generated Makefile, in output order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MakefileEntry {
    /// A raw line, printed verbatim.
    Line(String),
    Blank,
    Rule(BuildRule),
}

/// An ordered Makefile document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Makefile {
    pub entries: Vec<MakefileEntry>,
}

impl Makefile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(&mut self, line: impl Into<String>) {
        self.entries.push(MakefileEntry::Line(line.into()));
    }

    pub fn blank(&mut self) {
        self.entries.push(MakefileEntry::Blank);
    }

    pub fn rule(&mut self, rule: BuildRule) {
        self.entries.push(MakefileEntry::Rule(rule));
    }

    pub fn extend(&mut self, other: Makefile) {
        self.entries.extend(other.entries);
    }

    pub fn rules(&self) -> impl Iterator<Item = &BuildRule> {
        self.entries.iter().filter_map(|entry| match entry {
            MakefileEntry::Rule(rule) => Some(rule),
            _ => None,
        })
    }

    /// Look up a rule by its exact target name.
    pub fn find_rule(&self, target: &str) -> Option<&BuildRule> {
        self.rules().find(|rule| rule.target == target)
    }
}
