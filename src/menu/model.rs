//! In-memory menu tree
//!
//! A [`MenuSet`] is an immutable, non-empty list of [`MenuEntry`] values.
//! Every entry is exactly one of a group of children, a command to launch,
//! or a dynamic entry whose children are built on demand by a provider.

use std::path::Path;
use std::rc::Rc;

use crate::error::{Result, TimedialError};

/// Text shown in the description panel for an entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Description {
    Line(String),
    Lines(Vec<String>),
}

impl Description {
    /// The description as a slice of paragraphs
    pub fn paragraphs(&self) -> &[String] {
        match self {
            Description::Line(line) => std::slice::from_ref(line),
            Description::Lines(lines) => lines,
        }
    }
}

impl From<&str> for Description {
    fn from(value: &str) -> Self {
        Description::Line(value.to_string())
    }
}

impl From<String> for Description {
    fn from(value: String) -> Self {
        Description::Line(value)
    }
}

impl From<Vec<String>> for Description {
    fn from(value: Vec<String>) -> Self {
        Description::Lines(value)
    }
}

/// An external program launched by a leaf entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    argv: Vec<String>,
    /// Organization or person that released the program
    pub publisher: Option<String>,
    /// Version identifier
    pub version: Option<String>,
    /// Release date of this version
    pub version_date: Option<String>,
    /// Year or date the program first appeared
    pub original_date: Option<String>,
}

/// Check the argument vector of a command.
///
/// It must be non-empty, contain no blank arguments and start with an
/// absolute path.
pub fn check_exec(argv: &[String]) -> std::result::Result<(), &'static str> {
    let Some(program) = argv.first() else {
        return Err("exec must contain at least one command");
    };
    if argv.iter().any(|arg| arg.trim().is_empty()) {
        return Err("exec cannot contain empty strings");
    }
    if !Path::new(program).is_absolute() {
        return Err("the first exec value must be an absolute path");
    }
    Ok(())
}

impl Command {
    /// Create a command after validating its argument vector
    pub fn new<I, S>(argv: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let argv: Vec<String> = argv.into_iter().map(Into::into).collect();
        check_exec(&argv).map_err(|reason| {
            TimedialError::invalid(argv.first().cloned().unwrap_or_default(), reason)
        })?;
        Ok(Self {
            argv,
            publisher: None,
            version: None,
            version_date: None,
            original_date: None,
        })
    }

    pub fn with_publisher(mut self, publisher: impl Into<String>) -> Self {
        self.publisher = Some(publisher.into());
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn with_version_date(mut self, date: impl Into<String>) -> Self {
        self.version_date = Some(date.into());
        self
    }

    pub fn with_original_date(mut self, date: impl Into<String>) -> Self {
        self.original_date = Some(date.into());
        self
    }

    /// Full argument vector, program first
    pub fn argv(&self) -> &[String] {
        &self.argv
    }

    /// Absolute path of the program
    pub fn program(&self) -> &str {
        &self.argv[0]
    }

    /// Publisher/version/date lines appended to the description
    pub fn metadata_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(publisher) = self.publisher.as_deref().filter(|s| !s.is_empty()) {
            lines.push(format!("Original publisher: {}", publisher));
        }
        match (
            self.version.as_deref().filter(|s| !s.is_empty()),
            self.version_date.as_deref().filter(|s| !s.is_empty()),
        ) {
            (Some(version), Some(date)) => lines.push(format!("Version: {} ({})", version, date)),
            (Some(version), None) => lines.push(format!("Version: {}", version)),
            _ => {}
        }
        if let Some(date) = self.original_date.as_deref().filter(|s| !s.is_empty()) {
            lines.push(format!("First release: {}", date));
        }
        lines
    }
}

/// What selecting an entry does
#[derive(Debug, Clone)]
pub enum EntryKind {
    /// Descend into child entries
    Group(MenuSet),
    /// Launch an external program
    Command(Command),
    /// Descend into a menu built by the named provider
    Dynamic(String),
}

/// One selectable node of the menu tree
#[derive(Debug, Clone)]
pub struct MenuEntry {
    name: String,
    description: Description,
    kind: EntryKind,
}

impl MenuEntry {
    fn build(name: String, description: Description, kind: EntryKind) -> Result<Self> {
        if name.trim().is_empty() {
            return Err(TimedialError::invalid("<unnamed>", "name must not be empty"));
        }
        Ok(Self {
            name,
            description,
            kind,
        })
    }

    /// A group entry; `children` must not be empty
    pub fn group(
        name: impl Into<String>,
        description: impl Into<Description>,
        children: Vec<MenuEntry>,
    ) -> Result<Self> {
        let name = name.into();
        if children.is_empty() {
            return Err(TimedialError::invalid(name, "items must not be empty"));
        }
        let children = MenuSet::new(children)?;
        Self::build(name, description.into(), EntryKind::Group(children))
    }

    /// A leaf entry launching `command`
    pub fn command(
        name: impl Into<String>,
        description: impl Into<Description>,
        command: Command,
    ) -> Result<Self> {
        Self::build(name.into(), description.into(), EntryKind::Command(command))
    }

    /// A leaf entry whose submenu comes from provider `id`
    pub fn dynamic(
        name: impl Into<String>,
        description: impl Into<Description>,
        id: impl Into<String>,
    ) -> Result<Self> {
        let name = name.into();
        let id = id.into();
        if id.trim().is_empty() {
            return Err(TimedialError::invalid(name, "callable must not be empty"));
        }
        Self::build(name, description.into(), EntryKind::Dynamic(id))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &Description {
        &self.description
    }

    pub fn kind(&self) -> &EntryKind {
        &self.kind
    }

    /// Lines for the description panel.
    ///
    /// Paragraphs are separated by blank lines and followed by one; command
    /// entries get their release metadata appended.
    pub fn description_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for paragraph in self.description.paragraphs() {
            lines.push(paragraph.clone());
            lines.push(String::new());
        }
        if let EntryKind::Command(command) = &self.kind {
            lines.extend(command.metadata_lines());
        }
        lines
    }
}

/// An ordered, non-empty, shared list of entries
#[derive(Debug, Clone)]
pub struct MenuSet {
    entries: Rc<[MenuEntry]>,
}

impl MenuSet {
    pub fn new(entries: Vec<MenuEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(TimedialError::invalid(
                "<menu>",
                "a menu must contain at least one entry",
            ));
        }
        Ok(Self {
            entries: entries.into(),
        })
    }

    /// Whether both handles point at the same list
    pub fn same(a: &MenuSet, b: &MenuSet) -> bool {
        Rc::ptr_eq(&a.entries, &b.entries)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&MenuEntry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MenuEntry> {
        self.entries.iter()
    }

    /// Display names in order
    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.name.clone()).collect()
    }
}

impl<'a> IntoIterator for &'a MenuSet {
    type Item = &'a MenuEntry;
    type IntoIter = std::slice::Iter<'a, MenuEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
