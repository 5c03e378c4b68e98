use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArticleId(String);

impl ArticleId {
    pub fn new(id: impl Into<String>) -> DomainResult<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(DomainError::Validation("article id cannot be empty".into()));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ArticleId> for String {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleTitle(String);

impl ArticleTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("title cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ArticleTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Closed set of topic tags. Labels are the Portuguese section names the
/// catalog content uses; serialization and search both go through `label`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    World,
    Technology,
    Business,
    Sports,
    Science,
    Health,
    Entertainment,
    Politics,
}

impl Category {
    pub const ALL: [Self; 8] = [
        Self::World,
        Self::Technology,
        Self::Business,
        Self::Sports,
        Self::Science,
        Self::Health,
        Self::Entertainment,
        Self::Politics,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::World => "Mundo",
            Self::Technology => "Tecnologia",
            Self::Business => "Negócios",
            Self::Sports => "Esportes",
            Self::Science => "Ciência",
            Self::Health => "Saúde",
            Self::Entertainment => "Entretenimento",
            Self::Politics => "Política",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Estimated reading time in whole minutes, always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadTime(u32);

impl ReadTime {
    pub fn new(minutes: u32) -> DomainResult<Self> {
        if minutes == 0 {
            return Err(DomainError::Validation(
                "read time must be at least one minute".into(),
            ));
        }
        Ok(Self(minutes))
    }

    pub fn minutes(self) -> u32 {
        self.0
    }
}
