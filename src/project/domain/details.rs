//! Editable project fields.

use super::ProjectDomainError;
use crate::identity::domain::UserId;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// Whole, non-negative budget amount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Budget(i64);

impl Budget {
    /// Validates and wraps an amount.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::NegativeBudget`] for amounts below zero.
    pub const fn new(amount: i64) -> Result<Self, ProjectDomainError> {
        if amount < 0 {
            return Err(ProjectDomainError::NegativeBudget(amount));
        }
        Ok(Self(amount))
    }

    /// Returns the amount.
    #[must_use]
    pub const fn amount(self) -> i64 {
        self.0
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The full set of fields a manager supplies when creating or editing a
/// project.
///
/// Edits replace every field at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectDetails {
    name: String,
    description: String,
    manager: UserId,
    budget: Budget,
    due_date: Option<NaiveDate>,
    genre: String,
    platforms: String,
    engine: String,
}

impl ProjectDetails {
    /// Creates details with the required fields.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::MissingField`] when the name is blank.
    pub fn new(name: impl Into<String>, manager: UserId) -> Result<Self, ProjectDomainError> {
        let name = name.into().trim().to_owned();
        if name.is_empty() {
            return Err(ProjectDomainError::MissingField { field: "name" });
        }
        Ok(Self {
            name,
            description: String::new(),
            manager,
            budget: Budget::default(),
            due_date: None,
            genre: String::new(),
            platforms: String::new(),
            engine: String::new(),
        })
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the budget.
    #[must_use]
    pub const fn with_budget(mut self, budget: Budget) -> Self {
        self.budget = budget;
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the genre label.
    #[must_use]
    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = genre.into();
        self
    }

    /// Sets the target platforms label.
    #[must_use]
    pub fn with_platforms(mut self, platforms: impl Into<String>) -> Self {
        self.platforms = platforms.into();
        self
    }

    /// Sets the engine label.
    #[must_use]
    pub fn with_engine(mut self, engine: impl Into<String>) -> Self {
        self.engine = engine.into();
        self
    }

    /// Returns the project name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the managing user.
    #[must_use]
    pub const fn manager(&self) -> UserId {
        self.manager
    }

    /// Returns the budget.
    #[must_use]
    pub const fn budget(&self) -> Budget {
        self.budget
    }

    /// Returns the due date.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns the genre label.
    #[must_use]
    pub fn genre(&self) -> &str {
        &self.genre
    }

    /// Returns the target platforms label.
    #[must_use]
    pub fn platforms(&self) -> &str {
        &self.platforms
    }

    /// Returns the engine label.
    #[must_use]
    pub fn engine(&self) -> &str {
        &self.engine
    }
}
