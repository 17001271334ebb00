//! Validated goal title type.

use crate::schema::{FieldRule, ValidationError, check_rules};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rules applied to goal titles, shared with the goal schema declaration.
pub const GOAL_TITLE_RULES: [FieldRule; 2] =
    [FieldRule::NotEmpty, FieldRule::Length { min: 2, max: 100 }];

/// Goal title holding between 2 and 100 characters.
///
/// Titles are stored exactly as given; surrounding whitespace counts toward
/// the length.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GoalTitle(String);

impl GoalTitle {
    /// Creates a validated goal title.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Empty`] for an empty title, or
    /// [`ValidationError::Length`] when the character count falls outside
    /// `2..=100`.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let title = value.into();
        check_rules(&GOAL_TITLE_RULES, super::declaration::TITLE, &title)?;
        Ok(Self(title))
    }

    /// Returns the title as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for GoalTitle {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<GoalTitle> for String {
    fn from(title: GoalTitle) -> Self {
        title.0
    }
}

impl AsRef<str> for GoalTitle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for GoalTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
