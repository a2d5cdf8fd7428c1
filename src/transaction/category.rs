//! The fixed set of categories a transaction can belong to.

use std::{fmt::Display, str::FromStr};

use rusqlite::{
    ToSql,
    types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, ValueRef},
};
use serde::{Deserialize, Serialize};

/// What a transaction was spent on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Supermarket shopping.
    Groceries,
    /// Eating out and takeaways.
    Food,
    /// Movies, concerts, games and the like.
    Entertainment,
    /// Getting around and going away.
    Travel,
    /// Anything else.
    Others,
}

impl Category {
    /// Every category, in the order they are shown to the user.
    pub const ALL: [Category; 5] = [
        Category::Groceries,
        Category::Food,
        Category::Entertainment,
        Category::Travel,
        Category::Others,
    ];

    /// The lowercase name used in JSON and in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Groceries => "groceries",
            Category::Food => "food",
            Category::Entertainment => "entertainment",
            Category::Travel => "travel",
            Category::Others => "others",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// The string did not name one of the known categories.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("\"{0}\" is not a valid category, expected one of groceries, food, entertainment, travel or others")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| ParseCategoryError(s.to_owned()))
    }
}

impl ToSql for Category {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for Category {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|error| FromSqlError::Other(Box::new(error)))
    }
}

#[cfg(test)]
mod tests {
    use super::{Category, ParseCategoryError};

    #[test]
    fn parses_every_category_from_its_name() {
        for category in Category::ALL {
            assert_eq!(category.to_string().parse(), Ok(category));
        }
    }

    #[test]
    fn rejects_unknown_and_differently_cased_names() {
        assert_eq!(
            "rent".parse::<Category>(),
            Err(ParseCategoryError("rent".to_owned()))
        );
        assert!("Travel".parse::<Category>().is_err());
        assert!("".parse::<Category>().is_err());
    }

    #[test]
    fn serializes_as_lowercase_string() {
        let json = serde_json::to_string(&Category::Entertainment).unwrap();

        assert_eq!(json, "\"entertainment\"");
    }
}
