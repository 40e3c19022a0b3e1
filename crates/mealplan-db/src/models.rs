use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Which meal of the day a recipe is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealType {
    /// The three meals in day-plan order.
    pub const DAY_ORDER: [Self; 3] = [Self::Breakfast, Self::Lunch, Self::Dinner];
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Dinner => "Dinner",
        };
        f.write_str(s)
    }
}

impl FromStr for MealType {
    type Err = MealTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Ok(Self::Breakfast),
            "lunch" => Ok(Self::Lunch),
            "dinner" => Ok(Self::Dinner),
            other => Err(MealTypeParseError(other.to_owned())),
        }
    }
}

/// Error returned when parsing an invalid [`MealType`] string.
#[derive(Debug, Clone)]
pub struct MealTypeParseError(pub String);

impl fmt::Display for MealTypeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid meal type: {:?}", self.0)
    }
}

impl std::error::Error for MealTypeParseError {}

// ---------------------------------------------------------------------------

/// Dietary category of a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum DietType {
    Veg,
    NonVeg,
}

impl fmt::Display for DietType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Veg => "Veg",
            Self::NonVeg => "Non-Veg",
        };
        f.write_str(s)
    }
}

impl FromStr for DietType {
    type Err = DietTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "veg" | "vegetarian" => Ok(Self::Veg),
            "non-veg" | "nonveg" | "non veg" => Ok(Self::NonVeg),
            other => Err(DietTypeParseError(other.to_owned())),
        }
    }
}

/// Error returned when parsing an invalid [`DietType`] string.
#[derive(Debug, Clone)]
pub struct DietTypeParseError(pub String);

impl fmt::Display for DietTypeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid diet type: {:?}", self.0)
    }
}

impl std::error::Error for DietTypeParseError {}

// ---------------------------------------------------------------------------

/// Nutrition goal guiding recipe generation. Unset is represented as
/// `Option::None` (SQL NULL) rather than a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    WeightLoss,
    Maintenance,
    WeightGain,
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::WeightLoss => "weight loss",
            Self::Maintenance => "maintenance",
            Self::WeightGain => "weight gain",
        };
        f.write_str(s)
    }
}

impl FromStr for Goal {
    type Err = GoalParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "weight loss" | "loss" => Ok(Self::WeightLoss),
            "maintenance" | "maintain" => Ok(Self::Maintenance),
            "weight gain" | "gain" => Ok(Self::WeightGain),
            other => Err(GoalParseError(other.to_owned())),
        }
    }
}

/// Error returned when parsing an invalid [`Goal`] string.
#[derive(Debug, Clone)]
pub struct GoalParseError(pub String);

impl fmt::Display for GoalParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid goal: {:?}", self.0)
    }
}

impl std::error::Error for GoalParseError {}

// ---------------------------------------------------------------------------

/// How spicy the generated recipe should be. Unset is `Option::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum SpiceLevel {
    Mild,
    Medium,
    Spicy,
}

impl fmt::Display for SpiceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Mild => "mild",
            Self::Medium => "medium",
            Self::Spicy => "spicy",
        };
        f.write_str(s)
    }
}

impl FromStr for SpiceLevel {
    type Err = SpiceLevelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mild" => Ok(Self::Mild),
            "medium" => Ok(Self::Medium),
            "spicy" | "hot" => Ok(Self::Spicy),
            other => Err(SpiceLevelParseError(other.to_owned())),
        }
    }
}

/// Error returned when parsing an invalid [`SpiceLevel`] string.
#[derive(Debug, Clone)]
pub struct SpiceLevelParseError(pub String);

impl fmt::Display for SpiceLevelParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid spice level: {:?}", self.0)
    }
}

impl std::error::Error for SpiceLevelParseError {}

// ---------------------------------------------------------------------------
// Constraint tuple
// ---------------------------------------------------------------------------

/// The full set of user-supplied fields keying a recipe for reuse.
///
/// Two requests with an identical tuple are considered the same recipe
/// request; [`crate::queries::recipes::find_existing`] matches on every
/// field with exact equality (NULL-safe for the optional ones).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeConstraints {
    pub ingredients: String,
    /// Comma-separated ingredients to avoid; empty when none.
    pub avoid_ingredients: String,
    pub meal_type: MealType,
    pub diet_type: DietType,
    /// Cooking time budget in minutes.
    pub cooking_time: i64,
    pub goal: Option<Goal>,
    pub spice_level: Option<SpiceLevel>,
}

// ---------------------------------------------------------------------------
// Row structs
// ---------------------------------------------------------------------------

/// A generated recipe with its constraint fields and user feedback.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Recipe {
    pub id: i64,
    pub ingredients: String,
    pub avoid_ingredients: String,
    pub meal_type: MealType,
    pub diet_type: DietType,
    pub cooking_time: i64,
    pub goal: Option<Goal>,
    pub spice_level: Option<SpiceLevel>,
    pub tags: String,
    pub recipe_output: String,
    pub rating: Option<i64>,
    pub notes: Option<String>,
}

impl Recipe {
    /// The constraint tuple this recipe was generated for.
    pub fn constraints(&self) -> RecipeConstraints {
        RecipeConstraints {
            ingredients: self.ingredients.clone(),
            avoid_ingredients: self.avoid_ingredients.clone(),
            meal_type: self.meal_type,
            diet_type: self.diet_type,
            cooking_time: self.cooking_time,
            goal: self.goal,
            spice_level: self.spice_level,
        }
    }
}

/// Compact listing row for `list` and `search` output.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RecipeSummary {
    pub id: i64,
    pub meal_type: MealType,
    pub diet_type: DietType,
    pub cooking_time: i64,
    pub tags: String,
    pub rating: Option<i64>,
}

/// A named day plan bundling a breakfast, lunch and dinner recipe.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Plan {
    pub id: i64,
    pub plan_name: String,
    pub created_at: DateTime<Utc>,
    pub breakfast_recipe_id: Option<i64>,
    pub lunch_recipe_id: Option<i64>,
    pub dinner_recipe_id: Option<i64>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
