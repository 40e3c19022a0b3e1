//! Prompt construction and response post-processing.
//!
//! Pure functions over strings; no I/O or network access here.

use std::fmt::Write as _;

use mealplan_db::models::RecipeConstraints;

/// Build the instruction block sent to the inference endpoint.
///
/// Every constraint field is embedded deterministically, with
/// human-readable defaults for unset optionals: "None" for an empty
/// avoid-list, "general" for an unset goal, "medium" for an unset spice
/// level. When `previous_context` is non-empty it is appended verbatim
/// under a labeled block so the model can avoid repeating earlier meals.
pub fn build_prompt(constraints: &RecipeConstraints, previous_context: Option<&str>) -> String {
    let avoid = if constraints.avoid_ingredients.is_empty() {
        "None"
    } else {
        &constraints.avoid_ingredients
    };
    let goal = constraints
        .goal
        .map(|g| g.to_string())
        .unwrap_or_else(|| "general".to_owned());
    let spice = constraints
        .spice_level
        .map(|s| s.to_string())
        .unwrap_or_else(|| "medium".to_owned());

    let mut prompt = format!(
        "You are a cooking assistant.\n\
         Generate one simple recipe using:\n\
         \n\
         Ingredients: {}\n\
         Ingredients to avoid: {avoid}\n\
         Meal type: {}\n\
         Diet type: {}\n\
         Cooking time: {} minutes\n\
         Goal: {goal}\n\
         Spice level: {spice}\n\
         \n\
         Provide:\n\
         1. Recipe name\n\
         2. Step-by-step instructions\n\
         3. One final line starting with \"Tags:\" listing 2-4 short descriptive tags\n",
        constraints.ingredients,
        constraints.meal_type,
        constraints.diet_type,
        constraints.cooking_time,
    );

    if let Some(context) = previous_context.filter(|c| !c.is_empty()) {
        let _ = write!(
            prompt,
            "\nMeals already planned today (do not repeat them):\n{context}\n"
        );
    }

    prompt
}

/// Extract the tag summary from a generated recipe.
///
/// Scans each line case-insensitively for a `tags:` prefix and returns the
/// trimmed remainder of the first such line. Absence of such a line yields
/// an empty string. This is a heuristic coupled to the endpoint's
/// prompt-following behavior, which is why it lives here and not in the
/// client.
pub fn extract_tags(text: &str) -> String {
    for line in text.lines() {
        let trimmed = line.trim();
        // `get` rather than byte slicing: index 5 may fall inside a
        // multi-byte character in arbitrary endpoint output. A successful
        // ASCII prefix match guarantees the boundary for the remainder.
        let has_prefix = trimmed
            .get(..5)
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case("tags:"));
        if has_prefix {
            return trimmed[5..].trim().to_owned();
        }
    }
    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mealplan_db::models::{DietType, Goal, MealType, SpiceLevel};

    fn constraints() -> RecipeConstraints {
        RecipeConstraints {
            ingredients: "eggs, spinach".to_owned(),
            avoid_ingredients: String::new(),
            meal_type: MealType::Breakfast,
            diet_type: DietType::Veg,
            cooking_time: 20,
            goal: None,
            spice_level: None,
        }
    }

    #[test]
    fn prompt_embeds_all_fields() {
        let mut c = constraints();
        c.avoid_ingredients = "peanuts".to_owned();
        c.goal = Some(Goal::WeightLoss);
        c.spice_level = Some(SpiceLevel::Mild);

        let prompt = build_prompt(&c, None);
        assert!(prompt.contains("Ingredients: eggs, spinach"));
        assert!(prompt.contains("Ingredients to avoid: peanuts"));
        assert!(prompt.contains("Meal type: Breakfast"));
        assert!(prompt.contains("Diet type: Veg"));
        assert!(prompt.contains("Cooking time: 20 minutes"));
        assert!(prompt.contains("Goal: weight loss"));
        assert!(prompt.contains("Spice level: mild"));
        assert!(prompt.contains("Tags:"));
    }

    #[test]
    fn prompt_substitutes_defaults_for_unset_fields() {
        let prompt = build_prompt(&constraints(), None);
        assert!(prompt.contains("Ingredients to avoid: None"));
        assert!(prompt.contains("Goal: general"));
        assert!(prompt.contains("Spice level: medium"));
    }

    #[test]
    fn prompt_is_deterministic() {
        let c = constraints();
        assert_eq!(build_prompt(&c, None), build_prompt(&c, None));
    }

    #[test]
    fn prompt_appends_previous_context() {
        let prompt = build_prompt(&constraints(), Some("Breakfast:\nOmelette"));
        assert!(prompt.contains("Meals already planned today (do not repeat them):"));
        assert!(prompt.ends_with("Breakfast:\nOmelette\n"));
    }

    #[test]
    fn prompt_omits_context_block_when_absent_or_empty() {
        let without = build_prompt(&constraints(), None);
        assert!(!without.contains("already planned"));

        let empty = build_prompt(&constraints(), Some(""));
        assert_eq!(empty, without);
    }

    #[test]
    fn extract_tags_finds_first_tags_line() {
        let text = "Spinach Omelette\n1. Beat eggs\n2. Fry\nTags: light, high protein\n";
        assert_eq!(extract_tags(text), "light, high protein");
    }

    #[test]
    fn extract_tags_is_case_insensitive() {
        assert_eq!(extract_tags("TAGS: quick"), "quick");
        assert_eq!(extract_tags("  tags:   comfort food  "), "comfort food");
    }

    #[test]
    fn extract_tags_takes_only_the_first_match() {
        let text = "Tags: first\nTags: second";
        assert_eq!(extract_tags(text), "first");
    }

    #[test]
    fn extract_tags_empty_when_absent() {
        assert_eq!(extract_tags("A recipe with no tag line"), "");
        assert_eq!(extract_tags(""), "");
    }

    #[test]
    fn extract_tags_handles_multibyte_lines() {
        // Lines whose fifth byte is mid-character must not panic.
        assert_eq!(extract_tags("ééé"), "");
        assert_eq!(extract_tags("Crêpes with jam\nsoufflé\n"), "");
        assert_eq!(extract_tags("Tags: café, crème"), "café, crème");
    }

    #[test]
    fn extract_tags_ignores_mid_line_occurrences() {
        assert_eq!(extract_tags("these tags: are mid-sentence"), "");
    }
}
