use crate::domain::recipe::value_objects::GenerateRecipesInput;

/// Builds the chef prompt handed to the text model. The response schema is
/// enforced separately through JSON mode; the prompt restates it anyway.
pub fn build_recipe_prompt(input: &GenerateRecipesInput) -> String {
    let mut prompt = format!(
        "As a professional chef, create 3 detailed recipes from these constraints:\n\
         - Ingredients: {}\n\
         - Kitchenware: {}\n\
         - Cuisine: {}\n\
         - Portions: {} servings\n\
         - Audience: {}\n",
        input.ingredients.join(", "),
        input.kitchenware.join(", "),
        input.cuisine,
        input.people,
        input.age_group,
    );

    if let Some(max_calories) = input.max_calories.filter(|c| *c > 0) {
        prompt.push_str(&format!(
            "- Keep every variant at or below {max_calories} kcal per portion\n"
        ));
    }

    prompt.push_str(
        "\nReturn strictly a JSON array of 3 recipe objects and no extra text. Each object \
         carries: id, name, difficulty, time, portions, a \"standard\" variant {calories, desc, \
         ingredients, steps}, a \"healthy\" variant {calories, desc, adjustments, steps}, and \
         \"substitutions\" [{missing, suggestion}].",
    );

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> GenerateRecipesInput {
        GenerateRecipesInput {
            ingredients: vec!["chicken thighs".to_string(), "broccoli".to_string()],
            kitchenware: vec!["wok".to_string()],
            age_group: "adult".to_string(),
            people: 4,
            cuisine: "cantonese".to_string(),
            max_calories: None,
        }
    }

    #[test]
    fn prompt_lists_every_ingredient_and_portion_count() {
        let prompt = build_recipe_prompt(&input());

        assert!(prompt.contains("chicken thighs"));
        assert!(prompt.contains("broccoli"));
        assert!(prompt.contains("wok"));
        assert!(prompt.contains("4 servings"));
        assert!(prompt.contains("cantonese"));
    }

    #[test]
    fn calorie_ceiling_appears_only_when_supplied() {
        let without = build_recipe_prompt(&input());
        assert!(!without.contains("kcal"));

        let mut capped = input();
        capped.max_calories = Some(600);
        let with = build_recipe_prompt(&capped);
        assert!(with.contains("600 kcal"));
    }
}
