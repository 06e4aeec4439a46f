/// Builds the vision prompt for calorie estimation.
pub fn build_calorie_prompt() -> String {
    "Identify the food shown in this photo and estimate the total calories of the portion \
     you can see. Keep the reasoning to one or two sentences. \
     Return strictly a JSON object of the form {\"food_name\": \"...\", \
     \"estimated_calories\": 123, \"reasoning\": \"...\"} and no extra text."
        .to_string()
}
