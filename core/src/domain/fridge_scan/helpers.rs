/// Builds the vision prompt for ingredient extraction.
pub fn build_fridge_scan_prompt() -> String {
    "You are looking at a photo of the inside of a refrigerator or a pile of groceries. \
     List every distinct food ingredient you can recognize, using short common names. \
     Return strictly a JSON object of the form {\"ingredients\": [\"ingredient name\", ...]} \
     and no extra text."
        .to_string()
}
