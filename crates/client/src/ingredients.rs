/// Splits a comma-separated ingredient string, trimming each piece.
///
/// Empty pieces are kept, so `"a,,b"` yields three entries.
pub fn split_ingredients(input: &str) -> Vec<String> {
    input.split(',').map(|piece| piece.trim().to_string()).collect()
}

/// Joins ingredients back into the editable `", "`-separated form.
pub fn join_ingredients(ingredients: &[String]) -> String {
    ingredients.join(", ")
}
