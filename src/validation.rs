pub fn validate_required(field: &str) -> bool {
    // Must contain at least one non-whitespace character
    // Blank after trim counts as missing
    !field.trim().is_empty()
}
