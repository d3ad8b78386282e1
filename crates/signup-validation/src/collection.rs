//! Collection validation functions

/// Validates minimum number of items in a collection
pub fn validate_min_items<T>(items: &[T], min: usize) -> Result<(), String> {
    if items.len() >= min {
        Ok(())
    } else {
        Err(format!("Must have at least {} items", min))
    }
}

/// Returns the first item not found in `allowed`
pub fn first_unknown<'a>(items: &'a [String], allowed: &[&str]) -> Option<&'a str> {
    items
        .iter()
        .map(String::as_str)
        .find(|item| !allowed.contains(item))
}
