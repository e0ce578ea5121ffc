//! Posts store tags as one comma-separated column.

/// Splits a comma-separated tag column, trimming and dropping empty entries.
pub fn tags_to_array(tags: &str) -> Vec<String> {
    tags.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Joins tags into the stored comma-separated form.
pub fn tags_to_string<S: AsRef<str>>(tags: &[S]) -> String {
    tags.iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(",")
}
