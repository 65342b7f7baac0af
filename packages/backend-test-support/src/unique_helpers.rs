//! Test helpers for generating unique test data

use ulid::Ulid;

/// Generate a unique string with the given prefix, `{prefix}-{ulid}`.
///
/// # Examples
/// ```
/// use backend_test_support::unique_helpers::unique_str;
///
/// let a = unique_str("entry");
/// let b = unique_str("entry");
/// assert_ne!(a, b);
/// assert!(a.starts_with("entry-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// Build `count` custom theme entries as JSON objects with unique names.
///
/// Each entry has the `{ name, imageRef }` shape accepted by `POST /game/start`.
pub fn unique_custom_entries(count: usize) -> Vec<serde_json::Value> {
    (0..count)
        .map(|i| {
            let name = unique_str(&format!("entry{i}"));
            serde_json::json!({
                "name": name,
                "imageRef": format!("https://img.example.test/{name}.png"),
            })
        })
        .collect()
}
