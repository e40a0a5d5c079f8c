//! Fragment-safe slugs derived from county names.
//!
//! A slug is a one-way projection of a display name: `"St. Louis City, MO"`
//! becomes `"st-louis-city-mo"`. It is not injective, names differing only in
//! punctuation collapse onto the same slug. Resolving a slug back to a county
//! is a lookup over the dataset ([`crate::storage::Dataset::resolve_slug`]),
//! where the first record in dataset order wins.

/// Converts a display name into a slug.
///
/// Lower-cases the name, replaces every run of characters outside `[a-z0-9]`
/// with a single `-`, and strips leading and trailing dashes. The result is
/// either empty or matches `^[a-z0-9]+(-[a-z0-9]+)*$`.
///
/// # Examples
///
/// ```
/// use countyflow::domain::slug::to_slug;
///
/// assert_eq!(to_slug("Philadelphia County, PA"), "philadelphia-county-pa");
/// assert_eq!(to_slug("  --Doña Ana County, NM--"), "do-a-ana-county-nm");
/// assert_eq!(to_slug("!!!"), "");
/// ```
#[must_use]
pub fn to_slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;

    for c in name.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }

    slug
}

/// Normalizes an incoming fragment before it is compared against slugs.
///
/// Strips one leading `#`, trims whitespace, and lower-cases the rest.
#[must_use]
pub fn normalize_fragment(fragment: &str) -> String {
    let fragment = fragment.trim();
    fragment
        .strip_prefix('#')
        .unwrap_or(fragment)
        .trim()
        .to_lowercase()
}
