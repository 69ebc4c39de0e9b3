//! Slug generation for routing identifiers.
//!
//! A slug is the URL-safe identifier a department detail page is routed
//! by. Generation is a pure character mapping; uniqueness across a
//! dataset is enforced separately by [`assign_slugs`], since distinct
//! names can legally produce the same slug ("A/B" and "A B" both yield
//! `a-b`).

use crate::models::Department;
use std::collections::HashSet;

/// Derive a routing slug from a display name.
///
/// Lowercases the input and maps every character that is not a Unicode
/// letter or digit to a single `-`. Runs of replaced characters are
/// deliberately not collapsed, so the mapping stays one-to-one per
/// character and re-slugifying a slug is a no-op.
///
/// # Example
///
/// ```
/// use switchboard::domain::slugify;
///
/// assert_eq!(slugify("Department of Public Works"), "department-of-public-works");
/// assert_eq!(slugify("A/B & C"), "a-b---c");
/// ```
pub fn slugify(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect()
}

/// Assign a unique slug to every department in the slice.
///
/// Departments are expected in the order slugs should be claimed in
/// (the loader passes them sorted by name ascending, which makes the
/// assignment deterministic for a given dataset). The first claimant of
/// a slug keeps the bare form; later claimants get `-2`, `-3`, ...
/// appended, with the suffixed form re-checked against already taken
/// slugs.
pub fn assign_slugs(departments: &mut [Department]) {
    let mut taken: HashSet<String> = HashSet::with_capacity(departments.len());

    for dept in departments.iter_mut() {
        let base = slugify(&dept.name);
        let mut slug = base.clone();
        let mut n = 2;
        while !taken.insert(slug.clone()) {
            slug = format!("{}-{}", base, n);
            n += 1;
        }
        dept.slug = slug;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(
            slugify("Department of Public Works"),
            "department-of-public-works"
        );
        assert_eq!(slugify("Fire Department"), "fire-department");
    }

    #[test]
    fn test_slugify_no_run_collapsing() {
        // One dash per replaced character: "/", " ", "&", " ".
        assert_eq!(slugify("A/B & C"), "a-b---c");
    }

    #[test]
    fn test_slugify_unicode_letters_preserved() {
        assert_eq!(slugify("Café Münster"), "café-münster");
        assert_eq!(slugify("Oficina número 1"), "oficina-número-1");
    }

    #[test]
    fn test_slugify_output_charset_and_idempotence() {
        let samples = [
            "Department of Public Works",
            "A/B & C",
            "  leading and trailing  ",
            "Mixed 123 Content!",
            "Überwachungsbüro",
            "",
        ];
        for name in samples {
            let slug = slugify(name);
            assert!(
                slug.chars().all(|c| c.is_alphanumeric() || c == '-'),
                "unexpected character in slug {:?}",
                slug
            );
            assert_eq!(slug, slug.to_lowercase());
            assert_eq!(slugify(&slug), slug, "slugify is not idempotent on {:?}", name);
        }
    }

    #[test]
    fn test_slugify_allows_collisions() {
        // The generator alone does not disambiguate.
        assert_eq!(slugify("A/B"), slugify("A B"));
    }

    #[test]
    fn test_assign_slugs_unique() {
        let mut departments = vec![
            Department::new("A B"),
            Department::new("A/B"),
            Department::new("A&B"),
        ];
        assign_slugs(&mut departments);

        assert_eq!(departments[0].slug, "a-b");
        assert_eq!(departments[1].slug, "a-b-2");
        assert_eq!(departments[2].slug, "a-b-3");
    }

    #[test]
    fn test_assign_slugs_suffix_does_not_steal_existing() {
        // A literal "a-b-2" name claims its slug first; the colliding
        // pair must skip over it.
        let mut departments = vec![
            Department::new("A B 2"),
            Department::new("A B"),
            Department::new("A/B"),
        ];
        assign_slugs(&mut departments);

        assert_eq!(departments[0].slug, "a-b-2");
        assert_eq!(departments[1].slug, "a-b");
        assert_eq!(departments[2].slug, "a-b-3");
    }

    #[test]
    fn test_assign_slugs_no_collisions_untouched() {
        let mut departments = vec![
            Department::new("Fire Department"),
            Department::new("Parks and Recreation"),
        ];
        assign_slugs(&mut departments);

        assert_eq!(departments[0].slug, "fire-department");
        assert_eq!(departments[1].slug, "parks-and-recreation");
    }
}
