/// Lowercase alphanumeric words joined by `-`, at most 50 characters.
pub fn slugify(s: &str) -> String {
    s.to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
        .chars()
        .take(50)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_collapses_punctuation() {
        assert_eq!(slugify("Mathematics Unit Test"), "mathematics-unit-test");
        assert_eq!(slugify("  Parent--Teacher Meeting!! "), "parent-teacher-meeting");
        assert_eq!(slugify("Grade 10-A: Lab #3"), "grade-10-a-lab-3");
    }

    #[test]
    fn slugify_truncates_long_titles() {
        let slug = slugify(&"a".repeat(80));
        assert_eq!(slug.len(), 50);
    }
}
