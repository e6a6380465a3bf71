//! Single-name composer
//!
//! Builds one candidate username from the catalog and the style rule:
//! base-word draw, keyword merge, optional affixes, per-part casing,
//! separator join, numeric suffix, ambiguous-character scrub, length clamp.

use rand::Rng;

use crate::catalog;
use crate::types::{Casing, StyleRule, UsernameOptions};

/// Composes candidate usernames for a fixed set of options.
///
/// The word list and style rule are resolved once at construction; `compose`
/// is then a pure function of the injected RNG.
pub struct NameComposer<'a> {
    options: &'a UsernameOptions,
    rule: StyleRule,
    words: &'static [&'static str],
    keyword: Option<String>,
}

impl<'a> NameComposer<'a> {
    pub fn new(options: &'a UsernameOptions) -> Self {
        let keyword = {
            let trimmed = options.keyword.trim();
            if trimmed.is_empty() {
                None
            } else {
                // Match the catalog's initial-capitalization convention.
                Some(recase_first(trimmed, true))
            }
        };

        Self {
            options,
            rule: options.style.rule(),
            words: catalog::words_for(options.category),
            keyword,
        }
    }

    /// Produce one candidate username
    pub fn compose<R: Rng>(&self, rng: &mut R) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(4);

        if self.options.include_prefix {
            parts.push(catalog::PREFIXES[rng.gen_range(0..catalog::PREFIXES.len())]);
        }
        if let Some(keyword) = &self.keyword {
            parts.push(keyword);
        }
        parts.push(self.words[rng.gen_range(0..self.words.len())]);
        if self.options.include_suffix {
            parts.push(catalog::SUFFIXES[rng.gen_range(0..catalog::SUFFIXES.len())]);
        }

        let mut name = self.join_parts(&parts);

        if self.rule.numbers {
            if !self.rule.separator.is_empty() {
                name.push_str(self.rule.separator);
            }
            // Uniform over 10..=9999 yields a 2-4 digit suffix.
            let number: u32 = rng.gen_range(10..10_000);
            name.push_str(&number.to_string());
        }

        if self.options.avoid_ambiguous {
            name = catalog::scrub_ambiguous(&name);
        }

        self.clamp(name, rng)
    }

    /// Join parts with the style separator, applying the casing rule per part
    fn join_parts(&self, parts: &[&str]) -> String {
        let mut out = String::new();
        for (i, part) in parts.iter().enumerate() {
            if i > 0 && !self.rule.separator.is_empty() {
                out.push_str(self.rule.separator);
            }
            out.push_str(&apply_casing(part, self.rule.casing, i == 0));
        }
        out
    }

    /// Enforce `[min_length, max_length]`: truncate from the end when too
    /// long, pad with random alphanumeric characters when too short.
    fn clamp<R: Rng>(&self, name: String, rng: &mut R) -> String {
        let mut name = name;
        if name.chars().count() > self.options.max_length {
            name = name.chars().take(self.options.max_length).collect();
        }

        if name.chars().count() < self.options.min_length {
            let pool: Vec<char> = catalog::PADDING_CHARS
                .iter()
                .copied()
                .filter(|c| !self.options.avoid_ambiguous || !catalog::is_ambiguous(*c))
                .collect();
            while name.chars().count() < self.options.min_length {
                name.push(pool[rng.gen_range(0..pool.len())]);
            }
        }

        name
    }
}

/// Apply a casing transform to one part
fn apply_casing(part: &str, casing: Casing, is_first: bool) -> String {
    match casing {
        Casing::Upper => part.to_uppercase(),
        Casing::Pascal => recase_first(part, true),
        Casing::Camel => recase_first(part, !is_first),
    }
}

/// Re-case only the first character, leaving the rest of the part untouched
fn recase_first(part: &str, upper: bool) -> String {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) => {
            let recased: String = if upper {
                first.to_uppercase().collect()
            } else {
                first.to_lowercase().collect()
            };
            format!("{}{}", recased, chars.as_str())
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{is_ambiguous, PREFIXES, SUFFIXES};
    use crate::types::{Category, StylePreset};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn options(style: StylePreset) -> UsernameOptions {
        UsernameOptions {
            category: Category::Clean,
            style,
            batch_size: 1,
            min_length: 1,
            max_length: 60,
            include_prefix: false,
            include_suffix: false,
            avoid_ambiguous: false,
            keyword: String::new(),
        }
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_pascal_starts_uppercase() {
        let options = options(StylePreset::Cute);
        let composer = NameComposer::new(&options);
        let mut rng = rng();
        for _ in 0..50 {
            let name = composer.compose(&mut rng);
            assert!(name.chars().next().unwrap().is_ascii_uppercase());
            assert!(name.chars().all(|c| c.is_ascii_alphabetic()));
        }
    }

    #[test]
    fn test_camel_starts_lowercase() {
        let options = options(StylePreset::Clean);
        let composer = NameComposer::new(&options);
        let mut rng = rng();
        for _ in 0..50 {
            let name = composer.compose(&mut rng);
            assert!(name.chars().next().unwrap().is_ascii_lowercase());
        }
    }

    #[test]
    fn test_gamer_is_uppercase_with_digit_tail() {
        let options = options(StylePreset::Gamer);
        let composer = NameComposer::new(&options);
        let mut rng = rng();
        for _ in 0..50 {
            let name = composer.compose(&mut rng);
            let (word, digits) = name.split_once('_').unwrap();
            assert!(word.chars().all(|c| c.is_ascii_uppercase()));
            assert!((2..=4).contains(&digits.len()));
            assert!(digits.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_professional_uses_dot_separator() {
        let mut options = options(StylePreset::Professional);
        options.include_prefix = true;
        let composer = NameComposer::new(&options);
        let mut rng = rng();
        for _ in 0..20 {
            let name = composer.compose(&mut rng);
            assert!(name.contains('.'));
        }
    }

    #[test]
    fn test_keyword_leads_the_base_word() {
        let mut options = options(StylePreset::Cute);
        options.keyword = "shadow".to_string();
        let composer = NameComposer::new(&options);
        let mut rng = rng();
        for _ in 0..20 {
            let name = composer.compose(&mut rng);
            assert!(name.starts_with("Shadow"), "got '{}'", name);
        }
    }

    #[test]
    fn test_prefix_and_suffix_come_from_the_pools() {
        let mut options = options(StylePreset::Cute);
        options.include_prefix = true;
        options.include_suffix = true;
        let composer = NameComposer::new(&options);
        let mut rng = rng();
        for _ in 0..20 {
            let name = composer.compose(&mut rng);
            assert!(PREFIXES.iter().any(|p| name.starts_with(p)), "got '{}'", name);
            assert!(SUFFIXES.iter().any(|s| name.ends_with(s)), "got '{}'", name);
        }
    }

    #[test]
    fn test_ambiguous_characters_are_scrubbed() {
        let mut options = options(StylePreset::Gamer);
        options.avoid_ambiguous = true;
        let composer = NameComposer::new(&options);
        let mut rng = rng();
        for _ in 0..100 {
            let name = composer.compose(&mut rng);
            assert!(
                name.chars().all(|c| !is_ambiguous(c)),
                "ambiguous character in '{}'",
                name
            );
        }
    }

    #[test]
    fn test_truncates_to_max_length() {
        let mut options = options(StylePreset::Cute);
        options.max_length = 4;
        let composer = NameComposer::new(&options);
        let mut rng = rng();
        for _ in 0..50 {
            assert!(composer.compose(&mut rng).chars().count() <= 4);
        }
    }

    #[test]
    fn test_pads_to_min_length() {
        let mut options = options(StylePreset::Cute);
        options.min_length = 30;
        options.max_length = 40;
        options.avoid_ambiguous = true;
        let composer = NameComposer::new(&options);
        let mut rng = rng();
        for _ in 0..50 {
            let name = composer.compose(&mut rng);
            let len = name.chars().count();
            assert!((30..=40).contains(&len));
            assert!(name.chars().all(|c| !is_ambiguous(c)));
        }
    }

    #[test]
    fn test_max_length_below_shortest_word_does_not_panic() {
        let mut options = options(StylePreset::Cute);
        options.min_length = 1;
        options.max_length = 1;
        let composer = NameComposer::new(&options);
        let mut rng = rng();
        for _ in 0..20 {
            assert_eq!(composer.compose(&mut rng).chars().count(), 1);
        }
    }

    #[test]
    fn test_recase_first() {
        assert_eq!(recase_first("shadow", true), "Shadow");
        assert_eq!(recase_first("Swift", false), "swift");
        assert_eq!(recase_first("BerryBear", false), "berryBear");
        assert_eq!(recase_first("", true), "");
    }
}
