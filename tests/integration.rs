//! Integration tests for username-forge

use rand::rngs::StdRng;
use rand::SeedableRng;
use username_forge::{
    catalog, generate_batch, generate_batch_with_rng, Category, StylePreset, UsernameForgeError,
    UsernameOptions,
};

fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

#[test]
fn test_clean_camel_batch_scenario() {
    let options = UsernameOptions {
        category: Category::Clean,
        style: StylePreset::Clean,
        batch_size: 5,
        min_length: 3,
        max_length: 18,
        include_prefix: false,
        include_suffix: false,
        avoid_ambiguous: true,
        keyword: String::new(),
    };

    let batch = generate_batch_with_rng(&options, &mut seeded(11)).unwrap();
    assert_eq!(batch.len(), 5);

    for name in &batch {
        let len = name.chars().count();
        assert!((3..=18).contains(&len), "'{}' has length {}", name, len);
        assert!(
            name.chars().all(|c| !catalog::is_ambiguous(c)),
            "ambiguous character in '{}'",
            name
        );
        assert!(name.chars().all(|c| c.is_ascii_alphanumeric()));
    }
}

#[test]
fn test_min_above_max_scenario() {
    let options = UsernameOptions {
        min_length: 20,
        max_length: 5,
        ..Default::default()
    };

    let err = generate_batch(&options).unwrap_err();
    assert!(matches!(err, UsernameForgeError::Config { .. }));
}

#[test]
fn test_gamer_keyword_scenario() {
    let options = UsernameOptions {
        category: Category::Cat,
        style: StylePreset::Gamer,
        batch_size: 1,
        min_length: 1,
        max_length: 40,
        include_prefix: false,
        include_suffix: true,
        avoid_ambiguous: false,
        keyword: "shadow".to_string(),
    };

    let batch = generate_batch_with_rng(&options, &mut seeded(23)).unwrap();
    assert_eq!(batch.len(), 1);

    let name = &batch[0];
    let tokens: Vec<&str> = name.split('_').collect();
    assert_eq!(tokens.len(), 4, "expected keyword_base_suffix_digits in '{}'", name);
    assert_eq!(tokens[0], "SHADOW");
    assert!(catalog::SUFFIXES
        .iter()
        .any(|s| s.to_uppercase() == tokens[2]));
    assert!((2..=4).contains(&tokens[3].len()));
    assert!(tokens[3].chars().all(|c| c.is_ascii_digit()));
    assert!(name
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_'));
}

#[test]
fn test_batch_size_is_honored_across_configurations() {
    for category in Category::ALL {
        for style in StylePreset::ALL {
            let options = UsernameOptions {
                category,
                style,
                batch_size: 7,
                max_length: 30,
                ..Default::default()
            };
            let batch = generate_batch_with_rng(&options, &mut seeded(5)).unwrap();
            assert_eq!(batch.len(), 7, "category {} style {}", category, style);
        }
    }
}

#[test]
fn test_lengths_stay_within_bounds() {
    let options = UsernameOptions {
        category: Category::Sanrio,
        style: StylePreset::Professional,
        batch_size: 50,
        min_length: 8,
        max_length: 12,
        include_prefix: true,
        include_suffix: true,
        avoid_ambiguous: true,
        keyword: String::new(),
    };

    let batch = generate_batch_with_rng(&options, &mut seeded(31)).unwrap();
    for name in &batch {
        let len = name.chars().count();
        assert!((8..=12).contains(&len), "'{}' has length {}", name, len);
    }
}

#[test]
fn test_numbers_style_appends_digits() {
    let options = UsernameOptions {
        category: Category::League,
        style: StylePreset::Gamer,
        batch_size: 20,
        min_length: 1,
        max_length: 40,
        avoid_ambiguous: false,
        ..Default::default()
    };

    let batch = generate_batch_with_rng(&options, &mut seeded(13)).unwrap();
    for name in &batch {
        assert!(name.chars().any(|c| c.is_ascii_digit()), "no digit in '{}'", name);
    }
}

#[test]
fn test_prefix_draws_from_the_prefix_pool() {
    let options = UsernameOptions {
        category: Category::Fruit,
        style: StylePreset::Cute,
        batch_size: 20,
        min_length: 1,
        max_length: 60,
        include_prefix: true,
        avoid_ambiguous: false,
        ..Default::default()
    };

    let batch = generate_batch_with_rng(&options, &mut seeded(17)).unwrap();
    for name in &batch {
        assert!(
            catalog::PREFIXES.iter().any(|p| name.starts_with(p)),
            "'{}' does not start with a known prefix",
            name
        );
    }
}

#[test]
fn test_seeded_generation_is_reproducible() {
    let options = UsernameOptions {
        category: Category::Anime,
        style: StylePreset::Gamer,
        batch_size: 25,
        max_length: 30,
        keyword: "yuki".to_string(),
        ..Default::default()
    };

    let first = generate_batch_with_rng(&options, &mut seeded(99)).unwrap();
    let second = generate_batch_with_rng(&options, &mut seeded(99)).unwrap();
    assert_eq!(first, second);

    let different = generate_batch_with_rng(&options, &mut seeded(100)).unwrap();
    assert_ne!(first, different);
}

#[test]
fn test_error_handling() {
    let error = UsernameForgeError::validation("test error".to_string());
    assert!(error.to_string().contains("test error"));

    let error = UsernameForgeError::config("config error".to_string());
    assert!(error.to_string().contains("config error"));
    assert!(error.user_message().contains("Configuration problem"));

    let error = UsernameForgeError::internal("internal error");
    assert!(error.to_string().contains("internal error"));
}

#[test]
fn test_style_enum_display() {
    assert_eq!(StylePreset::Gamer.to_string(), "gamer");
    assert_eq!(Category::Miscellaneous.to_string(), "miscellaneous");
    assert_eq!("pro".parse::<StylePreset>().unwrap(), StylePreset::Professional);
}
