// Vasudeva Integration Tests
//
// Translation invariants over the built-in table, checked through the
// public API only.
//
// Run with: cargo test -p vasudeva-core --test integration_test

use proptest::prelude::*;

use vasudeva_core::alphabet::simple_lowercase;
use vasudeva_core::{
    translate_forward, translate_reverse, vasudeva, ConfigurationError, Direction, GlyphTable,
    TransliterationEngine, VASUDEVA_GLYPHS,
};

fn is_letter_case_insensitive(c: char) -> bool {
    simple_lowercase(c).is_some_and(|l| l.is_ascii_lowercase())
}

fn glyph_strategy() -> impl Strategy<Value = char> {
    prop::sample::select(VASUDEVA_GLYPHS.iter().map(|(_, g)| *g).collect::<Vec<_>>())
}

#[test]
fn test_every_letter_round_trips_to_lowercase() {
    for (letter, _) in VASUDEVA_GLYPHS {
        let upper = letter.to_ascii_uppercase();
        assert_eq!(translate_reverse(&translate_forward(&letter.to_string())), letter.to_string());
        assert_eq!(translate_reverse(&translate_forward(&upper.to_string())), letter.to_string());
    }
}

#[test]
fn test_pair_scenario() {
    assert_eq!(translate_forward("ab AB"), "Δ∇ Δ∇");
    assert_eq!(translate_reverse("Δ∇ Δ∇"), "ab ab");
}

#[test]
fn test_case_collapse() {
    assert_eq!(translate_forward("Cat"), translate_forward("cat"));
    assert_eq!(translate_forward("CAT"), translate_forward("cat"));
}

#[test]
fn test_digits_and_punctuation_pass_through() {
    assert_eq!(translate_forward("3.14!"), "3.14!");
}

#[test]
fn test_sentence_round_trip_loses_case_only() {
    let original = "Good Vibes, Only! 100%";
    let glyphs = translate_forward(original);
    assert_eq!(glyphs, "/⊗⊗□ ∨•∇|∿, ⊗NLY! 100%");
    assert_eq!(translate_reverse(&glyphs), "good vibes, only! 100%");
}

#[test]
fn test_glyph_collision_with_plain_text_in_reverse() {
    // Uppercase L, M, N, W, Y, Z and | / \ are glyphs, so plain text using
    // them is read as glyphs on the way back.
    assert_eq!(translate_reverse("LMNWYZ"), "lmnwyz");
    assert_eq!(translate_reverse("a/b|c\\d"), "agbechd");
}

#[test]
fn test_construction_failure_happens_before_any_translation() {
    let mut pairs = VASUDEVA_GLYPHS.to_vec();
    pairs[1].1 = pairs[0].1;
    let result = GlyphTable::new("broken", pairs);
    assert!(matches!(
        result,
        Err(ConfigurationError::DuplicateGlyph { first: 'a', second: 'b', .. })
    ));
}

#[test]
fn test_custom_table_engine() {
    // Shift every glyph to the Mathematical Bold Fraktur capitals
    let pairs = ('a'..='z').zip('𝕬'..='𝖅');
    let engine = TransliterationEngine::new(GlyphTable::new("Fraktur", pairs).unwrap());
    assert_eq!(engine.translate_forward("Hi!"), "𝕳𝕴!");
    assert_eq!(engine.translate_reverse("𝕳𝕴!"), "hi!");
    // Built-in glyphs mean nothing to this table
    assert_eq!(engine.translate_reverse("Δ∇"), "Δ∇");
}

#[test]
fn test_shared_engine_across_threads() {
    let inputs = ["alpha", "Beta", "gamma delta", "3.14!", ""];
    let expected: Vec<String> = inputs.iter().map(|s| translate_forward(s)).collect();

    std::thread::scope(|scope| {
        let handles: Vec<_> = inputs
            .iter()
            .map(|input| scope.spawn(move || vasudeva().translate(Direction::Forward, input)))
            .collect();
        for (handle, want) in handles.into_iter().zip(&expected) {
            assert_eq!(&handle.join().unwrap(), want);
        }
    });
}

proptest! {
    #[test]
    fn length_is_preserved(text in "\\PC*") {
        prop_assert_eq!(translate_forward(&text).chars().count(), text.chars().count());
        prop_assert_eq!(translate_reverse(&text).chars().count(), text.chars().count());
    }

    #[test]
    fn unmapped_chars_pass_through(c in any::<char>()) {
        let engine = vasudeva();
        prop_assume!(!is_letter_case_insensitive(c));
        prop_assume!(!engine.table().is_glyph(c));

        let s = c.to_string();
        prop_assert_eq!(engine.translate_forward(&s), s.clone());
        prop_assert_eq!(engine.translate_reverse(&s), s);
    }

    #[test]
    fn forward_then_reverse_lowercases(text in "[a-zA-Z0-9 ,.!?]*") {
        prop_assert_eq!(translate_reverse(&translate_forward(&text)), text.to_ascii_lowercase());
    }

    #[test]
    fn reverse_then_forward_is_identity_on_glyph_text(
        parts in prop::collection::vec(
            prop_oneof![
                glyph_strategy(),
                prop::sample::select(vec![' ', '.', ',', '!', '?', '0', '7', '\n', '☆']),
            ],
            0..64,
        )
    ) {
        let text: String = parts.into_iter().collect();
        prop_assert_eq!(translate_forward(&translate_reverse(&text)), text);
    }

    #[test]
    fn stats_account_for_every_char(text in "\\PC*", reverse in any::<bool>()) {
        let direction = if reverse { Direction::Reverse } else { Direction::Forward };
        let result = vasudeva().translate_with_stats(direction, &text);
        prop_assert_eq!(result.len(), text.chars().count());
        prop_assert_eq!(result.text, vasudeva().translate(direction, &text));
    }
}
