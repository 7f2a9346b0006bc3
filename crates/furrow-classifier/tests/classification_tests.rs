// SPDX-FileCopyrightText: 2026 Furrow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end classification tests over the built-in corpus.

use furrow_classifier::QuestionClassifier;
use furrow_config::model::{ClassifierConfig, NlpConfig, ScorerKind};
use furrow_core::QuestionType;
use furrow_nlp::STOP_WORDS;
use proptest::prelude::*;

const COVER_CROP_QUESTION: &str = "What cover crops work best in my sandy soil for erosion control?";
const TIMING_QUESTION: &str = "When should I apply nitrogen fertilizer to my corn field?";

fn full() -> QuestionClassifier {
    QuestionClassifier::new(&ClassifierConfig::default(), &NlpConfig::default())
}

fn only(kind: ScorerKind) -> QuestionClassifier {
    let config = ClassifierConfig {
        scorers: vec![kind],
        ..ClassifierConfig::default()
    };
    QuestionClassifier::new(&config, &NlpConfig::default())
}

#[test]
fn cover_crop_question() {
    let result = full().classify(COVER_CROP_QUESTION);
    assert_eq!(result.question_type, QuestionType::CoverCrops);
    assert!(result.confidence_score > 0.5);
    assert!(!result.alternative_types.contains(&QuestionType::CoverCrops));
}

#[test]
fn cover_crop_question_agrees_across_scorers() {
    for kind in [ScorerKind::Pattern, ScorerKind::Semantic, ScorerKind::Keyword] {
        let result = only(kind).classify(COVER_CROP_QUESTION);
        assert_eq!(
            result.question_type,
            QuestionType::CoverCrops,
            "{} scorer alone",
            kind.as_str()
        );
    }
}

#[test]
fn cover_crop_question_with_keyword_scorer_and_no_nlp() {
    let nlp = NlpConfig {
        linguistic: false,
        vectors: false,
        tfidf: false,
    };
    let classifier = QuestionClassifier::new(&ClassifierConfig::default(), &nlp);
    assert_eq!(classifier.scorer_kinds(), vec![ScorerKind::Keyword]);
    let result = classifier.classify(COVER_CROP_QUESTION);
    assert_eq!(result.question_type, QuestionType::CoverCrops);
}

#[test]
fn fertilizer_timing_question() {
    let result = full().classify(TIMING_QUESTION);
    assert_eq!(result.question_type, QuestionType::FertilizerTiming);
    assert_eq!(
        result.alternative_types,
        vec![QuestionType::FertilizerApplication]
    );
}

#[test]
fn fertilizer_timing_from_linguistic_features_alone() {
    let result = only(ScorerKind::Linguistic).classify(TIMING_QUESTION);
    assert_eq!(result.question_type, QuestionType::FertilizerTiming);
}

#[test]
fn nonsense_falls_back() {
    let classifier = full();
    for text in ["zxqv plorth wibbly grznak ftang", "asdkjh qwpoeiru zmxncb lkjasd"] {
        let detailed = classifier.classify_detailed(text);
        assert!(detailed.fallback, "{text}");
        assert_eq!(detailed.result.question_type, QuestionType::CropSelection);
        assert!((0.2..=0.3).contains(&detailed.result.confidence_score));
        assert!(detailed.result.alternative_types.is_empty());
        assert!(!detailed.result.reasoning.is_empty());
    }
}

fn assert_fallback(classifier: &QuestionClassifier, text: &str) {
    let detailed = classifier.classify_detailed(text);
    assert!(detailed.fallback, "{text} -> {:?}", detailed.result);
    assert_eq!(detailed.result.question_type, QuestionType::CropSelection);
    assert_eq!(detailed.result.confidence_score, 0.25);
    assert!(detailed.totals.values().all(|score| *score <= 0.0));
}

#[test]
fn stop_word_only_questions_fall_back() {
    let classifier = full();
    for text in [
        "When should I do it to them?",
        "What is it that I should do?",
        "Why would they do that to us?",
        "When and where should I do it?",
    ] {
        assert_fallback(&classifier, text);
    }
}

#[test]
fn random_characters_with_short_tokens_fall_back() {
    let classifier = full();
    for text in ["a8f3k2 n p k zz9 x1 i o", "which 0n5 me 8 mp5"] {
        assert_fallback(&classifier, text);
    }
}

#[test]
fn soil_ph_question() {
    let result = full().classify("How do I raise the pH of my acidic soil?");
    assert_eq!(result.question_type, QuestionType::SoilPh);
}

#[test]
fn photo_question_routes_to_image_detection() {
    let result = full().classify("Can I upload a picture of my soybean leaves to diagnose them?");
    assert_eq!(result.question_type, QuestionType::DeficiencyDetection);
}

#[test]
fn cost_share_question() {
    let result = full().classify("Are there any USDA cost share programs for no-till?");
    assert_eq!(result.question_type, QuestionType::GovernmentPrograms);
    assert!(
        result
            .alternative_types
            .contains(&QuestionType::TillagePractices)
    );
}

#[test]
fn yellow_leaves_question() {
    let result = full().classify("My corn leaves are turning yellow, what nutrient is missing?");
    assert_eq!(result.question_type, QuestionType::NutrientDeficiency);
}

#[test]
fn detailed_totals_match_breakdown() {
    let detailed = full().classify_detailed(COVER_CROP_QUESTION);
    let summed: f64 = detailed
        .breakdown
        .iter()
        .filter_map(|outcome| outcome.scores.as_ref())
        .filter_map(|scores| scores.get(&QuestionType::CoverCrops))
        .sum();
    assert!((detailed.totals[&QuestionType::CoverCrops] - summed).abs() < 1e-9);
}

#[test]
fn classification_is_deterministic() {
    let classifier = full();
    let first = classifier.classify(TIMING_QUESTION);
    let second = classifier.classify(TIMING_QUESTION);
    assert_eq!(first, second);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn results_are_well_formed(text in "[a-zA-Z ?,']{10,200}") {
        let result = full().classify(&text);
        prop_assert!((0.0..=1.0).contains(&result.confidence_score));
        prop_assert!(result.alternative_types.len() <= 2);
        prop_assert!(!result.alternative_types.contains(&result.question_type));
        prop_assert!(!result.reasoning.is_empty());
    }

    #[test]
    fn stop_words_alone_always_fall_back(
        words in prop::collection::vec(prop::sample::select(STOP_WORDS), 1..12)
    ) {
        let detailed = full().classify_detailed(&words.join(" "));
        prop_assert!(detailed.fallback);
        prop_assert_eq!(detailed.result.confidence_score, 0.25);
    }

    #[test]
    fn stop_words_mixed_with_gibberish_fall_back(
        words in prop::collection::vec(
            prop_oneof![
                prop::sample::select(STOP_WORDS).prop_map(str::to_string),
                "[bcdfgjkmnpqvwxz0-9]{1,4}",
            ],
            1..10,
        )
    ) {
        let detailed = full().classify_detailed(&words.join(" "));
        prop_assert!(detailed.fallback);
        prop_assert_eq!(detailed.result.question_type, QuestionType::CropSelection);
    }

    #[test]
    fn empty_ensemble_always_falls_back(text in "\\PC{10,120}") {
        let config = ClassifierConfig {
            scorers: vec![],
            ..ClassifierConfig::default()
        };
        let result = QuestionClassifier::new(&config, &NlpConfig::default()).classify(&text);
        prop_assert_eq!(result.question_type, QuestionType::CropSelection);
        prop_assert_eq!(result.confidence_score, 0.25);
    }
}
