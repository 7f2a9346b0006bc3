// SPDX-FileCopyrightText: 2026 Furrow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Static per-category knowledge used by the scorers.
//!
//! Every [`QuestionType`] has exactly one profile, listed in declaration
//! order. Profiles hold keyword phrases, labeled example questions, semantic
//! keywords (lemmas), token patterns and the interrogatives typical of the
//! category.

use furrow_core::QuestionType;
use strum::EnumCount;

/// A contiguous token pattern. Each slot lists the tokens it accepts.
pub type TokenPattern = &'static [&'static [&'static str]];

/// Knowledge about one question category.
#[derive(Debug)]
pub struct CategoryProfile {
    pub question_type: QuestionType,
    /// Keyword phrases, matched against question tokens.
    pub phrases: &'static [&'static str],
    /// Labeled example questions. The first three are canonical.
    pub examples: &'static [&'static str],
    /// Lemmas that signal the category when used as nouns or verbs.
    pub semantic_keywords: &'static [&'static str],
    pub patterns: &'static [TokenPattern],
    /// Interrogatives that typically open questions of this category.
    pub expected_wh: &'static [&'static str],
}

impl CategoryProfile {
    /// Examples compared by document-vector similarity.
    pub fn canonical_examples(&self) -> &'static [&'static str] {
        &self.examples[..self.examples.len().min(CANONICAL_EXAMPLES)]
    }
}

/// Number of leading examples treated as canonical.
pub const CANONICAL_EXAMPLES: usize = 3;

/// Look up the profile of a question type.
pub fn profile(question_type: QuestionType) -> &'static CategoryProfile {
    &PROFILES[question_type as usize]
}

/// All category profiles in [`QuestionType`] declaration order.
pub static PROFILES: [CategoryProfile; QuestionType::COUNT] = [
    CategoryProfile {
        question_type: QuestionType::CropSelection,
        phrases: &[
            "crop selection",
            "which crop",
            "what crop",
            "crop variety",
            "best crop",
            "what to plant",
            "seed variety",
            "hybrid",
        ],
        examples: &[
            "What crops should I plant this season?",
            "Which corn hybrid is best suited for my region?",
            "What soybean variety should I choose for my farm?",
            "Which crops grow well in clay soil?",
            "What is the best crop to plant after wheat?",
        ],
        semantic_keywords: &[
            "crop",
            "variety",
            "hybrid",
            "seed",
            "plant",
            "grow",
            "choose",
            "select",
            "season",
            "region",
        ],
        patterns: &[
            &[&["what", "which"], &["crop", "crops", "variety", "varieties", "hybrid", "hybrids"]],
            &[&["best"], &["crop", "crops", "variety", "varieties", "hybrid"]],
            &[&["crops", "crop"], &["to"], &["plant", "grow"]],
        ],
        expected_wh: &["which"],
    },
    CategoryProfile {
        question_type: QuestionType::SoilFertility,
        phrases: &[
            "soil fertility",
            "soil health",
            "organic matter",
            "soil nutrients",
            "fertile soil",
            "improve soil",
            "soil quality",
        ],
        examples: &[
            "How can I improve my soil fertility?",
            "How do I increase organic matter in my soil?",
            "What can I do about poor soil health on my farm?",
            "How do I build up soil nutrients naturally?",
            "Why is my soil losing fertility every year?",
        ],
        semantic_keywords: &[
            "soil",
            "fertility",
            "organic",
            "matter",
            "nutrient",
            "health",
            "improve",
            "increase",
            "build",
            "compost",
        ],
        patterns: &[
            &[&["soil"], &["fertility", "health", "quality"]],
            &[&["organic"], &["matter"]],
            &[&["improve", "increase", "build"], &["my", "the"], &["soil"]],
        ],
        expected_wh: &[],
    },
    CategoryProfile {
        question_type: QuestionType::CropRotation,
        phrases: &[
            "crop rotation",
            "rotate crops",
            "rotation plan",
            "after soybeans",
            "after corn",
            "planting sequence",
        ],
        examples: &[
            "What crop rotation works best for corn and soybeans?",
            "Should I rotate my crops every year?",
            "What should I plant after soybeans?",
            "How do I plan a three year rotation?",
            "Does crop rotation reduce pest pressure?",
        ],
        semantic_keywords: &[
            "rotation",
            "rotate",
            "sequence",
            "plan",
            "succession",
            "pest",
            "continuous",
            "alternate",
        ],
        patterns: &[
            &[&["crop"], &["rotation", "rotations"]],
            &[&["rotate", "rotating"], &["my", "the"], &["crops", "fields"]],
            &[&["plant", "grow"], &["after"]],
        ],
        expected_wh: &[],
    },
    CategoryProfile {
        question_type: QuestionType::NutrientDeficiency,
        phrases: &[
            "nutrient deficiency",
            "deficiency",
            "deficient",
            "lacking nutrients",
            "yellow leaves",
            "stunted growth",
            "shortage",
        ],
        examples: &[
            "Why are my corn leaves turning yellow?",
            "What nutrient deficiency causes purple leaves?",
            "My plants show stunted growth, what is missing?",
            "How do I know if my crop is deficient in potassium?",
            "What are the symptoms of nitrogen deficiency?",
        ],
        semantic_keywords: &[
            "deficiency",
            "deficient",
            "symptom",
            "yellow",
            "yellowing",
            "stunted",
            "leaf",
            "purple",
            "lack",
            "missing",
            "shortage",
        ],
        patterns: &[
            &[
                &["nutrient", "nitrogen", "potassium", "phosphorus"],
                &["deficiency", "deficiencies"],
            ],
            &[&["leaves", "leaf"], &["turning", "are"], &["yellow", "purple", "brown"]],
            &[&["stunted"], &["growth", "plants"]],
        ],
        expected_wh: &["why"],
    },
    CategoryProfile {
        question_type: QuestionType::FertilizerType,
        phrases: &[
            "fertilizer type",
            "type of fertilizer",
            "organic fertilizer",
            "synthetic fertilizer",
            "which fertilizer",
            "slow release",
            "manure or",
        ],
        examples: &[
            "What type of fertilizer should I use for corn?",
            "Is organic fertilizer better than synthetic fertilizer?",
            "Which fertilizer is best for vegetables?",
            "Should I use manure or commercial fertilizer?",
            "What is the difference between urea and anhydrous ammonia?",
        ],
        semantic_keywords: &[
            "type",
            "kind",
            "organic",
            "synthetic",
            "urea",
            "ammonia",
            "manure",
            "commercial",
            "product",
            "formulation",
            "release",
        ],
        patterns: &[
            &[&["type", "types", "kind"], &["of"], &["fertilizer", "fertilizers"]],
            &[&["which", "what"], &["fertilizer", "fertilizers"]],
            &[&["organic", "synthetic", "commercial"], &["fertilizer", "fertilizers"]],
        ],
        expected_wh: &["which"],
    },
    CategoryProfile {
        question_type: QuestionType::FertilizerApplication,
        phrases: &[
            "fertilizer application",
            "apply fertilizer",
            "application rate",
            "how much fertilizer",
            "how much nitrogen",
            "nitrogen rate",
            "spread manure",
            "side dress",
        ],
        examples: &[
            "How much nitrogen should I apply per acre?",
            "What is the right application rate for potash?",
            "How should I apply fertilizer to my field?",
            "Should I broadcast or band my phosphorus?",
            "How do I calibrate my fertilizer spreader?",
        ],
        semantic_keywords: &[
            "apply",
            "application",
            "rate",
            "acre",
            "pound",
            "broadcast",
            "band",
            "spreader",
            "calibrate",
            "spread",
            "inject",
            "method",
        ],
        patterns: &[
            &[
                &["apply", "applying", "spread", "spreading"],
                &["fertilizer", "nitrogen", "manure", "potash", "phosphorus"],
            ],
            &[&["application"], &["rate", "rates", "method", "methods"]],
            &[&["how"], &["much"], &["fertilizer", "nitrogen", "phosphorus", "potash"]],
        ],
        expected_wh: &["how"],
    },
    CategoryProfile {
        question_type: QuestionType::FertilizerTiming,
        phrases: &[
            "fertilizer timing",
            "when to apply",
            "when should i apply",
            "timing",
            "best time",
            "spring or fall",
            "split application",
        ],
        examples: &[
            "When should I apply nitrogen to my corn?",
            "Is it better to fertilize in spring or fall?",
            "What is the best time to apply fertilizer?",
            "When is the right time to side dress corn?",
            "How early can I apply fertilizer before planting?",
        ],
        semantic_keywords: &[
            "timing",
            "time",
            "when",
            "spring",
            "fall",
            "early",
            "late",
            "season",
            "before",
            "split",
            "schedule",
        ],
        patterns: &[
            &[
                &["when"],
                &["should", "do", "can", "to"],
                &["i", "we"],
                &["apply", "fertilize", "spread"],
            ],
            &[&["when"], &["to"], &["apply", "fertilize", "spread"]],
            &[&["best", "right"], &["time"], &["to"]],
        ],
        expected_wh: &["when"],
    },
    CategoryProfile {
        question_type: QuestionType::EnvironmentalImpact,
        phrases: &[
            "environmental impact",
            "runoff",
            "water quality",
            "leaching",
            "environment",
            "pollution",
            "nutrient loss",
        ],
        examples: &[
            "How can I reduce nitrogen runoff from my fields?",
            "What is the environmental impact of my fertilizer use?",
            "How do I prevent nutrient leaching into groundwater?",
            "Does my farm affect local water quality?",
            "How can I lower greenhouse gas emissions from fertilizer?",
        ],
        semantic_keywords: &[
            "environment",
            "environmental",
            "runoff",
            "leaching",
            "pollution",
            "groundwater",
            "water",
            "emission",
            "impact",
            "loss",
            "stream",
        ],
        patterns: &[
            &[&["environmental"], &["impact", "impacts"]],
            &[&["reduce", "prevent"], &["runoff", "leaching", "pollution"]],
            &[&["water"], &["quality"]],
        ],
        expected_wh: &[],
    },
    CategoryProfile {
        question_type: QuestionType::CoverCrops,
        phrases: &[
            "cover crop",
            "cover crops",
            "cover cropping",
            "green manure",
            "winter cover",
            "erosion control",
            "crimson clover",
            "cereal rye",
        ],
        examples: &[
            "What cover crops should I plant this fall?",
            "Which cover crop is best for erosion control?",
            "Will cereal rye work as a winter cover crop?",
            "How do cover crops improve sandy soil?",
            "When should I terminate my cover crop?",
        ],
        semantic_keywords: &[
            "cover",
            "erosion",
            "rye",
            "clover",
            "radish",
            "vetch",
            "terminate",
            "termination",
            "winter",
            "manure",
        ],
        patterns: &[
            &[&["cover"], &["crop", "crops", "cropping"]],
            &[&["green"], &["manure"]],
            &[&["erosion"], &["control"]],
        ],
        expected_wh: &[],
    },
    CategoryProfile {
        question_type: QuestionType::SoilPh,
        phrases: &[
            "soil ph",
            "ph level",
            "lime",
            "acidic soil",
            "alkaline soil",
            "raise ph",
            "lower ph",
            "soil acidity",
        ],
        examples: &[
            "How do I raise the pH of my acidic soil?",
            "How much lime should I apply to my field?",
            "What is the ideal soil pH for soybeans?",
            "Is my soil too alkaline for blueberries?",
            "How can I lower soil pH naturally?",
        ],
        semantic_keywords: &[
            "ph",
            "lime",
            "acidic",
            "alkaline",
            "acidity",
            "sulfur",
            "raise",
            "lower",
            "liming",
            "limestone",
        ],
        patterns: &[
            &[&["soil"], &["ph"]],
            &[&["raise", "lower", "increase", "decrease"], &["the", "my", "soil"], &["ph"]],
            &[&["apply", "spread"], &["lime", "limestone"]],
        ],
        expected_wh: &[],
    },
    CategoryProfile {
        question_type: QuestionType::Micronutrients,
        phrases: &[
            "micronutrient",
            "micronutrients",
            "zinc",
            "boron",
            "manganese",
            "iron",
            "copper",
            "trace elements",
        ],
        examples: &[
            "Do my crops need zinc or boron?",
            "How do I correct a manganese deficiency in soybeans?",
            "Should I apply micronutrients to my corn?",
            "What trace elements are important for alfalfa?",
            "How do I test for iron levels in my soil?",
        ],
        semantic_keywords: &[
            "micronutrient",
            "zinc",
            "boron",
            "manganese",
            "iron",
            "copper",
            "molybdenum",
            "trace",
            "element",
            "sulfur",
        ],
        patterns: &[
            &[
                &["zinc", "boron", "manganese", "iron", "copper"],
                &["deficiency", "levels", "level"],
            ],
            &[&["trace"], &["elements", "element"]],
            &[&["micronutrient", "micronutrients"]],
        ],
        expected_wh: &[],
    },
    CategoryProfile {
        question_type: QuestionType::PrecisionAgriculture,
        phrases: &[
            "precision agriculture",
            "precision farming",
            "variable rate",
            "yield map",
            "gps",
            "drone",
            "sensors",
            "technology",
        ],
        examples: &[
            "Is precision agriculture worth it for my farm?",
            "How do I use yield maps to improve my fertilizer plan?",
            "Should I invest in variable rate technology?",
            "Can drones help me monitor crop health?",
            "How do soil sensors work for precision farming?",
        ],
        semantic_keywords: &[
            "precision",
            "technology",
            "drone",
            "sensor",
            "gps",
            "map",
            "variable",
            "data",
            "monitor",
            "satellite",
        ],
        patterns: &[
            &[&["precision"], &["agriculture", "farming", "ag"]],
            &[&["variable"], &["rate"]],
            &[&["yield"], &["map", "maps", "mapping"]],
        ],
        expected_wh: &[],
    },
    CategoryProfile {
        question_type: QuestionType::DroughtManagement,
        phrases: &[
            "drought",
            "dry conditions",
            "water stress",
            "irrigation",
            "conserve water",
            "moisture",
            "dry season",
        ],
        examples: &[
            "How can I protect my crops from drought?",
            "What practices help conserve soil moisture?",
            "Should I irrigate my corn during dry conditions?",
            "Which crops are most drought tolerant?",
            "How do I manage water stress in soybeans?",
        ],
        semantic_keywords: &[
            "drought",
            "dry",
            "water",
            "moisture",
            "irrigation",
            "irrigate",
            "stress",
            "conserve",
            "tolerant",
            "rain",
        ],
        patterns: &[
            &[&["drought"], &["tolerant", "resistant", "stress", "conditions"]],
            &[&["conserve", "save", "retain"], &["water", "moisture"]],
            &[&["water"], &["stress"]],
        ],
        expected_wh: &[],
    },
    CategoryProfile {
        question_type: QuestionType::DeficiencyDetection,
        phrases: &[
            "detect deficiency",
            "photo",
            "picture",
            "image",
            "identify",
            "diagnose",
            "leaf photo",
            "visual",
        ],
        examples: &[
            "Can you tell from this photo what my plants are missing?",
            "How do I identify nutrient deficiency from leaf pictures?",
            "Can I upload an image of my crop to diagnose a problem?",
            "What does this leaf discoloration mean?",
            "How can I visually detect deficiencies in the field?",
        ],
        semantic_keywords: &[
            "photo",
            "picture",
            "image",
            "identify",
            "diagnose",
            "detect",
            "visual",
            "discoloration",
            "upload",
            "spot",
        ],
        patterns: &[
            &[&["this", "a", "my"], &["photo", "picture", "image"]],
            &[
                &["identify", "diagnose", "detect"],
                &["deficiency", "deficiencies", "problem", "problems"],
            ],
            &[&["upload", "send"], &["a", "an", "this"]],
        ],
        expected_wh: &[],
    },
    CategoryProfile {
        question_type: QuestionType::TillagePractices,
        phrases: &[
            "tillage",
            "no till",
            "no-till",
            "conservation tillage",
            "plowing",
            "strip till",
            "reduced tillage",
        ],
        examples: &[
            "Should I switch to no-till farming?",
            "What are the benefits of conservation tillage?",
            "Is strip till better than conventional tillage?",
            "How does plowing affect soil structure?",
            "When should I do fall tillage?",
        ],
        semantic_keywords: &[
            "tillage",
            "till",
            "plow",
            "plowing",
            "disk",
            "conventional",
            "conservation",
            "compaction",
            "structure",
            "residue",
        ],
        patterns: &[
            &[&["no", "strip", "reduced", "conservation", "conventional"], &["till", "tillage"]],
            &[&["plowing", "plow", "disking"]],
            &[&["fall", "spring"], &["tillage"]],
        ],
        expected_wh: &[],
    },
    CategoryProfile {
        question_type: QuestionType::CostEffectiveFertilizer,
        phrases: &[
            "cost effective",
            "cheap fertilizer",
            "fertilizer cost",
            "save money",
            "budget",
            "price",
            "return on investment",
            "affordable",
        ],
        examples: &[
            "What is the most cost effective fertilizer program?",
            "How can I save money on fertilizer this year?",
            "Is it worth paying more for slow release fertilizer?",
            "How do I cut my fertilizer costs without losing yield?",
            "What fertilizer gives the best return on investment?",
        ],
        semantic_keywords: &[
            "cost",
            "price",
            "money",
            "cheap",
            "budget",
            "afford",
            "affordable",
            "economic",
            "profit",
            "return",
            "investment",
            "save",
        ],
        patterns: &[
            &[&["cost"], &["effective", "efficient"]],
            &[&["save", "saving", "cut"], &["money", "costs", "cost"]],
            &[&["return"], &["on"], &["investment"]],
        ],
        expected_wh: &[],
    },
    CategoryProfile {
        question_type: QuestionType::WeatherImpact,
        phrases: &["weather", "rain", "forecast", "frost", "temperature", "heavy rain", "climate"],
        examples: &[
            "How will heavy rain affect my nitrogen?",
            "Should I delay planting because of the cold forecast?",
            "What does an early frost mean for my soybeans?",
            "How does hot weather affect corn pollination?",
            "Will the rain wash away my fertilizer?",
        ],
        semantic_keywords: &[
            "weather",
            "rain",
            "forecast",
            "frost",
            "temperature",
            "heat",
            "cold",
            "climate",
            "storm",
            "wet",
        ],
        patterns: &[
            &[&["heavy", "forecast", "expected"], &["rain", "rainfall"]],
            &[&["early", "late"], &["frost"]],
            &[&["weather"], &["forecast", "conditions"]],
        ],
        expected_wh: &[],
    },
    CategoryProfile {
        question_type: QuestionType::TestingIntegration,
        phrases: &[
            "soil test",
            "soil testing",
            "test results",
            "lab results",
            "soil sample",
            "tissue test",
            "sampling",
        ],
        examples: &[
            "How do I read my soil test results?",
            "How often should I take soil samples?",
            "Can you interpret my soil lab report?",
            "When is the best time to soil test?",
            "Should I do a plant tissue test this season?",
        ],
        semantic_keywords: &[
            "test",
            "testing",
            "sample",
            "sampling",
            "lab",
            "report",
            "result",
            "analysis",
            "interpret",
            "tissue",
        ],
        patterns: &[
            &[&["soil", "tissue", "plant"], &["test", "tests", "testing", "sample", "samples"]],
            &[&["test", "lab"], &["results", "report"]],
            &[&["interpret", "read"], &["my", "the"]],
        ],
        expected_wh: &[],
    },
    CategoryProfile {
        question_type: QuestionType::SustainableYield,
        phrases: &[
            "sustainable",
            "sustainability",
            "long term yield",
            "maximize yield",
            "increase yield",
            "yield goals",
            "regenerative",
        ],
        examples: &[
            "How can I increase yields sustainably?",
            "What practices improve long term productivity?",
            "How do I balance high yields with sustainability?",
            "Is regenerative agriculture profitable?",
            "How can I maintain yields while using less fertilizer?",
        ],
        semantic_keywords: &[
            "sustainable",
            "sustainability",
            "yield",
            "productivity",
            "regenerative",
            "long",
            "maintain",
            "balance",
            "maximize",
        ],
        patterns: &[
            &[
                &["increase", "maximize", "maintain", "improve"],
                &["yield", "yields", "productivity"],
            ],
            &[&["long"], &["term"]],
            &[&["regenerative"], &["agriculture", "farming"]],
        ],
        expected_wh: &[],
    },
    CategoryProfile {
        question_type: QuestionType::GovernmentPrograms,
        phrases: &[
            "government program",
            "cost share",
            "subsidy",
            "grant",
            "usda",
            "nrcs",
            "eqip",
            "incentive",
        ],
        examples: &[
            "Are there government programs that pay for cover crops?",
            "How do I apply for an NRCS cost share program?",
            "Does the USDA offer grants for conservation practices?",
            "What subsidies are available for farmers?",
            "Am I eligible for EQIP funding?",
        ],
        semantic_keywords: &[
            "government",
            "program",
            "subsidy",
            "grant",
            "usda",
            "nrcs",
            "eqip",
            "incentive",
            "funding",
            "eligible",
            "payment",
        ],
        patterns: &[
            &[&["cost"], &["share"]],
            &[&["government", "federal", "state"], &["program", "programs"]],
            &[&["usda", "nrcs", "eqip", "fsa"]],
        ],
        expected_wh: &[],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn profiles_follow_declaration_order() {
        for (profile, question_type) in PROFILES.iter().zip(QuestionType::iter()) {
            assert_eq!(profile.question_type, question_type);
        }
    }

    #[test]
    fn every_profile_is_populated() {
        for profile in &PROFILES {
            assert!(!profile.phrases.is_empty(), "{}", profile.question_type);
            assert!(profile.examples.len() >= CANONICAL_EXAMPLES, "{}", profile.question_type);
            assert!(!profile.semantic_keywords.is_empty(), "{}", profile.question_type);
            assert!(!profile.patterns.is_empty(), "{}", profile.question_type);
        }
    }

    #[test]
    fn pattern_slots_are_non_empty() {
        for profile in &PROFILES {
            for pattern in profile.patterns {
                assert!(!pattern.is_empty());
                assert!(pattern.iter().all(|slot| !slot.is_empty()));
            }
        }
    }

    #[test]
    fn lookup_by_type() {
        assert_eq!(profile(QuestionType::SoilPh).question_type, QuestionType::SoilPh);
        assert_eq!(profile(QuestionType::FertilizerTiming).expected_wh, &["when"]);
    }
}
