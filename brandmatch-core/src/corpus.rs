//! Batch matching across a dialogue corpus.
//!
//! Each dialogue's matching call is independent and the
//! [`VariantIndex`] is read-only, so the corpus runs as a rayon
//! parallel map with per-worker matcher scratch. Output records carry
//! their own dialogue identifier; completion order carries no meaning.

use crate::index::{Matcher, VariantIndex};
use brandmatch_types::{Dialogue, DialogueMatches, GroundTruthLabel};
use rayon::prelude::*;
use tracing::{info, warn};

/// Parses a raw ground-truth label field into brand names.
///
/// The field arrives as a JSON array of `{"brand": ...}` objects or
/// bare strings. The result is explicit so the caller's
/// fallback-to-empty policy is an auditable branch, not an implicit
/// catch-all.
///
/// # Errors
///
/// Returns the underlying JSON error for malformed input.
pub fn parse_ground_truth(raw: &str) -> Result<Vec<String>, serde_json::Error> {
    let labels: Vec<GroundTruthLabel> = serde_json::from_str(raw)?;
    Ok(labels.into_iter().map(GroundTruthLabel::into_brand).collect())
}

/// Matches one dialogue, passing its ground truth through for
/// downstream scoring.
///
/// Malformed ground truth degrades scoring, never the batch: the
/// fallback to an empty label list is deliberate and logged.
pub fn match_dialogue(
    index: &VariantIndex,
    matcher: &mut Matcher,
    dialogue: &Dialogue,
) -> DialogueMatches {
    let ground_truth = match dialogue.ground_truth.as_deref() {
        None => Vec::new(),
        Some(raw) if raw.trim().is_empty() => Vec::new(),
        Some(raw) => match parse_ground_truth(raw) {
            Ok(labels) => labels,
            Err(err) => {
                warn!(id = %dialogue.id, %err, "unparseable ground truth, defaulting to empty");
                Vec::new()
            }
        },
    };

    let candidates = matcher.find_candidates(index, &dialogue.text);

    DialogueMatches {
        id: dialogue.id.clone(),
        text: dialogue.text.clone(),
        ground_truth,
        candidates,
    }
}

/// Matches every dialogue of a corpus against one shared index.
///
/// Dialogues are processed in parallel; results come back in input
/// order, one record per dialogue.
pub fn match_corpus(index: &VariantIndex, dialogues: &[Dialogue]) -> Vec<DialogueMatches> {
    info!(dialogues = dialogues.len(), "matching corpus");

    let results: Vec<DialogueMatches> = dialogues
        .par_iter()
        .map_init(Matcher::new, |matcher, dialogue| {
            match_dialogue(index, matcher, dialogue)
        })
        .collect();

    let with_matches = results
        .iter()
        .filter(|r| !r.candidates.is_empty())
        .count();
    let total_candidates: usize = results.iter().map(|r| r.candidates.len()).sum();
    info!(with_matches, total_candidates, "corpus matching complete");

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::IndexBuilder;
    use brandmatch_types::{
        BrandVariants, GenerationStatus, SynonymRecord, SynonymResponse,
    };

    fn test_index() -> VariantIndex {
        let mut builder = IndexBuilder::new();
        for (brand, variant) in [("Ozon", "озон"), ("Avito", "авито")] {
            builder.add_record(&SynonymRecord {
                original_brand: brand.to_owned(),
                status: GenerationStatus::Success,
                response: Some(SynonymResponse {
                    items: vec![BrandVariants {
                        original: brand.to_owned(),
                        exact_variants: vec![variant.to_owned()],
                        ..Default::default()
                    }],
                }),
            });
        }
        builder.build()
    }

    fn dialogue(id: &str, text: &str, ground_truth: Option<&str>) -> Dialogue {
        Dialogue {
            id: id.to_owned(),
            text: text.to_owned(),
            ground_truth: ground_truth.map(str::to_owned),
        }
    }

    #[test]
    fn parse_ground_truth_object_form() {
        let labels = parse_ground_truth(r#"[{"brand": "Ozon"}, {"brand": "Avito"}]"#).unwrap();
        assert_eq!(labels, ["Ozon", "Avito"]);
    }

    #[test]
    fn parse_ground_truth_string_form() {
        let labels = parse_ground_truth(r#"["Ozon"]"#).unwrap();
        assert_eq!(labels, ["Ozon"]);
    }

    #[test]
    fn parse_ground_truth_rejects_malformed_json() {
        assert!(parse_ground_truth("[{").is_err());
        assert!(parse_ground_truth("not json").is_err());
    }

    #[test]
    fn malformed_ground_truth_falls_back_to_empty() {
        let index = test_index();
        let mut matcher = Matcher::new();
        let record = match_dialogue(
            &index,
            &mut matcher,
            &dialogue("1", "купи на озон", Some("[{broken")),
        );
        assert!(record.ground_truth.is_empty());
        // Matching is unaffected by the bad label field.
        assert_eq!(record.candidates.len(), 1);
    }

    #[test]
    fn missing_and_blank_ground_truth_are_empty() {
        let index = test_index();
        let mut matcher = Matcher::new();

        let none = match_dialogue(&index, &mut matcher, &dialogue("1", "текст", None));
        assert!(none.ground_truth.is_empty());

        let blank = match_dialogue(&index, &mut matcher, &dialogue("2", "текст", Some("  ")));
        assert!(blank.ground_truth.is_empty());
    }

    #[test]
    fn corpus_records_keep_ids_and_text() {
        let index = test_index();
        let dialogues = vec![
            dialogue("a", "на озон и авито", Some(r#"[{"brand": "Ozon"}]"#)),
            dialogue("b", "ничего", None),
            dialogue("c", "только авито", None),
        ];

        let results = match_corpus(&index, &dialogues);
        assert_eq!(results.len(), 3);

        assert_eq!(results[0].id, "a");
        assert_eq!(results[0].text, "на озон и авито");
        assert_eq!(results[0].ground_truth, ["Ozon"]);
        assert_eq!(results[0].candidates.len(), 2);

        assert_eq!(results[1].id, "b");
        assert!(results[1].candidates.is_empty());

        assert_eq!(results[2].id, "c");
        assert_eq!(results[2].candidates.len(), 1);
        assert_eq!(results[2].candidates[0].brand, "Avito");
    }

    #[test]
    fn parallel_batch_matches_serial_results() {
        let index = test_index();
        let dialogues: Vec<Dialogue> = (0..200)
            .map(|i| {
                let text = if i % 3 == 0 {
                    format!("диалог {i} про озон")
                } else {
                    format!("диалог {i} без брендов")
                };
                dialogue(&i.to_string(), &text, None)
            })
            .collect();

        let parallel = match_corpus(&index, &dialogues);

        let mut matcher = Matcher::new();
        for (record, d) in parallel.iter().zip(&dialogues) {
            let serial = match_dialogue(&index, &mut matcher, d);
            assert_eq!(record.id, serial.id);
            assert_eq!(record.candidates, serial.candidates);
        }
    }

    #[test]
    fn empty_corpus_yields_no_records() {
        let index = test_index();
        assert!(match_corpus(&index, &[]).is_empty());
    }
}
