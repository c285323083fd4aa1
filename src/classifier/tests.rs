use super::*;
use crate::language::{DOCUMENT_KEYWORDS, FALLBACK_CATEGORY, FALLBACK_TYPE};

fn classifier() -> Classifier {
    Classifier::new().expect("static tables must validate")
}

#[test]
fn tables_validate_at_construction() {
    assert!(Classifier::new().is_ok());
}

#[test]
fn class_scores_three_of_eleven() {
    let &(_, keywords) = DOCUMENT_KEYWORDS
        .iter()
        .find(|&&(label, _)| label == "CLASS")
        .unwrap();
    assert_eq!(keywords.len(), 11);

    let ratio = keyword_ratio(keywords, "class definition public");
    assert!((ratio - 3.0 / 11.0).abs() < 1e-9);
}

#[test]
fn full_class_source_classifies_as_class() {
    let content = "\
CLASS lcl_demo DEFINITION PUBLIC FINAL CREATE PUBLIC.
  PUBLIC SECTION.
    INTERFACES if_demo.
    METHODS run.
  PROTECTED SECTION.
  PRIVATE SECTION.
ENDCLASS.
CLASS lcl_demo IMPLEMENTATION.
  METHOD run.
  ENDMETHOD.
ENDCLASS.";
    assert_eq!(classifier().classify(content), "CLASS");
}

#[test]
fn matching_is_case_insensitive() {
    let c = classifier();
    assert_eq!(
        c.classify("function importing exporting changing tables exceptions value optional endfunction"),
        "FUNCTION MODULE"
    );
    assert_eq!(
        c.classify("FUNCTION IMPORTING EXPORTING CHANGING TABLES EXCEPTIONS VALUE OPTIONAL ENDFUNCTION"),
        "FUNCTION MODULE"
    );
}

#[test]
fn zero_matches_fall_back_to_generic() {
    assert_eq!(classifier().classify("0123456789 !@#$%"), FALLBACK_TYPE);
    assert_eq!(classifier().classify(""), FALLBACK_TYPE);
}

#[test]
fn ties_keep_first_declared_type() {
    // "define" alone scores 1/3 for ABSTRACT ENTITY, CUSTOM ENTITY and
    // SERVICE DEFINITION alike; ABSTRACT ENTITY is declared first.
    assert_eq!(classifier().classify("define"), "ABSTRACT ENTITY");
}

#[test]
fn later_type_wins_with_strictly_higher_ratio() {
    // All three INCLUDE PROGRAM keywords match (ratio 1.0), beating the
    // earlier REPORT PROGRAM's partial match.
    assert_eq!(
        classifier().classify("perform form endform"),
        "INCLUDE PROGRAM"
    );
}

#[test]
fn classification_is_deterministic() {
    let c = classifier();
    let content = "report selection-screen parameters start-of-selection perform form endform";
    assert_eq!(c.classify(content), c.classify(content));
}

#[test]
fn category_resolution_covers_every_type() {
    let c = classifier();
    for (type_label, _) in DOCUMENT_KEYWORDS {
        let category = c.category_for(type_label);
        assert_ne!(
            category, FALLBACK_CATEGORY,
            "{type_label} should belong to a real category"
        );
    }
}

#[test]
fn category_resolution_is_total() {
    let c = classifier();
    assert_eq!(c.category_for("CLASS"), "OBJECT ORIENTED");
    assert_eq!(c.category_for("EXITS"), "FUNCTION MODULE");
    assert_eq!(c.category_for("NUMBER RANGE"), "OTHER");
    assert_eq!(c.category_for(FALLBACK_TYPE), FALLBACK_CATEGORY);
    assert_eq!(c.category_for("no such type"), FALLBACK_CATEGORY);
}
