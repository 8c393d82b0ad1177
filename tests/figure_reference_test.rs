use papervoice::infrastructure::text_processing::detect_figure_references;

#[test]
fn given_text_without_references_when_detecting_then_flag_is_false_and_list_empty() {
    let result = detect_figure_references("Plain prose about nothing visual at all.");
    assert!(!result.has_figure_reference);
    assert!(result.figure_references.is_empty());
}

#[test]
fn given_figure_and_table_mentions_when_detecting_then_returns_both_in_order() {
    let result = detect_figure_references("Results are shown in Figure 3 and Table 2.");
    assert!(result.has_figure_reference);
    assert_eq!(result.figure_references, vec!["Figure 3", "Table 2"]);
}

#[test]
fn given_lowercase_mentions_when_detecting_then_matches_case_insensitively() {
    let result = detect_figure_references("see figure 12 and TABLE 4 for details");
    assert_eq!(result.figure_references, vec!["figure 12", "TABLE 4"]);
}

#[test]
fn given_table_before_figure_when_detecting_then_orders_by_pattern_not_position() {
    // All figure matches come before all table matches, regardless of where
    // they appear in the text.
    let result = detect_figure_references("Table 1 summarizes what Figure 2 shows.");
    assert_eq!(result.figure_references, vec!["Figure 2", "Table 1"]);
}

#[test]
fn given_positional_phrases_when_detecting_then_matches_them() {
    let result =
        detect_figure_references("As shown earlier, see above; the flow is illustrated in detail.");
    assert!(result.has_figure_reference);
    assert_eq!(
        result.figure_references,
        vec!["see above", "As shown", "illustrated in"]
    );
}

#[test]
fn given_chart_graph_and_diagram_mentions_when_detecting_then_matches_each() {
    let result = detect_figure_references("Chart 5, Graph 6 and Diagram 7 agree.");
    assert_eq!(
        result.figure_references,
        vec!["Chart 5", "Graph 6", "Diagram 7"]
    );
}

#[test]
fn given_word_without_number_when_detecting_then_does_not_match() {
    let result = detect_figure_references("The figure on the left is decorative.");
    assert!(!result.has_figure_reference);
}
