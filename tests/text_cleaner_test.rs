use papervoice::infrastructure::text_processing::clean_for_speech;

#[test]
fn given_text_with_whitespace_runs_when_cleaning_then_collapses_to_single_spaces() {
    let input = "hello    world\n\ttest";
    assert_eq!(clean_for_speech(input), "hello world test");
}

#[test]
fn given_already_cleaned_text_when_cleaning_again_then_output_is_unchanged() {
    let input = "some   messy\n\n  text   here";
    let once = clean_for_speech(input);
    let twice = clean_for_speech(&once);
    assert_eq!(once, twice);
}

#[test]
fn given_sentence_break_without_space_when_cleaning_then_inserts_space() {
    let input = "End of sentence.Next sentence";
    assert_eq!(clean_for_speech(input), "End of sentence. Next sentence");
}

#[test]
fn given_clause_break_without_space_when_cleaning_then_inserts_space() {
    let input = "first clause,Then more";
    assert_eq!(clean_for_speech(input), "first clause, Then more");
}

#[test]
fn given_period_followed_by_lowercase_when_cleaning_then_leaves_it_alone() {
    let input = "version 2.x is stable";
    assert_eq!(clean_for_speech(input), "version 2.x is stable");
}

#[test]
fn given_each_known_abbreviation_when_cleaning_then_expands_to_spoken_form() {
    assert_eq!(clean_for_speech("Smith et al. found"), "Smith et al found");
    assert_eq!(clean_for_speech("fruit, e.g. apples"), "fruit, for example apples");
    assert_eq!(clean_for_speech("the root, i.e. the cause"), "the root, that is the cause");
    assert_eq!(clean_for_speech("cats vs. dogs"), "cats versus dogs");
    assert_eq!(clean_for_speech("pens, paper etc. were sold"), "pens, paper et cetera were sold");
}

#[test]
fn given_differently_cased_abbreviation_when_cleaning_then_does_not_replace() {
    let input = "Cats Vs. dogs";
    // Case-sensitive match: "Vs." is not the listed "vs.".
    assert_eq!(clean_for_speech(input), "Cats Vs. dogs");
}

#[test]
fn given_repeated_abbreviation_when_cleaning_then_replaces_every_occurrence() {
    let input = "e.g. one, e.g. two";
    assert_eq!(clean_for_speech(input), "for example one, for example two");
}

#[test]
fn given_leading_and_trailing_whitespace_when_cleaning_then_trims() {
    let input = "   padded text   ";
    assert_eq!(clean_for_speech(input), "padded text");
}

#[test]
fn given_empty_text_when_cleaning_then_returns_empty() {
    assert_eq!(clean_for_speech(""), "");
}
