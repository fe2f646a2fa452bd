use dirprobe_core::{format_match_line, DISPLAY_WIDTH};

#[test]
fn match_line_pads_the_word_to_the_display_width() {
    let line = format_match_line("admin", 200, 1234);
    assert_eq!(
        line,
        "/admin                                     [ Status: 200  Length: 1234 ]"
    );
    // "/" + padded word + two spaces before the bracket.
    assert_eq!(line.find('['), Some(1 + DISPLAY_WIDTH + 2));
}

#[test]
fn long_words_are_not_truncated() {
    let word = "a".repeat(DISPLAY_WIDTH + 7);
    let line = format_match_line(&word, 403, 0);
    assert!(line.starts_with(&format!("/{word}")));
    assert!(line.ends_with("[ Status: 403  Length: 0 ]"));
}
