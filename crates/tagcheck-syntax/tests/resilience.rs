use tagcheck_syntax::{ScanMode, TagKind, TagScanner};

#[test]
fn test_garbage_does_not_panic() {
    let inputs = [
        "<<<<>>>>",
        ">>> <",
        "<",
        ">",
        "</",
        "<!",
        "<?",
        "<a\n>\n",
        "<é>ü</é>",
        "\r\r\n\n",
    ];
    for input in inputs {
        for mode in [ScanMode::Tags, ScanMode::Lines] {
            let tokens = TagScanner::new(mode).scan(input);
            println!("{:?} {:?} -> {:?}", mode, input, tokens);
        }
    }
}

#[test]
fn test_multibyte_names() {
    let tokens = TagScanner::default().scan("<é>ü</é>");
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TagKind::Start);
    assert_eq!(tokens[0].name, "é");
    assert_eq!(tokens[1].kind, TagKind::End);
}

#[test]
fn test_tag_split_across_lines_is_invalid() {
    // Tags never span lines; the trailing half holds no `<` and is text.
    let tokens = TagScanner::default().scan("<note\n  id=\"1\">\n");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TagKind::Invalid);
    assert_eq!(tokens[0].line, 1);
}

#[test]
fn test_empty_input() {
    assert!(TagScanner::default().scan("").is_empty());
    let scanner = TagScanner::new(ScanMode::Lines);
    assert_eq!(scanner.lines_scanned(), 0);
    assert!(scanner.finish().is_empty());
}
