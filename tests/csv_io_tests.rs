use csvsheet::io::csv_io;

fn row(fields: &[&str]) -> Vec<String> {
    fields.iter().map(|f| f.to_string()).collect()
}

#[test]
fn test_tokenize_plain_fields() {
    assert_eq!(csv_io::tokenize_line("a,b,c"), Some(row(&["a", "b", "c"])));
}

#[test]
fn test_tokenize_quoted_comma_stays_in_field() {
    let fields = csv_io::tokenize_line(r#"a,"b,c",d"#).unwrap();
    assert_eq!(fields, row(&["a", r#""b,c""#, "d"]));
}

#[test]
fn test_tokenize_keeps_quotes_verbatim() {
    let fields = csv_io::tokenize_line(r#""x","y""#).unwrap();
    assert_eq!(fields, row(&[r#""x""#, r#""y""#]));
}

#[test]
fn test_tokenize_empty_line_is_none() {
    assert_eq!(csv_io::tokenize_line(""), None);
    assert_eq!(csv_io::tokenize_line(",,,"), None);
}

#[test]
fn test_tokenize_drops_empty_cells() {
    assert_eq!(csv_io::tokenize_line("a,,b,"), Some(row(&["a", "b"])));
}

#[test]
fn test_tokenize_does_not_trim() {
    assert_eq!(
        csv_io::tokenize_line(" a , b"),
        Some(row(&[" a ", " b"]))
    );
    assert_eq!(csv_io::tokenize_line("   "), Some(row(&["   "])));
}

#[test]
fn test_tokenize_whitespace_after_quoted_field() {
    let fields = csv_io::tokenize_line(r#""a" ,b"#).unwrap();
    assert_eq!(fields, row(&[r#""a""#, " ", "b"]));
}

#[test]
fn test_tokenize_unterminated_quote_falls_back_to_plain_run() {
    let fields = csv_io::tokenize_line(r#""abc,d"#).unwrap();
    assert_eq!(fields, row(&[r#""abc"#, "d"]));
}

#[test]
fn test_tokenize_quote_followed_by_text_is_not_a_quoted_field() {
    let fields = csv_io::tokenize_line(r#""b,c"x,d"#).unwrap();
    assert_eq!(fields, row(&[r#""b"#, r#"c"x"#, "d"]));
}

#[test]
fn test_tokenize_non_ascii() {
    let fields = csv_io::tokenize_line(r#"café,"naïve, très",ü"#).unwrap();
    assert_eq!(fields, row(&["café", r#""naïve, très""#, "ü"]));
}

#[test]
fn test_build_one_row_per_line_with_comma_count() {
    let lines = ["x", "x,y", "1,2,3,4", "alpha,beta,gamma"];
    let table = csv_io::build_table(&lines.join("\n"));

    assert_eq!(table.len(), lines.len());
    for (row, line) in table.iter().zip(lines) {
        assert_eq!(row.len(), 1 + line.matches(',').count());
    }
}

#[test]
fn test_build_skips_empty_lines() {
    let table = csv_io::build_table("a,b\n\nc,d\n");
    assert_eq!(table, vec![row(&["a", "b"]), row(&["c", "d"])]);
}

#[test]
fn test_build_keeps_whitespace_only_lines() {
    let table = csv_io::build_table("a\n  \nb");
    assert_eq!(table, vec![row(&["a"]), row(&["  "]), row(&["b"])]);
}

#[test]
fn test_build_handles_crlf() {
    let table = csv_io::build_table("a,b\r\nc,d\r\n");
    assert_eq!(table, vec![row(&["a", "b"]), row(&["c", "d"])]);
}

#[test]
fn test_build_empty_contents_gives_empty_table() {
    assert!(csv_io::build_table("").is_empty());
    assert!(csv_io::build_table("\n,,\n").is_empty());
}

#[test]
fn test_build_scenario_with_uneven_rows() {
    let table = csv_io::build_table("a,b,c\nd,e\nf,g,h,i");
    assert_eq!(
        table,
        vec![
            row(&["a", "b", "c"]),
            row(&["d", "e"]),
            row(&["f", "g", "h", "i"]),
        ]
    );
}
