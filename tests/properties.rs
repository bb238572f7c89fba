use docss::colors::RgbColor;
use docss::node::{DirectiveKind, Medium, Value};
use docss::{parse, ErrorKind};
use test_case::test_case;

#[test]
fn rule_set_with_twips() {
    let doc = parse("a.b, .c { color: red; font-size: 12pt }").unwrap();

    assert_eq!(doc.rule_sets.len(), 1);
    let rule_set = &doc.rule_sets[0];
    assert_eq!(
        rule_set.selectors.iter().map(|s| s.to_string()).collect::<Vec<_>>(),
        vec!["a.b", ".c"]
    );
    assert_eq!(rule_set.declarations.len(), 2);
    assert_eq!(rule_set.declarations[1].expression.to_twips(), 240);
}

#[test]
fn media_with_mediums() {
    let doc = parse("@media print, screen { p { margin: 0 } }").unwrap();

    assert_eq!(doc.directives.len(), 1);
    let media = &doc.directives[0];
    assert_eq!(media.kind, DirectiveKind::Media);
    assert_eq!(media.mediums, vec![Medium::Print, Medium::Screen]);
    assert_eq!(media.rule_sets.len(), 1);
}

#[test]
fn short_hex_expands() {
    let doc = parse("a { color: #abc; background: #aabbcc }").unwrap();

    let colors: Vec<_> = doc.rule_sets[0]
        .declarations
        .iter()
        .map(|d| d.expression.to_color())
        .collect();
    assert_eq!(colors[0], Some(RgbColor::new(0xaa, 0xbb, 0xcc)));
    assert_eq!(colors[0], colors[1]);
}

#[test_case("rgb(50%, 0, 255)", RgbColor::new(127, 0, 255) ; "percent rounds down")]
#[test_case("hsl(0, 100%, 50%)", RgbColor::new(255, 0, 0) ; "red")]
#[test_case("hsl(120, 100%, 50%)", RgbColor::new(0, 255, 0) ; "green")]
#[test_case("red", RgbColor::new(255, 0, 0) ; "named")]
#[test_case("#F00", RgbColor::new(255, 0, 0) ; "hex")]
fn colors(value: &str, expected: RgbColor) {
    let doc = parse(&format!("a {{ color: {value} }}")).unwrap();

    let expression = &doc.rule_sets[0].declarations[0].expression;
    assert!(expression.is_color());
    assert_eq!(expression.to_color(), Some(expected));
}

#[test]
fn missing_value_points_at_brace() {
    let err = parse("a { color: }").unwrap_err();

    assert_eq!(err.kind, ErrorKind::Syntax { code: 57 });
    let location = err.location.clone().unwrap();
    assert_eq!(location.line, 1);
    assert_eq!(location.column, 11);
    assert!(err.to_string().contains("line 1, column 11"));
    assert_eq!(err.snippet.as_deref(), Some("}"));
}

#[test]
fn unterminated_comment_is_a_slash() {
    let doc = parse("a { color: red } /* no end\nb { margin: 0 }").unwrap();

    // the comment text is scanned as regular tokens
    assert_eq!(doc.rule_sets.len(), 2);
    assert_eq!(doc.rule_sets[0].to_string(), "a {\n\tcolor: red\n}");
    assert_eq!(doc.rule_sets[1].selectors[0].to_string(), "* no end b");
}

#[test]
fn unterminated_comment_before_rules() {
    let doc = parse("/* b { margin: 0 }").unwrap();

    assert_eq!(doc.rule_sets.len(), 1);
    assert_eq!(doc.rule_sets[0].to_string(), "* b {\n\tmargin: 0\n}");
}

#[test]
fn terms_keep_their_kind() {
    let doc = parse("a { font-family: 'Arial', serif; width: calc(100% / 3) }").unwrap();

    let family = &doc.rule_sets[0].declarations[0].expression.terms;
    assert_eq!(family[0].value, Value::String("Arial".into()));
    assert_eq!(family[1].value, Value::Ident("serif".into()));

    let Value::Function(calc) = &doc.rule_sets[0].declarations[1].expression.terms[0].value else {
        panic!("calc is a function");
    };
    assert_eq!(calc.name, "calc");
    assert_eq!(calc.expression.to_string(), "100%/3");
}

#[test]
fn semantic_unit_error() {
    let err = parse("a {\n  width: 10pz\n}").unwrap_err();

    assert!(err.is_semantic());
    assert_eq!(err.location.unwrap().line, 2);
}

#[test]
fn unterminated_comment_ending_in_star() {
    let doc = parse("p { a: 1 } /* q { b: 2 } * r { c: 3 }").unwrap();
    assert_eq!(doc.rule_sets.len(), 3);
    assert_eq!(doc.rule_sets[1].selectors[0].to_string(), "* q");
    assert_eq!(doc.rule_sets[2].selectors[0].to_string(), "* r");

    // the star at the very end is scanned as well
    let err = parse("p { a: 1 } /* q { b: 2 } *").unwrap_err();
    assert!(err.is_syntax());
    assert!(err.message.starts_with("\"{\" expected"), "{err}");
}
