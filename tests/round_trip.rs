use docss::{parse, parse_seekable, Document};
use std::fs::File;
use std::path::PathBuf;
use test_case::test_case;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data/css")
        .join(name)
}

fn load(name: &str) -> Document {
    let file = File::open(fixture(name)).unwrap();
    parse_seekable(file).unwrap()
}

#[test_case("basic.css")]
#[test_case("media.css")]
#[test_case("page.css")]
#[test_case("vendor.css")]
fn reparse_is_equal(name: &str) {
    let doc = load(name);

    let css = doc.to_string();
    let reparsed = parse(&css).unwrap_or_else(|e| panic!("{}\n{}", e, e.report()));

    assert_eq!(doc, reparsed);
    assert_eq!(css, reparsed.to_string());
}

#[test]
fn basic_fixture() {
    let doc = load("basic.css");

    assert_eq!(doc.directives.len(), 3);
    assert_eq!(doc.rule_sets.len(), 5);
    assert_eq!(
        doc.to_string().lines().take(5).collect::<Vec<_>>(),
        vec![
            "@charset 'utf-8';",
            "@import url('print.css') print;",
            "@import 'screen.css' screen, projection;",
            "",
            "html, body {",
        ]
    );

    let hover = &doc.rule_sets[2];
    assert_eq!(hover.to_string(), "a:hover {\n\tcolor: #0645AD !important\n}");
}

#[test]
fn media_fixture() {
    let doc = load("media.css");

    assert!(doc.rule_sets.is_empty());
    assert_eq!(doc.directives.len(), 2);
    assert_eq!(
        doc.directives[1].to_string(),
        "@media screen, tv {\n\t#main .content[data-role=\"page\"] {\n\t\twidth: 960px;\n\t\tmargin: 0 auto\n\t}\n}"
    );
}

#[test]
fn page_fixture() {
    let doc = load("page.css");

    let page = &doc.directives[0];
    assert_eq!(page.declarations[0].expression.to_twips(), 1440);

    let font_face = &doc.directives[1];
    assert_eq!(
        font_face.declarations[1].to_string(),
        "src: url('fonts/sans.woff') format('woff'), url('fonts/sans.ttf')"
    );
    assert_eq!(font_face.declarations[2].to_string(), "unicode-range: U\\0025-00FF");
}

#[test]
fn vendor_fixture() {
    let doc = load("vendor.css");

    assert_eq!(doc.rule_sets[0].declarations[0].name, "-moz-box-sizing");
    assert_eq!(doc.directives[0].name, "@-moz-document");
    assert_eq!(doc.directives[0].rule_sets.len(), 1);
}
