use std::{fs, path::Path};

use tinypy::run;
use walkdir::WalkDir;

#[test]
fn sample_programs_produce_expected_output() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/programs").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "tpy"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected = read_expected(path);

        count += 1;

        let mut out = Vec::new();
        if let Err(e) = run(&source, &mut out) {
            panic!("Program {path:?} failed:\n{source}\nError: {e}");
        }

        let actual = String::from_utf8(out).expect("print output is ASCII");
        assert_eq!(actual, expected, "Output mismatch for {path:?}");
    }

    assert!(count > 0, "No programs found in tests/programs");
}

#[test]
fn sample_programs_are_stable_under_normalization() {
    for entry in
        WalkDir::new("tests/programs").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "tpy"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        let normalized = normalize(&source);
        assert_eq!(normalize(&normalized), normalized, "Unstable normal form for {path:?}");

        let mut original = Vec::new();
        let mut reparsed = Vec::new();
        run(&source, &mut original).unwrap();
        run(&normalized, &mut reparsed).unwrap();
        assert_eq!(original, reparsed, "Normal form of {path:?} behaves differently");
    }
}

fn normalize(source: &str) -> String {
    use tinypy::interpreter::{lexer::tokenize, parser::parse};

    let tokens = tokenize(source).unwrap_or_else(|e| panic!("{e}"));
    parse(&tokens).unwrap_or_else(|e| panic!("{e}")).to_string()
}

fn read_expected(path: &Path) -> String {
    let out_path = path.with_extension("out");
    fs::read_to_string(&out_path).unwrap_or_else(|e| panic!("Failed to read {out_path:?}: {e}"))
}
