use std::fs;
use std::path::Path;
use tagcheck_core::{check_str, render_summary, ValidatorConfig};

#[test]
fn run_golden_tests() {
    let fixtures_dir = Path::new("tests/fixtures");
    if !fixtures_dir.exists() {
        // Skip if no fixtures
        return;
    }

    for entry in fs::read_dir(fixtures_dir).unwrap() {
        let path = entry.unwrap().path();
        if path.extension().is_none_or(|ext| ext != "xml") {
            continue;
        }

        let source = fs::read_to_string(&path).expect("Failed to read fixture");
        let diagnostics = check_str(&ValidatorConfig::default(), &source);
        let mut output = render_summary(&diagnostics).join("\n");
        output.push('\n');

        let golden_path = path.with_extension("golden.txt");
        if std::env::var("UPDATE_GOLDEN").is_ok() {
            fs::write(&golden_path, &output).expect("Failed to update golden file");
        } else {
            let expected = fs::read_to_string(&golden_path)
                .expect("Failed to read golden file (run with UPDATE_GOLDEN=1 to create)");
            assert_eq!(
                output,
                expected.replace("\r\n", "\n"),
                "Golden test failed for {:?}",
                path
            );
        }
    }
}
