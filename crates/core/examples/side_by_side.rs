//! Side-by-side comparison printed as two plain-text columns
//!
//! Changed words are wrapped in `[-...-]` on the left and `{+...+}` on the
//! right.

use sidediff_core::{compare, AlignedRow, CompareOptions, DiffConfig, LineClass, WordSpan};

const LINE: &str = "----------------------------------------";
const WIDTH: usize = 36;

fn main() {
    println!("=== Side-by-side Examples ===\n");

    // Example 1: Plain comparison
    example_plain();

    // Example 2: Options resolved from a settings bundle
    example_with_options();
}

fn example_plain() {
    println!("Example 1: Plain comparison");
    println!("{}", LINE);

    let original = "fn add(a: i32, b: i32) -> i32 {\n    a + b\n}\n\nfn unused() {}\n";
    let modified = "fn add(a: i64, b: i64) -> i64 {\n    a + b\n}\n\nfn main() {\n    add(1, 2);\n}\n";

    let result = compare(original, modified, None);
    print_columns(&result.left, &result.right);

    let summary = result.summary();
    println!(
        "\n{} unchanged, {} modified, {} added, {} removed\n",
        summary.unchanged, summary.modified, summary.added, summary.removed
    );
}

fn example_with_options() {
    println!("Example 2: Ignore case");
    println!("{}", LINE);

    let options = match CompareOptions::from_json(r#"{"ignoreCase": true}"#) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("invalid settings: {}", err);
            return;
        }
    };

    let config = DiffConfig::new().with_options(options);
    let result = compare("Hello World\nBye\n", "hello world\nbye now\n", Some(config));
    print_columns(&result.left, &result.right);
    println!();
}

fn print_columns(left: &[AlignedRow], right: &[AlignedRow]) {
    for (l, r) in left.iter().zip(right) {
        println!("{} | {}", cell(l), cell(r));
    }
}

fn cell(row: &AlignedRow) -> String {
    let text = match row.as_content() {
        Some(content) => {
            let body: String = content.spans.iter().map(render_span).collect();
            format!("{:>3} {} {}", content.line_number, marker(row), body)
        }
        None => String::new(),
    };
    format!("{:<width$}", text, width = WIDTH)
}

fn marker(row: &AlignedRow) -> char {
    match row.class() {
        Some(LineClass::Added) => '+',
        Some(LineClass::Removed) => '-',
        Some(LineClass::Modified) => '~',
        _ => ' ',
    }
}

fn render_span(span: &WordSpan) -> String {
    match span {
        WordSpan::Unchanged(text) => text.clone(),
        WordSpan::RemovedWord(text) => format!("[-{}-]", text),
        WordSpan::AddedWord(text) => format!("{{+{}+}}", text),
    }
}
