use core::str::FromStr;

use decfmt::{format, Language, Options, Precision, Template};

/// Runs the formatting table in tests/data/formatting.csv. Columns:
/// input, language, template, precision, expected rendering.
#[test]
fn golden_formatting_table() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/formatting.csv");
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .unwrap();

    let mut checked = 0;
    for record in reader.records() {
        let record = record.unwrap();
        let input = &record[0];
        let language = Language::from_str(&record[1]).unwrap();
        let template = Template::parse(&record[2]);
        let precision = Precision::from_str(&record[3]).unwrap();
        let expected = &record[4];

        let options = Options::new(language).template(template).precision(precision);
        let result = format(input, &options);
        assert_eq!(
            result.value.as_deref(),
            Some(expected),
            "input={input} language={language} template={template} precision={precision}"
        );
        checked += 1;
    }
    assert!(checked >= 50, "table unexpectedly short: {checked} rows");
}
