use std::collections::HashMap;

use pretty_assertions::assert_eq;
use thai_chart_prepare::output::generate;
use thai_chart_prepare::{EmitterConfig, Language};
use thai_chart_source::Chart;

use crate::data::CHART;

/// тело блока между открывающей строкой и следующей "}" или ")"
fn block<'a>(output: &'a str, opening: &str) -> Vec<&'a str>
{
    output
        .lines()
        .skip_while(|line| *line != opening)
        .skip(1)
        .take_while(|line| *line != "}" && *line != ")")
        .collect()
}

#[test]
fn single_record()
{
    let output = generate(
        &Chart::parse("0E07 ง THAI CHARACTER NGO NGU\n"),
        &EmitterConfig::default(),
    );

    assert_eq!(block(&output, "const ("), ["\t/* ง */ THAI_CHARACTER_NGO_NGU = rune(0x0E07)"]);
    assert_eq!(
        block(&output, "var RuneToThaiName = map[rune]string{"),
        ["\t0x0E07:/* ง */ \"THAI_CHARACTER_NGO_NGU\","]
    );
    assert_eq!(
        block(&output, "var ThaiNameToRune = map[string]rune{"),
        ["\t/* ง */ \"THAI_CHARACTER_NGO_NGU\": 0x0E07,"]
    );
}

#[test]
fn header_line_only()
{
    let chart = Chart::parse("THAI Characters\n");
    let output = generate(&chart, &EmitterConfig::default());

    assert_eq!(chart.near_misses().len(), 1);
    assert!(block(&output, "const (").is_empty());
    assert!(block(&output, "var RuneToThaiName = map[rune]string{").is_empty());
    assert!(block(&output, "var ThaiNameToRune = map[string]rune{").is_empty());
}

#[test]
fn empty_chart()
{
    let output = generate(&Chart::parse("Thai\n\n1\n"), &EmitterConfig::default());

    assert_eq!(
        output,
        "package paasaathai\n\
        \n\
        // From Unicode Thai code points\n\
        // https://www.unicode.org/charts/PDF/U0E00.pdf\n\
        const (\n\
        )\n\
        \n\
        var RuneToThaiName = map[rune]string{\n\
        }\n\
        \n\
        var ThaiNameToRune = map[string]rune{\n\
        }\n"
    );
}

/// объявления, прямая и обратная таблицы согласованы между собой
#[test]
fn tables_agree()
{
    let chart = Chart::parse(CHART);
    let output = generate(&chart, &EmitterConfig::default());

    let declarations: Vec<(String, String)> = block(&output, "const (")
        .iter()
        .map(|line| {
            let (_, declaration) = line.split_once(" */ ").unwrap();
            let (name, value) = declaration.split_once(" = ").unwrap();
            let hex = value.trim_start_matches("rune(0x").trim_end_matches(')');
            (hex.to_owned(), name.to_owned())
        })
        .collect();

    let forward: Vec<(String, String)> = block(&output, "var RuneToThaiName = map[rune]string{")
        .iter()
        .map(|line| {
            let (hex, rest) = line.trim_start_matches("\t0x").split_once(':').unwrap();
            let (_, name) = rest.split_once(" */ ").unwrap();
            (hex.to_owned(), name.trim_end_matches(',').trim_matches('"').to_owned())
        })
        .collect();

    let reverse: Vec<(String, String)> = block(&output, "var ThaiNameToRune = map[string]rune{")
        .iter()
        .map(|line| {
            let (_, rest) = line.split_once(" */ ").unwrap();
            let (name, hex) = rest.split_once(": 0x").unwrap();
            (hex.trim_end_matches(',').to_owned(), name.trim_matches('"').to_owned())
        })
        .collect();

    let expected: Vec<(String, String)> = chart
        .entries()
        .iter()
        .map(|e| (e.hex.clone(), e.name.clone()))
        .collect();

    assert_eq!(declarations, expected);
    assert_eq!(forward, expected);
    assert_eq!(reverse, expected);

    let forward: HashMap<&str, &str> = forward.iter().map(|(h, n)| (h.as_str(), n.as_str())).collect();
    for (hex, name) in &reverse {
        assert_eq!(forward[hex.as_str()], name.as_str());
    }
}

#[test]
fn deterministic()
{
    let config = EmitterConfig::default();

    assert_eq!(
        generate(&Chart::parse(CHART), &config),
        generate(&Chart::parse(CHART), &config)
    );
}

#[test]
fn variants()
{
    let chart = Chart::parse(CHART);

    let bare = generate(
        &chart,
        &EmitterConfig {
            emit_scalar_wrapper: false,
            emit_reverse_table: false,
            ..Default::default()
        },
    );

    assert!(bare.contains("\t/* ฿ */ THAI_CURRENCY_SYMBOL_BAHT = 0x0E3F\n"));
    assert!(bare.contains("\t0x0E3F:/* ฿ */ \"THAI_CURRENCY_SYMBOL_BAHT\",\n"));
    assert!(!bare.contains("ThaiNameToRune"));

    let rust = generate(
        &chart,
        &EmitterConfig {
            language: Language::Rust,
            ..Default::default()
        },
    );

    assert_eq!(rust.matches("pub const ").count(), chart.len());
    assert!(rust.contains("/* ◌ั */ pub const THAI_CHARACTER_MAI_HAN_AKAT: char = '\\u{0E31}';\n"));
    assert!(rust.contains("    (/* ๙ */ \"THAI_DIGIT_NINE\", '\\u{0E59}'),\n"));
}
