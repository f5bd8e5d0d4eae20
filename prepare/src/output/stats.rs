use std::collections::HashMap;

use thai_chart_source::Chart;

/// имена кодпоинтов, сгруппированные по категории (CHARACTER, DIGIT, CURRENCY)
pub type CodepointGroups<'a> = HashMap<&'a str, Vec<&'a str>>;

/// категория - второе слово имени: THAI_DIGIT_ZERO -> DIGIT
pub fn category(name: &str) -> &str
{
    name.split('_').nth(1).unwrap_or_default()
}

pub fn codepoint_groups(chart: &Chart) -> CodepointGroups<'_>
{
    let mut groups = CodepointGroups::new();

    for entry in chart.entries() {
        groups
            .entry(category(&entry.name))
            .or_default()
            .push(entry.name.as_str());
    }

    groups
}

/// информация о разобранной таблице
pub fn print(filename: &str, chart: &Chart)
{
    let groups = codepoint_groups(chart);

    log::info!(
        "{}: кодпоинтов: {}, {}, строк без совпадения: {}",
        filename,
        chart.len(),
        format_group_sizes(&groups),
        chart.near_misses().len(),
    );

    log::debug!("\n{}", format_codepoint_groups(&groups));
}

/// CHARACTER: 76, CURRENCY: 1, DIGIT: 10
fn format_group_sizes(groups: &CodepointGroups) -> String
{
    let mut keys: Vec<&&str> = groups.keys().collect();
    keys.sort();

    keys.iter()
        .map(|key| format!("{}: {}", key, groups[**key].len()))
        .collect::<Vec<String>>()
        .join(", ")
}

/// группы кодпоинтов
pub fn format_codepoint_groups(groups: &CodepointGroups) -> String
{
    let mut output = String::new();

    let mut keys: Vec<&&str> = groups.keys().collect();
    keys.sort();

    for key in keys {
        output.push_str(format!("{}\n\n{}\n\n", key, groups[*key].join("\n")).as_str());
    }

    output
}
