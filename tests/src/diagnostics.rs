use std::sync::{Mutex, Once};

use log::{Level, LevelFilter, Log, Metadata, Record};
use pretty_assertions::assert_eq;
use thai_chart_source::Chart;

/// логгер, запоминающий предупреждения; ставится один раз на весь процесс
struct Captured;

static RECORDS: Mutex<Vec<String>> = Mutex::new(Vec::new());
static LOGGER: Captured = Captured;

impl Log for Captured
{
    fn enabled(&self, metadata: &Metadata) -> bool
    {
        metadata.level() <= Level::Warn
    }

    fn log(&self, record: &Record)
    {
        if self.enabled(record.metadata()) {
            if let Ok(mut records) = RECORDS.lock() {
                records.push(format!("{}", record.args()));
            }
        }
    }

    fn flush(&self) {}
}

fn install()
{
    static INSTALL: Once = Once::new();

    INSTALL.call_once(|| {
        log::set_logger(&LOGGER).unwrap();
        log::set_max_level(LevelFilter::Warn);
    });
}

/// предупреждения, упоминающие строку; тесты идут параллельно, поэтому у каждого своя строка
fn warnings_about(line: &str) -> Vec<String>
{
    RECORDS
        .lock()
        .unwrap()
        .iter()
        .filter(|record| record.contains(line))
        .cloned()
        .collect()
}

#[test]
fn one_warning_per_near_miss()
{
    install();

    let chart = Chart::parse("Thai\nTHAI Characters (header)\n0E07 ง THAI CHARACTER NGO NGU\n");

    assert_eq!(chart.len(), 1);
    assert_eq!(
        warnings_about("THAI Characters (header)"),
        ["no match at line 2: THAI Characters (header)"]
    );
}

#[test]
fn no_warning_for_records_and_other_lines()
{
    install();

    let chart = Chart::parse("Range: 0E00-0E7F (no warning)\n0E01 ก THAI CHARACTER KO KAI\n");

    assert!(chart.near_misses().is_empty());
    assert!(warnings_about("(no warning)").is_empty());
    assert!(warnings_about("THAI CHARACTER KO KAI").is_empty());
}
