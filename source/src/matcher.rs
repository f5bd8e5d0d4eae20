use lazy_static::lazy_static;
use regex::Regex;

use crate::entry::CodePointEntry;
use crate::sanitize::sanitize_name;

lazy_static! {
    /// строка с определением кодпоинта, например:
    /// 0E07 ง THAI CHARACTER NGO NGU
    static ref RECORD: Regex = Regex::new(
        r"^\s*(?P<hex>0E[0-9A-F]{2}) (?P<symbol>\S+) (?P<desc>THAI (?:CHARACTER|DIGIT|CURRENCY) .*)$"
    )
    .expect("record pattern");
}

/// строки, содержащие этот маркер, но не подошедшие под шаблон, не должны теряться молча
pub const NEAR_MISS_MARKER: &str = "THAI";

/// результат разбора одной строки таблицы
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineMatch
{
    /// определение кодпоинта
    Record(CodePointEntry),
    /// строка упоминает THAI, но под шаблон не подходит
    NearMiss,
    /// заголовки, пустые строки, номера страниц и т.д.
    Ignored,
}

/// разбор строки таблицы; перевод строки (\n или \r\n) в конце отбрасывается
pub fn match_line(line: &str) -> LineMatch
{
    let line = line.trim_end_matches(['\n', '\r']);

    match RECORD.captures(line) {
        Some(captures) => LineMatch::Record(CodePointEntry {
            hex: captures["hex"].to_owned(),
            symbol: captures["symbol"].to_owned(),
            name: sanitize_name(&captures["desc"]),
        }),
        None => match line.contains(NEAR_MISS_MARKER) {
            true => LineMatch::NearMiss,
            false => LineMatch::Ignored,
        },
    }
}
