use std::io::Write;

use thai_chart_source::{Chart, ChartError};

use crate::config::{EmitterConfig, Language};

pub mod format;
pub mod stats;

/// пишем объявления, таблицу кодпоинт -> имя и (если нужно) таблицу имя -> кодпоинт
pub fn write<W: Write>(chart: &Chart, config: &EmitterConfig, sink: &mut W) -> Result<(), ChartError>
{
    let output = generate(chart, config);

    sink.write_all(output.as_bytes())?;
    sink.flush()?;

    Ok(())
}

/// сгенерированный текст целиком
pub fn generate(chart: &Chart, config: &EmitterConfig) -> String
{
    let entries = chart.entries();

    match config.language {
        Language::Go => format::go(entries, config),
        Language::Rust => format::rust(entries, config),
    }
}
