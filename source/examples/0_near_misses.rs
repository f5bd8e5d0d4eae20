use std::env;

use thai_chart_source::{Chart, ChartError};

/// какие строки таблицы упоминают THAI, но не попали в результат?
/// сколько кодпоинтов каждого вида?
fn main() -> Result<(), ChartError>
{
    let path = env::args().nth(1).unwrap_or_else(|| "U0E00.txt".to_owned());
    let chart = Chart::load(&path)?;

    println!("\n{}: кодпоинтов: {}\n", path, chart.len());

    for miss in chart.near_misses() {
        println!("  строка {:>4}: {}", miss.line_number, miss.line);
    }

    let digits = chart.entries().iter().filter(|e| e.name.starts_with("THAI_DIGIT_")).count();

    println!("\nцифр: {}, остальных: {}\n", digits, chart.len() - digits);

    Ok(())
}

/*

результат для tests/data/U0E00.txt:

U0E00.txt: кодпоинтов: 87

  строка    6: THAI Characters
  строка  110: THAI SIGN NOT IN THIS CHART

цифр: 10, остальных: 77

*/
