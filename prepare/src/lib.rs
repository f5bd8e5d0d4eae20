use std::fs::File;
use std::io::{self, BufWriter};

use thai_chart_source::{Chart, ChartError};

pub use cli::Cli;
pub use config::{EmitterConfig, Language};

pub mod cli;
pub mod config;
pub mod output;

/// читаем таблицу символов и пишем сгенерированные объявления в файл или в stdout
pub fn run(cli: &Cli) -> Result<(), ChartError>
{
    // входной файл закрывается до открытия выходного
    let chart = Chart::load(&cli.input)?;
    let config = cli.config();

    match &cli.output {
        Some(path) => {
            let file = File::create(path).map_err(|source| ChartError::FileOpen {
                path: path.clone(),
                source,
            })?;

            output::write(&chart, &config, &mut BufWriter::new(file))?;
        }
        None => output::write(&chart, &config, &mut io::stdout().lock())?,
    }

    output::stats::print(&cli.input.display().to_string(), &chart);

    Ok(())
}
