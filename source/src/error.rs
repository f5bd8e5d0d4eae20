use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// ошибки чтения таблицы символов и записи результата
#[derive(Debug, Error)]
pub enum ChartError
{
    /// входной или выходной файл не удалось открыть
    #[error("cannot open {}: {source}", .path.display())]
    FileOpen
    {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot read {}: {source}", .path.display())]
    Read
    {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot write output: {source}")]
    Write
    {
        #[from]
        source: io::Error,
    },
    #[error("'{name}' at index {index} is not a Thai code point name")]
    UnknownName
    {
        name: String,
        index: usize,
    },
}
