use std::fmt;

use clap::ValueEnum;

/// язык, на котором записываются объявления
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Language
{
    /// пакет paasaathai: const (...) и две map
    #[default]
    Go,
    /// константы и два статических среза пар
    Rust,
}

impl fmt::Display for Language
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match self {
            Language::Go => write!(f, "go"),
            Language::Rust => write!(f, "rust"),
        }
    }
}

/// что и как записывается
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmitterConfig
{
    /// rune(0x0E01) вместо 0x0E01 (в Rust - char вместо u32)
    pub emit_scalar_wrapper: bool,
    /// писать ли таблицу имя -> кодпоинт
    pub emit_reverse_table: bool,
    pub language: Language,
}

impl Default for EmitterConfig
{
    fn default() -> Self
    {
        Self {
            emit_scalar_wrapper: true,
            emit_reverse_table: true,
            language: Language::Go,
        }
    }
}
