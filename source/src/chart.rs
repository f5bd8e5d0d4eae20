use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::entry::CodePointEntry;
use crate::error::ChartError;
use crate::matcher::{match_line, LineMatch};
use crate::script::is_printable_latin;

/// строка, упоминающая THAI, но не подошедшая под шаблон
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NearMiss
{
    /// номер строки во входном файле, начиная с 1
    pub line_number: usize,
    pub line: String,
}

/// разобранная таблица символов: кодпоинты в порядке следования во входном файле
#[derive(Debug, Default, Clone)]
pub struct Chart
{
    entries: Vec<CodePointEntry>,
    near_misses: Vec<NearMiss>,
}

impl Chart
{
    /// разбор текста таблицы целиком
    pub fn parse(text: &str) -> Self
    {
        let mut chart = Self::default();

        for (i, line) in text.lines().enumerate() {
            chart.push_line(i + 1, line);
        }

        chart
    }

    /// построчный разбор из потока
    pub fn from_reader<R: BufRead>(reader: R) -> io::Result<Self>
    {
        let mut chart = Self::default();

        for (i, line) in reader.lines().enumerate() {
            chart.push_line(i + 1, &line?);
        }

        Ok(chart)
    }

    /// читаем таблицу из файла; файл закрывается по окончании разбора
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ChartError>
    {
        let path = path.as_ref();

        let file = File::open(path).map_err(|source| ChartError::FileOpen {
            path: PathBuf::from(path),
            source,
        })?;

        Self::from_reader(BufReader::new(file)).map_err(|source| ChartError::Read {
            path: PathBuf::from(path),
            source,
        })
    }

    fn push_line(&mut self, line_number: usize, line: &str)
    {
        match match_line(line) {
            LineMatch::Record(entry) => self.entries.push(entry),
            LineMatch::NearMiss => {
                log::warn!("no match at line {}: {}", line_number, line);

                self.near_misses.push(NearMiss {
                    line_number,
                    line: line.to_owned(),
                });
            }
            LineMatch::Ignored => (),
        }
    }

    pub fn entries(&self) -> &[CodePointEntry]
    {
        &self.entries
    }

    pub fn near_misses(&self) -> &[NearMiss]
    {
        &self.near_misses
    }

    pub fn is_empty(&self) -> bool
    {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize
    {
        self.entries.len()
    }

    /// имя символа, если он есть в таблице
    pub fn name_of(&self, c: char) -> Option<&str>
    {
        let code = u32::from(c);

        self.entries
            .iter()
            .find(|entry| entry.code() == code)
            .map(|entry| entry.name.as_str())
    }

    /// символ по имени
    pub fn char_of(&self, name: &str) -> Option<char>
    {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .and_then(|entry| entry.char())
    }

    /// строка -> перечисление имён символов через ", ":
    /// печатные латинские символы остаются как есть, символы таблицы заменяются именами,
    /// всё остальное записывается как U+XXXX
    pub fn string_to_names(&self, text: &str) -> String
    {
        let names: HashMap<u32, &str> = self
            .entries
            .iter()
            .map(|entry| (entry.code(), entry.name.as_str()))
            .collect();

        text.chars()
            .map(|c| {
                if is_printable_latin(c) {
                    return c.to_string();
                }

                match names.get(&u32::from(c)) {
                    Some(name) => name.to_string(),
                    None => format!("U+{:04X}", u32::from(c)),
                }
            })
            .collect::<Vec<String>>()
            .join(", ")
    }

    /// имена символов -> строка; первое неизвестное имя - ошибка
    pub fn names_to_string(&self, names: &[&str]) -> Result<String, ChartError>
    {
        let chars: HashMap<&str, char> = self
            .entries
            .iter()
            .filter_map(|entry| entry.char().map(|c| (entry.name.as_str(), c)))
            .collect();

        names
            .iter()
            .enumerate()
            .map(|(index, &name)| {
                chars.get(name).copied().ok_or_else(|| ChartError::UnknownName {
                    name: name.to_owned(),
                    index,
                })
            })
            .collect()
    }
}
