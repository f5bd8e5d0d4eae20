/// строка таблицы символов тайского блока (U+0E00 ..= U+0E7F)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodePointEntry
{
    /// 4 шестнадцатеричных символа в верхнем регистре, всегда начинается с "0E"
    pub hex: String,
    /// сам символ (или его изображение в таблице), используется только в комментариях
    pub symbol: String,
    /// описание, приведённое к виду идентификатора: THAI_CHARACTER_KO_KAI
    pub name: String,
}

impl CodePointEntry
{
    pub fn new(hex: &str, symbol: &str, name: &str) -> Self
    {
        Self {
            hex: hex.to_owned(),
            symbol: symbol.to_owned(),
            name: name.to_owned(),
        }
    }

    /// числовое значение кодпоинта
    #[inline]
    pub fn code(&self) -> u32
    {
        // hex гарантированно состоит из [0-9A-F], см. matcher
        u32::from_str_radix(&self.hex, 16).unwrap_or_default()
    }

    #[inline]
    pub fn char(&self) -> Option<char>
    {
        char::from_u32(self.code())
    }
}

#[test]
fn entry_code()
{
    let entry = CodePointEntry::new("0E07", "ง", "THAI_CHARACTER_NGO_NGU");

    assert_eq!(entry.code(), 0x0E07);
    assert_eq!(entry.char(), Some('ง'));
}
