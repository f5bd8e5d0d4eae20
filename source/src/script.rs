use unicode_script::{Script, UnicodeScript};

/// печатный символ латиницы (включая IPA, Latin Extended Additional, полноширинные и т.д.)
#[inline]
pub fn is_printable_latin(c: char) -> bool
{
    c.script() == Script::Latin && !c.is_control()
}

/// символ тайской письменности
#[inline]
pub fn is_thai(c: char) -> bool
{
    c.script() == Script::Thai
}

/// все символы строки - тайские; пустая строка тоже считается тайской
pub fn string_is_thai(text: &str) -> bool
{
    text.chars().all(is_thai)
}
