use std::fmt::Write;

use thai_chart_source::{CodePointEntry, CHART_SOURCE_URL};

use crate::config::EmitterConfig;

/// пакет, в который попадают сгенерированные константы
pub const GO_PACKAGE: &str = "paasaathai";

/// Go:
///
/// ```text
/// const (
///     /* ก */ THAI_CHARACTER_KO_KAI = rune(0x0E01)
/// )
///
/// var RuneToThaiName = map[rune]string{
///     0x0E01:/* ก */ "THAI_CHARACTER_KO_KAI",
/// }
///
/// var ThaiNameToRune = map[string]rune{
///     /* ก */ "THAI_CHARACTER_KO_KAI": 0x0E01,
/// }
/// ```
pub fn go(entries: &[CodePointEntry], config: &EmitterConfig) -> String
{
    let mut buf = String::new();

    _ = write!(
        buf,
        "package {}\n\
        \n\
        // From Unicode Thai code points\n\
        // {}\n\
        const (\n",
        GO_PACKAGE, CHART_SOURCE_URL,
    );

    for e in entries {
        _ = match config.emit_scalar_wrapper {
            true => writeln!(buf, "\t/* {} */ {} = rune(0x{})", e.symbol, e.name, e.hex),
            false => writeln!(buf, "\t/* {} */ {} = 0x{}", e.symbol, e.name, e.hex),
        };
    }

    buf.push_str(")\n\nvar RuneToThaiName = map[rune]string{\n");

    for e in entries {
        _ = writeln!(buf, "\t0x{}:/* {} */ \"{}\",", e.hex, e.symbol, e.name);
    }

    buf.push_str("}\n");

    if config.emit_reverse_table {
        buf.push_str("\nvar ThaiNameToRune = map[string]rune{\n");

        for e in entries {
            _ = writeln!(buf, "\t/* {} */ \"{}\": 0x{},", e.symbol, e.name, e.hex);
        }

        buf.push_str("}\n");
    }

    buf
}

/// Rust: константы и срезы пар в порядке следования в таблице символов
pub fn rust(entries: &[CodePointEntry], config: &EmitterConfig) -> String
{
    let mut buf = String::new();

    let scalar_type = match config.emit_scalar_wrapper {
        true => "char",
        false => "u32",
    };

    let literal = |e: &CodePointEntry| match config.emit_scalar_wrapper {
        true => format!("'\\u{{{}}}'", e.hex),
        false => format!("0x{}", e.hex),
    };

    _ = writeln!(
        buf,
        "// From Unicode Thai code points\n\
        // {}\n",
        CHART_SOURCE_URL,
    );

    for e in entries {
        _ = writeln!(
            buf,
            "/* {} */ pub const {}: {} = {};",
            e.symbol,
            e.name,
            scalar_type,
            literal(e)
        );
    }

    _ = writeln!(
        buf,
        "\npub static RUNE_TO_THAI_NAME: &[({}, &str)] = &[",
        scalar_type
    );

    for e in entries {
        _ = writeln!(buf, "    ({}, /* {} */ \"{}\"),", literal(e), e.symbol, e.name);
    }

    buf.push_str("];\n");

    if config.emit_reverse_table {
        _ = writeln!(
            buf,
            "\npub static THAI_NAME_TO_RUNE: &[(&str, {})] = &[",
            scalar_type
        );

        for e in entries {
            _ = writeln!(buf, "    (/* {} */ \"{}\", {}),", e.symbol, e.name, literal(e));
        }

        buf.push_str("];\n");
    }

    buf
}
