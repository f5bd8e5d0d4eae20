/// описание кодпоинта -> идентификатор: пробелы и дефисы заменяются на подчёркивания,
/// остальные символы и регистр не меняются
pub fn sanitize_name(description: &str) -> String
{
    description.replace(' ', "_").replace('-', "_")
}
