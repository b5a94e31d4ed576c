use std::path::Path;

use unicode_general_category::{get_general_category, GeneralCategory};

/// Derives a variable name from the base name of `path`.
///
/// The base name is split into runs of letters and numbers; each run gets its
/// first character upper-cased and the runs are concatenated.
/// `my-file.bin` becomes `MyFileBin`.
pub fn derive_var_name(path: &Path) -> String {
    let Some(base) = path.file_name() else {
        return String::new();
    };

    base.to_string_lossy()
        .split(|c: char| !is_letter(c) && !is_number(c))
        .filter(|piece| !piece.is_empty())
        .map(capitalize)
        .collect()
}

/// Upper-cases the first character, keeping it as is when its upper case
/// spans several characters (`ß`, `ﬁ`).
fn capitalize(piece: &str) -> String {
    let mut chars = piece.chars();

    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut upper = first.to_uppercase();
    let first = match (upper.next(), upper.next()) {
        (Some(c), None) => c,
        _ => first,
    };

    std::iter::once(first).chain(chars).collect()
}

fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

fn is_number(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::DecimalNumber | GeneralCategory::LetterNumber | GeneralCategory::OtherNumber
    )
}

fn is_digit(c: char) -> bool {
    matches!(get_general_category(c), GeneralCategory::DecimalNumber)
}

pub fn is_go_ident(name: &str) -> bool {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if is_letter(c) || c == '_' => {}
        _ => return false,
    }

    chars.all(|c| is_letter(c) || is_digit(c) || c == '_')
}
