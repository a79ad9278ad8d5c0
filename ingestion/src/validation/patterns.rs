use once_cell::sync::Lazy;
use regex::Regex;

static DEPT_NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z\s]+$").expect("Invalid department name regex"));

static FILE_NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\.csv$").expect("Invalid file name regex"));

static PROJECT_NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("Invalid project name regex"));

static INDEX_NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9_]+$").expect("Invalid index name regex"));

/// Characters accepted as a composite-key separator.
pub const SEPARATOR_CHARACTERS: &[char] = &[
    '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', '_', '+', '-', '=', '[', ']', '{', '}',
    ';', '\'', ':', '"', '\\', '|', ',', '.', '<', '>', '/', '?',
];

pub fn is_dept_name(value: &str) -> bool {
    DEPT_NAME_REGEX.is_match(value)
}

pub fn has_csv_extension(value: &str) -> bool {
    FILE_NAME_REGEX.is_match(value)
}

pub fn is_project_name(value: &str) -> bool {
    PROJECT_NAME_REGEX.is_match(value)
}

pub fn is_index_name(value: &str) -> bool {
    INDEX_NAME_REGEX.is_match(value)
}

pub fn is_separator_character(c: char) -> bool {
    SEPARATOR_CHARACTERS.contains(&c)
}
