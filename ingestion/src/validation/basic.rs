use super::patterns;
use crate::models::{BasicField, BasicMetadata};
use std::collections::BTreeMap;

pub type BasicErrors = BTreeMap<BasicField, String>;

/// Checks every basic field independently. A field gets at most one message.
pub fn validate_basic(basic: &BasicMetadata) -> BasicErrors {
    BasicField::ALL
        .iter()
        .filter_map(|&field| check_field(field, basic.get(field)).map(|msg| (field, msg)))
        .collect()
}

fn check_field(field: BasicField, value: &str) -> Option<String> {
    if value.trim().is_empty() {
        return Some(format!("{} is required", field.label()));
    }

    // Format checks run on the raw value; trimming only happens on write.
    let message = match field {
        BasicField::DeptName if !patterns::is_dept_name(value) => {
            "must contain only alphabets and spaces"
        }
        BasicField::FileName if !patterns::has_csv_extension(value) => "must have .csv extension",
        BasicField::ProjectName if !patterns::is_project_name(value) => "must be alphanumeric",
        BasicField::IndexName if !patterns::is_index_name(value) => {
            "must be lowercase with underscores only"
        }
        BasicField::CompositeKeySeparator => {
            let mut chars = value.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if patterns::is_separator_character(c) => return None,
                (Some(_), None) => "must be a special character",
                _ => "must be a single character",
            }
        }
        _ => return None,
    };

    Some(format!("{} {}", field.label(), message))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_basic() -> BasicMetadata {
        BasicMetadata {
            dept_name: "Finance".to_string(),
            file_name: "trades.csv".to_string(),
            project_name: "Proj1".to_string(),
            index_name: "trades_idx".to_string(),
            composite_key_separator: "|".to_string(),
        }
    }

    #[test]
    fn test_valid_basic_has_no_errors() {
        assert!(validate_basic(&valid_basic()).is_empty());
    }

    #[test]
    fn test_each_missing_field_is_reported_alone() {
        for field in BasicField::ALL {
            let mut basic = valid_basic();
            match field {
                BasicField::DeptName => basic.dept_name = "   ".to_string(),
                BasicField::FileName => basic.file_name.clear(),
                BasicField::ProjectName => basic.project_name.clear(),
                BasicField::IndexName => basic.index_name.clear(),
                BasicField::CompositeKeySeparator => basic.composite_key_separator.clear(),
            }

            let errors = validate_basic(&basic);
            assert_eq!(errors.len(), 1, "field {:?}", field);
            assert_eq!(errors[&field], format!("{} is required", field.label()));
        }
    }

    #[test]
    fn test_dept_name_format() {
        let mut basic = valid_basic();
        basic.dept_name = "Finance123".to_string();
        assert_eq!(
            validate_basic(&basic)[&BasicField::DeptName],
            "Department Name must contain only alphabets and spaces"
        );

        basic.dept_name = "Finance Dept".to_string();
        assert!(validate_basic(&basic).is_empty());
    }

    #[test]
    fn test_file_name_extension() {
        let mut basic = valid_basic();
        basic.file_name = "data.txt".to_string();
        assert_eq!(
            validate_basic(&basic)[&BasicField::FileName],
            "File Name must have .csv extension"
        );

        basic.file_name = "DATA.CSV".to_string();
        assert!(validate_basic(&basic).is_empty());
    }

    #[test]
    fn test_project_and_index_formats() {
        let mut basic = valid_basic();
        basic.project_name = "Proj_1".to_string();
        basic.index_name = "Trades".to_string();

        let errors = validate_basic(&basic);
        assert_eq!(errors[&BasicField::ProjectName], "Project Name must be alphanumeric");
        assert_eq!(
            errors[&BasicField::IndexName],
            "Target Index Name must be lowercase with underscores only"
        );
    }

    #[test]
    fn test_separator_length_checked_before_membership() {
        let mut basic = valid_basic();
        basic.composite_key_separator = "||".to_string();
        assert_eq!(
            validate_basic(&basic)[&BasicField::CompositeKeySeparator],
            "Composite Key Separator must be a single character"
        );

        basic.composite_key_separator = "x".to_string();
        assert_eq!(
            validate_basic(&basic)[&BasicField::CompositeKeySeparator],
            "Composite Key Separator must be a special character"
        );

        basic.composite_key_separator = " |".to_string();
        assert_eq!(
            validate_basic(&basic)[&BasicField::CompositeKeySeparator],
            "Composite Key Separator must be a single character"
        );
    }
}
