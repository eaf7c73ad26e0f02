use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid override '{0}'. Expected 'section.key=value' (e.g., 'conditions.pressure-bar=25').")]
    MissingSeparator(String),

    #[error("Component '{component}' cannot be empty in override '{input}'.")]
    EmptyComponent {
        component: &'static str,
        input: String,
    },
}

/// Splits a `-S` override into its key and value, trimming surrounding whitespace.
///
/// Only the first `=` separates; the value may itself contain `=`.
pub fn parse_key_value(input: &str) -> Result<(&str, &str), ParseError> {
    let (key, value) = input
        .split_once('=')
        .ok_or_else(|| ParseError::MissingSeparator(input.to_string()))?;
    let (key, value) = (key.trim(), value.trim());

    if key.is_empty() {
        return Err(ParseError::EmptyComponent {
            component: "key",
            input: input.to_string(),
        });
    }
    if value.is_empty() {
        return Err(ParseError::EmptyComponent {
            component: "value",
            input: input.to_string(),
        });
    }
    Ok((key, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_key_and_value() {
        assert_eq!(
            parse_key_value("conditions.pressure-bar=25").unwrap(),
            ("conditions.pressure-bar", "25")
        );
    }

    #[test]
    fn trims_whitespace_around_components() {
        assert_eq!(
            parse_key_value("  species.a = Xe ").unwrap(),
            ("species.a", "Xe")
        );
    }

    #[test]
    fn keeps_equals_signs_inside_the_value() {
        assert_eq!(
            parse_key_value("data.gas-table=/tmp/a=b.txt").unwrap(),
            ("data.gas-table", "/tmp/a=b.txt")
        );
    }

    #[test]
    fn rejects_input_without_separator() {
        assert_eq!(
            parse_key_value("species.a"),
            Err(ParseError::MissingSeparator("species.a".to_string()))
        );
    }

    #[test]
    fn rejects_empty_key_or_value() {
        assert!(matches!(
            parse_key_value("=Xe"),
            Err(ParseError::EmptyComponent {
                component: "key",
                ..
            })
        ));
        assert!(matches!(
            parse_key_value("species.a="),
            Err(ParseError::EmptyComponent {
                component: "value",
                ..
            })
        ));
    }
}
