//! Naming Strategies - property-name to wire-key translation

/// Translates a source property name into the key emitted on the wire.
pub trait NamingStrategy {
    /// Translate one property name
    fn translate(&self, property_name: &str) -> String;
}

/// Passes property names through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityNaming;

impl NamingStrategy for IdentityNaming {
    fn translate(&self, property_name: &str) -> String {
        property_name.to_string()
    }
}

/// Dash-separated lowercase words (`createdAt` -> `created-at`), the member
/// name convention recommended by the JSON:API format.
#[derive(Debug, Clone, Copy, Default)]
pub struct KebabCaseNaming;

impl NamingStrategy for KebabCaseNaming {
    fn translate(&self, property_name: &str) -> String {
        split_words(property_name, '-')
    }
}

/// Underscore-separated lowercase words (`createdAt` -> `created_at`).
#[derive(Debug, Clone, Copy, Default)]
pub struct SnakeCaseNaming;

impl NamingStrategy for SnakeCaseNaming {
    fn translate(&self, property_name: &str) -> String {
        split_words(property_name, '_')
    }
}

/// Split camelCase word boundaries and normalize existing separators.
fn split_words(property_name: &str, separator: char) -> String {
    let mut out = String::with_capacity(property_name.len() + 4);
    for (i, ch) in property_name.chars().enumerate() {
        if ch.is_uppercase() {
            if i > 0 {
                out.push(separator);
            }
            out.extend(ch.to_lowercase());
        } else if ch == '-' || ch == '_' {
            out.push(separator);
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_naming() {
        assert_eq!(IdentityNaming.translate("createdAt"), "createdAt");
        assert_eq!(IdentityNaming.translate("author"), "author");
    }

    #[test]
    fn test_kebab_case_naming() {
        assert_eq!(KebabCaseNaming.translate("createdAt"), "created-at");
        assert_eq!(KebabCaseNaming.translate("author"), "author");
        assert_eq!(KebabCaseNaming.translate("already-kebab"), "already-kebab");
        assert_eq!(KebabCaseNaming.translate("snake_case"), "snake-case");
    }

    #[test]
    fn test_snake_case_naming() {
        assert_eq!(SnakeCaseNaming.translate("createdAt"), "created_at");
        assert_eq!(SnakeCaseNaming.translate("kebab-case"), "kebab_case");
        assert_eq!(SnakeCaseNaming.translate("already_snake"), "already_snake");
    }
}
