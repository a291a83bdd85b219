//! Attribute parsing for `#[conf(...)]` annotations.
//!
//! This module extracts and validates population options from struct fields
//! during macro expansion.

use syn::{Field, Lit};

/// Parsed `#[conf(...)]` attributes from a struct field.
#[derive(Debug, Default)]
pub struct FieldAttrs {
    /// Field name handed to the formatter, in place of the identifier.
    pub name: Option<String>,

    /// Raw default value used when the source has no value for the key.
    ///
    /// Non-string literals are stored in their textual form (`10` becomes
    /// `"10"`), so the default is coerced exactly like a source value.
    pub default: Option<String>,

    /// Never populate this field.
    pub skip: bool,

    /// Treat the field type as a supported value type even though its name
    /// is not recognised (type aliases such as `type Port = u16`).
    pub value: bool,
}

impl FieldAttrs {
    /// Extract and parse `#[conf(...)]` attributes from a struct field.
    ///
    /// Attributes other than `conf` are left for other macros.
    pub fn from_field(field: &Field) -> syn::Result<Self> {
        let mut attrs = Self::default();

        for attr in &field.attrs {
            if !attr.path().is_ident("conf") {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                // name = "..."
                if meta.path.is_ident("name") {
                    let lit: Lit = meta.value()?.parse()?;
                    match lit {
                        Lit::Str(s) => attrs.name = Some(s.value()),
                        other => {
                            return Err(syn::Error::new_spanned(
                                other,
                                "expected a string literal, e.g. `name = \"redis_url\"`",
                            ))
                        }
                    }
                    return Ok(());
                }

                // default = "raw" | 10 | 1.5 | true
                if meta.path.is_ident("default") {
                    if !meta.input.peek(syn::Token![=]) {
                        return Err(meta.error(
                            "default requires a value, e.g. `default = \"8080\"`",
                        ));
                    }
                    let lit: Lit = meta.value()?.parse()?;
                    attrs.default = Some(default_text(&lit)?);
                    return Ok(());
                }

                // skip
                if meta.path.is_ident("skip") {
                    attrs.skip = true;
                    return Ok(());
                }

                // value
                if meta.path.is_ident("value") {
                    attrs.value = true;
                    return Ok(());
                }

                Err(meta.error("unsupported conf attribute"))
            })?;
        }

        Ok(attrs)
    }
}

/// Textual form of a default literal.
fn default_text(lit: &Lit) -> syn::Result<String> {
    match lit {
        Lit::Str(s) => Ok(s.value()),
        Lit::Int(i) => Ok(i.base10_digits().to_string()),
        Lit::Float(f) => Ok(f.base10_digits().to_string()),
        Lit::Bool(b) => Ok(b.value.to_string()),
        other => Err(syn::Error::new_spanned(
            other,
            "default must be a string, integer, float or boolean literal",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn test_parse_name_attribute() {
        let field: Field = parse_quote! {
            #[conf(name = "redis_url")]
            pub cache: String
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert_eq!(attrs.name, Some("redis_url".to_string()));
    }

    #[test]
    fn test_parse_default_string() {
        let field: Field = parse_quote! {
            #[conf(default = "defaultB")]
            pub b: String
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert_eq!(attrs.default, Some("defaultB".to_string()));
    }

    #[test]
    fn test_parse_default_number() {
        let field: Field = parse_quote! {
            #[conf(default = 42)]
            pub port: u16
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert_eq!(attrs.default, Some("42".to_string()));
    }

    #[test]
    fn test_parse_default_suffixed_number() {
        let field: Field = parse_quote! {
            #[conf(default = 7u8)]
            pub retries: u8
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert_eq!(attrs.default, Some("7".to_string()));
    }

    #[test]
    fn test_parse_default_float_and_bool() {
        let field: Field = parse_quote! {
            #[conf(default = 1.5)]
            pub ratio: f64
        };
        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert_eq!(attrs.default, Some("1.5".to_string()));

        let field: Field = parse_quote! {
            #[conf(default = true)]
            pub debug: bool
        };
        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert_eq!(attrs.default, Some("true".to_string()));
    }

    #[test]
    fn test_parse_skip() {
        let field: Field = parse_quote! {
            #[conf(skip)]
            pub internal: String
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert!(attrs.skip);
    }

    #[test]
    fn test_parse_value() {
        let field: Field = parse_quote! {
            #[conf(value)]
            pub port: Port
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert!(attrs.value);
        assert!(!attrs.skip);
    }

    #[test]
    fn test_parse_multiple_attributes() {
        let field: Field = parse_quote! {
            #[conf(name = "db", default = "postgres://localhost")]
            pub database_url: String
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert_eq!(attrs.name, Some("db".to_string()));
        assert_eq!(attrs.default, Some("postgres://localhost".to_string()));
    }

    #[test]
    fn test_other_attributes_ignored() {
        let field: Field = parse_quote! {
            #[serde(rename = "x")]
            pub x: String
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert!(attrs.name.is_none());
        assert!(attrs.default.is_none());
        assert!(!attrs.skip);
    }

    #[test]
    fn test_bare_default_rejected() {
        let field: Field = parse_quote! {
            #[conf(default)]
            pub x: String
        };

        let err = FieldAttrs::from_field(&field).unwrap_err();
        assert!(err.to_string().contains("default requires a value"));
    }

    #[test]
    fn test_unknown_attribute_rejected() {
        let field: Field = parse_quote! {
            #[conf(from_file)]
            pub x: String
        };

        let err = FieldAttrs::from_field(&field).unwrap_err();
        assert_eq!(err.to_string(), "unsupported conf attribute");
    }

    #[test]
    fn test_non_string_name_rejected() {
        let field: Field = parse_quote! {
            #[conf(name = 5)]
            pub x: String
        };

        assert!(FieldAttrs::from_field(&field).is_err());
    }
}
