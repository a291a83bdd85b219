//! Derive macro implementation for fieldenv

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;
use syn::{parse_macro_input, Data, DeriveInput, Fields, Type, Visibility};

mod attrs;

use attrs::FieldAttrs;

/// Types with a typed slot in `fieldenv`, matched on the last path segment.
const SUPPORTED_TYPES: &[&str] = &[
    "String", "bool", "i8", "i16", "i32", "i64", "isize", "u8", "u16", "u32", "u64", "usize",
    "f32", "f64", "Duration",
];

/// Whether `ty` names a type `fieldenv` can coerce into
fn is_supported(ty: &Type) -> bool {
    match ty {
        Type::Path(type_path) if type_path.qself.is_none() => type_path
            .path
            .segments
            .last()
            .map(|seg| {
                seg.arguments.is_none() && SUPPORTED_TYPES.iter().any(|name| seg.ident == name)
            })
            .unwrap_or(false),
        Type::Group(group) => is_supported(&group.elem),
        Type::Paren(paren) => is_supported(&paren.elem),
        _ => false,
    }
}

/// `Populate` derive macro
///
/// Implements `fieldenv::Populate` by listing every field of the struct, in
/// declaration order, with its typed slot.
///
/// # Supported Attributes
///
/// **Field-level**:
/// - `#[conf(default = "raw")]`: Raw value used when the key is absent
/// - `#[conf(name = "Name")]`: Field name handed to the formatter
/// - `#[conf(skip)]`: Never populate this field
/// - `#[conf(value)]`: Populate the field even though its type name is not
///   recognised, e.g. a `type Port = u16` alias
///
/// Only `pub` and `pub(...)` fields are populated. The field type is
/// recognised by the last segment of its path: `String`, `bool`, the integer
/// and float primitives, and `Duration`. Any other name, including an alias
/// of a supported type, is listed but never assigned unless the field is
/// marked `#[conf(value)]`. A foreign type that happens to be named
/// `Duration` does not implement `fieldenv::Value` and fails to compile;
/// mark it `#[conf(skip)]`.
///
/// # Example
///
/// See the `fieldenv` crate documentation for usage examples.
#[proc_macro_derive(Populate, attributes(conf))]
pub fn derive_populate(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    // Struct name
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => fields.named.iter().collect::<Vec<_>>(),
            Fields::Unit => Vec::new(),
            Fields::Unnamed(_) => {
                return Err(syn::Error::new_spanned(
                    input,
                    "Populate only supports structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                input,
                "Populate must only be derived for structs",
            ));
        }
    };

    let descriptors = fields
        .iter()
        .map(|field| {
            let attrs = FieldAttrs::from_field(field)?;
            let ident = field
                .ident
                .as_ref()
                .ok_or_else(|| syn::Error::new_spanned(field, "expected a named field"))?;

            // Formatter sees the identifier without the raw `r#` marker
            let name = attrs.name.unwrap_or_else(|| ident.unraw().to_string());

            let settable = !attrs.skip && !matches!(field.vis, Visibility::Inherited);
            if !settable {
                return Ok(quote! {
                    ::fieldenv::Field::hidden(#name)
                });
            }

            let default = match &attrs.default {
                Some(value) => quote! { ::core::option::Option::Some(#value) },
                None => quote! { ::core::option::Option::None },
            };

            let slot = if attrs.value || is_supported(&field.ty) {
                quote! { ::fieldenv::Value::slot(&mut self.#ident) }
            } else {
                quote! { ::fieldenv::Slot::Other }
            };

            Ok(quote! {
                ::fieldenv::Field::new(#name, #default, #slot)
            })
        })
        .collect::<syn::Result<Vec<_>>>()?;

    Ok(quote! {
        impl #impl_generics ::fieldenv::Populate for #struct_name #ty_generics #where_clause {
            fn shape(&mut self) -> ::fieldenv::Shape<'_> {
                ::fieldenv::Shape::Struct(::std::vec![
                    #(#descriptors),*
                ])
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn expand_to_string(input: DeriveInput) -> String {
        expand(&input).unwrap().to_string()
    }

    #[test]
    fn test_public_supported_field_gets_slot() {
        let output = expand_to_string(parse_quote! {
            struct Config {
                pub port: u16,
            }
        });

        assert!(output.contains("Field :: new (\"port\""));
        assert!(output.contains("Value :: slot (& mut self . port)"));
    }

    #[test]
    fn test_private_field_hidden() {
        let output = expand_to_string(parse_quote! {
            struct Config {
                secret: String,
            }
        });

        assert!(output.contains("Field :: hidden (\"secret\")"));
        assert!(!output.contains("self . secret"));
    }

    #[test]
    fn test_restricted_visibility_is_settable() {
        let output = expand_to_string(parse_quote! {
            struct Config {
                pub(crate) host: String,
            }
        });

        assert!(output.contains("Value :: slot (& mut self . host)"));
    }

    #[test]
    fn test_skip_hides_public_field() {
        let output = expand_to_string(parse_quote! {
            struct Config {
                #[conf(skip)]
                pub internal: String,
            }
        });

        assert!(output.contains("Field :: hidden (\"internal\")"));
    }

    #[test]
    fn test_unsupported_type_gets_other_slot() {
        let output = expand_to_string(parse_quote! {
            struct Config {
                pub tags: Vec<String>,
                pub nested: Inner,
            }
        });

        assert!(output.contains("Field :: new (\"tags\" , :: core :: option :: Option :: None , :: fieldenv :: Slot :: Other)"));
        assert!(!output.contains("self . nested"));
    }

    #[test]
    fn test_alias_needs_value_attribute() {
        let output = expand_to_string(parse_quote! {
            struct Config {
                pub plain: Port,
                #[conf(value)]
                pub marked: Port,
            }
        });

        assert!(!output.contains("self . plain"));
        assert!(output.contains("Value :: slot (& mut self . marked)"));
    }

    #[test]
    fn test_qualified_duration_supported() {
        let output = expand_to_string(parse_quote! {
            struct Config {
                pub timeout: std::time::Duration,
            }
        });

        assert!(output.contains("Value :: slot (& mut self . timeout)"));
    }

    #[test]
    fn test_default_and_name() {
        let output = expand_to_string(parse_quote! {
            struct Config {
                #[conf(name = "b", default = 7)]
                pub second: i32,
            }
        });

        assert!(output.contains("Field :: new (\"b\" , :: core :: option :: Option :: Some (\"7\")"));
    }

    #[test]
    fn test_raw_identifier_unraw() {
        let output = expand_to_string(parse_quote! {
            struct Config {
                pub r#type: String,
            }
        });

        assert!(output.contains("Field :: new (\"type\""));
    }

    #[test]
    fn test_unit_struct_has_no_fields() {
        let output = expand_to_string(parse_quote! {
            struct Empty;
        });

        assert!(output.contains("Shape :: Struct (:: std :: vec ! [])"));
    }

    #[test]
    fn test_generics_preserved() {
        let output = expand_to_string(parse_quote! {
            struct Config<T: Clone> {
                pub inner: T,
            }
        });

        assert!(output.contains("impl < T : Clone > :: fieldenv :: Populate for Config < T >"));
    }

    #[test]
    fn test_enum_rejected() {
        let input: DeriveInput = parse_quote! {
            enum Mode { A, B }
        };

        let err = expand(&input).unwrap_err();
        assert_eq!(err.to_string(), "Populate must only be derived for structs");
    }

    #[test]
    fn test_tuple_struct_rejected() {
        let input: DeriveInput = parse_quote! {
            struct Pair(pub String, pub String);
        };

        let err = expand(&input).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Populate only supports structs with named fields"
        );
    }

    #[test]
    fn test_invalid_attribute_reported() {
        let input: DeriveInput = parse_quote! {
            struct Config {
                #[conf(deserializer = "serde_json::from_str")]
                pub tags: String,
            }
        };

        assert!(expand(&input).is_err());
    }
}
