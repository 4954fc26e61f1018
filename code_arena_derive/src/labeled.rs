use crate::helper;
use proc_macro2::TokenStream;
use std::collections::HashSet;
use syn::{AttrStyle, DeriveInput, LitStr};

pub fn impl_labeled(input: TokenStream) -> TokenStream {
    let ast: DeriveInput = syn::parse(input.into()).expect("failed to parse input token stream");

    let enum_name = &ast.ident;
    let variants = helper::extract_unit_variants(&ast.data);

    let idents = variants
        .iter()
        .map(|variant| &variant.ident)
        .collect::<Vec<_>>();
    let labels = variants
        .iter()
        .map(|variant| {
            variant
                .attrs
                .iter()
                .filter(|attr| attr.path().is_ident("label"))
                .filter_map(|attr| match attr.style {
                    AttrStyle::Outer => Some(
                        attr.parse_args::<LitStr>()
                            .expect("label attribute must be a string literal")
                            .value(),
                    ),
                    _ => None,
                })
                .last()
                .unwrap_or_else(|| helper::lower_camel(variant.ident.to_string()))
        })
        .collect::<Vec<String>>();

    let mut seen = HashSet::new();
    for label in labels.iter() {
        if !seen.insert(label.as_str()) {
            panic!("duplicate label `{}` on {}", label, enum_name);
        }
    }

    quote::quote! {
        impl Labeled for #enum_name {
            fn label(&self) -> &'static str {
                match self {
                    #(Self::#idents => #labels,)*
                }
            }

            fn variants() -> &'static [Self] {
                &[#(Self::#idents),*]
            }
        }

        impl ::std::fmt::Display for #enum_name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(Labeled::label(self))
            }
        }

        impl ::std::str::FromStr for #enum_name {
            type Err = LabelError;

            fn from_str(value: &str) -> ::std::result::Result<Self, Self::Err> {
                match value {
                    #(#labels => Ok(Self::#idents),)*
                    _ => Err(LabelError::new(
                        stringify!(#enum_name),
                        value,
                        &[#(#labels),*],
                    )),
                }
            }
        }
    }
}
