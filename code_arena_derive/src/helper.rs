use syn::{Data, Fields, Variant};

pub fn extract_unit_variants(data: &Data) -> Vec<&Variant> {
    match *data {
        Data::Enum(ref data) => data
            .variants
            .iter()
            .map(|variant| match variant.fields {
                Fields::Unit => variant,
                _ => panic!("all variants must be unit variants."),
            })
            .collect(),
        _ => panic!("enum expected, but got other item."),
    }
}

/// `LinkedList` -> `linkedList`
pub fn lower_camel<T: AsRef<str>>(ident: T) -> String {
    let ident = ident.as_ref();
    let mut chars = ident.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
