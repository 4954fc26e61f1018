mod helper;
mod labeled;

use labeled::impl_labeled;
use proc_macro::TokenStream;

#[proc_macro_derive(Labeled, attributes(label))]
pub fn derive_labeled(input: TokenStream) -> TokenStream {
    impl_labeled(input.into()).into()
}
