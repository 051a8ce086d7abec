use proc_macro::TokenStream;

#[proc_macro_attribute]
pub fn gangway_test(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let parsed_item = syn::parse_macro_input!(item as syn::ItemFn);
    quote::quote! {
        #[test_log::test]
        #parsed_item
    }
    .into()
}

#[proc_macro_attribute]
pub fn gangway_test_async(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let parsed_item = syn::parse_macro_input!(item as syn::ItemFn);
    quote::quote! {
        #[test_log::test(tokio::test(flavor = "current_thread"))]
        #parsed_item
    }
    .into()
}
