use quote::{format_ident, quote};
use syn::{parse_macro_input, LitStr};

/// Generates one `#[test]` per `.lox` file found below the given directory (relative to
/// `bin/tests`). Each test feeds the file's content to `lox_expect`.
#[proc_macro]
pub fn generate_tests(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let suite_dir = parse_macro_input!(input as LitStr).value();
    let root_dir = format!("{}/../{}", env!("CARGO_MANIFEST_DIR"), suite_dir);

    let mut entries = walkdir::WalkDir::new(&root_dir)
        .sort_by_file_name()
        .into_iter()
        .flatten()
        .filter(|entry| entry.path().extension() == Some("lox".as_ref()))
        .peekable();

    if entries.peek().is_none() {
        let message = format!("no .lox files in {root_dir}");
        return syn::Error::new(proc_macro2::Span::call_site(), message).to_compile_error().into();
    }

    let tests: Vec<proc_macro2::TokenStream> = entries
        .map(|entry| {
            let test_file_path = entry.path().to_string_lossy().to_string();
            let relative_test_path = entry
                .path()
                .strip_prefix(&root_dir)
                .unwrap_or(entry.path())
                .with_extension("")
                .to_string_lossy()
                .to_string();
            let test_ident = format_ident!(
                "test_{}",
                relative_test_path.replace(|c: char| !c.is_ascii_alphanumeric(), "_")
            );
            quote! {
                #[test]
                fn #test_ident() {
                    lox_expect(include_str!(#test_file_path));
                }
            }
        })
        .collect();

    quote! {
        #[ctor::ctor]
        fn init() {
            env_logger::init();
        }

        #(#tests)*
    }
    .into()
}
