use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use proc_macro_error::proc_macro_error;
use quote::quote;
use syn::{parse_macro_input, ItemFn};

use crate::{marker::BeforeAttrList, render::render_function};

mod documentation;
mod helpers;
mod marker;
mod render;

/// Marks a function for interception, printing a diagnostic line before each call.
///
/// The attribute carries one string value:
///
/// ```rust,ignore
/// #[before("greeting")]
/// fn greet() -> i32 {
///     42
/// }
/// ```
///
/// Each call of `greet` prints `Running from greeting before the execution` and then
/// runs the original body, so it still returns `42`. Panics raised by the body unwind
/// through the advice unchanged.
///
/// This is the implementation; use it through the `advice` crate, whose re-export
/// carries the full documentation. The generated code refers to `advice` under the
/// name it was imported as, so that crate must be a dependency wherever the attribute
/// is used.
#[proc_macro_attribute]
#[proc_macro_error]
pub fn before(attr: TokenStream, function: TokenStream) -> TokenStream {
    let dummy_function: TokenStream2 = function.clone().into();
    proc_macro_error::set_dummy(quote! {
        #dummy_function
    });

    let attr = parse_macro_input!(attr as BeforeAttrList);
    let function = parse_macro_input!(function as ItemFn);

    let output = render_function(function, attr);

    // Reset the dummy here, in case errors were emitted in `render_function`.
    // This will use the most up-to-date version of the function.
    proc_macro_error::set_dummy(quote! {
        #dummy_function
    });

    output.into()
}
