//! Generates the code for functions with before advice applied.

use proc_macro2::{Span, TokenStream};
use proc_macro_error::emit_error;
use quote::{quote, quote_spanned};
use syn::{parse2, spanned::Spanned, ItemFn};

use crate::{
    documentation::generate_docs,
    helpers::{crate_name_ident, is_attr, visit_matching_attrs_parsed, Parenthesized},
    marker::{BeforeAttr, BeforeAttrList, Marker},
};

/// Renders the given function with all its `before` attributes applied.
///
/// `first_attr` is the content of the attribute that triggered the macro. Further
/// `before` attributes on the function are consumed here as well, so that stacked
/// attributes result in one diagnostic line each, in declaration order.
pub(crate) fn render_function(mut function: ItemFn, first_attr: BeforeAttrList) -> TokenStream {
    let first_attr_span = first_attr.span();

    let mut markers: Vec<Marker> = Vec::new();
    let mut render_docs = true;

    let mut handle_attr = |attr: BeforeAttr| match attr {
        BeforeAttr::NoDoc(_) => render_docs = false,
        BeforeAttr::Marker(marker) => markers.push(marker),
    };

    for attr in first_attr {
        handle_attr(attr);
    }

    let attr_span = visit_matching_attrs_parsed(
        &mut function.attrs,
        |attr| is_attr("before", attr),
        |parsed_attr: Parenthesized<BeforeAttrList>| {
            for attr in parsed_attr.content {
                handle_attr(attr);
            }
        },
    );

    let span = match (attr_span, first_attr_span) {
        (Some(attr_span), Some(first_attr_span)) => attr_span
            .join(first_attr_span)
            .unwrap_or_else(|| attr_span),
        (Some(span), None) => span,
        (None, Some(span)) => span,
        (None, None) => Span::call_site(),
    };

    if markers.is_empty() {
        emit_error!(
            span,
            "expected at least one marker value";
            help = "specify the diagnostic value as a string: `#[before(\"...\")]`"
        );

        return quote! { #function };
    }

    if render_docs {
        function.attrs.push(generate_docs(&function.sig, &markers));
    }

    let advice_crate = crate_name_ident();

    // Insert in reverse order, so that the first marker prints first.
    for marker in markers.iter().rev() {
        let value = marker.value();

        function.block.stmts.insert(
            0,
            parse2(quote_spanned! { marker.span()=>
                ::#advice_crate::announce(#value);
            })
            .expect("valid statement"),
        );
    }

    quote! { #function }
}
