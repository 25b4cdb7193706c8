//! Defines the content of `before` attributes.

use proc_macro2::Span;
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    spanned::Spanned,
    LitStr, Token,
};

/// The custom keywords used by `before` attributes.
mod custom_keywords {
    use syn::custom_keyword;

    custom_keyword!(value);
    custom_keyword!(no_doc);
}

/// A marker carried by a `before` attribute.
///
/// Both spellings of the original annotation's `value` element are accepted:
/// `#[before("greeting")]` and `#[before(value = "greeting")]`.
#[derive(Clone)]
pub(crate) enum Marker {
    /// A bare string: `"greeting"`.
    Bare(LitStr),
    /// The named form: `value = "greeting"`.
    Named {
        /// The `value` keyword.
        value_keyword: custom_keywords::value,
        /// The `=` between the keyword and the string.
        _eq: Token![=],
        /// The marker's string value.
        lit: LitStr,
    },
}

impl Marker {
    /// Returns the string value carried by this marker.
    pub(crate) fn value(&self) -> LitStr {
        match self {
            Marker::Bare(lit) => lit.clone(),
            Marker::Named { lit, .. } => lit.clone(),
        }
    }
}

impl Parse for Marker {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let lookahead = input.lookahead1();

        if lookahead.peek(LitStr) {
            Ok(Marker::Bare(input.parse()?))
        } else if lookahead.peek(custom_keywords::value) {
            Ok(Marker::Named {
                value_keyword: input.parse()?,
                _eq: input.parse()?,
                lit: input.parse()?,
            })
        } else {
            Err(lookahead.error())
        }
    }
}

impl Spanned for Marker {
    fn span(&self) -> Span {
        match self {
            Marker::Bare(lit) => lit.span(),
            Marker::Named {
                value_keyword, lit, ..
            } => value_keyword
                .span
                .join(lit.span())
                .unwrap_or_else(|| lit.span()),
        }
    }
}

/// A single entry of a `before` attribute.
pub(crate) enum BeforeAttr {
    /// A request not to generate documentation for the diagnostic output.
    NoDoc(custom_keywords::no_doc),
    /// A marker whose value is printed before each execution.
    Marker(Marker),
}

impl Parse for BeforeAttr {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if input.peek(custom_keywords::no_doc) {
            Ok(BeforeAttr::NoDoc(input.parse()?))
        } else {
            Ok(BeforeAttr::Marker(input.parse()?))
        }
    }
}

impl Spanned for BeforeAttr {
    fn span(&self) -> Span {
        match self {
            BeforeAttr::NoDoc(no_doc) => no_doc.span,
            BeforeAttr::Marker(marker) => marker.span(),
        }
    }
}

/// The comma separated content of one `before` attribute.
pub(crate) struct BeforeAttrList {
    /// The entries, in declaration order.
    entries: Punctuated<BeforeAttr, Token![,]>,
}

impl BeforeAttrList {
    /// Returns the most appropriate span to reference the whole list.
    pub(crate) fn span(&self) -> Option<Span> {
        let mut span: Option<Span> = None;

        for entry in &self.entries {
            span = Some(match span.take() {
                Some(old_span) => old_span.join(entry.span()).unwrap_or_else(|| entry.span()),
                None => entry.span(),
            });
        }

        span
    }
}

impl Parse for BeforeAttrList {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        Ok(BeforeAttrList {
            entries: Punctuated::parse_terminated(input)?,
        })
    }
}

impl IntoIterator for BeforeAttrList {
    type Item = BeforeAttr;
    type IntoIter = <Punctuated<BeforeAttr, Token![,]> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
