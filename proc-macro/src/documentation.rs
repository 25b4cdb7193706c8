//! Handles the generation of documentation for annotated functions.

use syn::{parse_quote, Attribute, Signature};

use crate::marker::Marker;

/// Generates documentation describing the diagnostic output of the annotated function.
pub(crate) fn generate_docs(sig: &Signature, markers: &[Marker]) -> Attribute {
    let mut doc = String::from("# Diagnostic output\n\n");

    if let [marker] = markers {
        doc.push_str(&format!(
            "Each call of `{}` first writes\n\n```text\nRunning from {} before the execution\n```\n\nto the standard output and then runs the original body.",
            sig.ident,
            marker.value().value(),
        ));
    } else {
        doc.push_str(&format!(
            "Each call of `{}` first writes the lines\n\n```text\n",
            sig.ident,
        ));

        for marker in markers {
            doc.push_str(&format!(
                "Running from {} before the execution\n",
                marker.value().value(),
            ));
        }

        doc.push_str("```\n\nto the standard output and then runs the original body.");
    }

    parse_quote! {
        #[doc = #doc]
    }
}
