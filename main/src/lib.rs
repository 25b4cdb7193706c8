#![allow(clippy::needless_doctest_main)]

//! Aspect-style before advice for functions.
//!
//! Attaching the [`before`](attr.before.html) attribute to a function marks it for
//! interception: every call first writes a diagnostic line derived from the marker's
//! string value to the standard output and then runs the original body, returning its
//! result unchanged.
//!
//! ```rust
//! use advice::before;
//!
//! #[before("greeting")]
//! fn greet() -> i32 {
//!     42
//! }
//!
//! fn main() {
//!     // Prints `Running from greeting before the execution` and then returns `42`.
//!     assert_eq!(greet(), 42);
//! }
//! ```
//!
//! The advice never interferes with the intercepted call: arguments, the return value
//! and any panic raised by the body pass through untouched. Functions without the
//! attribute are never intercepted.

use std::io::{self, Write};

/// Marks a function for interception, printing a diagnostic line before each call.
///
/// The attribute carries one string value, written either bare or with the `value`
/// keyword:
///
/// ```rust
/// use advice::before;
///
/// #[before("greeting")]
/// fn greet() {}
///
/// #[before(value = "greeting")]
/// fn greet_again() {}
/// #
/// # fn main() { greet(); greet_again(); }
/// ```
///
/// Each call of an annotated function writes
///
/// ```text
/// Running from <value> before the execution
/// ```
///
/// to the standard output and then runs the original body. The function keeps its
/// signature, visibility and generics, so the attribute applies to free functions and
/// methods alike, whatever their parameter list.
///
/// Multiple markers are allowed, either as a comma separated list or as stacked
/// attributes, and produce one line each in declaration order:
///
/// ```rust
/// use advice::before;
///
/// #[before("first", "second")]
/// #[before("third")]
/// fn verbose() {}
/// #
/// # fn main() { verbose(); }
/// ```
///
/// The attribute also documents the diagnostic output on the annotated function.
/// Adding `no_doc` to the attribute suppresses that:
///
/// ```rust
/// use advice::before;
///
/// #[before("quiet", no_doc)]
/// fn undocumented() {}
/// #
/// # fn main() { undocumented(); }
/// ```
///
/// The attribute requires at least one marker value, so leaving it empty fails to
/// compile:
///
/// ```rust,compile_fail
/// use advice::before;
///
/// #[before]
/// fn unmarked() {}
/// #
/// # fn main() { unmarked(); }
/// ```
///
/// The same holds when only `no_doc` is given:
///
/// ```rust,compile_fail
/// use advice::before;
///
/// #[before(no_doc)]
/// fn unmarked() {}
/// #
/// # fn main() { unmarked(); }
/// ```
///
/// The marker's value must be a string:
///
/// ```rust,compile_fail
/// use advice::before;
///
/// #[before(42)]
/// fn numbered() {}
/// #
/// # fn main() { numbered(); }
/// ```
///
/// # Failure behavior
///
/// The advice performs no recovery. If the original body panics, the panic unwinds
/// through the advice unchanged, after the diagnostic line was already written.
pub use advice_proc_macro::before;

/// Writes the diagnostic line for one intercepted call to the standard output.
///
/// Code generated by the [`before`](attr.before.html) attribute calls this at the
/// start of the annotated function's body. Failures writing the line are ignored, so
/// that the intercepted call itself is never disturbed.
pub fn announce(value: &str) {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    let _ = write_message(&mut handle, value);
}

/// Writes the diagnostic line for `value` to `out`.
fn write_message(out: &mut impl Write, value: &str) -> io::Result<()> {
    writeln!(out, "Running from {} before the execution", value)
}
