// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Wrap the given block or stmt so that it returns a `Result<()>`. It is just syntactic
/// sugar that helps having to write `Ok(())` repeatedly.
///
/// ```
/// use test_ack_editor::{CommonResult, throws};
///
/// fn open_and_close() -> CommonResult<()> {
///     throws!({
///         let count = 1 + 1;
///         assert_eq!(count, 2);
///     });
/// }
/// # open_and_close().unwrap();
/// ```
#[macro_export]
macro_rules! throws {
    ($it: block) => {{
        $it
        return Ok(())
    }};
    ($it: stmt) => {{
        $it
        return Ok(())
    }};
}

/// Simple macro to create a [`Result`] with an [`Ok`] variant. It is just syntactic sugar
/// that helps having to write `Ok(())`.
/// - If no arg is passed in then it will return `Ok(())`.
/// - If an arg is passed in then it will return `Ok($arg)`.
#[macro_export]
macro_rules! ok {
    // No args.
    () => {
        Ok(())
    };
    // With arg.
    ($value:expr) => {
        Ok($value)
    };
}

/// Equivalent of [`pretty_assertions::assert_eq`], which prints a colored diff when the
/// comparison fails.
#[macro_export]
macro_rules! assert_eq2 {
    ($($params:tt)*) => {
        pretty_assertions::assert_eq!($($params)*)
    };
}

/// Format arguments straight into an [`crate::InlineString`], so short labels never
/// touch the heap.
///
/// ```
/// use test_ack_editor::inline_string;
///
/// let label = inline_string!(" (+{})", 2);
/// assert_eq!(label.as_str(), " (+2)");
/// ```
#[macro_export]
macro_rules! inline_string {
    ($($format:tt)*) => {{
        use std::fmt::Write as _;
        let mut acc = $crate::InlineString::new();
        _ = write!(&mut acc, $($format)*);
        acc
    }};
}
