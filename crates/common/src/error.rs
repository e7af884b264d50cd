/// Error types that can be built from a plain message string.
///
/// Implement this for a crate's error type, then invoke [`impl_context!`] in
/// its error module to get `.context()` and `.with_context()` on `Result` and
/// `Option`.
pub trait FromMessage: Sized {
    fn from_message(message: String) -> Self;
}

/// Generate a crate-local `Context` trait for an error type implementing
/// [`FromMessage`].
///
/// With no argument the type is `Error` from the invoking module.
///
/// ```ignore
/// // in crates/skills/src/error.rs
/// build_skill_common::impl_context!();
/// ```
#[macro_export]
macro_rules! impl_context {
    () => {
        $crate::impl_context!(Error);
    };
    ($err:ty) => {
        pub trait Context<T> {
            /// Wrap a failure as `"{context}: {source}"`, or turn `None` into
            /// an error carrying `context`.
            fn context(self, context: impl Into<String>) -> std::result::Result<T, $err>;

            fn with_context<C, F>(self, f: F) -> std::result::Result<T, $err>
            where
                C: Into<String>,
                F: FnOnce() -> C;
        }

        impl<T, E: std::fmt::Display> Context<T> for std::result::Result<T, E> {
            fn context(self, context: impl Into<String>) -> std::result::Result<T, $err> {
                let context = context.into();
                self.map_err(|source| {
                    <$err as $crate::FromMessage>::from_message(format!("{context}: {source}"))
                })
            }

            fn with_context<C, F>(self, f: F) -> std::result::Result<T, $err>
            where
                C: Into<String>,
                F: FnOnce() -> C,
            {
                self.map_err(|source| {
                    let context = f().into();
                    <$err as $crate::FromMessage>::from_message(format!("{context}: {source}"))
                })
            }
        }

        impl<T> Context<T> for Option<T> {
            fn context(self, context: impl Into<String>) -> std::result::Result<T, $err> {
                self.ok_or_else(|| <$err as $crate::FromMessage>::from_message(context.into()))
            }

            fn with_context<C, F>(self, f: F) -> std::result::Result<T, $err>
            where
                C: Into<String>,
                F: FnOnce() -> C,
            {
                self.ok_or_else(|| <$err as $crate::FromMessage>::from_message(f().into()))
            }
        }
    };
}
