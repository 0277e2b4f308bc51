//! Macros for ergonomic state and symbol definitions.

/// Generate a `State` trait implementation for a simple enum.
///
/// Derives the full set of traits the engine needs (`Clone`, `Eq`,
/// `Hash`, `Debug`, serde) and names each variant after itself.
///
/// # Example
///
/// ```
/// use automat::core::State;
/// use automat::state_enum;
///
/// state_enum! {
///     pub enum SessionState {
///         Stopped,
///         Started,
///         Collecting,
///         Processing,
///     }
/// }
///
/// assert_eq!(SessionState::Collecting.name(), "Collecting");
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

/// Generate a `Symbol` trait implementation for a simple enum.
///
/// The counterpart of [`state_enum!`] for closed input alphabets.
///
/// # Example
///
/// ```
/// use automat::core::Symbol;
/// use automat::symbol_enum;
///
/// symbol_enum! {
///     pub enum Command {
///         Start,
///         Collect,
///         Process,
///         Stop,
///     }
/// }
///
/// assert_eq!(Command::Collect.name(), "Collect");
/// ```
#[macro_export]
macro_rules! symbol_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::Symbol for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}
