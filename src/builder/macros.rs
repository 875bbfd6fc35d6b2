//! Macros for ergonomic identifier declaration.

/// Generate an identifier enum with the derives and marker-trait
/// implementations the core expects.
///
/// The generated enum implements both [`StateId`](crate::core::StateId) and
/// [`EventId`](crate::core::EventId), so the same macro serves either role.
///
/// # Example
///
/// ```
/// use machina::id_enum;
///
/// id_enum! {
///     pub enum Light {
///         Green,
///         Yellow,
///         Red,
///     }
/// }
///
/// id_enum! {
///     enum Signal {
///         Init,
///         Timer,
///     }
/// }
/// # let _ = (Light::Green, Signal::Timer);
/// ```
#[macro_export]
macro_rules! id_enum {
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
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::StateId for $name {}
        impl $crate::core::EventId for $name {}
    };
}
