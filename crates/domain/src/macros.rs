//! Macro for implementing Display and FromStr for string-backed enums
//!
//! Several enums in the workspace have a canonical wire string (content
//! types, schema field kinds, upsert actions). This macro provides a single
//! implementation of both Display and FromStr for them, with case-insensitive
//! parsing.
//!
//! # Example
//!
//! ```rust
//! use anypoint_domain::impl_domain_str_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Verb {
//!     Get,
//!     Post,
//! }
//!
//! impl_domain_str_conversions!(Verb {
//!     Get => "get",
//!     Post => "post",
//! });
//! ```

/// Implements Display and FromStr traits for string-backed enums
///
/// # Arguments
///
/// * `$enum_name` - The name of the enum type
/// * `$variant => $str` - Mapping of enum variants to their lowercase string
///   representations
#[macro_export]
macro_rules! impl_domain_str_conversions {
    ($enum_name:ident { $($variant:ident => $str:literal),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}
