//! Type identities and the logger names derived from them.
//!
//! A [`TypeIdentity`] is the cache key: it pairs a `TypeId` with the
//! compiler-provided type name. Equality and hashing use the `TypeId` only.

use std::any::{type_name, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// How a logger name is derived from a type name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NamingStyle {
    /// The full path, e.g. `my_app::service::Worker`.
    #[default]
    FullyQualified,
    /// Module paths stripped everywhere, e.g. `Worker<String>`.
    Simple,
}

impl NamingStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            NamingStyle::FullyQualified => "fully_qualified",
            NamingStyle::Simple => "simple",
        }
    }
}

impl fmt::Display for NamingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a [`NamingStyle`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown naming style '{0}' (expected fully_qualified or simple)")]
pub struct ParseNamingError(pub String);

impl FromStr for NamingStyle {
    type Err = ParseNamingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fully_qualified" | "full" => Ok(NamingStyle::FullyQualified),
            "simple" | "short" => Ok(NamingStyle::Simple),
            _ => Err(ParseNamingError(s.to_string())),
        }
    }
}

/// Stable identity of a Rust type, used as the logger cache key.
#[derive(Clone, Copy)]
pub struct TypeIdentity {
    id: TypeId,
    name: &'static str,
}

impl TypeIdentity {
    /// Identity of `T`.
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    /// Identity of the static type of `value`.
    ///
    /// For a trait object this is the `dyn` type, not the concrete type
    /// behind it.
    pub fn of_val<T: ?Sized + 'static>(_value: &T) -> Self {
        Self::of::<T>()
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Fully qualified type name as reported by the compiler.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Logger name for this type under `style`.
    pub fn logger_name(&self, style: NamingStyle) -> String {
        match style {
            NamingStyle::FullyQualified => self.name.to_string(),
            NamingStyle::Simple => simple_name(self.name),
        }
    }
}

impl PartialEq for TypeIdentity {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeIdentity {}

impl Hash for TypeIdentity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypeIdentity").field(&self.name).finish()
    }
}

impl fmt::Display for TypeIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Strip the module path from every path segment of a type name.
///
/// `a::Wrapper<alloc::string::String>` becomes `Wrapper<String>`.
fn simple_name(full: &str) -> String {
    let mut out = String::with_capacity(full.len());
    // Start of the path currently being written to `out`
    let mut segment_start = 0;
    let mut chars = full.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            ':' if chars.peek() == Some(&':') => {
                chars.next();
                out.truncate(segment_start);
            }
            '<' | '>' | ',' | ' ' | '(' | ')' | '[' | ']' | '&' | ';' | '*' | '+' => {
                out.push(c);
                segment_start = out.len();
            }
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    struct Plain;
    struct Wrapper<T>(T);

    #[test]
    fn test_identity_equality_uses_type_id() {
        assert_eq!(TypeIdentity::of::<Plain>(), TypeIdentity::of::<Plain>());
        assert_ne!(TypeIdentity::of::<Plain>(), TypeIdentity::of::<u32>());
        assert_ne!(
            TypeIdentity::of::<Wrapper<u8>>(),
            TypeIdentity::of::<Wrapper<u16>>()
        );
    }

    #[test]
    fn test_identity_hashes_consistently() {
        let mut set = HashSet::new();
        set.insert(TypeIdentity::of::<Plain>());
        set.insert(TypeIdentity::of::<Plain>());
        set.insert(TypeIdentity::of::<String>());
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_of_val_matches_of() {
        let value = Wrapper(5u8);
        assert_eq!(TypeIdentity::of_val(&value), TypeIdentity::of::<Wrapper<u8>>());
        assert_eq!(TypeIdentity::of_val("str"), TypeIdentity::of::<str>());
    }

    #[test]
    fn test_fully_qualified_name() {
        let id = TypeIdentity::of::<Plain>();
        assert_eq!(id.name(), "namedlog::identity::tests::Plain");
        assert_eq!(
            id.logger_name(NamingStyle::FullyQualified),
            "namedlog::identity::tests::Plain"
        );
        assert_eq!(id.to_string(), id.name());
    }

    #[test]
    fn test_simple_name_strips_paths() {
        assert_eq!(
            TypeIdentity::of::<Plain>().logger_name(NamingStyle::Simple),
            "Plain"
        );
        assert_eq!(
            TypeIdentity::of::<Wrapper<String>>().logger_name(NamingStyle::Simple),
            "Wrapper<String>"
        );
        assert_eq!(simple_name("u32"), "u32");
        assert_eq!(
            simple_name("(alloc::string::String, core::option::Option<i32>)"),
            "(String, Option<i32>)"
        );
        assert_eq!(
            simple_name("&dyn core::any::Any + core::marker::Send"),
            "&dyn Any + Send"
        );
        assert_eq!(simple_name("[a::b::C; 4]"), "[C; 4]");
    }

    #[test]
    fn test_naming_style_parse() {
        assert_eq!("Simple".parse::<NamingStyle>(), Ok(NamingStyle::Simple));
        assert_eq!("short".parse::<NamingStyle>(), Ok(NamingStyle::Simple));
        assert_eq!("full".parse::<NamingStyle>(), Ok(NamingStyle::FullyQualified));
        assert_eq!(
            "fully_qualified".parse::<NamingStyle>(),
            Ok(NamingStyle::FullyQualified)
        );
        assert!("kebab".parse::<NamingStyle>().is_err());
        assert_eq!(NamingStyle::default(), NamingStyle::FullyQualified);
    }
}
