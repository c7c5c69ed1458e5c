//! Closed wire vocabularies.
//!
//! A vocabulary is a Rust enum whose variants each own one exact schema
//! literal. [`wire_enum!`](crate::wire_enum) declares the enum and its
//! literals; everything else (lookup table, `Display`, `FromStr`, serde)
//! is shared through [`WireEnum`] and [`WireTable`].
//!
//! Encoding is total. Decoding is an exact, case-sensitive lookup and fails
//! with [`BindingError::InvalidEnumValue`] for anything outside the declared
//! set; unknown tokens are never passed through or defaulted.

use crate::error::BindingError;
use crate::schema::{SchemaNamespace, SchemaVersion};
use serde::de::{self, Visitor};
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

/// A schema-defined closed vocabulary.
pub trait WireEnum: Copy + Eq + Hash + fmt::Debug + Send + Sync + 'static {
    /// Schema type name, e.g. `enumACLPropagation`.
    const TYPE_NAME: &'static str;
    /// Target namespace of the declaring schema.
    const NAMESPACE: SchemaNamespace;
    /// Every variant, in declaration order.
    const VARIANTS: &'static [Self];

    /// The wire literal of this variant.
    fn as_wire_str(&self) -> &'static str;

    /// Lookup table shared by all decodes of this vocabulary.
    fn table() -> &'static WireTable<Self>;

    fn encode(&self) -> &'static str {
        self.as_wire_str()
    }

    fn decode(wire: &str) -> Result<Self, BindingError> {
        Self::table()
            .lookup(wire)
            .ok_or_else(|| BindingError::invalid_enum_value::<Self>(wire))
    }

    fn schema() -> SchemaVersion {
        Self::NAMESPACE.version
    }
}

/// Wire literal to variant map, built once per vocabulary.
#[derive(Debug)]
pub struct WireTable<T: 'static> {
    by_wire: HashMap<&'static str, T>,
}

impl<T: WireEnum> WireTable<T> {
    pub fn build() -> Self {
        let mut by_wire = HashMap::with_capacity(T::VARIANTS.len());
        for variant in T::VARIANTS {
            // First declaration wins; duplicate_wire_values reports the rest.
            by_wire.entry(variant.as_wire_str()).or_insert(*variant);
        }
        Self { by_wire }
    }

    pub fn lookup(&self, wire: &str) -> Option<T> {
        self.by_wire.get(wire).copied()
    }

    pub fn len(&self) -> usize {
        self.by_wire.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_wire.is_empty()
    }
}

/// Wire literals declared by more than one variant of `T`.
pub fn duplicate_wire_values<T: WireEnum>() -> Vec<&'static str> {
    let mut seen = HashMap::with_capacity(T::VARIANTS.len());
    let mut duplicates = Vec::new();
    for variant in T::VARIANTS {
        let wire = variant.as_wire_str();
        if seen.insert(wire, *variant).is_some() && !duplicates.contains(&wire) {
            duplicates.push(wire);
        }
    }
    duplicates
}

/// serde visitor that decodes a string token into `T`.
pub struct WireVisitor<T>(PhantomData<T>);

impl<T> WireVisitor<T> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for WireVisitor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'de, T: WireEnum> Visitor<'de> for WireVisitor<T> {
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a value of {}", T::TYPE_NAME)
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<T, E> {
        T::decode(value).map_err(E::custom)
    }
}

/// Declare a wire vocabulary.
///
/// ```
/// use cmis_ws_binding::schema::CORE_200908;
/// use cmis_ws_binding::wire::WireEnum;
///
/// cmis_ws_binding::wire_enum! {
///     /// Example vocabulary.
///     pub enum Shade in CORE_200908 as "enumShade" {
///         Light => "light",
///         Dark => "dark",
///     }
/// }
///
/// assert_eq!(Shade::decode("dark").unwrap(), Shade::Dark);
/// assert_eq!(Shade::Light.encode(), "light");
/// assert!(Shade::decode("Dark").is_err());
/// ```
#[macro_export]
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident in $ns:path as $type_name:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $crate::wire::WireEnum for $name {
            const TYPE_NAME: &'static str = $type_name;
            const NAMESPACE: $crate::schema::SchemaNamespace = $ns;
            const VARIANTS: &'static [Self] = &[ $( Self::$variant ),+ ];

            fn as_wire_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $wire ),+
                }
            }

            fn table() -> &'static $crate::wire::WireTable<Self> {
                static TABLE: $crate::__private::Lazy<$crate::wire::WireTable<$name>> =
                    $crate::__private::Lazy::new($crate::wire::WireTable::<$name>::build);
                &TABLE
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::wire::WireEnum::as_wire_str(self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::BindingError;

            fn from_str(value: &str) -> ::std::result::Result<Self, Self::Err> {
                <Self as $crate::wire::WireEnum>::decode(value)
            }
        }

        impl ::std::convert::TryFrom<&str> for $name {
            type Error = $crate::error::BindingError;

            fn try_from(value: &str) -> ::std::result::Result<Self, Self::Error> {
                <Self as $crate::wire::WireEnum>::decode(value)
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                serializer.serialize_str($crate::wire::WireEnum::as_wire_str(self))
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                deserializer.deserialize_str($crate::wire::WireVisitor::<$name>::new())
            }
        }
    };
}
