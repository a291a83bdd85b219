//! Field introspection for populatable types
//!
//! `#[derive(Populate)]` generates a [`Populate`] implementation that lists
//! every declared field of a struct as a [`Field`]. Each field carries a
//! [`Slot`], a typed mutable reference drawn from a closed set of kinds, so
//! coercion is a single `match` rather than open-ended dynamic dispatch.

use std::fmt;
use std::time::Duration;

/// A type whose fields can be populated from a [`Source`](crate::Source).
///
/// Implemented by `#[derive(Populate)]` for structs. The supported scalar
/// kinds implement it too, reporting [`Shape::Scalar`], so that handing a
/// bare value to [`populate`](crate::populate) is rejected at runtime.
pub trait Populate {
    /// Describe `self`, borrowing every field mutably.
    fn shape(&mut self) -> Shape<'_>;
}

/// What a [`Populate`] value looks like from the populator's side.
#[derive(Debug)]
pub enum Shape<'a> {
    /// A struct and its fields, in declaration order.
    Struct(Vec<Field<'a>>),
    /// A single value of the given kind; never populated.
    Scalar(Kind),
}

/// Descriptor of a single struct field.
#[derive(Debug)]
pub struct Field<'a> {
    /// Name handed to the formatter
    pub name: &'static str,
    /// Raw default used when the source has no value for the key
    pub default: Option<&'static str>,
    /// Whether the populator may assign this field
    pub settable: bool,
    /// Typed location of the field's value
    pub slot: Slot<'a>,
}

impl<'a> Field<'a> {
    /// A settable field.
    pub fn new(name: &'static str, default: Option<&'static str>, slot: Slot<'a>) -> Self {
        Self {
            name,
            default,
            settable: true,
            slot,
        }
    }

    /// A field the populator must leave alone (private or skipped).
    pub fn hidden(name: &'static str) -> Self {
        Self {
            name,
            default: None,
            settable: false,
            slot: Slot::Other,
        }
    }
}

macro_rules! kinds {
    ($($variant:ident($ty:ty) => $label:literal),* $(,)?) => {
        /// Declared kind of a field.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Kind {
            $(
                #[doc = concat!("`", $label, "`")]
                $variant,
            )*
            /// Any unsupported type; never assigned
            Other,
        }

        impl Kind {
            /// Human readable name of the kind.
            pub const fn name(self) -> &'static str {
                match self {
                    $(Kind::$variant => $label,)*
                    Kind::Other => "other",
                }
            }
        }

        /// Mutable reference to a field, tagged with its kind.
        pub enum Slot<'a> {
            $(
                #[doc = concat!("`", $label, "` field")]
                $variant(&'a mut $ty),
            )*
            /// Field of an unsupported type
            Other,
        }

        impl Slot<'_> {
            /// Kind of the referenced field.
            pub fn kind(&self) -> Kind {
                match self {
                    $(Slot::$variant(_) => Kind::$variant,)*
                    Slot::Other => Kind::Other,
                }
            }
        }

        $(
            impl Value for $ty {
                fn slot(&mut self) -> Slot<'_> {
                    Slot::$variant(self)
                }
            }

            impl Populate for $ty {
                fn shape(&mut self) -> Shape<'_> {
                    Shape::Scalar(Kind::$variant)
                }
            }
        )*
    };
}

/// A field type the populator knows how to coerce into.
///
/// Implemented for `String`, `bool`, every primitive integer and float, and
/// [`Duration`]. The derive macro calls this for fields of those types.
pub trait Value {
    /// Borrow `self` as a typed slot.
    fn slot(&mut self) -> Slot<'_>;
}

kinds! {
    Str(String) => "string",
    Bool(bool) => "bool",
    I8(i8) => "i8",
    I16(i16) => "i16",
    I32(i32) => "i32",
    I64(i64) => "i64",
    Isize(isize) => "isize",
    U8(u8) => "u8",
    U16(u16) => "u16",
    U32(u32) => "u32",
    U64(u64) => "u64",
    Usize(usize) => "usize",
    F32(f32) => "f32",
    F64(f64) => "f64",
    Duration(Duration) => "duration",
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Debug for Slot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Slot").field(&self.kind()).finish()
    }
}
