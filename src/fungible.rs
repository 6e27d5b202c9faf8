//! Fungibility: the structural compatibility relation between declared
//! types that share a wire layout.
//!
//! Every codec-participating type reports a [`Shape`] — a small recursive
//! descriptor of how it's laid out on the wire, stripped of names. Two
//! declared types are fungible iff their `Shape`s satisfy [`fungible`]'s
//! eighteen rules. This is deliberately a runtime predicate over an
//! explicit value (`Shape`), not a trait-bound compile-time rejection:
//! comparing recursive, heap-shaped descriptors at compile time would need
//! `const` allocation Rust doesn't offer yet. The [`crate::protocol`] gate
//! is the one place this predicate gets consulted before I/O.
use std::fmt;

/// Distinguishes an active table entry from a declared tombstone, so two
/// tables can be checked for a matching tombstone kind entry by entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    Active,
    Deleted,
}

/// A structural descriptor of a declared type's wire layout. Two `Shape`s
/// being `==` means "identical", which is stricter than [`fungible`] —
/// rule 11 (`Result<E,A> ≡ Result<E,B>`) needs that stricter notion for the
/// error type `E`.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Bool,
    Char,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    Array(Box<Shape>, usize),
    Sequence(Box<Shape>),
    Set(Box<Shape>),
    Map(Box<Shape>, Box<Shape>),
    Tuple(Vec<Shape>),
    String,
    Binary,
    Optional(Box<Shape>),
    Outcome(Box<Shape>, Box<Shape>),
    Variant(Vec<Shape>),
    Record(Vec<Shape>),
    ValueWrapper(Box<Shape>),
    Table(u64, Vec<(u64, EntryKind, Shape)>),
    Handle,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Implemented by every codec-participating type; `shape()` takes no
/// `self` because the descriptor depends only on the declared type, never
/// on a particular value.
pub trait WireType {
    fn shape() -> Shape;
}

macro_rules! impl_wire_type {
    ($t:ty, $shape:expr) => {
        impl WireType for $t {
            fn shape() -> Shape {
                $shape
            }
        }
    };
}

impl_wire_type!(bool, Shape::Bool);
impl_wire_type!(char, Shape::Char);
impl_wire_type!(i8, Shape::I8);
impl_wire_type!(i16, Shape::I16);
impl_wire_type!(i32, Shape::I32);
impl_wire_type!(i64, Shape::I64);
impl_wire_type!(u8, Shape::U8);
impl_wire_type!(u16, Shape::U16);
impl_wire_type!(u32, Shape::U32);
impl_wire_type!(u64, Shape::U64);
impl_wire_type!(f32, Shape::F32);
impl_wire_type!(f64, Shape::F64);
impl_wire_type!((), Shape::Tuple(Vec::new()));
impl_wire_type!(String, Shape::String);
impl_wire_type!(crate::container::Bytes, Shape::Binary);

impl<T: WireType, const N: usize> WireType for [T; N] {
    fn shape() -> Shape {
        Shape::Array(Box::new(T::shape()), N)
    }
}

impl<T: WireType, const N: usize> WireType for crate::container::LogicalBuffer<T, N> {
    fn shape() -> Shape {
        // A logical buffer pair is fungible with a sequence of the element
        // type and with any fungible fixed array; reporting it as a
        // `Sequence` here and special-casing `Array` in `fungible` covers
        // both.
        Shape::Sequence(Box::new(T::shape()))
    }
}

impl<T: WireType> WireType for Vec<T> {
    fn shape() -> Shape {
        Shape::Sequence(Box::new(T::shape()))
    }
}

impl<T: WireType> WireType for std::collections::HashSet<T> {
    fn shape() -> Shape {
        Shape::Set(Box::new(T::shape()))
    }
}

impl<T: WireType> WireType for std::collections::BTreeSet<T> {
    fn shape() -> Shape {
        Shape::Set(Box::new(T::shape()))
    }
}

impl<K: WireType, V: WireType> WireType for std::collections::HashMap<K, V> {
    fn shape() -> Shape {
        Shape::Map(Box::new(K::shape()), Box::new(V::shape()))
    }
}

impl<K: WireType, V: WireType> WireType for std::collections::BTreeMap<K, V> {
    fn shape() -> Shape {
        Shape::Map(Box::new(K::shape()), Box::new(V::shape()))
    }
}

impl<T: WireType> WireType for Option<T> {
    fn shape() -> Shape {
        Shape::Optional(Box::new(T::shape()))
    }
}

impl<E: WireType, T: WireType> WireType for crate::outcome::Outcome<E, T> {
    fn shape() -> Shape {
        Shape::Outcome(Box::new(E::shape()), Box::new(T::shape()))
    }
}

impl<T: crate::variant::VariantShape> WireType for crate::variant::Variant<T> {
    fn shape() -> Shape {
        Shape::Variant(T::alternative_shapes())
    }
}

macro_rules! impl_tuple_wire_type {
    ($($name:ident),+) => {
        impl<$($name: WireType),+> WireType for ($($name,)+) {
            fn shape() -> Shape {
                Shape::Tuple(vec![$($name::shape()),+])
            }
        }
    };
}

impl_tuple_wire_type!(A);
impl_tuple_wire_type!(A, B);
impl_tuple_wire_type!(A, B, C);
impl_tuple_wire_type!(A, B, C, D);
impl_tuple_wire_type!(A, B, C, D, E);
impl_tuple_wire_type!(A, B, C, D, E, F);
impl_tuple_wire_type!(A, B, C, D, E, F, G);
impl_tuple_wire_type!(A, B, C, D, E, F, G, H);

/// An integral element type never being `fungible` with a bare non-integral
/// of the same shape needs to be decidable from a `Shape` alone.
fn is_integral(s: &Shape) -> bool {
    matches!(
        s,
        Shape::I8
            | Shape::I16
            | Shape::I32
            | Shape::I64
            | Shape::U8
            | Shape::U16
            | Shape::U32
            | Shape::U64
            | Shape::Char
    )
}

/// The fungibility relation: structural wire-layout compatibility between
/// two declared `Shape`s.
pub fn fungible(a: &Shape, b: &Shape) -> bool {
    use Shape::*;
    match (a, b) {
        // Integer/char fungibility is exact, never cross-width or
        // cross-signedness. Each primitive only matches its own identical
        // shape (reflexivity covers this uniformly).
        (Bool, Bool) | (Char, Char) => true,
        (I8, I8) | (I16, I16) | (I32, I32) | (I64, I64) => true,
        (U8, U8) | (U16, U16) | (U32, U32) | (U64, U64) => true,
        (F32, F32) | (F64, F64) => true,
        (String, String) | (Binary, Binary) | (Handle, Handle) => true,

        // array<T,N> ≡ array<U,N> iff same length and fungible elements.
        (Array(t, n1), Array(u, n2)) => n1 == n2 && fungible(t, u),

        // sequence<T> ≡ sequence<U> iff fungible elements.
        (Sequence(t), Sequence(u)) => fungible(t, u),

        // sequence<T> ≡ array<U,N>, independent of N (both directions).
        (Sequence(t), Array(u, _)) | (Array(u, _), Sequence(t)) => fungible(t, u),

        // sequence/array<T> ≡ tuple<U0..Uk-1> iff T non-integral and
        // fungible with every element.
        (Sequence(t), Tuple(us)) | (Tuple(us), Sequence(t)) => {
            !is_integral(t) && us.iter().all(|u| fungible(t, u))
        }
        (Array(t, n), Tuple(us)) | (Tuple(us), Array(t, n)) => {
            *n == us.len() && !is_integral(t) && us.iter().all(|u| fungible(t, u))
        }

        // tuple<A0..An-1> ≡ tuple<B0..Bn-1> iff equal arity and pairwise
        // fungible; pair<A,B> is just the 2-arity case, already represented
        // as a `Tuple` of length 2.
        (Tuple(ats), Tuple(bts)) => {
            ats.len() == bts.len() && ats.iter().zip(bts).all(|(x, y)| fungible(x, y))
        }

        // map<K1,V1> ≡ map<K2,V2> iff fungible keys and values.
        (Map(k1, v1), Map(k2, v2)) => fungible(k1, k2) && fungible(v1, v2),

        // Sets generalize the same way.
        (Set(t), Set(u)) => fungible(t, u),

        // Optional<A> ≡ Optional<B> iff fungible(A,B).
        (Optional(t), Optional(u)) => fungible(t, u),

        // Result<E,A> ≡ Result<E,B> iff E identical and fungible(A,B).
        (Outcome(e1, t1), Outcome(e2, t2)) => e1 == e2 && fungible(t1, t2),

        // Variant<A0..Am-1> ≡ Variant<B0..Bm-1> iff equal arity and pairwise
        // fungible.
        (Variant(ats), Variant(bts)) => {
            ats.len() == bts.len() && ats.iter().zip(bts).all(|(x, y)| fungible(x, y))
        }

        // Records are fungible iff same declared member count and pairwise
        // fungible member types; names never participate.
        (Record(ams), Record(bms)) => {
            ams.len() == bms.len() && ams.iter().zip(bms).all(|(x, y)| fungible(x, y))
        }

        // A value wrapper is fungible with another value wrapper carrying a
        // fungible inner type, and with a bare value of a fungible inner
        // type.
        (ValueWrapper(a), ValueWrapper(b)) => fungible(a, b),
        (ValueWrapper(a), b) | (b, ValueWrapper(a)) => fungible(a, b),

        // Tables are fungible iff hashes match, arities match, and every
        // corresponding (id, kind) pair has fungible payload types and a
        // matching tombstone kind.
        (Table(h1, e1), Table(h2, e2)) => {
            h1 == h2
                && e1.len() == e2.len()
                && e1.iter().all(|(id, kind, shape)| {
                    e2.iter().any(|(id2, kind2, shape2)| {
                        id == id2 && kind == kind2 && fungible(shape, shape2)
                    })
                })
        }

        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reflexive_on_primitives() {
        assert!(fungible(&u32::shape(), &u32::shape()));
        assert!(fungible(&Vec::<u32>::shape(), &Vec::<u32>::shape()));
    }

    #[test]
    fn integers_are_exact() {
        assert!(!fungible(&i32::shape(), &u32::shape()));
        assert!(!fungible(&i32::shape(), &i64::shape()));
        assert!(!fungible(&f32::shape(), &f64::shape()));
        assert!(!fungible(&char::shape(), &u8::shape()));
        assert!(!fungible(&char::shape(), &i8::shape()));
    }

    #[test]
    fn sequence_and_array_independent_of_length() {
        let seq = Shape::Sequence(Box::new(Shape::U32));
        let arr5 = Shape::Array(Box::new(Shape::U32), 5);
        let arr9 = Shape::Array(Box::new(Shape::U32), 9);
        assert!(fungible(&seq, &arr5));
        assert!(fungible(&seq, &arr9));
        assert!(!fungible(&arr5, &arr9));
    }

    #[test]
    fn sequence_of_non_integral_fungible_with_tuple() {
        let seq = Shape::Sequence(Box::new(Shape::String));
        let tup = Shape::Tuple(vec![Shape::String, Shape::String]);
        assert!(fungible(&seq, &tup));

        // but never when the element type is integral (rule 5/6).
        let int_seq = Shape::Sequence(Box::new(Shape::U8));
        let int_tup = Shape::Tuple(vec![Shape::U8, Shape::U8]);
        assert!(!fungible(&int_seq, &int_tup));
    }

    #[test]
    fn value_wrapper_matches_bare_inner() {
        let wrapper = Shape::ValueWrapper(Box::new(Shape::U32));
        assert!(fungible(&wrapper, &Shape::U32));
        assert!(fungible(&Shape::U32, &wrapper));
    }

    #[test]
    fn tables_require_matching_hash_and_entries() {
        let t1 = Shape::Table(1, vec![(1, EntryKind::Active, Shape::U32)]);
        let t2 = Shape::Table(1, vec![(1, EntryKind::Active, Shape::U32)]);
        let t3 = Shape::Table(2, vec![(1, EntryKind::Active, Shape::U32)]);
        let t4 = Shape::Table(1, vec![(1, EntryKind::Deleted, Shape::U32)]);
        assert!(fungible(&t1, &t2));
        assert!(!fungible(&t1, &t3));
        assert!(!fungible(&t1, &t4));
    }
}
