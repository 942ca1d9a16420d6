//! # Type-Level Programming
//!
//! Compile-time reasoning about types, written with traits, associated
//! constants, generic associated types and macros:
//!
//! | Construct | Here |
//! |---|---|
//! | predicate on a type | [`TypeInfo`] associated constants |
//! | type transformation | [`AddConstRef::Output`] |
//! | bound-filtered function | [`is_even`], [`is_positive`], [`get_size`] |
//! | arity of a type pack | [`PackSize`] on tuples |
//! | argument pack expansion | [`print_all!`](crate::print_all) |
//! | type-constructor parameter, rebinding | [`Family`], [`PointerFamily`], [`Rebind`] |
//! | type equality | [`SameAs`], [`same_type`] |
//! | conditional type | [`Conditional`] |
//! | member / expression detection | [`implements!`](crate::implements) and friends |
//! | recursive conjunction | [`Conjunction`] over [`Cons`] lists |
//! | recursion with a base case | [`Nat::FACTORIAL`], [`factorial`] |
//!
//! Most facts are checked at compile time with `static_assertions`; [`run`]
//! prints the same facts so the fixture has observable output.

use crate::error::FixtureError;
use static_assertions::{assert_impl_all, assert_not_impl_any, assert_type_eq_all, const_assert, const_assert_eq};
use std::any::TypeId;
use std::collections::{BTreeSet, HashMap, VecDeque};
use std::io::Write;
use std::marker::PhantomData;
use std::ops::{Deref, Rem};
use std::rc::Rc;
use std::sync::Arc;

// =============================================================================
// Predicates
// =============================================================================

/// Compile-time facts about a type. Unlisted facts default to `false`.
pub trait TypeInfo {
    const IS_INTEGRAL: bool = false;
    const IS_FLOATING: bool = false;
    const IS_POINTER_LIKE: bool = false;
}

macro_rules! type_info {
    ($flag:ident: $($ty:ty),+) => {
        $(impl TypeInfo for $ty { const $flag: bool = true; })+
    };
}

type_info!(IS_INTEGRAL: i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
type_info!(IS_FLOATING: f32, f64);

impl TypeInfo for bool {}
impl TypeInfo for char {}
impl TypeInfo for String {}
impl TypeInfo for () {}
impl<T> TypeInfo for Vec<T> {}
impl<T: ?Sized> TypeInfo for &T {
    const IS_POINTER_LIKE: bool = true;
}
impl<T: ?Sized> TypeInfo for *const T {
    const IS_POINTER_LIKE: bool = true;
}
impl<T: ?Sized> TypeInfo for *mut T {
    const IS_POINTER_LIKE: bool = true;
}
impl<T: ?Sized> TypeInfo for Box<T> {
    const IS_POINTER_LIKE: bool = true;
}
impl<T: ?Sized> TypeInfo for Rc<T> {
    const IS_POINTER_LIKE: bool = true;
}
impl<T: ?Sized> TypeInfo for Arc<T> {
    const IS_POINTER_LIKE: bool = true;
}

// =============================================================================
// Transformation
// =============================================================================

/// Maps `T` to `&'a T`.
pub trait AddConstRef {
    type Output<'a>
    where
        Self: 'a;
}

impl<T: ?Sized> AddConstRef for T {
    type Output<'a>
        = &'a T
    where
        Self: 'a;
}

// =============================================================================
// Bound-filtered functions
// =============================================================================

/// Primitive integers. Only these types are accepted by [`is_even`].
pub trait Integer: Copy + PartialOrd + Rem<Output = Self> + TypeInfo {
    const ZERO: Self;
    const TWO: Self;
}

macro_rules! integer {
    ($($ty:ty),+) => {
        $(impl Integer for $ty { const ZERO: Self = 0; const TWO: Self = 2; })+
    };
}

integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

pub fn is_even<T: Integer>(value: T) -> bool {
    value % T::TWO == T::ZERO
}

pub fn is_positive<T: Integer>(value: T) -> bool {
    value > T::ZERO
}

/// Anything that can report an element count.
pub trait HasSize {
    fn size(&self) -> usize;
}

impl<T> HasSize for [T] {
    fn size(&self) -> usize {
        self.len()
    }
}

impl<T> HasSize for Vec<T> {
    fn size(&self) -> usize {
        self.len()
    }
}

impl HasSize for str {
    fn size(&self) -> usize {
        self.len()
    }
}

impl HasSize for String {
    fn size(&self) -> usize {
        self.len()
    }
}

impl<K, V, S> HasSize for HashMap<K, V, S> {
    fn size(&self) -> usize {
        self.len()
    }
}

pub fn get_size<C: HasSize + ?Sized>(container: &C) -> usize {
    container.size()
}

// =============================================================================
// Packs
// =============================================================================

/// Number of elements in a tuple type.
pub trait PackSize {
    const SIZE: usize;
}

macro_rules! pack_size {
    () => {
        impl PackSize for () {
            const SIZE: usize = 0;
        }
    };
    ($head:ident $(, $tail:ident)*) => {
        impl<$head $(, $tail)*> PackSize for ($head, $($tail,)*) {
            const SIZE: usize = 1 + <($($tail,)*) as PackSize>::SIZE;
        }
        pack_size!($($tail),*);
    };
}

pack_size!(A, B, C, D, E, F, G, H);

/// Writes every argument back to back, then a newline.
///
/// ```
/// let mut out: Vec<u8> = Vec::new();
/// fixture_corpus::print_all!(&mut out, 1, "-", 2.5).unwrap();
/// assert_eq!(out, b"1-2.5\n");
/// ```
#[macro_export]
macro_rules! print_all {
    ($out:expr $(, $arg:expr)* $(,)?) => {{
        #[allow(unused_mut)]
        let mut line = ::std::string::String::new();
        $( line.push_str(&::std::string::ToString::to_string(&$arg)); )*
        ::std::io::Write::write_fmt($out, ::std::format_args!("{}\n", line))
    }};
}

// =============================================================================
// Type constructors as parameters
// =============================================================================

/// A type constructor `T -> Member<T>`.
pub trait Family {
    type Member<T>;
}

pub struct VecFamily;
pub struct OptionFamily;

impl Family for VecFamily {
    type Member<T> = Vec<T>;
}

impl Family for OptionFamily {
    type Member<T> = Option<T>;
}

/// Re-applies the same type constructor to a different element type.
pub trait Rebind {
    type With<U>;
}

pub struct ContainerWrapper<F: Family, T> {
    pub container: F::Member<T>,
}

impl<F: Family, T> ContainerWrapper<F, T> {
    pub fn new(container: F::Member<T>) -> Self {
        Self { container }
    }
}

impl<F: Family, T> Rebind for ContainerWrapper<F, T> {
    type With<U> = ContainerWrapper<F, U>;
}

/// A smart-pointer constructor.
pub trait PointerFamily {
    type Pointer<T>: Deref<Target = T>;

    fn wrap<T>(value: T) -> Self::Pointer<T>;
}

pub struct BoxFamily;
pub struct RcFamily;

impl PointerFamily for BoxFamily {
    type Pointer<T> = Box<T>;

    fn wrap<T>(value: T) -> Box<T> {
        Box::new(value)
    }
}

impl PointerFamily for RcFamily {
    type Pointer<T> = Rc<T>;

    fn wrap<T>(value: T) -> Rc<T> {
        Rc::new(value)
    }
}

/// Owns a `T` through whichever pointer family `P` names.
pub struct ResourceManager<T, P: PointerFamily> {
    resource: P::Pointer<T>,
}

impl<T, P: PointerFamily> ResourceManager<T, P> {
    pub fn new(value: T) -> Self {
        Self {
            resource: P::wrap(value),
        }
    }

    pub fn get(&self) -> &T {
        &self.resource
    }
}

// =============================================================================
// Equality and selection
// =============================================================================

/// Implemented only when `Self` and `T` are the same type.
pub trait SameAs<T: ?Sized> {}

impl<T: ?Sized> SameAs<T> for T {}

pub fn same_type<T: ?Sized + 'static, U: ?Sized + 'static>() -> bool {
    TypeId::of::<T>() == TypeId::of::<U>()
}

pub struct If<const B: bool>;

pub trait Choose<T, F> {
    type Output;
}

impl<T, F> Choose<T, F> for If<true> {
    type Output = T;
}

impl<T, F> Choose<T, F> for If<false> {
    type Output = F;
}

/// `T` when `B` holds, otherwise `F`.
pub type Conditional<const B: bool, T, F> = <If<B> as Choose<T, F>>::Output;

// =============================================================================
// Detection
// =============================================================================

/// Evaluates to `true` when the concrete type satisfies the bound.
///
/// Works by method-resolution priority: the probe's `detected` method taking
/// `&Probe<T>` only exists when the bound holds; otherwise resolution falls
/// through to the auto-referenced fallback returning `false`. The type must be
/// concrete at the call site.
///
/// ```
/// use fixture_corpus::implements;
///
/// assert!(implements!(String: Clone + Default));
/// assert!(!implements!(std::cell::Cell<u8>: Sync));
/// ```
#[macro_export]
macro_rules! implements {
    ($ty:ty : $($bound:tt)+) => {{
        struct Probe<T: ?Sized>(::core::marker::PhantomData<T>);

        #[allow(dead_code)]
        trait Detected {
            fn detected(&self) -> bool {
                true
            }
        }
        impl<T: ?Sized + $($bound)+> Detected for Probe<T> {}

        #[allow(dead_code)]
        trait Fallback {
            fn detected(&self) -> bool {
                false
            }
        }
        impl<T: ?Sized> Fallback for &Probe<T> {}

        (&Probe::<$ty>(::core::marker::PhantomData)).detected()
    }};
}

/// Types with a resize operation.
pub trait Resize {
    fn resize_to(&mut self, len: usize);
}

impl<T: Clone + Default> Resize for Vec<T> {
    fn resize_to(&mut self, len: usize) {
        self.resize(len, T::default());
    }
}

impl<T: Clone + Default> Resize for VecDeque<T> {
    fn resize_to(&mut self, len: usize) {
        self.resize(len, T::default());
    }
}

impl Resize for String {
    fn resize_to(&mut self, len: usize) {
        while self.len() > len {
            self.pop();
        }
        while self.len() < len {
            self.push(' ');
        }
    }
}

/// Types that name an element type.
pub trait HasValueType {
    type ValueType;
}

impl<T> HasValueType for Vec<T> {
    type ValueType = T;
}

impl<T> HasValueType for VecDeque<T> {
    type ValueType = T;
}

impl<T> HasValueType for BTreeSet<T> {
    type ValueType = T;
}

impl<T> HasValueType for Option<T> {
    type ValueType = T;
}

#[macro_export]
macro_rules! has_resize {
    ($ty:ty) => {
        $crate::implements!($ty: $crate::type_traits::Resize)
    };
}

#[macro_export]
macro_rules! has_value_type {
    ($ty:ty) => {
        $crate::implements!($ty: $crate::type_traits::HasValueType)
    };
}

/// Whether `{}` formatting compiles for the type.
#[macro_export]
macro_rules! has_display {
    ($ty:ty) => {
        $crate::implements!($ty: ::std::fmt::Display)
    };
}

// =============================================================================
// Recursion
// =============================================================================

/// A boolean fact about some type, usable in [`Conjunction`].
pub trait Predicate {
    const VALUE: bool;
}

pub struct IsIntegral<T>(PhantomData<T>);
pub struct IsFloating<T>(PhantomData<T>);

impl<T: TypeInfo> Predicate for IsIntegral<T> {
    const VALUE: bool = T::IS_INTEGRAL;
}

impl<T: TypeInfo> Predicate for IsFloating<T> {
    const VALUE: bool = T::IS_FLOATING;
}

/// Empty predicate list.
pub struct Nil;

/// Predicate list node.
pub struct Cons<H, T>(PhantomData<(H, T)>);

/// `true` when every predicate in the list holds; `Nil` is `true`.
pub trait Conjunction {
    const VALUE: bool;
}

impl Conjunction for Nil {
    const VALUE: bool = true;
}

impl<H: Predicate, T: Conjunction> Conjunction for Cons<H, T> {
    const VALUE: bool = H::VALUE && T::VALUE;
}

/// Builds a [`Cons`] list from predicate types.
#[macro_export]
macro_rules! all_of {
    () => { $crate::type_traits::Nil };
    ($head:ty $(, $tail:ty)* $(,)?) => {
        $crate::type_traits::Cons<$head, $crate::all_of!($($tail),*)>
    };
}

/// Type-level naturals.
pub trait Nat {
    const VALUE: u64;
    const FACTORIAL: u64;
}

pub struct Zero;
pub struct Succ<N>(PhantomData<N>);

impl Nat for Zero {
    const VALUE: u64 = 0;
    const FACTORIAL: u64 = 1;
}

impl<N: Nat> Nat for Succ<N> {
    const VALUE: u64 = N::VALUE + 1;
    const FACTORIAL: u64 = (N::VALUE + 1) * N::FACTORIAL;
}

pub type Five = Succ<Succ<Succ<Succ<Succ<Zero>>>>>;

pub const fn factorial(n: u64) -> u64 {
    match n {
        0 => 1,
        n => n * factorial(n - 1),
    }
}

// =============================================================================
// Compile-time checks
// =============================================================================

const_assert!(<i32 as TypeInfo>::IS_INTEGRAL);
const_assert!(!<f64 as TypeInfo>::IS_INTEGRAL);
const_assert!(<Box<str> as TypeInfo>::IS_POINTER_LIKE);
const_assert!(!<Vec<u8> as TypeInfo>::IS_POINTER_LIKE);
const_assert_eq!(<(i32, f64, char) as PackSize>::SIZE, 3);
const_assert_eq!(<() as PackSize>::SIZE, 0);
const_assert!(<all_of![IsIntegral<i32>, IsIntegral<u8>, IsIntegral<usize>] as Conjunction>::VALUE);
const_assert!(!<all_of![IsIntegral<i32>, IsFloating<i32>] as Conjunction>::VALUE);
const_assert_eq!(<Five as Nat>::FACTORIAL, 120);
const_assert_eq!(factorial(5), 120);

assert_impl_all!(i32: SameAs<i32>);
assert_not_impl_any!(i32: SameAs<f64>);
assert_type_eq_all!(<i32 as AddConstRef>::Output<'static>, &'static i32);
assert_type_eq_all!(
    <ContainerWrapper<VecFamily, i32> as Rebind>::With<f64>,
    ContainerWrapper<VecFamily, f64>
);
assert_type_eq_all!(Conditional<true, i32, f64>, i32);
assert_type_eq_all!(Conditional<false, i32, f64>, f64);

pub fn run(out: &mut dyn Write) -> Result<(), FixtureError> {
    writeln!(out, "is_integral<i32>: {}", <i32 as TypeInfo>::IS_INTEGRAL)?;
    writeln!(out, "is_integral<f64>: {}", <f64 as TypeInfo>::IS_INTEGRAL)?;
    writeln!(
        out,
        "is_pointer_like<Box<i32>>: {}",
        <Box<i32> as TypeInfo>::IS_POINTER_LIKE
    )?;
    writeln!(out, "is_even(42): {}", is_even(42))?;
    writeln!(out, "is_positive(-3): {}", is_positive(-3))?;
    writeln!(out, "get_size([1, 2, 3]): {}", get_size(&vec![1, 2, 3]))?;
    writeln!(
        out,
        "pack_size<(i32, f64, char)>: {}",
        <(i32, f64, char) as PackSize>::SIZE
    )?;
    writeln!(out, "same_type<i32, i32>: {}", same_type::<i32, i32>())?;
    writeln!(out, "same_type<i32, f64>: {}", same_type::<i32, f64>())?;
    writeln!(out, "has_resize<Vec<i32>>: {}", crate::has_resize!(Vec<i32>))?;
    writeln!(out, "has_resize<i32>: {}", crate::has_resize!(i32))?;
    writeln!(
        out,
        "has_value_type<Vec<i32>>: {}",
        crate::has_value_type!(Vec<i32>)
    )?;
    writeln!(out, "has_value_type<i32>: {}", crate::has_value_type!(i32))?;
    writeln!(out, "has_display<i32>: {}", crate::has_display!(i32))?;
    writeln!(out, "has_display<Vec<i32>>: {}", crate::has_display!(Vec<i32>))?;
    writeln!(
        out,
        "all_integral<i32, u8, usize>: {}",
        <crate::all_of![IsIntegral<i32>, IsIntegral<u8>, IsIntegral<usize>] as Conjunction>::VALUE
    )?;
    writeln!(
        out,
        "all_integral<i32, f64>: {}",
        <crate::all_of![IsIntegral<i32>, IsIntegral<f64>] as Conjunction>::VALUE
    )?;

    let wrapper = ContainerWrapper::<VecFamily, i32>::new(vec![4, 5, 6]);
    let rebound: <ContainerWrapper<VecFamily, i32> as Rebind>::With<f64> =
        ContainerWrapper::new(vec![0.5]);
    writeln!(
        out,
        "container_wrapper: {} ints, {} doubles",
        wrapper.container.len(),
        rebound.container.len()
    )?;

    let boxed = ResourceManager::<i32, BoxFamily>::new(7);
    let shared = ResourceManager::<String, RcFamily>::new("shared".to_string());
    writeln!(out, "resource_manager: {} {}", boxed.get(), shared.get())?;

    writeln!(out, "factorial<5>: {}", <Five as Nat>::FACTORIAL)?;
    crate::print_all!(out, 1, " two ", 3.5)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_full_output() {
        let mut buffer = Vec::new();
        run(&mut buffer).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "is_integral<i32>: true\n\
             is_integral<f64>: false\n\
             is_pointer_like<Box<i32>>: true\n\
             is_even(42): true\n\
             is_positive(-3): false\n\
             get_size([1, 2, 3]): 3\n\
             pack_size<(i32, f64, char)>: 3\n\
             same_type<i32, i32>: true\n\
             same_type<i32, f64>: false\n\
             has_resize<Vec<i32>>: true\n\
             has_resize<i32>: false\n\
             has_value_type<Vec<i32>>: true\n\
             has_value_type<i32>: false\n\
             has_display<i32>: true\n\
             has_display<Vec<i32>>: false\n\
             all_integral<i32, u8, usize>: true\n\
             all_integral<i32, f64>: false\n\
             container_wrapper: 3 ints, 1 doubles\n\
             resource_manager: 7 shared\n\
             factorial<5>: 120\n\
             1 two 3.5\n"
        );
    }

    #[rstest]
    #[case(0, 1)]
    #[case(1, 1)]
    #[case(5, 120)]
    #[case(10, 3_628_800)]
    fn test_factorial(#[case] n: u64, #[case] expected: u64) {
        assert_eq!(factorial(n), expected);
    }

    #[test]
    fn test_detection_on_more_types() {
        assert!(crate::has_resize!(String));
        assert!(crate::has_resize!(VecDeque<u8>));
        assert!(crate::has_value_type!(Option<String>));
        assert!(!crate::has_value_type!(String));
        assert!(crate::has_display!(str));
        assert!(!crate::has_display!(()));
    }

    #[test]
    fn test_string_resize() {
        let mut text = String::from("abc");
        text.resize_to(5);
        assert_eq!(text, "abc  ");
        text.resize_to(1);
        assert_eq!(text, "a");
    }

    #[test]
    fn test_get_size_on_unsized_and_maps() {
        assert_eq!(get_size("four"), 4);
        assert_eq!(get_size(&[1u8, 2][..]), 2);
        let map: HashMap<u8, u8> = [(1, 1)].into_iter().collect();
        assert_eq!(get_size(&map), 1);
    }

    #[test]
    fn test_option_family() {
        let wrapper = ContainerWrapper::<OptionFamily, u8>::new(Some(3));
        assert_eq!(wrapper.container, Some(3));
    }
}
