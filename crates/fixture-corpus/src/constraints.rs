//! # Constrained Generics
//!
//! Named bounds built from traits. Atomic bounds (`Integral`, `Numeric`) are
//! implemented explicitly for the primitive types; compound ones
//! (`Comparable`, `Addable`, `SerializableNumeric`) are blanket impls over
//! their parts. `Number` is a disjunction, so it is listed per type.

use crate::error::FixtureError;
use std::collections::VecDeque;
use std::fmt::{self, Display};
use std::io::{self, Write};
use std::ops::{Add, Div, Mul, Rem, Sub};

pub trait Integral: Copy + Ord + Default + Display + Add<Output = Self> + Rem<Output = Self> {
    const ONE: Self;
}

/// Arithmetic types closed under the four basic operators.
pub trait Numeric:
    Copy
    + Default
    + PartialOrd
    + Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
}

/// Integral or floating point.
pub trait Number: Copy + Display {}

macro_rules! integral {
    ($($ty:ty),+) => {
        $(
            impl Integral for $ty {
                const ONE: Self = 1;
            }
            impl Numeric for $ty {}
            impl Number for $ty {}
        )+
    };
}

macro_rules! floating {
    ($($ty:ty),+) => {
        $(
            impl Numeric for $ty {}
            impl Number for $ty {}
        )+
    };
}

integral!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
floating!(f32, f64);

/// Equality plus a total order.
pub trait Comparable: Eq + Ord {}

impl<T: Eq + Ord> Comparable for T {}

/// A sized sequence with a named element type and a borrowing iterator.
pub trait Container {
    type Value;
    type Iter<'a>: Iterator<Item = &'a Self::Value>
    where
        Self: 'a;

    fn iter(&self) -> Self::Iter<'_>;
    fn size(&self) -> usize;
}

impl<T> Container for Vec<T> {
    type Value = T;
    type Iter<'a>
        = std::slice::Iter<'a, T>
    where
        T: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        self.as_slice().iter()
    }

    fn size(&self) -> usize {
        self.len()
    }
}

impl<T> Container for VecDeque<T> {
    type Value = T;
    type Iter<'a>
        = std::collections::vec_deque::Iter<'a, T>
    where
        T: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        VecDeque::iter(self)
    }

    fn size(&self) -> usize {
        self.len()
    }
}

pub trait Serialize {
    fn serialize(&self) -> String;
}

pub trait SerializableNumeric: Numeric + Serialize {}

impl<T: Numeric + Serialize> SerializableNumeric for T {}

/// `Self + U` is well formed.
pub trait Addable<U>: Add<U> {}

impl<T: Add<U>, U> Addable<U> for T {}

/// Whole cents. The only type here that is both `Numeric` and `Serialize`.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Cents(pub i64);

macro_rules! cents_op {
    ($($trait:ident::$method:ident => $op:tt),+) => {
        $(
            impl $trait for Cents {
                type Output = Cents;

                fn $method(self, rhs: Cents) -> Cents {
                    Cents(self.0 $op rhs.0)
                }
            }
        )+
    };
}

cents_op!(Add::add => +, Sub::sub => -, Mul::mul => *, Div::div => /);

impl Numeric for Cents {}

impl Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, (self.0 % 100).abs())
    }
}

impl Serialize for Cents {
    fn serialize(&self) -> String {
        format!("{{\"cents\":{}}}", self.0)
    }
}

pub fn gcd<T: Integral>(a: T, b: T) -> T {
    if b == T::default() {
        a
    } else {
        gcd(b, a % b)
    }
}

pub fn zero<T: Numeric>() -> T {
    T::default()
}

pub fn increment_v1<T>(x: T) -> T
where
    T: Integral,
{
    x + T::ONE
}

pub fn increment_v2<T: Integral>(x: T) -> T {
    x + T::ONE
}

pub fn increment_v3(x: impl Integral) -> impl Integral {
    x + Integral::ONE
}

pub fn largest<T: Comparable + Copy>(a: T, b: T) -> T {
    a.max(b)
}

pub fn add<T: Addable<U>, U>(a: T, b: U) -> T::Output {
    a + b
}

pub fn serialize_all<T: SerializableNumeric>(values: &[T]) -> Vec<String> {
    values.iter().map(Serialize::serialize).collect()
}

/// Owns any [`Container`].
pub struct ContainerWrapper<C: Container> {
    container: C,
}

impl<C: Container> ContainerWrapper<C> {
    pub fn new(container: C) -> Self {
        Self { container }
    }

    pub fn iter(&self) -> C::Iter<'_> {
        self.container.iter()
    }

    pub fn size(&self) -> usize {
        self.container.size()
    }
}

pub fn print_number(out: &mut dyn Write, n: &impl Number) -> io::Result<()> {
    writeln!(out, "Number: {n}")
}

pub fn process<T: Numeric>(out: &mut dyn Write, value: T) -> io::Result<()> {
    let result = value * value;
    writeln!(out, "Processed: {result}")
}

/// Whether a concrete type is supported, picked by whether it is `Numeric`.
#[macro_export]
macro_rules! numeric_supported {
    ($ty:ty) => {
        $crate::implements!($ty: $crate::constraints::Numeric)
    };
}

#[allow(clippy::approx_constant)]
pub fn run(out: &mut dyn Write) -> Result<(), FixtureError> {
    writeln!(out, "GCD of 48 and 18: {}", gcd(48, 18))?;
    writeln!(out, "Zero for int: {}", zero::<i32>())?;
    writeln!(out, "Zero for double: {}", zero::<f64>())?;

    let wrapper = ContainerWrapper::new(vec![1, 2, 3, 4, 5]);
    writeln!(out, "Container size: {}", wrapper.size())?;

    print_number(out, &42)?;
    print_number(out, &3.14159)?;
    process(out, 10)?;
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
            "GCD of 48 and 18: 6\n\
             Zero for int: 0\n\
             Zero for double: 0\n\
             Container size: 5\n\
             Number: 42\n\
             Number: 3.14159\n\
             Processed: 100\n"
        );
    }

    #[rstest]
    #[case(48, 18, 6)]
    #[case(17, 5, 1)]
    #[case(9, 0, 9)]
    #[case(0, 9, 9)]
    fn test_gcd(#[case] a: u32, #[case] b: u32, #[case] expected: u32) {
        assert_eq!(gcd(a, b), expected);
    }

    #[test]
    fn test_increment_forms_agree() {
        assert_eq!(increment_v1(41), 42);
        assert_eq!(increment_v2(41u8), 42);
        assert_eq!(increment_v3(41i64).to_string(), "42");
    }

    #[test]
    fn test_supported_selection() {
        assert!(crate::numeric_supported!(i32));
        assert!(crate::numeric_supported!(f64));
        assert!(crate::numeric_supported!(Cents));
        assert!(!crate::numeric_supported!(String));
        assert!(!crate::numeric_supported!(bool));
    }

    #[test]
    fn test_mixed_operand_add() {
        assert_eq!(add(1.5, 2.0), 3.5);
        assert_eq!(add(String::from("ab"), "cd"), "abcd");
    }

    #[test]
    fn test_cents_serialize_and_arithmetic() {
        let total = Cents(250) + Cents(199);
        assert_eq!(total.to_string(), "4.49");
        assert_eq!(serialize_all(&[total, Cents(5)]), vec!["{\"cents\":449}", "{\"cents\":5}"]);
        let mut buffer = Vec::new();
        process(&mut buffer, Cents(300)).unwrap();
        assert_eq!(buffer, b"Processed: 900.00\n");
    }

    #[test]
    fn test_wrapper_over_deque() {
        let wrapper = ContainerWrapper::new(VecDeque::from([3, 1, 2]));
        assert_eq!(wrapper.size(), 3);
        assert_eq!(wrapper.iter().copied().max(), Some(3));
        assert_eq!(largest('a', 'z'), 'z');
    }
}
