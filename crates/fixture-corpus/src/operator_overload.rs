//! # Operator Overloading
//!
//! - [`Complex`]: compound assignment, negation, indexing, binary arithmetic
//!   (including mixed `f64` operands), equality, `Display` and `FromStr`.
//!   Conversions: `From<f64>` is the cheap, lossless direction; the lossy one
//!   (magnitude) is `From<Complex> for f64`, and truthiness is the named
//!   [`Complex::is_nonzero`]. The call operator becomes [`Complex::scale`].
//! - [`Text`]: a string wrapper converting to and from `String`/`&str`, with
//!   `+` and `+=` for concatenation.
//! - [`Grid`]: two-index access. `grid[r][c]` works through the row slice that
//!   `grid[r]` returns; [`Grid::row`] and [`Grid::row_mut`] hand out checked
//!   row proxies that report [`FixtureError::OutOfRange`] instead of panicking.

use crate::error::FixtureError;
use print_support::Decimal;
use std::fmt;
use std::io::Write;
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

// =============================================================================
// Complex
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Complex {
    real: f64,
    imag: f64,
}

impl Complex {
    pub fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    pub fn real(&self) -> f64 {
        self.real
    }

    pub fn imag(&self) -> f64 {
        self.imag
    }

    pub fn is_nonzero(&self) -> bool {
        self.real != 0.0 || self.imag != 0.0
    }

    pub fn magnitude(&self) -> f64 {
        self.real.hypot(self.imag)
    }

    /// Component 0 is the real part, 1 the imaginary part.
    pub fn component(&self, index: usize) -> Result<f64, FixtureError> {
        match index {
            0 => Ok(self.real),
            1 => Ok(self.imag),
            _ => Err(FixtureError::OutOfRange { index, extent: 2 }),
        }
    }

    pub fn component_mut(&mut self, index: usize) -> Result<&mut f64, FixtureError> {
        match index {
            0 => Ok(&mut self.real),
            1 => Ok(&mut self.imag),
            _ => Err(FixtureError::OutOfRange { index, extent: 2 }),
        }
    }

    pub fn scale(&self, factor: f64) -> Self {
        Self::new(self.real * factor, self.imag * factor)
    }
}

impl From<f64> for Complex {
    fn from(real: f64) -> Self {
        Self::new(real, 0.0)
    }
}

impl From<Complex> for f64 {
    fn from(value: Complex) -> Self {
        value.magnitude()
    }
}

impl AddAssign for Complex {
    fn add_assign(&mut self, other: Self) {
        self.real += other.real;
        self.imag += other.imag;
    }
}

impl SubAssign for Complex {
    fn sub_assign(&mut self, other: Self) {
        self.real -= other.real;
        self.imag -= other.imag;
    }
}

impl MulAssign for Complex {
    fn mul_assign(&mut self, other: Self) {
        let real = self.real * other.real - self.imag * other.imag;
        let imag = self.real * other.imag + self.imag * other.real;
        self.real = real;
        self.imag = imag;
    }
}

impl Neg for Complex {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.real, -self.imag)
    }
}

impl Index<usize> for Complex {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.real,
            1 => &self.imag,
            _ => panic!("{}", FixtureError::OutOfRange { index, extent: 2 }),
        }
    }
}

impl IndexMut<usize> for Complex {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        match index {
            0 => &mut self.real,
            1 => &mut self.imag,
            _ => panic!("{}", FixtureError::OutOfRange { index, extent: 2 }),
        }
    }
}

impl<T: Into<Complex>> Add<T> for Complex {
    type Output = Self;

    fn add(mut self, rhs: T) -> Self {
        self += rhs.into();
        self
    }
}

impl<T: Into<Complex>> Sub<T> for Complex {
    type Output = Self;

    fn sub(mut self, rhs: T) -> Self {
        self -= rhs.into();
        self
    }
}

impl<T: Into<Complex>> Mul<T> for Complex {
    type Output = Self;

    fn mul(mut self, rhs: T) -> Self {
        self *= rhs.into();
        self
    }
}

impl Add<Complex> for f64 {
    type Output = Complex;

    fn add(self, rhs: Complex) -> Complex {
        Complex::from(self) + rhs
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Decimal(self.real))?;
        if self.imag >= 0.0 {
            f.write_str("+")?;
        }
        write!(f, "{}i", Decimal(self.imag))
    }
}

/// Parses two whitespace-separated numbers: `"3 4"` is `3+4i`.
impl FromStr for Complex {
    type Err = FixtureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let mut next = || -> Result<f64, FixtureError> {
            let token = parts
                .next()
                .ok_or_else(|| FixtureError::Parse(format!("expected two numbers in {s:?}")))?;
            token
                .parse()
                .map_err(|e| FixtureError::Parse(format!("{token:?}: {e}")))
        };
        let real = next()?;
        let imag = next()?;
        Ok(Self::new(real, imag))
    }
}

// =============================================================================
// Text
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Text(String);

impl Text {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Text {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Text {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<Text> for String {
    fn from(value: Text) -> Self {
        value.0
    }
}

impl AsRef<str> for Text {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl AddAssign<&Text> for Text {
    fn add_assign(&mut self, other: &Text) {
        self.0.push_str(&other.0);
    }
}

impl Add<&Text> for &Text {
    type Output = Text;

    fn add(self, rhs: &Text) -> Text {
        let mut result = self.clone();
        result += rhs;
        result
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Grid
// =============================================================================

/// Row-major `rows x cols` matrix of `i32`, zero-initialised.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<i32>,
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![0; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn row(&self, row: usize) -> Result<Row<'_>, FixtureError> {
        let range = self.row_range(row)?;
        Ok(Row {
            cells: &self.cells[range],
        })
    }

    pub fn row_mut(&mut self, row: usize) -> Result<RowMut<'_>, FixtureError> {
        let range = self.row_range(row)?;
        Ok(RowMut {
            cells: &mut self.cells[range],
        })
    }

    /// Checked two-index read.
    pub fn get(&self, row: usize, col: usize) -> Result<i32, FixtureError> {
        self.row(row)?.get(col)
    }

    /// Checked two-index write.
    pub fn set(&mut self, row: usize, col: usize, value: i32) -> Result<(), FixtureError> {
        self.row_mut(row)?.set(col, value)
    }

    fn row_range(&self, row: usize) -> Result<std::ops::Range<usize>, FixtureError> {
        if row >= self.rows {
            return Err(FixtureError::OutOfRange {
                index: row,
                extent: self.rows,
            });
        }
        let start = row * self.cols;
        Ok(start..start + self.cols)
    }
}

impl Index<usize> for Grid {
    type Output = [i32];

    fn index(&self, row: usize) -> &[i32] {
        match self.row_range(row) {
            Ok(range) => &self.cells[range],
            Err(e) => panic!("{e}"),
        }
    }
}

impl IndexMut<usize> for Grid {
    fn index_mut(&mut self, row: usize) -> &mut [i32] {
        match self.row_range(row) {
            Ok(range) => &mut self.cells[range],
            Err(e) => panic!("{e}"),
        }
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = i32;

    fn index(&self, (row, col): (usize, usize)) -> &i32 {
        &self[row][col]
    }
}

impl IndexMut<(usize, usize)> for Grid {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut i32 {
        &mut self[row][col]
    }
}

/// Read-only view of one grid row.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    cells: &'a [i32],
}

impl Row<'_> {
    pub fn get(&self, col: usize) -> Result<i32, FixtureError> {
        self.cells
            .get(col)
            .copied()
            .ok_or(FixtureError::OutOfRange {
                index: col,
                extent: self.cells.len(),
            })
    }
}

/// Mutable view of one grid row.
#[derive(Debug)]
pub struct RowMut<'a> {
    cells: &'a mut [i32],
}

impl RowMut<'_> {
    pub fn get(&self, col: usize) -> Result<i32, FixtureError> {
        Row { cells: &*self.cells }.get(col)
    }

    pub fn set(&mut self, col: usize, value: i32) -> Result<(), FixtureError> {
        let extent = self.cells.len();
        let cell = self
            .cells
            .get_mut(col)
            .ok_or(FixtureError::OutOfRange { index: col, extent })?;
        *cell = value;
        Ok(())
    }
}

pub fn run(out: &mut dyn Write) -> Result<(), FixtureError> {
    let a = Complex::new(3.0, 4.0);
    let b = Complex::new(1.0, 2.0);

    let c = a + b;
    let d = a * b;
    let e = -a;

    let magnitude: f64 = a.into();

    if a.is_nonzero() {
        writeln!(out, "Complex number is non-zero")?;
    }

    writeln!(out, "a = {a}")?;
    writeln!(out, "b = {b}")?;
    writeln!(out, "a + b = {c}")?;
    writeln!(out, "a * b = {d}")?;
    writeln!(out, "-a = {e}")?;
    writeln!(out, "Magnitude of a = {}", Decimal(magnitude))?;

    let s1 = Text::from("Hello, ");
    let s2 = Text::from("world!");
    let s3 = &s1 + &s2;

    let as_str: &str = s3.as_str();
    writeln!(out, "{as_str}")?;
    let owned: String = s3.into();
    writeln!(out, "{owned}")?;

    let mut grid = Grid::new(5, 10);
    grid[2][3] = 42;
    writeln!(out, "arr[2][3] = {}", grid[2][3])?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_output() {
        let mut buffer = Vec::new();
        run(&mut buffer).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "Complex number is non-zero\n\
             a = 3+4i\n\
             b = 1+2i\n\
             a + b = 4+6i\n\
             a * b = -5+10i\n\
             -a = -3-4i\n\
             Magnitude of a = 5\n\
             Hello, world!\n\
             Hello, world!\n\
             arr[2][3] = 42\n"
        );
    }

    #[test]
    fn test_mixed_operands_and_comparison() {
        let a = Complex::new(1.0, 1.0);
        assert_eq!(a + 2.0, Complex::new(3.0, 1.0));
        assert_eq!(2.0 + a, Complex::new(3.0, 1.0));
        assert_eq!(a - 1.0, Complex::new(0.0, 1.0));
        assert_eq!(a * 2.0, a.scale(2.0));
        assert_ne!(a, Complex::from(1.0));
        assert!(!Complex::default().is_nonzero());
    }

    #[test]
    fn test_component_access() {
        let mut z = Complex::new(1.5, -2.0);
        assert_eq!(z[0], 1.5);
        assert_eq!(z.component(1).unwrap(), -2.0);
        *z.component_mut(0).unwrap() = 7.0;
        z[1] = 8.0;
        assert_eq!(z, Complex::new(7.0, 8.0));
        assert!(matches!(
            z.component(2),
            Err(FixtureError::OutOfRange { index: 2, extent: 2 })
        ));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_index_panics_past_extent() {
        let z = Complex::new(1.0, 2.0);
        let _ = z[2];
    }

    #[test]
    fn test_parse() {
        let z: Complex = "1.5 -2".parse().unwrap();
        assert_eq!(z, Complex::new(1.5, -2.0));
        assert_eq!(z.to_string(), "1.5-2i");
        assert!(matches!("3".parse::<Complex>(), Err(FixtureError::Parse(_))));
        assert!(matches!("x 1".parse::<Complex>(), Err(FixtureError::Parse(_))));
    }

    #[test]
    fn test_text_concatenation() {
        let mut text = Text::from("ab");
        text += &Text::from(String::from("cd"));
        assert_eq!(text.as_ref(), "abcd");
        assert_eq!(String::from(text), "abcd");
    }

    #[test]
    fn test_grid_uses_declared_columns() {
        let mut grid = Grid::new(3, 4);
        grid.set(2, 3, 9).unwrap();
        grid[(0, 1)] = 5;

        assert_eq!(grid.get(2, 3).unwrap(), 9);
        assert_eq!(grid[0][1], 5);
        assert_eq!(grid.row(2).unwrap().get(3).unwrap(), 9);
        assert_eq!((grid.rows(), grid.cols()), (3, 4));
    }

    #[test]
    fn test_grid_bounds_are_checked() {
        let mut grid = Grid::new(2, 2);
        assert!(matches!(
            grid.get(2, 0),
            Err(FixtureError::OutOfRange { index: 2, extent: 2 })
        ));
        assert!(matches!(
            grid.row_mut(0).unwrap().set(5, 1),
            Err(FixtureError::OutOfRange { index: 5, extent: 2 })
        ));
        assert_eq!(grid.row_mut(1).unwrap().get(1).unwrap(), 0);
    }
}
