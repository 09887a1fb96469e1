//! # Operand
//! The argument accepted by [`BigInt::create_from`], [`BigInt::set`],
//! [`BigInt::add`], [`BigInt::subtract`] and [`BigInt::multiply`].
//!
//! Native numbers are held to the precision an `f64` represents exactly,
//! `|v| <= 2^53 - 1`; strings and `BigInt`s have no magnitude limit.
//! ```
//! use big_value::{BigInt, ErrorKind};
//!
//! let mut e = BigInt::create();
//! e.add(132).unwrap();
//! e.add("0x10").unwrap();
//! assert_eq!(e.to_string(), "148");
//!
//! let err = e.set(0x1111111111111111_u64).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::OutOfRange);
//! e.set("0x1111111111111111").unwrap();
//! ```

use std::borrow::Cow;

use crate::big_int::{BigInt, Sign};
use crate::big_num_constants::MAX_SAFE_INTEGER;
use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq)]
pub enum Operand<'a> {
    Signed(i128),
    Unsigned(u128),
    Float(f64),
    Str(Cow<'a, str>),
    Big(Cow<'a, BigInt>),
}

impl<'a> Operand<'a> {
    /// Short description of the kind of value carried, used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Operand::Signed(_) => "signed integer",
            Operand::Unsigned(_) => "unsigned integer",
            Operand::Float(_) => "number",
            Operand::Str(_) => "string",
            Operand::Big(_) => "BigInt",
        }
    }

    /// Converts the operand to a value, applying the precision limit to
    /// native numbers and the numeral grammar to strings.
    pub fn into_big_int(self) -> Result<BigInt> {
        match self {
            Operand::Signed(v) => {
                let mag = safe_magnitude(v.unsigned_abs())?;
                let sign = if v < 0 { Sign::Minus } else { Sign::Plus };
                Ok(BigInt::value_of(mag, sign))
            },
            Operand::Unsigned(v) => {
                let mag = safe_magnitude(v)?;
                Ok(BigInt::value_of(mag, Sign::Plus))
            },
            Operand::Float(v) => {
                if !v.is_finite() || v.fract() != 0.0 {
                    return Err(Error::out_of_range(format!("value {} is not an integer", v)));
                }
                if v.abs() > MAX_SAFE_INTEGER as f64 {
                    return Err(imprecise());
                }
                let sign = if v < 0.0 { Sign::Minus } else { Sign::Plus };
                Ok(BigInt::value_of(v.abs() as u64, sign))
            },
            Operand::Str(s) => s.parse(),
            Operand::Big(b) => Ok(b.into_owned()),
        }
    }
}

fn imprecise() -> Error {
    Error::out_of_range("large number lacks integer precision")
}

fn safe_magnitude(mag: u128) -> Result<u64> {
    if mag > MAX_SAFE_INTEGER as u128 {
        Err(imprecise())
    } else {
        Ok(mag as u64)
    }
}

macro_rules! impl_signed_to_operand {
    ($($i: ty),*) => {
    $(
    impl<'a> From<$i> for Operand<'a> {
        fn from(val: $i) -> Self {
            Operand::Signed(val as i128)
        }
    }
    )*
    };
}

macro_rules! impl_unsigned_to_operand {
    ($($u: ty),*) => {
    $(
    impl<'a> From<$u> for Operand<'a> {
        fn from(val: $u) -> Self {
            Operand::Unsigned(val as u128)
        }
    }
    )*
    };
}

impl_signed_to_operand!(i8, i16, i32, i64, isize, i128);
impl_unsigned_to_operand!(u8, u16, u32, u64, usize, u128);

impl<'a> From<f64> for Operand<'a> {
    fn from(val: f64) -> Self {
        Operand::Float(val)
    }
}

impl<'a> From<f32> for Operand<'a> {
    fn from(val: f32) -> Self {
        Operand::Float(val as f64)
    }
}

impl<'a> From<&'a str> for Operand<'a> {
    fn from(val: &'a str) -> Self {
        Operand::Str(Cow::Borrowed(val))
    }
}

impl<'a> From<&'a String> for Operand<'a> {
    fn from(val: &'a String) -> Self {
        Operand::Str(Cow::Borrowed(val.as_str()))
    }
}

impl<'a> From<String> for Operand<'a> {
    fn from(val: String) -> Self {
        Operand::Str(Cow::Owned(val))
    }
}

impl<'a> From<&'a BigInt> for Operand<'a> {
    fn from(val: &'a BigInt) -> Self {
        Operand::Big(Cow::Borrowed(val))
    }
}

impl<'a> From<BigInt> for Operand<'a> {
    fn from(val: BigInt) -> Self {
        Operand::Big(Cow::Owned(val))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn convert<'a>(op: impl Into<Operand<'a>>) -> Result<BigInt> {
        op.into().into_big_int()
    }

    #[test]
    fn test_native_limit() {
        assert_eq!(convert(9007199254740991_u64).unwrap().to_string(), "9007199254740991");
        assert_eq!(convert(-9007199254740991_i64).unwrap().to_string(), "-9007199254740991");

        for err in [
            convert(9007199254740992_u64),
            convert(-9007199254740992_i64),
            convert(0x1111111111111111_u64),
            convert(i128::MIN),
            convert(u128::MAX),
        ] {
            let err = err.unwrap_err();
            assert_eq!(err.kind(), ErrorKind::OutOfRange);
            assert_eq!(err.to_string(), "large number lacks integer precision");
        }
    }

    #[test]
    fn test_float() {
        assert_eq!(convert(42.0).unwrap(), BigInt::from(42));
        assert_eq!(convert(-7.0_f32).unwrap(), BigInt::from(-7));
        assert_eq!(convert(-0.0).unwrap(), BigInt::create());
        assert_eq!(convert(9007199254740991.0).unwrap().to_string(), "9007199254740991");

        assert_eq!(convert(1.5).unwrap_err().kind(), ErrorKind::OutOfRange);
        assert_eq!(convert(f64::NAN).unwrap_err().kind(), ErrorKind::OutOfRange);
        assert_eq!(convert(f64::INFINITY).unwrap_err().kind(), ErrorKind::OutOfRange);
        assert_eq!(convert(1e20).unwrap_err().kind(), ErrorKind::OutOfRange);
    }

    #[test]
    fn test_strings_and_values() {
        let owned = String::from("8000000000");
        assert_eq!(convert(&owned).unwrap().to_string(), "8000000000");
        assert_eq!(convert(owned.clone()).unwrap().to_string(), "8000000000");
        assert_eq!(convert("0x1111111111111111").unwrap().to_string(), "1229782938247303441");
        assert_eq!(convert("fred").unwrap_err().kind(), ErrorKind::Parse);

        let big: BigInt = "123456789012345678901234567890".parse().unwrap();
        assert_eq!(convert(&big).unwrap(), big);
        assert_eq!(convert(big.clone()).unwrap(), big);
    }

    #[test]
    fn test_type_name() {
        assert_eq!(Operand::from("fred").type_name(), "string");
        assert_eq!(Operand::from(3_u8).type_name(), "unsigned integer");
        assert_eq!(Operand::from(-3).type_name(), "signed integer");
        assert_eq!(Operand::from(0.5).type_name(), "number");
        assert_eq!(Operand::from(BigInt::create()).type_name(), "BigInt");
    }
}
