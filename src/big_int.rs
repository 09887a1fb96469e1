//! # BigInt
//! Mutable arbitrary-precision signed integers.
//!
//! A value is a [`Sign`] and a magnitude of 32-bit limbs stored least
//! significant first. The magnitude never carries zero limbs at its most
//! significant end, and zero is the empty magnitude with [`Sign::NoSign`],
//! so derived equality and hashing compare numeric values.
//! # Example
//! ```
//! use big_value::BigInt;
//!
//! let mut e = BigInt::create();
//! let f = BigInt::create_from("8000000000").unwrap();
//! e.add(132).unwrap();
//! e.multiply(&f).unwrap();
//! assert_eq!(e.to_string(), "1056000000000");
//! assert_eq!(e.to_string_radix(16).unwrap(), "f5de814000");
//! assert!(e.to_string_with(33, Some("fred".into())).is_err());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::ops;
use std::str::FromStr;

use crate::big_num_cache::*;
use crate::big_num_constants::*;
use crate::error::{Error, Result};
use crate::operand::Operand;

pub const ZERO: BigInt = BigInt { sign: Sign::NoSign, mag: Vec::new() };

macro_rules! trim_high_zeros {
    ($vec: expr) => {
        while $vec.last() == Some(&0) {
            $vec.pop();
        }
    };
}

macro_rules! bit_length_u32 {
    ($n: expr) => {
        (32 - $n.leading_zeros()) as usize
    };
}

/// Sign of a [`BigInt`]. Ordered `Minus < NoSign < Plus`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sign {
    Minus,
    NoSign,
    Plus,
}

impl ops::Neg for Sign {
    type Output = Sign;

    fn neg(self) -> Sign {
        match self {
            Sign::Minus => Sign::Plus,
            Sign::NoSign => Sign::NoSign,
            Sign::Plus => Sign::Minus,
        }
    }
}

impl ops::Mul for Sign {
    type Output = Sign;

    fn mul(self, other: Sign) -> Sign {
        match (self, other) {
            (Sign::NoSign, _) | (_, Sign::NoSign) => Sign::NoSign,
            (a, b) if a == b => Sign::Plus,
            _ => Sign::Minus,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    sign: Sign,
    mag: Vec<u32>,
}

impl Default for BigInt {
    fn default() -> Self {
        ZERO
    }
}

// 实现构造
impl BigInt {
    /// Builds a value from little-endian limbs, dropping high zero limbs.
    /// `sign` is ignored when the magnitude is zero; a non-zero magnitude
    /// with `NoSign` is taken as positive.
    pub fn from_limbs(mut mag: Vec<u32>, sign: Sign) -> Self {
        trim_high_zeros!(mag);
        if mag.is_empty() {
            return ZERO;
        }
        let sign = if sign == Sign::NoSign { Sign::Plus } else { sign };
        BigInt { sign, mag }
    }

    pub(crate) fn value_of(val: u64, sign: Sign) -> BigInt {
        if val == 0 {
            ZERO
        } else if val <= MAX_CONSTANT as u64 {
            if sign == Sign::Minus {
                NEG_CACHE[val as usize].clone()
            } else {
                POS_CACHE[val as usize].clone()
            }
        } else {
            BigInt::from_limbs(vec![val as u32, (val >> 32) as u32], sign)
        }
    }

    fn from_u128(val: u128, sign: Sign) -> BigInt {
        if val <= u64::MAX as u128 {
            return BigInt::value_of(val as u64, sign);
        }
        let mag = (0..4).map(|i| (val >> (32 * i)) as u32).collect();
        BigInt::from_limbs(mag, sign)
    }

    /// The zero value.
    pub fn create() -> BigInt {
        ZERO
    }

    /// Builds a value from a native number, a numeral string or another
    /// `BigInt`.
    ///
    /// Native numbers whose magnitude exceeds `2^53 - 1` fail with
    /// [`Error::OutOfRange`]; malformed strings fail with [`Error::Parse`].
    pub fn create_from<'a>(val: impl Into<Operand<'a>>) -> Result<BigInt> {
        val.into().into_big_int()
    }

    /// Adds two operands without keeping either, returning the decimal
    /// rendering of the sum.
    pub fn static_add<'a, 'b>(a: impl Into<Operand<'a>>, b: impl Into<Operand<'b>>) -> Result<String> {
        let mut sum = BigInt::create_from(a)?;
        sum.add(b)?;
        Ok(sum.to_string())
    }
}

// 杂项辅助函数
impl BigInt {
    pub fn signum(&self) -> Sign {
        self.sign
    }

    pub fn is_zero(&self) -> bool {
        self.sign == Sign::NoSign
    }

    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Minus
    }

    /// The magnitude, least significant limb first.
    pub fn limbs(&self) -> &[u32] {
        &self.mag
    }

    /// Number of bits in the magnitude; zero for zero.
    pub fn bit_length(&self) -> usize {
        match self.mag.last() {
            None => 0,
            Some(top) => ((self.mag.len() - 1) << 5) + bit_length_u32!(top),
        }
    }

    pub fn abs(&self) -> BigInt {
        let sign = if self.is_zero() { Sign::NoSign } else { Sign::Plus };
        BigInt { sign, mag: self.mag.clone() }
    }
}

// 实现修改
impl BigInt {
    /// Replaces the value. On error the value is left unchanged.
    pub fn set<'a>(&mut self, val: impl Into<Operand<'a>>) -> Result<()> {
        *self = val.into().into_big_int()?;
        Ok(())
    }

    /// Adds to the value in place. On error the value is left unchanged.
    pub fn add<'a>(&mut self, val: impl Into<Operand<'a>>) -> Result<()> {
        let rhs = val.into().into_big_int()?;
        self.add_signed_mag(rhs.sign, &rhs.mag);
        Ok(())
    }

    /// Subtracts from the value in place. On error the value is left unchanged.
    pub fn subtract<'a>(&mut self, val: impl Into<Operand<'a>>) -> Result<()> {
        let rhs = val.into().into_big_int()?;
        self.add_signed_mag(-rhs.sign, &rhs.mag);
        Ok(())
    }

    /// Multiplies the value in place. On error the value is left unchanged.
    pub fn multiply<'a>(&mut self, val: impl Into<Operand<'a>>) -> Result<()> {
        let rhs = val.into().into_big_int()?;
        self.mul_assign_ref(&rhs);
        Ok(())
    }

    fn add_signed_mag(&mut self, sign: Sign, mag: &[u32]) {
        if sign == Sign::NoSign {
            return;
        }
        if self.is_zero() {
            self.sign = sign;
            self.mag = mag.to_vec();
            return;
        }
        if self.sign == sign {
            add_mag_in_place(&mut self.mag, mag);
            return;
        }
        match compare_mag(&self.mag, mag) {
            Ordering::Greater => sub_mag_in_place(&mut self.mag, mag),
            Ordering::Less => {
                self.mag = sub_mag(mag, &self.mag);
                self.sign = sign;
            },
            Ordering::Equal => *self = ZERO,
        }
    }

    fn mul_assign_ref(&mut self, rhs: &BigInt) {
        let sign = self.sign * rhs.sign;
        if sign == Sign::NoSign {
            *self = ZERO;
            return;
        }
        self.mag = mul_mag(&self.mag, &rhs.mag);
        self.sign = sign;
    }
}

// 实现大小比较
fn compare_mag(x: &[u32], y: &[u32]) -> Ordering {
    x.len().cmp(&y.len())
        .then_with(|| x.iter().rev().cmp(y.iter().rev()))
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.sign.cmp(&other.sign) {
            Ordering::Equal => {},
            ord => return ord,
        }
        match self.sign {
            Sign::Plus => compare_mag(&self.mag, &other.mag),
            Sign::Minus => compare_mag(&self.mag, &other.mag).reverse(),
            Sign::NoSign => Ordering::Equal,
        }
    }
}

// 实现加减法
fn add_mag_in_place(x: &mut Vec<u32>, y: &[u32]) {
    if x.len() < y.len() {
        x.resize(y.len(), 0);
    }
    let mut carry = 0_u64;
    for (i, limb) in x.iter_mut().enumerate() {
        if i >= y.len() && carry == 0 {
            break;
        }
        let sum = *limb as u64 + *y.get(i).unwrap_or(&0) as u64 + carry;
        *limb = sum as u32;
        carry = sum >> u32::BITS;
    }
    if carry != 0 {
        x.push(carry as u32);
    }
}

fn add_mag(x: &[u32], y: &[u32]) -> Vec<u32> {
    let (big, little) = if x.len() >= y.len() { (x, y) } else { (y, x) };
    let mut result = Vec::with_capacity(big.len() + 1);
    result.extend_from_slice(big);
    add_mag_in_place(&mut result, little);
    result
}

/// `big -= little`; requires `big >= little`.
fn sub_mag_in_place(big: &mut Vec<u32>, little: &[u32]) {
    debug_assert!(compare_mag(big, little) != Ordering::Less);
    let mut borrow = 0_i64;
    for (i, limb) in big.iter_mut().enumerate() {
        if i >= little.len() && borrow == 0 {
            break;
        }
        let difference = *limb as i64 - *little.get(i).unwrap_or(&0) as i64 + borrow;
        *limb = difference as u32;
        borrow = difference >> u32::BITS;
    }
    trim_high_zeros!(big);
}

fn sub_mag(big: &[u32], little: &[u32]) -> Vec<u32> {
    let mut result = big.to_vec();
    sub_mag_in_place(&mut result, little);
    result
}

/// `acc += val << (32 * offset)`; `acc` must be long enough to hold the sum.
fn add_shifted(acc: &mut [u32], val: &[u32], offset: usize) {
    let mut carry = 0_u64;
    let mut i = offset;
    for limb in val {
        let sum = acc[i] as u64 + *limb as u64 + carry;
        acc[i] = sum as u32;
        carry = sum >> u32::BITS;
        i += 1;
    }
    while carry != 0 {
        let sum = acc[i] as u64 + carry;
        acc[i] = sum as u32;
        carry = sum >> u32::BITS;
        i += 1;
    }
}

impl ops::Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        let BigInt { sign, mag } = self;
        BigInt { sign: -sign, mag }
    }
}

impl ops::Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

impl ops::AddAssign<&BigInt> for BigInt {
    fn add_assign(&mut self, rhs: &BigInt) {
        self.add_signed_mag(rhs.sign, &rhs.mag);
    }
}

impl ops::SubAssign<&BigInt> for BigInt {
    fn sub_assign(&mut self, rhs: &BigInt) {
        self.add_signed_mag(-rhs.sign, &rhs.mag);
    }
}

impl ops::MulAssign<&BigInt> for BigInt {
    fn mul_assign(&mut self, rhs: &BigInt) {
        self.mul_assign_ref(rhs);
    }
}

macro_rules! impl_binary_op {
    ($($imp: ident, $method: ident, $imp_assign: ident, $method_assign: ident);*) => {
    $(
    impl ops::$imp_assign for BigInt {
        fn $method_assign(&mut self, rhs: BigInt) {
            ops::$imp_assign::$method_assign(self, &rhs);
        }
    }

    impl ops::$imp for BigInt {
        type Output = BigInt;

        fn $method(mut self, rhs: BigInt) -> BigInt {
            ops::$imp_assign::$method_assign(&mut self, &rhs);
            self
        }
    }

    impl ops::$imp<&BigInt> for BigInt {
        type Output = BigInt;

        fn $method(mut self, rhs: &BigInt) -> BigInt {
            ops::$imp_assign::$method_assign(&mut self, rhs);
            self
        }
    }

    impl ops::$imp for &BigInt {
        type Output = BigInt;

        fn $method(self, rhs: &BigInt) -> BigInt {
            let mut result = self.clone();
            ops::$imp_assign::$method_assign(&mut result, rhs);
            result
        }
    }
    )*
    };
}

impl_binary_op!(
    Add, add, AddAssign, add_assign;
    Sub, sub, SubAssign, sub_assign;
    Mul, mul, MulAssign, mul_assign
);

macro_rules! impl_native_op {
    ($($n: ty),*) => {
    $(
    impl ops::AddAssign<$n> for BigInt {
        fn add_assign(&mut self, rhs: $n) {
            *self += &BigInt::from(rhs);
        }
    }

    impl ops::SubAssign<$n> for BigInt {
        fn sub_assign(&mut self, rhs: $n) {
            *self -= &BigInt::from(rhs);
        }
    }

    impl ops::MulAssign<$n> for BigInt {
        fn mul_assign(&mut self, rhs: $n) {
            *self *= &BigInt::from(rhs);
        }
    }

    impl ops::Add<$n> for BigInt {
        type Output = BigInt;

        fn add(self, rhs: $n) -> BigInt {
            self + BigInt::from(rhs)
        }
    }

    impl ops::Sub<$n> for BigInt {
        type Output = BigInt;

        fn sub(self, rhs: $n) -> BigInt {
            self - BigInt::from(rhs)
        }
    }

    impl ops::Mul<$n> for BigInt {
        type Output = BigInt;

        fn mul(self, rhs: $n) -> BigInt {
            self * BigInt::from(rhs)
        }
    }
    )*
    };
}

impl_native_op!(i32, i64, u32, u64);

// 实现乘法
fn mul_mag(x: &[u32], y: &[u32]) -> Vec<u32> {
    if x.is_empty() || y.is_empty() {
        return Vec::new();
    }
    if y.len() == 1 {
        return mul_by_int(x, y[0]);
    }
    if x.len() == 1 {
        return mul_by_int(y, x[0]);
    }
    if x.len() < KARATSUBA_THRESHOLD || y.len() < KARATSUBA_THRESHOLD {
        mul_to_len(x, y)
    } else {
        mul_karatsuba(x, y)
    }
}

fn mul_by_int(x: &[u32], y: u32) -> Vec<u32> {
    let mut result = Vec::with_capacity(x.len() + 1);
    let mut carry = 0_u64;
    for limb in x {
        let product = (*limb as u64) * (y as u64) + carry;
        result.push(product as u32);
        carry = product >> u32::BITS;
    }
    result.push(carry as u32);
    trim_high_zeros!(result);
    result
}

/// Grade-school multiplication. The product never needs more than
/// `x.len() + y.len()` limbs.
fn mul_to_len(x: &[u32], y: &[u32]) -> Vec<u32> {
    let mut z = vec![0_u32; x.len() + y.len()];
    for (i, x_limb) in x.iter().enumerate() {
        let mut carry = 0_u64;
        for (j, y_limb) in y.iter().enumerate() {
            let product = (*x_limb as u64) * (*y_limb as u64) + z[i + j] as u64 + carry;
            z[i + j] = product as u32;
            carry = product >> u32::BITS;
        }
        z[i + y.len()] = carry as u32;
    }
    trim_high_zeros!(z);
    z
}

fn trimmed(mag: &[u32]) -> &[u32] {
    let len = mag.iter().rposition(|limb| *limb != 0).map_or(0, |i| i + 1);
    &mag[..len]
}

/// Karatsuba multiplication of two little-endian magnitudes: splits both at
/// `half` limbs and recurses through `mul_mag` for the three partial
/// products.
fn mul_karatsuba(x: &[u32], y: &[u32]) -> Vec<u32> {
    // The number of limbs in each half of the number.
    let half = (x.len().max(y.len()) + 1) / 2;

    // xl and yl are the lower halves of x and y respectively,
    // xh and yh are the upper halves.
    let (xl, xh) = x.split_at(half.min(x.len()));
    let (yl, yh) = y.split_at(half.min(y.len()));
    let (xl, yl) = (trimmed(xl), trimmed(yl));

    let p1 = mul_mag(xh, yh);
    let p2 = mul_mag(xl, yl);
    let p3 = mul_mag(&add_mag(xh, xl), &add_mag(yh, yl));
    let p4 = sub_mag(&sub_mag(&p3, &p1), &p2);

    // result = p1 * 2^(32*2*half) + (p3 - p1 - p2) * 2^(32*half) + p2
    let mut result = vec![0_u32; x.len() + y.len() + 1];
    add_shifted(&mut result, &p2, 0);
    add_shifted(&mut result, &p4, half);
    add_shifted(&mut result, &p1, 2 * half);
    trim_high_zeros!(result);
    result
}

// 实现除法
/// Divides `mag` in place by a single limb and returns the remainder.
/// Knuth "The Art Of Computer Programming" Vol.2 section 4.3.1 exercise 16
fn divide_one_word(mag: &mut Vec<u32>, v: u32) -> u32 {
    debug_assert!(v != 0);
    let mut r = 0_u64;
    for limb in mag.iter_mut().rev() {
        let sum = (r << u32::BITS) + *limb as u64;
        *limb = (sum / v as u64) as u32;
        r = sum % v as u64;
    }
    trim_high_zeros!(mag);
    r as u32
}

// 实现打印
impl BigInt {
    /// Renders the value in `radix`, which must lie in `2..=36`.
    pub fn to_string_radix(&self, radix: u32) -> Result<String> {
        if !(MIN_RADIX..=MAX_RADIX).contains(&radix) {
            return Err(Error::bad_radix(radix, 0));
        }
        let digits = self.mag_to_string(radix);
        Ok(if self.is_negative() { format!("-{}", digits) } else { digits })
    }

    /// Renders the value in `radix` after validating an optional second
    /// argument.
    ///
    /// No options are recognized, so any `extra` argument fails with
    /// [`Error::InvalidArgument`] naming its position and type.
    pub fn to_string_with(&self, radix: u32, extra: Option<Operand<'_>>) -> Result<String> {
        if !(MIN_RADIX..=MAX_RADIX).contains(&radix) {
            return Err(Error::bad_radix(radix, 0));
        }
        if let Some(extra) = extra {
            return Err(Error::InvalidArgument {
                reason: "unsupported superfluous argument(s) found".to_owned(),
                argument: 1,
                type_name: Some(extra.type_name()),
            });
        }
        self.to_string_radix(radix)
    }

    /// Digits of the magnitude, without sign. Callers validate `radix`.
    fn mag_to_string(&self, radix: u32) -> String {
        if self.is_zero() {
            return String::from("0");
        }
        let group_len = DIGITS_PER_INT[radix as usize];
        let super_radix = INT_RADIX[radix as usize];

        // Translate number to string, a digit group at a time
        let mut tmp = self.mag.clone();
        let mut groups = Vec::with_capacity(self.mag.len() * 32 / group_len + 1);
        while !tmp.is_empty() {
            groups.push(divide_one_word(&mut tmp, super_radix));
        }

        let mut result = String::with_capacity(groups.len() * group_len);
        let mut buf = ['0'; 32];
        for (i, group) in groups.iter().rev().enumerate() {
            let mut val = *group;
            let mut pos = buf.len();
            while val != 0 {
                pos -= 1;
                buf[pos] = DIGITS[(val % radix) as usize];
                val /= radix;
            }
            // Every group but the leading one is padded with zeros.
            if i > 0 {
                let width = buf.len() - pos;
                result.extend(std::iter::repeat('0').take(group_len - width));
            }
            result.extend(&buf[pos..]);
        }
        result
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "", &self.mag_to_string(10))
    }
}

impl fmt::LowerHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "0x", &self.mag_to_string(16))
    }
}

impl fmt::UpperHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.mag_to_string(16).to_ascii_uppercase();
        f.pad_integral(!self.is_negative(), "0x", &digits)
    }
}

impl fmt::Octal for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "0o", &self.mag_to_string(8))
    }
}

impl fmt::Binary for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "0b", &self.mag_to_string(2))
    }
}

// 实现解析
impl BigInt {
    /// Parses an unprefixed numeral with an optional leading sign in
    /// `radix`, which must lie in `2..=36`. Digits are case-insensitive.
    pub fn from_str_radix(val: &str, radix: u32) -> Result<BigInt> {
        if !(MIN_RADIX..=MAX_RADIX).contains(&radix) {
            return Err(Error::bad_radix(radix, 1));
        }
        let (sign, body) = split_sign(val);
        let mag = parse_mag(body, radix, val)?;
        Ok(BigInt::from_limbs(mag, sign))
    }
}

fn split_sign(val: &str) -> (Sign, &str) {
    match val.as_bytes().first() {
        Some(b'-') => (Sign::Minus, &val[1..]),
        Some(b'+') => (Sign::Plus, &val[1..]),
        _ => (Sign::Plus, val),
    }
}

/// Converts a string of digits to little-endian limbs. `input` is the whole
/// string being parsed, for error reporting.
fn parse_mag(digits: &str, radix: u32, input: &str) -> Result<Vec<u32>> {
    if digits.is_empty() {
        return Err(Error::parse(input, "no digits"));
    }
    let digits: Vec<u32> = digits
        .chars()
        .map(|c| c.to_digit(radix))
        .collect::<Option<_>>()
        .ok_or_else(|| Error::parse(input, "invalid digit"))?;

    let group_len = DIGITS_PER_INT[radix as usize];
    let super_radix = INT_RADIX[radix as usize];

    let mut first_group_len = digits.len() % group_len;
    if first_group_len == 0 {
        first_group_len = group_len;
    }

    let mut magnitude = Vec::with_capacity(digits.len() / group_len + 1);
    let (first, rest) = digits.split_at(first_group_len);
    destructive_mul_add(&mut magnitude, 1, group_value(first, radix));
    for group in rest.chunks(group_len) {
        destructive_mul_add(&mut magnitude, super_radix, group_value(group, radix));
    }
    Ok(magnitude)
}

fn group_value(group: &[u32], radix: u32) -> u32 {
    group.iter().fold(0, |acc, d| acc * radix + d)
}

/// `magnitude = magnitude * super_radix + group_val`
fn destructive_mul_add(magnitude: &mut Vec<u32>, super_radix: u32, group_val: u32) {
    let mut carry = group_val as u64;
    for x in magnitude.iter_mut() {
        let product = (super_radix as u64) * (*x as u64) + carry;
        *x = product as u32;
        carry = product >> u32::BITS;
    }
    if carry != 0 {
        magnitude.push(carry as u32);
    }
}

impl FromStr for BigInt {
    type Err = Error;

    /// Parses a decimal numeral, or a `0x`, `0o` or `0b` prefixed one, with
    /// an optional leading sign.
    fn from_str(val: &str) -> Result<BigInt> {
        let (sign, body) = split_sign(val);
        let bytes = body.as_bytes();
        let (radix, digits) = if bytes.len() >= 2 && bytes[0] == b'0' && bytes[1].is_ascii_alphabetic() {
            let radix = match bytes[1].to_ascii_lowercase() {
                b'x' => 16,
                b'o' => 8,
                b'b' => 2,
                _ => return Err(Error::parse(val, "unknown radix prefix")),
            };
            (radix, &body[2..])
        } else {
            (10, body)
        };
        let mag = parse_mag(digits, radix, val)?;
        Ok(BigInt::from_limbs(mag, sign))
    }
}

macro_rules! impl_unsigned_to_big_num {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigInt {
        fn from(val: $u) -> Self {
            BigInt::from_u128(val as u128, Sign::Plus)
        }
    }
    )*
    };
}

macro_rules! impl_signed_to_big_num {
    ($($i: ty),*) => {
    $(
    impl From<$i> for BigInt {
        fn from(val: $i) -> Self {
            let sign = if val < 0 { Sign::Minus } else { Sign::Plus };
            BigInt::from_u128(val.unsigned_abs() as u128, sign)
        }
    }
    )*
    };
}

impl_unsigned_to_big_num!(u8, u16, u32, usize, u64, u128);
impl_signed_to_big_num!(i8, i16, i32, isize, i64, i128);

impl TryFrom<&BigInt> for u64 {
    type Error = Error;

    fn try_from(val: &BigInt) -> Result<u64> {
        if val.is_negative() || val.mag.len() > 2 {
            return Err(Error::out_of_range(format!("value {} does not fit in u64", val)));
        }
        Ok(val.mag.iter().rev().fold(0, |acc, limb| (acc << u32::BITS) | *limb as u64))
    }
}

impl TryFrom<&BigInt> for i64 {
    type Error = Error;

    fn try_from(val: &BigInt) -> Result<i64> {
        let does_not_fit = || Error::out_of_range(format!("value {} does not fit in i64", val));
        let mag = u64::try_from(&val.abs()).map_err(|_| does_not_fit())?;
        match val.sign {
            Sign::Minus if mag <= i64::MIN.unsigned_abs() => Ok((mag as i64).wrapping_neg()),
            Sign::Minus => Err(does_not_fit()),
            _ => i64::try_from(mag).map_err(|_| does_not_fit()),
        }
    }
}
