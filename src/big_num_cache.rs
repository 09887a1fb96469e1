use lazy_static::*;

use crate::big_int::{BigInt, Sign};
use crate::big_num_constants::*;

lazy_static! {
    /// `0..=MAX_CONSTANT`, handed out by `BigInt::value_of` instead of
    /// building a fresh magnitude for every small literal.
    pub static ref POS_CACHE: Vec<BigInt> = (0..=MAX_CONSTANT as u32)
        .map(|n| BigInt::from_limbs(vec![n], Sign::Plus))
        .collect();
    pub static ref NEG_CACHE: Vec<BigInt> = (0..=MAX_CONSTANT as u32)
        .map(|n| BigInt::from_limbs(vec![n], Sign::Minus))
        .collect();
}
