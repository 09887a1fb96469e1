//! Big Value \
//! This crate provides:
//! - [`BigInt`]: Mutable arbitrary-precision signed integers, built from native numbers, numeral strings or other `BigInt`s and changed in place with `set`, `add`, `subtract` and `multiply`.
//! - [`Operand`]: Everything those operations accept.
//! - [`Error`]: Why an operand or a rendering request was rejected.

mod big_int;
mod big_num_cache;
mod big_num_constants;
mod error;
mod operand;

pub use big_int::{BigInt, Sign};
pub use big_num_constants::MAX_SAFE_INTEGER;
pub use error::{Error, ErrorKind, Result};
pub use operand::Operand;

#[cfg(test)]
mod tests {
    use crate::{BigInt, ErrorKind};

    #[test]
    fn it_works() {
        let mut e = BigInt::create();
        let mut f = BigInt::create_from("8000000000").unwrap();
        assert_eq!(e.to_string(), "0");
        assert_eq!(f.to_string(), "8000000000");

        e.add(132).unwrap();
        assert_eq!(e.to_string(), "132");

        let err = e.set(0x1111111111111111_u64).unwrap_err();
        assert_eq!(err.name(), "OutOfRangeError");
        assert_eq!(err.to_string(), "large number lacks integer precision");
        assert_eq!(e.to_string(), "132");

        e.set("0x1111111111111111").unwrap();
        assert_eq!(e.to_string(), "1229782938247303441");

        e.multiply(5).unwrap();
        assert_eq!(e.to_string(), "6148914691236517205");
        assert_eq!(e.to_string_radix(16).unwrap(), "5555555555555555");

        let err = e.to_string_with(33, Some("fred".into())).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(err.name(), "InvalidArgumentError");

        e.set(50000000).unwrap();
        f.set(22222222).unwrap();
        e.multiply(f.to_string()).unwrap();
        assert_eq!(e.to_string(), "1111111100000000");
        assert_eq!(f.to_string(), "22222222");

        assert_eq!(BigInt::create_from(32).unwrap().to_string(), "32");
    }
}
