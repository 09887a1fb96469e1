//! Exercises every `BigInt` entry point and prints what happens, including
//! the errors rejected operands produce.
//!
//! Run with `cargo run --example smoke`.

use big_value::{BigInt, Error};

fn report(err: &Error) {
    println!("got exception: {} ({})", err.name(), err);
}

fn main() {
    let mut e = BigInt::create();
    let mut f = BigInt::create_from("8000000000").expect("decimal literal");

    println!("e = {}", e);
    println!("f = {}", f);

    e.add(132).expect("small native operand");
    println!("e = {}", e);

    if let Err(err) = e.set(0x1111111111111111_u64) {
        report(&err);
    }

    e.set("0x1111111111111111").expect("hex literal");
    println!("e = {}", e);

    e.multiply(5).expect("small native operand");
    println!("e = {}", e);

    if let Err(err) = e.to_string_with(33, Some("fred".into())) {
        report(&err);
        println!("{:#?}", err);
    }

    e.set(50000000).expect("small native operand");
    f.set(22222222).expect("small native operand");
    e.multiply(f.to_string()).expect("decimal rendering");
    println!("e = {}", e);
    println!("f = {}", f);

    match BigInt::static_add("0xffffffffffffffff", 1) {
        Ok(sum) => println!("static_add = {}", sum),
        Err(err) => report(&err),
    }

    let n = BigInt::create_from(32).expect("small native operand");
    println!("n = {:#x}", n);
}
