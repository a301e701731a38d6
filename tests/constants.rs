use float32::*;

fn integer(name: &str) -> i32 {
    match Float32::constant(name) {
        Some(Constant::Integer(i)) => i,
        other => panic!("expected an integer constant for {}, found {:?}", name, other),
    }
}

fn float(name: &str) -> Float32 {
    match Float32::constant(name) {
        Some(Constant::Float(f)) => f,
        other => panic!("expected a Float32 constant for {}, found {:?}", name, other),
    }
}

#[test]
fn integer_constants() {
    assert_eq!(integer("MANT_DIG"), Float32::MANT_DIG);
    assert_eq!(integer("DIG"), Float32::DIG);
    assert_eq!(integer("MIN_EXP"), Float32::MIN_EXP);
    assert_eq!(integer("MAX_EXP"), Float32::MAX_EXP);
    assert_eq!(integer("MIN_10_EXP"), Float32::MIN_10_EXP);
    assert_eq!(integer("MAX_10_EXP"), Float32::MAX_10_EXP);
}

#[test]
fn float_constants() {
    assert_eq!(float("MIN").to_bits(), f32::MIN_POSITIVE.to_bits());
    assert_eq!(float("MAX").to_bits(), f32::MAX.to_bits());
    assert_eq!(float("EPSILON").to_bits(), f32::EPSILON.to_bits());
    assert_eq!(float("INFINITY").to_bits(), f32::INFINITY.to_bits());
    assert!(float("NAN").is_nan());
}

#[test]
fn names() {
    for name in Float32::CONSTANT_NAMES {
        assert!(Float32::constant(name).is_some(), "missing constant {}", name);
    }
    assert_eq!(Float32::constant("NEG_INFINITY"), None);
    assert_eq!(Float32::constant("max"), None);
}

#[test]
fn constants_are_stable() {
    // the table hands out the same values every time
    assert_eq!(Float32::constant("MAX"), Float32::constant("MAX"));
    assert_eq!(Float32::MAX, float("MAX"));
    assert_eq!(Float32::EPSILON, f(1).next_float() - f(1));
    assert_eq!(Float32::MIN, Float32::from_bits(0x007f_ffff).next_float());
}

fn f(i: i32) -> Float32 {
    Float32::from(i)
}
