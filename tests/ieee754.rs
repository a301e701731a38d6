use float32::*;

#[test]
fn parameters() {
    assert_eq!(Float32::MANT_DIG, 24);
    assert_eq!(Float32::DIG, 6);
    assert_eq!(Float32::MIN_EXP, -125);
    assert_eq!(Float32::MAX_EXP, 128);
    assert_eq!(Float32::MIN_10_EXP, -37);
    assert_eq!(Float32::MAX_10_EXP, 38);

    // agrees with the platform's binary32
    assert_eq!(Float32::MANT_DIG as u32, f32::MANTISSA_DIGITS);
    assert_eq!(Float32::DIG as u32, f32::DIGITS);
    assert_eq!(Float32::MIN_EXP, f32::MIN_EXP);
    assert_eq!(Float32::MAX_EXP, f32::MAX_EXP);
    assert_eq!(Float32::MIN_10_EXP, f32::MIN_10_EXP);
    assert_eq!(Float32::MAX_10_EXP, f32::MAX_10_EXP);
}

#[test]
fn classify() {
    assert_eq!(Float32::from_bits(0x0000_0000).classify(), Class::Zero);
    assert_eq!(Float32::from_bits(0x8000_0000).classify(), Class::Zero);
    assert_eq!(Float32::from_bits(0x0000_0001).classify(), Class::Subnormal);
    assert_eq!(Float32::from_bits(0x807f_ffff).classify(), Class::Subnormal);
    assert_eq!(Float32::from_bits(0x0080_0000).classify(), Class::Normal);
    assert_eq!(Float32::from_bits(0x3f80_0000).classify(), Class::Normal);
    assert_eq!(Float32::from_bits(0x7f7f_ffff).classify(), Class::Normal);
    assert_eq!(Float32::from_bits(0x7f80_0000).classify(), Class::Infinity);
    assert_eq!(Float32::from_bits(0xff80_0000).classify(), Class::Infinity);
    assert_eq!(Float32::from_bits(0x7fc0_0000).classify(), Class::Nan);
    assert_eq!(Float32::from_bits(0x7f80_0001).classify(), Class::Nan);
    assert_eq!(Float32::from_bits(0xffff_ffff).classify(), Class::Nan);

    assert!(Float32::NAN.is_nan());
    assert!(!Float32::from(0).is_nan());
    assert!(!Float32::INFINITY.is_nan());
    assert!(Float32::INFINITY.is_infinity() && !Float32::INFINITY.is_finite());
    assert!(Float32::MIN.is_normal() && Float32::MIN.is_finite());
    assert!(Float32::from(0).is_zero() && Float32::from(0.0).is_zero());
}

#[test]
fn classify_matches_platform() {
    // a spread of patterns over every exponent
    for e in 0..=0xff_u32 {
        for m in [0, 1, 0x40_0000, 0x7f_ffff, 0x12_3456] {
            for s in [0, 1_u32] {
                let bits = (s << 31) | (e << 23) | m;
                let x = Float32::from_bits(bits);
                let f = f32::from_bits(bits);
                let expected = match f.classify() {
                    std::num::FpCategory::Zero => Class::Zero,
                    std::num::FpCategory::Subnormal => Class::Subnormal,
                    std::num::FpCategory::Normal => Class::Normal,
                    std::num::FpCategory::Infinite => Class::Infinity,
                    std::num::FpCategory::Nan => Class::Nan,
                };
                assert_eq!(x.classify(), expected, "classify failed: {:#010x}", bits);
                assert_eq!(x.sign(), s == 1, "sign failed: {:#010x}", bits);
            }
        }
    }
}

#[test]
fn from_f64() {
    let fp = 1.0;
    let x = Float32::from(fp);
    assert_eq!(x.to_bits(), 0x3f80_0000, "conversion from f64 failed: {:.20e}", fp);

    let fp = -1.0;
    let x = Float32::from(fp);
    assert_eq!(x.to_bits(), 0xbf80_0000, "conversion from f64 failed: {:.20e}", fp);

    let fp = 0.0;
    let x = Float32::from(fp);
    assert!(x.is_zero() && !x.sign(), "conversion from f64 failed: {:.20e}", fp);

    let fp = -0.0;
    let x = Float32::from(fp);
    assert!(x.is_zero() && x.sign(), "conversion from f64 failed: {:.20e}", fp);

    // rounds to nearest, 0.1 is not representable
    let fp = 0.1;
    let x = Float32::from(fp);
    assert_eq!(x.to_bits(), 0.1_f32.to_bits(), "conversion from f64 failed: {:.20e}", fp);

    // far below the subnormals
    let fp = f64::MIN_POSITIVE;
    let x = Float32::from(fp);
    assert!(x.is_zero() && !x.sign(), "conversion from f64 failed: {:.20e}", fp);

    // overflow
    let fp = f64::MAX;
    let x = Float32::from(fp);
    assert_eq!(x, Float32::INFINITY, "conversion from f64 failed: {:.20e}", fp);

    let fp = f64::NEG_INFINITY;
    let x = Float32::from(fp);
    assert_eq!(x, -Float32::INFINITY, "conversion from f64 failed: {:.20e}", fp);

    // signaling NaN with a payload is quieted, the top payload bits survive
    let fp = f64::from_bits((0x7ff << 52) | (0x2a << 29));
    let x = Float32::from(fp);
    assert!(x.is_nan(), "conversion from f64 failed: {:.20e}", fp);
    assert_eq!(x.to_bits(), 0x7fc0_002a);
}

#[test]
fn to_f64() {
    assert_eq!(Float32::from(1.5).to_f64(), 1.5);
    assert_eq!(Float32::MAX.to_f64(), f32::MAX as f64);
    assert_eq!(Float32::MIN.to_f64(), f32::MIN_POSITIVE as f64);
    assert_eq!(Float32::from_bits(1).to_f64(), f32::from_bits(1) as f64);
    assert_eq!(Float32::INFINITY.to_f64(), f64::INFINITY);
    assert!(Float32::NAN.to_f64().is_nan());
    assert!(f64::from(-Float32::from(0)).is_sign_negative());
    assert_eq!(f32::from(Float32::from(0.1)), 0.1_f32);
}

#[test]
fn negate_and_abs() {
    let x = Float32::from(-2.5);
    assert_eq!(-x, Float32::from(2.5));
    assert_eq!(x.abs(), Float32::from(2.5));
    assert_eq!(-(-x), x);

    // only the sign bit changes
    assert_eq!((-Float32::from(0)).to_bits(), 0x8000_0000);
    assert_eq!((-Float32::NAN).to_bits(), Float32::NAN.to_bits() | 0x8000_0000);
    assert_eq!((-Float32::MAX).to_bits(), 0xff7f_ffff);
}
