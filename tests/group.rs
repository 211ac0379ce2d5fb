use traceable_ring::rng::Csprng;
use traceable_ring::{Point, Scalar};

#[test]
fn test_point_byte_round_trip() {
    let mut rng = Csprng::new();

    for _ in 0..16 {
        let s = Scalar::random(&mut rng).unwrap();
        let p = Point::mul(&s, &Point::basepoint());

        let back = Point::from_bytes(&p.to_bytes()).unwrap();
        assert!(p == back);
    }
}

#[test]
fn test_basepoint_decodes_to_itself() {
    let g = Point::basepoint();
    let decoded = Point::from_bytes(&g.to_bytes()).unwrap();
    assert!(g == decoded);
}

#[test]
fn test_identity_is_additive_identity() {
    let g = Point::basepoint();
    assert!(g.add(&Point::identity()) == g);
}

#[test]
fn test_scalar_multiplication_distributes_over_addition() {
    let mut rng = Csprng::new();
    let a = Scalar::random(&mut rng).unwrap();
    let b = Scalar::random(&mut rng).unwrap();

    let g = Point::basepoint();
    let lhs = Point::mul(&(a + b), &g);
    let rhs = Point::mul(&a, &g).add(&Point::mul(&b, &g));

    assert!(lhs == rhs);
}

#[test]
fn test_from_bytes_rejects_wrong_length() {
    let bytes = [0u8; 31];
    assert!(Point::from_bytes(&bytes).is_err());
}

#[test]
fn test_from_bytes_rejects_off_curve_encoding() {
    // y = 2 with sign bit 0 does not correspond to a point on the curve
    // for the overwhelming majority of candidate encodings; this one is
    // known not to decode.
    let mut bytes = [0u8; 32];
    bytes[0] = 2;
    bytes[31] = 0x40;
    assert!(Point::from_bytes(&bytes).is_err());
}
