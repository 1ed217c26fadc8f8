use dual_autodiff::{
    cos_derivative, derivative, exp_derivative, log_derivative, sin_derivative, tan_derivative,
    try_derivative, BinaryOp, DualNumber, DualNumber64, Operand,
};
use proptest::prelude::*;

fn finite() -> impl Strategy<Value = f64> {
    -1e6..1e6
}

fn dual() -> impl Strategy<Value = DualNumber64> {
    (finite(), finite()).prop_map(|(a, b)| DualNumber::new(a, b))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn construction_round_trips(a in any::<f64>(), b in any::<f64>()) {
        let d = DualNumber64::new(a, b);
        prop_assert_eq!(d.real.to_bits(), a.to_bits());
        prop_assert_eq!(d.dual.to_bits(), b.to_bits());
    }

    #[test]
    fn add_and_mul_commute(x in dual(), y in dual()) {
        prop_assert_eq!(x + y, y + x);
        prop_assert_eq!(x * y, y * x);
    }

    #[test]
    fn add_and_mul_commute_with_scalars(d in dual(), s in finite()) {
        prop_assert_eq!(d + s, s + d);
        prop_assert_eq!(d * s, s * d);
    }

    #[test]
    fn scalars_coerce_to_constants(d in dual(), s in finite()) {
        let c = DualNumber::constant(s);
        prop_assert_eq!(d + s, d + c);
        prop_assert_eq!(s + d, d + s);
        prop_assert_eq!(d - s, d - c);
        prop_assert_eq!(s - d, c - d);
        prop_assert_eq!(d * s, d * c);
        prop_assert_eq!(s * d, c * d);
    }

    #[test]
    fn scalars_coerce_in_division(d in dual(), s in finite()) {
        prop_assume!(s != 0.0 && d.real != 0.0);
        let c = DualNumber::constant(s);
        prop_assert_eq!(d / s, d / c);
        prop_assert_eq!(s / d, c / d);
    }

    #[test]
    fn subtraction_keeps_written_order(d in dual(), s in finite()) {
        prop_assert_eq!(s - d, DualNumber::new(s - d.real, -d.dual));
    }

    #[test]
    fn operand_dispatch_matches_operators(d in dual(), s in finite()) {
        prop_assume!(s != 0.0 && d.real != 0.0);
        let cases = [
            (BinaryOp::Add, d + s, s + d),
            (BinaryOp::Sub, d - s, s - d),
            (BinaryOp::Mul, d * s, s * d),
            (BinaryOp::Div, d / s, s / d),
        ];
        for (op, forward, reversed) in cases {
            prop_assert_eq!(op.apply(d, s).unwrap(), Operand::Dual(forward));
            prop_assert_eq!(op.apply(s, d).unwrap(), Operand::Dual(reversed));
        }
    }

    #[test]
    fn helpers_agree_with_generic_path(x in -50.0..50.0_f64) {
        prop_assert_eq!(sin_derivative(x), derivative(DualNumber::sin, x));
        prop_assert_eq!(cos_derivative(x), derivative(DualNumber::cos, x));
        prop_assert_eq!(tan_derivative(x), derivative(DualNumber::tan, x));
        prop_assert_eq!(exp_derivative(x), derivative(DualNumber::exp, x));
    }

    #[test]
    fn log_helper_agrees_with_generic_path(x in 1e-6..1e6_f64) {
        prop_assert_eq!(
            log_derivative(x).unwrap(),
            try_derivative(DualNumber::log, x).unwrap()
        );
    }

    #[test]
    fn log_rejects_every_non_positive(x in -1e6..=0.0_f64, b in finite()) {
        prop_assert!(DualNumber::new(x, b).log().unwrap_err().is_domain());
    }

    #[test]
    fn dual_pow_rejects_every_negative_base(
        a in -1e6..-1e-12_f64,
        b in finite(),
        e in dual(),
    ) {
        prop_assert!(DualNumber::new(a, b).powd(e).unwrap_err().is_domain());
    }

    #[test]
    fn product_rule_on_polynomials(x in -100.0..100.0_f64) {
        // d/dx (x³ − 2x) = 3x² − 2
        let d = derivative(|v: DualNumber64| v * v * v - 2.0 * v, x);
        let expected = 3.0 * x * x - 2.0;
        prop_assert!((d - expected).abs() <= 1e-12 * expected.abs().max(1.0));
    }
}

#[test]
fn every_binary_op_has_a_symbol() {
    let symbols: Vec<&str> = BinaryOp::ALL.iter().map(|op| op.symbol()).collect();
    assert_eq!(symbols, ["+", "-", "*", "/", "**"]);
}
