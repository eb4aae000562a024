use mental_compensation::chooser::weight;
use mental_compensation::level::select_divisor;
use mental_compensation::{compute_compensation, Adjustment};
use proptest::prelude::*;

fn arb_level() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("auto"),
        Just("decena"),
        Just("centena"),
        Just("unidad_de_millar"),
    ]
}

proptest! {
    #[test]
    fn sum_is_preserved(a in any::<u32>(), b in any::<u32>(), level in arb_level()) {
        let result = compute_compensation(a, b, level).unwrap();
        prop_assert_eq!(result.final_result, i64::from(a) + i64::from(b));
        prop_assert_eq!(result.operands, [i64::from(a), i64::from(b)]);
        prop_assert!(result.steps.len() <= 1);
    }

    #[test]
    fn step_deltas_cancel(a in any::<u32>(), b in any::<u32>(), level in arb_level()) {
        let result = compute_compensation(a, b, level).unwrap();
        if let Some(step) = result.step() {
            let t = step.transformation;
            prop_assert_eq!(t.principal.delta + t.compensated.delta, 0);
            prop_assert_eq!(t.principal.adjusted + t.compensated.adjusted, i64::from(a) + i64::from(b));
            prop_assert_eq!(t.principal.adjusted % step.level.divisor(), 0);
        }
    }

    #[test]
    fn noop_exactly_when_an_operand_is_aligned(
        a in any::<u32>(),
        b in any::<u32>(),
        level in arb_level(),
    ) {
        let divisor = select_divisor(a, b, level).unwrap();
        let aligned = i64::from(a) % divisor == 0 || i64::from(b) % divisor == 0;
        let result = compute_compensation(a, b, level).unwrap();
        prop_assert_eq!(result.steps.is_empty(), aligned);
    }

    #[test]
    fn adjusted_values_stay_in_range(a in any::<u32>(), b in any::<u32>(), level in arb_level()) {
        let result = compute_compensation(a, b, level).unwrap();
        if let Some(step) = result.step() {
            for side in [step.transformation.principal, step.transformation.compensated] {
                prop_assert!(side.adjusted >= -999);
                prop_assert!(side.adjusted <= i64::from(u32::MAX) + 999);
            }
        }
    }

    #[test]
    fn deltas_stay_below_divisor(value in 0i64..1_000_000, divisor in prop_oneof![Just(10i64), Just(100), Just(1000)]) {
        let adjustment = Adjustment::new(value, divisor);
        prop_assert!(adjustment.delta.abs() < divisor);
        prop_assert_eq!(adjustment.delta == 0, value % divisor == 0);
        prop_assert_eq!(adjustment.target() % divisor, 0);
    }

    #[test]
    fn explicit_level_ignores_operands(a in any::<u32>(), b in any::<u32>()) {
        prop_assert_eq!(select_divisor(a, b, "decena").unwrap(), 10);
        prop_assert_eq!(select_divisor(a, b, "centena").unwrap(), 100);
        prop_assert_eq!(select_divisor(a, b, "unidad_de_millar").unwrap(), 1000);
    }

    #[test]
    fn auto_level_is_deterministic(a in any::<u32>(), b in any::<u32>()) {
        let first = compute_compensation(a, b, "auto").unwrap();
        let second = compute_compensation(a, b, "auto").unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn principal_is_never_heavier(a in any::<u32>(), b in any::<u32>(), level in arb_level()) {
        let result = compute_compensation(a, b, level).unwrap();
        if let Some(step) = result.step() {
            let divisor = step.level.divisor();
            let other = Adjustment::new(step.transformation.compensated.original, divisor);
            prop_assert!(weight(step.transformation.principal.delta) <= weight(other.delta));
        }
    }
}
