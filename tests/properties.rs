use arithmos::{
    diagnostics::{check_brackets, classify},
    error::ErrorKind,
    evaluate_scalar, evaluate_value,
    interpreter::{
        parser::literal::{parse_matrix, parse_rational, parse_vector},
        value::{matrix::Matrix, rational::Rational, vector::Vector},
    },
    util::num::gcd,
};
use proptest::prelude::*;

fn operator() -> impl Strategy<Value = char> {
    prop_oneof![Just('+'), Just('-'), Just('*')]
}

/// A flat expression as its first operand and the `(operator, operand)` pairs
/// that follow.
fn flat_expression() -> impl Strategy<Value = (i64, Vec<(char, i64)>)> {
    (0_i64..100, prop::collection::vec((operator(), 0_i64..100), 0..6))
}

fn render((first, rest): &(i64, Vec<(char, i64)>)) -> String {
    rest.iter()
        .fold(first.to_string(), |acc, (op, n)| format!("{acc} {op} {n}"))
}

/// Evaluates with `*` before `+`/`-` and left-to-right folding.
fn reference((first, rest): &(i64, Vec<(char, i64)>)) -> i64 {
    let mut terms = vec![(1, *first)];
    for &(op, n) in rest {
        match op {
            '*' => {
                if let Some(last) = terms.last_mut() {
                    last.1 *= n;
                }
            },
            '+' => terms.push((1, n)),
            _ => terms.push((-1, n)),
        }
    }
    terms.iter().map(|(sign, value)| sign * value).sum()
}

proptest! {
    #[test]
    fn flat_expressions_respect_precedence(expr in flat_expression()) {
        let text = render(&expr);
        prop_assert_eq!(evaluate_scalar::<i64>(&text).unwrap(), reference(&expr));
    }

    #[test]
    fn redundant_parens_change_nothing(expr in flat_expression()) {
        let text = render(&expr);
        let expected = evaluate_scalar::<i64>(&text).unwrap();

        prop_assert_eq!(evaluate_scalar::<i64>(&format!("({text})")).unwrap(), expected);

        let (first, rest) = &expr;
        let wrapped = rest.iter()
                          .fold(format!("({first})"), |acc, (op, n)| format!("{acc} {op} ({n})"));
        prop_assert_eq!(evaluate_scalar::<i64>(&wrapped).unwrap(), expected);
    }

    #[test]
    fn rationals_are_always_reduced(n in -1_000_000_i64..1_000_000, d in -1_000_000_i64..1_000_000) {
        prop_assume!(d != 0);
        let r = Rational::new(n, d).unwrap();
        prop_assert!(r.denominator() > 0);
        if r.numerator() == 0 {
            prop_assert_eq!(r.denominator(), 1);
        } else {
            prop_assert_eq!(gcd(i128::from(r.numerator()), i128::from(r.denominator())), 1);
        }
        prop_assert_eq!(i128::from(r.numerator()) * i128::from(d),
                        i128::from(n) * i128::from(r.denominator()));
    }

    #[test]
    fn rational_rendering_round_trips(n in any::<i64>(), d in 1_i64..=i64::MAX) {
        prop_assume!(n != i64::MIN);
        let r = Rational::new(n, d).unwrap();
        prop_assert_eq!(parse_rational(&r.to_string()).unwrap(), r);
    }

    #[test]
    fn vector_rendering_round_trips(elements in prop::collection::vec(any::<i64>(), 0..8)) {
        let v = Vector::from(elements);
        prop_assert_eq!(parse_vector::<i64>(&format!("[{v}]")).unwrap(), v);
    }

    #[test]
    fn float_vector_rendering_round_trips(elements in prop::collection::vec(-1e6_f64..1e6, 1..8)) {
        let v = Vector::from(elements);
        prop_assert_eq!(parse_vector::<f64>(&format!("[{v}]")).unwrap(), v);
    }

    #[test]
    fn matrix_rendering_round_trips(rows in 1_usize..5,
                                    columns in 1_usize..5,
                                    seed in prop::collection::vec(-1000_i64..1000, 16)) {
        let m = Matrix::from_rows((0..rows).map(|r| (0..columns).map(|c| seed[r * 4 + c]).collect())
                                           .collect()).unwrap();
        prop_assert_eq!(parse_matrix::<i64>(&m.to_string()).unwrap(), m.clone());
        prop_assert_eq!(parse_matrix::<i64>(&format!("[{m}]")).unwrap(), m);
    }

    #[test]
    fn vectors_of_different_length_never_combine(a in 1_usize..6, b in 1_usize..6) {
        prop_assume!(a != b);
        let left = vec!["1"; a].join(" ");
        let right = vec!["2"; b].join(" ");
        for op in ['+', '-', '*', '/'] {
            let err = evaluate_value::<i64>(&format!("[{left}] {op} [{right}]")).unwrap_err();
            prop_assert_eq!(err.kind(), ErrorKind::DimensionMismatch);
        }
    }

    #[test]
    fn diagnostics_never_point_past_the_end(input in "\\PC*") {
        if let Some(d) = classify(&input) {
            prop_assert!(d.position <= input.chars().count());
        }
    }

    #[test]
    fn unclosed_brackets_point_at_end(body in "[0-9 +*]{0,12}") {
        let input = format!("({body}");
        let d = check_brackets(&input).unwrap();
        prop_assert_eq!(d.kind, ErrorKind::UnmatchedParen);
        prop_assert_eq!(d.position, input.chars().count());
    }
}
