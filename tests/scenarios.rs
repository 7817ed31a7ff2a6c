//! End-to-end keypad scenarios driven through the public event API.

use abacus::input::{events_from_line, Button};
use abacus::{CalcError, Calculator, Event, Frame, Operator, Phase, RecordingNotifier, Token};

fn calculator() -> Calculator<RecordingNotifier> {
    Calculator::with_notifier(RecordingNotifier::new())
}

fn press(calc: &mut Calculator<RecordingNotifier>, line: &str) -> Frame {
    calc.handle_all(events_from_line(line))
}

#[test]
fn addition_shows_result_and_trace() {
    let mut calc = calculator();
    let frame = press(&mut calc, "5+3=");

    assert_eq!(frame.display, "8");
    assert_eq!(frame.history, "5 + 3 =");
}

#[test]
fn chained_operators_evaluate_left_to_right() {
    let mut calc = calculator();
    let frame = press(&mut calc, "5+3*2=");

    assert_eq!(frame.display, "16");
    assert_eq!(frame.history, "8 × 2 =");
    assert_eq!(calc.tape().len(), 2);
}

#[test]
fn chaining_shows_intermediate_result() {
    let mut calc = calculator();
    let frame = press(&mut calc, "5+3*");

    assert_eq!(frame.display, "8");
    assert_eq!(frame.history, "8 ×");
    assert_eq!(calc.phase(), Phase::OperatorPending);
}

#[test]
fn division_by_zero_notifies_then_clears() {
    let mut calc = calculator();
    let frame = press(&mut calc, "7/0=");

    assert_eq!(frame, Frame::default());
    assert_eq!(calc.notifier().notices(), &[CalcError::DivisionByZero]);
    assert!(calc.state().pending.is_none());
    assert!(calc.state().last_operator.is_none());
}

#[test]
fn calculator_is_usable_after_division_by_zero() {
    let mut calc = calculator();
    press(&mut calc, "7/0=");
    let frame = press(&mut calc, "2+2=");

    assert_eq!(frame.display, "4");
    assert_eq!(frame.history, "2 + 2 =");
}

#[test]
fn float_noise_is_rounded_away() {
    let mut calc = calculator();
    assert_eq!(press(&mut calc, "0.1+0.2=").display, "0.3");
}

#[test]
fn long_fractions_keep_six_digits() {
    let mut calc = calculator();
    assert_eq!(press(&mut calc, "10/3=").display, "3.333333");
}

#[test]
fn subtraction_uses_unicode_minus_in_trace() {
    let mut calc = calculator();
    let frame = press(&mut calc, "3-5=");

    assert_eq!(frame.display, "-2");
    assert_eq!(frame.history, "3 − 5 =");
}

#[test]
fn remainder_follows_dividend_sign() {
    let mut calc = calculator();
    press(&mut calc, "3-10=");
    let frame = press(&mut calc, "%4=");

    assert_eq!(frame.history, "-7 % 4 =");
    assert_eq!(frame.display, "-3");
}

#[test]
fn remainder_by_zero_is_not_an_error() {
    let mut calc = calculator();
    let frame = press(&mut calc, "5%0=");

    assert_eq!(frame.display, "NaN");
    assert!(calc.notifier().notices().is_empty());
}

#[test]
fn lone_decimal_point_divisor_is_nan_not_zero() {
    let mut calc = calculator();
    let frame = press(&mut calc, "1/.=");

    assert_eq!(frame.display, "NaN");
    assert_eq!(frame.history, "1 ÷ . =");
    assert!(calc.notifier().notices().is_empty());
}

#[test]
fn lone_decimal_point_operand_is_nan() {
    let mut calc = calculator();
    let frame = press(&mut calc, "5+.=");

    assert_eq!(frame.display, "NaN");
    assert_eq!(frame.history, "5 + . =");
}

#[test]
fn sign_left_by_delete_is_nan() {
    let mut calc = calculator();
    press(&mut calc, "3-10= bs");
    assert_eq!(calc.display(), "-");

    let frame = press(&mut calc, "+5=");
    assert_eq!(frame.display, "NaN");
    assert_eq!(frame.history, "- + 5 =");
    assert!(calc.notifier().notices().is_empty());
}

#[test]
fn huge_results_use_exponent_form() {
    let mut calc = calculator();
    let frame = press(&mut calc, "100000000000*10000000000=");
    assert_eq!(frame.display, "1e+21");

    let frame = press(&mut calc, "*2=");
    assert_eq!(frame.display, "2e+21");
    assert_eq!(frame.history, "1e+21 × 2 =");
}

#[test]
fn second_decimal_point_is_ignored() {
    let mut calc = calculator();
    assert_eq!(press(&mut calc, "3.1.4").display, "3.14");
}

#[test]
fn digit_after_result_starts_new_operand() {
    let mut calc = calculator();
    press(&mut calc, "2*4=");
    let frame = press(&mut calc, "6");

    assert_eq!(frame.display, "6");
    assert_eq!(frame.history, "2 × 4 =");
}

#[test]
fn operator_after_result_continues_from_result() {
    let mut calc = calculator();
    press(&mut calc, "2*4=");
    let frame = press(&mut calc, "+1=");

    assert_eq!(frame.display, "9");
    assert_eq!(frame.history, "8 + 1 =");
}

#[test]
fn equals_without_pending_operation_is_ignored() {
    let mut calc = calculator();
    press(&mut calc, "42");
    let before = calc.state().clone();
    press(&mut calc, "=");

    assert_eq!(calc.state(), &before);
}

#[test]
fn repeated_equals_does_not_repeat_operation() {
    let mut calc = calculator();
    press(&mut calc, "5+3=");
    let frame = press(&mut calc, "==");

    assert_eq!(frame.display, "8");
    assert_eq!(calc.tape().len(), 1);
}

#[test]
fn operator_on_empty_display_is_ignored() {
    let mut calc = calculator();
    let frame = press(&mut calc, "*");

    assert_eq!(frame, Frame::default());
    assert_eq!(calc.phase(), Phase::Idle);
}

#[test]
fn delete_on_empty_display_is_a_no_op() {
    let mut calc = calculator();
    let frame = press(&mut calc, "backspace");

    assert_eq!(frame, Frame::default());
    assert!(calc.notifier().notices().is_empty());
}

#[test]
fn delete_edits_operand_being_typed() {
    let mut calc = calculator();
    press(&mut calc, "5+123 backspace");

    assert_eq!(calc.display(), "12");
    assert_eq!(calc.history(), "5 +");
    assert_eq!(press(&mut calc, "=").display, "17");
}

#[test]
fn clear_resets_from_pending_state() {
    let mut calc = calculator();
    press(&mut calc, "9*8");
    let frame = press(&mut calc, "esc");

    assert_eq!(frame, Frame::default());
    assert_eq!(calc.phase(), Phase::Idle);
    assert!(calc.state().last_operator.is_none());
}

#[test]
fn buttons_drive_the_same_machine() {
    let mut calc = calculator();
    for id in ["1", "2", "/", "4", "equals"] {
        let button = Button::from_control(id).unwrap();
        calc.handle(Event::from(button));
    }

    assert_eq!(calc.display(), "3");
    assert_eq!(calc.history(), "12 ÷ 4 =");
}

#[test]
fn typed_api_matches_key_api() {
    let mut typed = calculator();
    typed.digit(Token::new('6').unwrap());
    typed.operator(Operator::Multiply);
    typed.digit(Token::new('7').unwrap());
    typed.equals();

    let mut keyed = calculator();
    press(&mut keyed, "6*7 enter");

    assert_eq!(typed.frame(), keyed.frame());
    assert_eq!(typed.display(), "42");
}
