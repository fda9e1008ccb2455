//! Integration tests for Mathnote shorthand conversion

use mathnote::{convert, resolve_expression, ExprError};
use pretty_assertions::assert_eq;

// ============================================================================
// Flat tags
// ============================================================================

mod flat_tags {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_fraction() {
        assert_eq!(
            convert("[frac:3/4]"),
            "<math class=\"math-inline\"><mfrac><mn>3</mn><mn>4</mn></mfrac></math>"
        );
    }

    #[test]
    fn test_fraction_operands_trimmed() {
        assert_eq!(convert("[frac: 3 / 4 ]"), convert("[frac:3/4]"));
    }

    #[test]
    fn test_unicode_fraction_equivalence() {
        assert_eq!(convert("[frac:½]"), convert("[frac:1/2]"));
        assert_eq!(convert("[frac:¾]"), convert("[frac:3/4]"));
        assert_eq!(convert("[frac:⅒]"), convert("[frac:1/10]"));
    }

    #[test]
    fn test_power_split() {
        assert_eq!(
            convert("[pow:x^2]"),
            "<math class=\"math-inline\"><msup><mn>x</mn><mn>2</mn></msup></math>"
        );
    }

    #[test]
    fn test_power_without_caret_unchanged() {
        assert_eq!(convert("[pow:noop]"), "[pow:noop]");
    }

    #[test]
    fn test_sqrt_default_index() {
        assert_eq!(
            convert("[sqrt:16]"),
            "<math class=\"math-inline\"><msqrt><mn>16</mn></msqrt></math>"
        );
    }

    #[test]
    fn test_root_with_index() {
        assert_eq!(
            convert("[root:8,3]"),
            "<math class=\"math-inline\"><mroot><mn>8</mn><mn>3</mn></mroot></math>"
        );
    }

    #[test]
    fn test_root_index_two_is_square_root() {
        assert_eq!(convert("[root:16,2]"), convert("[sqrt:16]"));
    }

    #[test]
    fn test_variable_subscript() {
        assert_eq!(
            convert("[var:x_1]"),
            "<math class=\"math-inline\"><msub><mi>x</mi><mn>1</mn></msub></math>"
        );
    }

    #[test]
    fn test_variable_bare() {
        assert_eq!(
            convert("[var:v]"),
            "<math class=\"math-inline\"><mi>v</mi></math>"
        );
    }

    #[test]
    fn test_unknown_tag_untouched() {
        assert_eq!(convert("[sum:1..10]"), "[sum:1..10]");
    }
}

// ============================================================================
// The math: tag
// ============================================================================

mod math_expressions {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_operator_precedence() {
        // b*c must nest inside the right operand of the +
        assert_eq!(
            convert("[math:a+b*c]"),
            "<math class=\"math-display\"><mrow><mi>a</mi><mo>+</mo>\
             <mrow><mi>b</mi><mo>×</mo><mi>c</mi></mrow></mrow></math>"
        );
    }

    #[test]
    fn test_divide_glyph() {
        assert_eq!(
            convert("[math:a/b]"),
            "<math class=\"math-display\"><mrow><mi>a</mi><mo>÷</mo><mi>b</mi></mrow></math>"
        );
    }

    #[test]
    fn test_nested_sqrt_fully_resolves() {
        let converted = convert("[math:sqrt(1 + sqrt(x))]");
        assert_eq!(
            converted,
            "<math class=\"math-display\"><msqrt><mrow><mn>1</mn><mo>+</mo>\
             <msqrt><mi>x</mi></msqrt></mrow></msqrt></math>"
        );
        assert!(!converted.contains("sqrt("));
    }

    #[test]
    fn test_pow_and_frac_compose() {
        assert_eq!(
            convert("[math:frac(pow(x,2),4)]"),
            "<math class=\"math-display\"><mfrac><msup><mi>x</mi><mn>2</mn></msup>\
             <mn>4</mn></mfrac></math>"
        );
    }

    #[test]
    fn test_parenthesized_group() {
        assert_eq!(
            convert("[math:(a+b)*c]"),
            "<math class=\"math-display\"><mrow><mrow><mi>a</mi><mo>+</mo><mi>b</mi></mrow>\
             <mo>×</mo><mi>c</mi></mrow></math>"
        );
    }

    #[test]
    fn test_decimal_literal() {
        assert_eq!(
            convert("[math:3.14]"),
            "<math class=\"math-display\"><mn>3.14</mn></math>"
        );
    }

    #[test]
    fn test_multi_char_identifier() {
        assert_eq!(
            convert("[math:vitesse]"),
            "<math class=\"math-display\"><mi>vitesse</mi></math>"
        );
    }
}

// ============================================================================
// Failure modes
// ============================================================================

mod failure_modes {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_wrong_arity_degrades_to_literal() {
        assert_eq!(
            convert("[math:pow(x,y,z)]"),
            "<math class=\"math-display\"><mi>pow(x,y,z)</mi></math>"
        );
    }

    #[test]
    fn test_unmatched_paren_yields_error_fragment() {
        assert_eq!(
            convert("[math:sqrt(x]"),
            "<math class=\"math-error\"><merror><mtext>Erreur: sqrt(x</mtext></merror></math>"
        );
    }

    #[test]
    fn test_deep_nesting_yields_error_not_overflow() {
        let mut expr = "sqrt(".repeat(500);
        expr.push('1');
        expr.push_str(&")".repeat(500));
        let err = resolve_expression(&expr).unwrap_err();
        assert!(matches!(err, ExprError::DepthExceeded { .. }));

        let converted = convert(&format!("[math:{}]", expr));
        assert!(converted.contains("Erreur:"));
    }

    #[test]
    fn test_documented_leftmost_quirk() {
        // a*-b splits at the minus first; pinned per the converter's
        // documented leftmost-scan behavior.
        assert_eq!(
            convert("[math:a*-b]"),
            "<math class=\"math-display\"><mrow><mrow><mi>a</mi><mo>×</mo><mi></mi></mrow>\
             <mo>-</mo><mi>b</mi></mrow></math>"
        );
    }
}

// ============================================================================
// Idempotence and mixed text
// ============================================================================

mod idempotence {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_convert_twice_is_stable() {
        let inputs = [
            "Calculer [frac:3/4] + [frac:1/2]",
            "Résoudre [pow:x^2] = 16",
            "Simplifier [sqrt:16] + [root:8,3]",
            "Si [var:x_1] = 5 et [var:x_2] = 3, calculer [var:x_1] + [var:x_2]",
            "[math:sqrt(1 + sqrt(x))]",
            "[math:pow(x,y,z)]",
            "[math:sqrt(x]",
            "[pow:noop]",
        ];
        for input in inputs {
            let once = convert(input);
            let twice = convert(&once);
            assert_eq!(once, twice, "not idempotent for {:?}", input);
        }
    }

    #[test]
    fn test_mixed_tags_in_one_statement() {
        let converted = convert("Si [var:x_1] vaut [frac:1/2], calculer [math:pow(x,2)+1]");
        assert!(converted.contains("<msub><mi>x</mi><mn>1</mn></msub>"));
        assert!(converted.contains("<mfrac><mn>1</mn><mn>2</mn></mfrac>"));
        assert!(converted.contains("<msup><mi>x</mi><mn>2</mn></msup>"));
        assert!(!converted.contains('['));
    }

    #[test]
    fn test_surrounding_text_untouched() {
        let converted = convert("Avant [sqrt:9] après");
        assert!(converted.starts_with("Avant <math"));
        assert!(converted.ends_with("</math> après"));
    }
}
