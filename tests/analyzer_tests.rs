//! Integration tests for the analyzer

use binlex::analyzer::{Analyzer, AnalyzerState, Verdict};

#[test]
fn test_concrete_scenarios() {
    let mut analyzer = Analyzer::new();

    assert_eq!(analyzer.analyze("000"), Verdict::Valid);
    assert_eq!(analyzer.analyze("111"), Verdict::NoZero);
    assert_eq!(analyzer.analyze("01"), Verdict::TooShort { length: 2 });
    assert_eq!(analyzer.analyze(""), Verdict::TooShort { length: 0 });
    assert_eq!(
        analyzer.analyze("0a1"),
        Verdict::InvalidAlphabet { found: 'a' }
    );
    assert_eq!(analyzer.analyze("1110"), Verdict::Valid);
}

#[test]
fn test_short_inputs_report_length_not_missing_zero() {
    let mut analyzer = Analyzer::new();

    // Zero-free but short: length is the reported reason
    assert_eq!(analyzer.analyze("1"), Verdict::TooShort { length: 1 });
    assert_eq!(analyzer.analyze("11"), Verdict::TooShort { length: 2 });
    // Short with a zero classifies the same way
    assert_eq!(analyzer.analyze("00"), Verdict::TooShort { length: 2 });
}

#[test]
fn test_alphabet_violations() {
    let mut analyzer = Analyzer::new();

    assert_eq!(
        analyzer.analyze("012"),
        Verdict::InvalidAlphabet { found: '2' }
    );
    assert_eq!(
        analyzer.analyze("abc"),
        Verdict::InvalidAlphabet { found: 'a' }
    );
    assert_eq!(
        analyzer.analyze(" 01"),
        Verdict::InvalidAlphabet { found: ' ' }
    );
    // First offender in scan order, even with later violations
    assert_eq!(
        analyzer.analyze("1x0y1z"),
        Verdict::InvalidAlphabet { found: 'x' }
    );
}

#[test]
fn test_reuse_matches_fresh_construction() {
    let inputs = ["000", "111", "01", "", "0a1", "1110", "101010", "11111"];

    let mut shared = Analyzer::new();
    for input in inputs {
        let reused = shared.analyze(input);
        let fresh = Analyzer::new().analyze(input);
        assert_eq!(reused, fresh, "reuse diverged from fresh for {:?}", input);
    }
}

#[test]
fn test_unknown_unreachable_exhaustively() {
    // Every binary string of length 0..=6, plus representative
    // alphabet violations: the defensive Unknown arm must never fire.
    let mut analyzer = Analyzer::new();

    for len in 0..=6usize {
        for bits in 0..(1u32 << len) {
            let s: String = (0..len)
                .map(|i| if bits & (1 << i) != 0 { '1' } else { '0' })
                .collect();
            let verdict = analyzer.analyze(&s);
            assert_ne!(verdict, Verdict::Unknown, "Unknown produced for {:?}", s);

            // Cross-check the verdict against the plain definition
            let expected_valid = s.len() > 2 && s.contains('0');
            assert_eq!(verdict.is_valid(), expected_valid, "wrong verdict for {:?}", s);
        }
    }

    for s in ["x", "01a", "2", "０１", "quit"] {
        assert_ne!(analyzer.analyze(s), Verdict::Unknown);
    }
}

#[test]
fn test_final_state_is_pure_function_of_counters() {
    // Walk a mixed input and confirm the state always matches what the
    // (char_count, has_zero) pair dictates.
    let mut analyzer = Analyzer::new();
    analyzer.reset();

    let input = "110100";
    let mut seen_zero = false;
    for (i, ch) in input.chars().enumerate() {
        analyzer.transition(ch);
        seen_zero |= ch == '0';

        let expected = match (i + 1, seen_zero) {
            (1, _) => AnalyzerState::OneRead,
            (2, _) => AnalyzerState::TwoRead,
            (_, true) => AnalyzerState::AcceptingRun,
            (_, false) => AnalyzerState::NoZeroRun,
        };
        assert_eq!(analyzer.state(), expected, "after {} chars", i + 1);
        assert_eq!(analyzer.char_count(), i + 1);
    }
}

#[test]
fn test_messages_are_categorical() {
    let mut analyzer = Analyzer::new();

    assert!(analyzer.analyze("0101").to_string().contains("valid"));
    assert!(analyzer.analyze("11").to_string().contains("length 2"));
    assert!(analyzer.analyze("111").to_string().contains("no '0'"));
    assert!(analyzer.analyze("01b").to_string().contains("'b'"));
}
