use std::{cell::RefCell, fs, io::Write, rc::Rc};

use cfglang::{
    error::{Error, ErrorKind, ParseError, RuntimeError},
    interpreter::{
        evaluator::core::Context,
        lexer::{Position, Token, tokenize},
        value::core::Value,
    },
    run, to_json,
};
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

/// Diagnostic sink that can be read back after the context is done with it.
#[derive(Clone, Default)]
struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.borrow_mut().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl SharedBuffer {
    fn contents(&self) -> String {
        String::from_utf8(self.0.borrow().clone()).expect("diagnostics are UTF-8")
    }
}

fn run_capturing(src: &str) -> (Result<Vec<Value>, Error>, String) {
    let buffer = SharedBuffer::default();
    let mut context = Context::with_diagnostics(Box::new(buffer.clone()));
    let result = run(src, &mut context);
    (result, buffer.contents())
}

fn output(src: &str) -> String {
    match run_capturing(src).0 {
        Ok(values) => to_json(&values).expect("values serialize"),
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn failure(src: &str) -> Error {
    match run_capturing(src).0 {
        Ok(values) => panic!("Script succeeded but was expected to fail: {values:?}"),
        Err(e) => e,
    }
}

#[test]
fn golden_programs_match_expected_output() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/programs").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "cfg"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("json");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                                                             panic!("Failed to read {expected_path:?}: {e}")
                                                         });

        count += 1;
        assert_eq!(output(&source), expected.trim_end(), "program {path:?}");
    }

    assert!(count > 0, "No programs found in tests/programs");
}

#[test]
fn declarations_feed_dictionaries() {
    assert_eq!(output("var x 10\nvar y ?{ x + 5 }\n$[a: x, b: y]"),
               "[\n  {\n    \"a\": 10,\n    \"b\": 15\n  }\n]");
}

#[test]
fn print_goes_to_diagnostics_only() {
    let (result, diagnostics) = run_capturing("?{ print('hello') }");

    assert_eq!(to_json(&result.unwrap()).unwrap(), "[]");
    assert_eq!(diagnostics, "hello\n");
}

#[test]
fn print_joins_arguments_with_spaces() {
    let (result, diagnostics) = run_capturing("?{ print('x', 1, 2.5, 3.0, true) }");

    assert!(result.is_ok());
    assert_eq!(diagnostics, "x 1 2.5 3.0 true\n");
}

#[test]
fn pow_always_yields_float() {
    assert_eq!(output("$[p: pow(2,10)]"), "[\n  {\n    \"p\": 1024.0\n  }\n]");
}

#[test]
fn numeric_types_are_preserved() {
    let values = run_capturing("$[i: 3, f: 3.0, d: ?{ 6 / 3 }, m: ?{ 2 * 1.5 }, s: ?{ 7 - 2 }]").0
                                                                                         .unwrap();
    let Value::Dictionary(entries) = &values[0] else {
        panic!("expected a dictionary");
    };

    assert_eq!(entries["i"], Value::Integer(3));
    assert_eq!(entries["f"], Value::Float(3.0));
    assert_eq!(entries["d"], Value::Float(2.0));
    assert_eq!(entries["m"], Value::Float(3.0));
    assert_eq!(entries["s"], Value::Integer(5));
}

#[test]
fn large_integers_round_when_they_meet_floats() {
    let values = run_capturing("$[d: ?{ 10000000000000000 / 2 }, \
                                  m: ?{ 9007199254740993 + 0.5 }, \
                                  p: pow(9007199254740993, 1)]").0
                                                               .unwrap();
    let Value::Dictionary(entries) = &values[0] else {
        panic!("expected a dictionary");
    };

    assert_eq!(entries["d"], Value::Float(5e15));
    assert_eq!(entries["m"], Value::Float(9_007_199_254_740_992.0));
    assert_eq!(entries["p"], Value::Float(9_007_199_254_740_992.0));
}

#[test]
fn operators_have_no_precedence() {
    assert_eq!(output("$[r: ?{ 2 + 3 * 4 }]"), "[\n  {\n    \"r\": 20\n  }\n]");
    assert_eq!(output("$[r: ?{ 10 - 2 - 3 }]"), "[\n  {\n    \"r\": 5\n  }\n]");
    assert_eq!(output("$[r: ?{ 2 * (3 + 4) }]"), "[\n  {\n    \"r\": 14\n  }\n]");
    assert_eq!(output("$[r: ?{ 1 + 8 / 2 }]"), "[\n  {\n    \"r\": 4.5\n  }\n]");
}

#[test]
fn duplicate_keys_last_write_wins() {
    assert_eq!(output("$[a: 1, a: 2]"), "[\n  {\n    \"a\": 2\n  }\n]");
}

#[test]
fn undeclared_reference_fails_in_final_pass() {
    let (result, diagnostics) = run_capturing("$[x: undeclared]\n?{ print('parsed') }");
    let err = result.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Name);
    assert!(err.to_string().contains("undeclared"));
    // The whole program was parsed before the reference was resolved.
    assert_eq!(diagnostics, "parsed\n");
}

#[test]
fn forward_references_are_rejected() {
    let err = failure("$[a: later]\nvar later 1");

    assert!(matches!(err,
                     Error::Runtime(RuntimeError::UnknownVariable { ref name, line: 1 }) if name == "later"));
}

#[test]
fn redeclared_variables_resolve_to_newest_value() {
    assert_eq!(output("var x 1\n$[a: x]\nvar x 2"),
               "[\n  {\n    \"a\": 2\n  }\n]");
}

#[test]
fn expression_variables_resolve_immediately() {
    let (result, diagnostics) = run_capturing("?{ print('before') }\n?{ missing + 1 }\n$[a: print('never')]");
    let err = result.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Name);
    assert_eq!(diagnostics, "before\n");
}

#[test]
fn declaration_values_are_evaluated_eagerly() {
    let (result, diagnostics) =
        run_capturing("var p pow(3, 2)\nvar q print('declared')\n?{ print('after') }\n$[p: p]");

    assert_eq!(to_json(&result.unwrap()).unwrap(),
               "[\n  {\n    \"p\": 9.0\n  }\n]");
    assert_eq!(diagnostics, "declared\nafter\n");
}

#[test]
fn dictionary_calls_are_deferred_to_final_pass() {
    let (result, diagnostics) = run_capturing("$[a: print('second')]\n?{ print('first') }");

    assert_eq!(to_json(&result.unwrap()).unwrap(),
               "[\n  {\n    \"a\": null\n  }\n]");
    assert_eq!(diagnostics, "first\nsecond\n");
}

#[test]
fn comments_and_blank_lines_are_ignored() {
    let src = "*> header comment\n\nvar x 1 *> trailing comment\n\n$[x: x] *> done";
    assert_eq!(output(src), "[\n  {\n    \"x\": 1\n  }\n]");
}

#[test]
fn keywords_need_whole_words() {
    assert_eq!(output("var variable 1\nvar trueish true\n$[v: variable, t: trueish, f: false]"),
               "[\n  {\n    \"v\": 1,\n    \"t\": true,\n    \"f\": false\n  }\n]");
}

#[test]
fn trailing_commas_are_accepted() {
    assert_eq!(output("$[a: pow(2, 3,), b: 1,]"),
               "[\n  {\n    \"a\": 8.0,\n    \"b\": 1\n  }\n]");
}

#[test]
fn empty_program_produces_empty_array() {
    assert_eq!(output(""), "[]");
    assert_eq!(output("*> nothing here\n"), "[]");
}

#[test]
fn strings_are_kept_verbatim() {
    assert_eq!(output(r"$[path: 'C:\temp', greeting: 'Grüße']"),
               "[\n  {\n    \"path\": \"C:\\\\temp\",\n    \"greeting\": \"Grüße\"\n  }\n]");
}

#[test]
fn runs_are_repeatable() {
    let src = "var base 2\n$[a: pow(base, 3), b: ?{ base * 4 }]\n?{ print('side effect') }";
    assert_eq!(output(src), output(src));
}

#[test]
fn tokens_carry_line_and_column() {
    let tokens = tokenize("var x\n  $[").unwrap();

    assert_eq!(tokens,
               vec![(Token::Var, Position { line: 1, column: 0 }),
                    (Token::Identifier("x".to_string()), Position { line: 1, column: 4 }),
                    (Token::DictOpen, Position { line: 2, column: 2 }),]);
}

#[test]
fn comments_and_line_breaks_produce_no_tokens() {
    let tokens = tokenize("*> note\r\n\tvar x *> tail\n").unwrap();

    assert_eq!(tokens,
               vec![(Token::Var, Position { line: 2, column: 1 }),
                    (Token::Identifier("x".to_string()), Position { line: 2, column: 5 }),]);
}

#[test]
fn lexical_errors() {
    let err = failure("var x 1\nvar y @");
    assert_eq!(err.kind(), ErrorKind::Lex);
    assert!(matches!(err,
                     Error::Parse(ParseError::UnexpectedCharacter { line: 2, column: 6, .. })));

    assert_eq!(failure("var x 99999999999999999999").kind(), ErrorKind::Lex);
}

fn assert_syntax_error(src: &str, check: impl Fn(&ParseError) -> bool) {
    match failure(src) {
        Error::Parse(e) => {
            assert!(check(&e), "unexpected error for {src:?}: {e:?}");
            assert!(!e.is_lexical(), "{src:?} should be a syntax error");
        },
        other => panic!("expected a syntax error for {src:?}, got {other:?}"),
    }
}

fn assert_eval_error(src: &str, check: impl Fn(&RuntimeError) -> bool) {
    match failure(src) {
        Error::Runtime(e) => {
            assert!(check(&e), "unexpected error for {src:?}: {e:?}");
            assert!(!e.is_name_error(), "{src:?} should be an evaluation error");
        },
        other => panic!("expected an evaluation error for {src:?}, got {other:?}"),
    }
}

#[test]
fn syntax_errors() {
    assert_syntax_error("var 1", |e| matches!(e, ParseError::ExpectedVariableName { line: 1 }));
    assert_syntax_error("?{ 1 + 2", |e| matches!(e, ParseError::ExpectedClosingBrace { .. }));
    assert_syntax_error("?{ (1 + 2 }", |e| matches!(e, ParseError::ExpectedClosingParen { .. }));
    assert_syntax_error("$[a 1]", |e| matches!(e, ParseError::ExpectedColon { .. }));
    assert_syntax_error("$[1: 2]", |e| matches!(e, ParseError::ExpectedDictionaryKey { .. }));
    assert_syntax_error("$[a: 1", |e| matches!(e, ParseError::UnclosedDictionary { line: 1 }));
    assert_syntax_error("$[a: 1 b: 2]", |e| matches!(e, ParseError::ExpectedSeparator { .. }));
    assert_syntax_error("$[a: pow(1, 2]", |e| matches!(e, ParseError::ExpectedSeparator { .. }));
    assert_syntax_error("$[a: pow(1, 2", |e| matches!(e, ParseError::UnclosedArguments { .. }));
    assert_syntax_error("x", |e| matches!(e, ParseError::UnexpectedToken { .. }));
    assert_syntax_error("]", |e| matches!(e, ParseError::UnexpectedToken { .. }));
    assert_syntax_error("var x", |e| matches!(e, ParseError::UnexpectedEndOfInput { .. }));
    assert_syntax_error("var x )", |e| matches!(e, ParseError::InvalidValue { .. }));
    assert_syntax_error("var x ?{ $[a: 1] }", |e| matches!(e, ParseError::InvalidTerm { .. }));
    assert_syntax_error("var a 1\n\n?{ a + }",
                        |e| matches!(e, ParseError::InvalidTerm { line: 3, .. }));
}

#[test]
fn name_errors() {
    let err = failure("$[a: sqrt(4)]");
    assert_eq!(err.kind(), ErrorKind::Name);
    assert!(matches!(err, Error::Runtime(RuntimeError::UnknownFunction { .. })));

    assert_eq!(failure("var x y").kind(), ErrorKind::Name);
}

#[test]
fn evaluation_errors() {
    assert_eval_error("?{ 1 / 0 }", |e| matches!(e, RuntimeError::DivisionByZero { .. }));
    assert_eval_error("?{ 1.5 / 0.0 }", |e| matches!(e, RuntimeError::DivisionByZero { .. }));
    assert_eval_error("?{ 1 + true }", |e| matches!(e, RuntimeError::TypeError { .. }));
    assert_eval_error("?{ 'a' - 'b' }", |e| matches!(e, RuntimeError::TypeError { .. }));
    assert_eval_error("?{ 9223372036854775807 + 1 }",
                      |e| matches!(e, RuntimeError::Overflow { .. }));
    assert_eval_error("$[p: pow(1)]",
                      |e| matches!(e, RuntimeError::ArgumentCountMismatch { found: 1, .. }));
    assert_eval_error("$[p: pow('a', 2)]",
                      |e| matches!(e, RuntimeError::ExpectedNumber { found: "string", .. }));
    assert_eval_error("$[p: pow(10, 400)]", |e| matches!(e, RuntimeError::Overflow { .. }));
    assert_eval_error("$[p: pow(0 - 8, 0.5)]", |e| matches!(e, RuntimeError::DomainError { .. }));
}

#[test]
fn errors_name_their_kind() {
    assert_eq!(ErrorKind::Lex.to_string(), "LexError");
    assert_eq!(ErrorKind::Syntax.to_string(), "SyntaxError");
    assert_eq!(ErrorKind::Name.to_string(), "NameError");
    assert_eq!(ErrorKind::Eval.to_string(), "EvalError");
    assert_eq!(failure("$[x: undeclared]").to_string(),
               "Error on line 1: Undeclared variable 'undeclared'.");
}
