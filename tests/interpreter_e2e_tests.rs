/// End-to-end integration tests
/// Demonstrates: Lexer → Parser/Evaluator → Events working together
use minicalc::lexer::{Lexer, TokenKind};
use minicalc::parser::{Event, EventSink, Parser};
use minicalc::{evaluate, Error, ErrorKind, Interpreter};

fn values(source: &str) -> Vec<f64> {
    evaluate(source)
        .unwrap()
        .iter()
        .map(Event::value)
        .collect()
}

#[test]
fn test_e2e_simple_arithmetic() {
    let source = "2 + 3 * 4";

    // Lex + parse + evaluate
    let mut parser = Parser::new(Lexer::new(source));
    let mut events = Vec::new();
    parser.run(&mut events).unwrap();

    assert_eq!(events, vec![Event::Evaluated { value: 14.0 }]);
}

#[test]
fn test_e2e_grouping() {
    assert_eq!(values("(2 + 3) * 4"), vec![20.0]);
    assert_eq!(values("((1 + 2) * (3 + 4)) / 7"), vec![3.0]);
}

#[test]
fn test_e2e_program() {
    let source = r#"
        width = 12;
        height = 5;
        area = width * height;
        area / 2;
        (width + height) * 2
    "#;

    let events = evaluate(source).unwrap();
    assert_eq!(events.len(), 5);
    assert_eq!(
        events[2],
        Event::Assigned {
            name: "area".to_string(),
            value: 60.0
        }
    );
    assert_eq!(events[3], Event::Evaluated { value: 30.0 });
    assert_eq!(events[4], Event::Evaluated { value: 34.0 });
}

#[test]
fn test_e2e_assignment_round_trip() {
    let events = evaluate("x = 5; x + 1;").unwrap();
    assert_eq!(
        events,
        vec![
            Event::Assigned {
                name: "x".to_string(),
                value: 5.0
            },
            Event::Evaluated { value: 6.0 },
        ]
    );
}

#[test]
fn test_e2e_names_are_case_sensitive() {
    let err = evaluate("Total = 1; total").unwrap_err();
    assert_eq!(
        err,
        Error::UndefinedVariable {
            name: "total".to_string()
        }
    );
}

#[test]
fn test_e2e_division_by_zero() {
    let err = evaluate("4 / 0").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DivisionByZero);
    assert_eq!(err.to_string(), "Division by zero");
}

#[test]
fn test_e2e_undefined_variable() {
    let err = evaluate("y + 1").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UndefinedVariable);
    assert!(err.to_string().contains("y"));
}

#[test]
fn test_e2e_malformed_inputs() {
    assert_eq!(evaluate("2 +").unwrap_err().kind(), ErrorKind::Syntax);
    assert_eq!(evaluate("(2 + 3").unwrap_err().kind(), ErrorKind::Syntax);
    assert_eq!(evaluate("2 $ 3").unwrap_err().kind(), ErrorKind::Lexical);
}

#[test]
fn test_e2e_if_is_lexed_but_not_parsed() {
    let tokens = Lexer::new("if").tokenize();
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::If);
    assert_eq!(tokens[1].kind, TokenKind::Eof);

    assert!(evaluate("if").unwrap_err().is_syntax());
}

#[test]
fn test_e2e_no_partial_result_on_trailing_garbage() {
    let mut events = Vec::new();
    let mut parser = Parser::new(Lexer::new("1; 2 $ 3"));

    assert!(parser.run(&mut events).is_err());
    // Only the statement before the bad one was reported
    assert_eq!(events, vec![Event::Evaluated { value: 1.0 }]);
}

#[test]
fn test_e2e_custom_sink() {
    #[derive(Default)]
    struct Counter {
        assignments: usize,
        results: Vec<f64>,
    }

    impl EventSink for Counter {
        fn emit(&mut self, event: Event) {
            match event {
                Event::Assigned { .. } => self.assignments += 1,
                Event::Evaluated { value } => self.results.push(value),
            }
        }
    }

    let mut counter = Counter::default();
    Interpreter::new()
        .execute("a = 1; b = a + 1; a + b; b * 10", &mut counter)
        .unwrap();

    assert_eq!(counter.assignments, 2);
    assert_eq!(counter.results, vec![3.0, 20.0]);
}

#[test]
fn test_e2e_event_json_shape() {
    let events = evaluate("x = 2; x * 3").unwrap();
    let json = serde_json::to_value(&events).unwrap();

    assert_eq!(
        json,
        serde_json::json!([
            { "kind": "assigned", "name": "x", "value": 2.0 },
            { "kind": "evaluated", "value": 6.0 },
        ])
    );
}
