//! Pipeline short-circuits name the stage and side that failed

use outcome_pipeline::prelude::*;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Capture {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

fn traced<F: FnOnce()>(f: F) -> String {
    let capture = Capture::default();
    let writer = capture.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    capture.contents()
}

fn parse(s: &str) -> Result<i32, String> {
    s.parse().map_err(|_| format!("not a number: {s}"))
}

#[test]
fn zip_reports_right_side_failure() {
    let output = traced(|| {
        let sum = zip(parse, parse, |a, b| Outcome::Ok(a + b));
        assert_eq!(sum("1", "x"), Outcome::Err("not a number: x".to_string()));
    });
    assert!(output.contains("pipeline short-circuited"), "{output}");
    assert!(output.contains(r#"stage="zip""#), "{output}");
    assert!(output.contains(r#"side="right""#), "{output}");
}

#[test]
fn merge_reports_left_side_failure() {
    let output = traced(|| {
        let same = merge(parse, parse, |a, b| if a == b { Ok(()) } else { Err(format!("{a}")) });
        assert!(same("x", "1").is_err());
    });
    assert!(output.contains(r#"stage="zip""#), "{output}");
    assert!(output.contains(r#"side="left""#), "{output}");
}

#[test]
fn chain_reports_its_stage() {
    let output = traced(|| {
        let doubled = map(parse, |x| x * 2);
        assert!(doubled("nope").is_err());
    });
    assert!(output.contains(r#"stage="chain""#), "{output}");
}

#[test]
fn successful_pipeline_is_silent() {
    let output = traced(|| {
        let increment = |x: i32| Ok::<_, String>(x + 1);
        let total = outcome_pipeline::chain!(parse, increment, lift(|x: i32| x * 10));
        assert_eq!(total("4"), Outcome::Ok(50));
    });
    assert!(output.is_empty(), "{output}");
}
