use hempty::error::ParseError;
use hempty::tree::Value;
use hempty::{parser, walk};

use std::io::{self, Read};

fn main() {
    let mut input = String::new();
    io::stdin().read_to_string(&mut input).unwrap();

    // Blank input falls back to the built-in demo tree.
    let value = if input.trim().is_empty() {
        demo_tree()
    } else {
        match parser::parse(&input) {
            Ok(value) => value,
            Err(err) => {
                report_parse_error(&input, &err);
                std::process::exit(1);
            }
        }
    };

    println!("{}", value.to_text());
    match walk::render_lines(&value) {
        Ok(lines) => print!("{}", lines),
        Err(err) => {
            eprintln!("Error:");
            eprintln!("{}", err);
            std::process::exit(1);
        }
    }
}

/// The demo tree: flattens to 1, 2, 1, 5, 6, 7, 8, 9, 10.
fn demo_tree() -> Value {
    Value::node(
        Value::node(
            Value::number_node(1.0),
            Value::number(2.0),
            Value::number_node(1.0),
        ),
        Value::number(5.0),
        Value::node(
            Value::node(
                Value::number_node(6.0),
                Value::number(7.0),
                Value::number_node(8.0),
            ),
            Value::number(9.0),
            Value::number_node(10.0),
        ),
    )
}

fn report_parse_error(input: &str, err: &ParseError) {
    let lines: Vec<&str> = input.lines().collect();

    let line_num = err.begin.line;
    let line_text = lines.get(line_num).unwrap_or(&"");

    eprintln!("ERROR AT LINE {}:", line_num + 1);
    eprintln!("{}", line_text);

    // Build the underline
    let start_col = err.begin.column;
    let end_col = if err.begin.line == err.end.line && err.end.column > err.begin.column {
        err.end.column
    } else {
        // Point error or spans multiple lines: underline to end of line
        if start_col < line_text.len() {
            line_text.len()
        } else {
            start_col + 1
        }
    };

    let mut underline = String::new();
    for _ in 0..start_col {
        underline.push(' ');
    }
    underline.push('^');
    if end_col > start_col + 1 {
        for _ in (start_col + 1)..end_col {
            underline.push('_');
        }
    }

    eprintln!("{}", underline);
    eprintln!("{}", err.message);
}
