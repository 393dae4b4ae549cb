//! Path data parsing
//!
//! Accepts the `M`/`L`/`H`/`V`/`Z` commands (absolute and relative) plus the
//! `C` and `Q` curves, which are flattened to polylines. Any other command
//! letter is rejected with its byte offset so callers can point at it.

use crate::error::{DesignerError, DesignerResult};
use serde::{Deserialize, Serialize};
use std::iter::Peekable;
use std::str::CharIndices;
use tabforge_camtools::flatten::{flatten_cubic, flatten_quadratic};
use tabforge_core::Point;

/// One continuous polyline from the parsed data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subpath {
    pub points: Vec<Point>,
    pub closed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Command(char, usize),
    Number(f64, usize),
}

const COMMANDS: &str = "MmLlHhVvZzCcQq";

fn tokenize(data: &str) -> DesignerResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = data.char_indices().peekable();

    while let Some(&(position, c)) = chars.peek() {
        if c.is_whitespace() || c == ',' {
            chars.next();
        } else if c.is_ascii_alphabetic() {
            if !COMMANDS.contains(c) {
                return Err(DesignerError::UnsupportedPathCommand {
                    command: c,
                    position,
                });
            }
            tokens.push(Token::Command(c, position));
            chars.next();
        } else if c.is_ascii_digit() || matches!(c, '.' | '+' | '-') {
            let end = scan_number(&mut chars, data.len());
            let text = &data[position..end];
            let value = text.parse::<f64>().map_err(|_| DesignerError::InvalidNumber {
                token: text.to_string(),
                position,
            })?;
            tokens.push(Token::Number(value, position));
        } else {
            return Err(DesignerError::InvalidNumber {
                token: c.to_string(),
                position,
            });
        }
    }

    Ok(tokens)
}

/// Advance past one number and return the byte offset just after it.
fn scan_number(chars: &mut Peekable<CharIndices<'_>>, len: usize) -> usize {
    let mut seen_dot = false;
    let mut seen_exp = false;
    let mut first = true;
    let mut previous = ' ';

    while let Some(&(index, c)) = chars.peek() {
        let accept = match c {
            '0'..='9' => true,
            '+' | '-' => first || matches!(previous, 'e' | 'E'),
            '.' => !seen_dot && !seen_exp,
            'e' | 'E' => !seen_exp && !first,
            _ => false,
        };
        if !accept {
            return index;
        }
        seen_dot |= c == '.';
        seen_exp |= matches!(c, 'e' | 'E');
        first = false;
        previous = c;
        chars.next();
    }
    len
}

struct PathBuilder {
    subpaths: Vec<Subpath>,
    current: Vec<Point>,
    cursor: Point,
    start: Point,
}

impl PathBuilder {
    fn new() -> Self {
        Self {
            subpaths: Vec::new(),
            current: Vec::new(),
            cursor: Point::default(),
            start: Point::default(),
        }
    }

    fn move_to(&mut self, to: Point) {
        self.flush(false);
        self.current.push(to);
        self.cursor = to;
        self.start = to;
    }

    fn line_to(&mut self, to: Point) {
        if self.current.is_empty() {
            self.current.push(self.cursor);
        }
        self.current.push(to);
        self.cursor = to;
    }

    fn extend(&mut self, points: Vec<Point>, to: Point) {
        if self.current.is_empty() {
            self.current.push(self.cursor);
        }
        self.current.extend(points);
        self.cursor = to;
    }

    fn close(&mut self) {
        self.flush(true);
        self.cursor = self.start;
    }

    fn flush(&mut self, closed: bool) {
        let mut points = std::mem::take(&mut self.current);
        if closed && points.len() > 1 {
            if let (Some(first), Some(last)) = (points.first(), points.last()) {
                if first.coincides(last) {
                    points.pop();
                }
            }
        }
        if points.len() >= 2 {
            self.subpaths.push(Subpath { points, closed });
        }
    }

    fn finish(mut self) -> Vec<Subpath> {
        self.flush(false);
        self.subpaths
    }
}

/// Parse path data into flattened subpaths in the data's own coordinates.
pub fn parse_path_data(data: &str) -> DesignerResult<Vec<Subpath>> {
    let mut tokens = tokenize(data)?.into_iter().peekable();
    let mut builder = PathBuilder::new();

    match tokens.peek() {
        None => return Ok(Vec::new()),
        Some(Token::Command('M' | 'm', _)) => {}
        Some(_) => return Err(DesignerError::MissingMoveTo),
    }

    while let Some(token) = tokens.next() {
        let (command, position) = match token {
            Token::Command(command, position) => (command, position),
            Token::Number(value, position) => {
                return Err(DesignerError::InvalidNumber {
                    token: value.to_string(),
                    position,
                })
            }
        };

        let next = |tokens: &mut Peekable<std::vec::IntoIter<Token>>| -> DesignerResult<f64> {
            match tokens.next() {
                Some(Token::Number(value, _)) => Ok(value),
                _ => Err(DesignerError::MissingCoordinates { command, position }),
            }
        };

        let relative = command.is_ascii_lowercase();
        let mut first = true;
        loop {
            let base = if relative { builder.cursor } else { Point::default() };
            let point = |x: f64, y: f64| Point::new(base.x + x, base.y + y);

            match command.to_ascii_uppercase() {
                'M' => {
                    let to = point(next(&mut tokens)?, next(&mut tokens)?);
                    if first {
                        builder.move_to(to);
                    } else {
                        builder.line_to(to);
                    }
                }
                'L' => {
                    let to = point(next(&mut tokens)?, next(&mut tokens)?);
                    builder.line_to(to);
                }
                'H' => {
                    let x = next(&mut tokens)?;
                    let to = Point::new(if relative { builder.cursor.x + x } else { x }, builder.cursor.y);
                    builder.line_to(to);
                }
                'V' => {
                    let y = next(&mut tokens)?;
                    let to = Point::new(builder.cursor.x, if relative { builder.cursor.y + y } else { y });
                    builder.line_to(to);
                }
                'C' => {
                    let ctrl1 = point(next(&mut tokens)?, next(&mut tokens)?);
                    let ctrl2 = point(next(&mut tokens)?, next(&mut tokens)?);
                    let to = point(next(&mut tokens)?, next(&mut tokens)?);
                    let points = flatten_cubic(builder.cursor, ctrl1, ctrl2, to);
                    builder.extend(points, to);
                }
                'Q' => {
                    let ctrl = point(next(&mut tokens)?, next(&mut tokens)?);
                    let to = point(next(&mut tokens)?, next(&mut tokens)?);
                    let points = flatten_quadratic(builder.cursor, ctrl, to);
                    builder.extend(points, to);
                }
                _ => {
                    builder.close();
                    break;
                }
            }

            first = false;
            if !matches!(tokens.peek(), Some(Token::Number(..))) {
                break;
            }
        }
    }

    Ok(builder.finish())
}
