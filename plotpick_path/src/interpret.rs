// Copyright 2025 the Plotpick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interpreter for path data strings.

use alloc::vec::Vec;

use kurbo::{Affine, Point};

use crate::outline::Outline;

/// Command letters whose geometry is curved. Any of these in a path makes the
/// whole outline unsupported.
const CURVE_COMMANDS: &[char] = &['C', 'c', 'S', 's', 'Q', 'q', 'T', 't', 'A', 'a'];

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Mode {
    /// No command seen yet; operands are ignored.
    Unset,
    Move { relative: bool },
    Line { relative: bool },
    Horizontal { relative: bool },
    Vertical { relative: bool },
    Close,
    /// A command this interpreter does not model; operands are ignored.
    Other,
}

impl Mode {
    fn from_char(c: char) -> Self {
        match c {
            'M' => Self::Move { relative: false },
            'm' => Self::Move { relative: true },
            'L' => Self::Line { relative: false },
            'l' => Self::Line { relative: true },
            'H' => Self::Horizontal { relative: false },
            'h' => Self::Horizontal { relative: true },
            'V' => Self::Vertical { relative: false },
            'v' => Self::Vertical { relative: true },
            'Z' | 'z' => Self::Close,
            _ => Self::Other,
        }
    }
}

#[derive(Debug)]
struct Interpreter {
    mode: Mode,
    coord: [f64; 2],
    /// Index of the next component an `M`/`L` operand fills.
    component: usize,
    points: Vec<Point>,
}

impl Interpreter {
    fn new() -> Self {
        Self {
            mode: Mode::Unset,
            coord: [0.0, 0.0],
            component: 0,
            points: Vec::new(),
        }
    }

    fn feed(&mut self, token: &str) {
        if let Ok(value) = token.parse::<f64>() {
            self.operand(value);
            return;
        }
        let mut chars = token.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            self.switch(Mode::from_char(c));
        }
    }

    fn switch(&mut self, mode: Mode) {
        self.mode = mode;
        if mode == Mode::Close {
            self.close();
        }
    }

    fn close(&mut self) {
        if let Some(&first) = self.points.first() {
            self.points.push(first);
        }
        self.component = 0;
    }

    fn operand(&mut self, value: f64) {
        match self.mode {
            Mode::Move { relative } | Mode::Line { relative } => {
                self.set(self.component, value, relative);
                if self.component == 1 {
                    self.emit();
                    self.component = 0;
                } else {
                    self.component = 1;
                }
            }
            Mode::Horizontal { relative } => {
                self.set(0, value, relative);
                self.emit();
                self.component = 0;
            }
            Mode::Vertical { relative } => {
                self.set(1, value, relative);
                self.emit();
                self.component = 0;
            }
            Mode::Unset | Mode::Close | Mode::Other => {}
        }
    }

    fn set(&mut self, component: usize, value: f64, relative: bool) {
        if relative {
            self.coord[component] += value;
        } else {
            self.coord[component] = value;
        }
    }

    fn emit(&mut self) {
        self.points.push(Point::new(self.coord[0], self.coord[1]));
    }
}

fn tokens(d: &str) -> impl Iterator<Item = &str> {
    d.trim().split(' ').filter(|t| !t.is_empty())
}

fn is_curve_command(token: &str) -> bool {
    let mut chars = token.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if CURVE_COMMANDS.contains(&c))
}

/// Interprets a path data string into an absolute [`Outline`].
///
/// Tokens are separated by single spaces. Each token is either a one-character
/// command or a number consumed under the current command:
///
/// - `M`/`m` and `L`/`l` fill x then y (absolute or relative to the running
///   coordinate) and emit one point per completed pair.
/// - `H`/`h` and `V`/`v` update one component and emit immediately.
/// - `Z`/`z` emits the first point of the sequence again. The running
///   coordinate stays where the last command left it. It does nothing on an
///   empty sequence.
/// - Curve commands (`C`, `S`, `Q`, `T`, `A`, either case) anywhere in the
///   string yield [`Outline::unsupported`].
/// - Unknown commands, numbers before any command and tokens that are not
///   numbers are ignored.
///
/// A token that parses as a number is always an operand, so single digits
/// such as `0` are coordinates. Any other one-character token is a command.
///
/// If `transform` holds a `matrix(a,b,c,d,e,f)` it is applied to every point;
/// absent or malformed transforms leave the points unchanged.
#[must_use]
pub fn interpret(d: &str, transform: Option<&str>) -> Outline {
    if tokens(d).any(is_curve_command) {
        return Outline::unsupported();
    }

    let mut interpreter = Interpreter::new();
    for token in tokens(d) {
        interpreter.feed(token);
    }

    let mut points = interpreter.points;
    if let Some(xf) = transform.and_then(parse_transform) {
        for pt in &mut points {
            *pt = xf * *pt;
        }
    }
    Outline::new(points)
}

/// Parses a `matrix(a,b,c,d,e,f)` transform attribute.
///
/// The six coefficients may be separated by commas, whitespace, or both.
/// Returns `None` for anything else, including other transform functions.
#[must_use]
pub fn parse_transform(s: &str) -> Option<Affine> {
    let inner = s
        .trim()
        .strip_prefix("matrix")?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')?;

    let mut coeffs = [0.0; 6];
    let mut count = 0;
    for part in inner
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|p| !p.is_empty())
    {
        let slot = coeffs.get_mut(count)?;
        *slot = part.parse().ok()?;
        count += 1;
    }
    (count == 6).then(|| Affine::new(coeffs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn pts(outline: &Outline) -> Vec<(f64, f64)> {
        outline.points().iter().map(|p| (p.x, p.y)).collect()
    }

    #[test]
    fn horizontal_and_vertical_keep_the_other_component() {
        let o = interpret("M 1 2 H 5 V 7 h -1 v -2", None);
        assert_eq!(pts(&o), vec![(1.0, 2.0), (5.0, 2.0), (5.0, 7.0), (4.0, 7.0), (4.0, 5.0)]);
    }

    #[test]
    fn relative_moves_accumulate() {
        let o = interpret("m 10 10 l 5 0 l 0 5 l -5 0", None);
        assert_eq!(
            pts(&o),
            vec![(10.0, 10.0), (15.0, 10.0), (15.0, 15.0), (10.0, 15.0)]
        );
    }

    #[test]
    fn implicit_repeats_under_one_command() {
        let o = interpret("M 0 0 L 1 1 2 2 3 3", None);
        assert_eq!(pts(&o), vec![(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (3.0, 3.0)]);
    }

    #[test]
    fn single_digits_are_operands() {
        let o = interpret("M 1 0 L 0 1 2 3", None);
        assert_eq!(pts(&o), vec![(1.0, 0.0), (0.0, 1.0), (2.0, 3.0)]);
    }

    #[test]
    fn other_single_characters_are_commands() {
        // `X` switches to an unknown command, so `6 7` are dropped, and `L`
        // picks up again afterwards.
        let o = interpret("M 0 0 L 10 10 X 6 7 L 8 9", None);
        assert_eq!(pts(&o), vec![(0.0, 0.0), (10.0, 10.0), (8.0, 9.0)]);
        // A lone `.` or `-` is not a number either.
        let o = interpret("M 0 0 - 4 4", None);
        assert_eq!(pts(&o), vec![(0.0, 0.0)]);
    }

    #[test]
    fn operands_before_any_command_are_ignored() {
        let o = interpret("12 34 M 1 2", None);
        assert_eq!(pts(&o), vec![(1.0, 2.0)]);
    }

    #[test]
    fn close_on_empty_sequence_is_a_noop() {
        let o = interpret("Z M 3 4", None);
        assert_eq!(pts(&o), vec![(3.0, 4.0)]);
    }

    #[test]
    fn relative_after_close_continues_from_last_coordinate() {
        let o = interpret("M 1 1 L 4 1 Z l 0 2", None);
        assert_eq!(pts(&o), vec![(1.0, 1.0), (4.0, 1.0), (1.0, 1.0), (4.0, 3.0)]);
    }

    #[test]
    fn extra_spaces_and_garbage_tokens_are_tolerated() {
        let o = interpret("  M  1 2  L 3 4 xyz ", None);
        assert_eq!(pts(&o), vec![(1.0, 2.0), (3.0, 4.0)]);
    }

    #[test]
    fn any_curve_command_is_unsupported() {
        for d in ["M 0 0 C 1 1 2 2 3 3", "M 0 0 L 1 1 q 1 1 2 2", "M 0 0 A 1 1 0 0 1 2 2"] {
            let o = interpret(d, Some("matrix(2,0,0,2,1,1)"));
            assert!(o.is_unsupported(), "{d} should be unsupported");
            assert_eq!(o.len(), 1);
        }
    }

    #[test]
    fn transform_is_applied_after_interpretation() {
        let o = interpret("M 1 0 L 0 1", Some("matrix(0,1,-1,0,10,20)"));
        // [[a,c],[b,d]] = [[0,-1],[1,0]]: a quarter turn, then translate.
        assert_eq!(pts(&o), vec![(10.0, 21.0), (9.0, 20.0)]);
    }

    #[test]
    fn malformed_transform_is_identity() {
        for xf in ["matrix(1,0,0,1,5)", "translate(3,4)", "matrix(1,0,0,1,5,x)", "matrix 1 0 0 1 0 0"] {
            let o = interpret("M 1 2", Some(xf));
            assert_eq!(pts(&o), vec![(1.0, 2.0)], "{xf}");
        }
    }

    #[test]
    fn transform_separators() {
        let expected = Some(Affine::new([1.0, 0.0, 0.0, -1.0, 0.0, 792.0]));
        assert_eq!(parse_transform("matrix(1,0,0,-1,0,792)"), expected);
        assert_eq!(parse_transform("matrix(1 0 0 -1 0 792)"), expected);
        assert_eq!(parse_transform(" matrix( 1, 0, 0, -1, 0, 792 ) "), expected);
        assert_eq!(parse_transform("matrix(1,0,0,-1,0,792,3)"), None);
    }
}
