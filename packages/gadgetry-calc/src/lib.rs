//! Four-function keypad calculator engine.
//!
//! # Overview
//!
//! The engine behind the keypad calculator demos: the host turns key
//! presses into [`Input`] events, feeds them to a [`Calculator`], and
//! blits [`Calculator::display`] to whatever screen it has. The engine
//! owns all arithmetic and all error recovery; it never panics and never
//! returns an error from a key press.
//!
//! Evaluation is strictly left to right with no operator precedence, the
//! way pocket calculators behave: `1 + 2 × 3` is 9, not 7.
//!
//! ```
//! use gadgetry_calc::Calculator;
//!
//! let mut calc = Calculator::new();
//! for key in ["7", "×", "8", "="] {
//!     calc.press_key(key).unwrap();
//! }
//! assert_eq!(calc.display(), "56");
//! ```
//!
//! Arithmetic failures (division by zero, overflow) put `ERROR` on the
//! display; the engine then ignores everything except all-clear:
//!
//! ```
//! use gadgetry_calc::Calculator;
//!
//! let mut calc = Calculator::new();
//! for key in ["5", "÷", "0", "="] {
//!     calc.press_key(key).unwrap();
//! }
//! assert_eq!(calc.display(), "ERROR");
//! calc.press_key("AC").unwrap();
//! assert_eq!(calc.display(), "0");
//! ```

#![no_std]

extern crate alloc;

use alloc::format;
use alloc::string::{String, ToString};
use core::str::FromStr;

use snafu::Snafu;

/// What the display shows after an arithmetic failure.
pub const ERROR_DISPLAY: &str = "ERROR";

/// A binary operator key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// `+`
    Add,
    /// `−`
    Subtract,
    /// `×`
    Multiply,
    /// `÷`
    Divide,
}

/// One keypad event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// A digit key, 0–9.
    Digit(u8),
    /// The decimal point.
    Dot,
    /// A binary operator key.
    Operator(Op),
    /// The `+/−` sign toggle.
    ToggleSign,
    /// The `%` key.
    Percent,
    /// The `=` key.
    Equals,
    /// `AC`: reset everything.
    AllClear,
    /// `CE`: discard the current entry only.
    ClearEntry,
}

/// A key string that names no calculator input.
#[derive(Debug, Snafu, Clone, PartialEq, Eq)]
#[snafu(display("{key:?} is not a calculator key"))]
pub struct UnknownKeyError {
    key: String,
}

impl FromStr for Input {
    type Err = UnknownKeyError;

    /// Parses the key strings keypad hosts produce.
    ///
    /// The typeset forms `−`, `×`, `÷` and `+/−` are accepted alongside
    /// their ASCII aliases `-`, `x`, `*`, `/` and `+/-`.
    fn from_str(key: &str) -> Result<Self, Self::Err> {
        Ok(match key {
            "." => Self::Dot,
            "+" => Self::Operator(Op::Add),
            "−" | "-" => Self::Operator(Op::Subtract),
            "×" | "x" | "*" => Self::Operator(Op::Multiply),
            "÷" | "/" => Self::Operator(Op::Divide),
            "+/−" | "+/-" => Self::ToggleSign,
            "%" => Self::Percent,
            "=" => Self::Equals,
            "AC" => Self::AllClear,
            "CE" => Self::ClearEntry,
            _ => {
                let mut digits = key.bytes();
                match (digits.next(), digits.next()) {
                    (Some(digit @ b'0'..=b'9'), None) => Self::Digit(digit - b'0'),
                    _ => {
                        return Err(UnknownKeyError {
                            key: String::from(key),
                        });
                    }
                }
            }
        })
    }
}

// Internal arithmetic failure; always rendered as ERROR, never surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FoldError {
    Parse,
    DivideByZero,
    Overflow,
}

/// The calculator state machine.
///
/// Holds a display string, a running accumulator (the folded left-hand
/// side), and the pending operator and right-hand entry. See the
/// [crate docs](crate) for usage.
#[derive(Debug, Clone)]
pub struct Calculator {
    display: String,
    accumulator: String,
    operand: Option<String>,
    operator: Option<Op>,
    equals_pressed: bool,
    errored: bool,
}

impl Calculator {
    /// A calculator showing `0`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            display: String::from("0"),
            accumulator: String::from("0"),
            operand: None,
            operator: None,
            equals_pressed: false,
            errored: false,
        }
    }

    /// The current display text: a decimal numeral, or
    /// [`ERROR_DISPLAY`] after a failure.
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Feeds one input event.
    pub fn press(&mut self, input: Input) {
        // After a failure only AC gets through; ERROR stays up until then.
        if self.errored && input != Input::AllClear {
            return;
        }

        let outcome = match input {
            Input::AllClear => {
                self.all_clear();
                Ok(())
            }
            Input::ClearEntry => {
                self.operand = None;
                self.display = String::from("0");
                Ok(())
            }
            Input::Digit(digit) => {
                self.digit(digit);
                Ok(())
            }
            Input::Dot => {
                self.dot();
                Ok(())
            }
            Input::Operator(op) => self.operator(op),
            Input::ToggleSign => {
                self.toggle_sign();
                Ok(())
            }
            Input::Percent => self.percent(),
            Input::Equals => self.equals(),
        };

        if outcome.is_err() {
            self.all_clear();
            self.display = String::from(ERROR_DISPLAY);
            self.errored = true;
        }
    }

    /// Parses `key` and feeds it; the string-facing twin of [`press`].
    ///
    /// [`press`]: Calculator::press
    ///
    /// # Errors
    ///
    /// Returns [`UnknownKeyError`] if `key` names no input. The
    /// calculator state is untouched in that case.
    pub fn press_key(&mut self, key: &str) -> Result<(), UnknownKeyError> {
        self.press(key.parse()?);
        Ok(())
    }

    fn all_clear(&mut self) {
        self.display = String::from("0");
        self.accumulator = String::from("0");
        self.operand = None;
        self.operator = None;
        self.equals_pressed = false;
        self.errored = false;
    }

    fn digit(&mut self, digit: u8) {
        let character = char::from(b'0' + digit);

        if self.equals_pressed {
            // A digit after `=` starts a brand-new expression.
            self.equals_pressed = false;
            self.operator = None;
            self.operand = None;
            self.display = String::from(character);
            self.accumulator = self.display.clone();
            return;
        }

        if self.operator.is_some() && self.operand.is_none() {
            // First digit of the right-hand entry.
            self.display = String::from(character);
            self.operand = Some(self.display.clone());
            return;
        }

        if self.display == "0" {
            self.display = String::from(character);
        } else {
            self.display.push(character);
        }
        self.sync_entry();
    }

    fn dot(&mut self) {
        if !self.display.contains('.') {
            self.display.push('.');
            self.sync_entry();
        }
    }

    fn operator(&mut self, op: Op) -> Result<(), FoldError> {
        if let (Some(pending), Some(operand)) = (self.operator, self.operand.take()) {
            // Fold the finished pair before taking the new operator.
            self.accumulator = calculate(&self.accumulator, pending, &operand)?;
            self.display = self.accumulator.clone();
        }

        // With no operand pending, a second operator just replaces the
        // first.
        self.operator = Some(op);
        self.operand = None;
        self.equals_pressed = false;
        Ok(())
    }

    fn toggle_sign(&mut self) {
        if self.display == "0" {
            return;
        }
        match self.display.strip_prefix('-') {
            Some(rest) => self.display = String::from(rest),
            None => self.display.insert(0, '-'),
        }
        self.sync_entry();
    }

    fn percent(&mut self) -> Result<(), FoldError> {
        let value = parse(&self.display)?;
        self.display = format_value(value / 100.0);
        self.sync_entry();
        Ok(())
    }

    fn equals(&mut self) -> Result<(), FoldError> {
        if let Some(op) = self.operator {
            // `7 × =` squares: a missing operand defaults to the display.
            let operand = self
                .operand
                .take()
                .unwrap_or_else(|| self.display.clone());
            self.accumulator = calculate(&self.accumulator, op, &operand)?;
            self.display = self.accumulator.clone();
        }
        self.equals_pressed = true;
        Ok(())
    }

    /// Mirrors an edited display into whichever slot is being typed.
    fn sync_entry(&mut self) {
        if self.operator.is_none() {
            self.accumulator = self.display.clone();
        } else if self.operand.is_some() {
            self.operand = Some(self.display.clone());
        }
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

fn parse(text: &str) -> Result<f64, FoldError> {
    text.parse::<f64>().map_err(|_| FoldError::Parse)
}

fn calculate(a: &str, op: Op, b: &str) -> Result<String, FoldError> {
    let a = parse(a)?;
    let b = parse(b)?;

    let result = match op {
        Op::Add => a + b,
        Op::Subtract => a - b,
        Op::Multiply => a * b,
        Op::Divide => {
            if b == 0.0 {
                return Err(FoldError::DivideByZero);
            }
            a / b
        }
    };

    if !result.is_finite() {
        return Err(FoldError::Overflow);
    }
    Ok(format_value(result))
}

/// Formats a result, collapsing integral values to integer text.
fn format_value(value: f64) -> String {
    if value == libm::trunc(value) && libm::fabs(value) < 1e15 {
        (value as i64).to_string()
    } else {
        format!("{value}")
    }
}
