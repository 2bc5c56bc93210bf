use ggez::GameError;

use crate::config::ConfigError;
use std::fmt::{Debug, Display, Formatter};
use std::{fmt, result};

#[derive(Debug)]
pub enum ErrorType {
    GameError(GameError),
    Config(ConfigError),
}

/// The second member contains a trace in reverse order
#[must_use]
pub struct Error(ErrorType, Vec<String>);

impl From<GameError> for Error {
    fn from(e: GameError) -> Self {
        Self(ErrorType::GameError(e), vec![])
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self(ErrorType::Config(e), vec![])
    }
}

impl Error {
    pub fn with_trace_step<S: ToString>(mut self, s: S) -> Self {
        self.1.push(s.to_string());
        self
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Error:\n{:?}\nTrace:", self.0)?;
        for t in (self.1).iter().rev() {
            writeln!(f, " in {}", t)?;
        }
        Ok(())
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.0 {
            ErrorType::Config(e) => write!(f, "{}", e)?,
            ErrorType::GameError(e) => write!(f, "{}", e)?,
        }
        for t in (self.1).iter().rev() {
            write!(f, "\n in {}", t)?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}

pub type Result<T = ()> = result::Result<T, Error>;

pub trait ErrorConversion {
    fn with_trace_step<S: ToString>(self, s: S) -> Self;
}

impl<T> ErrorConversion for Result<T> {
    fn with_trace_step<S: ToString>(self, s: S) -> Self {
        self.map_err(|e| e.with_trace_step(s.to_string()))
    }
}

#[test]
fn test_trace_order() {
    let res: Result = Err(ConfigError::GridSize(1).into());
    let err = res
        .with_trace_step("Config::validate")
        .with_trace_step("main")
        .unwrap_err();

    let text = err.to_string();
    let main = text.find(" in main").unwrap();
    let validate = text.find(" in Config::validate").unwrap();
    assert!(main < validate, "{}", text);
    assert!(text.starts_with("grid size must be between"), "{}", text);
    assert!(matches!(&err.0, ErrorType::Config(ConfigError::GridSize(1))));
}
