use crate::error::{AdbxError, Result};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Literal(String),
    /// `{}`: one parameter, inserted as a single argument
    Param,
    /// `{..}`: one parameter, split on whitespace into zero or more arguments
    Spread,
}

/// A parsed command template such as `push {} {}` or `install {..} {}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    tokens: Vec<Token>,
}

impl Template {
    pub fn parse(operation: &str, source: &str) -> Result<Self> {
        let mut tokens = Vec::new();

        for word in source.split_whitespace() {
            let token = match word {
                "{}" => Token::Param,
                "{..}" => Token::Spread,
                w if w.contains('{') || w.contains('}') => {
                    return Err(AdbxError::InvalidTemplate {
                        operation: operation.to_string(),
                        reason: format!("unsupported slot '{}'", w),
                    });
                }
                w => Token::Literal(w.to_string()),
            };
            tokens.push(token);
        }

        if tokens.is_empty() {
            return Err(AdbxError::InvalidTemplate {
                operation: operation.to_string(),
                reason: "template is empty".to_string(),
            });
        }

        Ok(Self {
            source: source.to_string(),
            tokens,
        })
    }

    /// Number of parameters `render` expects
    pub fn arity(&self) -> usize {
        self.tokens
            .iter()
            .filter(|t| !matches!(t, Token::Literal(_)))
            .count()
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn render<S: AsRef<str>>(&self, operation: &str, params: &[S]) -> Result<RenderedCommand> {
        if params.len() != self.arity() {
            return Err(AdbxError::ParameterMismatch {
                operation: operation.to_string(),
                expected: self.arity(),
                given: params.len(),
            });
        }

        let mut params = params.iter().map(AsRef::as_ref);
        let mut args = Vec::with_capacity(self.tokens.len());

        for token in &self.tokens {
            match token {
                Token::Literal(lit) => args.push(lit.clone()),
                Token::Param => {
                    if let Some(p) = params.next() {
                        args.push(p.to_string());
                    }
                }
                Token::Spread => {
                    if let Some(p) = params.next() {
                        args.extend(p.split_whitespace().map(str::to_string));
                    }
                }
            }
        }

        Ok(RenderedCommand { args })
    }
}

/// A filled-in sub-command, still without program name or device qualifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedCommand {
    args: Vec<String>,
}

impl RenderedCommand {
    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for RenderedCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let visible: Vec<&str> = self
            .args
            .iter()
            .map(String::as_str)
            .filter(|a| !a.is_empty())
            .collect();
        write!(f, "{}", visible.join(" "))
    }
}
