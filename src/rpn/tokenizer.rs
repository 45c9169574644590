use super::Token;
use crate::error::{ExpressionError, Result};
use crate::number;
use crate::operators::{self, is_allowed_operator_char, Associativity};
use crate::registry::Registry;
use log::trace;
use std::collections::HashSet;

/// Forward-only scanner over an expression.
///
/// Unary and binary operators are told apart by looking at the previously
/// emitted token. When implicit multiplication applies, the real token is
/// classified first and parked in `pending` while a `*` is returned.
pub struct Tokenizer<'a> {
    chars: Vec<char>,
    pos: usize,
    registry: &'a Registry,
    variable_names: &'a HashSet<String>,
    implicit_multiplication: bool,
    last: Option<Token>,
    pending: Option<Token>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(
        expression: &str,
        registry: &'a Registry,
        variable_names: &'a HashSet<String>,
        implicit_multiplication: bool,
    ) -> Self {
        Self {
            chars: expression.trim().chars().collect(),
            pos: 0,
            registry,
            variable_names,
            implicit_multiplication,
            last: None,
            pending: None,
        }
    }

    pub fn has_next(&self) -> bool {
        self.pending.is_some() || self.pos < self.chars.len()
    }

    pub fn next_token(&mut self) -> Result<Token> {
        let token = match self.pending.take() {
            Some(token) => token,
            None => self.scan()?,
        };
        trace!("Token at [{}]: {:?}", self.pos, token);
        self.last = Some(token.clone());
        Ok(token)
    }

    fn scan(&mut self) -> Result<Token> {
        while self.pos < self.chars.len() && self.chars[self.pos].is_whitespace() {
            self.pos += 1;
        }
        let ch = match self.chars.get(self.pos) {
            Some(ch) => *ch,
            None => {
                return Err(ExpressionError::UnexpectedCharacter {
                    ch: ' ',
                    position: self.pos,
                })
            }
        };

        if ch.is_ascii_digit() || ch == '.' {
            if matches!(self.last, Some(Token::Number(_))) {
                return Err(ExpressionError::UnexpectedCharacter {
                    ch,
                    position: self.pos,
                });
            }
            let token = self.scan_number()?;
            return Ok(self.emit_value(token));
        }

        match ch {
            ',' => {
                self.pos += 1;
                Ok(Token::ArgSeparator)
            }
            '(' | '{' | '[' => {
                self.pos += 1;
                Ok(self.emit_value(Token::OpenParen))
            }
            ')' | '}' | ']' => {
                self.pos += 1;
                Ok(Token::CloseParen)
            }
            _ if is_allowed_operator_char(ch) => self.scan_operator(),
            _ if ch.is_alphabetic() || ch == '_' => {
                let token = self.scan_name()?;
                Ok(self.emit_value(token))
            }
            _ => Err(ExpressionError::UnexpectedCharacter {
                ch,
                position: self.pos,
            }),
        }
    }

    /// Returns `token`, or a `*` with `token` parked behind it when the
    /// previous token ended a value.
    fn emit_value(&mut self, token: Token) -> Token {
        let ends_value = matches!(
            self.last,
            Some(Token::Number(_) | Token::Variable(_) | Token::CloseParen)
        );
        if self.implicit_multiplication && ends_value {
            self.pending = Some(token);
            Token::Operator(operators::multiplication())
        } else {
            token
        }
    }

    fn scan_number(&mut self) -> Result<Token> {
        let start = self.pos;
        let mut last = self.chars[self.pos];
        self.pos += 1;
        while let Some(&ch) = self.chars.get(self.pos) {
            let after_exponent = last == 'e' || last == 'E';
            let numeric = ch.is_ascii_digit()
                || ch == '.'
                || ch == 'e'
                || ch == 'E'
                || (after_exponent && (ch == '-' || ch == '+'));
            if !numeric {
                break;
            }
            last = ch;
            self.pos += 1;
        }
        // a trailing exponent marker belongs to whatever follows
        if last == 'e' || last == 'E' {
            self.pos -= 1;
        }

        let literal: String = self.chars[start..self.pos].iter().collect();
        match number::parse(&literal) {
            Some(value) => Ok(Token::Number(value)),
            None => Err(ExpressionError::InvalidNumber {
                literal,
                position: start,
            }),
        }
    }

    fn scan_operator(&mut self) -> Result<Token> {
        let start = self.pos;
        let mut end = start + 1;
        while end < self.chars.len() && is_allowed_operator_char(self.chars[end]) {
            end += 1;
        }

        let arity = self.operand_count();
        while end > start {
            let symbol: String = self.chars[start..end].iter().collect();
            if let Some(op) = self.registry.lookup_operator(&symbol, arity) {
                self.pos = end;
                return Ok(Token::Operator(op));
            }
            end -= 1;
        }

        Err(ExpressionError::UnknownOperator {
            symbol: self.chars[start].to_string(),
            position: start,
        })
    }

    /// Arity a built-in `+` or `-` takes at the cursor.
    fn operand_count(&self) -> usize {
        match &self.last {
            None | Some(Token::OpenParen) | Some(Token::ArgSeparator) => 1,
            Some(Token::Operator(op))
                if op.is_binary() || op.associativity() == Associativity::Right =>
            {
                1
            }
            _ => 2,
        }
    }

    fn scan_name(&mut self) -> Result<Token> {
        let start = self.pos;
        let mut matched: Option<(usize, Token)> = None;
        let mut end = start;
        while end < self.chars.len() && is_name_char(self.chars[end]) {
            end += 1;
            let name: String = self.chars[start..end].iter().collect();
            if self.variable_names.contains(&name) {
                matched = Some((end, Token::Variable(name)));
            } else if let Some(function) = self.registry.lookup_function(&name) {
                matched = Some((end, Token::Function(function)));
            }
        }

        match matched {
            Some((end, token)) => {
                self.pos = end;
                Ok(token)
            }
            None => Err(ExpressionError::UnknownFunctionOrVariable {
                name: self.chars[start..end].iter().collect(),
                position: start,
                expression: self.chars.iter().collect(),
            }),
        }
    }
}

fn is_name_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_' || ch == '.'
}

impl Iterator for Tokenizer<'_> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.has_next() {
            return None;
        }
        let token = self.next_token();
        if token.is_err() {
            self.pos = self.chars.len();
        }
        Some(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::functions::Function;
    use crate::number::Number;
    use crate::operators::{Operator, PRECEDENCE_ADDITION, PRECEDENCE_POWER};

    fn names(names: &[&str]) -> HashSet<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    fn tokenize(expression: &str, registry: &Registry, variables: &[&str]) -> Result<Vec<Token>> {
        let variables = names(variables);
        Tokenizer::new(expression, registry, &variables, true).collect()
    }

    fn render(expression: &str, variables: &[&str]) -> String {
        super::super::render(&tokenize(expression, &Registry::new(), variables).unwrap())
    }

    #[test]
    fn test_simple_arithmetic() {
        let tokens = tokenize("2 + 3", &Registry::new(), &[]).unwrap();
        assert_eq!(tokens.len(), 3);
        assert!(matches!(&tokens[0], Token::Number(n) if *n == Number::from(2)));
        assert!(matches!(&tokens[1], Token::Operator(op) if op.symbol() == "+" && op.is_binary()));
        assert!(matches!(&tokens[2], Token::Number(n) if *n == Number::from(3)));
    }

    #[test]
    fn test_unary_minus_by_context() {
        let tokens = tokenize("-2*-x", &Registry::new(), &["x"]).unwrap();
        let arities: Vec<usize> = tokens
            .iter()
            .filter_map(|t| match t {
                Token::Operator(op) => Some(op.arity()),
                _ => None,
            })
            .collect();
        assert_eq!(arities, vec![1, 2, 1]);

        let tokens = tokenize("(-1)-(2,-3)", &Registry::new(), &[]).unwrap();
        let minus: Vec<usize> = tokens
            .iter()
            .filter_map(|t| match t {
                Token::Operator(op) => Some(op.arity()),
                _ => None,
            })
            .collect();
        assert_eq!(minus, vec![1, 2, 1]);
    }

    #[test]
    fn test_stacked_unary_minus() {
        let tokens = tokenize("--1", &Registry::new(), &[]).unwrap();
        assert!(matches!(&tokens[0], Token::Operator(op) if op.is_unary()));
        assert!(matches!(&tokens[1], Token::Operator(op) if op.is_unary()));
    }

    #[test]
    fn test_scientific_notation() {
        let tokens = tokenize("1.2e-3", &Registry::new(), &[]).unwrap();
        assert_eq!(tokens.len(), 1);
        assert!(matches!(&tokens[0], Token::Number(n) if *n == number::parse("0.0012").unwrap()));

        let tokens = tokenize("7.2973525698e-3", &Registry::new(), &[]).unwrap();
        assert_eq!(tokens.len(), 1);
    }

    #[test]
    fn test_trailing_exponent_marker_is_not_consumed() {
        assert_eq!(render("2e", &["e"]), "2 * e");
        assert_eq!(render("3E", &["E"]), "3 * E");
    }

    #[test]
    fn test_double_exponent_is_invalid_number() {
        let err = tokenize("6.02214E2E3", &Registry::new(), &[]).unwrap_err();
        assert!(matches!(err, ExpressionError::InvalidNumber { position: 0, .. }));
    }

    #[test]
    fn test_number_after_number_fails() {
        let err = tokenize("1 1", &Registry::new(), &[]).unwrap_err();
        assert!(matches!(
            err,
            ExpressionError::UnexpectedCharacter { ch: '1', position: 2 }
        ));
    }

    #[test]
    fn test_implicit_multiplication() {
        assert_eq!(render("2x", &["x"]), "2 * x");
        assert_eq!(render("2x2", &["x"]), "2 * x * 2");
        assert_eq!(render("x2x", &["x"]), "x * 2 * x");
        assert_eq!(render("2(x)", &["x"]), "2 * ( x )");
        assert_eq!(render("2cos(x)", &["x"]), "2 * cos ( x )");
        assert_eq!(render("cos(x)2", &["x"]), "cos ( x ) * 2");
        assert_eq!(render("x y", &["x", "y"]), "x * y");
        assert_eq!(render("(1)(2)", &[]), "( 1 ) * ( 2 )");
    }

    #[test]
    fn test_implicit_multiplication_disabled() {
        let registry = Registry::new();
        let variables = names(&["x"]);
        let tokens: Vec<Token> = Tokenizer::new("2x", &registry, &variables, false)
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(super::super::render(&tokens), "2 x");
    }

    #[test]
    fn test_longest_name_wins() {
        assert_eq!(render("log10(x)", &["x"]), "log10 ( x )");
        assert_eq!(render("log2(x)", &["x"]), "log2 ( x )");
        assert_eq!(render("ab", &["a", "ab"]), "ab");
        assert_eq!(render("ab", &["a", "b"]), "a * b");
        assert_eq!(render("x.y", &["x.y"]), "x.y");
    }

    #[test]
    fn test_unknown_name() {
        let err = tokenize("foo(1)", &Registry::new(), &[]).unwrap_err();
        match err {
            ExpressionError::UnknownFunctionOrVariable { name, position, .. } => {
                assert_eq!(name, "foo");
                assert_eq!(position, 0);
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_unexpected_character() {
        let err = tokenize("2 @ 3", &Registry::new(), &[]).unwrap_err();
        assert!(matches!(
            err,
            ExpressionError::UnexpectedCharacter { ch: '@', position: 2 }
        ));
    }

    #[test]
    fn test_brackets_are_interchangeable() {
        assert_eq!(render("{1}+[2]", &[]), "( 1 ) + ( 2 )");
    }

    #[test]
    fn test_maximal_munch_with_backtracking() {
        let mut registry = Registry::new();
        registry.register_operator(
            Operator::new(">=>", 2, Associativity::Left, PRECEDENCE_ADDITION, |args| {
                Ok(&args[0] + &args[1])
            })
            .unwrap(),
        );
        registry.register_operator(
            Operator::new("!", 1, Associativity::Left, PRECEDENCE_POWER + 1, |args| {
                Ok(args[0].clone())
            })
            .unwrap(),
        );

        let tokens = tokenize("1>=>2", &registry, &[]).unwrap();
        assert_eq!(tokens.len(), 3);
        assert!(matches!(&tokens[1], Token::Operator(op) if op.symbol() == ">=>"));

        // `!-` is not an operator, so the scan falls back to `!` then `-`
        let tokens = tokenize("3!-2", &registry, &[]).unwrap();
        assert_eq!(super::super::render(&tokens), "3 ! - 2");
        assert!(matches!(&tokens[2], Token::Operator(op) if op.is_binary()));
    }

    #[test]
    fn test_unknown_operator() {
        let err = tokenize("1 <> 2", &Registry::new(), &[]).unwrap_err();
        assert!(matches!(err, ExpressionError::UnknownOperator { position: 2, .. }));
    }

    #[test]
    fn test_user_function() {
        let mut registry = Registry::new();
        registry.register_function(Function::new("now", 0, |_| Ok(Number::from(1))).unwrap());
        let tokens = tokenize("14*now()", &registry, &[]).unwrap();
        assert!(matches!(&tokens[2], Token::Function(f) if f.name() == "now"));
    }

    #[test]
    fn test_has_next_tracks_pending_token() {
        let registry = Registry::new();
        let variables = names(&["x"]);
        let mut tokenizer = Tokenizer::new("2x", &registry, &variables, true);
        tokenizer.next_token().unwrap();
        tokenizer.next_token().unwrap();
        assert!(tokenizer.has_next());
        assert!(matches!(tokenizer.next_token().unwrap(), Token::Variable(_)));
        assert!(!tokenizer.has_next());
    }
}
