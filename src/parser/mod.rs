use std::fmt;

use tracing::debug;

/// A helper invocation extracted from an inline expression: the callee name
/// and its positional arguments with quotes already stripped.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub name: String,
    pub args: Vec<String>,
}

#[derive(Debug, PartialEq)]
pub enum ParserError {
    EmptyExpression,
    MissingCall,
    UnterminatedString,
    UnbalancedParens,
}

// Implement Display for ParserError
impl fmt::Display for ParserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParserError::EmptyExpression => write!(f, "Empty expression"),
            ParserError::MissingCall => write!(f, "No function call found"),
            ParserError::UnterminatedString => write!(f, "Unterminated quoted string"),
            ParserError::UnbalancedParens => write!(f, "Unbalanced parentheses"),
        }
    }
}

// Implement Error for ParserError
impl std::error::Error for ParserError {}

pub type ParserResult = Result<Call, ParserError>;

pub struct Parser {}

impl Parser {
    pub fn parse(input: &str) -> ParserResult {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ParserError::EmptyExpression);
        }

        // Strip the ${@ ... } wrapper when present; bare calls are accepted
        // as-is.
        let inner = if trimmed.starts_with("${@") && trimmed.ends_with('}') {
            &trimmed[3..trimmed.len() - 1]
        } else {
            trimmed
        };

        // A call is formatted as: name(arg1, arg2, ...)
        let open_paren = inner.find('(').ok_or(ParserError::MissingCall)?;
        let name = Parser::callee_name(&inner[..open_paren])?;
        let after_open = &inner[open_paren + 1..];

        let close_paren = Parser::find_matching_paren(after_open)?;
        let args = Parser::parse_args(&after_open[..close_paren])?;

        debug!("parsed call: name={}, args={:?}", name, args);

        Ok(Call { name, args })
    }

    // The callee may be written as a dotted path; only the trailing segment
    // names the helper, so both `bb.utils.contains` and `contains` resolve
    // to `contains`.
    fn callee_name(path: &str) -> Result<String, ParserError> {
        let name = path.trim().rsplit('.').next().unwrap_or("").trim();

        if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(ParserError::MissingCall);
        }

        Ok(name.to_string())
    }

    // Scan for the parenthesis closing the call, skipping over quoted
    // strings and nested parentheses.
    fn find_matching_paren(s: &str) -> Result<usize, ParserError> {
        let mut depth = 1;
        let mut in_single_quote = false;
        let mut in_double_quote = false;

        for (i, ch) in s.char_indices() {
            match ch {
                '\'' if !in_double_quote => in_single_quote = !in_single_quote,
                '"' if !in_single_quote => in_double_quote = !in_double_quote,
                '(' if !in_single_quote && !in_double_quote => depth += 1,
                ')' if !in_single_quote && !in_double_quote => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(i);
                    }
                }
                _ => {}
            }
        }

        if in_single_quote || in_double_quote {
            return Err(ParserError::UnterminatedString);
        }

        Err(ParserError::UnbalancedParens)
    }

    // Split comma-separated arguments, respecting quotes and nested parens.
    // Quotes are stripped; unquoted arguments are trimmed.
    fn parse_args(args_str: &str) -> Result<Vec<String>, ParserError> {
        let mut args = Vec::new();
        let mut current_arg = String::new();
        let mut in_single_quote = false;
        let mut in_double_quote = false;
        let mut paren_depth = 0;

        for ch in args_str.chars() {
            match ch {
                '\'' if !in_double_quote => {
                    in_single_quote = !in_single_quote;
                }
                '"' if !in_single_quote => {
                    in_double_quote = !in_double_quote;
                }
                '(' if !in_single_quote && !in_double_quote => {
                    paren_depth += 1;
                    current_arg.push(ch);
                }
                ')' if !in_single_quote && !in_double_quote => {
                    paren_depth -= 1;
                    current_arg.push(ch);
                }
                ',' if !in_single_quote && !in_double_quote && paren_depth == 0 => {
                    args.push(current_arg.trim().to_string());
                    current_arg.clear();
                }
                _ => {
                    current_arg.push(ch);
                }
            }
        }

        if in_single_quote || in_double_quote {
            return Err(ParserError::UnterminatedString);
        }

        if !current_arg.trim().is_empty() || !args.is_empty() {
            args.push(current_arg.trim().to_string());
        }

        Ok(args)
    }
}
