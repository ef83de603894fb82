pub mod config;
pub mod error;
pub mod parser;
pub mod store;
pub mod utils;

use error::{Result, VarError};
use parser::{Call, Parser};
use store::DataStore;

/// Parse an inline expression and evaluate it against the store in one step.
pub fn evaluate_expr(expr: &str, store: &DataStore) -> Result<String> {
    let query = Query::from_expr(expr)?;
    Ok(query.evaluate(store))
}

/// A parsed membership query, ready to run against a [`DataStore`].
#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    Contains {
        var: String,
        item: String,
        on_true: String,
        on_false: String,
    },
    ContainsAny {
        var: String,
        items: String,
        on_true: String,
        on_false: String,
    },
    Filter {
        var: String,
        items: String,
    },
}

impl Query {
    pub fn from_expr(expr: &str) -> Result<Self> {
        let call = Parser::parse(expr).map_err(VarError::Parser)?;
        Self::from_call(call)
    }

    // Trailing arguments past the ones a helper consumes are ignored; the
    // source syntax passes the datastore handle as a final positional `d`.
    fn from_call(call: Call) -> Result<Self> {
        match call.name.as_str() {
            "contains" => Ok(Query::Contains {
                var: arg(&call.args, 0)?,
                item: arg(&call.args, 1)?,
                on_true: arg(&call.args, 2)?,
                on_false: arg(&call.args, 3)?,
            }),
            "contains_any" => Ok(Query::ContainsAny {
                var: arg(&call.args, 0)?,
                items: arg(&call.args, 1)?,
                on_true: arg(&call.args, 2)?,
                on_false: arg(&call.args, 3)?,
            }),
            "filter" => Ok(Query::Filter {
                var: arg(&call.args, 0)?,
                items: arg(&call.args, 1)?,
            }),
            _ => Err(VarError::UnknownFunction(call.name)),
        }
    }

    pub fn evaluate(&self, store: &DataStore) -> String {
        match self {
            Query::Contains { var, item, on_true, on_false } => {
                utils::contains(var, item, on_true.clone(), on_false.clone(), store)
            }
            Query::ContainsAny { var, items, on_true, on_false } => {
                utils::contains_any(var, items, on_true.clone(), on_false.clone(), store)
            }
            Query::Filter { var, items } => utils::filter(var, items, store),
        }
    }
}

fn arg(args: &[String], index: usize) -> Result<String> {
    args.get(index).cloned().ok_or(VarError::InvalidArguments)
}
