//! SQL parser using nom.
//!
//! Parses the supported SQL subset into a [`SqlQuery`] AST.
//!
//! # Syntax Overview
//!
//! ```text
//! SELECT firstName, lastName FROM users WHERE firstName = 'John'
//! ──┬─── ─────────┬───────── ──┬─ ──┬── ──────────┬────────────
//!   │             │            │    │             │
//!   │             │            │    │             └── Filter (one clause)
//!   │             │            │    └── Table name
//!   │             │            └── Marker keyword
//!   │             └── Column list (or *)
//!   └── Command verb
//! ```
//!
//! Keywords are uppercase only. One statement, one table, at most one filter
//! clause; AND/OR composition is out of scope.

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while, take_while1},
    character::complete::{char, digit1, multispace0, multispace1},
    combinator::{map, opt, recognize, value},
    multi::separated_list1,
    sequence::{delimited, pair, preceded, terminated, tuple},
    IResult,
};

use crate::ast::*;
use crate::error::{TranslateError, TranslateResult};

/// Parse a complete SQL statement.
pub fn parse(input: &str) -> TranslateResult<SqlQuery> {
    let input = input.trim();

    // Every supported command carries at least a verb and one operand.
    let mut tokens = input.split_whitespace();
    let command = tokens.next().unwrap_or("");
    if tokens.next().is_none() {
        return Err(TranslateError::invalid(input));
    }

    match command {
        "SELECT" => complete(select_stmt(input), input, &["FROM"]),
        "INSERT" => {
            let query = complete(insert_stmt(input), input, &["INTO", "VALUES"])?;
            if !query.columns.is_empty() && query.columns.len() != query.values.len() {
                return Err(TranslateError::ColumnValueMismatch {
                    columns: query.columns.len(),
                    values: query.values.len(),
                });
            }
            Ok(query)
        }
        "UPDATE" => complete(update_stmt(input), input, &["SET"]),
        "DELETE" => {
            if !has_keyword(input, "DELETE") {
                return Err(TranslateError::InvalidCommand(input.to_string()));
            }
            complete(delete_stmt(input), input, &["FROM"])
        }
        other => Err(TranslateError::UnknownCommand(other.to_string())),
    }
}

/// Map a grammar result to the caller-facing result, classifying failures.
///
/// A statement that did not consume its whole input is malformed. The error
/// kind depends on whether the required marker keywords are even present:
/// a missing marker is `NotFound`, anything else is `InvalidInput`.
fn complete(
    result: IResult<&str, SqlQuery>,
    input: &str,
    required: &[&'static str],
) -> TranslateResult<SqlQuery> {
    match result {
        Ok(("", query)) => Ok(query),
        _ => {
            for keyword in required {
                if !has_keyword(input, keyword) {
                    return Err(TranslateError::not_found(keyword, input));
                }
            }
            Err(TranslateError::invalid(input))
        }
    }
}

/// True iff `keyword` appears as an exact whitespace-delimited token.
///
/// Substring matches do not count: a table named `WHEREABOUTS` must not be
/// mistaken for the `WHERE` keyword.
fn has_keyword(input: &str, keyword: &str) -> bool {
    input.split_whitespace().any(|token| token == keyword)
}

/// Parse `SELECT <columns> FROM <table> [WHERE <condition>]`.
fn select_stmt(input: &str) -> IResult<&str, SqlQuery> {
    let (input, _) = terminated(tag("SELECT"), multispace1)(input)?;
    let (input, columns) = projection(input)?;
    let (input, _) = delimited(multispace1, tag("FROM"), multispace1)(input)?;
    let (input, table) = identifier(input)?;
    let (input, filter) = opt(where_clause)(input)?;
    let (input, _) = multispace0(input)?;

    Ok((
        input,
        SqlQuery {
            command: SqlCommand::Select,
            database: String::new(),
            table: table.to_string(),
            columns,
            filter,
            values: Vec::new(),
        },
    ))
}

/// Parse `INSERT INTO <table> [(<columns>)] VALUES (<values>)`.
fn insert_stmt(input: &str) -> IResult<&str, SqlQuery> {
    let (input, _) = terminated(tag("INSERT"), multispace1)(input)?;
    let (input, _) = terminated(tag("INTO"), multispace1)(input)?;
    let (input, table) = identifier(input)?;
    let (input, columns) = opt(preceded(multispace0, column_list))(input)?;
    let (input, _) = delimited(multispace0, tag("VALUES"), multispace0)(input)?;
    let (input, values) = value_list(input)?;
    let (input, _) = multispace0(input)?;

    Ok((
        input,
        SqlQuery {
            command: SqlCommand::Insert,
            database: String::new(),
            table: table.to_string(),
            columns: columns.unwrap_or_default(),
            filter: None,
            values,
        },
    ))
}

/// Parse `UPDATE <table> SET <col> = <value>, ... [WHERE <condition>]`.
fn update_stmt(input: &str) -> IResult<&str, SqlQuery> {
    let (input, _) = terminated(tag("UPDATE"), multispace1)(input)?;
    let (input, table) = identifier(input)?;
    let (input, _) = delimited(multispace1, tag("SET"), multispace1)(input)?;
    let (input, assignments) = separated_list1(comma, assignment)(input)?;
    let (input, filter) = opt(where_clause)(input)?;
    let (input, _) = multispace0(input)?;

    let mut columns = Vec::with_capacity(assignments.len());
    let mut values = Vec::with_capacity(assignments.len());
    for (column, val) in assignments {
        columns.push(column);
        values.push(val);
    }

    Ok((
        input,
        SqlQuery {
            command: SqlCommand::Update,
            database: String::new(),
            table: table.to_string(),
            columns,
            filter,
            values,
        },
    ))
}

/// Parse `DELETE FROM <table> [WHERE <condition>]`.
fn delete_stmt(input: &str) -> IResult<&str, SqlQuery> {
    let (input, _) = terminated(tag("DELETE"), multispace1)(input)?;
    let (input, _) = terminated(tag("FROM"), multispace1)(input)?;
    let (input, table) = identifier(input)?;
    let (input, filter) = opt(where_clause)(input)?;
    let (input, _) = multispace0(input)?;

    Ok((
        input,
        SqlQuery {
            command: SqlCommand::Delete,
            database: String::new(),
            table: table.to_string(),
            columns: Vec::new(),
            filter,
            values: Vec::new(),
        },
    ))
}

/// Parse an identifier (table name, column name).
fn identifier(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || c == '_')(input)
}

/// Comma separator with surrounding whitespace.
fn comma(input: &str) -> IResult<&str, char> {
    delimited(multispace0, char(','), multispace0)(input)
}

/// Parse a SELECT column list: `*` or comma-separated identifiers.
fn projection(input: &str) -> IResult<&str, Vec<String>> {
    alt((
        map(char('*'), |_| vec!["*".to_string()]),
        separated_list1(comma, map(identifier, str::to_string)),
    ))(input)
}

/// Parse a parenthesized column list: `(col1, col2)`.
fn column_list(input: &str) -> IResult<&str, Vec<String>> {
    delimited(
        pair(char('('), multispace0),
        separated_list1(comma, map(identifier, str::to_string)),
        pair(multispace0, char(')')),
    )(input)
}

/// Parse a parenthesized value list: `('John', 20)`.
fn value_list(input: &str) -> IResult<&str, Vec<Value>> {
    delimited(
        pair(char('('), multispace0),
        separated_list1(comma, literal),
        pair(multispace0, char(')')),
    )(input)
}

/// Parse a `column = value` assignment in a SET clause.
fn assignment(input: &str) -> IResult<&str, (String, Value)> {
    let (input, column) = identifier(input)?;
    let (input, _) = delimited(multispace0, char('='), multispace0)(input)?;
    let (input, val) = literal(input)?;
    Ok((input, (column.to_string(), val)))
}

/// Parse `WHERE <column> <op> <value>`.
fn where_clause(input: &str) -> IResult<&str, Condition> {
    preceded(tuple((multispace1, tag("WHERE"), multispace1)), condition)(input)
}

/// Parse a single `column <op> value` clause.
fn condition(input: &str) -> IResult<&str, Condition> {
    let (input, column) = identifier(input)?;
    let (input, _) = multispace0(input)?;
    let (input, op) = compare_op(input)?;
    let (input, _) = multispace0(input)?;
    let (input, val) = literal(input)?;

    Ok((
        input,
        Condition {
            column: column.to_string(),
            op,
            value: val,
        },
    ))
}

/// Parse a comparison operator. Two-character operators come first.
fn compare_op(input: &str) -> IResult<&str, CompareOp> {
    alt((
        value(CompareOp::Gte, tag(">=")),
        value(CompareOp::Lte, tag("<=")),
        value(CompareOp::Ne, tag("!=")),
        value(CompareOp::Gt, char('>')),
        value(CompareOp::Lt, char('<')),
        value(CompareOp::Eq, char('=')),
    ))(input)
}

/// Parse a literal: number, quoted string, or bare word.
fn literal(input: &str) -> IResult<&str, Value> {
    alt((
        number,
        quoted_text,
        map(identifier, |s| Value::Text(s.to_string())),
    ))(input)
}

/// Parse a number (integer or float). The type is fixed here, once, and
/// never re-inferred downstream. A literal too large for the native type
/// stays a string rather than being mangled.
fn number(input: &str) -> IResult<&str, Value> {
    let (input, lexeme) = recognize(tuple((
        opt(char('-')),
        digit1,
        opt(pair(char('.'), digit1)),
    )))(input)?;

    let val = if lexeme.contains('.') {
        lexeme
            .parse()
            .map(Value::Float)
            .unwrap_or_else(|_| Value::Text(lexeme.to_string()))
    } else {
        lexeme
            .parse()
            .map(Value::Int)
            .unwrap_or_else(|_| Value::Text(lexeme.to_string()))
    };

    Ok((input, val))
}

/// Parse a single-quoted string; quotes are stripped.
fn quoted_text(input: &str) -> IResult<&str, Value> {
    let (input, content) = delimited(char('\''), take_while(|c| c != '\''), char('\''))(input)?;
    Ok((input, Value::Text(content.to_string())))
}
