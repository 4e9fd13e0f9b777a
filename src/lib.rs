//! # sqlmongo
//!
//! Translates a restricted SQL subset into MongoDB shell query strings.
//!
//! One statement in, one string out: nothing is executed, no connection is
//! held, no state survives a call.
//!
//! ## Quick Example
//!
//! ```
//! use sqlmongo::translate;
//!
//! let mongo = translate("SELECT * FROM users WHERE firstName = 'John'").unwrap();
//! assert_eq!(mongo, r#"db.users.find({firstName: "John"})"#);
//! ```
//!
//! ## Supported statements
//!
//! | SQL                                  | MongoDB                              |
//! |--------------------------------------|--------------------------------------|
//! | `SELECT * FROM t`                    | `db.t.find({})`                      |
//! | `SELECT a, b FROM t`                 | `db.t.find({}, {a: 1, b: 1})`        |
//! | `INSERT INTO t (a) VALUES ('x')`     | `db.t.insert({a: "x"})`              |
//! | `UPDATE t SET a = 'x' WHERE b = 'y'` | `db.t.update({b: "y"}, {a: "x"})`    |
//! | `DELETE FROM t WHERE a = 'x'`        | `db.t.deleteOne({a: "x"})`           |
//!
//! Keywords must be uppercase. A WHERE clause holds exactly one comparison;
//! AND/OR composition, joins, and execution are out of scope.

pub mod ast;
pub mod error;
pub mod parser;
pub mod transpiler;

pub mod prelude {
    pub use crate::ast::*;
    pub use crate::error::*;
    pub use crate::parser::parse;
    pub use crate::transpiler::ToMongo;
}

use crate::transpiler::ToMongo;

/// Parse a SQL statement into a [`ast::SqlQuery`].
///
/// # Example
///
/// ```
/// use sqlmongo::parse;
///
/// let query = parse("SELECT * FROM users WHERE active = 'true'").unwrap();
/// assert_eq!(query.table, "users");
/// ```
pub fn parse(input: &str) -> Result<ast::SqlQuery, error::TranslateError> {
    parser::parse(input)
}

/// Translate a SQL statement into a MongoDB shell query string.
///
/// Runs the parser, maps the command verb, and renders the target syntax,
/// short-circuiting on the first error.
///
/// # Example
///
/// ```
/// use sqlmongo::translate;
///
/// let mongo = translate("DELETE FROM users WHERE firstName = 'John'").unwrap();
/// assert_eq!(mongo, r#"db.users.deleteOne({firstName: "John"})"#);
/// ```
pub fn translate(input: &str) -> Result<String, error::TranslateError> {
    let query = parser::parse(input)?;
    Ok(ast::MongoQuery::from(query).to_mongo())
}
