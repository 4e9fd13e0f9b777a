//! AST for the supported SQL subset and its MongoDB counterpart.
//!
//! The parser produces a [`SqlQuery`]; converting it into a [`MongoQuery`]
//! renames `table` to `collection` and maps the command verb. Everything else
//! is carried over field for field.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The SQL verb of a parsed statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SqlCommand {
    Select,
    Insert,
    Update,
    Delete,
}

impl fmt::Display for SqlCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlCommand::Select => write!(f, "SELECT"),
            SqlCommand::Insert => write!(f, "INSERT"),
            SqlCommand::Update => write!(f, "UPDATE"),
            SqlCommand::Delete => write!(f, "DELETE"),
        }
    }
}

/// The MongoDB method a statement translates to.
///
/// `Delete` renders as `deleteOne` while the other three use their bare verb
/// names. The asymmetry is intentional; do not unify it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MongoCommand {
    Find,
    Insert,
    Update,
    Delete,
}

impl From<SqlCommand> for MongoCommand {
    fn from(command: SqlCommand) -> Self {
        match command {
            SqlCommand::Select => MongoCommand::Find,
            SqlCommand::Insert => MongoCommand::Insert,
            SqlCommand::Update => MongoCommand::Update,
            SqlCommand::Delete => MongoCommand::Delete,
        }
    }
}

impl fmt::Display for MongoCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MongoCommand::Find => write!(f, "find"),
            MongoCommand::Insert => write!(f, "insert"),
            MongoCommand::Update => write!(f, "update"),
            MongoCommand::Delete => write!(f, "deleteOne"),
        }
    }
}

/// A literal value, typed once at parse time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Integer
    Int(i64),
    /// Float
    Float(f64),
    /// String (quotes already stripped)
    Text(String),
}

impl Value {
    /// The bare literal, with no quoting applied.
    pub fn literal(&self) -> String {
        match self {
            Value::Int(n) => n.to_string(),
            Value::Float(x) => x.to_string(),
            Value::Text(s) => s.clone(),
        }
    }
}

/// Type-directed rendering: numbers unquoted, text double-quoted.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(x) => write!(f, "{}", x),
            Value::Text(s) => write!(f, "\"{}\"", s),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

/// Comparison operator in a WHERE clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompareOp {
    Eq,
    Ne,
    Gt,
    Gte,
    Lt,
    Lte,
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = match self {
            CompareOp::Eq => "=",
            CompareOp::Ne => "!=",
            CompareOp::Gt => ">",
            CompareOp::Gte => ">=",
            CompareOp::Lt => "<",
            CompareOp::Lte => "<=",
        };
        write!(f, "{}", op)
    }
}

/// A single `column <op> value` filter clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub column: String,
    pub op: CompareOp,
    pub value: Value,
}

/// Flattened form (`name=Bob`), used for diagnostics.
impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.column, self.op, self.value.literal())
    }
}

/// A parsed SQL statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SqlQuery {
    pub command: SqlCommand,
    /// Reserved for multi-database addressing; always empty for now.
    pub database: String,
    pub table: String,
    /// `["*"]` for a SELECT with no explicit column list; empty for an
    /// INSERT without one.
    pub columns: Vec<String>,
    pub filter: Option<Condition>,
    pub values: Vec<Value>,
}

/// The document-store view of a [`SqlQuery`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MongoQuery {
    pub command: MongoCommand,
    pub database: String,
    pub collection: String,
    pub fields: Vec<String>,
    pub filter: Option<Condition>,
    pub values: Vec<Value>,
}

impl From<SqlQuery> for MongoQuery {
    fn from(query: SqlQuery) -> Self {
        MongoQuery {
            command: query.command.into(),
            database: query.database,
            collection: query.table,
            fields: query.columns,
            filter: query.filter,
            values: query.values,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_mapping() {
        assert_eq!(MongoCommand::from(SqlCommand::Select), MongoCommand::Find);
        assert_eq!(MongoCommand::from(SqlCommand::Insert), MongoCommand::Insert);
        assert_eq!(MongoCommand::from(SqlCommand::Update), MongoCommand::Update);
        assert_eq!(MongoCommand::from(SqlCommand::Delete), MongoCommand::Delete);
    }

    #[test]
    fn test_mongo_command_verbs() {
        assert_eq!(MongoCommand::Find.to_string(), "find");
        assert_eq!(MongoCommand::Insert.to_string(), "insert");
        assert_eq!(MongoCommand::Update.to_string(), "update");
        assert_eq!(MongoCommand::Delete.to_string(), "deleteOne");
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::Int(42).to_string(), "42");
        assert_eq!(Value::Float(2.5).to_string(), "2.5");
        assert_eq!(Value::Text("John".to_string()).to_string(), "\"John\"");
    }

    #[test]
    fn test_condition_display_is_flattened() {
        let cond = Condition {
            column: "name".to_string(),
            op: CompareOp::Eq,
            value: Value::from("Bob"),
        };
        assert_eq!(cond.to_string(), "name=Bob");
    }

    #[test]
    fn test_table_becomes_collection() {
        let sql = SqlQuery {
            command: SqlCommand::Delete,
            database: String::new(),
            table: "users".to_string(),
            columns: vec![],
            filter: None,
            values: vec![],
        };
        let mongo = MongoQuery::from(sql);
        assert_eq!(mongo.command, MongoCommand::Delete);
        assert_eq!(mongo.collection, "users");
    }
}
