//! MongoDB transpiler for the SQL AST.
//!
//! Renders parsed statements as MongoDB shell method-call strings.

use crate::ast::*;

/// Trait for converting AST nodes to a MongoDB query string.
pub trait ToMongo {
    /// Convert this node to a MongoDB shell string.
    fn to_mongo(&self) -> String;
}

impl ToMongo for MongoQuery {
    fn to_mongo(&self) -> String {
        match self.command {
            MongoCommand::Find => self.to_find(),
            MongoCommand::Insert => self.to_insert(),
            MongoCommand::Update => self.to_update(),
            MongoCommand::Delete => self.to_delete(),
        }
    }
}

impl ToMongo for SqlQuery {
    fn to_mongo(&self) -> String {
        MongoQuery::from(self.clone()).to_mongo()
    }
}

impl MongoQuery {
    /// Generate `db.<collection>.find(...)`.
    ///
    /// A bare `*` projection renders the filter object alone; explicit
    /// fields add a `{field: 1, ...}` projection object.
    fn to_find(&self) -> String {
        let filter = filter_doc(self.filter.as_ref());
        let select_all = self.fields.len() == 1 && self.fields[0] == "*";

        if select_all || self.fields.is_empty() {
            format!("db.{}.find({})", self.collection, filter)
        } else {
            format!(
                "db.{}.find({}, {})",
                self.collection,
                filter,
                projection_doc(&self.fields)
            )
        }
    }

    /// Generate `db.<collection>.insert({field: value, ...})`.
    fn to_insert(&self) -> String {
        format!(
            "db.{}.insert({})",
            self.collection,
            payload_doc(&self.fields, &self.values)
        )
    }

    /// Generate `db.<collection>.update({filter}, {assignments})`.
    fn to_update(&self) -> String {
        format!(
            "db.{}.update({}, {})",
            self.collection,
            filter_doc(self.filter.as_ref()),
            payload_doc(&self.fields, &self.values)
        )
    }

    /// Generate `db.<collection>.deleteOne({filter})`.
    fn to_delete(&self) -> String {
        format!(
            "db.{}.deleteOne({})",
            self.collection,
            filter_doc(self.filter.as_ref())
        )
    }
}

/// Render a filter object. Filter values are always double-quoted,
/// whatever their parsed type.
fn filter_doc(filter: Option<&Condition>) -> String {
    match filter {
        Some(cond) => format!("{{{}: \"{}\"}}", cond.column, cond.value.literal()),
        None => "{}".to_string(),
    }
}

/// Render a projection object: `{field: 1, ...}`.
fn projection_doc(fields: &[String]) -> String {
    let pairs: Vec<String> = fields.iter().map(|f| format!("{}: 1", f)).collect();
    format!("{{{}}}", pairs.join(", "))
}

/// Render a document of field/value pairs with type-directed quoting.
fn payload_doc(fields: &[String], values: &[Value]) -> String {
    let pairs: Vec<String> = fields
        .iter()
        .zip(values)
        .map(|(field, value)| format!("{}: {}", field, value))
        .collect();
    format!("{{{}}}", pairs.join(", "))
}
