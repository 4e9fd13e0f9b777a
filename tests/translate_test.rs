//! End-to-end tests for the translate façade.

use pretty_assertions::assert_eq;
use sqlmongo::error::TranslateError;
use sqlmongo::translate;

#[test]
fn test_select_all() {
    assert_eq!(translate("SELECT * FROM users").unwrap(), "db.users.find({})");
}

#[test]
fn test_select_with_filter() {
    assert_eq!(
        translate("SELECT * FROM users WHERE firstName = 'John'").unwrap(),
        r#"db.users.find({firstName: "John"})"#
    );
}

#[test]
fn test_select_explicit_columns() {
    assert_eq!(
        translate("SELECT firstName, lastName FROM users").unwrap(),
        "db.users.find({}, {firstName: 1, lastName: 1})"
    );
}

#[test]
fn test_select_columns_with_filter() {
    assert_eq!(
        translate("SELECT firstName, lastName FROM users WHERE firstName = 'John'").unwrap(),
        r#"db.users.find({firstName: "John"}, {firstName: 1, lastName: 1})"#
    );
}

#[test]
fn test_insert() {
    assert_eq!(
        translate("INSERT INTO users (firstName, lastName) VALUES ('John', 'Doe')").unwrap(),
        r#"db.users.insert({firstName: "John", lastName: "Doe"})"#
    );
}

#[test]
fn test_update() {
    assert_eq!(
        translate("UPDATE users SET firstName = 'John' WHERE lastName = 'Doe'").unwrap(),
        r#"db.users.update({lastName: "Doe"}, {firstName: "John"})"#
    );
}

#[test]
fn test_update_multiple_columns() {
    assert_eq!(
        translate("UPDATE users SET firstName = 'John', lastName = 'Doe' WHERE lastName = 'Smith'")
            .unwrap(),
        r#"db.users.update({lastName: "Smith"}, {firstName: "John", lastName: "Doe"})"#
    );
}

#[test]
fn test_delete() {
    assert_eq!(
        translate("DELETE FROM users WHERE firstName = 'John'").unwrap(),
        r#"db.users.deleteOne({firstName: "John"})"#
    );
}

#[test]
fn test_translation_is_deterministic() {
    let input = "SELECT firstName, lastName FROM users WHERE firstName = 'John'";
    let first = translate(input).unwrap();
    let second = translate(input).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_unknown_command() {
    let err = translate("TRUNCATE users").unwrap_err();
    assert!(matches!(err, TranslateError::UnknownCommand(_)));
}

#[test]
fn test_missing_from_is_not_found() {
    let err = translate("SELECT * users").unwrap_err();
    assert!(matches!(
        err,
        TranslateError::NotFound {
            keyword: "FROM",
            ..
        }
    ));
}

#[test]
fn test_column_value_mismatch() {
    let err = translate("INSERT INTO users (a, b, c) VALUES ('x', 'y')").unwrap_err();
    assert!(matches!(
        err,
        TranslateError::ColumnValueMismatch {
            columns: 3,
            values: 2
        }
    ));
}

#[test]
fn test_numeric_values_render_unquoted() {
    assert_eq!(
        translate("INSERT INTO readings (sensor, value) VALUES ('t1', 23.5)").unwrap(),
        r#"db.readings.insert({sensor: "t1", value: 23.5})"#
    );
}

#[test]
fn test_oversized_integer_is_preserved() {
    // Wider than i64; must survive as a string, not collapse to 0.
    assert_eq!(
        translate("INSERT INTO t (id) VALUES (99999999999999999999)").unwrap(),
        r#"db.t.insert({id: "99999999999999999999"})"#
    );
}

#[test]
fn test_filter_values_render_quoted() {
    assert_eq!(
        translate("DELETE FROM sessions WHERE id = 42").unwrap(),
        r#"db.sessions.deleteOne({id: "42"})"#
    );
}
