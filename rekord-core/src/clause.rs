//! Assembly of pre-rendered clause fragments.
//!
//! Fragments are joined verbatim, wrap conditions containing `OR` before passing them in.

use crate::Value;

/// Join WHERE conditions with ` AND `, flattening their parameters in order.
///
/// Returns the bare condition (no keyword), empty when there are no conditions.
pub fn combine_conditions<S: AsRef<str>>(
    conditions: impl IntoIterator<Item = (S, Vec<Value>)>,
) -> (String, Vec<Value>) {
    let mut sql = String::new();
    let mut params = Vec::new();
    for (fragment, values) in conditions {
        if !sql.is_empty() {
            sql.push_str(" AND ");
        }
        sql.push_str(fragment.as_ref());
        params.extend(values);
    }
    (sql, params)
}

/// Like [`combine_conditions`] but prefixed with `HAVING ` whenever there is a condition.
pub fn build_having<S: AsRef<str>>(
    conditions: impl IntoIterator<Item = (S, Vec<Value>)>,
) -> (String, Vec<Value>) {
    let (sql, params) = combine_conditions(conditions);
    if sql.is_empty() {
        return (sql, params);
    }
    (format!("HAVING {sql}"), params)
}

fn build_list<S: AsRef<str>>(keyword: &str, clauses: &[S]) -> String {
    if clauses.is_empty() {
        return String::new();
    }
    let mut out = String::with_capacity(keyword.len() + clauses.len() * 16);
    out.push_str(keyword);
    for (i, clause) in clauses.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(clause.as_ref());
    }
    out
}

/// `ORDER BY a, b`, empty string for an empty list.
pub fn build_order_by<S: AsRef<str>>(clauses: &[S]) -> String {
    build_list("ORDER BY ", clauses)
}

/// `GROUP BY a, b`, empty string for an empty list.
pub fn build_group_by<S: AsRef<str>>(clauses: &[S]) -> String {
    build_list("GROUP BY ", clauses)
}
