//! Per-node application of path tokens
//!
//! `select` answers what one token yields for one node, or `None` when the
//! node has the wrong shape for the token. The engine decides whether a
//! wrong shape is an error (single-node walk) or a skip (array mode).

use std::collections::HashSet;

use serde_json::Value;

use super::{
    array_ops::{resolve_index, slice_indices},
    engine::Cursor,
};
use crate::jsonpath::{
    ast::{ArraySelector, FilterExpression, PathToken},
    error::{JsonPathResult, json_type_name, path_application_error},
    filter::FilterEvaluator,
};

/// Apply `token` to the single node of a walk that has not fanned out
pub(super) fn apply_to_node<'v>(
    token: &PathToken,
    node: &'v Value,
    root: &'v Value,
    predicate: Option<&FilterExpression>,
) -> JsonPathResult<Cursor<'v>> {
    let shape_fits = !(matches!(token, PathToken::Predicate(_)) && !is_container(node));
    match select(token, node, root, predicate) {
        Some(cursor) if shape_fits => Ok(cursor),
        _ => Err(path_application_error(
            token.description(),
            format!("cannot be applied to a {}", json_type_name(node)),
        )),
    }
}

/// Apply `token` to every node of a fanned-out walk, skipping misfits
///
/// After `..` the walk holds both an array and the containers inside it, so
/// a predicate can reach the same node twice. Predicate matches are kept
/// once, at their first position.
pub(super) fn apply_to_nodes<'v>(
    token: &PathToken,
    nodes: Vec<&'v Value>,
    root: &'v Value,
    predicate: Option<&FilterExpression>,
) -> Vec<&'v Value> {
    let mut out = Vec::with_capacity(nodes.len());
    for node in nodes {
        match select(token, node, root, predicate) {
            Some(Cursor::Node(value)) => out.push(value),
            Some(Cursor::Nodes(values)) => out.extend(values),
            Some(Cursor::Missing) | None => {}
        }
    }
    if matches!(token, PathToken::Predicate(_)) {
        let mut seen = HashSet::with_capacity(out.len());
        out.retain(|value| seen.insert(std::ptr::from_ref::<Value>(*value)));
    }
    out
}

/// What `token` yields for `node`, `None` when the shapes do not fit
fn select<'v>(
    token: &PathToken,
    node: &'v Value,
    root: &'v Value,
    predicate: Option<&FilterExpression>,
) -> Option<Cursor<'v>> {
    match token {
        PathToken::Root => Some(Cursor::Node(root)),
        PathToken::Child { names } => {
            let obj = node.as_object()?;
            match names.as_slice() {
                [name] => Some(obj.get(name).map_or(Cursor::Missing, Cursor::Node)),
                _ => Some(Cursor::Nodes(
                    names.iter().filter_map(|name| obj.get(name)).collect(),
                )),
            }
        }
        PathToken::Wildcard => match node {
            Value::Object(obj) => Some(Cursor::Nodes(obj.values().collect())),
            Value::Array(arr) => Some(Cursor::Nodes(arr.iter().collect())),
            _ => None,
        },
        PathToken::RecursiveDescent => {
            let mut containers = Vec::new();
            collect_containers(node, &mut containers);
            Some(Cursor::Nodes(containers))
        }
        PathToken::IndexOrSlice(selector) => {
            let arr = node.as_array()?;
            Some(select_elements(selector, arr))
        }
        PathToken::Predicate(_) => {
            let expr = predicate?;
            let kept = match node {
                Value::Array(arr) => arr
                    .iter()
                    .filter(|element| FilterEvaluator::evaluate_predicate(element, root, expr))
                    .collect(),
                _ if FilterEvaluator::evaluate_predicate(node, root, expr) => vec![node],
                _ => Vec::new(),
            };
            Some(Cursor::Nodes(kept))
        }
    }
}

fn select_elements<'v>(selector: &ArraySelector, arr: &'v [Value]) -> Cursor<'v> {
    match selector {
        ArraySelector::Index(index) => resolve_index(arr.len(), *index)
            .and_then(|i| arr.get(i))
            .map_or(Cursor::Missing, Cursor::Node),
        ArraySelector::Union(indexes) => Cursor::Nodes(
            indexes
                .iter()
                .filter_map(|index| resolve_index(arr.len(), *index))
                .filter_map(|i| arr.get(i))
                .collect(),
        ),
        ArraySelector::Slice { start, end, step } => Cursor::Nodes(
            slice_indices(arr.len(), *start, *end, *step)
                .into_iter()
                .filter_map(|i| arr.get(i))
                .collect(),
        ),
    }
}

/// The node itself and every descendant container, in document pre-order
fn collect_containers<'v>(node: &'v Value, out: &mut Vec<&'v Value>) {
    match node {
        Value::Object(obj) => {
            out.push(node);
            for child in obj.values() {
                collect_containers(child, out);
            }
        }
        Value::Array(arr) => {
            out.push(node);
            for child in arr {
                collect_containers(child, out);
            }
        }
        _ => {}
    }
}

#[inline]
fn is_container(value: &Value) -> bool {
    matches!(value, Value::Array(_) | Value::Object(_))
}
