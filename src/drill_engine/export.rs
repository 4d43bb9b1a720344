use serde_json::{json, Value};
use crate::drill_engine::models::{DrillBatch, Operation, Problem};

/// Layout hint for the renderer: in-line problems sit on one line, the rest
/// are written as a column sum.
fn layout(op: Operation) -> &'static str {
    if op.is_inline() { "inline" } else { "column" }
}

fn problem_entry(index: usize, p: &Problem) -> Value {
    json!({
        "index": index,
        "operands": p.operands,
        "expression": p.to_string(),
    })
}

/// Map a [`DrillBatch`] to the JSON object handed to client renderers.
pub fn to_client_payload(batch: &DrillBatch) -> Value {
    let problems: Vec<Value> = batch
        .problems
        .iter()
        .enumerate()
        .map(|(i, p)| problem_entry(i, p))
        .collect();

    json!({
        "batch_id": batch.batch_id,
        "operation": batch.operation,
        "operation_name": batch.operation.to_string(),
        "symbol": batch.operation.symbol(),
        "layout": layout(batch.operation),
        "problems": problems,
    })
}
