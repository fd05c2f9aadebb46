//! JavaScript bindings for the OT engine

use crate::ot::{self, Operation, Side};
use wasm_bindgen::prelude::*;

/// JavaScript-friendly wrapper for Operation
#[wasm_bindgen]
pub struct WasmOperation {
    inner: Operation,
}

#[wasm_bindgen]
impl WasmOperation {
    /// Create an insert operation
    #[wasm_bindgen(js_name = makeInsert)]
    pub fn insert(position: usize, content: String) -> WasmOperation {
        Operation::insert(position, content).into()
    }

    /// Create a delete operation
    #[wasm_bindgen(js_name = makeDelete)]
    pub fn delete(position: usize, length: usize) -> WasmOperation {
        Operation::delete(position, length).into()
    }

    /// Create a retain operation
    #[wasm_bindgen(js_name = makeRetain)]
    pub fn retain(position: usize) -> WasmOperation {
        Operation::retain(position).into()
    }

    /// Offset into the base document
    #[wasm_bindgen(getter)]
    pub fn position(&self) -> usize {
        self.inner.position()
    }

    /// "insert", "delete" or "retain"
    #[wasm_bindgen(getter)]
    pub fn kind(&self) -> String {
        match self.inner.kind() {
            ot::OperationKind::Insert => "insert",
            ot::OperationKind::Delete => "delete",
            ot::OperationKind::Retain => "retain",
        }
        .to_string()
    }

    /// Export as JSON string
    #[wasm_bindgen(js_name = toJSON)]
    pub fn to_json(&self) -> Result<String, JsValue> {
        self.inner.to_json().map_err(to_js_error)
    }

    /// Import from JSON string
    #[wasm_bindgen(js_name = fromJSON)]
    pub fn from_json(json: String) -> Result<WasmOperation, JsValue> {
        Operation::from_json(&json)
            .map(WasmOperation::from)
            .map_err(to_js_error)
    }
}

impl From<Operation> for WasmOperation {
    fn from(inner: Operation) -> Self {
        Self { inner }
    }
}

/// Apply an operation to a document string
#[wasm_bindgen(js_name = applyOperation)]
pub fn apply_operation(document: &str, op: &WasmOperation) -> Result<String, JsValue> {
    ot::apply(document, &op.inner).map_err(to_js_error)
}

/// Transform `op` past the concurrent `against`
///
/// `op_wins_ties` must be the result of the same tie-break comparison on
/// every peer (e.g. "my author id is lower").
#[wasm_bindgen(js_name = transformOperation)]
pub fn transform_operation(
    op: &WasmOperation,
    against: &WasmOperation,
    op_wins_ties: bool,
) -> WasmOperation {
    let side = if op_wins_ties { Side::Left } else { Side::Right };
    ot::transform(&op.inner, &against.inner, side).into()
}

/// Compose two sequential operations (returns `op2` when they do not merge)
#[wasm_bindgen(js_name = composeOperations)]
pub fn compose_operations(op1: &WasmOperation, op2: &WasmOperation) -> WasmOperation {
    ot::compose(&op1.inner, &op2.inner).into()
}

/// Build the operation that undoes `op` against its base document
#[wasm_bindgen(js_name = invertOperation)]
pub fn invert_operation(op: &WasmOperation, document: &str) -> Result<WasmOperation, JsValue> {
    ot::invert(&op.inner, document)
        .map(WasmOperation::from)
        .map_err(to_js_error)
}

/// Diff two snapshots into a JSON array of operations
#[wasm_bindgen(js_name = diffText)]
pub fn diff_text(before: &str, after: &str) -> Result<String, JsValue> {
    serde_json::to_string(&ot::diff(before, after))
        .map_err(|e| JsValue::from_str(&format!("JSON serialization failed: {}", e)))
}

/// Generate a random client id for tie-breaking
#[wasm_bindgen(js_name = generateClientId)]
pub fn generate_client_id() -> String {
    crate::generate_client_id()
}

fn to_js_error(err: crate::OtError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
