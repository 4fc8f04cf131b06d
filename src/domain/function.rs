/// Unique identifier for a function in the graph
pub type FunctionId = u32;

/// A function node in the call graph.
///
/// Functions are immutable once loaded. Declaration-only functions (no known
/// body) stay in the graph as valid call targets but are never analyzed as
/// potential recursion sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    pub id: FunctionId,
    pub name: String,
    /// Whether the body is known. `false` means declaration-only / external.
    pub is_definition: bool,
}

impl Function {
    pub fn new(id: FunctionId, name: String, is_definition: bool) -> Self {
        Self {
            id,
            name,
            is_definition,
        }
    }
}
