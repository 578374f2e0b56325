use crate::dialect::Dialect;
use crate::value::Value;

/// Hands out placeholder tokens in emission order and records the value
/// bound to each one.
///
/// One allocator lives for exactly one generation pass, so numbering always
/// starts at 1. A token is only produced together with its value, so the n-th
/// token always pairs with the n-th parameter.
#[derive(Debug, Clone)]
pub struct Placeholders {
    dialect: Dialect,
    params: Vec<Value>,
}

impl Placeholders {
    /// Empty allocator; the first token is number 1.
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            params: Vec::new(),
        }
    }

    /// Record `value` and render its token.
    pub fn bind(&mut self, value: &Value) -> String {
        self.params.push(value.clone());
        self.dialect.placeholder(self.params.len())
    }

    /// Record every value and render their comma-separated tokens.
    pub fn bind_all(&mut self, values: &[Value]) -> String {
        let tokens: Vec<String> = values.iter().map(|v| self.bind(v)).collect();
        tokens.join(",")
    }

    /// Tokens handed out so far.
    pub fn count(&self) -> usize {
        self.params.len()
    }

    /// Bound values in token order.
    pub fn params(&self) -> &[Value] {
        &self.params
    }

    /// Consume the allocator, returning the bound values in token order.
    pub fn into_params(self) -> Vec<Value> {
        self.params
    }
}
