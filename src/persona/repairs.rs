use std::fmt;
use std::sync::Arc;

/// Pure text rewrite applied after a trajectory violation.
///
/// Implementations must be safe to apply to text they do not recognise and
/// return it unchanged in that case.
pub trait Repair: Send + Sync {
    fn id(&self) -> &str;

    fn apply(&self, response: &str) -> String;
}

/// Shared handle to a repair stored on a definition.
#[derive(Clone)]
pub struct RepairRef(Arc<dyn Repair>);

impl RepairRef {
    pub fn new(repair: impl Repair + 'static) -> Self {
        Self(Arc::new(repair))
    }

    pub fn id(&self) -> &str {
        self.0.id()
    }

    pub fn apply(&self, response: &str) -> String {
        self.0.apply(response)
    }
}

impl fmt::Debug for RepairRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RepairRef").field(&self.id()).finish()
    }
}

/// Replaces every exact (case-sensitive) occurrence of `from` with `to`.
#[derive(Debug, Clone)]
pub struct SubstringRewrite {
    id: String,
    from: String,
    to: String,
}

impl SubstringRewrite {
    pub fn new(id: impl Into<String>, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            from: from.into(),
            to: to.into(),
        }
    }
}

impl Repair for SubstringRewrite {
    fn id(&self) -> &str {
        &self.id
    }

    fn apply(&self, response: &str) -> String {
        if self.from.is_empty() {
            return response.to_string();
        }
        response.replace(&self.from, &self.to)
    }
}
