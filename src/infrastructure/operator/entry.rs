//! Concrete operator wired to the infrastructure layer.

/// Implements every operator port on top of configuration, bootstrap and
/// signal handling.
#[derive(Debug, Default, Clone, Copy)]
pub struct Operator;

impl Operator {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}
