/// A pure predicate over raw input, applied before a model is built.
pub trait Validator: Send + Sync {
    fn is_valid(&self, input: &str) -> bool;
}
