/// Logging port used by the use cases.
///
/// Implementations must not expose what they receive to API clients; messages may
/// contain wrapped driver errors.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
