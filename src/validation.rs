/// Shared seam for registry input validation.
///
/// Theme ids and language codes go through the same shape of check: a
/// stateless rule object applied to a borrowed input while the registries
/// normalize, rejecting entries instead of failing the load. `T` may be
/// unsized so validators can take `str` directly.
///
/// ```
/// use vitrine::validation::Validator;
///
/// struct NonEmpty;
/// impl Validator<str> for NonEmpty {
///     type Error = String;
///
///     fn validate(&self, input: &str) -> Result<(), Self::Error> {
///         if input.is_empty() {
///             Err("value cannot be empty".to_string())
///         } else {
///             Ok(())
///         }
///     }
/// }
/// ```
pub trait Validator<T: ?Sized> {
    type Error;

    fn validate(&self, input: &T) -> Result<(), Self::Error>;
}
