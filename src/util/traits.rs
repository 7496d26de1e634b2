/// Allows any Sized type to functionally move itself into the Ok or Err side of a Result.
pub trait ResultExtensions
where
    Self: Sized,
{
    /// Converts the caller into the Ok side of a Result.
    fn to_ok<E>(self) -> Result<Self, E> {
        Ok(self)
    }

    /// Converts the caller into the Err side of a Result.
    fn to_err<T>(self) -> Result<T, Self> {
        Err(self)
    }
}
impl<T> ResultExtensions for T {}

/// Allows any Sized type to functionally wrap itself in an Option.
pub trait OptionExtensions
where
    Self: Sized,
{
    /// Wraps the caller in Option::Some.
    fn to_some(self) -> Option<Self> {
        Some(self)
    }
}
impl<T> OptionExtensions for T {}
