pub type Result<T> = std::result::Result<T, crate::error::Error>;

#[macro_export]
macro_rules! verify_arg {
    ($name:expr, $expr:expr) => {{
        let result = $expr;
        $crate::result::verify_arg(result, stringify!($name), stringify!($expr))?;
    }};
}

/// Checks that `$position` addresses an element of a sequence of `$len`
/// elements, returning `PositionOutOfRange` from the enclosing function if not.
#[macro_export]
macro_rules! verify_position {
    ($position:expr, $len:expr) => {{
        $crate::result::verify_position($position, $len)?;
    }};
}

#[inline]
pub fn verify_arg(predicate: bool, name: &str, condition: &str) -> Result<()> {
    if predicate {
        Ok(())
    } else {
        invalid_arg(name, condition)
    }
}

#[inline]
pub fn verify_position(position: usize, len: usize) -> Result<()> {
    if position < len {
        Ok(())
    } else {
        position_out_of_range(position, len)
    }
}

#[cold]
pub fn invalid_arg(name: &str, condition: &str) -> Result<()> {
    Err(crate::error::ErrorKind::InvalidArgument {
        name: name.to_string(),
        message: condition.to_string(),
    }
    .into())
}

#[cold]
pub fn position_out_of_range(position: usize, len: usize) -> Result<()> {
    Err(crate::error::Error::position_out_of_range(position, len))
}
