//! Error macros for algokit

/// Macro for returning an invalid argument error
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::AlgoError::invalid_argument($context, $value))
    };
}
