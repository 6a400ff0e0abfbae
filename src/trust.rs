/// Unwrapping for values that are known to be present, such as entries of the
/// static key and chord tables or regex captures that the pattern guarantees.
pub trait Trust<T> {
    fn trust(self) -> T;
}

impl<T> Trust<T> for Option<T> {
    #[track_caller]
    fn trust(self) -> T {
        self.unwrap_or_else(|| unreachable!("trusted value was missing"))
    }
}

impl<T, E: std::fmt::Debug> Trust<T> for Result<T, E> {
    #[track_caller]
    fn trust(self) -> T {
        self.unwrap_or_else(|e| unreachable!("trusted value was an error: {:?}", e))
    }
}
