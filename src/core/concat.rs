/// Flattens any number of sequences into one, keeping element order.
pub fn concatenate<I, T>(arrays: I) -> Vec<T>
where
    I: IntoIterator,
    I::Item: IntoIterator<Item = T>,
{
    arrays.into_iter().flatten().collect()
}

/// Variadic form of [`concatenate`]: `concat_all![a, b, c]`.
#[macro_export]
macro_rules! concat_all {
    () => {
        ::std::vec::Vec::new()
    };
    ($($array:expr),+ $(,)?) => {{
        let mut out = ::std::vec::Vec::new();
        $(out.extend($array);)+
        out
    }};
}
