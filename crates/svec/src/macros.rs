/// Builds a [`DynArray`](crate::DynArray) with the default growth policy.
///
/// `dyn_array![a, b, c]` moves the values in order, `dyn_array![value; n]` clones
/// `value` `n` times. Capacity equals the length either way. Panics if the
/// allocation fails.
#[macro_export]
macro_rules! dyn_array {
    () => {
        $crate::DynArray::<_>::new()
    };
    ($value:expr; $len:expr) => {
        match $crate::DynArray::<_>::with_len($len, $value) {
            Ok(array) => array,
            Err(err) => panic!("{}", err),
        }
    };
    [$($elem:expr),+ $(,)?] => {
        $crate::DynArray::<_>::from([$($elem),+])
    };
}
