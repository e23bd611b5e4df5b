pub use enclose::*;

/// Builds a [`Lazy`](crate::Lazy) cell from an expression.
///
/// Handles listed in the leading parentheses are cloned into the closure:
/// `lazy!((a, b) a.value() + b.value())`.
#[macro_export]
macro_rules! lazy {
    (( $($d_tt:tt)* ) $($b:tt)*) => {
        $crate::Lazy::new($crate::macros::enclose!(($( $d_tt )*) move || { $($b)* }))
    };
    ($($b:tt)*) => {
        $crate::Lazy::new(move || { $($b)* })
    };
}

/// Subscribes to a cell, cloning the listed handles into the callback:
/// `subscribe!(cell, (history) value => history.push(*value))`.
#[macro_export]
macro_rules! subscribe {
    ($cell:expr, ( $($d_tt:tt)* ) $value:ident => $($b:tt)*) => {
        $cell.subscribe($crate::macros::enclose!(($( $d_tt )*) move |$value: &_| { $($b)* }))
    };
    ($cell:expr, $value:ident => $($b:tt)*) => {
        $cell.subscribe(move |$value: &_| { $($b)* })
    };
}
