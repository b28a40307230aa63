//! The `pipe!` macro.

/// Applies a list of unary functions to a value, left to right.
///
/// `pipe!(x, f, g, h)` is `h(g(f(x)))`. Each step is called once, so
/// `FnOnce` steps are accepted.
///
/// - `pipe!(x)` is `x`
/// - `pipe!(x, f)` is `f(x)`
/// - `pipe!(x, f, g, ...)` is `...g(f(x))`
///
/// # Examples
///
/// ```
/// use kindred::data::result::{self, ResultF};
/// use kindred::pipe;
/// use kindred::typeclass::Functor;
///
/// let checked = pipe!(
///     result::ok::<i32, String>(20),
///     ResultF::<String>::mapping(|n: i32| n * 2),
///     |r: Result<i32, String>| {
///         result::flat_map(r, |n: i32| if n > 30 { Ok(n) } else { Err(format!("{n} too small")) })
///     },
/// );
/// assert_eq!(checked, Ok(40));
/// ```
///
/// Steps may consume what they capture:
///
/// ```
/// use kindred::pipe;
///
/// let suffix = String::from("!");
/// let shout = move |text: String| text.to_uppercase() + &suffix;
/// assert_eq!(pipe!("hey".to_string(), shout), "HEY!");
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr $(,)?) => {
        $value
    };

    ($value:expr, $function:expr $(,)?) => {
        $function($value)
    };

    ($value:expr, $function:expr, $($remaining:expr),+ $(,)?) => {
        $crate::pipe!($function($value), $($remaining),+)
    };
}

#[cfg(test)]
mod tests {
    use crate::data::option::OptionF;
    use crate::data::array::VecF;
    use crate::typeclass::{Functor, Monad};

    #[test]
    fn value_only() {
        assert_eq!(pipe!(Some(1)), Some(1));
    }

    #[test]
    fn steps_run_left_to_right() {
        let steps = pipe!(vec![1, 2, 3], VecF::mapping(|n: i32| n * 10), |v: Vec<i32>| v.len());
        assert_eq!(steps, 3);
    }

    #[test]
    fn option_pipeline_stops_at_none() {
        let halve = OptionF::flat_mapping(|n: i32| (n % 2 == 0).then_some(n / 2));
        let mut first = halve.clone();
        let mut second = halve.clone();
        let mut third = halve.clone();
        assert_eq!(pipe!(Some(8), first, second, third), Some(1));

        let (mut first, mut second, mut third) = (halve.clone(), halve.clone(), halve);
        assert_eq!(pipe!(Some(6), first, second, third), None);
    }
}
