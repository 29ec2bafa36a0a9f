//! Route handlers.

/// A function that receives a route's captured values as positional arguments.
///
/// Implemented for every `Fn(A, B, ...) -> Out` taking up to 12 arguments,
/// where `Args` is the tuple `(A, B, ...)`.
pub trait Handler<Args, Out> {
    fn call(&self, args: Args) -> Out;
}

macro_rules! impl_handler {
    ($($T:ident),*) => {
        impl<Func, Out, $($T),*> Handler<($($T,)*), Out> for Func
        where
            Func: Fn($($T),*) -> Out,
        {
            #[allow(non_snake_case)]
            fn call(&self, ($($T,)*): ($($T,)*)) -> Out {
                self($($T),*)
            }
        }
    };
}

impl_handler!();
impl_handler!(A);
impl_handler!(A, B);
impl_handler!(A, B, C);
impl_handler!(A, B, C, D);
impl_handler!(A, B, C, D, E);
impl_handler!(A, B, C, D, E, F);
impl_handler!(A, B, C, D, E, F, G);
impl_handler!(A, B, C, D, E, F, G, H);
impl_handler!(A, B, C, D, E, F, G, H, I);
impl_handler!(A, B, C, D, E, F, G, H, I, J);
impl_handler!(A, B, C, D, E, F, G, H, I, J, K);
impl_handler!(A, B, C, D, E, F, G, H, I, J, K, L);

#[cfg(test)]
mod tests {
    use super::*;

    fn invoke<Args, Out>(handler: impl Handler<Args, Out>, args: Args) -> Out {
        handler.call(args)
    }

    #[test]
    fn test_arguments_are_unpacked_positionally() {
        assert_eq!(invoke(|| 1, ()), 1);
        assert_eq!(invoke(|a: i32| -a, (5,)), -5);
        assert_eq!(
            invoke(|a: &str, b: i32, c: char| format!("{a}{b}{c}"), ("x", 2, 'z')),
            "x2z"
        );
    }
}
