/// Implements a binary operator on owned values, and on mixed owned and
/// borrowed values, by forwarding to the impl for two references.
macro_rules! forward_ref_binops {
    ($($trait:ident::$func:ident for $type:ty;)+) => {
        $(
            impl $trait for $type {
                type Output = $type;

                fn $func(self, rhs: $type) -> $type {
                    $trait::$func(&self, &rhs)
                }
            }
            impl<'a> $trait<$type> for &'a $type {
                type Output = $type;

                fn $func(self, rhs: $type) -> $type {
                    $trait::$func(self, &rhs)
                }
            }
            impl<'a> $trait<&'a $type> for $type {
                type Output = $type;

                fn $func(self, rhs: &'a $type) -> $type {
                    $trait::$func(&self, rhs)
                }
            }
        )+
    };
}

/// Implements `AbsDiffEq` for a struct by comparing each listed field.
macro_rules! impl_abs_diff_eq_by_fields {
    (impl for $type:ty { $($field:ident),+ $(,)? }) => {
        impl approx::AbsDiffEq for $type {
            type Epsilon = $crate::Float;

            fn default_epsilon() -> Self::Epsilon {
                $crate::EPSILON
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                $(approx::AbsDiffEq::abs_diff_eq(&self.$field, &other.$field, epsilon))&&+
            }
        }
    };
}
