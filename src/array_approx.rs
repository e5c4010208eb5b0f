#[cfg(feature = "approx")]
mod approx_impls
{
    use approx::{AbsDiffEq, RelativeEq};

    use crate::Tensor4;

    /// **Requires crate feature `"approx"`**
    impl<A, B> AbsDiffEq<Tensor4<B>> for Tensor4<A>
    where
        A: AbsDiffEq<B>,
        A::Epsilon: Clone,
    {
        type Epsilon = A::Epsilon;

        fn default_epsilon() -> A::Epsilon
        {
            A::default_epsilon()
        }

        fn abs_diff_eq(&self, other: &Tensor4<B>, epsilon: A::Epsilon) -> bool
        {
            if self.shape() != other.shape() {
                return false;
            }

            self.as_slice()
                .iter()
                .zip(other.as_slice())
                .all(move |(a, b)| A::abs_diff_eq(a, b, epsilon.clone()))
        }
    }

    /// **Requires crate feature `"approx"`**
    impl<A, B> RelativeEq<Tensor4<B>> for Tensor4<A>
    where
        A: RelativeEq<B>,
        A::Epsilon: Clone,
    {
        fn default_max_relative() -> A::Epsilon
        {
            A::default_max_relative()
        }

        fn relative_eq(
            &self,
            other: &Tensor4<B>,
            epsilon: A::Epsilon,
            max_relative: A::Epsilon,
        ) -> bool
        {
            if self.shape() != other.shape() {
                return false;
            }

            self.as_slice()
                .iter()
                .zip(other.as_slice())
                .all(move |(a, b)| A::relative_eq(a, b, epsilon.clone(), max_relative.clone()))
        }
    }
}
