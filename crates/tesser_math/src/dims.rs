//! Compile-time dimension checks
//!
//! Const generic arithmetic (`N - 1`) is not expressible on stable Rust, so
//! operations that pair an `M`-vector with an `N`x`N` matrix carry both
//! parameters and assert `M + 1 == N` when they are instantiated.

pub(crate) struct NonEmpty<const N: usize>;

impl<const N: usize> NonEmpty<N> {
    pub(crate) const CHECK: () = assert!(N > 0, "dimension must be positive");
}

pub(crate) struct Homogeneous<const M: usize, const N: usize>;

impl<const M: usize, const N: usize> Homogeneous<M, N> {
    pub(crate) const CHECK: () = assert!(
        M + 1 == N,
        "vector dimension must be one less than the matrix dimension"
    );
}
