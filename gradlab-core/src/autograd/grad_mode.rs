use std::cell::Cell;
use std::marker::PhantomData;

thread_local! {
    static GRAD_ENABLED: Cell<bool> = const { Cell::new(true) };
}

/// Returns whether ops on the current thread record graph nodes.
pub fn is_grad_enabled() -> bool {
    GRAD_ENABLED.with(|flag| flag.get())
}

/// Scope guard that disables graph recording until it is dropped.
///
/// The previous mode is restored on drop, so guards nest and early returns or
/// panics inside the scope still leave the thread in its prior state.
/// The guard is tied to the thread that created it.
///
/// ```
/// use gradlab_core::{autograd::NoGradGuard, Tensor};
///
/// let w = Tensor::new(vec![1.0, 2.0], vec![2]).unwrap().track().unwrap();
/// {
///     let _guard = NoGradGuard::new();
///     let y = w.mul_scalar(3.0).unwrap();
///     assert!(!y.requires_grad());
/// }
/// assert!(w.mul_scalar(3.0).unwrap().requires_grad());
/// ```
#[derive(Debug)]
#[must_use = "gradients are re-enabled as soon as the guard is dropped"]
pub struct NoGradGuard {
    previous: bool,
    _not_send: PhantomData<*const ()>,
}

impl NoGradGuard {
    pub fn new() -> Self {
        let previous = GRAD_ENABLED.with(|flag| flag.replace(false));
        NoGradGuard {
            previous,
            _not_send: PhantomData,
        }
    }
}

impl Default for NoGradGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for NoGradGuard {
    fn drop(&mut self) {
        let previous = self.previous;
        GRAD_ENABLED.with(|flag| flag.set(previous));
    }
}

/// Runs `f` with graph recording disabled.
pub fn no_grad<F, R>(f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = NoGradGuard::new();
    f()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_restores_previous_state() {
        assert!(is_grad_enabled());
        {
            let _outer = NoGradGuard::new();
            assert!(!is_grad_enabled());
            {
                let _inner = NoGradGuard::new();
                assert!(!is_grad_enabled());
            }
            // Inner guard restores "disabled", not "enabled".
            assert!(!is_grad_enabled());
        }
        assert!(is_grad_enabled());
    }

    #[test]
    fn test_no_grad_restores_on_panic() {
        let result = std::panic::catch_unwind(|| {
            no_grad(|| {
                assert!(!is_grad_enabled());
                panic!("boom");
            })
        });
        assert!(result.is_err());
        assert!(is_grad_enabled());
    }

    #[test]
    fn test_mode_is_per_thread() {
        let _guard = NoGradGuard::new();
        let other = std::thread::spawn(is_grad_enabled).join().unwrap();
        assert!(other);
        assert!(!is_grad_enabled());
    }
}
