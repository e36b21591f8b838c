//! Sequential or worker-pool execution of independent per-node tasks.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use rayon::prelude::*;

use netcoupler_core::config::ExecutionStrategy;
use netcoupler_core::errors::LinkError;

/// Run `task` for every item. Output order always matches input order.
///
/// `Parallel` builds a dedicated pool for the call and leaves rayon's global
/// pool alone.
pub fn run_ordered<I, T, F>(strategy: ExecutionStrategy, items: &[I], task: F) -> Result<Vec<T>, LinkError>
where
    I: Sync,
    T: Send,
    F: Fn(&I) -> T + Send + Sync,
{
    match strategy {
        ExecutionStrategy::Sequential => Ok(items.iter().map(&task).collect()),
        ExecutionStrategy::Parallel { threads } => {
            let mut builder = rayon::ThreadPoolBuilder::new();
            if let Some(n) = threads {
                builder = builder.num_threads(n);
            }
            let pool = builder.build().map_err(|e| LinkError::WorkerPool {
                reason: e.to_string(),
            })?;
            Ok(pool.install(|| items.par_iter().map(&task).collect()))
        }
    }
}

/// Run `f`, turning a panic into its message.
pub fn catch_panic<T>(f: impl FnOnce() -> T) -> Result<T, String> {
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(panic_message)
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parallel_preserves_order() {
        let items: Vec<usize> = (0..200).collect();
        let seq = run_ordered(ExecutionStrategy::Sequential, &items, |i| i * 3).unwrap();
        let par = run_ordered(ExecutionStrategy::Parallel { threads: Some(4) }, &items, |i| i * 3)
            .unwrap();
        assert_eq!(seq, par);
        assert_eq!(par[199], 597);
    }

    #[test]
    fn panics_become_messages() {
        assert_eq!(catch_panic(|| 7), Ok(7));
        let err = catch_panic(|| -> i32 { panic!("boom {}", 1) }).unwrap_err();
        assert_eq!(err, "boom 1");
        let err = catch_panic(|| -> i32 { panic!("static") }).unwrap_err();
        assert_eq!(err, "static");
    }
}
