//! # Parallel Dimension-Reduce
//!
//! A fork-join combinator over aligned equal-length slices: given `N` input
//! slices and a pure elementwise op, it produces one output vector where
//! `out[i] = op(i, [in0[i], .., inN-1[i]])`.
//!
//! The index range `[0, dim)` is split into `min(available_parallelism, dim)`
//! contiguous, size-balanced chunks (remainder spread across the first
//! chunks), one scoped thread per chunk, joined before returning. A fresh
//! task set is spawned on every call; when only a single task would be
//! spawned the call computes inline instead.
//!
//! The op receives the dimension index alongside the gathered inputs so that
//! callers can consult per-dimension coefficient tables without sharing
//! mutable state across workers.

use std::thread;

use crate::error::{Result, SwarmError};

/// Applies `op` elementwise across `dim` dimensions of the `N` aligned input
/// slices, forking one task per chunk of the index range.
///
/// The number of tasks is `min(available_parallelism, dim)`.
///
/// # Arguments
///
/// * `inputs` - The input slices; each must hold at least `dim` elements.
/// * `dim` - The number of dimensions to reduce over.
/// * `op` - Pure combining function, called once per dimension index.
///
/// # Errors
///
/// Returns `SwarmError::DimensionMismatch` if any input slice is shorter
/// than `dim`.
pub fn dimension_reduce<T, F, const N: usize>(
    inputs: [&[T]; N],
    dim: usize,
    op: F,
) -> Result<Vec<T>>
where
    T: Copy + Send + Sync,
    F: Fn(usize, [T; N]) -> T + Sync,
{
    let num_tasks = thread::available_parallelism()
        .map(usize::from)
        .unwrap_or(1);

    dimension_reduce_with_tasks(inputs, dim, num_tasks, op)
}

/// Same as [`dimension_reduce`], but with an explicit task count.
///
/// The task count is clamped to `[1, dim]`. The output is identical for any
/// task count; only the chunking of the index range changes.
pub fn dimension_reduce_with_tasks<T, F, const N: usize>(
    inputs: [&[T]; N],
    dim: usize,
    num_tasks: usize,
    op: F,
) -> Result<Vec<T>>
where
    T: Copy + Send + Sync,
    F: Fn(usize, [T; N]) -> T + Sync,
{
    for (arg, input) in inputs.iter().enumerate() {
        if input.len() < dim {
            return Err(SwarmError::DimensionMismatch(format!(
                "reduce input {} holds {} dimensions, {} requested",
                arg,
                input.len(),
                dim
            )));
        }
    }

    if dim == 0 {
        return Ok(Vec::new());
    }

    let num_tasks = num_tasks.clamp(1, dim);
    if num_tasks == 1 {
        return Ok((0..dim)
            .map(|i| op(i, std::array::from_fn(|arg| inputs[arg][i])))
            .collect());
    }

    let op = &op;
    let mut result = Vec::with_capacity(dim);

    thread::scope(|scope| {
        let workers: Vec<_> = partition(dim, num_tasks)
            .into_iter()
            .map(|(start, end)| {
                scope.spawn(move || {
                    (start..end)
                        .map(|i| op(i, std::array::from_fn(|arg| inputs[arg][i])))
                        .collect::<Vec<T>>()
                })
            })
            .collect();

        // Chunks are contiguous and created in index order, so joining in
        // spawn order reassembles the output directly.
        for worker in workers {
            match worker.join() {
                Ok(chunk) => result.extend(chunk),
                Err(payload) => std::panic::resume_unwind(payload),
            }
        }
    });

    Ok(result)
}

/// Splits `[0, dim)` into `num_tasks` contiguous chunks whose sizes differ
/// by at most one, larger chunks first.
fn partition(dim: usize, num_tasks: usize) -> Vec<(usize, usize)> {
    let per_task = dim / num_tasks;
    let remainder = dim % num_tasks;

    let mut bounds = Vec::with_capacity(num_tasks);
    let mut start = 0;
    for i in 0..num_tasks {
        let end = start + per_task + usize::from(i < remainder);
        bounds.push((start, end));
        start = end;
    }

    bounds
}
