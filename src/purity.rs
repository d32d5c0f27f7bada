//! Checks that a component behaves like a function of its props.
//!
//! A pure component returns equal output for equal input, no matter how often
//! or in which order it is called. These helpers render more than once and
//! compare, which catches components that read or write state living outside
//! their own call.

use std::fmt::Debug;

use log::warn;

use crate::{RenderError, Result};

/// Renders twice and returns the first output if both passes agree.
pub fn check_pure<T, F>(component: &'static str, mut render: F) -> Result<T>
where
    T: PartialEq + Debug,
    F: FnMut() -> Result<T>,
{
    let first = render()?;
    let second = render()?;
    if first != second {
        warn!(
            "{} is impure: first pass {:?}, second pass {:?}",
            component, first, second
        );
        return Err(RenderError::Impure { component });
    }
    Ok(first)
}

/// Renders every input forwards, then again in reverse, and fails if any
/// input's output changed with the call order. Outputs are returned in input
/// order.
pub fn check_order_independent<I, T, F>(
    component: &'static str,
    inputs: &[I],
    mut render: F,
) -> Result<Vec<T>>
where
    T: PartialEq + Debug,
    F: FnMut(&I) -> Result<T>,
{
    let forward = inputs.iter().map(&mut render).collect::<Result<Vec<_>>>()?;
    let mut backward = inputs
        .iter()
        .rev()
        .map(&mut render)
        .collect::<Result<Vec<_>>>()?;
    backward.reverse();
    if let Some(index) = forward.iter().zip(&backward).position(|(a, b)| a != b) {
        warn!(
            "{} depends on call order: input #{} gave {:?} then {:?}",
            component, index, forward[index], backward[index]
        );
        return Err(RenderError::Impure { component });
    }
    Ok(forward)
}
