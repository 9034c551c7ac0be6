//! Operation traces: the contract boundary with external harnesses.
//!
//! A harness drives every structure through an identical sequence of
//! operations and compares or times the answers; this module provides the
//! operation type and the replay loops. Timing, CSV emission, and plotting
//! stay on the harness side.

use crate::error::Result;
use crate::{PredecessorSupport, SuccessorDelete};

/// A single operation of a trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// Delete the slot.
    Delete(usize),
    /// Query the successor of the slot.
    Successor(usize),
    /// Query the predecessor of the slot (dual structures only).
    Predecessor(usize),
}

/// Replays `ops` against `set`, collecting the answer of every successor
/// query in order.
///
/// # Errors
///
/// An error is returned if an operation violates `set`'s contract, or if
/// the trace contains an [`Op::Predecessor`] operation; use
/// [`replay_with_predecessor`] for dual structures.
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use succdel::trace::{replay, Op};
/// use succdel::{SuccessorDelete, TwoPass};
///
/// let mut set = TwoPass::new(5)?;
/// let answers = replay(
///     &mut set,
///     &[Op::Delete(2), Op::Delete(3), Op::Successor(2), Op::Successor(5)],
/// )?;
/// assert_eq!(answers, vec![Some(4), Some(5)]);
/// # Ok(())
/// # }
/// ```
pub fn replay<S: SuccessorDelete>(set: &mut S, ops: &[Op]) -> Result<Vec<Option<usize>>> {
    let mut answers = Vec::new();
    for &op in ops {
        match op {
            Op::Delete(i) => set.delete(i)?,
            Op::Successor(i) => answers.push(set.successor(i)?),
            Op::Predecessor(_) => {
                return Err(crate::error::Error::UnsupportedOperation("predecessor"));
            }
        }
    }
    Ok(answers)
}

/// Replays `ops` against a dual structure, collecting the answer of every
/// successor and predecessor query in order.
///
/// # Errors
///
/// An error is returned if an operation violates `set`'s contract.
pub fn replay_with_predecessor<S: PredecessorSupport>(
    set: &mut S,
    ops: &[Op],
) -> Result<Vec<Option<usize>>> {
    let mut answers = Vec::new();
    for &op in ops {
        match op {
            Op::Delete(i) => set.delete(i)?,
            Op::Successor(i) => answers.push(set.successor(i)?),
            Op::Predecessor(i) => answers.push(set.predecessor(i)?),
        }
    }
    Ok(answers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{NoCompression, SuccPredArray};

    #[test]
    fn test_replay_collects_answers() {
        let mut set = NoCompression::new(4).unwrap();
        let ops = [
            Op::Successor(1),
            Op::Delete(1),
            Op::Successor(1),
            Op::Delete(4),
            Op::Successor(4),
        ];
        let answers = replay(&mut set, &ops).unwrap();
        assert_eq!(answers, vec![Some(1), Some(2), None]);
    }

    #[test]
    fn test_replay_rejects_predecessor_ops() {
        let mut set = NoCompression::new(4).unwrap();
        assert!(replay(&mut set, &[Op::Predecessor(1)]).is_err());
    }

    #[test]
    fn test_replay_with_predecessor() {
        let mut set = SuccPredArray::new(5).unwrap();
        let ops = [
            Op::Delete(2),
            Op::Delete(3),
            Op::Successor(2),
            Op::Predecessor(4),
            Op::Predecessor(1),
        ];
        let answers = replay_with_predecessor(&mut set, &ops).unwrap();
        assert_eq!(answers, vec![Some(4), Some(1), None]);
    }
}
