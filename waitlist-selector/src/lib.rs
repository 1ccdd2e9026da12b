//! Candidate selection and the end-to-end ranking pipeline.
//!
//! Scored candidates are split into two groups:
//! - the **reliable** group, ranked by descending score and capped at
//!   `top_n`;
//! - the **low-confidence** group, shuffled through an injected [`Shuffler`]
//!   and capped at `random_m`.
//!
//! When a roster has no low-confidence candidates, the second group is
//! filled with the reliable candidates ranked immediately after the first
//! group. [`Ranker`] runs loading, scoring and selection in sequence and
//! returns a [`RankedList`] in compact or detailed form.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod output;
mod policy;
mod ranker;
mod shuffle;

pub use output::{DetailedResult, RankedList, RankedResult};
pub use policy::{DEFAULT_RANDOM_M, DEFAULT_TOP_N, Selection, SelectionError, SelectionPolicy};
pub use ranker::{RankError, RankErrorKind, Ranker, RankerConfig};
pub use shuffle::{PreserveOrder, SeededShuffler, Shuffler, ThreadRngShuffler};
