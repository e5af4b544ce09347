//! Find the longest contiguous strictly increasing run in a sequence of integers.
//!
//! ```
//! use runfinder::finder::find_longest_increasing_subsequence;
//!
//! assert_eq!(find_longest_increasing_subsequence("6 1 5 9 2").unwrap(), "1 5 9");
//! ```

pub mod error;
pub mod finder;
pub mod logging;
pub mod model;
pub mod storage;
pub mod text_summary;

pub use error::ParseError;
pub use finder::{find_longest_increasing_run, find_longest_increasing_subsequence, parse};
pub use model::{Run, RunReport};
