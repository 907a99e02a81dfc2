//! Tree formatting and display
//!
//! `TreeFormatter` renders walker events as the classic ASCII tree. It is
//! generic over any `termcolor` sink, so the binary writes a colored
//! `StandardStream` while tests capture plain bytes through `NoColor`.

mod streaming;

pub use streaming::TreeFormatter;
