//! Window filters.
//!
//! A filter enumerates fixed-width subsequences of a sequence. The same
//! filter type is used to produce the windows to score and to cut reference
//! sets out of a context.
//!
//! # Example
//!
//! ```
//! use anofox_anomaly::filters::SlidingWindow;
//!
//! let filter = SlidingWindow::new(3, 1).unwrap();
//! let seq = vec![1.0, 2.0, 3.0, 4.0, 5.0];
//! let windows: Vec<_> = filter.windows(&seq).unwrap().collect();
//! assert_eq!(windows.len(), 3);
//! assert_eq!((windows[2].start, windows[2].end), (2, 4));
//! ```

mod sliding_window;

pub use sliding_window::{SlidingWindow, Windows};
