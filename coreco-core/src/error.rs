//! Error types for the coreco core library.
//!
//! Defines error enums exposed by the public API and a convenient result alias.

use std::{fmt, sync::Arc};

use thiserror::Error;

use crate::ids::ItemId;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced by [`crate::ScoreHeap`] operations.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum HeapError {
    /// The item has no entry in the score mapping the heap orders by.
    #[error("item {item} has no score entry and cannot be ordered")]
    UnscoredItem {
        /// The rejected item.
        item: ItemId,
    },
}

define_error_codes! {
    /// Stable codes describing [`HeapError`] variants.
    enum HeapErrorCode for HeapError {
        /// The item has no entry in the score mapping the heap orders by.
        UnscoredItem => UnscoredItem { .. } => "HEAP_UNSCORED_ITEM",
    }
}

/// Error type produced when constructing or running [`crate::Recommender`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum RecommendError {
    /// The requested result count exceeds the supported maximum.
    #[error("result_count must be at most {max} (got {got})")]
    ResultCountTooLarge {
        /// The result count supplied by the caller.
        got: usize,
        /// Largest accepted result count.
        max: usize,
    },
    /// The supplied [`crate::PreferenceSource`] recorded no users.
    #[error("preference source `{source_name}` contains no users")]
    EmptySource {
        /// Identifier for the empty preference source.
        source_name: Arc<str>,
    },
}

define_error_codes! {
    /// Stable codes describing [`RecommendError`] variants.
    enum RecommendErrorCode for RecommendError {
        /// The requested result count exceeds the supported maximum.
        ResultCountTooLarge => ResultCountTooLarge { .. } => "RECOMMEND_RESULT_COUNT_TOO_LARGE",
        /// The supplied [`crate::PreferenceSource`] recorded no users.
        EmptySource => EmptySource { .. } => "RECOMMEND_EMPTY_SOURCE",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, RecommendError>;

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case(
        RecommendError::ResultCountTooLarge { got: 5, max: 1 },
        "RECOMMEND_RESULT_COUNT_TOO_LARGE"
    )]
    #[case(
        RecommendError::EmptySource { source_name: Arc::from("ratings") },
        "RECOMMEND_EMPTY_SOURCE"
    )]
    fn recommend_error_codes_are_stable(#[case] err: RecommendError, #[case] expected: &str) {
        assert_eq!(err.code().as_str(), expected);
        assert_eq!(err.code().to_string(), expected);
    }

    #[test]
    fn heap_error_reports_item() {
        let err = HeapError::UnscoredItem {
            item: ItemId::new(42),
        };
        assert_eq!(err.code(), HeapErrorCode::UnscoredItem);
        assert_eq!(
            err.to_string(),
            "item 42 has no score entry and cannot be ordered"
        );
    }
}
