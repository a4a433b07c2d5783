//! Common error infrastructure for stash-core.
//!
//! This module provides shared types and traits used across all error types in
//! the crate. Domain-specific errors (`PlacementError`, `MoveError`, ...) live
//! next to the operations that produce them.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each operation has its own error type with specific variants
//! - **Rich Context**: Errors carry the region and cell that triggered them
//! - **Severity**: Callers decide between retrying elsewhere and giving up

use crate::state::{CellAddress, ItemHandle};

/// How a caller should react to an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// The same item may fit at another destination.
    ///
    /// Examples: footprint overflows the container, category not allowed
    Recoverable,

    /// The request itself is wrong; repeating it unchanged fails again.
    ///
    /// Examples: unknown region, item not at the stated source
    Validation,

    /// The aggregate broke one of its own invariants.
    ///
    /// Examples: overlapping blocks, anchor without covered cells
    Internal,

    /// The aggregate can no longer be trusted.
    Fatal,
}

impl ErrorSeverity {
    /// Lowercase label used in logs.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Another destination may succeed.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Points at a bug rather than at bad input.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Contextual information attached to errors for diagnostics.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ErrorContext {
    /// Item involved in the failing operation (if applicable).
    pub item: Option<ItemHandle>,

    /// Cell address where the error occurred (if applicable).
    pub address: Option<CellAddress>,

    /// Free-form note from the call site.
    pub message: Option<&'static str>,
}

impl ErrorContext {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            item: None,
            address: None,
            message: None,
        }
    }

    /// Attaches an item to this context (builder pattern).
    #[must_use]
    pub const fn with_item(mut self, item: ItemHandle) -> Self {
        self.item = Some(item);
        self
    }

    /// Attaches a cell address to this context (builder pattern).
    #[must_use]
    pub const fn with_address(mut self, address: CellAddress) -> Self {
        self.address = Some(address);
        self
    }

    #[must_use]
    pub const fn with_message(mut self, message: &'static str) -> Self {
        self.message = Some(message);
        self
    }
}

/// Shared classification implemented by every stash-core error enum.
pub trait StashError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Item and address the error refers to, when the variant records them.
    fn context(&self) -> Option<&ErrorContext> {
        None
    }

    /// Stable `SCREAMING_SNAKE` code for the variant; falls back to the type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
