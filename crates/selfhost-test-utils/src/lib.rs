// SPDX-FileCopyrightText: 2026 Selfhost Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for selfhost integration tests.
//!
//! Provides a mock [`ChatStream`](selfhost_core::ChatStream) so the chat
//! adapter can be exercised without network access.

pub mod mock_stream;

pub use mock_stream::{MockChatStream, MockOutcome, RecordedCall};
