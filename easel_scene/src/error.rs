// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Why a primitive was not added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SceneError {
    /// The scene already held `limit` primitives. The scene is now shutting down.
    #[error("scene capacity of {limit} primitives exceeded")]
    CapacityExceeded {
        /// The ceiling that was hit.
        limit: usize,
    },
    /// The scene is shutting down and no longer accepts changes.
    #[error("scene is shutting down")]
    Closed,
}
