// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Chip values, labels, and class lists are almost always short. Keep them on the stack
//! and let them spill to the heap only when they grow past these sizes.

use smallstr::SmallString;
use smallvec::SmallVec;

// PERF: Most branch and device names fit in 32 bytes (`git_master`, `walleye`,
// `oc-mr1-dev-plus-aosp`).
pub const DEFAULT_STRING_STORAGE_SIZE: usize = 32;

/// Stack allocated string storage for small strings. When this gets larger than
/// [`DEFAULT_STRING_STORAGE_SIZE`], it will be [`smallvec::SmallVec::spilled`] on the
/// heap.
pub type InlineString = SmallString<[u8; DEFAULT_STRING_STORAGE_SIZE]>;

/// Stack allocated list, that can [`smallvec::SmallVec::spilled`] into the heap if it
/// gets larger than [`INLINE_VEC_SIZE`].
pub type InlineVec<T> = SmallVec<[T; INLINE_VEC_SIZE]>;
pub const INLINE_VEC_SIZE: usize = 8;
