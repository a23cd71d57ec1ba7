// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ReadOnlyStrategy, RenderStrategy, WritableStrategy};

/// What the current user may do, decided once at mount and passed down explicitly.
/// There is no global read-only flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Capabilities {
    pub can_edit: bool,
}

/// Proof that mutation is allowed. Only [`Capabilities::write_access`] can make one,
/// and every save / delete path (effects, gateway calls) takes it by value. So in a
/// read-only mount the code that talks to the backend can't even be called.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WriteAccess {
    _private: (),
}

static WRITABLE_STRATEGY: WritableStrategy = WritableStrategy;
static READ_ONLY_STRATEGY: ReadOnlyStrategy = ReadOnlyStrategy;

mod capabilities_impl {
    use super::{Capabilities, READ_ONLY_STRATEGY, RenderStrategy, WRITABLE_STRATEGY,
                WriteAccess};

    impl Capabilities {
        #[must_use]
        pub fn writable() -> Self { Self { can_edit: true } }

        #[must_use]
        pub fn read_only() -> Self { Self { can_edit: false } }

        /// The mount inputs carry a `readOnly` flag, this is its inverse.
        #[must_use]
        pub fn from_read_only_flag(read_only: bool) -> Self {
            Self {
                can_edit: !read_only,
            }
        }

        #[must_use]
        pub fn write_access(self) -> Option<WriteAccess> {
            self.can_edit.then_some(WriteAccess { _private: () })
        }

        /// Every affordance decision in the tree goes through the returned strategy.
        #[must_use]
        pub fn render_strategy(self) -> &'static dyn RenderStrategy {
            if self.can_edit {
                &WRITABLE_STRATEGY
            } else {
                &READ_ONLY_STRATEGY
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn write_access_only_when_editable() {
        assert!(Capabilities::writable().write_access().is_some());
        assert!(Capabilities::read_only().write_access().is_none());
    }

    #[test]
    fn read_only_flag_is_inverted() {
        assert_eq2!(Capabilities::from_read_only_flag(true), Capabilities::read_only());
        assert_eq2!(Capabilities::from_read_only_flag(false), Capabilities::writable());
    }

    #[test]
    fn strategy_matches_capabilities() {
        assert_eq2!(
            Capabilities::writable().render_strategy().capabilities(),
            Capabilities::writable()
        );
        assert_eq2!(
            Capabilities::read_only().render_strategy().capabilities(),
            Capabilities::read_only()
        );
    }
}
