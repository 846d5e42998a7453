//! The chain of descriptors the deserializer is currently inside, kept only
//! in debug builds with the `debug` feature and logged when a conversion
//! fails.

use core::fmt;

use crate::info::TypeInfo;

#[cfg(all(debug_assertions, feature = "debug"))]
mod enabled {
    use core::cell::RefCell;
    use core::fmt;

    use crate::info::TypeInfo;

    #[derive(Default, Clone)]
    pub(super) struct TypeInfoStack {
        stack: Vec<&'static TypeInfo>,
    }

    impl TypeInfoStack {
        pub const fn new() -> Self {
            Self { stack: Vec::new() }
        }

        pub fn push(&mut self, info: &'static TypeInfo) {
            self.stack.push(info);
        }

        pub fn pop(&mut self) {
            self.stack.pop();
        }
    }

    impl fmt::Debug for TypeInfoStack {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let mut iter = self.stack.iter();

            if let Some(first) = iter.next() {
                writeln!(f, "`{}`", first.type_path())?;
            }

            for info in iter {
                writeln!(f, " -> `{}`", info.type_path())?;
            }

            Ok(())
        }
    }

    std::thread_local! {
        pub(super) static TYPE_INFO_STACK: RefCell<TypeInfoStack> =
            const { RefCell::new(TypeInfoStack::new()) };
    }
}

/// Keeps a descriptor on the stack until dropped.
pub(super) struct Frame(());

impl Drop for Frame {
    #[inline]
    fn drop(&mut self) {
        #[cfg(all(debug_assertions, feature = "debug"))]
        enabled::TYPE_INFO_STACK.with_borrow_mut(enabled::TypeInfoStack::pop);
    }
}

#[inline]
pub(super) fn enter(info: &'static TypeInfo) -> Frame {
    #[cfg(all(debug_assertions, feature = "debug"))]
    enabled::TYPE_INFO_STACK.with_borrow_mut(|stack| stack.push(info));
    #[cfg(not(all(debug_assertions, feature = "debug")))]
    let _ = info;
    Frame(())
}

/// Logs `err` together with the current stack.
#[inline]
pub(super) fn report(err: &dyn fmt::Display) {
    #[cfg(all(debug_assertions, feature = "debug"))]
    enabled::TYPE_INFO_STACK.with_borrow(|stack| {
        log::debug!("conversion failed: {err} (stack:\n{stack:?})");
    });
    #[cfg(not(all(debug_assertions, feature = "debug")))]
    let _ = err;
}
