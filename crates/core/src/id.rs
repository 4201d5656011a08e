// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Identifier newtypes and id counters

/// Declare a string-backed identifier type.
///
/// The type serializes as a bare string, compares against `&str`, and can
/// key a map that is queried with `&str`.
#[macro_export]
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        pub struct $name:ident;
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord,
            serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self::new(id)
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }

        impl std::borrow::Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

/// Monotonic counter behind model-assigned ids (`w1`, `w2`, ...).
///
/// Numbers are never handed out twice, so removed ids stay retired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdCounter {
    prefix: &'static str,
    next: u64,
}

impl IdCounter {
    pub const fn new(prefix: &'static str) -> Self {
        Self { prefix, next: 1 }
    }

    /// Take the next number along with the id built from it.
    pub fn take<T: From<String>>(&mut self) -> (u64, T) {
        let n = self.next;
        self.next += 1;
        (n, T::from(format!("{}{n}", self.prefix)))
    }
}

crate::define_id! {
    /// Identifier of a solver job, assigned by the solver on submission.
    ///
    /// The same value keys the job's history record.
    pub struct TaskId;
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
