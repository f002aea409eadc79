use tracing::{debug, trace};

use crate::{
    checker::{
        checker::check,
        reporter::{Report, Site},
    },
    declarations::declaration::Declaration,
    errors::errors::Violation,
    values::value::Value,
};

/// A lazily produced sequence of results.
pub struct Sequence<E> {
    inner: Box<dyn Iterator<Item = Result<Value, E>>>,
}

impl<E> Sequence<E> {
    pub fn new<I>(iter: I) -> Self
    where
        I: Iterator<Item = Result<Value, E>> + 'static,
    {
        Sequence { inner: Box::new(iter) }
    }

    /// A sequence that never fails on its own.
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = Value>,
        I::IntoIter: 'static,
        E: 'static,
    {
        Sequence::new(values.into_iter().map(Ok))
    }
}

impl<E> Iterator for Sequence<E> {
    type Item = Result<Value, E>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

/// Checks each element of a sequence against the return declaration as it
/// is produced.
///
/// Elements are checked one at a time, never ahead of the consumer. The
/// first violation is yielded in place of the offending element and ends
/// the sequence. Errors of the underlying sequence are passed on as they are.
pub struct CheckedSequence<E> {
    function: String,
    declaration: Declaration,
    inner: Sequence<E>,
    produced: usize,
    finished: bool,
}

impl<E> CheckedSequence<E> {
    pub fn new(function: impl Into<String>, declaration: Declaration, inner: Sequence<E>) -> Self {
        CheckedSequence {
            function: function.into(),
            declaration,
            inner,
            produced: 0,
            finished: false,
        }
    }
}

impl<E: From<Violation>> Iterator for CheckedSequence<E> {
    type Item = Result<Value, E>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let value = match self.inner.next()? {
            Ok(value) => value,
            Err(error) => return Some(Err(error)),
        };
        self.produced += 1;
        trace!(function = %self.function, element = self.produced, "checking produced element");

        let report = Report::new(&self.function, Site::Return);
        match check(&value, &self.declaration, &report) {
            Ok(()) => Some(Ok(value)),
            Err(violation) => {
                self.finished = true;
                debug!(
                    function = %self.function,
                    element = self.produced,
                    kind = violation.get_error_name(),
                    "produced element violates contract"
                );
                Some(Err(E::from(violation.reraise())))
            }
        }
    }
}
