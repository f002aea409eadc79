use tracing::{debug, trace};

use crate::{
    checker::{
        checker::check,
        reporter::{Report, Site},
    },
    config::{mode, Mode},
    contract::{binder::Contract, signature::Signature},
    errors::errors::Violation,
};

use super::{
    callable::{Arguments, Callable, Returned},
    sequence::{CheckedSequence, Sequence},
};

/// Checks every call of the wrapped callable against its signature.
///
/// A call moves through three phases: the supplied arguments are checked,
/// the callable runs, and its result is checked. A lazily produced result
/// is wrapped so each element is checked when the consumer pulls it.
/// Violations reach the caller without the checker's internal frames.
#[derive(Debug)]
pub struct Guard<F> {
    inner: F,
}

impl<F> Guard<F> {
    pub fn new(inner: F) -> Self {
        Guard { inner }
    }

    pub fn inner(&self) -> &F {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut F {
        &mut self.inner
    }

    pub fn into_inner(self) -> F {
        self.inner
    }
}

impl<F> Callable for Guard<F>
where
    F: Callable,
    F::Error: From<Violation> + 'static,
{
    type Error = F::Error;

    fn name(&self) -> &str {
        self.inner.name()
    }

    fn doc(&self) -> Option<&str> {
        self.inner.doc()
    }

    fn signature(&self) -> &Signature {
        self.inner.signature()
    }

    fn call(&self, arguments: Arguments) -> Result<Returned<F::Error>, F::Error> {
        let contract = Contract::derive(self.inner.signature());

        check_arguments(self.name(), &contract, &arguments)
            .map_err(|violation| <F::Error>::from(violation.reraise()))?;

        let returned = self.inner.call(arguments)?;

        check_result(self.name(), &contract, returned)
    }
}

/// Checks every supplied argument that has a declaration.
pub fn check_arguments(function: &str, contract: &Contract, arguments: &Arguments) -> Result<(), Violation> {
    for binding in contract.bind(arguments) {
        trace!(function, site = ?binding.site, "checking argument");

        let report = Report::new(function, binding.site);
        check(binding.value, binding.declaration, &report).map_err(|violation| {
            debug!(function, kind = violation.get_error_name(), "argument violates contract");
            violation.within("check_arguments")
        })?;
    }
    Ok(())
}

fn check_result<E>(function: &str, contract: &Contract, returned: Returned<E>) -> Result<Returned<E>, E>
where
    E: From<Violation> + 'static,
{
    let Some(declaration) = contract.returns() else {
        return Ok(returned);
    };

    match returned {
        Returned::Value(value) => {
            check(&value, declaration, &Report::new(function, Site::Return)).map_err(|violation| {
                debug!(function, kind = violation.get_error_name(), "result violates contract");
                E::from(violation.reraise())
            })?;
            Ok(Returned::Value(value))
        }
        Returned::Lazy(sequence) => {
            trace!(function, "deferring checks to produced elements");
            let checked = CheckedSequence::new(function, declaration.clone(), sequence);
            Ok(Returned::Lazy(Sequence::new(checked)))
        }
    }
}

/// A callable wrapped according to the process-wide checking mode.
///
/// When checking is disabled the callable is kept as it is, so calls cost
/// nothing extra.
#[derive(Debug)]
pub enum Checked<F> {
    Disabled(F),
    Enabled(Guard<F>),
}

impl<F> Checked<F> {
    pub fn is_enabled(&self) -> bool {
        matches!(self, Checked::Enabled(_))
    }

    pub fn inner(&self) -> &F {
        match self {
            Checked::Disabled(callable) => callable,
            Checked::Enabled(guard) => guard.inner(),
        }
    }

    pub fn inner_mut(&mut self) -> &mut F {
        match self {
            Checked::Disabled(callable) => callable,
            Checked::Enabled(guard) => guard.inner_mut(),
        }
    }

    pub fn into_inner(self) -> F {
        match self {
            Checked::Disabled(callable) => callable,
            Checked::Enabled(guard) => guard.into_inner(),
        }
    }
}

impl<F> Callable for Checked<F>
where
    F: Callable,
    F::Error: From<Violation> + 'static,
{
    type Error = F::Error;

    fn name(&self) -> &str {
        self.inner().name()
    }

    fn doc(&self) -> Option<&str> {
        self.inner().doc()
    }

    fn signature(&self) -> &Signature {
        self.inner().signature()
    }

    fn call(&self, arguments: Arguments) -> Result<Returned<F::Error>, F::Error> {
        match self {
            Checked::Disabled(callable) => callable.call(arguments),
            Checked::Enabled(guard) => guard.call(arguments),
        }
    }
}

/// Wraps `callable` according to the process-wide mode.
pub fn checked<F: Callable>(callable: F) -> Checked<F> {
    checked_with(mode(), callable)
}

pub fn checked_with<F: Callable>(mode: Mode, callable: F) -> Checked<F> {
    match mode {
        Mode::Enabled => Checked::Enabled(Guard::new(callable)),
        Mode::Disabled => Checked::Disabled(callable),
    }
}
