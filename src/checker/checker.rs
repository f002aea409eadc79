use crate::{
    declarations::declaration::Declaration,
    errors::errors::Violation,
    values::{types::Type, value::Value},
};

use super::reporter::Report;

/// Checks `value` against `declaration`, reporting a failure through `report`.
///
/// Unresolvable forward references surface as their own violation rather
/// than as a mismatch.
pub fn check(value: &Value, declaration: &Declaration, report: &Report) -> Result<(), Violation> {
    let (declaration, absence_accepted) = declaration.strip_absence();
    if absence_accepted && value.is_none() {
        return Ok(());
    }

    let result = match declaration.as_ref() {
        Declaration::Collection(_) if value.is_none() => {
            Err(report.type_mismatch(value, &declaration.describe()))
        }
        Declaration::Collection(entries) => check_collection(value, entries, report),
        Declaration::Predicate(predicate) => {
            if predicate.test(value) {
                Ok(())
            } else {
                Err(report.condition_failed(value))
            }
        }
        Declaration::NoneOnly => {
            if value.is_none() {
                Ok(())
            } else {
                Err(report.absence_expected(value))
            }
        }
        other => {
            if accepts(value, other)? {
                Ok(())
            } else {
                Err(report.type_mismatch(value, &other.describe()))
            }
        }
    };

    result.map_err(|violation| violation.within("check"))
}

fn check_collection(value: &Value, entries: &[(Type, Declaration)], report: &Report) -> Result<(), Violation> {
    let container = value.type_of();
    let Some((_, element)) = entries.iter().find(|(ty, _)| *ty == container) else {
        let containers: Vec<String> = entries.iter().map(|(ty, _)| ty.name().to_string()).collect();
        return Err(report.container_mismatch(value, &containers).within("check_collection"));
    };

    let declared = format!("{}[{}]", container.name(), element.describe().join(", "));
    let Some(items) = value.elements() else {
        return Err(report.not_iterable(value, &[declared]).within("check_collection"));
    };

    let mut offending: Vec<Value> = vec![];
    for item in items {
        if !accepts(&item, element)? {
            offending.push(item);
        }
    }
    if offending.is_empty() {
        return Ok(());
    }

    let mut offending_types: Vec<String> = vec![];
    for item in offending.iter() {
        let name = item.type_of().name().to_string();
        if !offending_types.contains(&name) {
            offending_types.push(name);
        }
    }

    Err(report
        .element_mismatch(&offending, &[declared], &offending_types)
        .within("check_collection"))
}

/// Whether `declaration` accepts `value`, without building diagnostics.
///
/// Union members are tried in order and the first acceptance wins.
pub fn accepts(value: &Value, declaration: &Declaration) -> Result<bool, Violation> {
    match declaration {
        Declaration::Exact(ty) => Ok(value.is_instance(ty)),
        Declaration::Forward(forward) => forward.is_instance(value),
        Declaration::Union(members) => {
            for member in members {
                let accepted = match member {
                    Some(declaration) => accepts(value, declaration)?,
                    None => value.is_none(),
                };
                if accepted {
                    return Ok(true);
                }
            }
            Ok(false)
        }
        Declaration::NoneOnly => Ok(value.is_none()),
        Declaration::Collection(entries) => {
            let container = value.type_of();
            let Some((_, element)) = entries.iter().find(|(ty, _)| *ty == container) else {
                return Ok(false);
            };
            let Some(items) = value.elements() else {
                return Ok(false);
            };
            for item in items {
                if !accepts(&item, element)? {
                    return Ok(false);
                }
            }
            Ok(true)
        }
        Declaration::Predicate(predicate) => Ok(predicate.test(value)),
    }
}
