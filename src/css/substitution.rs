use super::{
    CssParserValueList, CssVariableReference, CustomPropertyValue, CustomPropertyValueMap,
    SubstitutionError,
};
use crate::base::Atom;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SubstitutionSettings {
    /// How many custom properties may be expanded inside each other
    /// (`--a: var(--b)`, `--b: var(--c)`, ...).
    ///
    /// ### Default
    ///
    /// `32`.
    pub max_nesting_depth: usize,
}

impl Default for SubstitutionSettings {
    #[inline]
    fn default() -> Self {
        SubstitutionSettings {
            max_nesting_depth: 32,
        }
    }
}

/// State of a single substitution pass.
pub(crate) struct Substitution<'m> {
    custom_properties: &'m CustomPropertyValueMap,
    settings: SubstitutionSettings,
    // NOTE: custom properties currently being expanded, innermost last.
    expanding: Vec<Atom>,
}

impl<'m> Substitution<'m> {
    #[inline]
    pub fn new(
        custom_properties: &'m CustomPropertyValueMap,
        settings: &SubstitutionSettings,
    ) -> Self {
        Substitution {
            custom_properties,
            settings: *settings,
            expanding: Vec::new(),
        }
    }

    /// Appends the parser values the reference resolves to.
    pub fn substitute(
        &mut self,
        reference: &CssVariableReference,
        output: &mut CssParserValueList,
    ) -> Result<(), SubstitutionError> {
        let name = reference.name();

        if self.expanding.contains(name) {
            log::debug!("custom property `{name}` is part of a reference cycle");

            return Err(SubstitutionError::Cycle(name.to_string()));
        }

        let custom_properties = self.custom_properties;

        match custom_properties.get(name) {
            Some(CustomPropertyValue::Valid(value)) => {
                if self.expanding.len() >= self.settings.max_nesting_depth {
                    return Err(SubstitutionError::TooDeep {
                        max: self.settings.max_nesting_depth,
                    });
                }

                trace!(@substitution "expanding `{}`", name);

                self.expanding.push(name.clone());

                let result = value.append_parser_values(output, self);

                self.expanding.pop();

                result
            }
            Some(CustomPropertyValue::Invalid) => self.fallback(reference, output, || {
                SubstitutionError::InvalidCustomProperty(name.to_string())
            }),
            None => self.fallback(reference, output, || {
                SubstitutionError::UndefinedVariable(name.to_string())
            }),
        }
    }

    fn fallback(
        &mut self,
        reference: &CssVariableReference,
        output: &mut CssParserValueList,
        error: impl FnOnce() -> SubstitutionError,
    ) -> Result<(), SubstitutionError> {
        match reference.fallback() {
            Some(fallback) => {
                trace!(@substitution "using fallback for `{}`", reference.name());

                fallback.append_parser_values(output, self)
            }
            None => {
                let error = error();

                log::debug!("{error}");

                Err(error)
            }
        }
    }
}
