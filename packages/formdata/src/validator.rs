use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::UsageFault;
use crate::form::FormData;

/// Pattern used by [`Validator::matches_email`] and
/// [`Validator::matches_all_email`].
pub static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .unwrap()
});

/// Which half of the form a chain reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Values,
    Files,
}

/// Fluent rule chain scoped to one key of a [`FormData`].
///
/// Every rule records at most one error (one per failing element for the
/// `*_all` rules) on the form and hands the chain back, so rules compose:
///
/// ```
/// # use formdata::FormData;
/// let mut form = FormData::default();
/// form.validate("to").required().has_n_min(1).matches_all_email();
/// assert_eq!(form.errors(), vec!["'to': is required".to_string(),
///     "'to': Invalid number of elements: expected: >=1, got: 0".to_string()]);
/// ```
///
/// No rule short-circuits the chain. A missing key counts as zero elements
/// for `has_n`/`has_n_min`; combine with `required` to report absence.
#[derive(Debug)]
pub struct Validator<'a> {
    form: &'a mut FormData,
    key: String,
    target: Target,
}

impl<'a> Validator<'a> {
    pub(crate) fn new(form: &'a mut FormData, key: &str, target: Target) -> Self {
        Self {
            form,
            key: key.to_string(),
            target,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn target(&self) -> Target {
        self.target
    }

    fn count(&self) -> usize {
        match self.target {
            Target::Values => self.form.get(&self.key).len(),
            Target::Files => self.form.get_file(&self.key).len(),
        }
    }

    fn fail(&mut self, message: &str) {
        self.form.add_error(&self.key, message);
    }

    fn ensure_values(&self, rule: &'static str) -> Result<(), UsageFault> {
        match self.target {
            Target::Values => Ok(()),
            Target::Files => Err(UsageFault::ValueRuleOnFiles {
                rule,
                key: self.key.clone(),
            }),
        }
    }

    /// The key must be present in the targeted mapping.
    pub fn required(mut self) -> Self {
        let present = match self.target {
            Target::Values => self.form.exists(&self.key),
            Target::Files => self.form.file_exists(&self.key),
        };
        if !present {
            self.fail("is required");
        }
        self
    }

    /// Exactly `count` elements.
    pub fn has_n(mut self, count: usize) -> Self {
        let got = self.count();
        if got != count {
            self.fail(&format!(
                "Invalid number of elements: expected: {count}, got: {got}"
            ));
        }
        self
    }

    /// At least `count` elements.
    pub fn has_n_min(mut self, count: usize) -> Self {
        let got = self.count();
        if got < count {
            self.fail(&format!(
                "Invalid number of elements: expected: >={count}, got: {got}"
            ));
        }
        self
    }

    /// The first value must match `regex`. A missing value is tested as `""`.
    ///
    /// # Panics
    ///
    /// On a chain created with [`FormData::validate_file`]. Use
    /// [`Validator::try_matches`] to receive the [`UsageFault`] instead.
    pub fn matches(self, regex: &Regex) -> Self {
        match self.try_matches(regex) {
            Ok(chain) => chain,
            Err(fault) => panic!("{fault}"),
        }
    }

    /// Every value must match `regex`; one error per failing index.
    ///
    /// # Panics
    ///
    /// On a file chain, like [`Validator::matches`].
    pub fn matches_all(self, regex: &Regex) -> Self {
        match self.try_matches_all(regex) {
            Ok(chain) => chain,
            Err(fault) => panic!("{fault}"),
        }
    }

    pub fn matches_email(self) -> Self {
        self.matches(&EMAIL_REGEX)
    }

    pub fn matches_all_email(self) -> Self {
        self.matches_all(&EMAIL_REGEX)
    }

    pub fn try_matches(mut self, regex: &Regex) -> Result<Self, UsageFault> {
        self.ensure_values("matches")?;
        let matched = regex.is_match(self.form.get(&self.key).first());
        if !matched {
            self.fail(&format!("does not match: {}", regex.as_str()));
        }
        Ok(self)
    }

    pub fn try_matches_all(mut self, regex: &Regex) -> Result<Self, UsageFault> {
        self.ensure_values("matches_all")?;
        let failing: Vec<usize> = self
            .form
            .get(&self.key)
            .iter()
            .enumerate()
            .filter(|(_, value)| !regex.is_match(value))
            .map(|(index, _)| index)
            .collect();
        for index in failing {
            self.fail(&format!(
                "Element {index} does not match: {}",
                regex.as_str()
            ));
        }
        Ok(self)
    }

    pub fn try_matches_email(self) -> Result<Self, UsageFault> {
        self.try_matches(&EMAIL_REGEX)
    }

    pub fn try_matches_all_email(self) -> Result<Self, UsageFault> {
        self.try_matches_all(&EMAIL_REGEX)
    }
}
