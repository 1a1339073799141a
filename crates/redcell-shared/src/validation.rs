//! Declarative form-validation rules.
//!
//! The rule set is part of the backend contract: anything these rules
//! reject is rejected server-side as well, so callers check them before
//! spending a request. File-typed fields validate the file *name*.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static DOMAIN_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_.]*$").unwrap());
static HOST_LABEL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^[0-9A-Z_.-]*$").unwrap());
static ALPHA_DASH_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^[0-9A-Z_-]*$").unwrap());
static INTEGER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-?[0-9]+$").unwrap());

/// A single constraint on a form field.
#[derive(Debug, Clone, Copy)]
pub enum Rule {
    Required,
    AlphaDash,
    Integer,
    MaxLength(usize),
    Pattern(&'static Lazy<Regex>),
    Extension(&'static str),
}

/// Validated form fields, keyed the way the backend knows them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    IspApiKey,
    IspType,
    C2ProfileName,
    C2ProfileFile,
    Domain,
    DomainIsp,
    DomainMonitorTaskName,
    DomainMonitorTaskInterval,
    VpsHostname,
    RequiredData,
    Remark,
    Url,
    Port,
    ZipFile,
}

impl FormField {
    pub const fn key(self) -> &'static str {
        match self {
            FormField::IspApiKey => "ispApiKey",
            FormField::IspType => "ispType",
            FormField::C2ProfileName => "c2ProfileName",
            FormField::C2ProfileFile => "c2ProfileFile",
            FormField::Domain => "domain",
            FormField::DomainIsp => "domainIsp",
            FormField::DomainMonitorTaskName => "domainMonitorTaskName",
            FormField::DomainMonitorTaskInterval => "domainMonitorTaskInterval",
            FormField::VpsHostname => "vpsHostname",
            FormField::RequiredData => "requiredData",
            FormField::Remark => "remark",
            FormField::Url => "url",
            FormField::Port => "port",
            FormField::ZipFile => "zipFile",
        }
    }

    pub fn rules(self) -> &'static [Rule] {
        static DOMAIN_NAME_RULES: &[Rule] = &[Rule::Required, Rule::Pattern(&DOMAIN_NAME_RE)];
        static HOST_LABEL_RULES: &[Rule] = &[Rule::Required, Rule::Pattern(&HOST_LABEL_RE)];
        match self {
            FormField::IspApiKey | FormField::IspType | FormField::DomainIsp => &[Rule::Required],
            FormField::C2ProfileName => &[Rule::Required, Rule::AlphaDash],
            FormField::C2ProfileFile => &[Rule::Required, Rule::Extension("profile")],
            FormField::Domain => DOMAIN_NAME_RULES,
            FormField::DomainMonitorTaskName => HOST_LABEL_RULES,
            FormField::DomainMonitorTaskInterval | FormField::Port => {
                &[Rule::Required, Rule::Integer]
            }
            FormField::VpsHostname => HOST_LABEL_RULES,
            FormField::RequiredData | FormField::Url => &[Rule::Required],
            FormField::Remark => &[Rule::MaxLength(50)],
            FormField::ZipFile => &[Rule::Required, Rule::Extension("zip")],
        }
    }
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    Required { field: &'static str },

    #[error("{field} may only contain letters, numbers, dashes and underscores")]
    AlphaDash { field: &'static str },

    #[error("{field} must be an integer")]
    Integer { field: &'static str },

    #[error("{field} may not be longer than {max} characters")]
    TooLong { field: &'static str, max: usize },

    #[error("{field} has an invalid format")]
    Pattern { field: &'static str },

    #[error("{field} must be a .{extension} file")]
    Extension {
        field: &'static str,
        extension: &'static str,
    },
}

/// Check one value against a field's rule list.
pub fn validate(field: FormField, value: &str) -> Result<(), ValidationError> {
    let key = field.key();
    for rule in field.rules() {
        match rule {
            Rule::Required => {
                if value.trim().is_empty() {
                    return Err(ValidationError::Required { field: key });
                }
            }
            Rule::AlphaDash => {
                if !ALPHA_DASH_RE.is_match(value) {
                    return Err(ValidationError::AlphaDash { field: key });
                }
            }
            Rule::Integer => {
                if !INTEGER_RE.is_match(value) {
                    return Err(ValidationError::Integer { field: key });
                }
            }
            Rule::MaxLength(max) => {
                if value.chars().count() > *max {
                    return Err(ValidationError::TooLong { field: key, max: *max });
                }
            }
            Rule::Pattern(pattern) => {
                if !pattern.is_match(value) {
                    return Err(ValidationError::Pattern { field: key });
                }
            }
            Rule::Extension(extension) => {
                let matches = value
                    .rsplit_once('.')
                    .map(|(_, ext)| ext.eq_ignore_ascii_case(extension))
                    .unwrap_or(false);
                if !matches {
                    return Err(ValidationError::Extension {
                        field: key,
                        extension,
                    });
                }
            }
        }
    }
    Ok(())
}
