//! Attribute overrides
//!
//! Declarations start from their defaults and are then adjusted by the attribute entries in
//! their body. Each recognised entry becomes an [`Override`] event; the events of one declaration
//! are folded left to right into [`Settings`], so a later entry for the same setting replaces an
//! earlier one.
//!
//! Which entries count depends on the declaration:
//!
//! - domain: `domainVisionStatement` from subdomain and context attributes
//! - subdomain: `type` from subdomain attributes, `domainVisionStatement` from both kinds
//! - bounded context: `type`, `domainVisionStatement`, `responsibilities`,
//!   `implementationTechnology` and `knowledgeLevel` from context attributes
//! - context map: the `type` and `state` settings
//!
//! Only the declaration's own body is read. Attributes of nested declarations belong to those.
//! Empty string values never override anything.

use crate::cml::ast::{Attribute, Body, BodyEntry, ContextMapSetting, Span};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Override {
    Type(String, Span),
    State(String),
    Vision(String),
    Responsibilities(Vec<String>),
    ImplementationTechnology(String),
    KnowledgeLevel(String),
}

/// The folded result of a declaration's overrides. `None` means "keep the default".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub type_literal: Option<String>,
    pub type_span: Option<Span>,
    pub state: Option<String>,
    pub vision: Option<String>,
    pub responsibilities: Option<Vec<String>>,
    pub implementation_technology: Option<String>,
    pub knowledge_level: Option<String>,
}

impl Settings {
    pub fn apply(mut self, event: Override) -> Self {
        match event {
            Override::Type(literal, span) => {
                self.type_literal = Some(literal);
                self.type_span = Some(span);
            }
            Override::State(state) => self.state = Some(state),
            Override::Vision(vision) => self.vision = Some(vision),
            Override::Responsibilities(items) => self.responsibilities = Some(items),
            Override::ImplementationTechnology(tech) => {
                self.implementation_technology = Some(tech)
            }
            Override::KnowledgeLevel(level) => self.knowledge_level = Some(level),
        }
        self
    }

    pub fn fold(events: impl IntoIterator<Item = Override>) -> Self {
        events.into_iter().fold(Settings::default(), Settings::apply)
    }
}

fn first_value(attr: &Attribute) -> Option<String> {
    attr.value().filter(|v| !v.is_empty()).map(str::to_string)
}

fn vision(attr: &Attribute) -> Option<Override> {
    if attr.key == "domainVisionStatement" {
        first_value(attr).map(Override::Vision)
    } else {
        None
    }
}

pub fn domain_overrides(body: &Body) -> Vec<Override> {
    body.entries
        .iter()
        .filter_map(|entry| match entry {
            BodyEntry::SubdomainAttribute(attr) | BodyEntry::ContextAttribute(attr) => {
                vision(attr)
            }
            _ => None,
        })
        .collect()
}

pub fn subdomain_overrides(body: &Body) -> Vec<Override> {
    body.entries
        .iter()
        .filter_map(|entry| match entry {
            BodyEntry::SubdomainAttribute(attr) if attr.key == "type" => {
                first_value(attr).map(|literal| Override::Type(literal, attr.span.clone()))
            }
            BodyEntry::SubdomainAttribute(attr) | BodyEntry::ContextAttribute(attr) => {
                vision(attr)
            }
            _ => None,
        })
        .collect()
}

pub fn context_overrides(body: &Body) -> Vec<Override> {
    body.entries
        .iter()
        .filter_map(|entry| match entry {
            BodyEntry::ContextAttribute(attr) => context_override(attr),
            _ => None,
        })
        .collect()
}

fn context_override(attr: &Attribute) -> Option<Override> {
    match attr.key.as_str() {
        "type" => first_value(attr).map(|t| Override::Type(t, attr.span.clone())),
        "domainVisionStatement" => vision(attr),
        "responsibilities" => {
            let items: Vec<String> = attr
                .values
                .iter()
                .map(|v| v.as_str().to_string())
                .filter(|v| !v.is_empty())
                .collect();
            (!items.is_empty()).then_some(Override::Responsibilities(items))
        }
        "implementationTechnology" => first_value(attr).map(Override::ImplementationTechnology),
        "knowledgeLevel" => first_value(attr).map(Override::KnowledgeLevel),
        _ => None,
    }
}

pub fn map_overrides(settings: &[ContextMapSetting]) -> Vec<Override> {
    settings
        .iter()
        .filter_map(|setting| match setting {
            ContextMapSetting::Type(t) if !t.is_empty() => Some(Override::Type(t.clone(), 0..0)),
            ContextMapSetting::State(s) if !s.is_empty() => Some(Override::State(s.clone())),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cml::ast::Value;

    #[test]
    fn test_later_entry_wins() {
        let body = Body::new(vec![
            BodyEntry::ContextAttribute(Attribute::string("domainVisionStatement", "first")),
            BodyEntry::ContextAttribute(Attribute::ident("type", "SYSTEM")),
            BodyEntry::ContextAttribute(Attribute::string("domainVisionStatement", "second")),
        ]);

        let settings = Settings::fold(context_overrides(&body));
        assert_eq!(settings.vision.as_deref(), Some("second"));
        assert_eq!(settings.type_literal.as_deref(), Some("SYSTEM"));
        assert_eq!(settings.state, None);
    }

    #[test]
    fn test_domain_vision_reads_both_attribute_kinds() {
        let body = Body::new(vec![
            BodyEntry::SubdomainAttribute(Attribute::string("domainVisionStatement", "one")),
            BodyEntry::ContextAttribute(Attribute::string("domainVisionStatement", "two")),
            BodyEntry::Attribute(Attribute::string("domainVisionStatement", "ignored")),
        ]);

        assert_eq!(
            Settings::fold(domain_overrides(&body)).vision.as_deref(),
            Some("two")
        );
    }

    #[test]
    fn test_subdomain_type_only_from_subdomain_attributes() {
        let body = Body::new(vec![
            BodyEntry::SubdomainAttribute(Attribute::ident("type", "CORE_DOMAIN").at(4..22)),
            BodyEntry::ContextAttribute(Attribute::ident("type", "SUPPORTING_DOMAIN")),
        ]);

        let settings = Settings::fold(subdomain_overrides(&body));
        assert_eq!(settings.type_literal.as_deref(), Some("CORE_DOMAIN"));
        assert_eq!(settings.type_span, Some(4..22));
    }

    #[test]
    fn test_responsibilities_keep_every_value() {
        let body = Body::new(vec![BodyEntry::ContextAttribute(Attribute::new(
            "responsibilities",
            vec![Value::Str("Claims".into()), Value::Str("".into()), Value::Ident("Payouts".into())],
        ))]);

        assert_eq!(
            Settings::fold(context_overrides(&body)).responsibilities,
            Some(vec!["Claims".to_string(), "Payouts".to_string()])
        );
    }

    #[test]
    fn test_empty_values_do_not_override() {
        let body = Body::new(vec![
            BodyEntry::ContextAttribute(Attribute::string("implementationTechnology", "Rust")),
            BodyEntry::ContextAttribute(Attribute::string("implementationTechnology", "")),
        ]);

        assert_eq!(
            Settings::fold(context_overrides(&body))
                .implementation_technology
                .as_deref(),
            Some("Rust")
        );
    }

    #[test]
    fn test_map_settings() {
        let settings = Settings::fold(map_overrides(&[
            ContextMapSetting::State("TO_BE".into()),
            ContextMapSetting::Type("ORGANIZATIONAL".into()),
            ContextMapSetting::State("AS_IS".into()),
        ]));
        assert_eq!(settings.type_literal.as_deref(), Some("ORGANIZATIONAL"));
        assert_eq!(settings.state.as_deref(), Some("AS_IS"));
    }
}
