//! Required API metadata: license, description and contact.

use crate::error::Result;
use crate::lint::config::{RuleToggle, ValidationContext};
use crate::lint::rule::ValidationPass;
use crate::lint::sink::ViolationSink;
use crate::lint::violation::Section;

use super::has_text;

/// Checks the `info` object for license, description and contact details.
pub struct InfoPass;

impl ValidationPass for InfoPass {
    fn id(&self) -> &'static str {
        "info"
    }

    fn name(&self) -> &'static str {
        "API Info"
    }

    fn description(&self) -> &'static str {
        "License and contact must carry at least one non-empty field; description must be present"
    }

    fn section(&self) -> Section {
        Section::ApiInfo
    }

    fn toggles(&self) -> &'static [RuleToggle] {
        &[
            RuleToggle::ValidateInfoLicense,
            RuleToggle::ValidateInfoDescription,
            RuleToggle::ValidateInfoContact,
        ]
    }

    fn run(&self, ctx: &ValidationContext<'_>, sink: &mut ViolationSink) -> Result<()> {
        let info = ctx.info;
        let config = ctx.config;

        if config.validate_info_license {
            match &info.license {
                Some(license) => {
                    let presence = [has_text(license.name.as_deref()), has_text(license.url.as_deref())];
                    require_any(sink, &presence, "license", &["name", "url"]);
                }
                None => sink.log_missing_or_empty_attribute(Section::ApiInfo, "license"),
            }
        }

        if config.validate_info_description && !has_text(info.description.as_deref()) {
            sink.log_missing_or_empty_attribute(Section::ApiInfo, "description");
        }

        if config.validate_info_contact {
            match &info.contact {
                Some(contact) => {
                    let presence = [
                        has_text(contact.name.as_deref()),
                        has_text(contact.url.as_deref()),
                        has_text(contact.email.as_deref()),
                    ];
                    require_any(sink, &presence, "contact", &["name", "url", "email"]);
                }
                None => sink.log_missing_or_empty_attribute(Section::ApiInfo, "contact"),
            }
        }

        Ok(())
    }
}

fn require_any(sink: &mut ViolationSink, presence: &[bool], parent: &str, fields: &[&str]) {
    if !presence.iter().any(|present| *present) {
        sink.log_at_least_one_of(Section::ApiInfo, parent, fields);
    }
}
