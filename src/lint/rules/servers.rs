//! Server URL templates: placeholder resolution and URL syntax.

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use crate::document::Server;
use crate::error::Result;
use crate::lint::config::{RuleToggle, ValidationContext};
use crate::lint::rule::ValidationPass;
use crate::lint::sink::ViolationSink;
use crate::lint::url::ServerUrlValidator;
use crate::lint::violation::Section;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(.*?)\}").expect("valid regex"));

/// Resolves `{variable}` placeholders in server URLs and checks the result.
pub struct ServersPass;

impl ValidationPass for ServersPass {
    fn id(&self) -> &'static str {
        "servers"
    }

    fn name(&self) -> &'static str {
        "Servers"
    }

    fn description(&self) -> &'static str {
        "Every URL placeholder needs a declared variable and the resolved URL must be well formed"
    }

    fn section(&self) -> Section {
        Section::ApiInfo
    }

    fn toggles(&self) -> &'static [RuleToggle] {
        &[RuleToggle::ValidateServerInfo]
    }

    fn run(&self, ctx: &ValidationContext<'_>, sink: &mut ViolationSink) -> Result<()> {
        let validator = ServerUrlValidator::new(&ctx.config.additional_top_level_domains);

        for server in &ctx.document.servers {
            let Some(url) = resolve_url(server, sink) else {
                // Unresolved placeholders were already reported; the literal
                // template is not a URL worth checking.
                continue;
            };

            trace!(template = server.url.as_str(), resolved = url.as_str(), "checking server url");
            if url != "/" && !validator.is_valid(&url) {
                sink.log_invalid_server_url(&url);
            }
        }

        Ok(())
    }
}

/// Substitutes every placeholder with its variable's default value.
///
/// Returns `None` when at least one placeholder has no declared variable;
/// each such placeholder is logged to `sink`.
fn resolve_url(server: &Server, sink: &mut ViolationSink) -> Option<String> {
    let template = server.url.as_str();
    let mut resolved = String::with_capacity(template.len());
    let mut last_end = 0;
    let mut complete = true;

    for caps in PLACEHOLDER.captures_iter(template) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        resolved.push_str(&template[last_end..whole.start()]);
        match server.variables.get(name.as_str()) {
            Some(variable) => resolved.push_str(&variable.default),
            None => {
                sink.log_missing_server_attribute(template, name.as_str());
                resolved.push_str(whole.as_str());
                complete = false;
            }
        }
        last_end = whole.end();
    }
    resolved.push_str(&template[last_end..]);

    complete.then_some(resolved)
}
