//! Effective scope computation

use sse_auth_domain::LoginOptions;

use super::descriptor::ProviderDescriptor;

/// Caller scope (or the provider default when empty), then the provider's
/// required scopes, then the email and profile scopes the options ask for.
///
/// Order of first appearance is kept and duplicates are dropped.
#[must_use]
pub fn effective_scope(descriptor: &ProviderDescriptor, options: &LoginOptions) -> Vec<String> {
    let base: Vec<&str> = if options.scope.is_empty() {
        descriptor.default_scope.to_vec()
    } else {
        options.scope.iter().map(String::as_str).collect()
    };

    let email = descriptor.email_scope.filter(|_| options.email_required);
    let profile = descriptor.profile_scope.filter(|_| options.profile_required.unwrap_or(true));

    let mut scope: Vec<String> = Vec::new();
    let candidates =
        base.into_iter().chain(descriptor.required_scope.iter().copied()).chain(email).chain(profile);
    for item in candidates {
        if !item.is_empty() && !scope.iter().any(|existing| existing == item) {
            scope.push(item.to_string());
        }
    }
    scope
}
