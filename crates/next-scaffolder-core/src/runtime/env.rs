//! CI and network detection

use std::time::Duration;
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::debug;

/// Variables set by common CI providers
pub const CI_ENV_VARS: &[&str] = &[
    "CI",
    "CONTINUOUS_INTEGRATION",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "CIRCLECI",
    "TRAVIS",
    "JENKINS_URL",
    "BUILDKITE",
    "DRONE",
    "TEAMCITY_VERSION",
];

const REGISTRY_ADDR: &str = "registry.npmjs.org:443";
const ONLINE_TIMEOUT: Duration = Duration::from_secs(3);

/// Whether we are running under CI
pub fn is_ci() -> bool {
    is_ci_with(|name| std::env::var(name).ok())
}

/// CI detection against an arbitrary variable lookup.
///
/// Any listed variable with a non-empty value other than `false` counts.
pub fn is_ci_with<F>(lookup: F) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    CI_ENV_VARS.iter().any(|name| match lookup(name) {
        Some(value) => !value.is_empty() && !value.eq_ignore_ascii_case("false"),
        None => false,
    })
}

/// Whether the npm registry is reachable
pub async fn is_online() -> bool {
    let online = matches!(
        timeout(ONLINE_TIMEOUT, TcpStream::connect(REGISTRY_ADDR)).await,
        Ok(Ok(_))
    );
    debug!(online, "checked registry connectivity");
    online
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_no_ci_vars() {
        assert!(!is_ci_with(lookup(&[])));
        assert!(!is_ci_with(lookup(&[("HOME", "/root")])));
    }

    #[test]
    fn test_ci_values() {
        assert!(is_ci_with(lookup(&[("CI", "true")])));
        assert!(is_ci_with(lookup(&[("GITHUB_ACTIONS", "1")])));
        assert!(is_ci_with(lookup(&[("JENKINS_URL", "http://ci.local")])));
    }

    #[test]
    fn test_false_and_empty_are_ignored() {
        assert!(!is_ci_with(lookup(&[("CI", "false")])));
        assert!(!is_ci_with(lookup(&[("CI", "FALSE")])));
        assert!(!is_ci_with(lookup(&[("CI", "")])));
        assert!(is_ci_with(lookup(&[("CI", "false"), ("TRAVIS", "true")])));
    }
}
